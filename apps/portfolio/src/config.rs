use anyhow::{Context, Result};

use crate::contact::CONTACT_PATH;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory served under `/static` (profile image, project logos, CV).
    pub assets_dir: String,
    /// Where the submission controller posts contact messages.
    pub contact_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from a variable lookup; `None` means unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let contact_endpoint = match lookup("CONTACT_ENDPOINT") {
            Some(url) => {
                reqwest::Url::parse(&url)
                    .with_context(|| format!("CONTACT_ENDPOINT '{url}' is not a valid URL"))?;
                url
            }
            None => default_contact_endpoint(port),
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            assets_dir: lookup("ASSETS_DIR").unwrap_or_else(|| "public".to_string()),
            contact_endpoint,
        })
    }
}

fn default_contact_endpoint(port: u16) -> String {
    format!("http://127.0.0.1:{port}{CONTACT_PATH}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.assets_dir, "public");
        assert_eq!(config.contact_endpoint, "http://127.0.0.1:8080/api/contact");
    }

    #[test]
    fn test_default_contact_endpoint_follows_port() {
        let config = config_from(&[("PORT", "3000")]).unwrap();
        assert_eq!(config.contact_endpoint, "http://127.0.0.1:3000/api/contact");
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));

        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_invalid_contact_endpoint_fails() {
        let err = config_from(&[("CONTACT_ENDPOINT", "not a url")]).unwrap_err();
        assert!(err.to_string().contains("CONTACT_ENDPOINT 'not a url'"));
    }

    #[test]
    fn test_explicit_contact_endpoint_is_kept() {
        let config =
            config_from(&[("CONTACT_ENDPOINT", "https://example.com/api/contact")]).unwrap();
        assert_eq!(config.contact_endpoint, "https://example.com/api/contact");
    }
}
