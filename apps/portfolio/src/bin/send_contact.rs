//! Sends one contact message through the submission controller.
//!
//! Usage: send_contact <name> <email> <subject> <message>
//! The target is `CONTACT_ENDPOINT` (defaults to the local server).

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use portfolio::config::Config;
use portfolio::contact::{FormField, HttpContactTransport, SubmissionController};
use portfolio::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config.rust_log);

    let values: Vec<String> = std::env::args().skip(1).collect();
    if values.len() != FormField::ALL.len() {
        bail!("usage: send_contact <name> <email> <subject> <message>");
    }

    let transport = HttpContactTransport::new(config.contact_endpoint.clone())
        .context("Failed to build HTTP client")?;
    let controller = SubmissionController::new(Arc::new(transport));

    for (field, value) in FormField::ALL.into_iter().zip(values) {
        controller.update_field(field, value).await;
    }

    controller
        .submit()
        .await
        .with_context(|| format!("Could not deliver message to {}", config.contact_endpoint))?;

    info!("Message delivered to {}", config.contact_endpoint);
    Ok(())
}
