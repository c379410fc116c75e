//! The fixed set of gallery filters.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// The active filter of the project gallery.
///
/// `All` is the universal sentinel; every other variant corresponds to a tag
/// carried by projects in the category index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Ecommerce,
    B2bEcommerce,
    WordPress,
    ReactNext,
    Cms,
    Corporate,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Display order of the filter buttons, "All" first.
    pub const ALL_VARIANTS: [Category; 7] = [
        Category::All,
        Category::Ecommerce,
        Category::B2bEcommerce,
        Category::WordPress,
        Category::ReactNext,
        Category::Cms,
        Category::Corporate,
    ];

    /// The tag string used both as the button label and as the project tag.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Ecommerce => "E-commerce",
            Category::B2bEcommerce => "B2B E-commerce",
            Category::WordPress => "WordPress",
            Category::ReactNext => "React/Next.js",
            Category::Cms => "CMS",
            Category::Corporate => "Corporate",
        }
    }

    /// Case-insensitive lookup by label. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, UnknownCategory> {
        let wanted = raw.trim();
        Self::ALL_VARIANTS
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(raw.to_string()))
    }

    pub fn is_all(self) -> bool {
        self == Category::All
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("wordpress"), Ok(Category::WordPress));
        assert_eq!(Category::parse("  react/next.js "), Ok(Category::ReactNext));
        assert_eq!(Category::parse("ALL"), Ok(Category::All));
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        assert_eq!(
            Category::parse("Machine Learning"),
            Err(UnknownCategory("Machine Learning".to_string()))
        );
    }

    #[test]
    fn test_every_label_parses_back() {
        for category in Category::ALL_VARIANTS {
            assert_eq!(Category::parse(category.label()), Ok(category));
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::B2bEcommerce).unwrap();
        assert_eq!(json, "\"B2B E-commerce\"");
    }
}
