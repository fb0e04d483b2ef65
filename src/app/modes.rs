//! Sort criterion and deployment mode types.
//!
//! These enums select how the listing is ordered and how a date change is
//! handled. Both are parsed from loosely-typed page input (a `<select>` value,
//! a configuration string) and never fail: unknown sort values fall back to
//! [`SortKey::None`], unknown modes are rejected so the caller can keep its
//! default.
//!
//! # Example
//!
//! ```rust
//! use shelfview::app::modes::{DeploymentMode, SortKey};
//!
//! assert_eq!(SortKey::parse("pub_date"), SortKey::PubDate);
//! assert_eq!(SortKey::parse("price"), SortKey::None);
//! assert_eq!("static".parse::<DeploymentMode>().ok(), Some(DeploymentMode::Static));
//! ```

use crate::domain::ShelfError;
use serde::Deserialize;
use std::str::FromStr;

/// Column the listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Korean collation on the title, ascending.
    Title,
    /// Korean collation on the author, ascending.
    Author,
    /// Korean collation on the publisher, ascending.
    Publisher,
    /// String order on the publication date, newest first.
    PubDate,
    /// Initial document order.
    #[default]
    None,
}

impl SortKey {
    /// Parses a sort `<select>` value.
    ///
    /// Accepts `title`, `author`, `publisher`, `pub_date` and `pubDate`.
    /// Anything else, including the empty placeholder option, is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "title" => Self::Title,
            "author" => Self::Author,
            "publisher" => Self::Publisher,
            "pub_date" | "pubDate" => Self::PubDate,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Publisher => "publisher",
            Self::PubDate => "pub_date",
            Self::None => "none",
        }
    }
}

/// How the page reacts to a date change.
///
/// # Variants
///
/// - `Static`: No backend is reachable; the date change only updates the
///   display and shows a notice.
/// - `Dynamic`: A backend re-renders the page for a `date` query parameter;
///   the date change navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    Static,
    Dynamic,
}

impl FromStr for DeploymentMode {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "dynamic" => Ok(Self::Dynamic),
            other => Err(ShelfError::Config(format!("unknown deployment mode `{other}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse_round_trips_known_values() {
        for key in [SortKey::Title, SortKey::Author, SortKey::Publisher, SortKey::PubDate] {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::parse("pubDate"), SortKey::PubDate);
        assert_eq!(SortKey::parse(""), SortKey::None);
        assert_eq!(SortKey::parse("none"), SortKey::None);
    }

    #[test]
    fn test_deployment_mode_rejects_unknown() {
        assert_eq!(" Dynamic ".parse::<DeploymentMode>().ok(), Some(DeploymentMode::Dynamic));
        assert!("serverless".parse::<DeploymentMode>().is_err());
    }
}
