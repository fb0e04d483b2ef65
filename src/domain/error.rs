//! Error types for the shelf page.
//!
//! This module defines the centralized error type [`ShelfError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with the
//! `thiserror` crate.
//!
//! Most page behavior has no failure path: missing card fields normalize to
//! empty strings and missing optional controls disable their feature. Errors
//! surface only at the edges, when the browser refuses a DOM call or the
//! page configuration cannot be read.

use thiserror::Error;

/// The main error type for shelf page operations.
///
/// # Examples
///
/// ```
/// use shelfview::ShelfError;
///
/// fn require_grid(found: bool) -> Result<(), ShelfError> {
///     if found {
///         Ok(())
///     } else {
///         Err(ShelfError::MissingElement(".books-grid"))
///     }
/// }
///
/// assert!(require_grid(false).is_err());
/// ```
#[derive(Debug, Error)]
pub enum ShelfError {
    /// A browser DOM call failed.
    ///
    /// The string carries the stringified JavaScript exception.
    #[error("DOM error: {0}")]
    Dom(String),

    /// A required page element is not present in the document.
    ///
    /// Holds the selector that was queried.
    #[error("Missing element: {0}")]
    MissingElement(&'static str),

    /// Configuration is invalid.
    ///
    /// Occurs when a configuration value is present but malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The JSON configuration block could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for shelf page operations.
pub type Result<T> = std::result::Result<T, ShelfError>;
