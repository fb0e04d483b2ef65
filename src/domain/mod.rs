//! Domain layer for the shelf page.
//!
//! Core types independent of the browser: the normalized book record, the
//! raw card fields it is built from, and the crate's error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book record model and field normalization

pub mod book;
pub mod error;

pub use book::{BookRecord, CardFields, NodeId};
pub use error::{Result, ShelfError};
