//! Catalog layer: the read-once index of book cards.
//!
//! # Modules
//!
//! - `source`: Trait abstraction over where card text comes from
//! - `index`: The normalized record list built at startup
//! - `collation`: Korean dictionary ordering used by the sort engine

pub mod collation;
pub mod index;
pub mod source;

pub use index::CatalogIndex;
pub use source::CardSource;
