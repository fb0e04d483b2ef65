//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the web shim and the catalog/domain layers. It
//! implements the event-driven flow behind the listing page.
//!
//! # Architecture
//!
//! ```text
//! Browser Event → Event → Event Handler → State Mutations → Actions → DOM
//! ```
//!
//! # Modules
//!
//! - [`actions`]: DOM mutations emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Sort criterion and deployment mode types
//! - [`navigation`]: Date change handling and mode resolution
//! - [`sort`]: Listing order computation
//! - [`state`]: Page state container and the filter engine

pub mod actions;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod sort;
pub mod state;

pub use actions::{Action, RevealTarget};
pub use handler::{handle_event, Event};
pub use modes::{DeploymentMode, SortKey};
pub use state::AppState;
