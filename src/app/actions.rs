//! Actions representing DOM mutations to be executed by the web shim.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler. Actions are the boundary between the DOM-free core and
//! the browser: the handler decides *what* changes, the shim performs it.
//!
//! # Example
//!
//! ```rust
//! use shelfview::app::Action;
//! use shelfview::domain::NodeId;
//!
//! let actions = vec![
//!     Action::HideCard { node: NodeId(0) },
//!     Action::ShowNoResults(true),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::NodeId;

/// Card that a reveal animation step applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    /// The n-th `.featured-book-card` in document order.
    Featured(usize),
    /// A listing card from the catalog.
    Book(NodeId),
}

/// Commands executed by the web shim, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Puts a card back into the layout.
    ShowCard {
        node: NodeId,
        /// Inline `display` value to restore; empty removes the inline
        /// override so the stylesheet's layout mode applies.
        display: String,
    },

    /// Removes a card from the layout (`display: none`).
    HideCard { node: NodeId },

    /// Shows or hides the "no results" indicator.
    ShowNoResults(bool),

    /// Re-appends every listing card to the grid in the given order.
    ///
    /// The nodes are moved, not cloned, so listeners and element state survive.
    Reorder(Vec<NodeId>),

    /// Full page navigation to `url`.
    Navigate { url: String },

    /// In-page acknowledgment of a date change in static mode.
    ShowNotice { message: String },

    /// Replaces the text of the "last updated" label.
    SetLastUpdated { text: String },

    /// Fades a card in after `delay_ms`.
    ///
    /// Fire-and-forget; there is no cancellation path.
    Reveal { target: RevealTarget, delay_ms: u32 },

    /// Adds (`true`) or removes (`false`) the `scrolled` class on the header.
    SetHeaderScrolled(bool),
}
