//! Event handling and state transition logic.
//!
//! This module implements the handler that turns page events into state
//! changes and action sequences. It is the only place [`AppState`] is mutated.
//!
//! # Architecture
//!
//! 1. The web shim translates a browser event into an [`Event`]
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned to the shim for execution
//!
//! # Example
//!
//! ```rust
//! use shelfview::app::{handle_event, Action, AppState, Event};
//! use shelfview::app::navigation::PageLocation;
//! use shelfview::catalog::CatalogIndex;
//! use shelfview::Config;
//!
//! let mut state = AppState::new(CatalogIndex::default(), &Config::default(), PageLocation::default());
//! let actions = handle_event(&mut state, &Event::Scrolled { offset_y: 120.0 })?;
//! assert_eq!(actions, vec![Action::SetHeaderScrolled(true)]);
//! # Ok::<(), shelfview::ShelfError>(())
//! ```

use super::modes::SortKey;
use super::navigation::date_change_actions;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events raised by the page.
///
/// Each event is processed to completion before the next one; the page runs
/// on a single-threaded event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The search input changed. Carries the full input value.
    SearchInput { query: String },

    /// The sort selector changed. Carries the raw `<select>` value.
    SortChanged { criterion: String },

    /// A date was picked in the date selector.
    DateChanged { date: String },

    /// The page finished loading (images included).
    PageLoaded {
        /// Number of `.featured-book-card` nodes on the page.
        featured_cards: usize,
    },

    /// The window scrolled. Carries the vertical scroll offset in CSS pixels.
    Scrolled { offset_y: f64 },
}

/// Processes an event, mutates page state, and returns actions to execute.
///
/// # Returns
///
/// Actions to execute in sequence. Empty when the event needs no DOM change,
/// e.g. an empty date.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's call site uniform
/// with the rest of the crate.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchInput { query } => {
            state.search_query.clone_from(query);
            tracing::trace!(query = %state.search_query, "search query updated");
            state.apply_search_filter();
            Ok(state.visibility_actions())
        }
        Event::SortChanged { criterion } => {
            let key = SortKey::parse(criterion);
            if key == SortKey::None && !criterion.trim().is_empty() && criterion.trim() != "none" {
                tracing::debug!(criterion = %criterion, "unrecognized sort criterion, restoring document order");
            }
            state.apply_sort(key);
            Ok(vec![Action::Reorder(state.order.clone())])
        }
        Event::DateChanged { date } => Ok(date_change_actions(date, state.mode, &state.location)),
        Event::PageLoaded { featured_cards } => {
            tracing::debug!(
                featured_cards = featured_cards,
                listing_cards = state.order.len(),
                "page loaded, scheduling reveal"
            );
            Ok(state.reveal_actions(*featured_cards))
        }
        Event::Scrolled { offset_y } => Ok(vec![Action::SetHeaderScrolled(state.header_scrolled(*offset_y))]),
    }
}
