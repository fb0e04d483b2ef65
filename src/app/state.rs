//! Page state and the filter engine.
//!
//! This module defines [`AppState`], the component-scoped state object built
//! once when the document is ready and handed to every event handler. It owns
//! the catalog index and the derived display state (which cards are visible,
//! in what order) so that handlers never have to read it back from the DOM.
//!
//! # State Components
//!
//! - **Catalog**: Normalized records, fixed for the page lifetime
//! - **Search Query**: Raw text of the search input
//! - **Visibility**: One flag per record, in catalog order
//! - **Order**: Current on-screen order of the listing cards
//! - **Deployment Mode**: Resolved once from configuration and location
//!
//! # Example
//!
//! ```rust
//! use shelfview::app::AppState;
//! use shelfview::app::navigation::PageLocation;
//! use shelfview::catalog::CatalogIndex;
//! use shelfview::domain::CardFields;
//! use shelfview::Config;
//!
//! let cards = vec![CardFields::new("채식주의자", "한강", "창비")];
//! let mut state = AppState::new(CatalogIndex::build(&cards), &Config::default(), PageLocation::default());
//! state.search_query = "한강".to_string();
//! state.apply_search_filter();
//! assert_eq!(state.visible_count(), 1);
//! ```

use super::actions::{Action, RevealTarget};
use super::modes::{DeploymentMode, SortKey};
use super::navigation::{resolve_mode, PageLocation};
use super::sort::sorted_order;
use crate::catalog::CatalogIndex;
use crate::domain::NodeId;
use crate::Config;

/// Central page state container.
///
/// Mutated by [`handle_event`](super::handle_event) only. All fields are
/// derived from the catalog plus the last input of each control.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-once index of the listing cards.
    pub catalog: CatalogIndex,

    /// Current text of the search input, as typed.
    ///
    /// Normalized (trimmed, lowercased) only when the filter runs.
    pub search_query: String,

    /// Criterion of the last sort.
    pub sort_key: SortKey,

    /// Visibility flag per record, indexed by [`NodeId`].
    pub visible: Vec<bool>,

    /// Current on-screen order of the listing cards.
    pub order: Vec<NodeId>,

    /// Whether the "no results" indicator is showing.
    pub no_results: bool,

    /// How date changes are handled.
    pub mode: DeploymentMode,

    /// Where the page was loaded from.
    pub location: PageLocation,

    /// Animation and scroll tuning.
    pub config: Config,
}

impl AppState {
    /// Creates page state over a freshly built catalog.
    ///
    /// Every card starts visible and in document order. The deployment mode
    /// is resolved here, once, from the configured flag or the location.
    #[must_use]
    pub fn new(catalog: CatalogIndex, config: &Config, location: PageLocation) -> Self {
        let visible = vec![true; catalog.len()];
        let order = (0..catalog.len()).map(NodeId).collect();
        let mode = resolve_mode(config.mode, &location);

        Self {
            catalog,
            search_query: String::new(),
            sort_key: SortKey::None,
            visible,
            order,
            no_results: false,
            mode,
            location,
            config: config.clone(),
        }
    }

    /// Re-evaluates every record against the current search query.
    ///
    /// The query is trimmed and lowercased, then a record is visible iff the
    /// query is empty or occurs in its title, author, publisher or category.
    /// Afterwards the "no results" flag is set iff nothing is visible. The
    /// listing order is not touched.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the record count and query length.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!("apply_search_filter",
            total_records = self.catalog.len(),
            query_len = self.search_query.len()
        ).entered();

        let term = self.search_query.trim().to_lowercase();

        self.visible = self
            .catalog
            .records()
            .iter()
            .map(|record| record.matches(&term))
            .collect();

        self.no_results = self.visible_count() == 0;

        tracing::debug!(
            visible_count = self.visible_count(),
            no_results = self.no_results,
            "search filter applied"
        );
    }

    /// Reorders the listing for a sort key.
    pub fn apply_sort(&mut self, key: SortKey) {
        self.sort_key = key;
        self.order = sorted_order(&self.catalog, key);
        tracing::debug!(sort_key = key.as_str(), "listing reordered");
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Nodes currently visible, in catalog order.
    #[must_use]
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Display actions mirroring the current visibility state.
    ///
    /// One show or hide per record, followed by the "no results" toggle.
    #[must_use]
    pub fn visibility_actions(&self) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .catalog
            .records()
            .iter()
            .zip(&self.visible)
            .map(|(record, visible)| {
                if *visible {
                    Action::ShowCard {
                        node: record.node,
                        display: record.display.clone(),
                    }
                } else {
                    Action::HideCard { node: record.node }
                }
            })
            .collect();
        actions.push(Action::ShowNoResults(self.no_results));
        actions
    }

    /// Staggered reveal steps for the load animation.
    ///
    /// Featured cards step by `featured_stagger_ms`, listing cards (denser)
    /// by `listing_stagger_ms`, each starting at zero. Listing cards are
    /// revealed in their current on-screen order.
    #[must_use]
    pub fn reveal_actions(&self, featured_cards: usize) -> Vec<Action> {
        let featured = (0..featured_cards).map(|i| Action::Reveal {
            target: RevealTarget::Featured(i),
            delay_ms: stagger(i, self.config.featured_stagger_ms),
        });
        let listing = self.order.iter().enumerate().map(|(i, node)| Action::Reveal {
            target: RevealTarget::Book(*node),
            delay_ms: stagger(i, self.config.listing_stagger_ms),
        });
        featured.chain(listing).collect()
    }

    /// Whether the header should carry the `scrolled` marker at `offset_y`.
    #[must_use]
    pub fn header_scrolled(&self, offset_y: f64) -> bool {
        offset_y > self.config.header_scroll_threshold
    }
}

fn stagger(position: usize, step_ms: u32) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX).saturating_mul(step_ms)
}
