//! shelfview: live filtering, sorting and date navigation for a book listing page.
//!
//! The crate compiles to WebAssembly and attaches itself to a server-rendered
//! page listing newly released books. It provides:
//! - Live text filtering across title, author, publisher and category
//! - Column sorting with Korean dictionary collation
//! - Date-driven navigation, or an in-page notice on static deployments
//! - Staggered reveal animation on load and a scroll-aware header

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Web Shim (web/, wasm32 only)                       │  ← Entry point
//! │  - DOM reads, listeners, action execution           │
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ▼   ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, filter, sort, navigation         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ Catalog (catalog/)    │   │ Domain (domain/)      │
//! │ - Read-once index     │   │ - Book records        │
//! │ - Korean collation    │   │ - Error types         │
//! └───────────────────────┘   └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber writing to the console        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Everything except `web` is DOM-free and runs on any target, which is how
//! the filter and sort behavior is tested.
//!
//! # Configuration
//!
//! The page can carry a JSON block and/or `data-*` attributes on `<body>`:
//!
//! ```html
//! <script type="application/json" id="shelf-config">
//!   { "mode": "dynamic", "listing_stagger_ms": 30 }
//! </script>
//! <body data-mode="static" data-trace-level="debug">
//! ```
//!
//! Attributes override the JSON block.
//!
//! # Example
//!
//! ```rust
//! use shelfview::app::navigation::PageLocation;
//! use shelfview::domain::CardFields;
//! use shelfview::{handle_event, initialize, Action, Config, Event};
//!
//! let cards = vec![
//!     CardFields::new("작별하지 않는다", "한강", "문학동네"),
//!     CardFields::new("The Pragmatic Programmer", "David Thomas", "Addison-Wesley"),
//! ];
//! let mut state = initialize(&Config::default(), &cards, PageLocation::default());
//!
//! let actions = handle_event(&mut state, &Event::SearchInput { query: "pragmatic".into() })?;
//! assert_eq!(actions.last(), Some(&Action::ShowNoResults(false)));
//! # Ok::<(), shelfview::ShelfError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;

pub mod observability;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{handle_event, Action, AppState, DeploymentMode, Event, SortKey};
pub use catalog::{CardSource, CatalogIndex};
pub use domain::{BookRecord, Result, ShelfError};

use app::navigation::PageLocation;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Page configuration.
///
/// Every field has a default, so an absent or partial configuration is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit deployment mode.
    ///
    /// When `None`, the mode is inferred from the page location (`file:` or
    /// no query string means static).
    pub mode: Option<DeploymentMode>,

    /// Vertical scroll offset in CSS pixels above which the header is marked
    /// `scrolled`. Default: 50
    pub header_scroll_threshold: f64,

    /// Delay step between featured card reveals. Default: 100 ms
    pub featured_stagger_ms: u32,

    /// Delay step between listing card reveals. Default: 50 ms
    pub listing_stagger_ms: u32,

    /// Quiet period before a search keystroke is applied.
    ///
    /// `0` filters on every input event. Default: 0
    pub search_debounce_ms: u32,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: None,
            header_scroll_threshold: 50.0,
            featured_stagger_ms: 100,
            listing_stagger_ms: 50,
            search_debounce_ms: 0,
            trace_level: None,
        }
    }
}

impl Config {
    /// Attribute names read from `<body>` (without the `data-` prefix).
    pub const DATASET_KEYS: [&'static str; 6] = [
        "mode",
        "scroll-threshold",
        "featured-stagger",
        "listing-stagger",
        "search-debounce",
        "trace-level",
    ];

    /// Parses configuration from the page's JSON configuration block.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Json`] if the text is not a valid configuration
    /// object.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelfview::{Config, DeploymentMode};
    ///
    /// let config = Config::from_json(r#"{ "mode": "static", "listing_stagger_ms": 20 }"#)?;
    /// assert_eq!(config.mode, Some(DeploymentMode::Static));
    /// assert_eq!(config.listing_stagger_ms, 20);
    /// assert_eq!(config.featured_stagger_ms, 100);
    /// # Ok::<(), shelfview::ShelfError>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Applies `data-*` attribute overrides on top of this configuration.
    ///
    /// Keys are attribute names without the `data-` prefix (see
    /// [`Config::DATASET_KEYS`]). Values that fail to parse are ignored and
    /// the current value is kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shelfview::{Config, DeploymentMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("mode".to_string(), "dynamic".to_string());
    /// map.insert("scroll-threshold".to_string(), "80".to_string());
    /// map.insert("listing-stagger".to_string(), "fast".to_string());
    ///
    /// let config = Config::default().with_overrides(&map);
    /// assert_eq!(config.mode, Some(DeploymentMode::Dynamic));
    /// assert_eq!(config.header_scroll_threshold, 80.0);
    /// assert_eq!(config.listing_stagger_ms, 50);
    /// ```
    #[must_use]
    pub fn with_overrides(mut self, dataset: &BTreeMap<String, String>) -> Self {
        if let Some(value) = dataset.get("mode") {
            match value.parse::<DeploymentMode>() {
                Ok(mode) => self.mode = Some(mode),
                Err(e) => tracing::debug!(error = %e, "ignoring data-mode"),
            }
        }

        if let Some(threshold) = parse_override(dataset, "scroll-threshold") {
            self.header_scroll_threshold = threshold;
        }
        if let Some(step) = parse_override(dataset, "featured-stagger") {
            self.featured_stagger_ms = step;
        }
        if let Some(step) = parse_override(dataset, "listing-stagger") {
            self.listing_stagger_ms = step;
        }
        if let Some(quiet) = parse_override(dataset, "search-debounce") {
            self.search_debounce_ms = quiet;
        }
        if let Some(level) = dataset.get("trace-level").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            self.trace_level = Some(level.to_string());
        }

        self
    }
}

fn parse_override<T: std::str::FromStr>(dataset: &BTreeMap<String, String>, key: &str) -> Option<T> {
    let raw = dataset.get(key)?;
    let parsed = raw.trim().parse::<T>().ok();
    if parsed.is_none() {
        tracing::debug!(key = key, value = %raw, "ignoring unparseable data attribute");
    }
    parsed
}

/// Builds page state from configuration and the rendered cards.
///
/// Indexes the cards once, resolves the deployment mode and returns an
/// `AppState` ready for event processing.
pub fn initialize<S: CardSource + ?Sized>(config: &Config, cards: &S, location: PageLocation) -> AppState {
    tracing::debug!("initializing shelf page");

    let catalog = CatalogIndex::build(cards);
    let state = AppState::new(catalog, config, location);

    tracing::info!(
        records = state.catalog.len(),
        mode = ?state.mode,
        "shelf page initialized"
    );
    state
}
