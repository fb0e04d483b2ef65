//! Handles to the page's DOM nodes and the card reader.

use std::collections::BTreeMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::app::navigation::PageLocation;
use crate::catalog::CardSource;
use crate::domain::{CardFields, NodeId, Result, ShelfError};
use crate::Config;

pub const CONFIG_BLOCK_ID: &str = "shelf-config";

/// DOM nodes the page touches, looked up once at mount.
///
/// Optional nodes may be missing from a given page variant; actions that
/// target them become no-ops.
#[derive(Debug, Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub grid: Option<Element>,
    pub cards: Vec<HtmlElement>,
    pub featured: Vec<HtmlElement>,
    pub no_results: Option<HtmlElement>,
    pub header: Option<Element>,
    pub last_update: Option<Element>,
    pub date_notice: Option<Element>,
}

impl Page {
    /// Looks up every node the page needs.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window or document.
    pub fn mount() -> Result<Self> {
        let window = web_sys::window().ok_or(ShelfError::MissingElement("window"))?;
        let document = window.document().ok_or(ShelfError::MissingElement("document"))?;

        let page = Self {
            grid: query(&document, ".books-grid"),
            cards: query_all(&document, ".book-card"),
            featured: query_all(&document, ".featured-book-card"),
            no_results: query(&document, ".no-results").and_then(|e| e.dyn_into().ok()),
            header: query(&document, "header"),
            last_update: query(&document, ".last-update"),
            date_notice: query(&document, ".date-notice"),
            window,
            document,
        };

        tracing::debug!(
            cards = page.cards.len(),
            featured = page.featured.len(),
            has_grid = page.grid.is_some(),
            has_no_results = page.no_results.is_some(),
            "page mounted"
        );
        Ok(page)
    }

    #[must_use]
    pub fn card(&self, node: NodeId) -> Option<&HtmlElement> {
        self.cards.get(node.index())
    }

    /// Current location, reduced to the parts mode detection and date URLs use.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Dom`] if the location cannot be read.
    pub fn location(&self) -> Result<PageLocation> {
        read_location(&self.window)
    }
}

/// Reads the configuration from the JSON block and `<body>` data attributes.
///
/// A malformed JSON block is logged and ignored; attributes still apply.
#[must_use]
pub fn load_config(document: &Document) -> Config {
    let base = document
        .get_element_by_id(CONFIG_BLOCK_ID)
        .and_then(|block| block.text_content())
        .map_or_else(Config::default, |text| match Config::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!("shelfview: ignoring #{CONFIG_BLOCK_ID}: {e}")));
                Config::default()
            }
        });

    let Some(body) = document.body() else {
        return base;
    };

    let dataset: BTreeMap<String, String> = Config::DATASET_KEYS
        .iter()
        .filter_map(|key| {
            body.get_attribute(&format!("data-{key}"))
                .map(|value| ((*key).to_string(), value))
        })
        .collect();

    base.with_overrides(&dataset)
}

/// Reads protocol, path and query from `window.location`.
///
/// # Errors
///
/// Returns [`ShelfError::Dom`] if any part cannot be read.
pub fn read_location(window: &Window) -> Result<PageLocation> {
    let location = window.location();
    let protocol = location.protocol().map_err(dom_error)?;
    let pathname = location.pathname().map_err(dom_error)?;
    let search = location.search().map_err(dom_error)?;
    Ok(PageLocation::new(&protocol, &pathname, &search))
}

pub fn dom_error(value: JsValue) -> ShelfError {
    ShelfError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Reads listing card fields from rendered `.book-card` nodes.
pub struct DomCards<'a>(pub &'a [HtmlElement]);

impl CardSource for DomCards<'_> {
    fn read_cards(&self) -> Vec<CardFields> {
        self.0.iter().map(read_card).collect()
    }
}

fn read_card(card: &HtmlElement) -> CardFields {
    let text = |selector: &str| {
        card.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|node| node.text_content())
    };

    let pub_date = card.query_selector(".book-pub-date").ok().flatten();

    CardFields {
        title: text(".book-title"),
        author: text(".book-author"),
        publisher: text(".book-publisher"),
        category: text(".book-category"),
        pub_date_attr: card.get_attribute("data-pub-date"),
        pub_date_child_attr: pub_date
            .as_ref()
            .and_then(|node| node.get_attribute("data-pub-date")),
        pub_date_text: pub_date.and_then(|node| node.text_content()),
        inline_display: card.style().get_property_value("display").unwrap_or_default(),
    }
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(selector = selector, error = %dom_error(e), "invalid selector");
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        tracing::warn!(selector = selector, "invalid selector");
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
