//! Book record domain model.
//!
//! This module defines [`BookRecord`], the normalized in-memory representation
//! of one book card on the listing page, together with the raw [`CardFields`]
//! it is built from and the [`NodeId`] handle that ties a record back to its
//! visual node.

/// Non-owning handle to a card node in the document.
///
/// The document owns the node. The web shim keeps the element list and
/// resolves a `NodeId` by its position in the initial document order, so the
/// handle stays valid across reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Returns the position of the node in the initial document order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Raw text extracted from one card node, before normalization.
///
/// Every field is optional because the markup contract is loose: a card that
/// lacks a descendant simply yields `None` for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub category: Option<String>,
    /// Value of the card's own `data-pub-date` attribute.
    pub pub_date_attr: Option<String>,
    /// `data-pub-date` on the card's publication date descendant.
    pub pub_date_child_attr: Option<String>,
    /// Text of the card's publication date descendant.
    pub pub_date_text: Option<String>,
    /// Inline `display` value the card had when the page loaded.
    ///
    /// Empty when the card had no inline override, which is the usual case.
    pub inline_display: String,
}

impl CardFields {
    /// Creates card fields with the three always-rendered text fields set.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfview::domain::CardFields;
    ///
    /// let fields = CardFields::new("채식주의자", "한강", "창비");
    /// assert_eq!(fields.author.as_deref(), Some("한강"));
    /// assert!(fields.category.is_none());
    /// ```
    #[must_use]
    pub fn new(title: &str, author: &str, publisher: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            publisher: Some(publisher.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    #[must_use]
    pub fn with_pub_date(mut self, pub_date: &str) -> Self {
        self.pub_date_attr = Some(pub_date.to_string());
        self
    }
}

/// Normalized searchable and sortable fields of one book.
///
/// Built once when the catalog is indexed and never updated afterwards. If
/// the card's text changes later, the record is stale.
///
/// # Fields
///
/// - `node`: Handle to the backing card node
/// - `title`, `author`, `publisher`: Trimmed lowercase text, empty when absent
/// - `category`: Trimmed lowercase text when the card renders one
/// - `pub_date`: Raw publication date string, used only as a sort key
/// - `display`: Inline `display` value to restore when the card is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub node: NodeId,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub category: Option<String>,
    pub pub_date: Option<String>,
    pub display: String,
}

impl BookRecord {
    /// Builds a record from raw card fields.
    ///
    /// Text fields are trimmed and lowercased. The publication date prefers
    /// the card's `data-pub-date`, then the date node's `data-pub-date`, then
    /// the date node's text;
    /// it is trimmed but keeps its case since it is only compared as a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfview::domain::{BookRecord, CardFields, NodeId};
    ///
    /// let fields = CardFields::new("  The Rust Book ", "Steve Klabnik", "No Starch");
    /// let record = BookRecord::from_fields(NodeId(0), &fields);
    /// assert_eq!(record.title, "the rust book");
    /// assert_eq!(record.pub_date, None);
    /// ```
    #[must_use]
    pub fn from_fields(node: NodeId, fields: &CardFields) -> Self {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().map(str::trim).filter(|d| !d.is_empty())
        }
        let pub_date = non_empty(&fields.pub_date_attr)
            .or_else(|| non_empty(&fields.pub_date_child_attr))
            .or_else(|| fields.pub_date_text.as_deref().map(str::trim))
            .map(String::from);

        Self {
            node,
            title: normalize(fields.title.as_deref()),
            author: normalize(fields.author.as_deref()),
            publisher: normalize(fields.publisher.as_deref()),
            category: fields.category.as_deref().map(|c| normalize(Some(c))),
            pub_date,
            display: fields.inline_display.clone(),
        }
    }

    /// Returns `true` if `term` occurs in any indexed text field.
    ///
    /// `term` must already be normalized (trimmed and lowercased). An empty
    /// term matches every record. A missing category never matches.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty()
            || self.title.contains(term)
            || self.author.contains(term)
            || self.publisher.contains(term)
            || self.category.as_deref().is_some_and(|c| c.contains(term))
    }

    /// Publication date sort key; missing dates sort as the empty string.
    #[must_use]
    pub fn pub_date_key(&self) -> &str {
        self.pub_date.as_deref().unwrap_or("")
    }
}

/// Trims and lowercases a text field, mapping `None` to the empty string.
#[must_use]
pub fn normalize(text: Option<&str>) -> String {
    text.map(|t| t.trim().to_lowercase()).unwrap_or_default()
}
