//! Read-once catalog index.
//!
//! [`CatalogIndex`] holds the normalized [`BookRecord`]s for every card on the
//! page. It is built exactly once when the document is ready and is never
//! resynchronized: the record count and the records' text are fixed for the
//! lifetime of the page.

use super::source::CardSource;
use crate::domain::{BookRecord, NodeId};

/// Normalized records for all cards, in initial document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    records: Vec<BookRecord>,
}

impl CatalogIndex {
    /// Builds the index from a card source.
    ///
    /// Each card's position in the source becomes its [`NodeId`], so the
    /// record order equals the document's initial child order.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfview::catalog::CatalogIndex;
    /// use shelfview::domain::{CardFields, NodeId};
    ///
    /// let cards = vec![
    ///     CardFields::new("Rust in Action", "Tim McNamara", "Manning"),
    ///     CardFields::new("소년이 온다", "한강", "창비"),
    /// ];
    /// let index = CatalogIndex::build(&cards);
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.records()[1].node, NodeId(1));
    /// assert_eq!(index.records()[0].title, "rust in action");
    /// ```
    #[must_use]
    pub fn build<S: CardSource + ?Sized>(source: &S) -> Self {
        let _span = tracing::debug_span!("catalog_build").entered();

        let records: Vec<BookRecord> = source
            .read_cards()
            .iter()
            .enumerate()
            .map(|(position, fields)| BookRecord::from_fields(NodeId(position), fields))
            .collect();

        let without_title = records.iter().filter(|r| r.title.is_empty()).count();
        tracing::debug!(
            record_count = records.len(),
            without_title,
            "catalog indexed"
        );

        Self { records }
    }

    /// Records in initial document order.
    #[must_use]
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardFields;

    #[test]
    fn test_build_preserves_document_order() {
        let cards = vec![
            CardFields::new("다", "c", "z"),
            CardFields::new("가", "a", "x"),
            CardFields::new("나", "b", "y"),
        ];
        let index = CatalogIndex::build(&cards);

        let titles: Vec<&str> = index.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["다", "가", "나"]);
        for (position, record) in index.records().iter().enumerate() {
            assert_eq!(record.node, NodeId(position));
        }
    }

    #[test]
    fn test_build_empty_source() {
        let index = CatalogIndex::build(&Vec::<CardFields>::new());
        assert!(index.is_empty());
        assert!(index.records().is_empty());
    }
}
