//! Listing order computation.
//!
//! Every sort starts from a copy of the catalog in initial document order,
//! never from the order currently on screen. Sorting is stable, so records
//! that compare equal keep their document order, and [`SortKey::None`]
//! restores the original layout.

use super::modes::SortKey;
use crate::catalog::collation;
use crate::catalog::CatalogIndex;
use crate::domain::{BookRecord, NodeId};
use std::cmp::Ordering;

/// Computes the display order of all records for a sort key.
///
/// The result is a permutation of every record's [`NodeId`].
///
/// # Examples
///
/// ```
/// use shelfview::app::modes::SortKey;
/// use shelfview::app::sort::sorted_order;
/// use shelfview::catalog::CatalogIndex;
/// use shelfview::domain::{CardFields, NodeId};
///
/// let cards = vec![
///     CardFields::new("나", "b", "p").with_pub_date("2024-01-10"),
///     CardFields::new("가", "a", "q").with_pub_date("2024-03-02"),
/// ];
/// let index = CatalogIndex::build(&cards);
///
/// assert_eq!(sorted_order(&index, SortKey::Title), vec![NodeId(1), NodeId(0)]);
/// assert_eq!(sorted_order(&index, SortKey::PubDate), vec![NodeId(1), NodeId(0)]);
/// assert_eq!(sorted_order(&index, SortKey::None), vec![NodeId(0), NodeId(1)]);
/// ```
#[must_use]
pub fn sorted_order(catalog: &CatalogIndex, key: SortKey) -> Vec<NodeId> {
    let _span = tracing::debug_span!("sorted_order", sort_key = key.as_str(), records = catalog.len()).entered();

    let mut records: Vec<&BookRecord> = catalog.records().iter().collect();

    if key != SortKey::None {
        records.sort_by(|a, b| compare_by(key, a, b));
    }

    records.iter().map(|r| r.node).collect()
}

/// Compares two records under a sort key.
fn compare_by(key: SortKey, a: &BookRecord, b: &BookRecord) -> Ordering {
    match key {
        SortKey::Title => collation::compare(&a.title, &b.title),
        SortKey::Author => collation::compare(&a.author, &b.author),
        SortKey::Publisher => collation::compare(&a.publisher, &b.publisher),
        SortKey::PubDate => b.pub_date_key().cmp(a.pub_date_key()),
        SortKey::None => Ordering::Equal,
    }
}
