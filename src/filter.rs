//! Name Filter
//!
//! Derives the visible list from the full catalog and the search term.

use crate::models::CatalogItem;

/// Case-insensitive substring match on name, keeping catalog order.
/// An empty term matches everything; the term is not trimmed.
pub fn filter_by_name(items: &[CatalogItem], term: &str) -> Vec<CatalogItem> {
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
