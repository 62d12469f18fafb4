//! Frontend Models
//!
//! Catalog entries and the upstream list shape they are built from.

use serde::Deserialize;

/// One entry of the displayed catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// Position in the upstream list, starting at 1
    pub identifier: u32,
    pub name: String,
    pub image_url: String,
}

/// Identifier padded to at least three digits (`7` -> `"007"`)
pub fn pad_identifier(identifier: u32) -> String {
    format!("{:03}", identifier)
}

/// Upstream list response (only the consumed fields)
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    pub results: Vec<ListingEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    pub name: String,
}
