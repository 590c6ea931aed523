//! Data models for catalog items and listing results.

use serde::{Deserialize, Serialize};

/// A single catalog item, taken verbatim from the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque catalog identifier
    pub id: String,
    /// Product name (wire field `product`)
    #[serde(rename = "product")]
    pub name: String,
    /// Price in the catalog's currency
    pub price: f64,
    /// Brand, absent for unbranded items
    #[serde(default)]
    pub brand: Option<String>,
}

/// The outcome of one complete listing fetch cycle.
///
/// Rebuilt wholesale on every fetch; `page_count` is derived from the raw
/// id count before deduplication, so it does not have to agree with
/// `items.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Search text used, if any
    pub search: Option<String>,
    /// 1-based page that was fetched
    pub page: u32,
    /// Total pages derived from the raw id count
    pub page_count: u32,
    /// Raw id count returned by `get_ids`, duplicates included
    pub raw_id_count: usize,
    /// Items in dedup order, failed and missing lookups excluded
    pub items: Vec<Item>,
    /// How many detail lookups failed or came back empty
    pub failed_details: usize,
}

impl Listing {
    /// Returns the number of items fetched.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items were fetched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
