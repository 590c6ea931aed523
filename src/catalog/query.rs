//! Search, filter, and pagination parameters for a listing fetch.

/// How many ids one `get_ids` call requests.
pub const ID_PAGE_LIMIT: u32 = 50;

/// How many items one listing page shows. The upstream service counts
/// pages with this divisor even though ids are fetched 50 at a time;
/// the mismatch is inherited from the original product behavior.
pub const LISTING_PAGE_SIZE: u32 = 10;

/// Parameters for one listing fetch cycle.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Full-text search over product names.
    pub search: Option<String>,

    /// Minimum price filter.
    pub min_price: Option<f64>,

    /// Maximum price filter.
    pub max_price: Option<f64>,

    /// Exact brand filter.
    pub brand: Option<String>,

    /// 1-based page number.
    pub page: u32,
}

impl ListingQuery {
    /// Creates a query for the first page with no filters.
    pub fn new() -> Self {
        Self { page: 1, ..Default::default() }
    }

    /// Returns the id offset for the current page.
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1) * ID_PAGE_LIMIT
    }

    /// Returns true if any filter beyond pagination is set.
    pub fn has_filters(&self) -> bool {
        self.search.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.brand.is_some()
    }
}

/// Computes the total page count from the raw (pre-dedup) id count.
pub fn page_count(raw_id_count: usize) -> u32 {
    (raw_id_count as u32).div_ceil(LISTING_PAGE_SIZE)
}
