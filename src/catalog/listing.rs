//! Listing fetch cycle: id lookup, dedup, bounded detail fan-out.

use crate::catalog::client::CatalogApi;
use crate::catalog::error::CatalogError;
use crate::catalog::models::{Item, Listing};
use crate::catalog::query::{self, ListingQuery};
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Runs one complete fetch cycle for the given query.
///
/// Ids are deduplicated before the detail fan-out; the page count is
/// derived from the raw id count before dedup, matching the upstream
/// service's pagination.
pub async fn fetch_listing(
    client: &impl CatalogApi,
    query: &ListingQuery,
    concurrency: usize,
) -> Result<Listing, CatalogError> {
    let raw_ids = client.get_ids(query).await?;
    let unique_ids = dedup_ids(&raw_ids);

    debug!("{} ids returned, {} unique", raw_ids.len(), unique_ids.len());

    let (items, failed_details) = fetch_details(client, &unique_ids, concurrency).await;

    info!("Fetched {} items ({} lookups failed or empty)", items.len(), failed_details);

    Ok(Listing {
        search: query.search.clone(),
        page: query.page,
        page_count: query::page_count(raw_ids.len()),
        raw_id_count: raw_ids.len(),
        items,
        failed_details,
    })
}

/// Drops duplicate ids, keeping first-occurrence order.
pub fn dedup_ids(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter().filter(|id| seen.insert(id.as_str())).cloned().collect()
}

/// Fetches detail records for each id, at most `concurrency` in flight.
///
/// Results come back in input order regardless of completion order. A
/// failed or empty lookup skips that id only and is tallied, never
/// aborting the batch.
pub async fn fetch_details(
    client: &impl CatalogApi,
    ids: &[String],
    concurrency: usize,
) -> (Vec<Item>, usize) {
    let concurrency = concurrency.max(1);

    let results: Vec<Result<Option<Item>, CatalogError>> = stream::iter(ids)
        .map(|id| client.get_item(id))
        .buffered(concurrency)
        .collect()
        .await;

    let mut items = Vec::with_capacity(results.len());
    let mut failed = 0;

    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {
                debug!("No catalog record for id {}", id);
                failed += 1;
            }
            Err(e) => {
                warn!("Detail lookup failed for id {}: {}", id, e);
                failed += 1;
            }
        }
    }

    (items, failed)
}
