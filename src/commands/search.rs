//! Search command implementation.

use crate::catalog::client::{CatalogApi, CatalogClient};
use crate::catalog::listing;
use crate::catalog::query::ListingQuery;
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Executes a catalog search: one id page plus detail lookups.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &ListingQuery) -> Result<String> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl CatalogApi,
        query: &ListingQuery,
    ) -> Result<String> {
        info!(
            "Searching catalog: {} (page {})",
            query.search.as_deref().unwrap_or("<all items>"),
            query.page
        );

        if query.has_filters() {
            debug!(
                "Filters: min_price={:?} max_price={:?} brand={:?}",
                query.min_price, query.max_price, query.brand
            );
        }

        let result = listing::fetch_listing(client, query, self.config.concurrency)
            .await
            .context("Listing fetch failed")?;

        info!("Found {} items on page {} of {}", result.count(), result.page, result.page_count);

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_listing(&result))
    }
}
