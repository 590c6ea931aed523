//! Item lookup command implementation.

use crate::catalog::client::{CatalogApi, CatalogClient};
use crate::catalog::listing;
use crate::config::Config;
use crate::format::Formatter;
use anyhow::{Context, Result};
use tracing::info;

/// Looks up catalog items by explicit id.
pub struct ItemCommand {
    config: Config,
}

impl ItemCommand {
    /// Creates a new item command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches items by id and returns formatted output.
    pub async fn execute(&self, ids: &[String]) -> Result<String> {
        let client = CatalogClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, ids).await
    }

    /// Fetches items with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl CatalogApi,
        ids: &[String],
    ) -> Result<String> {
        let cleaned: Vec<String> = ids
            .iter()
            .map(|id| id.trim().to_string())
            .filter(|id| {
                if id.is_empty() {
                    eprintln!("Skipping empty id");
                }
                !id.is_empty()
            })
            .collect();

        if cleaned.is_empty() {
            anyhow::bail!("No valid ids given");
        }

        info!("Looking up {} item(s)", cleaned.len());

        let unique = listing::dedup_ids(&cleaned);
        let (items, failed) =
            listing::fetch_details(client, &unique, self.config.concurrency).await;

        if failed > 0 {
            eprintln!("{} lookup(s) failed or matched no item", failed);
        }

        let formatter = Formatter::new(self.config.format);
        if unique.len() == 1 && items.len() == 1 {
            Ok(formatter.format_item(&items[0]))
        } else {
            Ok(formatter.format_items(&items))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::CatalogError;
    use crate::catalog::models::Item;
    use crate::catalog::query::ListingQuery;
    use crate::config::OutputFormat;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock catalog client for testing.
    struct MockCatalog {
        items: Vec<Item>,
        detail_calls: Mutex<Vec<String>>,
    }

    impl MockCatalog {
        fn new(items: Vec<Item>) -> Self {
            Self { items, detail_calls: Mutex::new(Vec::new()) }
        }

        fn detail_calls(&self) -> Vec<String> {
            self.detail_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogApi for MockCatalog {
        async fn get_ids(&self, _query: &ListingQuery) -> Result<Vec<String>, CatalogError> {
            Ok(Vec::new())
        }

        async fn get_item(&self, id: &str) -> Result<Option<Item>, CatalogError> {
            self.detail_calls.lock().unwrap().push(id.to_string());
            Ok(self.items.iter().find(|i| i.id == id).cloned())
        }
    }

    fn make_item(id: &str, name: &str) -> Item {
        Item { id: id.to_string(), name: name.to_string(), price: 100.0, brand: None }
    }

    fn make_test_config() -> Config {
        Config { format: OutputFormat::Table, ..Config::default() }
    }

    #[tokio::test]
    async fn test_item_command_single() {
        let catalog = MockCatalog::new(vec![make_item("abc", "Gold Ring")]);
        let cmd = ItemCommand::new(make_test_config());

        let output = cmd.execute_with_client(&catalog, &["abc".to_string()]).await.unwrap();

        assert!(output.contains("ID:     abc"));
        assert!(output.contains("Gold Ring"));
    }

    #[tokio::test]
    async fn test_item_command_batch() {
        let catalog =
            MockCatalog::new(vec![make_item("a", "Gold Ring"), make_item("b", "Silver Ring")]);
        let cmd = ItemCommand::new(make_test_config());

        let ids = vec!["a".to_string(), "b".to_string()];
        let output = cmd.execute_with_client(&catalog, &ids).await.unwrap();

        assert!(output.contains("Gold Ring"));
        assert!(output.contains("Silver Ring"));
        assert!(output.contains("Total: 2 items"));
    }

    #[tokio::test]
    async fn test_item_command_trims_and_dedups() {
        let catalog = MockCatalog::new(vec![make_item("abc", "Gold Ring")]);
        let cmd = ItemCommand::new(make_test_config());

        let ids = vec!["  abc  ".to_string(), "abc".to_string()];
        cmd.execute_with_client(&catalog, &ids).await.unwrap();

        assert_eq!(catalog.detail_calls(), vec!["abc"]);
    }

    #[tokio::test]
    async fn test_item_command_skips_empty_ids() {
        let catalog = MockCatalog::new(vec![make_item("abc", "Gold Ring")]);
        let cmd = ItemCommand::new(make_test_config());

        let ids = vec!["".to_string(), "abc".to_string(), "   ".to_string()];
        let output = cmd.execute_with_client(&catalog, &ids).await.unwrap();

        assert!(output.contains("Gold Ring"));
        assert_eq!(catalog.detail_calls(), vec!["abc"]);
    }

    #[tokio::test]
    async fn test_item_command_all_ids_empty() {
        let catalog = MockCatalog::new(Vec::new());
        let cmd = ItemCommand::new(make_test_config());

        let ids = vec!["".to_string(), "   ".to_string()];
        let result = cmd.execute_with_client(&catalog, &ids).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No valid ids"));
    }

    #[tokio::test]
    async fn test_item_command_unknown_id() {
        let catalog = MockCatalog::new(Vec::new());
        let cmd = ItemCommand::new(make_test_config());

        let output =
            cmd.execute_with_client(&catalog, &["missing".to_string()]).await.unwrap();

        assert!(output.contains("No items found"));
    }

    #[tokio::test]
    async fn test_item_command_json_format() {
        let catalog = MockCatalog::new(vec![make_item("abc", "Gold Ring")]);

        let mut config = make_test_config();
        config.format = OutputFormat::Json;

        let cmd = ItemCommand::new(config);
        let output = cmd.execute_with_client(&catalog, &["abc".to_string()]).await.unwrap();

        assert!(output.starts_with('{'));
        assert!(output.contains("\"id\""));
    }
}
