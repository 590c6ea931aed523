//! Output formatting for items and listings (table, JSON, markdown, CSV).

use crate::catalog::models::{Item, Listing};
use crate::config::OutputFormat;

/// Formats items and listings for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single item.
    pub fn format_item(&self, item: &Item) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(item),
            OutputFormat::Table => self.table_single(item),
            OutputFormat::Markdown => self.markdown_single(item),
            OutputFormat::Csv => self.csv_items(std::slice::from_ref(item)),
        }
    }

    /// Formats multiple items.
    pub fn format_items(&self, items: &[Item]) -> String {
        if items.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No items found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_items(items),
            OutputFormat::Table => self.table_items(items),
            OutputFormat::Markdown => self.markdown_items(items),
            OutputFormat::Csv => self.csv_items(items),
        }
    }

    /// Formats a complete listing, including page metadata.
    pub fn format_listing(&self, listing: &Listing) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(listing).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Csv => self.csv_items(&listing.items),
            _ => {
                let mut output = self.format_items(&listing.items);
                output.push('\n');
                output.push_str(&self.listing_footer(listing));
                output
            }
        }
    }

    fn listing_footer(&self, listing: &Listing) -> String {
        let mut footer = format!("Page {} of {}", listing.page, listing.page_count);
        if listing.failed_details > 0 {
            footer.push_str(&format!(" ({} lookups failed or empty)", listing.failed_details));
        }
        footer
    }

    // JSON formatting

    fn json_single(&self, item: &Item) -> String {
        serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_items(&self, items: &[Item]) -> String {
        serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, item: &Item) -> String {
        let mut lines = Vec::new();

        lines.push(format!("ID:     {}", item.id));
        lines.push(format!("Name:   {}", item.name));
        lines.push(format!("Price:  {:.2}", item.price));
        lines.push(format!("Brand:  {}", item.brand.as_deref().unwrap_or("Unknown")));

        lines.join("\n")
    }

    fn table_items(&self, items: &[Item]) -> String {
        let id_width = 36;
        let price_width = 12;
        let brand_width = 16;
        let name_width = 50;

        let mut lines = Vec::new();

        // Header
        lines.push(format!(
            "{:<id_width$}  {:<price_width$}  {:<brand_width$}  {}",
            "ID", "Price", "Brand", "Name"
        ));
        lines.push(format!(
            "{:-<id_width$}  {:-<price_width$}  {:-<brand_width$}  {:-<name_width$}",
            "", "", "", ""
        ));

        // Rows
        for item in items {
            let brand = item.brand.as_deref().unwrap_or("Unknown");
            let name = truncate_name(&item.name, name_width);

            lines.push(format!(
                "{:<id_width$}  {:>price_width$.2}  {:<brand_width$}  {}",
                item.id, item.price, brand, name
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} items", items.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, item: &Item) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", item.name));
        lines.push(String::new());

        lines.push(format!("- **ID:** {}", item.id));
        lines.push(format!("- **Price:** {:.2}", item.price));

        if let Some(brand) = &item.brand {
            lines.push(format!("- **Brand:** {}", brand));
        }

        lines.join("\n")
    }

    fn markdown_items(&self, items: &[Item]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Price | Brand | Name |".to_string());
        lines.push("|----|-------|-------|------|".to_string());

        for item in items {
            let brand = item.brand.as_deref().unwrap_or("");
            let name = truncate_name(&item.name, 40);

            lines.push(format!("| {} | {:.2} | {} | {} |", item.id, item.price, brand, name));
        }

        lines.push(String::new());
        lines.push(format!("*{} items found*", items.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "id,name,price,brand".to_string()
    }

    fn csv_items(&self, items: &[Item]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for item in items {
            let name = Self::csv_escape(&item.name);
            let brand = item.brand.as_ref().map(|b| Self::csv_escape(b)).unwrap_or_default();

            lines.push(format!("{},{},{},{}", item.id, name, item.price, brand));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Truncates to at most `max` characters, always on a char boundary.
/// Product names come verbatim from the catalog and are not ASCII.
fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }

    let kept: String = name.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
