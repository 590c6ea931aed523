//! valantis-crawler - Fast, stateless product catalog search CLI
//!
//! Each invocation runs one complete fetch cycle against the catalog API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use valantis_crawler::catalog::auth::AuthToken;
use valantis_crawler::catalog::query::ListingQuery;
use valantis_crawler::commands::{ItemCommand, SearchCommand};
use valantis_crawler::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(
    name = "valantis-crawler",
    version,
    about = "Fast, stateless product catalog search CLI",
    long_about = "Searches the Valantis product catalog API: one id lookup per query, \
                  one detail lookup per unique id, authenticated with a date-derived token."
)]
struct Cli {
    /// Catalog API endpoint URL
    #[arg(long, global = true, env = "VALANTIS_ENDPOINT")]
    endpoint: Option<String>,

    /// Shared secret for the daily auth token
    #[arg(long, global = true, env = "VALANTIS_PASSWORD")]
    password: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "VALANTIS_PROXY")]
    proxy: Option<String>,

    /// Maximum detail lookups in flight at once
    #[arg(long, global = true, env = "VALANTIS_CONCURRENCY")]
    concurrency: Option<usize>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    #[command(alias = "s")]
    Search {
        /// Search text (matches product names)
        query: Option<String>,

        /// Minimum price filter
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price filter
        #[arg(long)]
        max_price: Option<f64>,

        /// Exact brand filter
        #[arg(long)]
        brand: Option<String>,

        /// Page number (a fresh search starts at page 1)
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Look up items by id
    #[command(alias = "i")]
    Item {
        /// Id(s) to look up
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Print today's auth token
    Token,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;

    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(password) = cli.password {
        config.password = password;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(concurrency) = cli.concurrency {
        config.concurrency = concurrency;
    }

    match cli.command {
        Commands::Search { query, min_price, max_price, brand, page } => {
            let listing_query = ListingQuery {
                search: query,
                min_price,
                max_price,
                brand,
                page: page.max(1),
            };

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&listing_query).await?;
            println!("{}", output);
        }

        Commands::Item { ids } => {
            let cmd = ItemCommand::new(config);
            let output = cmd.execute(&ids).await?;
            println!("{}", output);
        }

        Commands::Token => {
            println!("{}", AuthToken::for_today(&config.password));
        }
    }

    Ok(())
}
