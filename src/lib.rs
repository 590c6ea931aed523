//! valantis-crawler - Fast, stateless product catalog search CLI
//!
//! Queries the Valantis catalog API: one id lookup per search, one detail
//! lookup per unique id, authenticated with a date-derived token.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod format;

pub use catalog::models::{Item, Listing};
pub use catalog::CatalogError;
pub use config::Config;
