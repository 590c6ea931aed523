//! Catalog API modules: auth token, HTTP client, data models, fetch cycle.

pub mod auth;
pub mod client;
pub mod error;
pub mod listing;
pub mod models;
pub mod query;

pub use auth::AuthToken;
pub use client::{CatalogApi, CatalogClient};
pub use error::CatalogError;
pub use models::{Item, Listing};
pub use query::ListingQuery;
