//! ItemSearch-RS: tenant-scoped catalog search over the Elasticsearch HTTP API
//!
//! Provisions a searchable index for multi-tenant item catalogs and runs
//! tenant-isolated, multi-field text queries against it. The query body is
//! built as a structured object graph, never by string interpolation, so
//! caller input cannot alter the boolean shape of a query.

pub mod config;
pub mod error;
pub mod network;
pub mod query;
pub mod results;
pub mod schema;

pub use config::Settings;
pub use error::Error;
pub use network::EngineClient;
pub use query::{Page, TenantQuery};
pub use results::{Item, SearchHit, SearchResponse};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
