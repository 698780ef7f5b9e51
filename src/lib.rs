//! Data-access layer for a Strapi-style organization content API.
//!
//! `warta` wraps the CMS backend of a university-organization site behind a
//! typed, cache-aware client: a bounded TTL response cache, uniform error
//! signaling, multi-strategy identifier resolution (numeric id, document id,
//! slug), paginated list queries with filter composition, and the text and
//! date helpers listing pages need.
//!
//! The backend is treated as an opaque HTTP service. Responses arrive in two
//! shapes (fields flat on the item, or nested under `attributes`); everything
//! past [`domain`] is normalized, so callers never see that ambiguity.
//!
//! ```no_run
//! use warta::{ClientConfig, ContentService, ListParams};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ContentService::new(ClientConfig::from_env()?)?;
//! let page = service.list_news(&ListParams::default()).await;
//! for item in &page.items {
//!     println!("{}", item.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod query;
pub mod resolve;
pub mod util;

pub use api::{AdvancedSearchParams, ContentService, ListParams, SearchResults, SearchScope};
pub use cache::{CacheStats, Clock, ResponseStore, SystemClock};
pub use client::{ApiClient, FetchError};
pub use config::{ClientConfig, ConfigError};
pub use domain::{
    ContentBody, ContentItem, MediaFormat, MediaRef, Page, PaginationMeta, StaffMember,
    StructuredBlock,
};
pub use query::Query;
pub use resolve::LookupStrategy;
