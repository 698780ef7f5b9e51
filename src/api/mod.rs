//! High-level content operations: the surface page callers consume.
//!
//! [`ContentService`] owns the HTTP client and the response caches. List
//! queries are cached by their serialized query string and degrade to an
//! empty page on failure; single-resource resolution is uncached and
//! degrades to `None`. Callers never see raw transport errors from these
//! operations.
//!
//! Concurrent callers requesting the same uncached key both hit the network
//! and both populate the cache; there is no in-flight deduplication. Values
//! are idempotent re-fetches, so last write wins harmlessly.

mod announcements;
mod articles;
mod gallery;
mod news;
mod search;
mod staff;

pub use search::{AdvancedSearchParams, SearchResults, SearchScope};

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{CacheStats, Clock, ResponseStore, SystemClock};
use crate::client::{ApiClient, FetchError};
use crate::config::ClientConfig;
use crate::domain::{ContentItem, Envelope, Page, StaffMember};
use crate::query::Query;

// Wire collection names on the backend.
pub(crate) const NEWS: &str = "beritas";
pub(crate) const ARTICLES: &str = "artikels";
pub(crate) const ANNOUNCEMENTS: &str = "pengumumen";
pub(crate) const GALLERY: &str = "galeris";
pub(crate) const STAFF: &str = "staffs";

const DEFAULT_SORT: &str = "publishedAt:desc";

/// Filters and paging for list queries. Unset fields contribute no clause.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub category: Option<String>,
    pub author: Option<String>,
    /// Matches case-insensitively in either title or content.
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// `field:direction`; defaults to descending publish time.
    pub sort: Option<String>,
}

impl ListParams {
    pub(crate) fn to_query(&self, default_page_size: u32, populate: &str) -> Query {
        let mut query = Query::new()
            .populate(populate)
            .page(self.page.unwrap_or(1))
            .page_size(self.page_size.unwrap_or(default_page_size))
            .sort(self.sort.as_deref().unwrap_or(DEFAULT_SORT));
        if let Some(featured) = self.featured {
            query = query.filter_bool("is_featured", featured);
        }
        if let Some(category) = &self.category {
            query = query.filter_eq("category", category);
        }
        if let Some(author) = &self.author {
            query = query.filter_contains("author", author);
        }
        if let Some(search) = &self.search {
            query = query.search(&["title", "content"], search);
        }
        if let Some(from) = self.date_from {
            query = query.filter_gte("publishedAt", &format!("{from}T00:00:00.000Z"));
        }
        if let Some(to) = self.date_to {
            query = query.filter_lte("publishedAt", &format!("{to}T23:59:59.999Z"));
        }
        query
    }
}

/// Cache-aware client for the organization content API.
pub struct ContentService {
    client: ApiClient,
    pages: ResponseStore<Page<ContentItem>>,
    staff: ResponseStore<Vec<StaffMember>>,
    config: ClientConfig,
}

impl ContentService {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Construct with an injected time source, so tests can drive cache
    /// expiry deterministically.
    pub fn with_clock(config: ClientConfig, clock: Arc<dyn Clock>) -> Result<Self, FetchError> {
        let client = ApiClient::new(&config)?;
        Ok(Self {
            client,
            pages: ResponseStore::with_clock(config.cache_capacity, clock.clone()),
            staff: ResponseStore::with_clock(config.cache_capacity, clock),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Direct access to the transport layer, for callers that need an
    /// endpoint this service does not wrap. Such calls see raw
    /// [`FetchError`]s and bypass the cache.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// One-item probe against the news collection.
    pub async fn check_health(&self) -> bool {
        let query = Query::new().page_size(1);
        self.client
            .get_json::<Value>(&format!("/{NEWS}"), Some(&query.build()))
            .await
            .is_ok()
    }

    pub fn clear_cache(&self) {
        self.pages.clear();
        self.staff.clear();
    }

    /// Combined stats across the page and staff stores.
    pub fn cache_stats(&self) -> CacheStats {
        let pages = self.pages.stats();
        let staff = self.staff.stats();
        CacheStats {
            size: pages.size + staff.size,
            keys: pages.keys.into_iter().chain(staff.keys).collect(),
        }
    }

    /// Cached list fetch with degrade-to-empty semantics.
    pub(crate) async fn cached_list(&self, collection: &str, query: &Query) -> Page<ContentItem> {
        let cache_key = format!("{collection}?{}", query.build());
        if let Some(page) = self.pages.get(&cache_key) {
            return page;
        }
        match self.fetch_list(collection, query).await {
            Ok(page) => {
                self.pages.set(&cache_key, page.clone(), self.config.cache_ttl);
                page
            }
            Err(error) => {
                warn!(collection, %error, "list request failed, degrading to empty page");
                Page::empty()
            }
        }
    }

    pub(crate) async fn fetch_list(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Page<ContentItem>, FetchError> {
        let envelope: Envelope<Value> = self
            .client
            .get_json(&format!("/{collection}"), Some(&query.build()))
            .await?;
        Ok(envelope.into_content_page())
    }

    /// Featured entries with a latest-by-publish fallback when the featured
    /// filter fails or matches nothing.
    pub(crate) async fn featured_or_latest(
        &self,
        collection: &str,
        limit: u32,
        populate: &str,
    ) -> Vec<ContentItem> {
        let featured = Query::new()
            .filter_bool("is_featured", true)
            .page_size(limit)
            .populate(populate)
            .sort(DEFAULT_SORT);
        match self.fetch_list(collection, &featured).await {
            Ok(page) if !page.is_empty() => return page.items,
            Ok(_) => debug!(collection, "no featured entries, falling back to latest"),
            Err(error) => {
                warn!(collection, %error, "featured query failed, falling back to latest");
            }
        }

        let latest = Query::new()
            .page_size(limit)
            .populate(populate)
            .sort(DEFAULT_SORT);
        match self.fetch_list(collection, &latest).await {
            Ok(page) => page.items,
            Err(error) => {
                warn!(collection, %error, "latest fallback failed, returning nothing");
                Vec::new()
            }
        }
    }

    pub(crate) fn staff_store(&self) -> &ResponseStore<Vec<StaffMember>> {
        &self.staff
    }
}
