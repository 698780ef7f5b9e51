//! News (`beritas`) operations.

use super::{ContentService, ListParams, NEWS};
use crate::domain::{ContentItem, Page};
use crate::resolve::resolve_entry;

const DEFAULT_PAGE_SIZE: u32 = 12;

impl ContentService {
    /// Paginated news list, cached for the configured TTL. Failure degrades
    /// to an empty page.
    pub async fn list_news(&self, params: &ListParams) -> Page<ContentItem> {
        self.cached_list(NEWS, &params.to_query(DEFAULT_PAGE_SIZE, "gambar"))
            .await
    }

    /// Featured news, falling back to the latest entries when the featured
    /// filter fails or matches nothing.
    pub async fn featured_news(&self, limit: u32) -> Vec<ContentItem> {
        self.featured_or_latest(NEWS, limit, "*").await
    }

    /// Resolve one news entry by slug, document id, or numeric id.
    pub async fn resolve_news(&self, identifier: &str) -> Option<ContentItem> {
        resolve_entry(self.client(), NEWS, identifier).await
    }
}
