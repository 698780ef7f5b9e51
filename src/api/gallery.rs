//! Gallery (`galeris`) operations.

use super::{ContentService, GALLERY, ListParams};
use crate::domain::{ContentItem, Page};
use crate::resolve::resolve_entry;

const DEFAULT_PAGE_SIZE: u32 = 6;

impl ContentService {
    /// Paginated gallery list, cached. Failure degrades to an empty page.
    pub async fn list_gallery(&self, params: &ListParams) -> Page<ContentItem> {
        self.cached_list(GALLERY, &params.to_query(DEFAULT_PAGE_SIZE, "gambar"))
            .await
    }

    /// Featured gallery entries with a latest fallback.
    pub async fn featured_gallery(&self, limit: u32) -> Vec<ContentItem> {
        self.featured_or_latest(GALLERY, limit, "*").await
    }

    /// Resolve one gallery entry by slug, document id, or numeric id.
    pub async fn resolve_gallery(&self, identifier: &str) -> Option<ContentItem> {
        resolve_entry(self.client(), GALLERY, identifier).await
    }
}
