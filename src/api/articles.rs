//! Article (`artikels`) operations.

use super::{ARTICLES, ContentService, ListParams};
use crate::domain::{ContentItem, Page};

const DEFAULT_PAGE_SIZE: u32 = 12;

impl ContentService {
    /// Paginated article list, cached for the configured TTL. Failure
    /// degrades to an empty page.
    pub async fn list_articles(&self, params: &ListParams) -> Page<ContentItem> {
        self.cached_list(ARTICLES, &params.to_query(DEFAULT_PAGE_SIZE, "gambar"))
            .await
    }
}
