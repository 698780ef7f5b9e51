//! Announcement (`pengumumen`) operations.

use super::{ANNOUNCEMENTS, ContentService, ListParams};
use crate::domain::{ContentItem, Page};
use crate::query::Query;
use crate::resolve::{LookupStrategy, resolve_entry, resolve_with_plan};

const DEFAULT_PAGE_SIZE: u32 = 5;

impl ContentService {
    /// Active announcements, newest first, cached.
    pub async fn list_announcements(&self, params: &ListParams) -> Page<ContentItem> {
        let query = params
            .to_query(DEFAULT_PAGE_SIZE, "*")
            .filter_bool("is_active", true);
        self.cached_list(ANNOUNCEMENTS, &query).await
    }

    /// Latest announcements for the homepage banner, cached.
    pub async fn featured_announcements(&self, limit: u32) -> Page<ContentItem> {
        let query = Query::new()
            .page_size(limit)
            .populate("*")
            .sort("publishedAt:desc");
        self.cached_list(ANNOUNCEMENTS, &query).await
    }

    /// Direct lookup for a known announcement id: document id first, then
    /// the legacy numeric filter. Use [`Self::resolve_announcement`] when the
    /// identifier kind is unknown.
    pub async fn announcement_by_id(&self, id: &str) -> Option<ContentItem> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        resolve_with_plan(
            self.client(),
            ANNOUNCEMENTS,
            id,
            &[LookupStrategy::DocumentId, LookupStrategy::NumericId],
        )
        .await
    }

    /// Resolve one announcement by slug, document id, or numeric id.
    pub async fn resolve_announcement(&self, identifier: &str) -> Option<ContentItem> {
        resolve_entry(self.client(), ANNOUNCEMENTS, identifier).await
    }
}
