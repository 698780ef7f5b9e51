//! Cross-collection search.
//!
//! A failing collection degrades to an empty bucket instead of sinking the
//! whole search; results are not cached (queries are too varied to be worth
//! cache slots).

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use super::{ARTICLES, ContentService, ListParams, NEWS};
use crate::domain::ContentItem;
use crate::query::Query;

const SEARCH_PAGE_SIZE: u32 = 10;
const ADVANCED_PAGE_SIZE: u32 = 20;

/// Which collections a search touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    News,
    Articles,
}

impl SearchScope {
    pub(crate) fn collections(self) -> &'static [&'static str] {
        match self {
            Self::All => &[NEWS, ARTICLES],
            Self::News => &[NEWS],
            Self::Articles => &[ARTICLES],
        }
    }
}

/// Search hits bucketed per collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub news: Vec<ContentItem>,
    pub articles: Vec<ContentItem>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.news.len() + self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn put(&mut self, collection: &str, items: Vec<ContentItem>) {
        match collection {
            NEWS => self.news = items,
            ARTICLES => self.articles = items,
            _ => {}
        }
    }
}

/// Full filter set for advanced search.
#[derive(Debug, Clone, Default)]
pub struct AdvancedSearchParams {
    pub query: Option<String>,
    pub scope: SearchScope,
    pub category: Option<String>,
    pub author: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub featured: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl AdvancedSearchParams {
    /// True when no criterion is set; such a search returns nothing rather
    /// than dumping the whole collection.
    fn has_criteria(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.trim().is_empty())
            || self.category.is_some()
            || self.author.is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
            || self.featured.is_some()
    }
}

impl ContentService {
    /// Title search across the selected collections.
    pub async fn search(&self, needle: &str, scope: SearchScope) -> SearchResults {
        let needle = needle.trim();
        let mut results = SearchResults::default();
        if needle.is_empty() {
            return results;
        }
        for collection in scope.collections() {
            let query = Query::new()
                .filter_contains("title", needle)
                .populate("gambar")
                .page_size(SEARCH_PAGE_SIZE);
            match self.fetch_list(collection, &query).await {
                Ok(page) => results.put(collection, page.items),
                Err(error) => {
                    warn!(collection, %error, "search failed for collection, degrading to empty bucket");
                }
            }
        }
        results
    }

    /// Search with the full filter set: text over title and content,
    /// category, author, publish-date range, featured flag.
    pub async fn advanced_search(&self, params: &AdvancedSearchParams) -> SearchResults {
        let mut results = SearchResults::default();
        if !params.has_criteria() {
            return results;
        }
        let list = ListParams {
            page: params.page,
            page_size: params.page_size,
            category: params.category.clone(),
            author: params.author.clone(),
            search: params.query.clone(),
            featured: params.featured,
            date_from: params.date_from,
            date_to: params.date_to,
            sort: None,
        };
        for collection in params.scope.collections() {
            let query = list.to_query(ADVANCED_PAGE_SIZE, "gambar");
            match self.fetch_list(collection, &query).await {
                Ok(page) => results.put(collection, page.items),
                Err(error) => {
                    warn!(collection, %error, "advanced search failed for collection, degrading to empty bucket");
                }
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_selects_collections() {
        assert_eq!(SearchScope::All.collections(), &[NEWS, ARTICLES]);
        assert_eq!(SearchScope::News.collections(), &[NEWS]);
        assert_eq!(SearchScope::Articles.collections(), &[ARTICLES]);
    }

    #[test]
    fn criteria_detection() {
        assert!(!AdvancedSearchParams::default().has_criteria());
        assert!(
            !AdvancedSearchParams {
                query: Some("   ".to_string()),
                ..Default::default()
            }
            .has_criteria()
        );
        assert!(
            AdvancedSearchParams {
                featured: Some(false),
                ..Default::default()
            }
            .has_criteria()
        );
    }
}
