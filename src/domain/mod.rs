//! Canonical data model.
//!
//! The backend answers in two shapes: fields flat on the item, or nested
//! under an `attributes` sub-object. Everything in this module normalizes to
//! canonical records (flat location checked first), so the ambiguity never
//! leaks past the data-access boundary.

pub mod blocks;
pub mod content;
pub mod media;
pub mod pagination;
pub mod staff;

pub use blocks::{InlineNode, StructuredBlock};
pub use content::{ContentBody, ContentItem};
pub use media::{MediaFormat, MediaRef};
pub use pagination::{Page, PaginationMeta};
pub use staff::StaffMember;

use serde::Deserialize;
use serde_json::Value;

/// Raw response envelope: `data` may be a single entry, a list, or null, and
/// `meta.pagination` is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Option::default")]
    pub data: Option<Payload<T>>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Many(Vec<T>),
    One(T),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
}

impl<T> Envelope<T> {
    /// Flatten `data` into a list regardless of whether the endpoint answered
    /// with one entry or many.
    pub fn into_items(self) -> Vec<T> {
        match self.data {
            Some(Payload::Many(items)) => items,
            Some(Payload::One(item)) => vec![item],
            None => Vec::new(),
        }
    }
}

impl Envelope<Value> {
    /// Normalize into a page of content items. Entries that do not resolve to
    /// a usable item are dropped; when the backend omits pagination metadata
    /// it is synthesized from the item count.
    pub fn into_content_page(self) -> Page<ContentItem> {
        let pagination = self.meta.as_ref().and_then(|meta| meta.pagination);
        let items: Vec<ContentItem> = self
            .into_items()
            .iter()
            .filter_map(ContentItem::from_value)
            .collect();
        let pagination = pagination.unwrap_or(PaginationMeta {
            page: 1,
            page_size: items.len() as u32,
            page_count: 1,
            total: items.len() as u64,
        });
        Page { items, pagination }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_flattens_single_and_list_payloads() {
        let one: Envelope<Value> =
            serde_json::from_value(json!({ "data": { "id": 1 } })).expect("envelope");
        assert_eq!(one.into_items().len(), 1);

        let many: Envelope<Value> =
            serde_json::from_value(json!({ "data": [{ "id": 1 }, { "id": 2 }] }))
                .expect("envelope");
        assert_eq!(many.into_items().len(), 2);

        let null: Envelope<Value> = serde_json::from_value(json!({ "data": null })).expect("envelope");
        assert!(null.into_items().is_empty());
    }

    #[test]
    fn content_page_synthesizes_missing_pagination() {
        let envelope: Envelope<Value> = serde_json::from_value(json!({
            "data": [{ "id": 7, "title": "Halo" }]
        }))
        .expect("envelope");
        let page = envelope.into_content_page();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.total, 1);
    }

    #[test]
    fn content_page_keeps_backend_pagination() {
        let envelope: Envelope<Value> = serde_json::from_value(json!({
            "data": [{ "id": 7, "title": "Halo" }],
            "meta": { "pagination": { "page": 3, "pageSize": 12, "pageCount": 9, "total": 101 } }
        }))
        .expect("envelope");
        let page = envelope.into_content_page();
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.pagination.page_count, 9);
        assert_eq!(page.pagination.total, 101);
    }
}
