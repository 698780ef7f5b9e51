//! List pagination envelope shared by every collection endpoint.

use serde::{Deserialize, Serialize};

/// 1-based pagination metadata returned alongside list data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

impl PaginationMeta {
    /// Metadata for the degraded empty page: page 1, everything else zero.
    pub fn empty() -> Self {
        Self {
            page: 1,
            page_size: 0,
            page_count: 0,
            total: 0,
        }
    }
}

/// One page of normalized items plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Page<T> {
    /// The value list endpoints degrade to when the underlying request fails.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationMeta::empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
