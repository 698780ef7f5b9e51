//! Strapi-style query-string construction.
//!
//! The backend understands population directives (`populate`), pagination
//! (`pagination[page]`, `pagination[pageSize]`), sorting (`sort[0]`) and
//! bracketed filter clauses (`filters[field][$op]`, `filters[$or][n][...]`).
//! Absent or empty parameters contribute no clause at all: `filters[x]=`
//! must never appear on the wire.

use url::form_urlencoded;

/// Ordered list of query pairs with helpers for the backend's conventions.
///
/// The serialized string doubles as the cache key for list responses, so the
/// builder keeps pairs in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Relation expansion directive, e.g. `gambar`, `photo`, or `*`.
    pub fn populate(self, relation: &str) -> Self {
        self.push("populate", relation)
    }

    /// 1-based page number.
    pub fn page(self, page: u32) -> Self {
        self.push("pagination[page]", page.to_string())
    }

    pub fn page_size(self, size: u32) -> Self {
        self.push("pagination[pageSize]", size.to_string())
    }

    /// Sort clause in `field:direction` form.
    pub fn sort(self, clause: &str) -> Self {
        self.push("sort[0]", clause)
    }

    /// `filters[field][$op]=value`; an empty value adds nothing.
    pub fn filter(self, field: &str, op: &str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        self.push(format!("filters[{field}][{op}]"), value)
    }

    pub fn filter_eq(self, field: &str, value: &str) -> Self {
        self.filter(field, "$eq", value)
    }

    pub fn filter_ne(self, field: &str, value: &str) -> Self {
        self.filter(field, "$ne", value)
    }

    /// Case-insensitive contains match.
    pub fn filter_contains(self, field: &str, value: &str) -> Self {
        self.filter(field, "$containsi", value)
    }

    pub fn filter_gte(self, field: &str, value: &str) -> Self {
        self.filter(field, "$gte", value)
    }

    pub fn filter_lte(self, field: &str, value: &str) -> Self {
        self.filter(field, "$lte", value)
    }

    pub fn filter_bool(self, field: &str, value: bool) -> Self {
        self.filter_eq(field, if value { "true" } else { "false" })
    }

    /// `$or` group matching `needle` case-insensitively in any of `fields`.
    /// A blank needle adds nothing.
    pub fn search(mut self, fields: &[&str], needle: &str) -> Self {
        let needle = needle.trim();
        if needle.is_empty() {
            return self;
        }
        for (index, field) in fields.iter().enumerate() {
            self = self.push(format!("filters[$or][{index}][{field}][$containsi]"), needle);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Percent-encoded query string.
    pub fn build(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
