//! Canonical content item and normalization of the backend's two shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::blocks::StructuredBlock;
use super::media::MediaRef;

/// Body of a content item: structured rich text or a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentBody {
    RichText(Vec<StructuredBlock>),
    Plain(String),
}

impl ContentBody {
    /// Parse a body value leniently: a string stays plain, an array is read
    /// as blocks, anything else yields nothing.
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Plain(text.clone())),
            Value::Array(_) => serde_json::from_value(value.clone()).ok().map(Self::RichText),
            _ => None,
        }
    }

    /// Paragraph text joined with blank lines; plain bodies pass through.
    pub fn plain_text(&self) -> String {
        match self {
            Self::RichText(blocks) => blocks
                .iter()
                .filter_map(StructuredBlock::paragraph_text)
                .filter(|text| !text.trim().is_empty())
                .collect::<Vec<_>>()
                .join("\n\n"),
            Self::Plain(text) => text.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::RichText(blocks) => blocks.is_empty(),
            Self::Plain(text) => text.is_empty(),
        }
    }
}

impl Default for ContentBody {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

/// Canonical, read-only projection of one content entry (news item,
/// announcement, gallery entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub document_id: Option<String>,
    pub slug: Option<String>,
    pub title: String,
    pub body: ContentBody,
    pub author: Option<String>,
    pub category: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub featured: bool,
    pub image: Option<MediaRef>,
}

/// Content fields at either nesting level. Timestamps stay raw strings here
/// so one malformed date cannot sink the whole entry.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFields {
    title: Option<String>,
    slug: Option<String>,
    content: Option<Value>,
    description: Option<String>,
    author: Option<String>,
    category: Option<String>,
    #[serde(rename = "publishedAt", alias = "published")]
    published_at: Option<String>,
    is_featured: Option<bool>,
    gambar: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default, rename = "documentId")]
    document_id: Option<String>,
    #[serde(default)]
    attributes: Option<RawFields>,
    #[serde(flatten)]
    flat: RawFields,
}

impl ContentItem {
    /// Normalize one raw entry. Fields are looked up flat-first, then under
    /// `attributes`. Entries without an `id` are unusable and dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw: RawEntry = serde_json::from_value(value.clone()).ok()?;
        let id = raw.id?;
        let flat = raw.flat;
        let nested = raw.attributes.unwrap_or_default();

        let body = flat
            .content
            .as_ref()
            .or(nested.content.as_ref())
            .and_then(ContentBody::from_value)
            .or_else(|| {
                // Announcements carry a short `description` instead of a body.
                flat.description
                    .clone()
                    .or(nested.description.clone())
                    .map(ContentBody::Plain)
            })
            .unwrap_or_default();

        let image = flat
            .gambar
            .as_ref()
            .or(nested.gambar.as_ref())
            .and_then(MediaRef::from_value);

        Some(Self {
            id,
            document_id: raw.document_id,
            slug: flat.slug.or(nested.slug),
            title: flat.title.or(nested.title).unwrap_or_default(),
            body,
            author: flat.author.or(nested.author),
            category: flat.category.or(nested.category),
            published_at: flat
                .published_at
                .or(nested.published_at)
                .as_deref()
                .and_then(parse_timestamp),
            featured: flat.is_featured.or(nested.is_featured).unwrap_or(false),
            image,
        })
    }

    /// Identifier to build a detail route from: slug when present, otherwise
    /// the document id.
    pub fn route_key(&self) -> Option<&str> {
        self.slug.as_deref().or(self.document_id.as_deref())
    }

    /// Preview text for listing pages.
    pub fn excerpt(&self, max_length: usize) -> String {
        crate::util::text::excerpt(&self.body, max_length)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
