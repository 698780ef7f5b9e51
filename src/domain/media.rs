//! Media references and URL resolution.
//!
//! Uploads arrive in three wire shapes depending on backend version and
//! population depth: flat `{url, formats}`, v4 `{attributes: {url}}`, and
//! relation-nested `{data: {attributes: {url}}}`. All three normalize to
//! [`MediaRef`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// One rendition of an uploaded file (thumbnail, small, medium, large).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFormat {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Normalized reference to an uploaded media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    #[serde(default)]
    pub formats: Option<BTreeMap<String, MediaFormat>>,
    #[serde(rename = "alternativeText", default)]
    pub alt_text: Option<String>,
}

impl MediaRef {
    /// Extract a media reference from any of the wire shapes, flat first.
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.get("url").is_some_and(Value::is_string) {
            return serde_json::from_value(value.clone()).ok();
        }
        if let Some(attributes) = value.get("attributes") {
            return Self::from_value(attributes);
        }
        match value.get("data") {
            Some(Value::Null) | None => None,
            // A multi-media relation resolves to its first entry.
            Some(Value::Array(entries)) => entries.first().and_then(Self::from_value),
            Some(data) => Self::from_value(data),
        }
    }

    /// Absolute URL for this media: an already-absolute URL passes through,
    /// a backend-relative path is prefixed with the API origin.
    pub fn absolute_url(&self, origin: &Url) -> String {
        resolve_url(&self.url, origin)
    }

    /// Absolute URL of a named rendition, if the backend produced one.
    pub fn format_url(&self, name: &str, origin: &Url) -> Option<String> {
        self.formats
            .as_ref()
            .and_then(|formats| formats.get(name))
            .map(|format| resolve_url(&format.url, origin))
    }
}

fn resolve_url(url: &str, origin: &Url) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    origin
        .join(url)
        .map(String::from)
        .unwrap_or_else(|_| url.to_string())
}
