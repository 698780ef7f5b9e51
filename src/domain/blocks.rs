//! Rich-text document model ("blocks" content).
//!
//! Newer entries carry their body as a list of typed blocks instead of one
//! opaque string. This client interprets paragraphs, headings, and lists;
//! every other block kind is tolerated and skipped.

use serde::{Deserialize, Serialize};

/// Inline leaf node of a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineNode {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

/// One unit of a structured rich-text document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StructuredBlock {
    Paragraph {
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    Heading {
        #[serde(default)]
        children: Vec<InlineNode>,
        #[serde(default)]
        level: Option<u8>,
    },
    List {
        #[serde(default)]
        children: Vec<serde_json::Value>,
        #[serde(default)]
        format: Option<String>,
    },
    /// Block kinds this client does not interpret (quotes, code, images).
    #[serde(other)]
    Other,
}

impl StructuredBlock {
    /// Inline text of a paragraph block; headings, lists, and unknown blocks
    /// yield nothing (excerpts are built from paragraphs only).
    pub fn paragraph_text(&self) -> Option<String> {
        match self {
            Self::Paragraph { children } => Some(
                children
                    .iter()
                    .filter(|child| child.kind == "text" && !child.text.is_empty())
                    .map(|child| child.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            _ => None,
        }
    }
}
