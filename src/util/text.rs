//! Plain-text extraction and excerpting.

use crate::domain::ContentBody;

pub const DEFAULT_EXCERPT_LENGTH: usize = 160;

/// Short preview of a content body: markup stripped, whitespace collapsed,
/// truncated at a word boundary with a trailing ellipsis.
pub fn excerpt(body: &ContentBody, max_length: usize) -> String {
    let flat = match body {
        ContentBody::RichText(blocks) => blocks
            .iter()
            .filter_map(|block| block.paragraph_text().filter(|text| !text.is_empty()))
            .collect::<Vec<_>>()
            .join(" "),
        ContentBody::Plain(raw) => strip_markup(raw),
    };
    truncate_at_word(&normalize_whitespace(&flat), max_length)
}

/// Collapse runs of whitespace (including newlines) to single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max_chars` characters, backing up to the last
/// space so words are never split. Anything cut gains a `...` suffix.
pub fn truncate_at_word(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    match head.rfind(' ') {
        Some(boundary) => format!("{}...", head[..boundary].trim_end()),
        None => format!("{head}..."),
    }
}

/// Drop HTML tags, keeping the text between them.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Reduce a plain body to display text: HTML tags, Markdown heading markers
/// and emphasis asterisks removed.
pub fn strip_markup(text: &str) -> String {
    let stripped = strip_html(text);
    stripped
        .lines()
        .map(|line| line.trim_start_matches('#').trim_start().replace('*', ""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// URL-safe slug for a title.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Capitalize every whitespace-separated word, for example to display a
/// department slug as a heading.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StructuredBlock;

    #[test]
    fn truncation_backs_up_to_word_boundary() {
        let body = ContentBody::Plain("The quick brown fox jumps".to_string());
        assert_eq!(excerpt(&body, 10), "The quick...");
    }

    #[test]
    fn short_text_passes_through_without_ellipsis() {
        let body = ContentBody::Plain("Rapat anggota".to_string());
        assert_eq!(excerpt(&body, 160), "Rapat anggota");
    }

    #[test]
    fn unbroken_text_is_hard_cut() {
        assert_eq!(truncate_at_word("aaaaaaaaaa", 4), "aaaa...");
    }

    #[test]
    fn markup_is_stripped_before_truncation() {
        let body = ContentBody::Plain("# Judul\n\n<p>Isi **penting** berita</p>".to_string());
        assert_eq!(excerpt(&body, 160), "Judul Isi penting berita");
    }

    #[test]
    fn rich_text_paragraphs_are_joined_with_spaces() {
        let blocks: Vec<StructuredBlock> = serde_json::from_value(serde_json::json!([
            {"type": "paragraph", "children": [{"type": "text", "text": "Kalimat pertama."}]},
            {"type": "paragraph", "children": [{"type": "text", "text": "Kalimat kedua."}]}
        ]))
        .unwrap();
        let body = ContentBody::RichText(blocks);
        assert_eq!(excerpt(&body, 160), "Kalimat pertama. Kalimat kedua.");
    }

    #[test]
    fn slugify_handles_accents_and_spaces() {
        assert_eq!(slugify("Pengumuman Rapat Anggota"), "pengumuman-rapat-anggota");
    }

    #[test]
    fn capitalize_words_titles_a_phrase() {
        assert_eq!(capitalize_words("hubungan masyarakat"), "Hubungan Masyarakat");
    }
}
