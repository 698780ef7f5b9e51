#![deny(clippy::all, clippy::pedantic)]

use serde::Serialize;
use warta::domain::{ContentItem, Page, StaffMember};
use warta::SearchResults;
use warta::util::{datetime, text};

use crate::CliError;

const LIST_EXCERPT_LENGTH: usize = 120;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{out}");
    Ok(())
}

pub fn page(page: &Page<ContentItem>) {
    if page.is_empty() {
        println!("(no entries)");
        return;
    }
    for item in &page.items {
        line(item);
    }
    let meta = &page.pagination;
    println!(
        "page {}/{} ({} total)",
        meta.page,
        meta.page_count.max(1),
        meta.total
    );
}

pub fn line(item: &ContentItem) {
    let date = item
        .published_at
        .map_or_else(|| "(unpublished)".to_string(), datetime::format_date_short);
    println!("{:>6}  {}  {}", item.id, date, item.title);
    let excerpt = item.excerpt(LIST_EXCERPT_LENGTH);
    if !excerpt.is_empty() {
        println!("        {excerpt}");
    }
}

pub fn detail(item: &ContentItem) {
    println!("{}", item.title);
    if let Some(published) = item.published_at {
        println!(
            "{} ({})",
            datetime::format_date(published),
            datetime::time_ago_from_now(published)
        );
    }
    if let Some(author) = &item.author {
        println!("by {author}");
    }
    if let Some(category) = &item.category {
        println!("category: {category}");
    }
    println!();
    println!("{}", item.body.plain_text());
}

pub fn search_results(results: &SearchResults) {
    if results.is_empty() {
        println!("(no matches)");
        return;
    }
    if !results.news.is_empty() {
        println!("news:");
        for item in &results.news {
            line(item);
        }
    }
    if !results.articles.is_empty() {
        println!("articles:");
        for item in &results.articles {
            line(item);
        }
    }
}

pub fn staff(members: &[StaffMember]) {
    if members.is_empty() {
        println!("(no staff)");
        return;
    }
    for member in members {
        let mut line = member.name.clone();
        if !member.position.is_empty() {
            line.push_str(&format!(" - {}", member.position));
        }
        if let Some(department) = &member.department {
            line.push_str(&format!(" ({})", text::capitalize_words(department)));
        }
        println!("{line}");
    }
}
