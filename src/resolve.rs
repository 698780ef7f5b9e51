//! Ordered lookup strategies for resolving a user-facing identifier.
//!
//! The backend migrated addressing schemes twice, so an identifier reaching a
//! detail page can be a legacy numeric id, an opaque document id, or a
//! human-readable slug. Resolution tries an ordered list of strategies and
//! takes the first match; a strategy that fails (network, HTTP, or zero
//! results) never aborts the whole resolution. Exhausting every strategy is
//! the NotFound outcome and surfaces as `None`, not an error; unknown
//! identifiers are an expected input.
//!
//! Resolution results are deliberately not cached: detail identifiers rarely
//! repeat within a session, unlike list queries.

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::{ApiClient, FetchError};
use crate::domain::ContentItem;
use crate::query::Query;

/// One way of turning an identifier into a lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// `filters[id][$eq]`: cheap and authoritative, but only meaningful when
    /// the identifier is a whole non-negative integer.
    NumericId,
    /// Direct `GET /{collection}/{identifier}`, treating the identifier as an
    /// opaque document id.
    DocumentId,
    /// `filters[slug][$eq]`, exact match.
    SlugExact,
    /// `filters[slug][$containsi]`, last-resort fuzzy match.
    SlugContains,
}

/// Ordered strategies for an identifier of unknown kind.
///
/// The numeric lookup leads whenever the identifier is all digits, so an
/// identifier that is both a valid integer and an existing slug resolves by
/// id; ordering is the tie-break rule.
pub fn strategy_plan(identifier: &str) -> Vec<LookupStrategy> {
    let mut plan = Vec::with_capacity(4);
    if is_numeric(identifier) {
        plan.push(LookupStrategy::NumericId);
    }
    plan.extend([
        LookupStrategy::DocumentId,
        LookupStrategy::SlugExact,
        LookupStrategy::SlugContains,
    ]);
    plan
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|byte| byte.is_ascii_digit())
}

/// Resolve `identifier` against `collection` using the default plan.
pub(crate) async fn resolve_entry(
    client: &ApiClient,
    collection: &str,
    identifier: &str,
) -> Option<ContentItem> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }
    resolve_with_plan(client, collection, identifier, &strategy_plan(identifier)).await
}

/// Run the given strategies in order, first match wins.
pub(crate) async fn resolve_with_plan(
    client: &ApiClient,
    collection: &str,
    identifier: &str,
    plan: &[LookupStrategy],
) -> Option<ContentItem> {
    for strategy in plan {
        match run_strategy(client, collection, identifier, *strategy).await {
            Ok(Some(item)) => {
                debug!(collection, identifier, ?strategy, "resolved content item");
                return Some(item);
            }
            Ok(None) => {
                debug!(collection, identifier, ?strategy, "no match, trying next strategy");
            }
            Err(error) => {
                debug!(collection, identifier, ?strategy, %error, "strategy failed, trying next");
            }
        }
    }
    warn!(collection, identifier, "identifier did not resolve");
    None
}

async fn run_strategy(
    client: &ApiClient,
    collection: &str,
    identifier: &str,
    strategy: LookupStrategy,
) -> Result<Option<ContentItem>, FetchError> {
    let list_path = format!("/{collection}");
    match strategy {
        LookupStrategy::NumericId => {
            let query = Query::new()
                .filter_eq("id", identifier)
                .page_size(1)
                .populate("*");
            first_from_list(client, &list_path, &query).await
        }
        LookupStrategy::DocumentId => {
            let query = Query::new().populate("*");
            let value: Value = client
                .get_json(&format!("/{collection}/{identifier}"), Some(&query.build()))
                .await?;
            Ok(single_from_value(&value))
        }
        LookupStrategy::SlugExact => {
            let query = Query::new().filter_eq("slug", identifier).populate("*");
            first_from_list(client, &list_path, &query).await
        }
        LookupStrategy::SlugContains => {
            let query = Query::new().filter_contains("slug", identifier).populate("*");
            first_from_list(client, &list_path, &query).await
        }
    }
}

async fn first_from_list(
    client: &ApiClient,
    path: &str,
    query: &Query,
) -> Result<Option<ContentItem>, FetchError> {
    let value: Value = client.get_json(path, Some(&query.build())).await?;
    Ok(value
        .get("data")
        .and_then(Value::as_array)
        .and_then(|items| items.iter().find_map(ContentItem::from_value)))
}

/// The direct endpoint answers either `{data: {...}}` or the bare item,
/// depending on backend version.
fn single_from_value(value: &Value) -> Option<ContentItem> {
    match value.get("data") {
        Some(Value::Null) => None,
        Some(inner) => ContentItem::from_value(inner),
        None => ContentItem::from_value(value),
    }
}
