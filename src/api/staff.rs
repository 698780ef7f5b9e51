//! Staff directory (`staffs`) operations.

use serde_json::Value;
use tracing::warn;

use super::{ContentService, STAFF};
use crate::client::FetchError;
use crate::domain::{Envelope, StaffMember};
use crate::query::Query;

const STAFF_LIST_KEY: &str = "staff-list";

impl ContentService {
    /// Active staff ordered by their configured display order, cached.
    /// Failure degrades to an empty list.
    pub async fn staff_list(&self) -> Vec<StaffMember> {
        if let Some(cached) = self.staff_store().get(STAFF_LIST_KEY) {
            return cached;
        }
        let query = Query::new()
            .filter_bool("is_active", true)
            .populate("photo")
            .sort("order:asc");
        match self.fetch_staff(&query).await {
            Ok(members) => {
                self.staff_store()
                    .set(STAFF_LIST_KEY, members.clone(), self.config().cache_ttl);
                members
            }
            Err(error) => {
                warn!(%error, "staff list request failed, degrading to empty list");
                Vec::new()
            }
        }
    }

    /// Active staff of one department, uncached (department pages are rare).
    pub async fn staff_by_department(&self, department: &str) -> Vec<StaffMember> {
        let query = Query::new()
            .filter_eq("department", department)
            .filter_bool("is_active", true)
            .populate("photo")
            .sort("order:asc");
        match self.fetch_staff(&query).await {
            Ok(members) => members,
            Err(error) => {
                warn!(department, %error, "staff department request failed, degrading to empty list");
                Vec::new()
            }
        }
    }

    async fn fetch_staff(&self, query: &Query) -> Result<Vec<StaffMember>, FetchError> {
        let envelope: Envelope<Value> = self
            .client()
            .get_json(&format!("/{STAFF}"), Some(&query.build()))
            .await?;
        Ok(envelope
            .into_items()
            .iter()
            .filter_map(StaffMember::from_value)
            .collect())
    }
}
