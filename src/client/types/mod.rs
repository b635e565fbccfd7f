//! Type definitions for the Mealie API.
//!
//! These mirror the backend's response and request schemas. The backend speaks
//! camelCase JSON, so most types carry `#[serde(rename_all = "camelCase")]`.
//!
//! ## Key Types
//!
//! - [`Recipe`] - full recipe aggregate, identified externally by its slug
//! - [`RecipeTool`] - small named/slugged organizer entity used by the tools store
//! - [`HouseholdSummary`] - tenant-scoping entity
//! - [`ReadPlanEntry`] - a scheduled meal-plan slot
//! - [`PaginationData`] - standard wrapper for list endpoints
//!
//! ## Unknown fields
//!
//! Types that the client sends back to the server after editing (recipes,
//! organizers, query-filter parts) keep unrecognised fields in an `other` map
//! so a round trip does not drop data.

pub mod household;
pub mod meal_plan;
pub mod query_filter;
pub mod recipe;
pub mod user;

pub use household::*;
pub use meal_plan::*;
pub use query_filter::*;
pub use recipe::*;
pub use user::*;

use serde::{Deserialize, Deserializer, Serialize};

/// Standard paginated response wrapper used by Mealie list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationData<T> {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    #[serde(default)]
    pub total_pages: i64,
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// Treats an explicit `null` like a missing field. The backend sends `null`
/// for several list fields it has nothing for.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_lists_decode_as_empty() {
        let summary: RecipeSummary = serde_json::from_value(json!({
            "slug": "soup", "recipeCategory": null, "tags": null, "tools": null
        }))
        .unwrap();
        assert!(summary.recipe_category.is_empty());
        assert!(summary.tags.is_empty());
        assert!(summary.tools.is_empty());
    }
}
