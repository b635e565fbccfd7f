use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::household::HouseholdSummary;
use super::query_filter::QueryFilterJSON;
use super::recipe::{RecipeCategory, RecipeSummary, RecipeTag};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanEntryType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Side,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanRulesDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    #[default]
    Unset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanRulesType {
    Breakfast,
    Lunch,
    Dinner,
    Side,
    #[default]
    Unset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub entry_type: PlanEntryType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub recipe_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRandomEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub entry_type: PlanEntryType,
}

/// A scheduled meal-plan slot as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadPlanEntry {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub entry_type: PlanEntryType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub recipe_id: Option<String>,
    pub group_id: String,
    pub user_id: String,
    pub household_id: String,
    #[serde(default)]
    pub recipe: Option<RecipeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanEntry {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub entry_type: PlanEntryType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub recipe_id: Option<String>,
    pub group_id: String,
    pub user_id: String,
}

impl From<&ReadPlanEntry> for UpdatePlanEntry {
    fn from(entry: &ReadPlanEntry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            entry_type: entry.entry_type,
            title: entry.title.clone(),
            text: entry.text.clone(),
            recipe_id: entry.recipe_id.clone(),
            group_id: entry.group_id.clone(),
            user_id: entry.user_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePlanEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub entry_type: PlanEntryType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub recipe_id: Option<String>,
    pub group_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRulesCreate {
    #[serde(default)]
    pub day: PlanRulesDay,
    #[serde(default)]
    pub entry_type: PlanRulesType,
    #[serde(default)]
    pub query_filter_string: String,
}

impl PlanRulesCreate {
    /// Builds a rule whose string filter is rendered from `filter`, keeping the
    /// two representations consistent.
    pub fn from_filter(day: PlanRulesDay, entry_type: PlanRulesType, filter: &QueryFilterJSON) -> Self {
        Self {
            day,
            entry_type,
            query_filter_string: filter.to_filter_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRulesSave {
    #[serde(default)]
    pub day: PlanRulesDay,
    #[serde(default)]
    pub entry_type: PlanRulesType,
    #[serde(default)]
    pub query_filter_string: String,
    pub group_id: String,
    pub household_id: String,
}

/// A day/meal-type rule. `query_filter` and `query_filter_string` describe the
/// same filter; the client does not check that they agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRulesOut {
    pub id: String,
    #[serde(default)]
    pub day: PlanRulesDay,
    #[serde(default)]
    pub entry_type: PlanRulesType,
    #[serde(default)]
    pub query_filter_string: String,
    pub group_id: String,
    pub household_id: String,
    #[serde(default)]
    pub query_filter: Option<QueryFilterJSON>,
    #[serde(default)]
    pub categories: Vec<RecipeCategory>,
    #[serde(default)]
    pub tags: Vec<RecipeTag>,
    #[serde(default)]
    pub households: Vec<HouseholdSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListIn {
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListOut {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    pub items: Vec<ListItem>,
}
