use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::recipe::RecipeSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub group_id: String,
    #[serde(default)]
    pub preferences: Option<ReadHouseholdPreferences>,
}

/// The current user's household, including members and preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdInDB {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub group_id: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub webhooks: Vec<Value>,
    #[serde(default)]
    pub preferences: Option<ReadHouseholdPreferences>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdRecipeSummary {
    pub recipe_id: String,
    #[serde(default)]
    pub last_made: Option<String>,
    #[serde(default)]
    pub recipe: Option<RecipeSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdStatistics {
    pub total_recipes: i64,
    pub total_users: i64,
    pub total_categories: i64,
    pub total_tags: i64,
    pub total_tools: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadHouseholdPreferences {
    pub id: String,
    #[serde(default)]
    pub private_household: bool,
    #[serde(default)]
    pub lock_recipe_edits_from_other_households: bool,
    #[serde(default)]
    pub first_day_of_week: i64,
    #[serde(default)]
    pub recipe_public: bool,
    #[serde(default)]
    pub recipe_show_nutrition: bool,
    #[serde(default)]
    pub recipe_show_assets: bool,
    #[serde(default)]
    pub recipe_landscape_view: bool,
    #[serde(default)]
    pub recipe_disable_comments: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHouseholdPreferences {
    pub private_household: bool,
    pub lock_recipe_edits_from_other_households: bool,
    pub first_day_of_week: i64,
    pub recipe_public: bool,
    pub recipe_show_nutrition: bool,
    pub recipe_show_assets: bool,
    pub recipe_landscape_view: bool,
    pub recipe_disable_comments: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPermissions {
    pub user_id: String,
    pub can_manage_household: bool,
    pub can_manage: bool,
    pub can_invite: bool,
    pub can_organize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInviteToken {
    pub uses: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadInviteToken {
    pub token: String,
    pub uses_left: i64,
    pub group_id: String,
    pub household_id: String,
}
