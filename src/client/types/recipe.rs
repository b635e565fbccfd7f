use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

/// A complete recipe as returned by `/api/recipes/{slug}`.
///
/// The slug is the stable external identifier; `id` is internal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub recipe_servings: Option<f64>,
    #[serde(default)]
    pub recipe_yield_quantity: Option<f64>,
    #[serde(default)]
    pub recipe_yield: Option<String>,
    #[serde(default)]
    pub total_time: Option<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub perform_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipe_category: Vec<RecipeCategory>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<RecipeTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools: Vec<RecipeTool>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "orgURL", default)]
    pub org_url: Option<String>,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub date_updated: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub last_made: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipe_ingredient: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipe_instructions: Vec<Value>,
    #[serde(default)]
    pub nutrition: Option<Value>,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: Vec<RecipeAsset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<RecipeComment>,
    /// Fields this client does not model explicitly.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Lightweight recipe view embedded in meal plans, households and suggestions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipe_category: Vec<RecipeCategory>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<RecipeTag>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools: Vec<RecipeTool>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_time: Option<String>,
    #[serde(default)]
    pub last_made: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRecipe {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCategory {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTag {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Kitchen tool organizer (e.g. "Stand Mixer"), many-to-many with recipes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTool {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub households_with_tool: Vec<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeToolCreate {
    pub name: String,
    #[serde(default)]
    pub households_with_tool: Vec<String>,
}

impl From<&RecipeTool> for RecipeToolCreate {
    fn from(tool: &RecipeTool) -> Self {
        Self {
            name: tool.name.clone(),
            households_with_tool: tool.households_with_tool.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeAsset {
    pub name: String,
    pub icon: String,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeComment {
    pub id: String,
    pub recipe_id: String,
    pub text: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCommentCreate {
    pub recipe_id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCommentUpdate {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTimelineEventIn {
    pub recipe_id: String,
    pub subject: String,
    pub event_type: String,
    #[serde(default)]
    pub event_message: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTimelineEventOut {
    pub id: String,
    pub recipe_id: String,
    pub subject: String,
    pub event_type: String,
    #[serde(default)]
    pub event_message: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTimelineEventUpdate {
    pub subject: String,
    #[serde(default)]
    pub event_message: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeZipTokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeShareTokenCreate {
    pub recipe_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Public share link for one recipe. The token id is the link secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeShareToken {
    pub id: String,
    pub recipe_id: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub recipe: Option<Recipe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLastMade {
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageResponse {
    pub image: String,
}

/// Filters for `/api/recipes/suggestions`. `None` fields are left off the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_missing_foods: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_missing_tools: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_foods_on_hand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tools_on_hand: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestionResponseItem {
    pub recipe: RecipeSummary,
    #[serde(default)]
    pub missing_foods: Vec<Value>,
    #[serde(default)]
    pub missing_tools: Vec<RecipeTool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSuggestionResponse {
    pub items: Vec<RecipeSuggestionResponseItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRecipeBulk {
    pub url: String,
    #[serde(default)]
    pub categories: Vec<RecipeCategory>,
    #[serde(default)]
    pub tags: Vec<RecipeTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRecipeByUrlBulk {
    pub imports: Vec<CreateRecipeBulk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    #[serde(default)]
    pub input: Option<String>,
    pub confidence: Value,
    pub ingredient: Value,
}
