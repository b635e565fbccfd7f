//! Recipe endpoints: CRUD, search, suggestions, imports, assets and images,
//! ingredient parsing, zip export and timeline events.

use anyhow::Result;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::client::base::{CrudApi, CrudRoutes, ReadOnlyApi};
use crate::client::requests::ApiRequests;
use crate::client::route::{merge_params, route, with_query};
use crate::client::transport::{FileUpload, FormData};
use crate::client::types::*;

/// Server-side recipe import from images can take minutes.
pub const CREATE_FROM_IMAGES_TIMEOUT: Duration = Duration::from_millis(120_000);

pub mod routes {
    pub const PREFIX: &str = "/api";

    pub const RECIPES_CREATE: &str = "/api/recipes/create";
    pub const RECIPES_BASE: &str = "/api/recipes";
    pub const RECIPES_SUGGESTIONS: &str = "/api/recipes/suggestions";
    pub const RECIPES_TEST_SCRAPE_URL: &str = "/api/recipes/test-scrape-url";
    pub const RECIPES_CREATE_URL: &str = "/api/recipes/create/url";
    pub const RECIPES_CREATE_URL_BULK: &str = "/api/recipes/create/url/bulk";
    pub const RECIPES_CREATE_FROM_ZIP: &str = "/api/recipes/create/zip";
    pub const RECIPES_CREATE_FROM_IMAGE: &str = "/api/recipes/create/image";
    pub const RECIPES_CREATE_FROM_HTML_OR_JSON: &str = "/api/recipes/create/html-or-json";
    pub const RECIPES_CATEGORY: &str = "/api/recipes/category";
    pub const RECIPES_PARSE_INGREDIENT: &str = "/api/parser/ingredient";
    pub const RECIPES_PARSE_INGREDIENTS: &str = "/api/parser/ingredients";
    pub const RECIPES_TIMELINE_EVENT: &str = "/api/recipes/timeline/events";
    pub const COMMENTS: &str = "/api/comments";
    pub const SHARED_RECIPES: &str = "/api/shared/recipes";

    pub fn recipes_recipe_slug(recipe_slug: &str) -> String {
        format!("{}/recipes/{}", PREFIX, recipe_slug)
    }

    pub fn recipes_recipe_slug_export(recipe_slug: &str) -> String {
        format!("{}/recipes/{}/exports", PREFIX, recipe_slug)
    }

    pub fn recipes_recipe_slug_export_zip(recipe_slug: &str) -> String {
        format!("{}/recipes/{}/exports/zip", PREFIX, recipe_slug)
    }

    pub fn recipes_recipe_slug_image(recipe_slug: &str) -> String {
        format!("{}/recipes/{}/image", PREFIX, recipe_slug)
    }

    pub fn recipes_recipe_slug_assets(recipe_slug: &str) -> String {
        format!("{}/recipes/{}/assets", PREFIX, recipe_slug)
    }

    pub fn recipes_slug_comments(slug: &str) -> String {
        format!("{}/recipes/{}/comments", PREFIX, slug)
    }

    pub fn recipes_slug_comments_id(slug: &str, id: &str) -> String {
        format!("{}/recipes/{}/comments/{}", PREFIX, slug, id)
    }

    pub fn shared_recipes_id(id: &str) -> String {
        format!("{}/shared/recipes/{}", PREFIX, id)
    }

    pub fn recipes_shared_token(token_id: &str) -> String {
        format!("{}/recipes/shared/{}", PREFIX, token_id)
    }

    pub fn recipes_slug_last_made(slug: &str) -> String {
        format!("{}/recipes/{}/last-made", PREFIX, slug)
    }

    pub fn recipes_timeline_event_id(id: &str) -> String {
        format!("{}/recipes/timeline/events/{}", PREFIX, id)
    }

    pub fn recipes_timeline_event_id_image(id: &str) -> String {
        format!("{}/recipes/timeline/events/{}/image", PREFIX, id)
    }

    pub fn comments_id(id: &str) -> String {
        format!("{}/comments/{}", PREFIX, id)
    }
}

/// Ingredient parser selection. Unset selections fall back to [`Parser::Nlp`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parser {
    #[default]
    Nlp,
    Brute,
    Openai,
}

/// Recipe search filters for `GET /api/recipes`. `None` fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookbook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub households: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_all_categories: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_all_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_all_tools: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_all_foods: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by_null_position: Option<String>,
    #[serde(rename = "_searchSeed", skip_serializing_if = "Option::is_none")]
    pub search_seed: Option<String>,
}

/// A file attached to a recipe, uploaded as multipart.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAsset {
    pub name: String,
    pub icon: String,
    pub extension: String,
    pub file: FileUpload,
}

/// Builds the suggestion query: `query` merged with the optional food and tool lists.
pub(crate) fn suggestion_route(
    base: &str,
    query: &RecipeSuggestionQuery,
    foods: Option<&[String]>,
    tools: Option<&[String]>,
) -> Result<String> {
    let params = merge_params(query, &json!({ "foods": foods, "tools": tools }))?;
    route(base, &params)
}

pub struct RecipeApi {
    requests: ApiRequests,
    routes: CrudRoutes,
    pub comments: CommentsApi,
    pub share: RecipeShareApi,
}

impl ReadOnlyApi for RecipeApi {
    type Item = Recipe;

    fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    fn routes(&self) -> &CrudRoutes {
        &self.routes
    }
}

impl CrudApi for RecipeApi {
    type Create = CreateRecipe;
    type Update = Recipe;
}

impl RecipeApi {
    pub fn new(requests: ApiRequests) -> Self {
        Self {
            comments: CommentsApi::new(requests.clone()),
            share: RecipeShareApi::new(requests.clone()),
            routes: CrudRoutes::new(routes::RECIPES_BASE, routes::recipes_recipe_slug),
            requests,
        }
    }

    pub async fn search(&self, query: &RecipeSearchQuery) -> Result<PaginationData<Recipe>> {
        self.requests.get(&route(routes::RECIPES_BASE, query)?).await
    }

    pub async fn get_all_by_category(&self, categories: &[String]) -> Result<Vec<Recipe>> {
        let url = route(routes::RECIPES_CATEGORY, &json!({ "categories": categories }))?;
        self.requests.get(&url).await
    }

    pub async fn get_suggestions(
        &self,
        query: &RecipeSuggestionQuery,
        foods: Option<&[String]>,
        tools: Option<&[String]>,
    ) -> Result<RecipeSuggestionResponse> {
        let url = suggestion_route(routes::RECIPES_SUGGESTIONS, query, foods, tools)?;
        self.requests.get(&url).await
    }

    pub async fn create_asset(&self, recipe_slug: &str, payload: CreateAsset) -> Result<RecipeAsset> {
        let form = FormData::new()
            .file("file", payload.file)
            .text("name", payload.name)
            .text("extension", payload.extension)
            .text("icon", payload.icon);

        self.requests
            .send_form(Method::POST, &routes::recipes_recipe_slug_assets(recipe_slug), form, None)
            .await
    }

    pub async fn update_image(&self, slug: &str, file: FileUpload) -> Result<UpdateImageResponse> {
        let extension = file.extension().to_string();
        let form = FormData::new().file("image", file).text("extension", extension);

        self.requests
            .send_form(Method::PUT, &routes::recipes_recipe_slug_image(slug), form, None)
            .await
    }

    pub async fn update_image_by_url(&self, slug: &str, url: &str) -> Result<UpdateImageResponse> {
        self.requests
            .post(&routes::recipes_recipe_slug_image(slug), &json!({ "url": url }))
            .await
    }

    pub async fn test_create_one_url(&self, url: &str, use_openai: bool) -> Result<Option<Recipe>> {
        self.requests
            .post(
                routes::RECIPES_TEST_SCRAPE_URL,
                &json!({ "url": url, "useOpenAI": use_openai }),
            )
            .await
    }

    /// Returns the slug of the created recipe.
    pub async fn create_one_by_html_or_json(&self, data: &str, include_tags: bool) -> Result<String> {
        self.requests
            .post(
                routes::RECIPES_CREATE_FROM_HTML_OR_JSON,
                &json!({ "data": data, "includeTags": include_tags }),
            )
            .await
    }

    /// Returns the slug of the created recipe.
    pub async fn create_one_by_url(&self, url: &str, include_tags: bool) -> Result<String> {
        self.requests
            .post(
                routes::RECIPES_CREATE_URL,
                &json!({ "url": url, "includeTags": include_tags }),
            )
            .await
    }

    pub async fn create_many_by_url(&self, payload: &CreateRecipeByUrlBulk) -> Result<String> {
        self.requests.post(routes::RECIPES_CREATE_URL_BULK, payload).await
    }

    pub async fn create_one_from_zip(&self, archive: FileUpload) -> Result<String> {
        let form = FormData::new().file("archive", archive);
        self.requests
            .send_form(Method::POST, routes::RECIPES_CREATE_FROM_ZIP, form, None)
            .await
    }

    /// Creates a recipe from photos. Uses [`CREATE_FROM_IMAGES_TIMEOUT`].
    pub async fn create_one_from_images(
        &self,
        files: Vec<FileUpload>,
        translate_language: Option<&str>,
    ) -> Result<String> {
        let form = files
            .into_iter()
            .fold(FormData::new(), |form, file| form.file("images", file));

        let url = match translate_language {
            Some(lang) if !lang.is_empty() => with_query(
                routes::RECIPES_CREATE_FROM_IMAGE,
                &[("translateLanguage".to_string(), lang.to_string())],
            ),
            _ => routes::RECIPES_CREATE_FROM_IMAGE.to_string(),
        };

        self.requests
            .send_form(Method::POST, &url, form, Some(CREATE_FROM_IMAGES_TIMEOUT))
            .await
    }

    pub async fn parse_ingredients(
        &self,
        parser: Option<Parser>,
        ingredients: &[String],
    ) -> Result<Vec<ParsedIngredient>> {
        let parser = parser.unwrap_or_default();
        self.requests
            .post(
                routes::RECIPES_PARSE_INGREDIENTS,
                &json!({ "parser": parser, "ingredients": ingredients }),
            )
            .await
    }

    pub async fn parse_ingredient(&self, parser: Option<Parser>, ingredient: &str) -> Result<ParsedIngredient> {
        let parser = parser.unwrap_or_default();
        self.requests
            .post(
                routes::RECIPES_PARSE_INGREDIENT,
                &json!({ "parser": parser, "ingredient": ingredient }),
            )
            .await
    }

    /// Requests a short-lived token for downloading the recipe as a zip.
    pub async fn get_zip_token(&self, recipe_slug: &str) -> Result<RecipeZipTokenResponse> {
        self.requests
            .post(&routes::recipes_recipe_slug_export(recipe_slug), &json!({}))
            .await
    }

    /// URL the browser navigates to for the actual download.
    pub fn get_zip_redirect_url(&self, recipe_slug: &str, token: &str) -> String {
        format!("{}?token={}", routes::recipes_recipe_slug_export_zip(recipe_slug), token)
    }

    /// Runs both steps of the export flow and returns the download URL.
    pub async fn export_zip_url(&self, recipe_slug: &str) -> Result<String> {
        let token = self.get_zip_token(recipe_slug).await?;
        Ok(self.get_zip_redirect_url(recipe_slug, &token.token))
    }

    pub async fn update_many(&self, payload: &[Recipe]) -> Result<Vec<Recipe>> {
        self.requests.put(routes::RECIPES_BASE, payload).await
    }

    pub async fn patch_many(&self, payload: &[Recipe]) -> Result<Vec<Recipe>> {
        self.requests.patch(routes::RECIPES_BASE, payload).await
    }

    pub async fn update_last_made(&self, recipe_slug: &str, timestamp: chrono::DateTime<chrono::Utc>) -> Result<Recipe> {
        let payload = RecipeLastMade {
            timestamp: timestamp.to_rfc3339(),
        };
        self.requests
            .patch(&routes::recipes_slug_last_made(recipe_slug), &payload)
            .await
    }

    // Timeline events
    pub async fn create_timeline_event(&self, payload: &RecipeTimelineEventIn) -> Result<RecipeTimelineEventOut> {
        self.requests.post(routes::RECIPES_TIMELINE_EVENT, payload).await
    }

    pub async fn update_timeline_event(
        &self,
        event_id: &str,
        payload: &RecipeTimelineEventUpdate,
    ) -> Result<RecipeTimelineEventOut> {
        self.requests
            .put(&routes::recipes_timeline_event_id(event_id), payload)
            .await
    }

    pub async fn delete_timeline_event(&self, event_id: &str) -> Result<RecipeTimelineEventOut> {
        self.requests
            .delete(&routes::recipes_timeline_event_id(event_id))
            .await
    }

    pub async fn get_all_timeline_events<P>(
        &self,
        page: i64,
        per_page: i64,
        params: &P,
    ) -> Result<PaginationData<RecipeTimelineEventOut>>
    where
        P: Serialize + ?Sized,
    {
        let params = merge_params(&json!({ "page": page, "perPage": per_page }), params)?;
        self.requests
            .get(&route(routes::RECIPES_TIMELINE_EVENT, &params)?)
            .await
    }

    pub async fn update_timeline_event_image(
        &self,
        event_id: &str,
        file: FileUpload,
    ) -> Result<UpdateImageResponse> {
        let extension = file.extension().to_string();
        let form = FormData::new().file("image", file).text("extension", extension);

        self.requests
            .send_form(
                Method::PUT,
                &routes::recipes_timeline_event_id_image(event_id),
                form,
                None,
            )
            .await
    }
}

/// Recipe comments. Listing is per recipe; create/update/delete go through
/// the flat `/api/comments` collection.
pub struct CommentsApi {
    requests: ApiRequests,
    routes: CrudRoutes,
}

impl ReadOnlyApi for CommentsApi {
    type Item = RecipeComment;

    fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    fn routes(&self) -> &CrudRoutes {
        &self.routes
    }
}

impl CrudApi for CommentsApi {
    type Create = RecipeCommentCreate;
    type Update = RecipeCommentUpdate;
}

impl CommentsApi {
    pub fn new(requests: ApiRequests) -> Self {
        Self {
            requests,
            routes: CrudRoutes::new(routes::COMMENTS, routes::comments_id),
        }
    }

    pub async fn get_all_for_recipe(&self, slug: &str) -> Result<Vec<RecipeComment>> {
        self.requests.get(&routes::recipes_slug_comments(slug)).await
    }
}

/// Share tokens: links that expose one recipe without logging in.
pub struct RecipeShareApi {
    requests: ApiRequests,
    routes: CrudRoutes,
}

impl ReadOnlyApi for RecipeShareApi {
    type Item = RecipeShareToken;

    fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    fn routes(&self) -> &CrudRoutes {
        &self.routes
    }
}

impl CrudApi for RecipeShareApi {
    type Create = RecipeShareTokenCreate;
    type Update = RecipeShareTokenCreate;
}

impl RecipeShareApi {
    pub fn new(requests: ApiRequests) -> Self {
        Self {
            requests,
            routes: CrudRoutes::new(routes::SHARED_RECIPES, routes::shared_recipes_id),
        }
    }

    /// Resolves a share token to its recipe. Expired or unknown tokens answer 404.
    pub async fn get_shared_recipe(&self, token_id: &str) -> Result<Recipe> {
        self.requests.get(&routes::recipes_shared_token(token_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_routes_substitute_slug_verbatim() {
        assert_eq!(routes::recipes_recipe_slug("abc"), "/api/recipes/abc");
        assert_eq!(routes::recipes_recipe_slug_export("abc"), "/api/recipes/abc/exports");
        assert_eq!(routes::recipes_recipe_slug_export_zip("abc"), "/api/recipes/abc/exports/zip");
        assert_eq!(routes::recipes_recipe_slug_image("abc"), "/api/recipes/abc/image");
        assert_eq!(routes::recipes_recipe_slug_assets("abc"), "/api/recipes/abc/assets");
        assert_eq!(routes::recipes_slug_comments("abc"), "/api/recipes/abc/comments");
        assert_eq!(routes::recipes_slug_comments_id("abc", "7"), "/api/recipes/abc/comments/7");
        assert_eq!(routes::recipes_slug_last_made("abc"), "/api/recipes/abc/last-made");
        assert_eq!(routes::shared_recipes_id("t1"), "/api/shared/recipes/t1");
        assert_eq!(routes::recipes_shared_token("t1"), "/api/recipes/shared/t1");
        assert_eq!(routes::recipes_timeline_event_id("e1"), "/api/recipes/timeline/events/e1");
        assert_eq!(
            routes::recipes_timeline_event_id_image("e1"),
            "/api/recipes/timeline/events/e1/image"
        );
    }

    #[test]
    fn search_query_skips_unset_fields() {
        let query = RecipeSearchQuery {
            search: Some("soup".into()),
            tags: Some(vec!["a".into(), "b".into()]),
            page: Some(2),
            ..Default::default()
        };
        let url = route(routes::RECIPES_BASE, &query).unwrap();
        assert_eq!(url, "/api/recipes?page=2&search=soup&tags=a&tags=b");
    }

    #[test]
    fn suggestion_route_merges_foods_and_tools() {
        let query = RecipeSuggestionQuery {
            limit: Some(10),
            ..Default::default()
        };
        let foods = vec!["egg".to_string(), "milk".to_string()];
        let url = suggestion_route(routes::RECIPES_SUGGESTIONS, &query, Some(&foods), None).unwrap();
        assert_eq!(url, "/api/recipes/suggestions?foods=egg&foods=milk&limit=10");
    }

    #[test]
    fn parser_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Parser::default()).unwrap(), json!("nlp"));
        assert_eq!(serde_json::to_value(Parser::Openai).unwrap(), json!("openai"));
    }
}
