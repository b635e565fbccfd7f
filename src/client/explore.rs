//! Public (unauthenticated) recipe browsing for a single group.

use anyhow::Result;

use crate::client::base::{CrudRoutes, ReadOnlyApi};
use crate::client::recipes::{suggestion_route, RecipeSearchQuery};
use crate::client::requests::ApiRequests;
use crate::client::route::route;
use crate::client::types::*;

pub mod routes {
    pub const PREFIX: &str = "/api";

    pub fn explore_group_slug(group_slug: &str) -> String {
        format!("{}/explore/groups/{}", PREFIX, group_slug)
    }

    pub fn recipes_group_slug(group_slug: &str) -> String {
        format!("{}/recipes", explore_group_slug(group_slug))
    }

    pub fn recipes_group_slug_recipe_slug(group_slug: &str, recipe_slug: &str) -> String {
        format!("{}/recipes/{}", explore_group_slug(group_slug), recipe_slug)
    }
}

pub struct PublicRecipeApi {
    requests: ApiRequests,
    routes: CrudRoutes,
    group_slug: String,
}

impl ReadOnlyApi for PublicRecipeApi {
    type Item = Recipe;

    fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    fn routes(&self) -> &CrudRoutes {
        &self.routes
    }
}

impl PublicRecipeApi {
    pub fn new(requests: ApiRequests, group_slug: &str) -> Self {
        let slug = group_slug.to_string();
        Self {
            requests,
            routes: CrudRoutes::new(routes::recipes_group_slug(group_slug), move |recipe_slug| {
                routes::recipes_group_slug_recipe_slug(&slug, recipe_slug)
            }),
            group_slug: group_slug.to_string(),
        }
    }

    pub fn group_slug(&self) -> &str {
        &self.group_slug
    }

    pub async fn search(&self, query: &RecipeSearchQuery) -> Result<PaginationData<Recipe>> {
        let url = route(&routes::recipes_group_slug(&self.group_slug), query)?;
        self.requests.get(&url).await
    }

    pub async fn get_suggestions(
        &self,
        query: &RecipeSuggestionQuery,
        foods: Option<&[String]>,
        tools: Option<&[String]>,
    ) -> Result<RecipeSuggestionResponse> {
        let base = format!("{}/suggestions", routes::recipes_group_slug(&self.group_slug));
        let url = suggestion_route(&base, query, foods, tools)?;
        self.requests.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explore_routes_nest_under_group() {
        assert_eq!(routes::recipes_group_slug("home"), "/api/explore/groups/home/recipes");
        assert_eq!(
            routes::recipes_group_slug_recipe_slug("home", "soup"),
            "/api/explore/groups/home/recipes/soup"
        );
    }
}
