use anyhow::Result;

use crate::client::base::{CrudApi, CrudRoutes, ReadOnlyApi};
use crate::client::requests::ApiRequests;
use crate::client::types::*;

pub mod routes {
    pub const PREFIX: &str = "/api";

    pub const TOOLS: &str = "/api/organizers/tools";

    pub fn tools_id(id: &str) -> String {
        format!("{}/organizers/tools/{}", PREFIX, id)
    }

    pub fn tools_slug(slug: &str) -> String {
        format!("{}/organizers/tools/slug/{}", PREFIX, slug)
    }
}

/// Kitchen tool organizers.
#[derive(Clone)]
pub struct ToolsApi {
    requests: ApiRequests,
    routes: CrudRoutes,
}

impl ReadOnlyApi for ToolsApi {
    type Item = RecipeTool;

    fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    fn routes(&self) -> &CrudRoutes {
        &self.routes
    }
}

impl CrudApi for ToolsApi {
    type Create = RecipeToolCreate;
    type Update = RecipeTool;
}

impl ToolsApi {
    pub fn new(requests: ApiRequests) -> Self {
        Self {
            requests,
            routes: CrudRoutes::new(routes::TOOLS, routes::tools_id),
        }
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<RecipeTool> {
        self.requests.get(&routes::tools_slug(slug)).await
    }
}
