use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use crate::client::base::{CrudRoutes, ReadOnlyApi};
use crate::client::requests::ApiRequests;
use crate::client::route::{merge_params, route};
use crate::client::types::*;

pub mod routes {
    pub const PREFIX: &str = "/api";

    pub const HOUSEHOLDS: &str = "/api/groups/households";
    pub const HOUSEHOLDS_SELF: &str = "/api/households/self";
    pub const MEMBERS: &str = "/api/households/members";
    pub const PERMISSIONS: &str = "/api/households/permissions";
    pub const PREFERENCES: &str = "/api/households/preferences";
    pub const STATISTICS: &str = "/api/households/statistics";
    pub const INVITATION: &str = "/api/households/invitations";

    pub fn households_id(id: &str) -> String {
        format!("{}/groups/households/{}", PREFIX, id)
    }

    pub fn households_self_recipes_slug(recipe_slug: &str) -> String {
        format!("{}/households/self/recipes/{}", PREFIX, recipe_slug)
    }
}

/// Read-only household listing plus the current user's household endpoints.
pub struct HouseholdApi {
    requests: ApiRequests,
    routes: CrudRoutes,
}

impl ReadOnlyApi for HouseholdApi {
    type Item = HouseholdSummary;

    fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    fn routes(&self) -> &CrudRoutes {
        &self.routes
    }
}

impl HouseholdApi {
    pub fn new(requests: ApiRequests) -> Self {
        Self {
            requests,
            routes: CrudRoutes::new(routes::HOUSEHOLDS, routes::households_id),
        }
    }

    /// Returns the household data for the current user.
    pub async fn get_current_user_household(&self) -> Result<HouseholdInDB> {
        self.requests.get(routes::HOUSEHOLDS_SELF).await
    }

    pub async fn get_current_user_household_recipe(&self, recipe_slug: &str) -> Result<HouseholdRecipeSummary> {
        self.requests
            .get(&routes::households_self_recipes_slug(recipe_slug))
            .await
    }

    pub async fn get_preferences(&self) -> Result<ReadHouseholdPreferences> {
        self.requests.get(routes::PREFERENCES).await
    }

    // The backend only offers PUT here, so the whole preference set is sent.
    pub async fn set_preferences(&self, payload: &UpdateHouseholdPreferences) -> Result<ReadHouseholdPreferences> {
        self.requests.put(routes::PREFERENCES, payload).await
    }

    pub async fn create_invitation(&self, payload: &CreateInviteToken) -> Result<ReadInviteToken> {
        self.requests.post(routes::INVITATION, payload).await
    }

    pub async fn fetch_members<P>(&self, page: i64, per_page: i64, params: &P) -> Result<PaginationData<UserOut>>
    where
        P: Serialize + ?Sized,
    {
        let params = merge_params(&json!({ "page": page, "perPage": per_page }), params)?;
        self.requests.get(&route(routes::MEMBERS, &params)?).await
    }

    pub async fn set_member_permissions(&self, payload: &SetPermissions) -> Result<UserOut> {
        self.requests.put(routes::PERMISSIONS, payload).await
    }

    pub async fn statistics(&self) -> Result<HouseholdStatistics> {
        self.requests.get(routes::STATISTICS).await
    }
}
