//! Household meal plans and the rules that drive random meal selection.

use anyhow::Result;

use crate::client::base::{CrudApi, CrudRoutes, ReadOnlyApi};
use crate::client::requests::ApiRequests;
use crate::client::types::*;

pub mod routes {
    pub const PREFIX: &str = "/api";

    pub const MEALPLANS: &str = "/api/households/mealplans";
    pub const MEALPLANS_TODAY: &str = "/api/households/mealplans/today";
    pub const MEALPLANS_RANDOM: &str = "/api/households/mealplans/random";
    pub const MEALPLAN_RULES: &str = "/api/households/mealplans/rules";

    pub fn mealplans_id(id: &str) -> String {
        format!("{}/households/mealplans/{}", PREFIX, id)
    }

    pub fn mealplan_rules_id(id: &str) -> String {
        format!("{}/households/mealplans/rules/{}", PREFIX, id)
    }
}

pub struct MealPlanApi {
    requests: ApiRequests,
    routes: CrudRoutes,
}

impl ReadOnlyApi for MealPlanApi {
    type Item = ReadPlanEntry;

    fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    fn routes(&self) -> &CrudRoutes {
        &self.routes
    }
}

impl CrudApi for MealPlanApi {
    type Create = CreatePlanEntry;
    type Update = UpdatePlanEntry;
}

impl MealPlanApi {
    pub fn new(requests: ApiRequests) -> Self {
        Self {
            requests,
            routes: CrudRoutes::new(routes::MEALPLANS, routes::mealplans_id),
        }
    }

    pub async fn get_today(&self) -> Result<Vec<ReadPlanEntry>> {
        self.requests.get(routes::MEALPLANS_TODAY).await
    }

    /// Lets the backend pick a recipe for the slot using the matching rules.
    pub async fn set_random(&self, payload: &CreateRandomEntry) -> Result<ReadPlanEntry> {
        self.requests.post(routes::MEALPLANS_RANDOM, payload).await
    }
}

pub struct MealPlanRulesApi {
    requests: ApiRequests,
    routes: CrudRoutes,
}

impl ReadOnlyApi for MealPlanRulesApi {
    type Item = PlanRulesOut;

    fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    fn routes(&self) -> &CrudRoutes {
        &self.routes
    }
}

impl CrudApi for MealPlanRulesApi {
    type Create = PlanRulesCreate;
    type Update = PlanRulesCreate;
}

impl MealPlanRulesApi {
    pub fn new(requests: ApiRequests) -> Self {
        Self {
            requests,
            routes: CrudRoutes::new(routes::MEALPLAN_RULES, routes::mealplan_rules_id),
        }
    }
}
