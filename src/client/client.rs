use anyhow::Result;
use std::sync::Arc;

use crate::client::{
    admin_users::AdminUsersApi,
    auth::MealieAuth,
    explore::PublicRecipeApi,
    households::HouseholdApi,
    meal_plans::{MealPlanApi, MealPlanRulesApi},
    recipes::RecipeApi,
    requests::ApiRequests,
    tools::ToolsApi,
    transport::{ReqwestTransport, Transport},
};
use crate::config::ClientConfig;

/// Entry point bundling every resource client over one shared transport.
pub struct MealieClient {
    base_url: String,
    requests: ApiRequests,
    auth: MealieAuth,
    pub recipes: RecipeApi,
    pub households: HouseholdApi,
    pub tools: ToolsApi,
    pub meal_plans: MealPlanApi,
    pub meal_plan_rules: MealPlanRulesApi,
    pub admin_users: AdminUsersApi,
}

impl MealieClient {
    pub fn new(base_url: String) -> Self {
        let transport = Arc::new(ReqwestTransport::new(base_url.clone()));
        Self::with_transport(base_url, transport)
    }

    /// Builds a client from configuration, applying the request timeout and
    /// any configured API token.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::with_timeout(
            config.base_url.clone(),
            config.timeout,
        )?);
        let mut client = Self::with_transport(config.base_url.clone(), transport);
        if let Some(token) = &config.api_token {
            client.set_token(token.clone());
        }
        Ok(client)
    }

    pub fn with_transport(base_url: String, transport: Arc<dyn Transport>) -> Self {
        let requests = ApiRequests::new(transport);
        Self {
            recipes: RecipeApi::new(requests.clone()),
            households: HouseholdApi::new(requests.clone()),
            tools: ToolsApi::new(requests.clone()),
            meal_plans: MealPlanApi::new(requests.clone()),
            meal_plan_rules: MealPlanRulesApi::new(requests.clone()),
            admin_users: AdminUsersApi::new(requests.clone()),
            auth: MealieAuth::new(base_url.clone(), requests.clone()),
            requests,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    /// Public recipe browsing for `group_slug`; works without a token.
    pub fn explore(&self, group_slug: &str) -> PublicRecipeApi {
        PublicRecipeApi::new(self.requests.clone(), group_slug)
    }

    pub async fn authenticate(&mut self, username: String, password: String) -> Result<()> {
        self.auth.authenticate(username, password).await?;
        self.requests
            .transport()
            .set_token(self.auth.get_token().map(str::to_string));
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn get_token_preview(&self) -> Option<String> {
        self.auth
            .get_token()
            .map(|t| format!("{}...", t.chars().take(10).collect::<String>()))
    }

    pub fn set_token(&mut self, token: String) {
        self.requests.transport().set_token(Some(token.clone()));
        self.auth.set_token(token);
    }

    pub fn get_token(&self) -> Option<&str> {
        self.auth.get_token()
    }

    pub fn logout(&mut self) {
        self.auth.clear_token();
        self.requests.transport().set_token(None);
    }
}
