use anyhow::Result;
use serde_json::json;

use crate::client::base::{CrudApi, CrudRoutes, ReadOnlyApi};
use crate::client::requests::ApiRequests;
use crate::client::types::*;

pub mod routes {
    pub const PREFIX: &str = "/api";

    pub const ADMIN_USERS: &str = "/api/admin/users";
    pub const ADMIN_PASSWORD_RESET_TOKEN: &str = "/api/admin/users/password-reset-token";

    pub fn admin_users_id(tag: &str) -> String {
        format!("{}/admin/users/{}", PREFIX, tag)
    }

    pub fn admin_reset_locked_users(force: bool) -> String {
        format!(
            "{}/admin/users/unlock?force={}",
            PREFIX,
            if force { "true" } else { "false" }
        )
    }
}

pub struct AdminUsersApi {
    requests: ApiRequests,
    routes: CrudRoutes,
}

impl ReadOnlyApi for AdminUsersApi {
    type Item = UserOut;

    fn requests(&self) -> &ApiRequests {
        &self.requests
    }

    fn routes(&self) -> &CrudRoutes {
        &self.routes
    }
}

impl CrudApi for AdminUsersApi {
    type Create = UserIn;
    type Update = UserOut;
}

impl AdminUsersApi {
    pub fn new(requests: ApiRequests) -> Self {
        Self {
            requests,
            routes: CrudRoutes::new(routes::ADMIN_USERS, routes::admin_users_id),
        }
    }

    /// Unlocks users locked out by failed logins. `force` unlocks all of them.
    pub async fn unlock_all_users(&self, force: bool) -> Result<UnlockResults> {
        self.requests
            .post(&routes::admin_reset_locked_users(force), &json!({}))
            .await
    }

    pub async fn generate_password_reset_token(&self, payload: &ForgotPassword) -> Result<PasswordResetToken> {
        self.requests
            .post(routes::ADMIN_PASSWORD_RESET_TOKEN, payload)
            .await
    }
}
