//! Authentication handling for the Mealie API.
//!
//! Mealie issues JWT bearer tokens from `/api/auth/token` in exchange for a
//! username and password. Long-lived API tokens created in the Mealie UI can be
//! used directly through [`MealieAuth::set_token`] instead.

use anyhow::Result;

use crate::client::requests::ApiRequests;
use crate::client::transport::ApiError;
use crate::client::types::{AuthRequest, AuthToken};

pub const AUTH_TOKEN_PATH: &str = "/api/auth/token";

/// # Mealie Authentication Handler
///
/// Exchanges credentials for a bearer token and caches it. The login request
/// goes through the same transport as every other call; the cached token is
/// handed to that transport by [`crate::client::MealieClient`].
pub struct MealieAuth {
    /// Base URL of the Mealie server, used in error messages
    base_url: String,
    requests: ApiRequests,
    /// Cached bearer token
    token: Option<String>,
}

impl MealieAuth {
    pub fn new(base_url: String, requests: ApiRequests) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            requests,
            token: None,
        }
    }

    pub async fn authenticate(&mut self, username: String, password: String) -> Result<()> {
        tracing::info!("Attempting authentication for user: {}", username);

        let auth_request = AuthRequest {
            username: username.clone(),
            password,
            remember_me: false,
        };

        tracing::debug!("Making authentication request to: {}{}", self.base_url, AUTH_TOKEN_PATH);

        let auth_token: AuthToken = match self.requests.post_urlencoded(AUTH_TOKEN_PATH, &auth_request).await {
            Ok(token) => token,
            Err(e) => return Err(self.describe_failure(e)),
        };

        tracing::info!("Authentication successful for user: {}", username);
        tracing::debug!(
            "Received token: {}...",
            auth_token.access_token.chars().take(10).collect::<String>()
        );
        self.token = Some(auth_token.access_token);

        Ok(())
    }

    fn describe_failure(&self, error: anyhow::Error) -> anyhow::Error {
        match error.downcast_ref::<ApiError>() {
            Some(ApiError::Status { status, body, .. }) => {
                tracing::error!("Authentication failed with status {}: {}", status, body);
                match status.as_u16() {
                    400 | 401 => anyhow::anyhow!("Authentication failed: Invalid username or password"),
                    403 => anyhow::anyhow!("Access denied: User account may be locked"),
                    404 => anyhow::anyhow!("Mealie API endpoint not found. Check your base URL: {}", self.base_url),
                    500..=599 => anyhow::anyhow!("Mealie server error ({}): {}", status, body),
                    _ => anyhow::anyhow!("Authentication failed with status {}: {}", status, body),
                }
            }
            Some(ApiError::Decode { source, .. }) => {
                tracing::error!("Failed to parse authentication response: {}", source);
                anyhow::anyhow!("Invalid response from Mealie server: {}", source)
            }
            None => {
                tracing::error!("Network error during authentication: {}", error);
                error.context(format!("Failed to authenticate against {}", self.base_url))
            }
        }
    }

    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }
}
