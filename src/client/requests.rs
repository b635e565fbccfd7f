use anyhow::Result;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::client::route::query_pairs;
use crate::client::transport::{ApiError, ApiRequest, FormData, Transport};

/// Typed front for a [`Transport`]: serializes payloads, decodes responses.
///
/// Cheap to clone; every resource client holds its own copy.
#[derive(Clone)]
pub struct ApiRequests {
    transport: Arc<dyn Transport>,
}

impl ApiRequests {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, path, body).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PATCH, path, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Sends a multipart body with `method`, optionally overriding the timeout.
    pub async fn send_form<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: FormData,
        timeout: Option<Duration>,
    ) -> Result<T> {
        let mut request = ApiRequest::new(method, path).form(form);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        self.send(request).await
    }

    /// Sends `body` flattened into `application/x-www-form-urlencoded` pairs.
    pub async fn post_urlencoded<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let pairs = query_pairs(body)?;
        self.send(ApiRequest::new(Method::POST, path).urlencoded(pairs)).await
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.send(ApiRequest::new(method, path).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let path = request.path.clone();
        let response = self.transport.send(request).await?;

        // Empty bodies (204 and friends) decode as JSON null.
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };

        serde_json::from_str(body).map_err(|source| {
            tracing::error!("Failed to parse response from {}: {}", path, source);
            ApiError::Decode { path, source }.into()
        })
    }
}
