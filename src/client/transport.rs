//! The HTTP seam every API client sends through.
//!
//! API clients never talk to `reqwest` directly. They describe a request as an
//! [`ApiRequest`] and hand it to a [`Transport`]. [`ReqwestTransport`] is the
//! production implementation; tests swap in an in-memory one.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{multipart, Client, Method, StatusCode};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use thiserror::Error;

/// Failures produced by the transport layer itself.
///
/// These are wrapped in [`anyhow::Error`] by the clients; use
/// `err.downcast_ref::<ApiError>()` to inspect them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Mealie API returned {status} for {method} {path}: {body}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
        body: String,
    },
    #[error("Invalid response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Decode { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// A single file attached to a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Text after the last `.` of the file name, or the whole name if it has none.
    pub fn extension(&self) -> &str {
        self.file_name.rsplit('.').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(FileUpload),
}

/// Ordered multipart form fields; the same name may appear more than once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields
            .push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    pub fn file(mut self, name: &str, file: FileUpload) -> Self {
        self.fields.push((name.to_string(), FormValue::File(file)));
        self
    }

    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(n, v)| match v {
            FormValue::Text(t) if n == name => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn files(&self, name: &str) -> Vec<&FileUpload> {
        self.fields
            .iter()
            .filter_map(|(n, v)| match v {
                FormValue::File(f) if n == name => Some(f),
                _ => None,
            })
            .collect()
    }

    fn into_multipart(self) -> multipart::Form {
        self.fields
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File(file) => form.part(
                    name,
                    multipart::Part::bytes(file.bytes).file_name(file.file_name),
                ),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Multipart form.
    Form(FormData),
    /// `application/x-www-form-urlencoded` pairs.
    UrlEncoded(Vec<(String, String)>),
}

/// A request as described by an API client: verb, path (with query string),
/// body and an optional per-request timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            timeout: None,
        }
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn form(mut self, form: FormData) -> Self {
        self.body = RequestBody::Form(form);
        self
    }

    pub fn urlencoded(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = RequestBody::UrlEncoded(pairs);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Raw successful response: status and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

/// The shared request-issuing collaborator injected into every API client.
///
/// Implementations return `Err` for non-2xx statuses (see [`ApiError::Status`])
/// and for network failures.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;

    /// Replaces the bearer token used for subsequent requests.
    fn set_token(&self, _token: Option<String>) {}
}

/// `reqwest`-backed transport against a Mealie server.
pub struct ReqwestTransport {
    base_url: String,
    client: Client,
    token: Arc<RwLock<Option<String>>>,
}

impl ReqwestTransport {
    pub fn new(base_url: String) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: String, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        let guard = self.token.read().ok()?;
        guard.as_ref().map(|token| {
            tracing::debug!("Using authentication token: {}...", token.chars().take(10).collect::<String>());
            format!("Bearer {}", token)
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), &url);
        if let Some(auth_header) = self.auth_header() {
            builder = builder.header("Authorization", auth_header);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Form(form) => builder.multipart(form.into_multipart()),
            RequestBody::UrlEncoded(pairs) => builder.form(&pairs),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Network error for {} {}: {}", request.method, url, e);
            anyhow::anyhow!("Failed to connect to Mealie server at {}: {}", self.base_url, e)
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("{} {} failed with status {}: {}", request.method, url, status, body);
            return Err(ApiError::Status {
                method: request.method,
                path: request.path,
                status,
                body,
            }
            .into());
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body for {} {}: {}", request.method, url, e);
            anyhow::anyhow!("Failed to read response body from {}: {}", request.path, e)
        })?;

        Ok(ApiResponse { status, body })
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers the first connection with `raw` and closes it.
    async fn serve_once(raw: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(raw.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn truncated_success_body_is_a_read_error() {
        let base = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"slug\"").await;
        let transport = ReqwestTransport::new(base);

        let err = transport
            .send(ApiRequest::new(Method::GET, "/api/recipes/soup"))
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<ApiError>().is_none());
        assert!(err.to_string().contains("Failed to read response body from /api/recipes/soup"));
    }

    #[tokio::test]
    async fn error_status_keeps_response_body() {
        let base = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 20\r\nConnection: close\r\n\r\n{\"detail\":\"missing\"}",
        )
        .await;
        let transport = ReqwestTransport::new(base);

        let err = transport
            .send(ApiRequest::new(Method::GET, "/api/recipes/nope"))
            .await
            .unwrap_err();

        match err.downcast_ref::<ApiError>() {
            Some(ApiError::Status { status, body, .. }) => {
                assert_eq!(*status, StatusCode::NOT_FOUND);
                assert_eq!(body, r#"{"detail":"missing"}"#);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn extension_is_text_after_last_dot() {
        assert_eq!(FileUpload::new("photo.large.png", vec![]).extension(), "png");
        assert_eq!(FileUpload::new("README", vec![]).extension(), "README");
    }

    #[test]
    fn form_keeps_repeated_fields_in_order() {
        let form = FormData::new()
            .file("images", FileUpload::new("a.jpg", vec![1]))
            .file("images", FileUpload::new("b.jpg", vec![2]))
            .text("name", "cover");

        let names: Vec<&str> = form.files("images").iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
        assert_eq!(form.get_text("name"), Some("cover"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let transport = ReqwestTransport::new("http://localhost:9000/".to_string());
        assert_eq!(transport.base_url(), "http://localhost:9000");
    }
}
