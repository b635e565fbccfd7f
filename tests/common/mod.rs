#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use mealie_client::client::{ApiError, ApiRequest, ApiResponse, MealieClient, Transport};
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// In-memory transport: records every request and answers from a queue.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<(StatusCode, String)>>,
    token: Mutex<Option<String>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_json(&self, body: Value) {
        self.respond(StatusCode::OK, body.to_string());
    }

    pub fn respond(&self, status: StatusCode, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back((status, body.into()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((StatusCode::OK, "null".to_string()));

        if !status.is_success() {
            return Err(ApiError::Status {
                method: request.method,
                path: request.path,
                status,
                body,
            }
            .into());
        }

        Ok(ApiResponse { status, body })
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }
}

pub struct TestEnvironment {
    pub transport: Arc<RecordingTransport>,
    pub client: MealieClient,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let transport = RecordingTransport::new();
        let client = MealieClient::with_transport("http://mealie.test".to_string(), transport.clone());
        Self { transport, client }
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
