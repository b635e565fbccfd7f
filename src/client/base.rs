//! Generic CRUD capability shared by resource clients.
//!
//! A resource client implements [`ReadOnlyApi`] (and optionally [`CrudApi`])
//! by pointing at its [`CrudRoutes`]; the list/get/create/update/delete verbs
//! come for free as default methods. Resource-specific endpoints live as
//! inherent methods on the client itself.

use anyhow::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::client::requests::ApiRequests;
use crate::client::route::{merge_params, route};
use crate::client::types::PaginationData;

/// Collection path plus the function mapping an item identifier to its path.
#[derive(Clone)]
pub struct CrudRoutes {
    pub base: String,
    item: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl CrudRoutes {
    pub fn new(base: impl Into<String>, item: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            base: base.into(),
            item: Arc::new(item),
        }
    }

    pub fn item(&self, id: &str) -> String {
        (self.item)(id)
    }
}

#[async_trait]
pub trait ReadOnlyApi: Send + Sync {
    type Item: DeserializeOwned + Send;

    fn requests(&self) -> &ApiRequests;

    fn routes(&self) -> &CrudRoutes;

    /// Fetches one page. `per_page = -1` asks the backend for everything.
    /// `params` must serialize to an object, or to `null` (pass `&()`) for none.
    async fn get_all<P>(&self, page: i64, per_page: i64, params: &P) -> Result<PaginationData<Self::Item>>
    where
        P: Serialize + Sync + ?Sized,
    {
        let params = merge_params(&json!({ "page": page, "perPage": per_page }), params)?;
        let url = route(&self.routes().base, &params)?;
        self.requests().get(&url).await
    }

    async fn get_one(&self, id: &str) -> Result<Self::Item> {
        self.requests().get(&self.routes().item(id)).await
    }
}

#[async_trait]
pub trait CrudApi: ReadOnlyApi {
    type Create: Serialize + Sync;
    type Update: Serialize + Sync;

    async fn create_one(&self, payload: &Self::Create) -> Result<Self::Item> {
        self.requests().post(&self.routes().base, payload).await
    }

    async fn update_one(&self, id: &str, payload: &Self::Update) -> Result<Self::Item> {
        self.requests().put(&self.routes().item(id), payload).await
    }

    async fn delete_one(&self, id: &str) -> Result<Self::Item> {
        self.requests().delete(&self.routes().item(id)).await
    }
}
