//! # Mealie HTTP Client
//!
//! Typed clients for the Mealie REST API. Every resource client shares one
//! injected [`transport::Transport`]; the generic CRUD verbs come from the
//! [`base`] traits and each client adds its resource-specific endpoints.
//!
//! ## Modules
//!
//! - [`auth`] - Bearer token login against `/api/auth/token`
//! - [`transport`] - The HTTP seam and its `reqwest` implementation
//! - [`requests`] - Typed `get`/`post`/`put`/`patch`/`delete` over a transport
//! - [`route`] - Query-string construction
//! - [`base`] - Generic list/get/create/update/delete capability
//! - [`recipes`], [`households`], [`admin_users`], [`explore`], [`tools`],
//!   [`meal_plans`] - Resource clients and their route tables
//! - [`types`] - Request and response types
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealie_client::client::{MealieClient, ReadOnlyApi};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut client = MealieClient::new("http://localhost:9000".to_string());
//!
//! client.authenticate("changeme@example.com".to_string(), "MyPassword".to_string()).await?;
//!
//! let tools = client.tools.get_all(1, -1, &()).await?;
//! println!("Found {} tools", tools.total);
//! # Ok(())
//! # }
//! ```

pub mod admin_users;
pub mod auth;
pub mod base;
#[allow(clippy::module_inception)]
pub mod client;
pub mod explore;
pub mod households;
pub mod meal_plans;
pub mod recipes;
pub mod requests;
pub mod route;
pub mod tools;
pub mod transport;
pub mod types;

pub use base::{CrudApi, CrudRoutes, ReadOnlyApi};
pub use client::MealieClient;
pub use transport::{ApiError, ApiRequest, ApiResponse, FileUpload, FormData, RequestBody, ReqwestTransport, Transport};
pub use types::*;
