//! # Mealie Client Library
//!
//! Typed API clients and stateful stores for the Mealie recipe manager.
//!
//! ## Client Module
//!
//! The [`client`] module provides typed clients for the Mealie REST API:
//! recipes, households, tools, meal plans, admin users and public explore
//! pages. All of them send through one injected transport.
//!
//! ## Composables Module
//!
//! The [`composables`] module wraps a client in a store that keeps a fetched
//! collection and a working draft in sync with create/update/delete calls.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealie_client::{use_tools, MealieClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = MealieClient::new("http://localhost:9000".to_string());
//!
//! let mut tools = use_tools(client.tools, true).await?;
//! tools.working_data_mut().name = "Stand Mixer".to_string();
//! tools.create_one(None).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod composables;
pub mod config;
pub mod utils;

pub use client::MealieClient;
pub use composables::use_tools;
