use anyhow::Result;

use crate::client::tools::ToolsApi;
use crate::client::types::RecipeTool;
use crate::composables::collection::{CollectionStore, Identified};

/// Store for kitchen tools; the draft is an empty [`RecipeTool`].
pub type ToolStore = CollectionStore<ToolsApi>;

impl Identified for RecipeTool {
    fn item_id(&self) -> &str {
        &self.id
    }
}

/// Builds the tools store. With `eager`, all tools are fetched up front.
pub async fn use_tools(api: ToolsApi, eager: bool) -> Result<ToolStore> {
    CollectionStore::new(api, eager).await
}
