//! Stateful stores wrapping the API clients.
//!
//! A store holds a fetched collection and a working draft, calls the matching
//! client method for each action and reconciles its local state afterwards:
//! create appends, update replaces by id, delete removes by id.

pub mod collection;
pub mod tools;

pub use collection::{CollectionStore, FormValidator, Identified};
pub use tools::{use_tools, ToolStore};
