//! Lead grid - Elm-style spreadsheet interaction core
//!
//! This crate provides the state, update logic and store plumbing behind an
//! editable leads grid: column/row sizing, drag-resize, cell/row/range
//! selection, inline editing and optimistic sync with a remote store.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod store;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::GridModel;
pub use runtime::GridRuntime;
pub use store::{LeadStore, MemoryStore, StoreError, Subscription};
