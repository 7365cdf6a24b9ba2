//! Runtime module - drives a mounted grid
//!
//! - `app` - the message loop, remote call execution and subscription lifetime

pub mod app;

pub use app::GridRuntime;
