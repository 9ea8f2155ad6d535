//! Layered CLI configuration.
//!
//! A global file and an optional project file are merged, project on top.
//! Command-line flags and `DOCSET_CONTENT_DIR` are applied later, when the
//! command context is resolved (see [`crate::context`]).

pub mod storage;
pub mod types;

#[cfg(test)]
mod tests;

pub use storage::{ConfigPaths, LoadedConfig};
pub use types::{DocsetConfig, SCHEMA_VERSION};
