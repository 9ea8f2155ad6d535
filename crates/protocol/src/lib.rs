//! Content schema for docset documentation bundles.
//!
//! This crate contains the serde-serializable shapes of documentation
//! content: sections, quizzes, challenges, entries, categories and the
//! per-subject [`LanguageConfig`]. These types represent the "data layer",
//! the shapes of content as they appear in JSON files on disk.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: Serialization plus a few read-only lookups
//! - **camelCase on disk**: Field names match the frontend's JSON contract
//! - **Stable**: Changes only when the content format changes
//!
//! Loading, assembly and validation live in the `docset` crate.

pub mod manifest;
pub mod types;

pub use manifest::*;
pub use types::*;
