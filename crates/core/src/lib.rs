//! Browser-automation documentation bundles.
//!
//! Content is organised as languages (one per documented tool) made of
//! categories of lessons. Each language is declared by a `language.json`
//! manifest that lists partition files; the partitions' categories are
//! concatenated, in order, into a [`LanguageConfig`]. All languages together
//! form a [`Registry`].
//!
//! ```ignore
//! let registry = docset::Registry::builtin()?;
//! let selenium = registry.get_language("selenium").expect("built in");
//! for category in &selenium.categories {
//!     println!("{} ({} lessons)", category.label, category.entries.len());
//! }
//! ```
//!
//! Content can also be read from a directory at runtime with
//! [`Registry::from_dir`] or, for full control over validation, with a
//! [`Loader`] over any [`ContentSource`].

pub mod assemble;
mod builtin;
pub mod error;
pub mod loader;
pub mod quiz;
pub mod registry;
pub mod search;
pub mod source;
pub mod stats;
pub mod validate;

pub use assemble::{assemble, concat_partitions};
pub use builtin::BUILTIN_ROOT;
pub use docset_protocol::*;
pub use error::{Error, Result};
pub use loader::{Loaded, Loader, ValidationMode};
pub use quiz::{QuestionResult, QuizGrade, grade};
pub use registry::Registry;
pub use search::{SearchHit, SearchQuery};
pub use source::{ContentSource, DirSource, EmbeddedSource, RawLanguage, RawPartition};
pub use stats::LanguageStats;
pub use validate::{Severity, ValidationReport, Violation, ViolationKind, validate};
