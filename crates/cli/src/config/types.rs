//! Persisted configuration: [`DocsetConfig`].

use std::path::PathBuf;

use docset::ValidationMode;
use serde::{Deserialize, Serialize};

/// Schema version for config files.
pub const SCHEMA_VERSION: u32 = 1;

/// Durable CLI configuration, read from the global and project config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocsetConfig {
	#[serde(default)]
	pub schema: u32,
	/// Directory of language folders to load instead of the builtin content
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content_dir: Option<PathBuf>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub validation: Option<ValidationMode>,
	/// Language used when a command omits one
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default_language: Option<String>,
}

impl DocsetConfig {
	/// Creates a config with current [`SCHEMA_VERSION`].
	pub fn new() -> Self {
		Self {
			schema: SCHEMA_VERSION,
			..Default::default()
		}
	}

	/// Overlays every field `other` sets onto `self`.
	pub fn merge(&mut self, other: &DocsetConfig) {
		if other.schema != 0 {
			self.schema = other.schema;
		}
		if other.content_dir.is_some() {
			self.content_dir.clone_from(&other.content_dir);
		}
		if other.validation.is_some() {
			self.validation = other.validation;
		}
		if other.default_language.is_some() {
			self.default_language.clone_from(&other.default_language);
		}
	}
}
