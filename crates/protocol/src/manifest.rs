//! On-disk language header.
//!
//! A `language.json` manifest carries every [`LanguageConfig`] field except
//! the categories, and names the partition files whose categories are
//! concatenated to form them.

use serde::{Deserialize, Serialize};

use crate::types::{DocCategory, LanguageConfig};

/// File name of the manifest inside a language directory.
pub const MANIFEST_FILE: &str = "language.json";

/// Language metadata plus the ordered list of partition files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageManifest {
	pub id: String,
	pub label: String,
	pub icon: String,
	pub color: String,
	pub docs_url: String,
	pub tagline: String,
	pub execution_api_id: String,
	/// Partition file names, relative to the manifest, in assembly order
	pub partitions: Vec<String>,
}

impl LanguageManifest {
	/// Builds the [`LanguageConfig`] for this manifest with the given categories.
	pub fn into_config(self, categories: Vec<DocCategory>) -> LanguageConfig {
		LanguageConfig {
			id: self.id,
			label: self.label,
			icon: self.icon,
			color: self.color,
			docs_url: self.docs_url,
			tagline: self.tagline,
			execution_api_id: self.execution_api_id,
			categories,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_manifest() {
		let manifest: LanguageManifest = serde_json::from_str(
			r##"{
				"id": "playwright",
				"label": "Playwright",
				"icon": "theater",
				"color": "#2EAD33",
				"docsUrl": "https://playwright.dev/docs/intro",
				"tagline": "Reliable end-to-end testing",
				"executionApiId": "typescript",
				"partitions": ["core.json", "testing.json"]
			}"##,
		)
		.unwrap();

		assert_eq!(manifest.partitions, vec!["core.json", "testing.json"]);

		let config = manifest.into_config(Vec::new());
		assert_eq!(config.id, "playwright");
		assert_eq!(config.execution_api_id, "typescript");
		assert!(config.categories.is_empty());
	}
}
