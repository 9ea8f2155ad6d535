//! The set of all loaded languages.

use std::path::Path;

use docset_protocol::{DocCategory, DocEntry, LanguageConfig};

use crate::error::Result;
use crate::loader::{Loader, ValidationMode};
use crate::search::{SearchHit, SearchQuery};
use crate::source::{DirSource, EmbeddedSource};
use crate::stats::LanguageStats;
use crate::validate::{ValidationReport, validate};

/// Immutable, ordered collection of [`LanguageConfig`]s.
///
/// Built once and handed to consumers by reference. Lookups are linear
/// scans; the number of languages is small.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
	languages: Vec<LanguageConfig>,
}

impl Registry {
	pub fn new(languages: Vec<LanguageConfig>) -> Self {
		Self { languages }
	}

	/// Loads the built-in dataset with strict validation.
	pub fn builtin() -> Result<Self> {
		Ok(Loader::new(EmbeddedSource).load()?.registry)
	}

	/// Loads a content directory with the given validation mode.
	pub fn from_dir(root: impl AsRef<Path>, mode: ValidationMode) -> Result<Self> {
		Ok(Loader::new(DirSource::new(root.as_ref())).mode(mode).load()?.registry)
	}

	/// Every language, in registry order.
	pub fn languages(&self) -> &[LanguageConfig] {
		&self.languages
	}

	/// First language whose id equals `id`.
	pub fn get_language(&self, id: &str) -> Option<&LanguageConfig> {
		self.languages.iter().find(|l| l.id == id)
	}

	pub fn category(&self, language: &str, category: &str) -> Option<&DocCategory> {
		self.get_language(language)?.category(category)
	}

	pub fn entry(&self, language: &str, category: &str, entry: &str) -> Option<&DocEntry> {
		self.get_language(language)?.entry(category, entry)
	}

	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.languages.iter().map(|l| l.id.as_str())
	}

	pub fn len(&self) -> usize {
		self.languages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.languages.is_empty()
	}

	pub fn validate(&self) -> ValidationReport {
		validate(&self.languages)
	}

	pub fn search(&self, query: &SearchQuery) -> Vec<SearchHit<'_>> {
		crate::search::search(&self.languages, query)
	}

	pub fn stats(&self) -> Vec<LanguageStats> {
		self.languages.iter().map(LanguageStats::of).collect()
	}
}

impl<'a> IntoIterator for &'a Registry {
	type Item = &'a LanguageConfig;
	type IntoIter = std::slice::Iter<'a, LanguageConfig>;

	fn into_iter(self) -> Self::IntoIter {
		self.languages.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn language(id: &str, label: &str) -> LanguageConfig {
		LanguageConfig {
			id: id.into(),
			label: label.into(),
			icon: "globe".into(),
			color: "#000".into(),
			docs_url: "https://example.com".into(),
			tagline: String::new(),
			execution_api_id: "python".into(),
			categories: Vec::new(),
		}
	}

	#[test]
	fn get_language_returns_first_match() {
		let registry = Registry::new(vec![
			language("selenium", "first"),
			language("selenium", "second"),
		]);
		assert_eq!(registry.get_language("selenium").unwrap().label, "first");
	}

	#[test]
	fn unknown_id_is_none() {
		let registry = Registry::new(vec![language("selenium", "Selenium")]);
		assert!(registry.get_language("does-not-exist").is_none());
		assert!(registry.category("does-not-exist", "x").is_none());
		assert!(registry.entry("selenium", "x", "y").is_none());
	}

	#[test]
	fn ids_in_order() {
		let registry = Registry::new(vec![language("b", "B"), language("a", "A")]);
		assert_eq!(registry.ids().collect::<Vec<_>>(), ["b", "a"]);
		assert_eq!((&registry).into_iter().count(), 2);
		assert!(!registry.is_empty());
		assert!(Registry::default().is_empty());
	}
}
