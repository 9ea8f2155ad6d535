//! Entry search across the registry.

use docset_protocol::{Difficulty, DocEntry, LanguageConfig};
use serde::Serialize;

/// Filters for [`crate::Registry::search`]. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
	/// Case-insensitive substring matched against title, tags, headings and bodies
	pub text: Option<String>,
	/// Every tag must be present on the entry (case-insensitive)
	pub tags: Vec<String>,
	pub difficulty: Option<Difficulty>,
	/// Restrict to one language id
	pub language: Option<String>,
}

impl SearchQuery {
	pub fn text(text: impl Into<String>) -> Self {
		Self {
			text: Some(text.into()),
			..Default::default()
		}
	}

	fn matches(&self, needle: Option<&str>, entry: &DocEntry) -> bool {
		if self.difficulty.is_some_and(|d| d != entry.difficulty) {
			return false;
		}
		if !self.tags.iter().all(|tag| entry.has_tag(tag)) {
			return false;
		}
		match needle {
			None => true,
			Some(needle) => entry_mentions(entry, needle),
		}
	}
}

/// One matching entry and where it lives.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit<'a> {
	pub language: &'a str,
	pub category: &'a str,
	pub entry: &'a DocEntry,
}

pub(crate) fn search<'a>(languages: &'a [LanguageConfig], query: &SearchQuery) -> Vec<SearchHit<'a>> {
	let needle = query
		.text
		.as_deref()
		.map(str::trim)
		.filter(|t| !t.is_empty())
		.map(str::to_lowercase);

	languages
		.iter()
		.filter(|lang| query.language.as_deref().is_none_or(|id| lang.id == id))
		.flat_map(|lang| {
			lang.entries().map(move |(category, entry)| SearchHit {
				language: &lang.id,
				category: &category.id,
				entry,
			})
		})
		.filter(|hit| query.matches(needle.as_deref(), hit.entry))
		.collect()
}

fn entry_mentions(entry: &DocEntry, needle: &str) -> bool {
	let hit = |s: &str| s.to_lowercase().contains(needle);
	hit(&entry.title)
		|| entry.tags.iter().any(|t| hit(t))
		|| entry
			.sections
			.iter()
			.any(|s| hit(&s.heading) || hit(&s.content))
}
