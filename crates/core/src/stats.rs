//! Per-language content counts.

use std::collections::BTreeMap;

use docset_protocol::{Difficulty, LanguageConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStats {
	pub id: String,
	pub categories: usize,
	pub entries: usize,
	pub sections: usize,
	pub quiz_questions: usize,
	pub challenges: usize,
	/// Entries per difficulty; every difficulty is present, possibly with 0
	pub by_difficulty: BTreeMap<Difficulty, usize>,
}

impl LanguageStats {
	pub fn of(language: &LanguageConfig) -> Self {
		let mut stats = LanguageStats {
			id: language.id.clone(),
			categories: language.categories.len(),
			entries: 0,
			sections: 0,
			quiz_questions: 0,
			challenges: 0,
			by_difficulty: Difficulty::ALL.iter().map(|d| (*d, 0)).collect(),
		};

		for (_, entry) in language.entries() {
			stats.entries += 1;
			stats.sections += entry.sections.len();
			stats.quiz_questions += entry.quiz_questions().len();
			stats.challenges += usize::from(entry.challenge.is_some());
			*stats.by_difficulty.entry(entry.difficulty).or_default() += 1;
		}

		stats
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_builtin_selenium() {
		let registry = crate::Registry::builtin().unwrap();
		let lang = registry.get_language("selenium").unwrap();
		let stats = LanguageStats::of(lang);

		assert_eq!(stats.categories, lang.categories.len());
		assert_eq!(stats.entries, lang.entries().count());
		assert_eq!(stats.by_difficulty.values().sum::<usize>(), stats.entries);
		assert_eq!(stats.by_difficulty.len(), 3);
	}

	#[test]
	fn serializes_difficulty_keys() {
		let lang = LanguageConfig {
			id: "empty".into(),
			label: "Empty".into(),
			icon: "x".into(),
			color: "#000".into(),
			docs_url: "https://example.com".into(),
			tagline: String::new(),
			execution_api_id: "python".into(),
			categories: Vec::new(),
		};
		let json = serde_json::to_value(LanguageStats::of(&lang)).unwrap();
		assert_eq!(json["byDifficulty"]["beginner"], 0);
		assert_eq!(json["quizQuestions"], 0);
	}
}
