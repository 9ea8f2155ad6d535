//! Integrity checks over the content shipped with the crate.

use std::collections::HashSet;

use docset::{DocCategory, LanguageConfig, Registry};

const SELENIUM_PARTITIONS: [&str; 4] = [
	include_str!("../content/selenium/fundamentals.json"),
	include_str!("../content/selenium/locators.json"),
	include_str!("../content/selenium/waits.json"),
	include_str!("../content/selenium/advanced.json"),
];

fn registry() -> Registry {
	Registry::builtin().expect("built-in content loads with strict validation")
}

fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>, scope: &str) {
	let mut seen = HashSet::new();
	for id in ids {
		assert!(seen.insert(id), "duplicate id '{id}' in {scope}");
	}
}

#[test]
fn builtin_has_both_subjects_in_order() {
	let registry = registry();
	assert_eq!(registry.ids().collect::<Vec<_>>(), ["selenium", "playwright"]);
}

#[test]
fn language_ids_unique() {
	let registry = registry();
	assert_unique(registry.ids(), "registry");
}

#[test]
fn category_and_entry_ids_unique() {
	for lang in &registry() {
		assert_unique(lang.categories.iter().map(|c| c.id.as_str()), &lang.id);
		for cat in &lang.categories {
			assert_unique(
				cat.entries.iter().map(|e| e.id.as_str()),
				&format!("{}/{}", lang.id, cat.id),
			);
		}
	}
}

#[test]
fn quiz_answers_in_range_and_hints_present() {
	for lang in &registry() {
		for (cat, entry) in lang.entries() {
			for q in entry.quiz_questions() {
				assert!(
					q.correct_index < q.options.len(),
					"{}/{}/{}: '{}'",
					lang.id,
					cat.id,
					entry.id,
					q.question
				);
			}
			if let Some(challenge) = &entry.challenge {
				assert!(!challenge.hints.is_empty(), "{}/{}/{}", lang.id, cat.id, entry.id);
			}
		}
	}
}

#[test]
fn builtin_validates_without_warnings() {
	let report = registry().validate();
	assert!(report.violations.is_empty(), "{:?}", report.violations);
}

#[test]
fn selenium_is_concatenation_of_partitions() {
	let registry = registry();
	let selenium = registry.get_language("selenium").unwrap();

	let expected: Vec<DocCategory> = SELENIUM_PARTITIONS
		.iter()
		.flat_map(|text| serde_json::from_str::<Vec<DocCategory>>(text).unwrap())
		.collect();

	assert_eq!(selenium.categories.len(), expected.len());
	assert_eq!(selenium.categories, expected);
	assert_eq!(selenium.categories[0].id, "getting-started");
	assert_eq!(selenium.categories.last().unwrap().id, "grid");
}

#[test]
fn unknown_language_is_absent() {
	assert!(registry().get_language("does-not-exist").is_none());
}

#[test]
fn json_round_trip_preserves_languages() {
	for lang in &registry() {
		let json = serde_json::to_string_pretty(lang).unwrap();
		let back: LanguageConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(&back, lang);
	}
}

#[test]
fn every_entry_reachable_by_lookup() {
	let registry = registry();
	for lang in &registry {
		for (cat, entry) in lang.entries() {
			let found = registry.entry(&lang.id, &cat.id, &entry.id).unwrap();
			assert_eq!(found, entry);
		}
	}
}
