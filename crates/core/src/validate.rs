//! Static integrity checks over assembled content.
//!
//! Assembly never rejects anything, so this is the single place where
//! duplicate ids, out-of-range answers and similar authoring mistakes are
//! caught. Checks never stop at the first problem: every violation is
//! collected into a [`ValidationReport`].

use std::collections::HashSet;
use std::fmt;

use docset_protocol::{DocCategory, DocEntry, LanguageConfig};
use serde::{Deserialize, Serialize};

/// How bad a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	/// Fails strict loading
	Error,
	/// Reported, never fatal
	Warning,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Severity::Error => write!(f, "error"),
			Severity::Warning => write!(f, "warning"),
		}
	}
}

/// What rule was broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
	DuplicateLanguageId {
		id: String,
	},
	DuplicateCategoryId {
		id: String,
	},
	DuplicateEntryId {
		id: String,
	},
	BlankId,
	CorrectIndexOutOfRange {
		/// Zero-based question position within the quiz
		question: usize,
		#[serde(rename = "correctIndex")]
		correct_index: usize,
		options: usize,
	},
	EmptyHints,
	EmptyQuiz,
	NoSections,
	InvalidDocsUrl {
		url: String,
		reason: String,
	},
}

impl ViolationKind {
	pub fn severity(&self) -> Severity {
		match self {
			ViolationKind::EmptyQuiz | ViolationKind::NoSections | ViolationKind::InvalidDocsUrl { .. } => {
				Severity::Warning
			}
			_ => Severity::Error,
		}
	}
}

impl fmt::Display for ViolationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ViolationKind::DuplicateLanguageId { id } => write!(f, "duplicate language id '{id}'"),
			ViolationKind::DuplicateCategoryId { id } => write!(f, "duplicate category id '{id}'"),
			ViolationKind::DuplicateEntryId { id } => write!(f, "duplicate entry id '{id}'"),
			ViolationKind::BlankId => write!(f, "id is empty"),
			ViolationKind::CorrectIndexOutOfRange {
				question,
				correct_index,
				options,
			} => write!(
				f,
				"question {question}: correctIndex {correct_index} is out of range for {options} option(s)"
			),
			ViolationKind::EmptyHints => write!(f, "challenge has no hints"),
			ViolationKind::EmptyQuiz => write!(f, "quiz is present but has no questions"),
			ViolationKind::NoSections => write!(f, "entry has no sections"),
			ViolationKind::InvalidDocsUrl { url, reason } => write!(f, "docsUrl '{url}' is not usable: {reason}"),
		}
	}
}

/// A single broken rule and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
	pub severity: Severity,
	/// `language`, `language/category` or `language/category/entry`
	pub location: String,
	#[serde(flatten)]
	pub kind: ViolationKind,
}

impl Violation {
	fn new(location: String, kind: ViolationKind) -> Self {
		Self {
			severity: kind.severity(),
			location,
			kind,
		}
	}

	pub fn is_error(&self) -> bool {
		self.severity == Severity::Error
	}
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}: {}", self.severity, self.location, self.kind)
	}
}

/// Every violation found, in content order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
	pub violations: Vec<Violation>,
}

impl ValidationReport {
	/// True when no error-severity violation was found.
	pub fn is_ok(&self) -> bool {
		self.error_count() == 0
	}

	pub fn error_count(&self) -> usize {
		self.violations.iter().filter(|v| v.is_error()).count()
	}

	pub fn warning_count(&self) -> usize {
		self.violations.len() - self.error_count()
	}

	pub fn errors(&self) -> impl Iterator<Item = &Violation> {
		self.violations.iter().filter(|v| v.is_error())
	}

	fn push(&mut self, location: String, kind: ViolationKind) {
		self.violations.push(Violation::new(location, kind));
	}
}

/// Runs every check over `languages`.
pub fn validate(languages: &[LanguageConfig]) -> ValidationReport {
	let mut report = ValidationReport::default();
	let mut seen = HashSet::new();

	for language in languages {
		if language.id.trim().is_empty() {
			report.push(language.label.clone(), ViolationKind::BlankId);
		} else if !seen.insert(language.id.as_str()) {
			report.push(
				language.id.clone(),
				ViolationKind::DuplicateLanguageId {
					id: language.id.clone(),
				},
			);
		}
		check_language(language, &mut report);
	}

	report
}

fn check_language(language: &LanguageConfig, report: &mut ValidationReport) {
	if let Err(reason) = check_docs_url(&language.docs_url) {
		report.push(
			language.id.clone(),
			ViolationKind::InvalidDocsUrl {
				url: language.docs_url.clone(),
				reason,
			},
		);
	}

	let mut seen = HashSet::new();
	for category in &language.categories {
		let location = format!("{}/{}", language.id, category.id);
		if category.id.trim().is_empty() {
			report.push(location.clone(), ViolationKind::BlankId);
		} else if !seen.insert(category.id.as_str()) {
			report.push(
				location.clone(),
				ViolationKind::DuplicateCategoryId {
					id: category.id.clone(),
				},
			);
		}
		check_category(&location, category, report);
	}
}

fn check_category(location: &str, category: &DocCategory, report: &mut ValidationReport) {
	let mut seen = HashSet::new();
	for entry in &category.entries {
		let entry_location = format!("{location}/{}", entry.id);
		if entry.id.trim().is_empty() {
			report.push(entry_location.clone(), ViolationKind::BlankId);
		} else if !seen.insert(entry.id.as_str()) {
			report.push(
				entry_location.clone(),
				ViolationKind::DuplicateEntryId { id: entry.id.clone() },
			);
		}
		check_entry(entry_location, entry, report);
	}
}

fn check_entry(location: String, entry: &DocEntry, report: &mut ValidationReport) {
	if entry.sections.is_empty() {
		report.push(location.clone(), ViolationKind::NoSections);
	}

	if let Some(quiz) = &entry.quiz {
		if quiz.is_empty() {
			report.push(location.clone(), ViolationKind::EmptyQuiz);
		}
		for (question, q) in quiz.iter().enumerate() {
			if q.correct_index >= q.options.len() {
				report.push(
					location.clone(),
					ViolationKind::CorrectIndexOutOfRange {
						question,
						correct_index: q.correct_index,
						options: q.options.len(),
					},
				);
			}
		}
	}

	if let Some(challenge) = &entry.challenge {
		if challenge.hints.is_empty() {
			report.push(location, ViolationKind::EmptyHints);
		}
	}
}

fn check_docs_url(raw: &str) -> std::result::Result<(), String> {
	let parsed = url::Url::parse(raw).map_err(|e| e.to_string())?;
	match parsed.scheme() {
		"http" | "https" => Ok(()),
		other => Err(format!("unsupported scheme '{other}'")),
	}
}

#[cfg(test)]
mod tests {
	use docset_protocol::{Difficulty, DocSection, PracticeChallenge, QuizQuestion};

	use super::*;

	fn section() -> DocSection {
		DocSection {
			heading: "Intro".into(),
			content: "Body".into(),
			code: None,
			output: None,
			tip: None,
			note: None,
			warning: None,
			analogy: None,
		}
	}

	fn entry(id: &str) -> DocEntry {
		DocEntry {
			id: id.into(),
			title: id.into(),
			difficulty: Difficulty::Beginner,
			tags: Vec::new(),
			sections: vec![section()],
			quiz: None,
			challenge: None,
		}
	}

	fn category(id: &str, entries: Vec<DocEntry>) -> DocCategory {
		DocCategory {
			id: id.into(),
			label: id.into(),
			icon: "book".into(),
			entries,
		}
	}

	fn language(id: &str, categories: Vec<DocCategory>) -> LanguageConfig {
		LanguageConfig {
			id: id.into(),
			label: id.into(),
			icon: "globe".into(),
			color: "#000".into(),
			docs_url: "https://example.com/docs".into(),
			tagline: String::new(),
			execution_api_id: "python".into(),
			categories,
		}
	}

	fn kinds(report: &ValidationReport) -> Vec<&ViolationKind> {
		report.violations.iter().map(|v| &v.kind).collect()
	}

	#[test]
	fn clean_content_passes() {
		let langs = vec![language("selenium", vec![category("basics", vec![entry("setup")])])];
		let report = validate(&langs);
		assert!(report.is_ok());
		assert!(report.violations.is_empty());
	}

	#[test]
	fn duplicate_language_ids() {
		let langs = vec![language("selenium", vec![]), language("selenium", vec![])];
		let report = validate(&langs);
		assert!(!report.is_ok());
		assert_eq!(
			kinds(&report),
			[&ViolationKind::DuplicateLanguageId {
				id: "selenium".into()
			}]
		);
	}

	#[test]
	fn duplicate_category_ids_within_language_only() {
		let langs = vec![
			language("selenium", vec![category("waits", vec![]), category("waits", vec![])]),
			language("playwright", vec![category("waits", vec![])]),
		];
		let report = validate(&langs);
		assert_eq!(report.error_count(), 1);
		assert_eq!(report.violations[0].location, "selenium/waits");
	}

	#[test]
	fn duplicate_entry_ids_within_category_only() {
		let langs = vec![language(
			"selenium",
			vec![
				category("a", vec![entry("intro"), entry("intro")]),
				category("b", vec![entry("intro")]),
			],
		)];
		let report = validate(&langs);
		assert_eq!(report.error_count(), 1);
		assert_eq!(report.violations[0].location, "selenium/a/intro");
	}

	#[test]
	fn correct_index_out_of_range() {
		let mut e = entry("quiz");
		e.quiz = Some(vec![
			QuizQuestion {
				question: "ok".into(),
				options: vec!["a".into(), "b".into()],
				correct_index: 1,
				explanation: String::new(),
			},
			QuizQuestion {
				question: "bad".into(),
				options: vec!["a".into(), "b".into()],
				correct_index: 2,
				explanation: String::new(),
			},
		]);
		let langs = vec![language("selenium", vec![category("c", vec![e])])];
		let report = validate(&langs);
		assert_eq!(
			kinds(&report),
			[&ViolationKind::CorrectIndexOutOfRange {
				question: 1,
				correct_index: 2,
				options: 2,
			}]
		);
	}

	#[test]
	fn question_without_options_is_out_of_range() {
		let mut e = entry("quiz");
		e.quiz = Some(vec![QuizQuestion {
			question: "?".into(),
			options: Vec::new(),
			correct_index: 0,
			explanation: String::new(),
		}]);
		let report = validate(&[language("x", vec![category("c", vec![e])])]);
		assert_eq!(report.error_count(), 1);
	}

	#[test]
	fn challenge_without_hints() {
		let mut e = entry("challenge");
		e.challenge = Some(PracticeChallenge {
			prompt: "do it".into(),
			starter_code: String::new(),
			solution_code: String::new(),
			hints: Vec::new(),
		});
		let report = validate(&[language("x", vec![category("c", vec![e])])]);
		assert_eq!(kinds(&report), [&ViolationKind::EmptyHints]);
	}

	#[test]
	fn blank_ids_are_errors() {
		let report = validate(&[language("x", vec![category(" ", vec![entry("")])])]);
		assert_eq!(report.error_count(), 2);
		assert!(report.violations.iter().all(|v| v.kind == ViolationKind::BlankId));
	}

	#[test]
	fn warnings_do_not_fail() {
		let mut e = entry("empty");
		e.sections.clear();
		e.quiz = Some(Vec::new());
		let mut lang = language("x", vec![category("c", vec![e])]);
		lang.docs_url = "not a url".into();

		let report = validate(&[lang]);
		assert!(report.is_ok());
		assert_eq!(report.warning_count(), 3);
	}

	#[test]
	fn non_http_docs_url_is_flagged() {
		let mut lang = language("x", vec![]);
		lang.docs_url = "ftp://example.com/docs".into();
		let report = validate(&[lang]);
		assert!(matches!(
			report.violations[0].kind,
			ViolationKind::InvalidDocsUrl { .. }
		));
	}

	#[test]
	fn violation_serializes_flat() {
		let v = Violation::new(
			"selenium/waits".into(),
			ViolationKind::DuplicateCategoryId { id: "waits".into() },
		);
		let json = serde_json::to_value(&v).unwrap();
		assert_eq!(json["severity"], "error");
		assert_eq!(json["kind"], "duplicate_category_id");
		assert_eq!(json["id"], "waits");
		assert_eq!(
			v.to_string(),
			"error selenium/waits: duplicate category id 'waits'"
		);
	}
}
