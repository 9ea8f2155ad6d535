//! Core content types.
//!
//! A [`LanguageConfig`] owns an ordered list of [`DocCategory`], each of which
//! owns an ordered list of [`DocEntry`] lessons. Entries are built from
//! [`DocSection`] blocks and may carry a quiz and a practice challenge.

use serde::{Deserialize, Serialize};

/// Lesson difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
	/// No prior knowledge of the tool assumed
	Beginner,
	/// Assumes the beginner material
	Intermediate,
	/// Framework design, scaling and edge cases
	Advanced,
}

impl Difficulty {
	/// All difficulties, easiest first.
	pub const ALL: [Difficulty; 3] = [
		Difficulty::Beginner,
		Difficulty::Intermediate,
		Difficulty::Advanced,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Difficulty::Beginner => "beginner",
			Difficulty::Intermediate => "intermediate",
			Difficulty::Advanced => "advanced",
		}
	}
}

impl std::fmt::Display for Difficulty {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Difficulty {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"beginner" => Ok(Difficulty::Beginner),
			"intermediate" => Ok(Difficulty::Intermediate),
			"advanced" => Ok(Difficulty::Advanced),
			_ => Err(format!("unknown difficulty: {s}")),
		}
	}
}

/// One instructional block of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocSection {
	/// Section heading
	pub heading: String,

	/// Body text (markdown)
	pub content: String,

	/// Code sample shown below the body
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,

	/// Expected output of `code`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub output: Option<String>,

	/// Practical tip callout
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tip: Option<String>,

	/// Neutral side note callout
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,

	/// Pitfall callout
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub warning: Option<String>,

	/// Real-world analogy callout
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub analogy: Option<String>,
}

/// A multiple-choice question attached to a lesson.
///
/// `correct_index` must point into `options`; content validation checks this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
	pub question: String,
	pub options: Vec<String>,
	pub correct_index: usize,
	pub explanation: String,
}

impl QuizQuestion {
	/// Returns the text of the correct option, if `correct_index` is in range.
	pub fn correct_option(&self) -> Option<&str> {
		self.options.get(self.correct_index).map(String::as_str)
	}

	/// Whether `choice` is the correct option index.
	pub fn is_correct(&self, choice: usize) -> bool {
		choice == self.correct_index && choice < self.options.len()
	}
}

/// A hands-on exercise attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeChallenge {
	/// Task description
	pub prompt: String,
	/// Code the learner starts from
	pub starter_code: String,
	/// Reference solution
	pub solution_code: String,
	/// Progressive hints, first hint first
	pub hints: Vec<String>,
}

/// A single lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocEntry {
	/// Unique within the owning category
	pub id: String,
	pub title: String,
	pub difficulty: Difficulty,
	#[serde(default)]
	pub tags: Vec<String>,
	pub sections: Vec<DocSection>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quiz: Option<Vec<QuizQuestion>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub challenge: Option<PracticeChallenge>,
}

impl DocEntry {
	/// Quiz questions, or an empty slice when the entry has no quiz.
	pub fn quiz_questions(&self) -> &[QuizQuestion] {
		self.quiz.as_deref().unwrap_or_default()
	}

	/// Case-insensitive tag membership.
	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
	}
}

/// A named group of lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocCategory {
	/// Unique within the owning language
	pub id: String,
	pub label: String,
	/// Icon name understood by the frontend
	pub icon: String,
	pub entries: Vec<DocEntry>,
}

impl DocCategory {
	/// First entry with the given id.
	pub fn entry(&self, id: &str) -> Option<&DocEntry> {
		self.entries.iter().find(|e| e.id == id)
	}
}

/// The documentation bundle for one subject (e.g. "selenium").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
	/// Unique within the registry
	pub id: String,
	pub label: String,
	pub icon: String,
	/// CSS color used for accents
	pub color: String,
	/// Upstream documentation link
	pub docs_url: String,
	pub tagline: String,
	/// Language id of the code-execution backend used for samples
	pub execution_api_id: String,
	pub categories: Vec<DocCategory>,
}

impl LanguageConfig {
	/// First category with the given id.
	pub fn category(&self, id: &str) -> Option<&DocCategory> {
		self.categories.iter().find(|c| c.id == id)
	}

	/// Entry lookup by category and entry id.
	pub fn entry(&self, category: &str, entry: &str) -> Option<&DocEntry> {
		self.category(category).and_then(|c| c.entry(entry))
	}

	/// All entries across categories, in order, paired with their category.
	pub fn entries(&self) -> impl Iterator<Item = (&DocCategory, &DocEntry)> {
		self.categories
			.iter()
			.flat_map(|c| c.entries.iter().map(move |e| (c, e)))
	}
}
