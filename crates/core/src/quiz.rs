//! Quiz grading.

use docset_protocol::DocEntry;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Outcome for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
	pub question: String,
	pub chosen: usize,
	pub correct_index: usize,
	pub correct: bool,
	pub explanation: String,
}

/// Graded quiz for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizGrade {
	pub entry: String,
	pub total: usize,
	pub score: usize,
	pub results: Vec<QuestionResult>,
}

impl QuizGrade {
	pub fn passed_all(&self) -> bool {
		self.score == self.total
	}
}

/// Grades `answers` (chosen option indices, one per question) against the
/// entry's quiz.
///
/// An answer outside a question's options is simply wrong, not an error. An
/// entry whose quiz is absent or empty cannot be graded.
pub fn grade(entry: &DocEntry, answers: &[usize]) -> Result<QuizGrade> {
	let quiz = entry
		.quiz
		.as_ref()
		.filter(|q| !q.is_empty())
		.ok_or_else(|| Error::NoQuiz {
			entry: entry.id.clone(),
		})?;
	if quiz.len() != answers.len() {
		return Err(Error::AnswerCount {
			expected: quiz.len(),
			got: answers.len(),
		});
	}

	let results: Vec<_> = quiz
		.iter()
		.zip(answers)
		.map(|(q, &chosen)| QuestionResult {
			question: q.question.clone(),
			chosen,
			correct_index: q.correct_index,
			correct: q.is_correct(chosen),
			explanation: q.explanation.clone(),
		})
		.collect();

	Ok(QuizGrade {
		entry: entry.id.clone(),
		total: results.len(),
		score: results.iter().filter(|r| r.correct).count(),
		results,
	})
}
