// Error types for docset

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationReport;

/// Result type alias for docset operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying documentation content
#[derive(Debug, Error)]
pub enum Error {
	/// Reading a content file failed
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A manifest or partition is not valid JSON for its schema
	///
	/// `path` is the file on disk, or `<builtin>/<language>/<file>` for
	/// embedded content.
	#[error("invalid content in {}: {source}", .path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// A manifest names a partition that the source does not have
	#[error("language '{language}' lists partition '{partition}' which does not exist")]
	MissingPartition { language: String, partition: String },

	/// The content directory contains no language manifests
	#[error("no language manifests found under {}", .0.display())]
	EmptyContent(PathBuf),

	/// Strict validation found error-severity violations
	///
	/// The full report is carried so callers can print every violation,
	/// not only the first.
	#[error("content failed validation with {} error(s)", .0.error_count())]
	Invalid(ValidationReport),

	/// Grading was requested for an entry that has no quiz
	#[error("entry '{entry}' has no quiz")]
	NoQuiz { entry: String },

	/// The number of answers does not match the number of quiz questions
	#[error("expected {expected} answer(s), got {got}")]
	AnswerCount { expected: usize, got: usize },
}

impl Error {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Error::Io {
			path: path.into(),
			source,
		}
	}

	pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
		Error::Parse {
			path: path.into(),
			source,
		}
	}

	/// Returns the validation report if this is a validation failure
	pub fn report(&self) -> Option<&ValidationReport> {
		match self {
			Error::Invalid(report) => Some(report),
			_ => None,
		}
	}
}
