use std::path::PathBuf;

use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, DocsetError>;

#[derive(Debug, Error)]
pub enum DocsetError {
	/// Command failed but output has already been printed (e.g. a failing
	/// validation report). Used to signal exit code 1 without additional output.
	#[error("")]
	OutputAlreadyPrinted,

	#[error("unknown language '{id}' (available: {})", .available.join(", "))]
	LanguageNotFound { id: String, available: Vec<String> },

	#[error("language '{language}' has no category '{id}'")]
	CategoryNotFound { language: String, id: String },

	#[error("category '{language}/{category}' has no entry '{id}'")]
	EntryNotFound {
		language: String,
		category: String,
		id: String,
	},

	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("failed to write {}", .path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error(transparent)]
	Content(#[from] docset::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

impl DocsetError {
	/// Check if this error indicates output has already been printed.
	/// When true, the caller should exit with code 1 without printing additional output.
	pub fn is_output_already_printed(&self) -> bool {
		matches!(self, DocsetError::OutputAlreadyPrinted)
	}

	/// Convert this error to a CommandError for structured output
	pub fn to_command_error(&self) -> CommandError {
		let (code, details) = match self {
			DocsetError::OutputAlreadyPrinted => (ErrorCode::InternalError, None),
			DocsetError::LanguageNotFound { id, available } => (
				ErrorCode::LanguageNotFound,
				Some(serde_json::json!({ "language": id, "available": available })),
			),
			DocsetError::CategoryNotFound { language, id } => (
				ErrorCode::CategoryNotFound,
				Some(serde_json::json!({ "language": language, "category": id })),
			),
			DocsetError::EntryNotFound { language, category, id } => (
				ErrorCode::EntryNotFound,
				Some(serde_json::json!({
					"language": language,
					"category": category,
					"entry": id,
				})),
			),
			DocsetError::InvalidInput(_) => (ErrorCode::InvalidInput, None),
			DocsetError::Write { path, .. } => (
				ErrorCode::IoError,
				Some(serde_json::json!({ "path": path })),
			),
			DocsetError::Content(err) => content_error_code(err),
			DocsetError::Io(_) => (ErrorCode::IoError, None),
			DocsetError::Json(_) => (ErrorCode::InvalidInput, None),
			DocsetError::Anyhow(err) if err.downcast_ref::<std::io::Error>().is_some() => {
				(ErrorCode::IoError, None)
			}
			DocsetError::Anyhow(_) => (ErrorCode::InternalError, None),
		};

		CommandError {
			code,
			message: self.to_string(),
			details,
		}
	}
}

fn content_error_code(err: &docset::Error) -> (ErrorCode, Option<serde_json::Value>) {
	use docset::Error;

	match err {
		Error::Io { path, source } if source.kind() == std::io::ErrorKind::NotFound => (
			ErrorCode::ContentNotFound,
			Some(serde_json::json!({ "path": path })),
		),
		Error::Io { path, source } => (
			ErrorCode::IoError,
			Some(serde_json::json!({ "path": path, "kind": source.kind().to_string() })),
		),
		Error::Parse { path, source } => (
			ErrorCode::InvalidContent,
			Some(serde_json::json!({
				"path": path,
				"line": source.line(),
				"column": source.column(),
			})),
		),
		Error::MissingPartition { language, partition } => (
			ErrorCode::ContentNotFound,
			Some(serde_json::json!({ "language": language, "partition": partition })),
		),
		Error::EmptyContent(path) => (
			ErrorCode::ContentNotFound,
			Some(serde_json::json!({ "path": path })),
		),
		Error::Invalid(report) => (
			ErrorCode::InvalidContent,
			serde_json::to_value(report).ok(),
		),
		Error::NoQuiz { entry } => (
			ErrorCode::InvalidInput,
			Some(serde_json::json!({ "entry": entry })),
		),
		Error::AnswerCount { expected, got } => (
			ErrorCode::InvalidInput,
			Some(serde_json::json!({ "expected": expected, "got": got })),
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn language_not_found_lists_available() {
		let err = DocsetError::LanguageNotFound {
			id: "cypress".into(),
			available: vec!["selenium".into(), "playwright".into()],
		};
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::LanguageNotFound);
		assert_eq!(
			cmd.message,
			"unknown language 'cypress' (available: selenium, playwright)"
		);
		assert_eq!(cmd.details.unwrap()["language"], "cypress");
	}

	#[test]
	fn entry_not_found_code() {
		let err = DocsetError::EntryNotFound {
			language: "selenium".into(),
			category: "locators".into(),
			id: "nope".into(),
		};
		assert_eq!(err.to_command_error().code, ErrorCode::EntryNotFound);
	}

	#[test]
	fn invalid_content_carries_report() {
		let report = docset::validate(&[
			docset::LanguageConfig {
				id: "x".into(),
				label: "X".into(),
				icon: String::new(),
				color: String::new(),
				docs_url: "https://example.com".into(),
				tagline: String::new(),
				execution_api_id: String::new(),
				categories: vec![],
			},
			docset::LanguageConfig {
				id: "x".into(),
				label: "X again".into(),
				icon: String::new(),
				color: String::new(),
				docs_url: "https://example.com".into(),
				tagline: String::new(),
				execution_api_id: String::new(),
				categories: vec![],
			},
		]);
		assert!(!report.is_ok());

		let err = DocsetError::from(docset::Error::Invalid(report));
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::InvalidContent);
		let details = cmd.details.unwrap();
		assert_eq!(details["violations"][0]["kind"], "duplicate_language_id");
	}

	#[test]
	fn missing_partition_is_content_not_found() {
		let err = DocsetError::from(docset::Error::MissingPartition {
			language: "selenium".into(),
			partition: "gone.json".into(),
		});
		assert_eq!(err.to_command_error().code, ErrorCode::ContentNotFound);
	}

	#[test]
	fn content_io_error_code_follows_kind() {
		let missing = DocsetError::from(docset::Error::Io {
			path: "content/selenium/language.json".into(),
			source: std::io::Error::from(std::io::ErrorKind::NotFound),
		});
		assert_eq!(missing.to_command_error().code, ErrorCode::ContentNotFound);

		let denied = DocsetError::from(docset::Error::Io {
			path: "content/selenium/language.json".into(),
			source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
		});
		let cmd = denied.to_command_error();
		assert_eq!(cmd.code, ErrorCode::IoError);
		assert_eq!(cmd.details.unwrap()["path"], "content/selenium/language.json");
	}

	#[test]
	fn answer_count_is_invalid_input() {
		let err = DocsetError::from(docset::Error::AnswerCount { expected: 2, got: 1 });
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::InvalidInput);
		assert_eq!(cmd.message, "expected 2 answer(s), got 1");
	}
}
