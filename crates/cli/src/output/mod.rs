//! Structured output envelope for all CLI commands.
//!
//! Provides a consistent JSON output format for machine consumption (editor
//! integrations, CI jobs, agents).
//!
//! ## Output Contract
//!
//! Every command produces a result envelope on stdout:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "ok": true,
//!   "command": "show",
//!   "inputs": { "language": "selenium" },
//!   "data": { ... },
//!   "timings": { "durationMs": 3 }
//! }
//! ```
//!
//! On failure:
//!
//! ```json
//! {
//!   "ok": false,
//!   "command": "show",
//!   "error": {
//!     "code": "LANGUAGE_NOT_FOUND",
//!     "message": "unknown language 'cypress' (available: selenium, playwright)",
//!     "details": { "language": "cypress" }
//!   }
//! }
//! ```


use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use docset::{
	Difficulty, DocEntry, LanguageConfig, LanguageStats, QuizGrade, Severity, ValidationMode,
	ValidationReport,
};
use serde::{Deserialize, Serialize};

/// Current schema version for command output.
///
/// Increment this when making breaking changes to the output structure.
pub const SCHEMA_VERSION: u32 = 1;

/// Output format for CLI results.
///
/// Used both for clap argument parsing and internal formatting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// TOON output (default, token-efficient for LLMs)
	#[default]
	Toon,
	/// JSON output
	Json,
	/// Newline-delimited JSON
	Ndjson,
	/// Human-readable text
	Text,
}

impl std::str::FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"toon" => Ok(OutputFormat::Toon),
			"json" => Ok(OutputFormat::Json),
			"ndjson" => Ok(OutputFormat::Ndjson),
			"text" => Ok(OutputFormat::Text),
			_ => Err(format!("unknown format: {s}")),
		}
	}
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Toon => write!(f, "toon"),
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Ndjson => write!(f, "ndjson"),
			OutputFormat::Text => write!(f, "text"),
		}
	}
}

/// The main result envelope returned by all commands.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
	/// Schema version for output format compatibility.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub schema_version: Option<u32>,

	/// Whether the command succeeded
	pub ok: bool,

	/// Command name (e.g., "languages", "show", "validate")
	pub command: String,

	/// Inputs used for this command (for traceability)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub inputs: Option<CommandInputs>,

	/// Command-specific result data
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,

	/// Error information (only present on failure)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,

	/// Timing information
	#[serde(skip_serializing_if = "Option::is_none")]
	pub timings: Option<Timings>,

	/// Files written by the command
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub artifacts: Vec<Artifact>,

	/// Diagnostic information (content warnings, fallbacks, etc.)
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub diagnostics: Vec<Diagnostic>,

	/// Effective configuration used for this command
	#[serde(skip_serializing_if = "Option::is_none")]
	pub config: Option<EffectiveConfig>,
}

/// Inputs that were used for the command (for traceability)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommandInputs {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub language: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub entry: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub query: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub output_path: Option<PathBuf>,

	/// Additional command-specific inputs
	#[serde(flatten, skip_serializing_if = "Option::is_none")]
	pub extra: Option<serde_json::Value>,
}

/// Error information for failed commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
	/// Error code (e.g., "LANGUAGE_NOT_FOUND", "INVALID_CONTENT")
	pub code: ErrorCode,

	/// Human-readable error message
	pub message: String,

	/// Additional error details (ids, paths, validation report)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}

/// Standardized error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	LanguageNotFound,
	CategoryNotFound,
	EntryNotFound,
	/// Content directory, manifest or partition could not be found
	ContentNotFound,
	/// Content was found but is malformed or fails validation
	InvalidContent,
	InvalidInput,
	IoError,
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorCode::LanguageNotFound => write!(f, "LANGUAGE_NOT_FOUND"),
			ErrorCode::CategoryNotFound => write!(f, "CATEGORY_NOT_FOUND"),
			ErrorCode::EntryNotFound => write!(f, "ENTRY_NOT_FOUND"),
			ErrorCode::ContentNotFound => write!(f, "CONTENT_NOT_FOUND"),
			ErrorCode::InvalidContent => write!(f, "INVALID_CONTENT"),
			ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
			ErrorCode::IoError => write!(f, "IO_ERROR"),
			ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
		}
	}
}

/// Timing information for the command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
	/// Total duration in milliseconds
	pub duration_ms: u64,
}

impl From<Duration> for Timings {
	fn from(duration: Duration) -> Self {
		Timings {
			duration_ms: duration.as_millis() as u64,
		}
	}
}

/// File written by a command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
	#[serde(rename = "type")]
	pub artifact_type: ArtifactType,

	pub path: PathBuf,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub size_bytes: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
	/// A serialized `LanguageConfig`
	Export,
}

/// Diagnostic messages (warnings, info, etc.)
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
	pub level: DiagnosticLevel,

	pub message: String,

	/// Source of the diagnostic (e.g., "content", "config")
	#[serde(skip_serializing_if = "Option::is_none")]
	pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
	Warning,
	Error,
}

impl From<Severity> for DiagnosticLevel {
	fn from(severity: Severity) -> Self {
		match severity {
			Severity::Error => DiagnosticLevel::Error,
			Severity::Warning => DiagnosticLevel::Warning,
		}
	}
}

/// Where content was loaded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOrigin {
	/// Compiled into the binary.
	#[default]
	Builtin,
	/// `--content-dir` flag.
	CliFlag,
	/// `DOCSET_CONTENT_DIR` environment variable.
	Env,
	/// `contentDir` in a config file.
	Config,
}

/// Effective configuration used for the command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
	pub content_origin: ContentOrigin,

	/// Content directory, when not builtin
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content_dir: Option<PathBuf>,

	pub validation: ValidationMode,
}

/// Builder for constructing command results
pub struct ResultBuilder<T: Serialize> {
	schema_version: Option<u32>,
	command: String,
	inputs: Option<CommandInputs>,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Option<Instant>,
	artifacts: Vec<Artifact>,
	diagnostics: Vec<Diagnostic>,
	config: Option<EffectiveConfig>,
}

impl<T: Serialize> ResultBuilder<T> {
	/// Create a new result builder for the given command.
	///
	/// The schema version is automatically set to [`SCHEMA_VERSION`].
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			schema_version: Some(SCHEMA_VERSION),
			command: command.into(),
			inputs: None,
			data: None,
			error: None,
			start_time: Some(Instant::now()),
			artifacts: Vec::new(),
			diagnostics: Vec::new(),
			config: None,
		}
	}

	pub fn inputs(mut self, inputs: CommandInputs) -> Self {
		self.inputs = Some(inputs);
		self
	}

	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	pub fn error(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
			details: None,
		});
		self
	}

	pub fn error_with_details(
		mut self,
		code: ErrorCode,
		message: impl Into<String>,
		details: serde_json::Value,
	) -> Self {
		self.error = Some(CommandError {
			code,
			message: message.into(),
			details: Some(details),
		});
		self
	}

	pub fn artifact(mut self, artifact: Artifact) -> Self {
		self.artifacts.push(artifact);
		self
	}

	pub fn diagnostic_with_source(
		mut self,
		level: DiagnosticLevel,
		message: impl Into<String>,
		source: impl Into<String>,
	) -> Self {
		self.diagnostics.push(Diagnostic {
			level,
			message: message.into(),
			source: Some(source.into()),
		});
		self
	}

	/// Adds one diagnostic per violation in `report`.
	pub fn report_diagnostics(mut self, report: Option<&ValidationReport>) -> Self {
		for violation in report.into_iter().flat_map(|r| &r.violations) {
			self = self.diagnostic_with_source(violation.severity.into(), violation.to_string(), "content");
		}
		self
	}

	pub fn config(mut self, config: EffectiveConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn build(self) -> CommandResult<T> {
		let ok = self.error.is_none() && self.data.is_some();

		let timings = self.start_time.map(|start| Timings::from(start.elapsed()));

		CommandResult {
			schema_version: self.schema_version,
			ok,
			command: self.command,
			inputs: self.inputs,
			data: self.data,
			error: self.error,
			timings,
			artifacts: self.artifacts,
			diagnostics: self.diagnostics,
			config: self.config,
		}
	}
}

/// Print a command result to stdout in the specified format
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Toon => {
			if let Ok(json_value) = serde_json::to_value(result) {
				println!("{}", toon::encode(&json_value, None));
			}
		}
		OutputFormat::Json => {
			if let Ok(json) = serde_json::to_string_pretty(result) {
				println!("{json}");
			}
		}
		OutputFormat::Ndjson => {
			if let Ok(json) = serde_json::to_string(result) {
				println!("{json}");
			}
		}
		OutputFormat::Text => {
			print_result_text(result, |data| serde_json::to_string_pretty(data).unwrap_or_default());
		}
	}
}

/// Like [`print_result`], but text output uses `render` for the data payload.
pub fn print_result_with<T: Serialize>(
	result: &CommandResult<T>,
	format: OutputFormat,
	render: impl FnOnce(&T) -> String,
) {
	match format {
		OutputFormat::Text => print_result_text(result, render),
		other => print_result(result, other),
	}
}

fn print_result_text<T: Serialize>(result: &CommandResult<T>, render: impl FnOnce(&T) -> String) {
	let mut stdout = io::stdout().lock();

	if let Some(ref data) = result.data {
		let _ = write!(stdout, "{}", ensure_newline(render(data)));
	}
	if let Some(ref error) = result.error {
		let _ = writeln!(stdout, "Error [{}]: {}", error.code, error.message);
		if let Some(ref details) = error.details {
			if let Ok(json) = serde_json::to_string_pretty(details) {
				let _ = writeln!(stdout, "Details: {json}");
			}
		}
	}

	for diag in &result.diagnostics {
		let prefix = match diag.level {
			DiagnosticLevel::Warning => "warning",
			DiagnosticLevel::Error => "error",
		};
		if let Some(ref source) = diag.source {
			let _ = writeln!(stdout, "[{prefix}:{source}] {}", diag.message);
		} else {
			let _ = writeln!(stdout, "[{prefix}] {}", diag.message);
		}
	}

	for artifact in &result.artifacts {
		let _ = writeln!(
			stdout,
			"Wrote {:?}: {}",
			artifact.artifact_type,
			artifact.path.display()
		);
	}
}

fn ensure_newline(mut s: String) -> String {
	if !s.ends_with('\n') {
		s.push('\n');
	}
	s
}

/// Print an error to stderr in human-readable format
pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}

/// One row of `docset languages`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSummary {
	pub id: String,
	pub label: String,
	pub tagline: String,
	pub docs_url: String,
	pub execution_api_id: String,
	pub categories: usize,
	pub entries: usize,
}

impl From<&LanguageConfig> for LanguageSummary {
	fn from(lang: &LanguageConfig) -> Self {
		Self {
			id: lang.id.clone(),
			label: lang.label.clone(),
			tagline: lang.tagline.clone(),
			docs_url: lang.docs_url.clone(),
			execution_api_id: lang.execution_api_id.clone(),
			categories: lang.categories.len(),
			entries: lang.entries().count(),
		}
	}
}

/// Result data for languages command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesData {
	pub languages: Vec<LanguageSummary>,
	pub count: usize,
}

/// One category row in a language overview
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
	pub id: String,
	pub label: String,
	pub icon: String,
	pub entries: usize,
}

/// One entry row in a category listing
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
	pub id: String,
	pub title: String,
	pub difficulty: Difficulty,
	pub tags: Vec<String>,
	pub has_quiz: bool,
	pub has_challenge: bool,
}

impl From<&DocEntry> for EntrySummary {
	fn from(entry: &DocEntry) -> Self {
		Self {
			id: entry.id.clone(),
			title: entry.title.clone(),
			difficulty: entry.difficulty,
			tags: entry.tags.clone(),
			has_quiz: !entry.quiz_questions().is_empty(),
			has_challenge: entry.challenge.is_some(),
		}
	}
}

/// Result data for show command, by depth
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "camelCase")]
pub enum ShowData {
	Language {
		language: LanguageSummary,
		categories: Vec<CategorySummary>,
	},
	Category {
		language: String,
		id: String,
		label: String,
		entries: Vec<EntrySummary>,
	},
	Entry {
		language: String,
		category: String,
		entry: DocEntry,
	},
}

/// One search result row
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultRow {
	pub language: String,
	pub category: String,
	#[serde(flatten)]
	pub entry: EntrySummary,
}

/// Result data for search command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
	pub results: Vec<SearchResultRow>,
	pub count: usize,
}

/// Result data for validate command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateData {
	pub valid: bool,
	pub languages: usize,
	pub errors: usize,
	pub warnings: usize,
	pub report: ValidationReport,
}

/// Result data for export command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
	pub language: String,
	pub categories: usize,
	/// Written file; `None` when the config was printed inline
	#[serde(skip_serializing_if = "Option::is_none")]
	pub path: Option<PathBuf>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub config: Option<LanguageConfig>,
}

/// Result data for stats command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
	pub languages: Vec<LanguageStats>,
}

/// A quiz question without its answer
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPrompt {
	pub question: String,
	pub options: Vec<String>,
}

/// Result data for quiz command
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum QuizData {
	/// Questions only, answers withheld
	Questions {
		entry: String,
		questions: Vec<QuizPrompt>,
	},
	Graded(QuizGrade),
}

/// Result data for config show command
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigData {
	pub effective: EffectiveConfig,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default_language: Option<String>,
	pub global_config: PathBuf,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub project_config: Option<PathBuf>,
	/// Config files that existed and were read
	pub loaded_from: Vec<PathBuf>,
}
