
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::context::Overrides;
use crate::output::OutputFormat;
use crate::styles::cli_styles;

/// Root CLI for docset.
#[derive(Parser, Debug)]
#[command(name = "docset")]
#[command(about = "Browse, search and validate browser-automation documentation bundles")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: toon (default), json, ndjson, or text
	#[arg(short = 'f', long, global = true, value_enum, default_value = "toon")]
	pub format: OutputFormat,

	/// Load content from this directory instead of the builtin set
	#[arg(long, global = true, value_name = "DIR")]
	pub content_dir: Option<PathBuf>,

	/// How content problems are handled while loading
	#[arg(long, global = true, value_enum, value_name = "MODE")]
	pub validation: Option<CliValidation>,

	/// Ignore any `.docset/` project config
	#[arg(long, global = true)]
	pub no_project: bool,

	#[command(subcommand)]
	pub command: Commands,
}

impl Cli {
	/// Flags that feed the command context.
	pub fn overrides(&self) -> Overrides {
		Overrides {
			content_dir: self.content_dir.clone(),
			validation: self.validation.map(Into::into),
			no_project: self.no_project,
		}
	}
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// List available languages.
	#[command(visible_alias = "ls")]
	Languages,
	/// Show a language, a category, or a single entry.
	Show(ShowArgs),
	/// Search entries by text, tag and difficulty.
	Search(SearchArgs),
	/// Check content integrity and report every violation.
	Validate,
	/// Write an assembled language as JSON.
	Export(ExportArgs),
	/// Per-language content statistics.
	Stats,
	/// Print an entry's quiz, or grade answers to it.
	Quiz(QuizArgs),
	/// Inspect configuration.
	Config(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
	/// Language id (defaults to the configured defaultLanguage).
	#[arg(value_name = "LANGUAGE")]
	pub language: Option<String>,

	/// Category id.
	#[arg(value_name = "CATEGORY")]
	pub category: Option<String>,

	/// Entry id.
	#[arg(value_name = "ENTRY")]
	pub entry: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
	/// Case-insensitive text matched against titles, tags and section text.
	#[arg(value_name = "TEXT")]
	pub text: Option<String>,

	/// Require this tag (repeatable).
	#[arg(long = "tag", short = 't', value_name = "TAG")]
	pub tags: Vec<String>,

	#[arg(long, short = 'd', value_enum)]
	pub difficulty: Option<CliDifficulty>,

	/// Restrict to one language.
	#[arg(long, short = 'l', value_name = "LANGUAGE")]
	pub language: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
	/// Language id (defaults to the configured defaultLanguage).
	#[arg(value_name = "LANGUAGE")]
	pub language: Option<String>,

	/// Write to this file instead of embedding the config in the result.
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct QuizArgs {
	#[arg(value_name = "LANGUAGE")]
	pub language: String,

	#[arg(value_name = "CATEGORY")]
	pub category: String,

	#[arg(value_name = "ENTRY")]
	pub entry: String,

	/// Zero-based option indexes, one per question (e.g. 0,2,1).
	#[arg(long, value_name = "INDEXES", value_delimiter = ',')]
	pub answers: Option<Vec<usize>>,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
	#[command(subcommand)]
	pub action: ConfigAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
	/// Show the effective configuration and where it came from.
	Show,
}

/// Validation mode (CLI wrapper for docset::ValidationMode)
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliValidation {
	/// Fail on any error-severity violation
	Strict,
	/// Log violations and continue
	Warn,
	/// Skip validation
	Off,
}

impl From<CliValidation> for docset::ValidationMode {
	fn from(mode: CliValidation) -> Self {
		match mode {
			CliValidation::Strict => docset::ValidationMode::Strict,
			CliValidation::Warn => docset::ValidationMode::Warn,
			CliValidation::Off => docset::ValidationMode::Off,
		}
	}
}

/// Difficulty filter (CLI wrapper for docset::Difficulty)
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliDifficulty {
	Beginner,
	Intermediate,
	Advanced,
}

impl From<CliDifficulty> for docset::Difficulty {
	fn from(difficulty: CliDifficulty) -> Self {
		match difficulty {
			CliDifficulty::Beginner => docset::Difficulty::Beginner,
			CliDifficulty::Intermediate => docset::Difficulty::Intermediate,
			CliDifficulty::Advanced => docset::Difficulty::Advanced,
		}
	}
}
