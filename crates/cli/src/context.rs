//! Command context for docset commands
//!
//! Resolves where content comes from and how strictly it is validated, then
//! hands commands a loaded [`Registry`].

use std::path::PathBuf;

use docset::{
	DirSource, DocCategory, DocEntry, EmbeddedSource, LanguageConfig, Loaded, Loader, Registry,
	ValidationMode,
};
use tracing::{debug, info};

use crate::config::{ConfigPaths, LoadedConfig};
use crate::error::{DocsetError, Result};
use crate::output::{ContentOrigin, EffectiveConfig};
use crate::project::Project;

/// Environment variable overriding the content directory
pub const CONTENT_DIR_ENV: &str = "DOCSET_CONTENT_DIR";

/// Values given on the command line, before any config is consulted.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub content_dir: Option<PathBuf>,
	pub validation: Option<ValidationMode>,
	pub no_project: bool,
}

/// Shared state handed to every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
	config: LoadedConfig,
	effective: EffectiveConfig,
}

impl CommandContext {
	/// Detects the project, reads config files and the environment.
	pub fn from_env(overrides: &Overrides) -> Result<Self> {
		let project = if overrides.no_project {
			None
		} else {
			Project::detect()
		};
		let paths = ConfigPaths::new(project.as_ref().map(Project::root));
		let config = LoadedConfig::load(paths)?;
		let env_dir = std::env::var_os(CONTENT_DIR_ENV)
			.filter(|v| !v.is_empty())
			.map(PathBuf::from);

		Ok(Self::resolve(overrides, env_dir, config))
	}

	/// Applies precedence: flag, environment, merged config files, builtin.
	pub fn resolve(overrides: &Overrides, env_dir: Option<PathBuf>, config: LoadedConfig) -> Self {
		let (content_origin, content_dir) = if let Some(dir) = &overrides.content_dir {
			(ContentOrigin::CliFlag, Some(dir.clone()))
		} else if let Some(dir) = env_dir {
			(ContentOrigin::Env, Some(dir))
		} else if let Some(dir) = &config.config.content_dir {
			(ContentOrigin::Config, Some(dir.clone()))
		} else {
			(ContentOrigin::Builtin, None)
		};

		let validation = overrides
			.validation
			.or(config.config.validation)
			.unwrap_or_default();

		debug!(
			target = "docset",
			origin = ?content_origin,
			dir = ?content_dir,
			%validation,
			"resolved content settings"
		);

		Self {
			config,
			effective: EffectiveConfig {
				content_origin,
				content_dir,
				validation,
			},
		}
	}

	pub fn effective(&self) -> &EffectiveConfig {
		&self.effective
	}

	pub fn config(&self) -> &LoadedConfig {
		&self.config
	}

	pub fn validation(&self) -> ValidationMode {
		self.effective.validation
	}

	/// Loads content with the resolved validation mode.
	pub fn load(&self) -> Result<Loaded> {
		self.load_with(self.effective.validation)
	}

	/// Loads content, overriding the validation mode.
	pub fn load_with(&self, mode: ValidationMode) -> Result<Loaded> {
		let loaded = match &self.effective.content_dir {
			Some(dir) => {
				info!(target = "docset", dir = %dir.display(), %mode, "loading content directory");
				Loader::new(DirSource::new(dir)).mode(mode).load()?
			}
			None => {
				info!(target = "docset", %mode, "loading builtin content");
				Loader::new(EmbeddedSource).mode(mode).load()?
			}
		};
		Ok(loaded)
	}

	/// The given language id, or the configured default.
	pub fn language_id(&self, id: Option<String>) -> Result<String> {
		id.or_else(|| self.config.config.default_language.clone())
			.ok_or_else(|| {
				DocsetError::InvalidInput(
					"no language given and no defaultLanguage configured".into(),
				)
			})
	}
}

/// Looks up a language, listing the valid ids when it is missing.
pub fn require_language<'a>(registry: &'a Registry, id: &str) -> Result<&'a LanguageConfig> {
	registry
		.get_language(id)
		.ok_or_else(|| DocsetError::LanguageNotFound {
			id: id.to_string(),
			available: registry.ids().map(str::to_string).collect(),
		})
}

pub fn require_category<'a>(language: &'a LanguageConfig, id: &str) -> Result<&'a DocCategory> {
	language
		.category(id)
		.ok_or_else(|| DocsetError::CategoryNotFound {
			language: language.id.clone(),
			id: id.to_string(),
		})
}

pub fn require_entry<'a>(
	language: &LanguageConfig,
	category: &'a DocCategory,
	id: &str,
) -> Result<&'a DocEntry> {
	category
		.entry(id)
		.ok_or_else(|| DocsetError::EntryNotFound {
			language: language.id.clone(),
			category: category.id.clone(),
			id: id.to_string(),
		})
}
