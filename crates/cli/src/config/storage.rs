//! Locating and reading config files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

use super::types::DocsetConfig;
use crate::error::{DocsetError, Result};
use crate::project::PROJECT_DIR;

const CONFIG_FILE: &str = "config.json";

/// Config file locations.
///
/// The global file lives at `$XDG_CONFIG_HOME/docset/config.json`, falling
/// back to the platform config directory. The project file is
/// `<project>/.docset/config.json` when a project root was detected.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
	pub global_config: PathBuf,
	pub project_root: Option<PathBuf>,
	pub project_config: Option<PathBuf>,
}

impl ConfigPaths {
	pub fn new(project_root: Option<&Path>) -> Self {
		let config_home = std::env::var_os("XDG_CONFIG_HOME")
			.filter(|v| !v.is_empty())
			.map(PathBuf::from)
			.or_else(dirs::config_dir)
			.unwrap_or_else(|| PathBuf::from("."));
		Self::with_config_home(&config_home, project_root)
	}

	pub fn with_config_home(config_home: &Path, project_root: Option<&Path>) -> Self {
		Self {
			global_config: config_home.join("docset").join(CONFIG_FILE),
			project_root: project_root.map(Path::to_path_buf),
			project_config: project_root.map(|root| root.join(PROJECT_DIR).join(CONFIG_FILE)),
		}
	}
}

/// Config merged from disk (global, then project on top).
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	pub config: DocsetConfig,
	pub paths: ConfigPaths,
	/// Files that existed and parsed
	pub loaded_from: Vec<PathBuf>,
}

impl LoadedConfig {
	pub fn load(paths: ConfigPaths) -> Result<Self> {
		let mut config = DocsetConfig::new();
		let mut loaded_from = Vec::new();

		if let Some(global) = load_json::<DocsetConfig>(&paths.global_config)? {
			let base = paths.global_config.parent().unwrap_or(Path::new("."));
			config.merge(&resolve_relative(global, base));
			loaded_from.push(paths.global_config.clone());
		}

		if let (Some(path), Some(root)) = (&paths.project_config, &paths.project_root) {
			if let Some(project) = load_json::<DocsetConfig>(path)? {
				config.merge(&resolve_relative(project, root));
				loaded_from.push(path.clone());
			}
		}

		Ok(Self {
			config,
			paths,
			loaded_from,
		})
	}
}

/// Makes a relative `contentDir` relative to `base` instead of the cwd.
fn resolve_relative(mut config: DocsetConfig, base: &Path) -> DocsetConfig {
	if let Some(dir) = config.content_dir.take() {
		config.content_dir = Some(if dir.is_relative() { base.join(dir) } else { dir });
	}
	config
}

/// Reads `path` as JSON. A missing file is `Ok(None)`; any other read
/// failure carries the path as context.
fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
			debug!(target = "docset", path = %path.display(), "no config file");
			return Ok(None);
		}
		Err(err) => {
			return Err(err)
				.with_context(|| format!("failed to read config file {}", path.display()))
				.map_err(DocsetError::from);
		}
	};

	match serde_json::from_str(&content) {
		Ok(value) => {
			debug!(target = "docset", path = %path.display(), "loaded config");
			Ok(Some(value))
		}
		Err(err) => {
			warn!(target = "docset", path = %path.display(), error = %err, "malformed config file");
			Err(DocsetError::InvalidInput(format!(
				"config file {} is malformed: {err}",
				path.display()
			)))
		}
	}
}
