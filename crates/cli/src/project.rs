//! Project detection
//!
//! A docset project is any directory containing a `.docset/` folder. The
//! nearest such ancestor of the working directory supplies the project
//! config file.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Per-project state directory name
pub const PROJECT_DIR: &str = ".docset";

/// Detected docset project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
	root: PathBuf,
}

impl Project {
	/// Try to detect a project from the current directory
	pub fn detect() -> Option<Self> {
		Self::detect_from(&env::current_dir().ok()?)
	}

	/// Try to detect a project from a given path
	pub fn detect_from(start: &Path) -> Option<Self> {
		find_project_root(start).map(|root| Self { root })
	}

	/// Get the project root directory
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// The project's `.docset/` directory
	pub fn state_dir(&self) -> PathBuf {
		self.root.join(PROJECT_DIR)
	}
}

/// Find the project root by searching upward for a `.docset/` directory
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
	let start = if start.is_absolute() {
		start.to_path_buf()
	} else {
		env::current_dir().ok()?.join(start)
	};

	let mut current = start.as_path();
	loop {
		debug!(target = "docset", path = %current.display(), "checking for project dir");

		if current.join(PROJECT_DIR).is_dir() {
			debug!(target = "docset", root = %current.display(), "found project root");
			return Some(current.to_path_buf());
		}

		match current.parent() {
			Some(parent) if parent != current => current = parent,
			_ => break,
		}
	}

	None
}
