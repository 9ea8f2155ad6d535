//! Helpers for running the built `docset` binary in isolation.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub struct Run {
	pub success: bool,
	pub json: serde_json::Value,
	pub stdout: String,
	pub stderr: String,
}

/// A scratch working directory with its own config home.
pub struct Sandbox {
	pub dir: TempDir,
}

impl Sandbox {
	pub fn new() -> Self {
		Self {
			dir: TempDir::new().unwrap(),
		}
	}

	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	pub fn config_home(&self) -> PathBuf {
		self.path().join("xdg")
	}

	fn command(&self) -> Command {
		let mut cmd = Command::new(env!("CARGO_BIN_EXE_docset"));
		cmd.current_dir(self.path())
			.env("XDG_CONFIG_HOME", self.config_home())
			.env_remove("DOCSET_CONTENT_DIR")
			.env_remove("RUST_LOG");
		cmd
	}

	/// Runs with `-f json` and parses stdout.
	pub fn run(&self, args: &[&str]) -> Run {
		self.run_with_env(args, &[])
	}

	pub fn run_with_env(&self, args: &[&str], env: &[(&str, &Path)]) -> Run {
		let mut cmd = self.command();
		cmd.args(["-f", "json"]).args(args);
		for (key, value) in env {
			cmd.env(key, value);
		}
		let output = cmd.output().expect("failed to execute docset");

		let stdout = String::from_utf8_lossy(&output.stdout).to_string();
		let stderr = String::from_utf8_lossy(&output.stderr).to_string();
		let json = serde_json::from_str(&stdout).unwrap_or_else(|_| serde_json::json!({ "raw": stdout }));
		Run {
			success: output.status.success(),
			json,
			stdout,
			stderr,
		}
	}

	/// Runs with `-f text`.
	pub fn run_text(&self, args: &[&str]) -> Run {
		let output = self
			.command()
			.args(["-f", "text"])
			.args(args)
			.output()
			.expect("failed to execute docset");
		Run {
			success: output.status.success(),
			json: serde_json::Value::Null,
			stdout: String::from_utf8_lossy(&output.stdout).to_string(),
			stderr: String::from_utf8_lossy(&output.stderr).to_string(),
		}
	}

	/// Copies the shipped content tree into the sandbox and returns its path.
	pub fn copy_builtin_content(&self) -> PathBuf {
		let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("../core/content");
		let dst = self.path().join("content");
		copy_dir(&src, &dst);
		dst
	}

	pub fn write(&self, relative: &str, body: &str) -> PathBuf {
		let path = self.path().join(relative);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(&path, body).unwrap();
		path
	}
}

fn copy_dir(src: &Path, dst: &Path) {
	fs::create_dir_all(dst).unwrap();
	for entry in fs::read_dir(src).unwrap() {
		let entry = entry.unwrap();
		let target = dst.join(entry.file_name());
		if entry.file_type().unwrap().is_dir() {
			copy_dir(&entry.path(), &target);
		} else {
			fs::copy(entry.path(), target).unwrap();
		}
	}
}
