//! Where content comes from.
//!
//! A [`ContentSource`] produces raw, unparsed partition text together with
//! each language's manifest. Two sources exist: [`EmbeddedSource`] (the
//! dataset compiled into this crate) and [`DirSource`] (a content directory
//! on disk with the same layout).

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use docset_protocol::{LanguageManifest, MANIFEST_FILE};
use tracing::debug;

use crate::builtin::{BUILTIN, BUILTIN_ROOT};
use crate::error::{Error, Result};

/// One partition file, not yet parsed.
#[derive(Debug, Clone)]
pub struct RawPartition {
	/// File path (or pseudo-path for embedded content), used in errors
	pub path: PathBuf,
	pub text: Cow<'static, str>,
}

/// A parsed manifest plus the raw partitions it lists, in manifest order.
#[derive(Debug, Clone)]
pub struct RawLanguage {
	pub manifest: LanguageManifest,
	pub partitions: Vec<RawPartition>,
}

/// Provider of language manifests and partition text.
pub trait ContentSource {
	/// Short description for logs ("builtin", a directory path, ...).
	fn describe(&self) -> String;

	/// Reads every language, in registry order.
	fn read_languages(&self) -> Result<Vec<RawLanguage>>;
}

/// The dataset shipped inside the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl ContentSource for EmbeddedSource {
	fn describe(&self) -> String {
		BUILTIN_ROOT.to_string()
	}

	fn read_languages(&self) -> Result<Vec<RawLanguage>> {
		BUILTIN
			.iter()
			.map(|lang| {
				let dir = Path::new(BUILTIN_ROOT).join(lang.dir);
				let manifest: LanguageManifest = serde_json::from_str(lang.manifest)
					.map_err(|e| Error::parse(dir.join(MANIFEST_FILE), e))?;

				let partitions = manifest
					.partitions
					.iter()
					.map(|name| {
						let file = lang.files.iter().find(|f| f.name == name.as_str()).ok_or_else(|| {
							Error::MissingPartition {
								language: manifest.id.clone(),
								partition: name.clone(),
							}
						})?;
						Ok(RawPartition {
							path: dir.join(name),
							text: Cow::Borrowed(file.text),
						})
					})
					.collect::<Result<Vec<_>>>()?;

				Ok(RawLanguage { manifest, partitions })
			})
			.collect()
	}
}

/// A content directory: one sub-directory per language, each holding a
/// `language.json` manifest and its partition files.
///
/// Languages are ordered by directory name. Sub-directories without a
/// manifest are ignored.
#[derive(Debug, Clone)]
pub struct DirSource {
	root: PathBuf,
}

impl DirSource {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	fn language_dirs(&self) -> Result<Vec<PathBuf>> {
		let entries = fs::read_dir(&self.root).map_err(|e| Error::io(&self.root, e))?;

		let mut dirs = Vec::new();
		for entry in entries {
			let entry = entry.map_err(|e| Error::io(&self.root, e))?;
			let path = entry.path();
			if path.is_dir() && path.join(MANIFEST_FILE).is_file() {
				dirs.push(path);
			}
		}
		dirs.sort();
		Ok(dirs)
	}
}

impl ContentSource for DirSource {
	fn describe(&self) -> String {
		self.root.display().to_string()
	}

	fn read_languages(&self) -> Result<Vec<RawLanguage>> {
		let dirs = self.language_dirs()?;
		if dirs.is_empty() {
			return Err(Error::EmptyContent(self.root.clone()));
		}

		dirs.iter().map(|dir| read_language_dir(dir)).collect()
	}
}

fn read_language_dir(dir: &Path) -> Result<RawLanguage> {
	let manifest_path = dir.join(MANIFEST_FILE);
	let text = fs::read_to_string(&manifest_path).map_err(|e| Error::io(&manifest_path, e))?;
	let manifest: LanguageManifest =
		serde_json::from_str(&text).map_err(|e| Error::parse(&manifest_path, e))?;
	debug!(target = "docset", language = %manifest.id, dir = %dir.display(), "read manifest");

	let partitions = manifest
		.partitions
		.iter()
		.map(|name| {
			let path = dir.join(name);
			match fs::read_to_string(&path) {
				Ok(text) => Ok(RawPartition {
					path,
					text: Cow::Owned(text),
				}),
				Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::MissingPartition {
					language: manifest.id.clone(),
					partition: name.clone(),
				}),
				Err(e) => Err(Error::io(path, e)),
			}
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(RawLanguage { manifest, partitions })
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	const MANIFEST: &str = r##"{
		"id": "selenium",
		"label": "Selenium",
		"icon": "globe",
		"color": "#43B02A",
		"docsUrl": "https://www.selenium.dev/documentation/",
		"tagline": "WebDriver",
		"executionApiId": "python",
		"partitions": ["a.json", "b.json"]
	}"##;

	fn write_language(root: &Path, dir: &str, manifest: &str, files: &[(&str, &str)]) {
		let lang_dir = root.join(dir);
		fs::create_dir_all(&lang_dir).unwrap();
		fs::write(lang_dir.join(MANIFEST_FILE), manifest).unwrap();
		for (name, text) in files {
			fs::write(lang_dir.join(name), text).unwrap();
		}
	}

	#[test]
	fn embedded_source_lists_builtin_languages() {
		let langs = EmbeddedSource.read_languages().unwrap();
		let ids: Vec<_> = langs.iter().map(|l| l.manifest.id.as_str()).collect();
		assert_eq!(ids, ["selenium", "playwright"]);
		for lang in &langs {
			assert_eq!(lang.partitions.len(), lang.manifest.partitions.len());
			assert!(lang.partitions[0].path.starts_with(BUILTIN_ROOT));
		}
	}

	#[test]
	fn dir_source_reads_partitions_in_manifest_order() {
		let tmp = TempDir::new().unwrap();
		write_language(tmp.path(), "selenium", MANIFEST, &[("b.json", "[2]"), ("a.json", "[1]")]);

		let langs = DirSource::new(tmp.path()).read_languages().unwrap();
		assert_eq!(langs.len(), 1);
		let texts: Vec<_> = langs[0].partitions.iter().map(|p| p.text.as_ref()).collect();
		assert_eq!(texts, ["[1]", "[2]"]);
	}

	#[test]
	fn dir_source_orders_by_directory_name_and_skips_strays() {
		let tmp = TempDir::new().unwrap();
		let other = MANIFEST.replace("\"selenium\"", "\"zeta\"");
		write_language(tmp.path(), "b-lang", MANIFEST, &[("a.json", "[]"), ("b.json", "[]")]);
		write_language(tmp.path(), "a-lang", &other, &[("a.json", "[]"), ("b.json", "[]")]);
		fs::create_dir_all(tmp.path().join("assets")).unwrap();

		let langs = DirSource::new(tmp.path()).read_languages().unwrap();
		let ids: Vec<_> = langs.iter().map(|l| l.manifest.id.as_str()).collect();
		assert_eq!(ids, ["zeta", "selenium"]);
	}

	#[test]
	fn dir_source_missing_partition() {
		let tmp = TempDir::new().unwrap();
		write_language(tmp.path(), "selenium", MANIFEST, &[("a.json", "[]")]);

		let err = DirSource::new(tmp.path()).read_languages().unwrap_err();
		match err {
			Error::MissingPartition { language, partition } => {
				assert_eq!(language, "selenium");
				assert_eq!(partition, "b.json");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn dir_source_empty_directory() {
		let tmp = TempDir::new().unwrap();
		let err = DirSource::new(tmp.path()).read_languages().unwrap_err();
		assert!(matches!(err, Error::EmptyContent(_)));
	}

	#[test]
	fn dir_source_bad_manifest_names_file() {
		let tmp = TempDir::new().unwrap();
		write_language(tmp.path(), "selenium", "{ not json", &[]);

		let err = DirSource::new(tmp.path()).read_languages().unwrap_err();
		match err {
			Error::Parse { path, .. } => assert!(path.ends_with("selenium/language.json")),
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn dir_source_missing_root() {
		let tmp = TempDir::new().unwrap();
		let err = DirSource::new(tmp.path().join("nope")).read_languages().unwrap_err();
		assert!(matches!(err, Error::Io { .. }));
	}
}
