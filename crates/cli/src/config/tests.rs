use std::fs;
use std::path::Path;

use docset::ValidationMode;
use tempfile::TempDir;

use super::{ConfigPaths, DocsetConfig, LoadedConfig, SCHEMA_VERSION};

fn write(path: &Path, body: &str) {
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, body).unwrap();
}

#[test]
fn merge_overlays_set_fields_only() {
	let mut base = DocsetConfig {
		schema: 1,
		content_dir: Some("/global/content".into()),
		validation: Some(ValidationMode::Warn),
		default_language: Some("selenium".into()),
	};
	base.merge(&DocsetConfig {
		default_language: Some("playwright".into()),
		..Default::default()
	});

	assert_eq!(base.content_dir.as_deref(), Some(Path::new("/global/content")));
	assert_eq!(base.validation, Some(ValidationMode::Warn));
	assert_eq!(base.default_language.as_deref(), Some("playwright"));
}

#[test]
fn camel_case_on_disk() {
	let config: DocsetConfig = serde_json::from_str(
		r#"{"schema":1,"contentDir":"docs","validation":"off","defaultLanguage":"playwright"}"#,
	)
	.unwrap();
	assert_eq!(config.validation, Some(ValidationMode::Off));
	assert_eq!(config.default_language.as_deref(), Some("playwright"));

	let json = serde_json::to_value(DocsetConfig::new()).unwrap();
	assert_eq!(json, serde_json::json!({ "schema": SCHEMA_VERSION }));
}

#[test]
fn load_nothing_gives_defaults() {
	let home = TempDir::new().unwrap();
	let loaded = LoadedConfig::load(ConfigPaths::with_config_home(home.path(), None)).unwrap();
	assert_eq!(loaded.config, DocsetConfig::new());
	assert!(loaded.loaded_from.is_empty());
}

#[test]
fn project_overrides_global() {
	let home = TempDir::new().unwrap();
	let project = TempDir::new().unwrap();
	let paths = ConfigPaths::with_config_home(home.path(), Some(project.path()));

	write(
		&paths.global_config,
		r#"{"validation":"warn","defaultLanguage":"selenium"}"#,
	);
	write(
		paths.project_config.as_ref().unwrap(),
		r#"{"defaultLanguage":"playwright","contentDir":"docs"}"#,
	);

	let loaded = LoadedConfig::load(paths).unwrap();
	assert_eq!(loaded.loaded_from.len(), 2);
	assert_eq!(loaded.config.validation, Some(ValidationMode::Warn));
	assert_eq!(loaded.config.default_language.as_deref(), Some("playwright"));
	assert_eq!(loaded.config.content_dir, Some(project.path().join("docs")));
}

#[test]
fn global_relative_content_dir_resolves_next_to_file() {
	let home = TempDir::new().unwrap();
	let paths = ConfigPaths::with_config_home(home.path(), None);
	write(&paths.global_config, r#"{"contentDir":"content"}"#);

	let loaded = LoadedConfig::load(paths).unwrap();
	assert_eq!(
		loaded.config.content_dir,
		Some(home.path().join("docset").join("content"))
	);
}
