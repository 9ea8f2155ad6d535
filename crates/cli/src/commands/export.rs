//! `docset export <language> [-o FILE]`

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::ExportArgs;
use crate::context::{CommandContext, require_language};
use crate::error::{DocsetError, Result};
use crate::output::{
	Artifact, ArtifactType, CommandInputs, ExportData, OutputFormat, ResultBuilder,
	print_result_with,
};
use crate::render;

pub fn execute(ctx: &CommandContext, args: ExportArgs, format: OutputFormat) -> Result<()> {
	let language_id = ctx.language_id(args.language)?;
	let loaded = ctx.load()?;
	let language = require_language(&loaded.registry, &language_id)?;

	let mut builder = ResultBuilder::new("export")
		.inputs(CommandInputs {
			language: Some(language_id),
			output_path: args.output.clone(),
			..Default::default()
		})
		.report_diagnostics(loaded.report.as_ref());

	let data = match args.output {
		Some(path) => {
			let size = write_json(&path, language)?;
			info!(target = "docset", path = %path.display(), bytes = size, "exported language");
			builder = builder.artifact(Artifact {
				artifact_type: ArtifactType::Export,
				path: path.clone(),
				size_bytes: Some(size),
			});
			ExportData {
				language: language.id.clone(),
				categories: language.categories.len(),
				path: Some(path),
				config: None,
			}
		}
		None => ExportData {
			language: language.id.clone(),
			categories: language.categories.len(),
			path: None,
			config: Some(language.clone()),
		},
	};

	let result = builder.data(data).build();
	print_result_with(&result, format, render::export);
	Ok(())
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> Result<u64> {
	let mut json = serde_json::to_string_pretty(value)?;
	json.push('\n');

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent).map_err(|source| DocsetError::Write {
			path: parent.to_path_buf(),
			source,
		})?;
	}
	fs::write(path, &json).map_err(|source| DocsetError::Write {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(json.len() as u64)
}
