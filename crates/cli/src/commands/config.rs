//! `docset config show`

use crate::cli::ConfigAction;
use crate::context::CommandContext;
use crate::error::Result;
use crate::output::{ConfigData, OutputFormat, ResultBuilder, print_result_with};
use crate::render;

pub fn execute(ctx: &CommandContext, action: ConfigAction, format: OutputFormat) -> Result<()> {
	match action {
		ConfigAction::Show => show(ctx, format),
	}
}

fn show(ctx: &CommandContext, format: OutputFormat) -> Result<()> {
	let loaded = ctx.config();

	let result = ResultBuilder::new("config show")
		.data(ConfigData {
			effective: ctx.effective().clone(),
			default_language: loaded.config.default_language.clone(),
			global_config: loaded.paths.global_config.clone(),
			project_config: loaded.paths.project_config.clone(),
			loaded_from: loaded.loaded_from.clone(),
		})
		.build();

	print_result_with(&result, format, render::config);
	Ok(())
}
