//! `docset stats`

use crate::context::CommandContext;
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, StatsData, print_result_with};
use crate::render;

pub fn execute(ctx: &CommandContext, format: OutputFormat) -> Result<()> {
	let loaded = ctx.load()?;

	let result = ResultBuilder::new("stats")
		.data(StatsData {
			languages: loaded.registry.stats(),
		})
		.report_diagnostics(loaded.report.as_ref())
		.build();

	print_result_with(&result, format, render::stats);
	Ok(())
}
