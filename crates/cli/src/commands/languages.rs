//! `docset languages`

use crate::context::CommandContext;
use crate::error::Result;
use crate::output::{LanguageSummary, LanguagesData, OutputFormat, ResultBuilder, print_result_with};
use crate::render;

pub fn execute(ctx: &CommandContext, format: OutputFormat) -> Result<()> {
	let loaded = ctx.load()?;

	let languages: Vec<LanguageSummary> = loaded
		.registry
		.languages()
		.iter()
		.map(LanguageSummary::from)
		.collect();

	let result = ResultBuilder::new("languages")
		.data(LanguagesData {
			count: languages.len(),
			languages,
		})
		.report_diagnostics(loaded.report.as_ref())
		.config(ctx.effective().clone())
		.build();

	print_result_with(&result, format, render::languages);
	Ok(())
}
