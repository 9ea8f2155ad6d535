//! `docset search`

use docset::SearchQuery;

use crate::cli::SearchArgs;
use crate::context::{CommandContext, require_language};
use crate::error::Result;
use crate::output::{
	CommandInputs, EntrySummary, OutputFormat, ResultBuilder, SearchData, SearchResultRow,
	print_result_with,
};
use crate::render;

pub fn execute(ctx: &CommandContext, args: SearchArgs, format: OutputFormat) -> Result<()> {
	let loaded = ctx.load()?;

	// An unknown language filter is a typo, not an empty result.
	if let Some(language) = &args.language {
		require_language(&loaded.registry, language)?;
	}

	let query = SearchQuery {
		text: args.text.clone(),
		tags: args.tags.clone(),
		difficulty: args.difficulty.map(Into::into),
		language: args.language.clone(),
	};

	let results: Vec<SearchResultRow> = loaded
		.registry
		.search(&query)
		.into_iter()
		.map(|hit| SearchResultRow {
			language: hit.language.to_string(),
			category: hit.category.to_string(),
			entry: EntrySummary::from(hit.entry),
		})
		.collect();

	let result = ResultBuilder::new("search")
		.inputs(CommandInputs {
			language: args.language,
			query: args.text,
			extra: (!args.tags.is_empty() || args.difficulty.is_some()).then(|| {
				serde_json::json!({
					"tags": args.tags,
					"difficulty": args.difficulty.map(docset::Difficulty::from),
				})
			}),
			..Default::default()
		})
		.data(SearchData {
			count: results.len(),
			results,
		})
		.report_diagnostics(loaded.report.as_ref())
		.build();

	print_result_with(&result, format, render::search);
	Ok(())
}
