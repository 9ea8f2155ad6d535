//! `docset show <language> [category] [entry]`

use tracing::debug;

use crate::cli::ShowArgs;
use crate::context::{CommandContext, require_category, require_entry, require_language};
use crate::error::Result;
use crate::output::{
	CategorySummary, CommandInputs, EntrySummary, LanguageSummary, OutputFormat, ResultBuilder,
	ShowData, print_result_with,
};
use crate::render;

pub fn execute(ctx: &CommandContext, args: ShowArgs, format: OutputFormat) -> Result<()> {
	let language_id = ctx.language_id(args.language)?;
	let loaded = ctx.load()?;
	let language = require_language(&loaded.registry, &language_id)?;

	let data = match (&args.category, &args.entry) {
		(None, _) => ShowData::Language {
			language: LanguageSummary::from(language),
			categories: language
				.categories
				.iter()
				.map(|c| CategorySummary {
					id: c.id.clone(),
					label: c.label.clone(),
					icon: c.icon.clone(),
					entries: c.entries.len(),
				})
				.collect(),
		},
		(Some(category_id), None) => {
			let category = require_category(language, category_id)?;
			ShowData::Category {
				language: language.id.clone(),
				id: category.id.clone(),
				label: category.label.clone(),
				entries: category.entries.iter().map(EntrySummary::from).collect(),
			}
		}
		(Some(category_id), Some(entry_id)) => {
			let category = require_category(language, category_id)?;
			let entry = require_entry(language, category, entry_id)?;
			ShowData::Entry {
				language: language.id.clone(),
				category: category.id.clone(),
				entry: entry.clone(),
			}
		}
	};
	debug!(target = "docset", language = %language.id, "resolved show target");

	let result = ResultBuilder::new("show")
		.inputs(CommandInputs {
			language: Some(language_id),
			category: args.category,
			entry: args.entry,
			..Default::default()
		})
		.data(data)
		.report_diagnostics(loaded.report.as_ref())
		.build();

	print_result_with(&result, format, render::show);
	Ok(())
}
