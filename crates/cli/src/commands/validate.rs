//! `docset validate`
//!
//! Loads without validation so that every violation is reported at once,
//! instead of stopping at the strict loader's failure.

use docset::ValidationMode;
use tracing::info;

use crate::context::CommandContext;
use crate::error::{DocsetError, Result};
use crate::output::{ErrorCode, OutputFormat, ResultBuilder, ValidateData, print_result_with};
use crate::render;

pub fn execute(ctx: &CommandContext, format: OutputFormat) -> Result<()> {
	let loaded = ctx.load_with(ValidationMode::Off)?;
	let report = loaded.registry.validate();

	info!(
		target = "docset",
		errors = report.error_count(),
		warnings = report.warning_count(),
		"validated content"
	);

	let data = ValidateData {
		valid: report.is_ok(),
		languages: loaded.registry.len(),
		errors: report.error_count(),
		warnings: report.warning_count(),
		report,
	};
	let valid = data.valid;
	let errors = data.errors;

	let mut builder = ResultBuilder::new("validate").config(ctx.effective().clone());
	if !valid {
		builder = builder.error(
			ErrorCode::InvalidContent,
			format!("content failed validation with {errors} error(s)"),
		);
	}
	let result = builder.data(data).build();

	print_result_with(&result, format, render::validate);

	if valid {
		Ok(())
	} else {
		Err(DocsetError::OutputAlreadyPrinted)
	}
}
