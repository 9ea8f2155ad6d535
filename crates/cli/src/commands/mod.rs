mod config;
mod export;
mod languages;
mod quiz;
mod search;
mod show;
mod stats;
mod validate;

use tracing::info;

use crate::cli::{Cli, Commands};
use crate::context::CommandContext;
use crate::error::Result;
use crate::output::OutputFormat;

pub fn dispatch(cli: Cli, format: OutputFormat) -> Result<()> {
	let ctx = CommandContext::from_env(&cli.overrides())?;
	info!(target = "docset", command = command_name(&cli.command), "running command");

	match cli.command {
		Commands::Languages => languages::execute(&ctx, format),
		Commands::Show(args) => show::execute(&ctx, args, format),
		Commands::Search(args) => search::execute(&ctx, args, format),
		Commands::Validate => validate::execute(&ctx, format),
		Commands::Export(args) => export::execute(&ctx, args, format),
		Commands::Stats => stats::execute(&ctx, format),
		Commands::Quiz(args) => quiz::execute(&ctx, args, format),
		Commands::Config(args) => config::execute(&ctx, args.action, format),
	}
}

/// Name reported in the result envelope.
pub fn command_name(command: &Commands) -> &'static str {
	match command {
		Commands::Languages => "languages",
		Commands::Show(_) => "show",
		Commands::Search(_) => "search",
		Commands::Validate => "validate",
		Commands::Export(_) => "export",
		Commands::Stats => "stats",
		Commands::Quiz(_) => "quiz",
		Commands::Config(_) => "config show",
	}
}
