use std::io::IsTerminal;

use clap::Parser;
use docset_cli::{
	cli::Cli,
	commands,
	error::DocsetError,
	logging,
	output::{self, OutputFormat, ResultBuilder},
};

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if !std::io::stdout().is_terminal() {
		colored::control::set_override(false);
	}

	let format = cli.format;
	let command = commands::command_name(&cli.command);

	if let Err(err) = commands::dispatch(cli, format) {
		// If output was already printed (e.g., a failing validation report), just exit
		if !err.is_output_already_printed() {
			handle_error(command, err, format);
		}
		std::process::exit(1);
	}
}

fn handle_error(command: &str, err: DocsetError, format: OutputFormat) {
	let cmd_error = err.to_command_error();

	// Always print to stderr for humans
	output::print_error_stderr(&cmd_error);

	// Also emit the envelope to stdout with ok=false for machine consumers
	if format != OutputFormat::Text {
		let builder: ResultBuilder<()> = ResultBuilder::new(command);
		let result = match cmd_error.details {
			Some(details) => builder.error_with_details(cmd_error.code, cmd_error.message, details),
			None => builder.error(cmd_error.code, cmd_error.message),
		}
		.build();
		output::print_result(&result, format);
	}
}
