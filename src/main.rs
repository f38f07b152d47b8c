mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::PickWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		print_themes();
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	chipz::logging::initialize(&resolved.log)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_picker(cli.output, resolved)
}

/// Print every bundled theme, one per line, with its aliases.
fn print_themes() {
	for descriptor in chipz::tui::style::descriptors() {
		println!("{}", cli::format_theme_line(descriptor));
	}
}

/// Execute the picker workflow and print output in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
