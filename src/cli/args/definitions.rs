use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `chipz` binary.
#[derive(Parser, Debug)]
#[command(
	name = "chipz",
	version,
	long_version = long_version(),
	about = "Pick people into a tray of chips from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CHIPZ_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long,
		value_name = "FILE",
		help = "Read people from a JSON file (default: bundled dataset)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 's',
		long = "select",
		value_name = "ID",
		value_delimiter = ',',
		action = ArgAction::Append,
		help = "Start with the person selected; repeatable (default: none)"
	)]
	pub(crate) select: Vec<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Text shown in the empty input (default: \"Add new user ...\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the title of the chip tray (default: \"People\")"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "list-height",
		value_name = "ROWS",
		help = "Maximum number of dropdown rows (default: 6)"
	)]
	pub(crate) list_height: Option<u16>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Append logs to this file (default: $CHIPZ_LOG_DIR or disabled)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'v',
		long,
		help = "Log at debug level (default: disabled)"
	)]
	pub(crate) verbose: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
