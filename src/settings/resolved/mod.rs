use std::path::PathBuf;

use chipz::UiLabels;
use chipz::logging::LogConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
	/// JSON dataset to read; `None` uses the bundled people.
	pub data_path: Option<PathBuf>,
	pub theme: Option<String>,
	pub labels: UiLabels,
	pub initial_query: String,
	pub list_height: u16,
	/// Ids selected before the picker opens, in order.
	pub preselect: Vec<String>,
	pub log: LogConfig,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
