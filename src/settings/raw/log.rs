use std::path::PathBuf;

use chipz::logging::{DEFAULT_LEVEL, LogConfig, VERBOSE_LEVEL};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Logging options as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) file: Option<PathBuf>,
	pub(super) level: Option<String>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
		if cli.verbose {
			self.level = Some(VERBOSE_LEVEL.to_string());
		}
	}

	pub(super) fn finalize(self) -> LogConfig {
		LogConfig {
			file: self.file,
			level: self
				.level
				.map(|level| level.trim().to_ascii_lowercase())
				.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
		}
	}
}
