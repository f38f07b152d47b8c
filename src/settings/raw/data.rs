use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// Dataset location as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) path: Option<PathBuf>,
}

impl DataSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.path = Some(path);
		}
	}
}
