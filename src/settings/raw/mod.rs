use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod data;
mod log;
mod ui;

use data::DataSection;
use log::LogSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.data.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			list_height: detect_source(
				cli.list_height.is_some(),
				self.ui.list_height.is_some(),
				"CHIPZ__UI__LIST_HEIGHT",
				"--list-height",
				"ui.list_height",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"CHIPZ__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.verbose,
				self.log.level.is_some(),
				"CHIPZ__LOG__LEVEL",
				"--verbose",
				"log.level",
			),
		};

		let ui = self.ui.finalize();
		let config = ResolvedConfig {
			data_path: self.data.path,
			theme: ui.theme,
			labels: ui.labels,
			initial_query: ui.initial_query,
			list_height: ui.list_height,
			preselect: ui.preselect,
			log: self.log.finalize(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
