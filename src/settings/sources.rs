use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use chipz::app_dirs;
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "chipz";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Environment source for `CHIPZ__SECTION__KEY` variables. Only
/// `ui.preselect` is split on commas.
pub(super) fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.separator(ENV_SEPARATOR)
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("ui.preselect")
}

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs, environment: Environment) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(environment);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".chipz.toml"));
		files.push(current_dir.join("chipz.toml"));
	}

	files
}
