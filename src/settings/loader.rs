use anyhow::{Result, anyhow};
use config::Config;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, environment};
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_from(cli, build_config(cli, environment())?)
}

pub(super) fn load_from(cli: &CliArgs, builder: Config) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
