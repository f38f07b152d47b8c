use tracing::level_filters::LevelFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.list_height == 0 {
		return Err(ConfigError::invalid(
			"ui.list_height",
			config.list_height.to_string(),
			sources.source_for_list_height(),
			"must be at least 1",
		));
	}

	if let Some(theme) = &config.theme
		&& chipz::tui::style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!(
				"unknown theme; available: {}",
				chipz::tui::style::names().join(", ")
			),
		));
	}

	if config.log.level.parse::<LevelFilter>().is_err() {
		return Err(ConfigError::invalid(
			"log.level",
			config.log.level.clone(),
			sources.source_for_log_level(),
			"expected one of off, error, warn, info, debug, trace",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use chipz::UiLabels;
	use chipz::logging::LogConfig;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			data_path: None,
			theme: None,
			labels: UiLabels::default(),
			initial_query: String::new(),
			list_height: 6,
			preselect: Vec::new(),
			log: LogConfig::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_list_height() {
		let config = ResolvedConfig {
			list_height: 0,
			..config()
		};
		let sources = ConfigSources {
			list_height: Some(SettingSource::CliFlag("--list-height")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "ui.list_height"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..config()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::Environment("CHIPZ__UI__THEME")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("environment variable"));
		assert!(message.contains("slate"));
	}

	#[test]
	fn validation_rejects_bad_log_level() {
		let mut config = config();
		config.log.level = "loud".into();

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "log.level");
		assert_eq!(err.origin, SettingSource::ConfigKey("log.level"));
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let config = ResolvedConfig {
			theme: Some("Light".into()),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
