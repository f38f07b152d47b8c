use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::RawConfig;
use super::super::loader::load_from;
use super::super::resolved::ResolvedConfig;
use super::super::sources::{build_config, environment};
use crate::cli::CliArgs;

fn config_file(contents: &str) -> (TempDir, PathBuf) {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("chipz.toml");
	fs::write(&path, contents).expect("write config");
	(dir, path)
}

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
	pairs
		.iter()
		.map(|(key, value)| ((*key).to_string(), (*value).to_string()))
		.collect()
}

fn load(args: &[&str], vars: &[(&str, &str)]) -> anyhow::Result<ResolvedConfig> {
	let cli = CliArgs::parse_from(args.iter().copied());
	let builder = build_config(&cli, environment().source(Some(env(vars))))?;
	load_from(&cli, builder)
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"chipz",
		"--data",
		"people.json",
		"--title",
		"Team",
		"--placeholder",
		"Who?",
		"--theme",
		"paper",
		"-q",
		"gra",
		"--list-height",
		"3",
		"-s",
		"2,5",
		"--log-file",
		"chipz.log",
		"--verbose",
	]);

	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	assert_eq!(config.data.path, cli.data);
	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.ui.placeholder, cli.placeholder);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.list_height, Some(3));
	assert_eq!(config.ui.preselect, Some(vec!["2".into(), "5".into()]));
	assert_eq!(config.log.file, cli.log_file);
	assert_eq!(config.log.level.as_deref(), Some("debug"));
}

#[test]
fn defaults_without_any_source() {
	let resolved = load(&["chipz", "--no-config"], &[]).expect("resolves");

	assert_eq!(resolved.data_path, None);
	assert_eq!(resolved.theme, None);
	assert_eq!(resolved.labels, chipz::UiLabels::default());
	assert_eq!(resolved.list_height, chipz::tui::DEFAULT_LIST_HEIGHT);
	assert!(resolved.preselect.is_empty());
	assert_eq!(resolved.log.level, "info");
}

#[test]
fn cli_beats_environment_beats_files() {
	let (_dir, path) = config_file(
		r#"
[data]
path = "from-file.json"

[ui]
title = "From file"
theme = "paper"
list_height = 3
preselect = ["7"]

[log]
level = "warn"
"#,
	);
	let path = path.to_string_lossy().into_owned();

	let resolved = load(
		&["chipz", "--no-config", "-c", &path, "--title", "From cli"],
		&[
			("CHIPZ__UI__TITLE", "From env"),
			("CHIPZ__UI__LIST_HEIGHT", "4"),
			("CHIPZ__UI__PRESELECT", "1,4,1"),
		],
	)
	.expect("resolves");

	assert_eq!(resolved.labels.title, "From cli");
	assert_eq!(resolved.list_height, 4);
	assert_eq!(resolved.theme.as_deref(), Some("paper"));
	assert_eq!(resolved.data_path, Some(PathBuf::from("from-file.json")));
	assert_eq!(resolved.preselect, ["1", "4"]);
	assert_eq!(resolved.log.level, "warn");
}

#[test]
fn verbose_overrides_configured_level() {
	let (_dir, path) = config_file("[log]\nlevel = \"error\"\n");
	let path = path.to_string_lossy().into_owned();

	let resolved = load(&["chipz", "--no-config", "-c", &path, "-v"], &[]).expect("resolves");
	assert_eq!(resolved.log.level, "debug");
}

#[test]
fn validation_errors_name_the_cli_flag() {
	let err = load(&["chipz", "--no-config", "--list-height", "0"], &[])
		.expect_err("zero rows is rejected");
	let message = err.to_string();
	assert!(message.contains("ui.list_height"));
	assert!(message.contains("CLI flag `--list-height`"));
}

#[test]
fn validation_errors_name_the_config_key() {
	let (_dir, path) = config_file("[ui]\ntheme = \"neon\"\n");
	let path = path.to_string_lossy().into_owned();

	let err = load(&["chipz", "--no-config", "-c", &path], &[]).expect_err("unknown theme");
	assert!(err.to_string().contains("configuration key `ui.theme`"));
}

#[test]
fn missing_explicit_config_file_is_an_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let missing = dir.path().join("absent.toml");
	let missing = missing.to_string_lossy().into_owned();

	assert!(load(&["chipz", "--no-config", "-c", &missing], &[]).is_err());
}
