//! File-based tracing setup.
//!
//! The picker owns the terminal, so log lines never go to stdout or stderr.
//! Output is written to an explicit log file or, when `CHIPZ_LOG_DIR` is set,
//! to one file per process inside that directory. Without either no
//! subscriber is installed and the `tracing` macros are no-ops.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::app_dirs::dir_from_env;

pub const LOG_DIR_ENV: &str = "CHIPZ_LOG_DIR";
pub const DEFAULT_LEVEL: &str = "info";
pub const VERBOSE_LEVEL: &str = "debug";

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	pub file: Option<PathBuf>,
	/// Directive used when `RUST_LOG` is unset.
	pub level: String,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			file: None,
			level: DEFAULT_LEVEL.to_string(),
		}
	}
}

impl LogConfig {
	/// The file logs should be appended to, if any.
	#[must_use]
	pub fn destination(&self) -> Option<PathBuf> {
		if let Some(file) = &self.file {
			return Some(file.clone());
		}
		dir_from_env(LOG_DIR_ENV).map(|dir| per_process_file(&dir))
	}
}

fn per_process_file(dir: &Path) -> PathBuf {
	dir.join(format!("chipz.{}.log", std::process::id()))
}

/// Install the global subscriber. Returns the log file in use, or `None`
/// when logging is disabled.
pub fn initialize(config: &LogConfig) -> Result<Option<PathBuf>> {
	let Some(path) = config.destination() else {
		return Ok(None);
	};

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&config.level))
		.with_context(|| format!("invalid log level '{}'", config.level))?;

	let file_layer = tracing_subscriber::fmt::layer()
		.with_writer(file)
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry()
		.with(filter)
		.with(file_layer)
		.try_init()
		.context("failed to install tracing subscriber")?;

	tracing::info!(path = ?path, "tracing initialized");
	Ok(Some(path))
}
