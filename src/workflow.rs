use std::path::Path;

use anyhow::{Context, Result};
use chipz::{Dataset, PickOutcome, Picker};

use crate::settings::ResolvedConfig;

/// Coordinates loading the dataset and running the interactive picker.
pub(crate) struct PickWorkflow {
	picker: Picker,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			data_path,
			theme,
			labels,
			initial_query,
			list_height,
			preselect,
			log: _,
		} = config;

		let dataset = load_dataset(data_path.as_deref())?;
		tracing::debug!(people = dataset.len(), "dataset loaded");

		let mut picker = Picker::new(dataset)
			.with_labels(labels)
			.with_list_height(list_height)
			.with_initial_query(initial_query)
			.with_preselected(preselect);
		if let Some(name) = theme {
			picker = picker.with_theme_name(&name)?;
		}

		Ok(Self { picker })
	}

	pub(crate) fn run(self) -> Result<PickOutcome> {
		self.picker.run()
	}
}

fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
	match path {
		Some(path) => Dataset::from_path(path)
			.with_context(|| format!("failed to load people from {}", path.display())),
		None => Dataset::bundled().context("bundled dataset is invalid"),
	}
}
