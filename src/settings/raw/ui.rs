use chipz::UiLabels;
use chipz::tui::DEFAULT_LIST_HEIGHT;
use serde::Deserialize;

use super::super::util::{non_blank, sanitize_ids};
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) hint: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) list_height: Option<u16>,
	pub(super) preselect: Option<Vec<String>>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
	pub(super) list_height: u16,
	pub(super) preselect: Vec<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(rows) = cli.list_height {
			self.list_height = Some(rows);
		}
		if !cli.select.is_empty() {
			self.preselect = Some(cli.select.clone());
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(title) = self.title {
			labels.title = title;
		}
		if let Some(placeholder) = self.placeholder {
			labels.placeholder = placeholder;
		}
		if let Some(hint) = self.hint {
			labels.hint = hint;
		}

		UiResolution {
			theme: non_blank(self.theme),
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			list_height: self.list_height.unwrap_or(DEFAULT_LIST_HEIGHT),
			preselect: self.preselect.map(sanitize_ids).unwrap_or_default(),
		}
	}
}
