use anyhow::{Result, bail};
use chipz_core::Dataset;

use crate::App;
use crate::config::UiLabels;
use crate::outcome::PickOutcome;
use crate::style::Theme;

/// A small builder for configuring the interactive picker.
///
/// Labels, theme, list height, the initial query, and preselected chips are
/// applied to a fresh [`App`] before the event loop starts.
pub struct Picker {
	dataset: Dataset,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
	list_height: Option<u16>,
	initial_query: String,
	preselect: Vec<String>,
}

impl Picker {
	/// Create a picker over `dataset`.
	pub fn new(dataset: Dataset) -> Self {
		Self {
			dataset,
			labels: None,
			theme: None,
			list_height: None,
			initial_query: String::new(),
			preselect: Vec::new(),
		}
	}

	/// Create a picker over the people bundled with the crate.
	pub fn bundled() -> Result<Self> {
		Ok(Self::new(Dataset::bundled()?))
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		let labels = self.labels.take().unwrap_or_default();
		self.labels = Some(labels.with_title(title));
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		let labels = self.labels.take().unwrap_or_default();
		self.labels = Some(labels.with_placeholder(placeholder));
		self
	}

	/// Use the registered theme called `name`.
	pub fn with_theme_name(mut self, name: &str) -> Result<Self> {
		let Some(theme) = crate::style::by_name(name) else {
			bail!("unknown theme '{name}'");
		};
		self.theme = Some(theme);
		Ok(self)
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_list_height(mut self, rows: u16) -> Self {
		self.list_height = Some(rows);
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Start with the people whose ids are listed already selected.
	pub fn with_preselected<I, S>(mut self, ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.preselect.extend(ids.into_iter().map(Into::into));
		self
	}

	/// Apply the configured options to a new [`App`] without running it.
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(&self.dataset);
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(rows) = self.list_height {
			app.set_list_height(rows);
		}
		app.preselect(&self.preselect);
		app.set_initial_query(&self.initial_query);
		app
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<PickOutcome> {
		self.into_app().run()
	}
}
