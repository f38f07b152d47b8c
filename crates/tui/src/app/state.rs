//! Core state container for the terminal picker.

use chipz_core::{Controller, Dataset, DocumentListeners, Mount};

use super::HitMap;
use crate::config::{DEFAULT_LIST_HEIGHT, UiLabels};
use crate::input::QueryInput;
use crate::outcome::PickOutcome;
use crate::style::{StyleConfig, Theme};

/// How the user left the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
	Accept,
	Cancel,
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the document listener registry and the controller mounted
/// on it, the query input, and the areas recorded by the last draw so mouse
/// events can be mapped back to chips and candidates.
pub struct App<'a> {
	pub(crate) listeners: DocumentListeners,
	pub(crate) mount: Mount,
	pub(crate) query_input: QueryInput<'a>,
	pub(crate) labels: UiLabels,
	pub(crate) style: StyleConfig,
	pub(crate) list_height: u16,
	pub(crate) hits: HitMap,
}

impl<'a> App<'a> {
	/// Mount a controller for `dataset` with default labels and theme.
	pub fn new(dataset: &Dataset) -> Self {
		let mut listeners = DocumentListeners::new();
		let mount = Controller::mount(dataset, &mut listeners);
		let style = StyleConfig::default();
		let mut query_input = QueryInput::default();
		query_input.set_style(style.theme.prompt);

		Self {
			listeners,
			mount,
			query_input,
			labels: UiLabels::default(),
			style,
			list_height: DEFAULT_LIST_HEIGHT,
			hits: HitMap::default(),
		}
	}

	#[must_use]
	pub fn controller(&self) -> &Controller {
		self.mount.controller()
	}

	pub(crate) fn controller_mut(&mut self) -> &mut Controller {
		self.mount.controller_mut()
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style = StyleConfig::with_theme(theme);
		self.query_input.set_style(theme.prompt);
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
	}

	/// Cap the number of dropdown rows. Zero is treated as one.
	pub fn set_list_height(&mut self, rows: u16) {
		self.list_height = rows.max(1);
	}

	/// Fill the query input and filter the candidates with `query`.
	pub fn set_initial_query(&mut self, query: &str) {
		if query.is_empty() {
			return;
		}
		self.query_input = QueryInput::new(query);
		self.query_input.set_style(self.style.theme.prompt);
		self.controller_mut().on_query_change(query);
	}

	/// Select people by id before the picker starts. Unknown ids are logged
	/// and skipped.
	pub fn preselect<I, S>(&mut self, ids: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for id in ids {
			let id = id.as_ref();
			let before = self.controller().selected().len();
			self.controller_mut().select_candidate(id);
			if self.controller().selected().len() == before {
				tracing::warn!(id, "preselected id is not an available candidate");
			}
		}
		self.controller_mut().take_focus_request();
	}

	/// Give the query input focus and show the dropdown.
	pub(crate) fn focus_input(&mut self) {
		self.query_input.set_focused(true);
		self.controller_mut().on_focus();
	}

	pub(crate) fn blur_input(&mut self) {
		self.query_input.set_focused(false);
	}

	/// Release the document listeners and report the result.
	pub fn finish(self, exit: Exit) -> PickOutcome {
		let App {
			mut listeners,
			mount,
			query_input,
			..
		} = self;
		let query = query_input.text().to_string();
		let selected = mount.unmount(&mut listeners);
		tracing::info!(?exit, selected = selected.len(), "picker closed");

		PickOutcome {
			accepted: exit == Exit::Accept,
			query,
			selected,
		}
	}
}
