//! Interaction state of the chip picker.
//!
//! The [`Controller`] owns the query, the two ordered sequences (`selected`
//! chips and dropdown `candidates`), the hovered candidate, dropdown
//! visibility, and the Backspace removal state. Every operation is a plain
//! state transition; ids that are not where an operation expects them are
//! ignored without error.
//!
//! Every person of the dataset is either a candidate or selected, never both.
//! Filtering narrows the candidates to people whose name contains the query,
//! ignoring case.

mod removal;

use std::sync::Arc;

pub use removal::RemovalState;
use removal::BackspaceAction;

use crate::dataset::Dataset;
use crate::geometry::{Point, Region};
use crate::person::{Person, PersonId};

#[derive(Debug, Clone)]
pub struct Controller {
	dataset: Arc<[Person]>,
	query: String,
	removal: RemovalState,
	list_visible: bool,
	hovered: Option<PersonId>,
	selected: Vec<Person>,
	candidates: Vec<Person>,
	root: Option<Region>,
	focus_requested: bool,
}

impl Controller {
	/// Start with an empty query, no chips, and every person as a candidate.
	pub fn new(dataset: &Dataset) -> Self {
		let dataset = dataset.shared();
		let candidates = dataset.to_vec();
		Self {
			dataset,
			query: String::new(),
			removal: RemovalState::Idle,
			list_visible: false,
			hovered: None,
			selected: Vec::new(),
			candidates,
			root: None,
			focus_requested: false,
		}
	}

	/// Store the new query, show the dropdown, and recompute the candidates.
	pub fn on_query_change(&mut self, text: &str) {
		self.query.clear();
		self.query.push_str(text);
		self.list_visible = true;
		self.candidates = filter_candidates(&self.dataset, text, &self.selected);

		tracing::trace!(
			query = %self.query,
			candidates = self.candidates.len(),
			"query changed"
		);
	}

	/// Move the candidate `id` to the end of the selection.
	///
	/// The removal state is reset on every call, found or not.
	pub fn select_candidate(&mut self, id: &str) {
		self.removal = RemovalState::Idle;

		let Some(position) = self.candidate_position(id) else {
			return;
		};

		let person = self.candidates.remove(position);
		tracing::debug!(id = %person.id, name = %person.name, "selected");
		self.selected.push(person);
		self.focus_requested = true;
	}

	/// Move the chip `id` back to the front of the candidates.
	pub fn deselect(&mut self, id: &str) {
		let Some(position) = self
			.selected
			.iter()
			.position(|person| person.id.as_str() == id)
		else {
			return;
		};

		let person = self.selected.remove(position);
		tracing::debug!(id = %person.id, name = %person.name, "deselected");
		self.candidates.insert(0, person);
	}

	/// Handle one Backspace press: arm the last chip, or remove it when
	/// already armed.
	///
	/// The toggle only counts key presses; the caret position and the query
	/// contents are not consulted.
	pub fn on_backspace(&mut self) {
		let (next, action) = self.removal.on_backspace();
		self.removal = next;

		if action == BackspaceAction::RemoveLast
			&& let Some(last) = self.selected.last()
		{
			let id = last.id.clone();
			self.deselect(id.as_str());
		}
	}

	/// Hide the dropdown when `target` falls outside the widget.
	///
	/// Before the first [`Controller::set_root_region`] call there is no
	/// widget on screen and the click is ignored.
	pub fn on_outside_click(&mut self, target: Point) {
		if let Some(root) = self.root
			&& !root.contains(target)
		{
			self.list_visible = false;
		}
	}

	/// Select the hovered person, if any.
	///
	/// The hover survives filtering and selection, so Enter on a hovered
	/// person that is no longer a candidate still resets the removal state.
	pub fn on_enter_key(&mut self) {
		if let Some(hovered) = self.hovered.clone() {
			self.select_candidate(hovered.as_str());
		}
	}

	pub fn on_hover(&mut self, id: impl Into<PersonId>) {
		self.hovered = Some(id.into());
	}

	/// The query input gained focus.
	pub fn on_focus(&mut self) {
		self.list_visible = true;
	}

	/// Hover the candidate after the current one, or the first one.
	pub fn hover_next(&mut self) {
		let next = match self.hovered_position() {
			Some(position) => (position + 1).min(self.candidates.len().saturating_sub(1)),
			None => 0,
		};
		self.hover_index(next);
	}

	/// Hover the candidate before the current one, or the last one.
	pub fn hover_previous(&mut self) {
		let previous = match self.hovered_position() {
			Some(position) => position.saturating_sub(1),
			None => self.candidates.len().saturating_sub(1),
		};
		self.hover_index(previous);
	}

	/// Record the screen area occupied by the widget.
	pub fn set_root_region(&mut self, region: Region) {
		self.root = Some(region);
	}

	/// Return and clear the pending request to focus the query input.
	pub fn take_focus_request(&mut self) -> bool {
		std::mem::take(&mut self.focus_requested)
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn selected(&self) -> &[Person] {
		&self.selected
	}

	#[must_use]
	pub fn candidates(&self) -> &[Person] {
		&self.candidates
	}

	#[must_use]
	pub fn dataset(&self) -> &[Person] {
		&self.dataset
	}

	#[must_use]
	pub fn removal_state(&self) -> RemovalState {
		self.removal
	}

	#[must_use]
	pub fn is_list_visible(&self) -> bool {
		self.list_visible
	}

	#[must_use]
	pub fn hovered(&self) -> Option<&PersonId> {
		self.hovered.as_ref()
	}

	#[must_use]
	pub fn root_region(&self) -> Option<Region> {
		self.root
	}

	/// The chip the next Backspace would remove.
	#[must_use]
	pub fn pending_removal(&self) -> Option<&Person> {
		if self.removal.is_armed() {
			self.selected.last()
		} else {
			None
		}
	}

	pub(crate) fn take_selection(&mut self) -> Vec<Person> {
		std::mem::take(&mut self.selected)
	}

	fn candidate_position(&self, id: &str) -> Option<usize> {
		self.candidates
			.iter()
			.position(|person| person.id.as_str() == id)
	}

	fn hovered_position(&self) -> Option<usize> {
		self.hovered
			.as_ref()
			.and_then(|hovered| self.candidate_position(hovered.as_str()))
	}

	fn hover_index(&mut self, index: usize) {
		self.list_visible = true;
		self.hovered = self.candidates.get(index).map(|person| person.id.clone());
	}
}

/// People of `dataset`, in dataset order, whose name contains `query`
/// (ignoring case) and who are not already selected.
#[must_use]
pub fn filter_candidates(dataset: &[Person], query: &str, selected: &[Person]) -> Vec<Person> {
	let needle = query.to_lowercase();
	dataset
		.iter()
		.filter(|person| person.name_contains_lowercase(&needle))
		.filter(|person| !selected.iter().any(|chosen| chosen.id == person.id))
		.cloned()
		.collect()
}
