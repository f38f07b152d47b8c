use chipz_core::Person;
use serde::Serialize;

/// Captures the outcome of a picker session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickOutcome {
	pub accepted: bool,
	pub query: String,
	/// Chips in selection order.
	pub selected: Vec<Person>,
}

impl PickOutcome {
	/// The selection, if the user confirmed it.
	#[must_use]
	pub fn accepted_selection(&self) -> Option<&[Person]> {
		self.accepted.then_some(self.selected.as_slice())
	}
}
