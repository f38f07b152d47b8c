/// Rows shown in the dropdown before it starts scrolling.
pub const DEFAULT_LIST_HEIGHT: u16 = 6;

/// Human-readable text rendered around the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title drawn on the border of the chip tray.
	pub title: String,
	/// Dimmed text shown in the empty query input.
	pub placeholder: String,
	/// Key help rendered on the last row of the screen.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "People".to_string(),
			placeholder: "Add new user ...".to_string(),
			hint: "enter: add  backspace x2: remove last  ctrl-s: done  esc: cancel".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}
}
