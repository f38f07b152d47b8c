//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Text field that holds the current query.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial` and the cursor at its end.
	pub fn new(initial: impl Into<String>) -> Self {
		let initial = initial.into();
		let mut textarea = TextArea::new(vec![initial]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		let mut input = Self {
			textarea,
			focused: true,
		};
		input.apply_cursor_style();
		input
	}

	/// The current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the text field. Returns `true` when the text changed.
	///
	/// Keys that would add a line or a tab are ignored so the query stays a
	/// single row of plain text.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let rejected = matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL));
		if rejected {
			return false;
		}

		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub fn set_focused(&mut self, focused: bool) {
		if self.focused != focused {
			self.focused = focused;
			self.apply_cursor_style();
		}
	}

	/// Apply the query text style.
	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		frame.render_widget(&self.textarea, area);
	}

	fn apply_cursor_style(&mut self) {
		let style = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}
}
