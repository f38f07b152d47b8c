use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the query input.
pub struct InputContext<'a> {
	/// The query input widget.
	pub query_input: &'a QueryInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the query input with an optional placeholder.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>) {
	let InputContext {
		query_input,
		placeholder,
		area,
		theme,
	} = input;

	query_input.render(frame, area);

	if query_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, area, placeholder_text, theme);
	}
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let display_text: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width,
	);
}
