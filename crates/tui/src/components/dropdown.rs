use std::ops::Range;

use chipz_core::{Person, PersonId};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::style::Theme;

/// Marker drawn in front of the hovered row.
pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const ROW_INDENT: &str = "  ";
/// Top and bottom border rows.
const BORDER_ROWS: u16 = 2;

/// Argument bundle for rendering the dropdown.
pub struct DropdownContext<'a> {
	pub candidates: &'a [Person],
	pub hovered: Option<&'a PersonId>,
	pub query: &'a str,
	pub theme: &'a Theme,
}

/// Total height of a dropdown showing `count` rows, capped at `max_rows`.
#[must_use]
pub fn dropdown_height(count: usize, max_rows: u16) -> u16 {
	let rows = u16::try_from(count).unwrap_or(u16::MAX).min(max_rows);
	rows.saturating_add(BORDER_ROWS)
}

/// Draw the candidate list into `area` and return the screen row of every
/// visible candidate.
pub fn render_dropdown(
	frame: &mut Frame,
	area: Rect,
	context: DropdownContext<'_>,
) -> Vec<(Rect, PersonId)> {
	let DropdownContext {
		candidates,
		hovered,
		query,
		theme,
	} = context;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if inner.is_empty() {
		return Vec::new();
	}

	let visible = inner.height as usize;
	let hovered_index =
		hovered.and_then(|id| candidates.iter().position(|person| &person.id == id));
	let offset = scroll_offset(hovered_index, visible);
	let needle = query.to_lowercase();

	let buffer = frame.buffer_mut();
	let mut rows = Vec::with_capacity(visible);
	for (slot, (index, person)) in candidates
		.iter()
		.enumerate()
		.skip(offset)
		.take(visible)
		.enumerate()
	{
		let row = Rect::new(inner.x, inner.y + slot as u16, inner.width, 1);
		let is_hovered = hovered_index == Some(index);
		let line = candidate_line(person, &needle, is_hovered, theme);
		buffer.set_line(row.x, row.y, &line, row.width);
		if is_hovered {
			buffer.set_style(row, theme.row_highlight);
		}
		rows.push((row, person.id.clone()));
	}

	rows
}

fn scroll_offset(hovered: Option<usize>, visible: usize) -> usize {
	match hovered {
		Some(index) if visible > 0 && index >= visible => index + 1 - visible,
		_ => 0,
	}
}

fn candidate_line<'a>(person: &'a Person, needle: &str, hovered: bool, theme: &Theme) -> Line<'a> {
	let marker = if hovered { HIGHLIGHT_SYMBOL } else { ROW_INDENT };
	let mut spans = vec![Span::raw(marker)];

	match match_range(&person.name, needle) {
		Some(range) => {
			spans.push(Span::styled(&person.name[..range.start], theme.prompt));
			spans.push(Span::styled(
				&person.name[range.clone()],
				theme.highlight_style(),
			));
			spans.push(Span::styled(&person.name[range.end..], theme.prompt));
		}
		None => spans.push(Span::styled(person.name.as_str(), theme.prompt)),
	}

	if !person.email.is_empty() {
		spans.push(Span::raw("  "));
		spans.push(Span::styled(person.email.as_str(), theme.empty_style()));
	}

	Line::from(spans)
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `name`. `needle` must be lowercase. Names whose lowercase form has a
/// different byte length are not highlighted.
fn match_range(name: &str, needle: &str) -> Option<Range<usize>> {
	if needle.is_empty() {
		return None;
	}
	let lowered = name.to_lowercase();
	if lowered.len() != name.len() {
		return None;
	}
	let start = lowered.find(needle)?;
	let end = start + needle.len();
	(name.is_char_boundary(start) && name.is_char_boundary(end)).then_some(start..end)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn height_is_capped_and_includes_borders() {
		assert_eq!(dropdown_height(2, 6), 4);
		assert_eq!(dropdown_height(40, 6), 8);
		assert_eq!(dropdown_height(0, 6), 2);
	}

	#[test]
	fn scrolling_keeps_hovered_row_visible() {
		assert_eq!(scroll_offset(None, 3), 0);
		assert_eq!(scroll_offset(Some(2), 3), 0);
		assert_eq!(scroll_offset(Some(3), 3), 1);
		assert_eq!(scroll_offset(Some(9), 3), 7);
	}

	#[test]
	fn match_range_finds_first_occurrence_ignoring_case() {
		assert_eq!(match_range("Clementine Bauch", "ba"), Some(11..13));
		assert_eq!(match_range("Ada", ""), None);
		assert_eq!(match_range("Ada", "zz"), None);
	}
}
