use chipz_core::{Person, PersonId};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Glyph drawn at the end of every chip; clicking it removes the chip.
pub const CHIP_CLOSE: &str = "×";
/// Columns between two chips.
pub(crate) const CHIP_GAP: u16 = 1;
/// Narrowest input that still shares a row with chips.
pub(crate) const MIN_INPUT_WIDTH: u16 = 12;
/// Padding and close glyph around the name: " name × ".
const CHIP_DECORATION: u16 = 4;

/// Where one chip lands on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSlot {
	pub id: PersonId,
	pub label: String,
	pub area: Rect,
	pub close: Rect,
}

/// Chips flowed left to right, wrapping as needed, followed by the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrayLayout {
	pub chips: Vec<ChipSlot>,
	pub input: Rect,
	/// Rows used by chips and input together.
	pub height: u16,
}

/// Flow `selected` into rows of width `area.width` starting at the top-left
/// of `area`. The height of `area` is ignored; callers clip afterwards.
#[must_use]
pub fn layout_tray(selected: &[Person], area: Rect) -> TrayLayout {
	if area.width == 0 {
		return TrayLayout::default();
	}

	let left = area.x;
	let right = area.x.saturating_add(area.width);
	let mut cursor = left;
	let mut row: u16 = 0;
	let mut chips = Vec::with_capacity(selected.len());

	for person in selected {
		let label = chip_label(&person.name, area.width);
		let width = (label.width() as u16).min(area.width);

		if cursor != left && cursor.saturating_add(width) > right {
			row += 1;
			cursor = left;
		}

		let y = area.y.saturating_add(row);
		let chip_area = Rect::new(cursor, y, width, 1);
		let close = Rect::new(cursor.saturating_add(width.saturating_sub(2)), y, 1, 1);
		chips.push(ChipSlot {
			id: person.id.clone(),
			label,
			area: chip_area,
			close,
		});
		cursor = cursor.saturating_add(width).saturating_add(CHIP_GAP);
	}

	let remaining = right.saturating_sub(cursor);
	let input = if remaining >= MIN_INPUT_WIDTH.min(area.width) && remaining > 0 {
		Rect::new(cursor, area.y.saturating_add(row), remaining, 1)
	} else {
		row += 1;
		Rect::new(left, area.y.saturating_add(row), area.width, 1)
	};

	TrayLayout {
		chips,
		input,
		height: row + 1,
	}
}

fn chip_label(name: &str, max_width: u16) -> String {
	let budget = max_width.saturating_sub(CHIP_DECORATION) as usize;
	let (name, _) = name.unicode_truncate(budget);
	format!(" {name} {CHIP_CLOSE} ")
}

/// Draw every chip that fits inside `clip`. The chip whose id equals `armed`
/// uses the theme's armed style.
pub fn render_chips(
	frame: &mut Frame,
	tray: &TrayLayout,
	clip: Rect,
	armed: Option<&PersonId>,
	theme: &Theme,
) {
	let buffer = frame.buffer_mut();
	for chip in &tray.chips {
		let visible = chip.area.intersection(clip);
		if visible.is_empty() {
			continue;
		}
		let style = if armed == Some(&chip.id) {
			theme.armed
		} else {
			theme.chip
		};
		let line = Line::from(Span::styled(chip.label.as_str(), style));
		buffer.set_line(visible.x, visible.y, &line, visible.width);
	}
}
