use ratatui::style::{Color, Style};

/// A theme containing styles for the picker's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for borders and titles.
	pub header: Style,
	/// Style for the hovered dropdown row.
	pub row_highlight: Style,
	/// Style for the query text.
	pub prompt: Style,
	/// Style for placeholders, hints, and secondary text.
	pub empty: Style,
	/// Style for the part of a name that matches the query.
	pub highlight: Style,
	/// Style for chips in the tray.
	pub chip: Style,
	/// Style for the chip the next Backspace removes.
	pub armed: Style,
}

impl Theme {
	/// Returns the style for dimmed text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Returns the style for query matches.
	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	/// Returns the style for borders, keeping only the foreground colour.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

/// A bundled theme with the names it can be selected by.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	/// The name of the theme.
	pub name: String,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
	/// The theme configuration.
	pub theme: Theme,
}
