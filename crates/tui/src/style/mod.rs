//! Visual styling utilities.
//!
//! Themes are colour schemes loaded from the TOML definitions bundled with
//! the crate and looked up by name or alias.

/// Theme definitions and lookup.
pub mod theme;

pub use theme::{Theme, ThemeDescriptor, by_name, default_theme, descriptors, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
