//! UI building blocks shared across rendering and state modules.

/// Chip tray layout and rendering.
pub mod chips;
/// Candidate dropdown rendering.
pub mod dropdown;
/// Query input rendering with placeholder.
pub mod prompt;

pub use chips::{ChipSlot, TrayLayout, layout_tray, render_chips};
pub use dropdown::{DropdownContext, dropdown_height, render_dropdown};
pub use prompt::{InputContext, render_input};
