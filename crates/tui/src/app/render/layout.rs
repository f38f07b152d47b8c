use chipz_core::Controller;
use ratatui::layout::{Margin, Rect};

use crate::components::{TrayLayout, dropdown_height, layout_tray};

/// Smallest dropdown worth drawing: borders plus one row.
const MIN_DROPDOWN_HEIGHT: u16 = 3;

/// Screen areas of one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PickerLayout {
	/// Bordered box holding chips and input.
	pub(crate) root: Rect,
	/// Inside of `root`.
	pub(crate) tray_area: Rect,
	pub(crate) tray: TrayLayout,
	pub(crate) dropdown: Option<Rect>,
}

impl PickerLayout {
	pub(crate) fn compute(body: Rect, controller: &Controller, list_height: u16) -> Self {
		if body.width < 3 || body.height < 3 {
			return Self::default();
		}

		let inner_width = body.width - 2;
		let tray = layout_tray(
			controller.selected(),
			Rect::new(body.x + 1, body.y + 1, inner_width, 1),
		);
		let root_height = tray.height.saturating_add(2).min(body.height);
		let root = Rect::new(body.x, body.y, body.width, root_height);
		let tray_area = root.inner(Margin {
			vertical: 1,
			horizontal: 1,
		});

		let dropdown = if controller.is_list_visible() && !controller.candidates().is_empty() {
			let available = body.bottom().saturating_sub(root.bottom());
			let height = dropdown_height(controller.candidates().len(), list_height).min(available);
			(height >= MIN_DROPDOWN_HEIGHT)
				.then(|| Rect::new(body.x, root.bottom(), body.width, height))
		} else {
			None
		};

		Self {
			root,
			tray_area,
			tray,
			dropdown,
		}
	}

	/// Everything that belongs to the widget for outside-click detection.
	pub(crate) fn widget_area(&self) -> Rect {
		match self.dropdown {
			Some(dropdown) => self.root.union(dropdown),
			None => self.root,
		}
	}
}
