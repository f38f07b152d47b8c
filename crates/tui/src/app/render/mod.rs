mod layout;

use chipz_core::{PersonId, Point, Region};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

pub(crate) use layout::PickerLayout;

use super::App;
use crate::components::{
	DropdownContext, InputContext, render_chips, render_dropdown, render_input,
};

/// Clickable areas recorded during the last draw.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitMap {
	pub(crate) root: Rect,
	pub(crate) chip_closes: Vec<(Rect, PersonId)>,
	pub(crate) rows: Vec<(Rect, PersonId)>,
}

impl HitMap {
	pub(crate) fn chip_close_at(&self, point: Point) -> Option<&PersonId> {
		hit(&self.chip_closes, point)
	}

	pub(crate) fn row_at(&self, point: Point) -> Option<&PersonId> {
		hit(&self.rows, point)
	}

	pub(crate) fn in_root(&self, point: Point) -> bool {
		to_region(self.root).contains(point)
	}
}

fn hit(areas: &[(Rect, PersonId)], point: Point) -> Option<&PersonId> {
	areas
		.iter()
		.find(|(area, _)| to_region(*area).contains(point))
		.map(|(_, id)| id)
}

pub(crate) fn to_region(rect: Rect) -> Region {
	Region::new(rect.x, rect.y, rect.width, rect.height)
}

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let [body, hint] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
		let body = body.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = PickerLayout::compute(body, self.controller(), self.list_height);
		self.controller_mut()
			.set_root_region(to_region(layout.widget_area()));

		self.render_root(frame, &layout);
		let rows = self.render_candidates(frame, &layout);
		self.render_hint(frame, hint);

		self.hits = HitMap {
			root: layout.root,
			chip_closes: layout
				.tray
				.chips
				.iter()
				.filter(|chip| chip.close.intersects(layout.tray_area))
				.map(|chip| (chip.close, chip.id.clone()))
				.collect(),
			rows,
		};
	}

	fn render_root(&self, frame: &mut Frame, layout: &PickerLayout) {
		if layout.root.is_empty() {
			return;
		}

		let theme = &self.style.theme;
		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style());
		if !self.labels.title.is_empty() {
			block = block.title(Span::styled(format!(" {} ", self.labels.title), theme.header));
		}
		frame.render_widget(block, layout.root);

		let controller = self.controller();
		render_chips(
			frame,
			&layout.tray,
			layout.tray_area,
			controller.pending_removal().map(|person| &person.id),
			theme,
		);

		let input_area = layout.tray.input.intersection(layout.tray_area);
		let input_ctx = InputContext {
			query_input: &self.query_input,
			placeholder: Some(self.labels.placeholder.as_str()),
			area: input_area,
			theme,
		};
		render_input(frame, input_ctx);
	}

	fn render_candidates(&self, frame: &mut Frame, layout: &PickerLayout) -> Vec<(Rect, PersonId)> {
		let Some(area) = layout.dropdown else {
			return Vec::new();
		};
		let controller = self.controller();
		let context = DropdownContext {
			candidates: controller.candidates(),
			hovered: controller.hovered(),
			query: controller.query(),
			theme: &self.style.theme,
		};
		render_dropdown(frame, area, context)
	}

	fn render_hint(&self, frame: &mut Frame, area: Rect) {
		if area.is_empty() || self.labels.hint.is_empty() {
			return;
		}
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let line = Line::from(Span::styled(
			self.labels.hint.as_str(),
			self.style.theme.empty_style(),
		));
		frame.render_widget(line, area);
	}
}
