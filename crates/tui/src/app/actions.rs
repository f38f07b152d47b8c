use chipz_core::{DocumentEvent, DocumentKey, Point};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, Exit};

impl App<'_> {
	/// Process a keyboard event and return an exit if the user is done.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<Exit> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(Exit::Cancel),
			KeyCode::Char('c') if ctrl => return Some(Exit::Cancel),
			KeyCode::Char('s') if ctrl => return Some(Exit::Accept),
			KeyCode::Up => self.controller_mut().hover_previous(),
			KeyCode::Down => self.controller_mut().hover_next(),
			KeyCode::Enter => {}
			KeyCode::Backspace => {
				self.controller_mut().on_backspace();
				self.edit_query(key);
			}
			_ => self.edit_query(key),
		}

		let document_key = if key.code == KeyCode::Enter {
			DocumentKey::Enter
		} else {
			DocumentKey::Other
		};
		self.dispatch(DocumentEvent::KeyDown(document_key));
		self.apply_focus_request();
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let point = Point::new(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Moved => {
				if let Some(id) = self.hits.row_at(point).cloned() {
					self.controller_mut().on_hover(id);
				}
			}
			MouseEventKind::Down(MouseButton::Left) => self.click(point),
			MouseEventKind::ScrollUp if self.hits.row_at(point).is_some() => {
				self.controller_mut().hover_previous();
			}
			MouseEventKind::ScrollDown if self.hits.row_at(point).is_some() => {
				self.controller_mut().hover_next();
			}
			_ => {}
		}
	}

	fn click(&mut self, point: Point) {
		if let Some(id) = self.hits.chip_close_at(point).cloned() {
			self.controller_mut().deselect(id.as_str());
		} else if let Some(id) = self.hits.row_at(point).cloned() {
			self.controller_mut().select_candidate(id.as_str());
		} else if self.hits.in_root(point) {
			self.focus_input();
		}

		self.dispatch(DocumentEvent::Click(point));
		if !self.controller().is_list_visible() {
			self.blur_input();
		}
		self.apply_focus_request();
	}

	fn edit_query(&mut self, key: KeyEvent) {
		if self.query_input.input(key) {
			let text = self.query_input.text().to_string();
			self.query_input.set_focused(true);
			self.controller_mut().on_query_change(&text);
		}
	}

	fn dispatch(&mut self, event: DocumentEvent) {
		self.listeners.dispatch(event, &mut self.mount);
	}

	fn apply_focus_request(&mut self) {
		if self.controller_mut().take_focus_request() {
			self.focus_input();
		}
	}
}

#[cfg(test)]
mod tests {
	use chipz_core::{Dataset, Person, RemovalState};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn app() -> App<'static> {
		let dataset = Dataset::new(vec![
			Person::new("1", "Ada Lovelace", "ada@example.com", ""),
			Person::new("2", "Barbara Liskov", "barbara@example.com", ""),
			Person::new("3", "Grace Hopper", "grace@example.com", ""),
		])
		.expect("dataset");
		let mut app = App::new(&dataset);
		app.focus_input();
		app
	}

	fn press(app: &mut App<'_>, code: KeyCode) -> Option<Exit> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn draw(app: &mut App<'_>) {
		let mut terminal = Terminal::new(TestBackend::new(48, 12)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
	}

	fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
		MouseEvent {
			kind,
			column,
			row,
			modifiers: KeyModifiers::NONE,
		}
	}

	fn selected_ids(app: &App<'_>) -> Vec<String> {
		app.controller()
			.selected()
			.iter()
			.map(|person| person.id.to_string())
			.collect()
	}

	#[test]
	fn typing_filters_candidates() {
		let mut app = app();
		press(&mut app, KeyCode::Char('g'));
		press(&mut app, KeyCode::Char('R'));

		assert_eq!(app.controller().query(), "gR");
		let names: Vec<_> = app
			.controller()
			.candidates()
			.iter()
			.map(|person| person.name.as_str())
			.collect();
		assert_eq!(names, ["Grace Hopper"]);
	}

	#[test]
	fn arrow_and_enter_select_the_hovered_candidate() {
		let mut app = app();
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Enter);

		assert_eq!(selected_ids(&app), ["2"]);
		assert_eq!(app.query_input.text(), "");
	}

	#[test]
	fn double_backspace_removes_last_chip() {
		let mut app = app();
		app.preselect(["1", "3"]);

		press(&mut app, KeyCode::Backspace);
		assert_eq!(app.controller().removal_state(), RemovalState::Armed);
		assert_eq!(selected_ids(&app), ["1", "3"]);

		press(&mut app, KeyCode::Backspace);
		assert_eq!(selected_ids(&app), ["1"]);
		assert_eq!(app.controller().candidates()[0].id.as_str(), "3");
	}

	#[test]
	fn enter_between_backspaces_keeps_the_chip() {
		let mut app = app();
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Enter);
		press(&mut app, KeyCode::Backspace);
		press(&mut app, KeyCode::Enter);
		press(&mut app, KeyCode::Backspace);

		assert_eq!(selected_ids(&app), ["1"]);
		assert_eq!(app.controller().removal_state(), RemovalState::Armed);
	}

	#[test]
	fn escape_and_ctrl_s_exit() {
		let mut app = app();
		assert_eq!(press(&mut app, KeyCode::Esc), Some(Exit::Cancel));
		assert_eq!(
			app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
			Some(Exit::Accept)
		);
		assert_eq!(app.controller().query(), "");
	}

	#[test]
	fn hovering_and_clicking_rows_selects() {
		let mut app = app();
		draw(&mut app);

		let (row, id) = app.hits.rows[2].clone();
		assert_eq!(id.as_str(), "3");
		app.handle_mouse(mouse(MouseEventKind::Moved, row.x + 3, row.y));
		assert_eq!(app.controller().hovered().map(|id| id.as_str()), Some("3"));

		app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), row.x + 3, row.y));
		assert_eq!(selected_ids(&app), ["3"]);
		assert!(app.controller().is_list_visible());
	}

	#[test]
	fn clicking_a_chip_close_glyph_deselects() {
		let mut app = app();
		app.preselect(["2"]);
		draw(&mut app);

		let (close, id) = app.hits.chip_closes[0].clone();
		assert_eq!(id.as_str(), "2");
		app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), close.x, close.y));

		assert!(app.controller().selected().is_empty());
		assert_eq!(app.controller().candidates()[0].id.as_str(), "2");
	}

	#[test]
	fn clicking_outside_hides_the_list_and_inside_shows_it() {
		let mut app = app();
		draw(&mut app);

		app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));
		assert!(!app.controller().is_list_visible());
		assert!(!app.query_input.is_focused());

		draw(&mut app);
		app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
		assert!(app.controller().is_list_visible());
		assert!(app.query_input.is_focused());
	}

	#[test]
	fn finish_reports_selection_and_releases_listeners() {
		let mut app = app();
		app.preselect(["3", "missing", "1"]);
		press(&mut app, KeyCode::Char('x'));

		let outcome = app.finish(Exit::Accept);
		assert!(outcome.accepted);
		assert_eq!(outcome.query, "x");
		let ids: Vec<_> = outcome
			.selected
			.iter()
			.map(|person| person.id.as_str())
			.collect();
		assert_eq!(ids, ["3", "1"]);
	}
}
