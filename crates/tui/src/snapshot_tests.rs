use chipz_core::{Dataset, Person};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::App;
use crate::app::Exit;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 10;

fn dataset() -> Dataset {
	Dataset::new(vec![
		Person::new("1", "Ada Lovelace", "ada@x.io", ""),
		Person::new("2", "Alan Turing", "alan@x.io", ""),
		Person::new("3", "Grace Hopper", "grace@x.io", ""),
	])
	.expect("dataset")
}

/// One chip selected, the list open, and the first candidate hovered.
fn picker() -> App<'static> {
	let mut app = App::new(&dataset());
	app.preselect(["3"]);
	app.focus_input();
	app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
	app
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App<'_>) {
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw snapshot frame");
}

fn terminal() -> Terminal<TestBackend> {
	Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal")
}

#[test]
fn picker_with_chip_and_open_list_snapshot() {
	let mut app = picker();
	let mut terminal = terminal();
	draw(&mut terminal, &mut app);

	let view = buffer_to_string(terminal.backend().buffer());
	insta::assert_snapshot!("picker_with_chip_and_open_list", view);
	app.finish(Exit::Cancel);
}

#[test]
fn outside_click_hides_the_list_snapshot() {
	let mut app = picker();
	let mut terminal = terminal();
	draw(&mut terminal, &mut app);

	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: WIDTH - 1,
		row: HEIGHT - 2,
		modifiers: KeyModifiers::NONE,
	});
	assert!(!app.controller().is_list_visible());
	draw(&mut terminal, &mut app);

	let view = buffer_to_string(terminal.backend().buffer());
	insta::assert_snapshot!("outside_click_hides_the_list", view);
	app.finish(Exit::Cancel);
}

#[test]
fn hovered_row_uses_row_highlight() {
	let mut app = picker();
	let mut terminal = terminal();
	draw(&mut terminal, &mut app);

	let theme = app.style.theme;
	let buffer = terminal.backend().buffer();
	let (hovered, id) = app.hits.rows[0].clone();
	assert_eq!(id.as_str(), "1");
	let (plain, _) = app.hits.rows[1].clone();

	let hovered_cell = &buffer[(hovered.x + 4, hovered.y)];
	assert_eq!(hovered_cell.bg, theme.row_highlight.bg.expect("highlight bg"));
	let plain_cell = &buffer[(plain.x + 4, plain.y)];
	assert_ne!(plain_cell.bg, hovered_cell.bg);
	app.finish(Exit::Cancel);
}

#[test]
fn armed_chip_uses_armed_style() {
	let mut app = picker();
	let mut terminal = terminal();
	draw(&mut terminal, &mut app);

	let theme = app.style.theme;
	let chip = app.hits.chip_closes[0].0;
	let label_cell = (chip.x - 2, chip.y);
	assert_eq!(
		terminal.backend().buffer()[label_cell].bg,
		theme.chip.bg.expect("chip bg")
	);

	app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
	draw(&mut terminal, &mut app);
	assert_eq!(
		terminal.backend().buffer()[label_cell].bg,
		theme.armed.bg.expect("armed bg")
	);
	app.finish(Exit::Cancel);
}

#[test]
fn enter_moves_hovered_candidate_into_the_tray() {
	let mut app = picker();
	let mut terminal = terminal();
	app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
	draw(&mut terminal, &mut app);

	let view = buffer_to_string(terminal.backend().buffer());
	let tray_row = view.lines().nth(1).expect("tray row");
	assert!(tray_row.contains(" Grace Hopper × "));
	assert!(tray_row.contains(" Ada Lovelace × "));
	assert!(!view.contains("ada@x.io"));

	let outcome = app.finish(Exit::Accept);
	let ids: Vec<_> = outcome
		.selected
		.iter()
		.map(|person| person.id.as_str())
		.collect();
	assert_eq!(ids, ["3", "1"]);
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}
