//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use chipz_core::Dataset;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::App;
use crate::app::Exit;
use crate::outcome::PickOutcome;

/// Construct an [`App`] for the provided dataset and run it to completion.
pub fn run(dataset: &Dataset) -> Result<PickOutcome> {
	App::new(dataset).run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user accepts or cancels.
	///
	/// The controller is unmounted before this returns, whether the loop
	/// ended normally or with an error.
	pub fn run(mut self) -> Result<PickOutcome> {
		let mut terminal = ratatui::init();
		let result = self.run_loop(&mut terminal);

		ratatui::restore();
		let restored = execute!(stdout(), DisableMouseCapture);

		let outcome = match result {
			Ok(exit) => self.finish(exit),
			Err(err) => {
				tracing::error!(error = %err, "picker event loop failed");
				self.finish(Exit::Cancel);
				return Err(err);
			}
		};
		restored?;
		Ok(outcome)
	}

	fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<Exit> {
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;
		self.focus_input();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<Exit> = 'event_loop: loop {
			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			match event_rx.recv_timeout(Duration::from_millis(100)) {
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::RecvTimeoutError::Timeout) => continue,
				Err(mpsc::RecvTimeoutError::Disconnected) => {
					break Err(anyhow!("input event channel disconnected"));
				}
			}
			pending_events.extend(event_rx.try_iter());

			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(exit) = self.handle_key(key) {
							break 'event_loop Ok(exit);
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
