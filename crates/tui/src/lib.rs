//! Interactive terminal UI for the `chipz` people picker.
//!
//! This crate draws the chip tray, query input, and candidate dropdown around
//! a mounted [`chipz_core::Controller`], translates terminal key and mouse
//! events into controller operations, and runs the event loop until the user
//! accepts or cancels.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

pub use app::{App, Exit};
pub use builder::Picker;
pub use config::{DEFAULT_LIST_HEIGHT, UiLabels};
pub use outcome::PickOutcome;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme, default_theme};

#[cfg(test)]
mod snapshot_tests;
