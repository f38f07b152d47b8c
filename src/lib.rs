//! Core crate exports for building and running the `chipz` people picker.
//!
//! The root module re-exports the controller types from `chipz-core` and the
//! terminal front end from `chipz-tui` so embedders can configure and run the
//! picker without depending on the member crates directly.

pub mod app_dirs;
pub mod logging;

pub use chipz_core as core;
pub use chipz_core::{Controller, Dataset, DatasetError, Person, PersonId, RemovalState};
pub use chipz_tui as tui;
pub use chipz_tui::{PickOutcome, Picker, Theme, UiLabels, run};
