//! Core application state and behavior for the interactive picker.
//!
//! The [`App`] type ties the mounted controller to the terminal. Supporting
//! modules partition the implementation: actions (input handling), rendering,
//! and state.

mod actions;
mod render;
mod state;

pub(crate) use render::HitMap;
pub use state::{App, Exit};
