//! Core model and interaction logic for the `chipz` picker.
//!
//! Nothing in this crate knows about terminals. The render layer feeds the
//! [`Controller`] with the operations users trigger and reads its state back
//! to draw the chip tray and the candidate dropdown.

pub mod controller;
pub mod dataset;
pub mod geometry;
pub mod listeners;
pub mod person;

pub use controller::{Controller, RemovalState};
pub use dataset::{Dataset, DatasetError};
pub use geometry::{Point, Region};
pub use listeners::{DocumentEvent, DocumentKey, DocumentListeners, ListenerId, ListenerKind, Mount};
pub use person::{Person, PersonId};
