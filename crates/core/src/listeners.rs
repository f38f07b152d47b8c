//! Document-level listeners scoped to the lifetime of a mounted picker.
//!
//! The picker reacts to two events that happen anywhere on screen: pointer
//! clicks (to close the dropdown when the click lands outside the widget) and
//! the Enter key (to select the hovered candidate). Instead of hooking a
//! global, the host owns a [`DocumentListeners`] registry and hands it to
//! [`Controller::mount`]. The returned [`Mount`] holds the listener ids until
//! [`Mount::unmount`] releases them, after which dispatch no longer reaches
//! the controller.

use std::collections::BTreeMap;

use crate::controller::Controller;
use crate::dataset::Dataset;
use crate::geometry::Point;
use crate::person::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
	OutsideClick,
	EnterKey,
}

/// Keys the document listeners care about. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKey {
	Enter,
	Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
	Click(Point),
	KeyDown(DocumentKey),
}

impl DocumentEvent {
	fn listener_kind(self) -> Option<ListenerKind> {
		match self {
			Self::Click(_) => Some(ListenerKind::OutsideClick),
			Self::KeyDown(DocumentKey::Enter) => Some(ListenerKind::EnterKey),
			Self::KeyDown(DocumentKey::Other) => None,
		}
	}
}

/// Registry of active document listeners.
#[derive(Debug, Default)]
pub struct DocumentListeners {
	next_id: u64,
	active: BTreeMap<ListenerId, ListenerKind>,
}

impl DocumentListeners {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn subscribe(&mut self, kind: ListenerKind) -> ListenerId {
		let id = ListenerId(self.next_id);
		self.next_id += 1;
		self.active.insert(id, kind);
		tracing::trace!(?id, ?kind, "listener subscribed");
		id
	}

	/// Returns `false` if `id` was not subscribed.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		let removed = self.active.remove(&id).is_some();
		if removed {
			tracing::trace!(?id, "listener unsubscribed");
		}
		removed
	}

	#[must_use]
	pub fn is_active(&self, id: ListenerId) -> bool {
		self.active.contains_key(&id)
	}

	#[must_use]
	pub fn is_subscribed(&self, kind: ListenerKind) -> bool {
		self.active.values().any(|active| *active == kind)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.active.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.active.is_empty()
	}

	/// Route a document event to the mounted controller.
	///
	/// Returns `true` when a listener of the mount handled the event.
	pub fn dispatch(&self, event: DocumentEvent, mount: &mut Mount) -> bool {
		let Some(kind) = event.listener_kind() else {
			return false;
		};
		let Some(id) = mount.listener(kind) else {
			return false;
		};
		if !self.is_active(id) {
			return false;
		}

		match event {
			DocumentEvent::Click(target) => mount.controller.on_outside_click(target),
			DocumentEvent::KeyDown(_) => mount.controller.on_enter_key(),
		}
		true
	}
}

/// A controller together with the document listeners it subscribed.
#[derive(Debug)]
pub struct Mount {
	controller: Controller,
	outside_click: Option<ListenerId>,
	enter_key: Option<ListenerId>,
}

impl Controller {
	/// Create a controller for `dataset` and subscribe its document
	/// listeners.
	pub fn mount(dataset: &Dataset, listeners: &mut DocumentListeners) -> Mount {
		Mount {
			controller: Controller::new(dataset),
			outside_click: Some(listeners.subscribe(ListenerKind::OutsideClick)),
			enter_key: Some(listeners.subscribe(ListenerKind::EnterKey)),
		}
	}
}

impl Mount {
	#[must_use]
	pub fn controller(&self) -> &Controller {
		&self.controller
	}

	pub fn controller_mut(&mut self) -> &mut Controller {
		&mut self.controller
	}

	#[must_use]
	pub fn is_mounted(&self) -> bool {
		self.outside_click.is_some() || self.enter_key.is_some()
	}

	fn listener(&self, kind: ListenerKind) -> Option<ListenerId> {
		match kind {
			ListenerKind::OutsideClick => self.outside_click,
			ListenerKind::EnterKey => self.enter_key,
		}
	}

	/// Release the document listeners and return the chips in selection
	/// order.
	pub fn unmount(mut self, listeners: &mut DocumentListeners) -> Vec<Person> {
		self.release(listeners);
		self.controller.take_selection()
	}

	fn release(&mut self, listeners: &mut DocumentListeners) {
		for id in [self.outside_click.take(), self.enter_key.take()]
			.into_iter()
			.flatten()
		{
			listeners.unsubscribe(id);
		}
	}
}

impl Drop for Mount {
	fn drop(&mut self) {
		if self.is_mounted() {
			tracing::warn!("picker dropped without unmounting; document listeners leaked");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::Region;

	fn dataset() -> Dataset {
		Dataset::new(vec![
			Person::new("1", "Ada", "", ""),
			Person::new("2", "Grace", "", ""),
		])
		.expect("dataset")
	}

	#[test]
	fn mount_subscribes_both_listeners() {
		let mut listeners = DocumentListeners::new();
		let mount = Controller::mount(&dataset(), &mut listeners);

		assert_eq!(listeners.len(), 2);
		assert!(listeners.is_subscribed(ListenerKind::OutsideClick));
		assert!(listeners.is_subscribed(ListenerKind::EnterKey));

		let selection = mount.unmount(&mut listeners);
		assert!(selection.is_empty());
		assert!(listeners.is_empty());
	}

	#[test]
	fn enter_dispatch_selects_hovered_candidate() {
		let mut listeners = DocumentListeners::new();
		let mut mount = Controller::mount(&dataset(), &mut listeners);
		mount.controller_mut().on_hover("2");

		assert!(listeners.dispatch(DocumentEvent::KeyDown(DocumentKey::Enter), &mut mount));
		assert!(!listeners.dispatch(DocumentEvent::KeyDown(DocumentKey::Other), &mut mount));

		let selection = mount.unmount(&mut listeners);
		assert_eq!(selection.len(), 1);
		assert_eq!(selection[0].id.as_str(), "2");
	}

	#[test]
	fn click_dispatch_hides_list_outside_root() {
		let mut listeners = DocumentListeners::new();
		let mut mount = Controller::mount(&dataset(), &mut listeners);
		mount.controller_mut().on_focus();
		mount
			.controller_mut()
			.set_root_region(Region::new(0, 0, 10, 4));

		listeners.dispatch(DocumentEvent::Click(Point::new(1, 1)), &mut mount);
		assert!(mount.controller().is_list_visible());

		listeners.dispatch(DocumentEvent::Click(Point::new(30, 1)), &mut mount);
		assert!(!mount.controller().is_list_visible());

		mount.unmount(&mut listeners);
	}

	#[test]
	fn dispatch_is_inert_once_listeners_are_gone() {
		let mut listeners = DocumentListeners::new();
		let mut mount = Controller::mount(&dataset(), &mut listeners);
		mount.controller_mut().on_focus();
		mount
			.controller_mut()
			.set_root_region(Region::new(0, 0, 10, 4));
		mount.controller_mut().on_hover("1");

		let mut other = DocumentListeners::new();
		assert!(!other.dispatch(DocumentEvent::KeyDown(DocumentKey::Enter), &mut mount));
		assert!(!other.dispatch(DocumentEvent::Click(Point::new(50, 50)), &mut mount));
		assert!(mount.controller().selected().is_empty());
		assert!(mount.controller().is_list_visible());

		mount.release(&mut listeners);
		assert!(listeners.is_empty());
		assert!(!listeners.dispatch(DocumentEvent::KeyDown(DocumentKey::Enter), &mut mount));
		assert!(mount.controller().selected().is_empty());

		other.subscribe(ListenerKind::EnterKey);
		assert!(!other.dispatch(DocumentEvent::KeyDown(DocumentKey::Enter), &mut mount));
	}

	#[test]
	fn unsubscribe_reports_unknown_ids() {
		let mut listeners = DocumentListeners::new();
		let id = listeners.subscribe(ListenerKind::EnterKey);
		assert!(listeners.unsubscribe(id));
		assert!(!listeners.unsubscribe(id));
	}
}
