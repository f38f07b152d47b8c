/// Two-step Backspace deletion of the last chip.
///
/// The first press arms the last chip, the second removes it. Selecting a
/// candidate always returns to [`RemovalState::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalState {
	#[default]
	Idle,
	Armed,
}

/// What a Backspace press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BackspaceAction {
	Arm,
	RemoveLast,
}

impl RemovalState {
	#[must_use]
	pub fn is_armed(self) -> bool {
		matches!(self, Self::Armed)
	}

	/// Advance the state for one Backspace press.
	pub(crate) fn on_backspace(self) -> (Self, BackspaceAction) {
		match self {
			Self::Idle => (Self::Armed, BackspaceAction::Arm),
			Self::Armed => (Self::Idle, BackspaceAction::RemoveLast),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn backspace_alternates_between_arm_and_remove() {
		let (state, action) = RemovalState::Idle.on_backspace();
		assert_eq!((state, action), (RemovalState::Armed, BackspaceAction::Arm));

		let (state, action) = state.on_backspace();
		assert_eq!((state, action), (RemovalState::Idle, BackspaceAction::RemoveLast));
	}
}
