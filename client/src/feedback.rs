// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// What a field currently tells the user. A field shows at most one of these at a time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Feedback {
	#[default]
	None,
	/// The server accepted the value and the field has a confirmation to show
	Available(String),
	/// The server rejected the value with this message
	Rejected(String),
	/// The check couldn't be completed
	CheckFailed(String),
}

impl Feedback {
	/// The message to display in the field's feedback area, if any.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::None => None,
			Self::Available(message) | Self::Rejected(message) | Self::CheckFailed(message) => Some(message),
		}
	}
}

/// Displayed state of a validated input field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldState {
	pub value: String,
	pub feedback: Feedback,
}

impl FieldState {
	pub fn new(value: String) -> Self {
		Self {
			value,
			feedback: Feedback::None,
		}
	}

	pub fn is_invalid(&self) -> bool {
		matches!(self.feedback, Feedback::Rejected(_))
	}
}

/// Something that can show a field's state to the user.
///
/// The browser implementation writes to DOM elements; tests record what was rendered.
pub trait FieldSurface {
	/// Replaces everything previously displayed for the field with `state`.
	fn render(&self, state: &FieldState);
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_rejection_marks_invalid() {
		let mut state = FieldState::new(String::from("bob"));
		assert!(!state.is_invalid());
		state.feedback = Feedback::Rejected(String::from("taken"));
		assert!(state.is_invalid());
		state.feedback = Feedback::CheckFailed(String::from("offline"));
		assert!(!state.is_invalid());
		state.feedback = Feedback::Available(String::from("ok"));
		assert!(!state.is_invalid());
	}

	#[test]
	fn message_follows_feedback() {
		assert_eq!(Feedback::None.message(), None);
		assert_eq!(Feedback::Rejected(String::from("taken")).message(), Some("taken"));
	}
}
