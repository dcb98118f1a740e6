// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::Cell;

const MASKED_INPUT_TYPE: &str = "password";
const VISIBLE_INPUT_TYPE: &str = "text";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PasswordMode {
	Masked,
	Visible,
}

impl PasswordMode {
	/// Determines the mode from an input element's `type` attribute.
	pub fn from_input_type(input_type: &str) -> Self {
		if input_type == MASKED_INPUT_TYPE {
			Self::Masked
		} else {
			Self::Visible
		}
	}

	pub fn input_type(&self) -> &'static str {
		match self {
			Self::Masked => MASKED_INPUT_TYPE,
			Self::Visible => VISIBLE_INPUT_TYPE,
		}
	}

	pub fn toggled(&self) -> Self {
		match self {
			Self::Masked => Self::Visible,
			Self::Visible => Self::Masked,
		}
	}
}

/// The password input and its toggle control
pub trait PasswordSurface {
	fn input_type(&self) -> String;
	fn set_input_type(&self, input_type: &str);
	fn set_toggle_label(&self, label: &str);
}

/// Flips a password input between masked and plain text
pub struct PasswordToggle<S> {
	surface: S,
	mode: Cell<PasswordMode>,
	show_label: String,
	hide_label: String,
}

impl<S: PasswordSurface> PasswordToggle<S> {
	/// Takes the starting mode from the input as it is on the page.
	pub fn new(surface: S, show_label: String, hide_label: String) -> Self {
		let mode = PasswordMode::from_input_type(&surface.input_type());
		Self {
			surface,
			mode: Cell::new(mode),
			show_label,
			hide_label,
		}
	}

	pub fn mode(&self) -> PasswordMode {
		self.mode.get()
	}

	/// The label that offers the opposite of the current mode
	pub fn label(&self) -> &str {
		match self.mode.get() {
			PasswordMode::Masked => &self.show_label,
			PasswordMode::Visible => &self.hide_label,
		}
	}

	pub fn toggle(&self) -> PasswordMode {
		let mode = self.mode.get().toggled();
		self.mode.set(mode);
		self.surface.set_input_type(mode.input_type());
		self.surface.set_toggle_label(self.label());
		mode
	}
}
