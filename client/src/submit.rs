// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// What should happen to a form submission
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitDecision {
	/// Let the browser submit the form normally
	Proceed,
}

/// Runs when the registration form is submitted. Submission is left to the browser and the server.
#[derive(Debug, Default)]
pub struct SubmitHook;

impl SubmitHook {
	pub fn on_submit(&self) -> SubmitDecision {
		log::debug!("Registration form submitted");
		SubmitDecision::Proceed
	}
}
