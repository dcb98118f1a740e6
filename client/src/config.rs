// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SetupError;
use register_form_shared::messages::CSRF_FIELD_NAME;
use serde::Deserialize;

/// Element ID of the optional JSON configuration block on the page
pub const CONFIG_ELEMENT_ID: &str = "registerFormConfig";

/// Selectors for every element the controller binds to
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Selectors {
	pub form: String,
	pub username: String,
	pub email: String,
	pub password: String,
	pub username_success: String,
	pub username_feedback: String,
	pub email_feedback: String,
	pub password_toggle: String,
	pub csrf_token: String,
}

impl Default for Selectors {
	fn default() -> Self {
		Self {
			form: String::from("#registerForm"),
			username: String::from("#usernameField"),
			email: String::from("#emailField"),
			password: String::from("#passwordField"),
			username_success: String::from(".usernameSuccessOutput"),
			username_feedback: String::from(".invalid_feedback"),
			email_feedback: String::from(".emailFeedBackArea"),
			password_toggle: String::from(".showPasswordToggle"),
			csrf_token: format!("[name={}]", CSRF_FIELD_NAME),
		}
	}
}

/// Everything about the registration page that can be adjusted without rebuilding the client
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct FormConfig {
	pub username_url: String,
	pub email_url: String,
	pub selectors: Selectors,
	/// Shown after a username is confirmed free. The email field has no equivalent.
	pub username_available_message: String,
	/// Shown when a check couldn't reach the server or got an unreadable answer
	pub check_failed_message: String,
	pub show_label: String,
	pub hide_label: String,
	/// How long to wait after a keystroke before checking. Zero checks on every keystroke.
	pub debounce_ms: u32,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			username_url: String::from("/authentication/validate-username/"),
			email_url: String::from("/authentication/validate-email/"),
			selectors: Selectors::default(),
			username_available_message: String::from("✅ Username is available"),
			check_failed_message: String::from("Unable to check availability right now. Please try again."),
			show_label: String::from("SHOW"),
			hide_label: String::from("HIDE"),
			debounce_ms: 0,
		}
	}
}

impl FormConfig {
	/// Reads a configuration document. Missing keys keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, SetupError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Applies endpoint URLs the page template defined as globals.
	pub fn with_endpoint_overrides(mut self, username_url: Option<String>, email_url: Option<String>) -> Self {
		if let Some(url) = username_url.filter(|url| !url.is_empty()) {
			self.username_url = url;
		}
		if let Some(url) = email_url.filter(|url| !url.is_empty()) {
			self.email_url = url;
		}
		self
	}
}
