// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The registration fields the backend can check for availability
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatedField {
	Username,
	Email,
}

impl ValidatedField {
	/// Key carrying the candidate value in the request body
	pub fn body_key(&self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Email => "email",
		}
	}

	/// Key carrying the rejection message in the response body
	pub fn error_key(&self) -> &'static str {
		match self {
			Self::Username => "username_error",
			Self::Email => "email_error",
		}
	}
}

impl fmt::Display for ValidatedField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.body_key())
	}
}

/// Request data from the client asking whether a username is free
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UsernameValidationRequest {
	pub username: String,
}

/// Request data from the client asking whether an email address is free
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EmailValidationRequest {
	pub email: String,
}

/// Response data from the server for a username check. A missing error means the username is available.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct UsernameValidationResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username_error: Option<String>,
}

/// Response data from the server for an email check. A missing error means the address is available.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EmailValidationResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email_error: Option<String>,
}

/// Any availability check request. Serializes as the bare body the endpoint expects.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationRequest {
	Username(UsernameValidationRequest),
	Email(EmailValidationRequest),
}

impl ValidationRequest {
	pub fn new(field: ValidatedField, value: String) -> Self {
		match field {
			ValidatedField::Username => Self::Username(UsernameValidationRequest { username: value }),
			ValidatedField::Email => Self::Email(EmailValidationRequest { email: value }),
		}
	}

	pub fn field(&self) -> ValidatedField {
		match self {
			Self::Username(_) => ValidatedField::Username,
			Self::Email(_) => ValidatedField::Email,
		}
	}

	pub fn value(&self) -> &str {
		match self {
			Self::Username(request) => &request.username,
			Self::Email(request) => &request.email,
		}
	}
}

/// The rejection message carried by a response, if any.
///
/// The backend's messages are displayed as-is; an empty message counts as no rejection.
pub trait ValidationResponse {
	fn rejection(self) -> Option<String>;
}

impl ValidationResponse for UsernameValidationResponse {
	fn rejection(self) -> Option<String> {
		self.username_error.filter(|message| !message.is_empty())
	}
}

impl ValidationResponse for EmailValidationResponse {
	fn rejection(self) -> Option<String> {
		self.email_error.filter(|message| !message.is_empty())
	}
}
