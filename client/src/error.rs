// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur while checking a value with the backend
#[derive(Debug)]
pub enum CheckError {
	/// The request couldn't be sent or the response couldn't be read
	Request(String),
	/// The response body wasn't the expected JSON
	Malformed(serde_json::Error),
}

impl From<serde_json::Error> for CheckError {
	fn from(error: serde_json::Error) -> Self {
		Self::Malformed(error)
	}
}

impl fmt::Display for CheckError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "Failed to reach the validation endpoint: {}", error),
			Self::Malformed(error) => write!(f, "An invalid validation response was received: {}", error),
		}
	}
}

/// Errors that can occur while binding the controller to the page
#[derive(Debug)]
pub enum SetupError {
	MissingElement(String),
	UnexpectedElement(String),
	Config(serde_json::Error),
	Js(String),
}

impl From<serde_json::Error> for SetupError {
	fn from(error: serde_json::Error) -> Self {
		Self::Config(error)
	}
}

impl fmt::Display for SetupError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingElement(selector) => write!(f, "No element on the page matches {}", selector),
			Self::UnexpectedElement(selector) => write!(f, "The element matching {} is not the expected kind", selector),
			Self::Config(error) => write!(f, "The form configuration is invalid: {}", error),
			Self::Js(error) => write!(f, "A browser call failed: {}", error),
		}
	}
}
