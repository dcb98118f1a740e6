// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::CheckError;
use futures::future::LocalBoxFuture;
use register_form_shared::messages::validation::{
	EmailValidationResponse, UsernameValidationResponse, ValidatedField, ValidationRequest, ValidationResponse,
};
use register_form_shared::messages::CSRF_HEADER;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// What the backend said about a candidate value
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationOutcome {
	Available,
	Rejected(String),
}

/// Sends availability checks to the backend.
///
/// The browser implementation posts JSON over HTTP; tests substitute a fake that resolves on demand.
pub trait ValidationTransport {
	fn validate(&self, request: ValidationRequest) -> LocalBoxFuture<'static, Result<ValidationOutcome, CheckError>>;
}

/// Everything needed to send one availability check over HTTP
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckRequest {
	pub url: String,
	pub headers: Vec<(&'static str, String)>,
	pub body: String,
}

impl CheckRequest {
	pub fn new(url: &str, csrf_token: &str, request: &ValidationRequest) -> Result<Self, CheckError> {
		Ok(Self {
			url: url.to_owned(),
			headers: vec![
				(CSRF_HEADER, csrf_token.to_owned()),
				(CONTENT_TYPE_HEADER, String::from(JSON_CONTENT_TYPE)),
			],
			body: serde_json::to_string(request)?,
		})
	}
}

/// Interprets a validation endpoint's response body.
///
/// The backend reports rejections with an error status and a JSON body, so the body is read no matter the status.
pub fn decode_outcome(field: ValidatedField, body: &str) -> Result<ValidationOutcome, CheckError> {
	let rejection = match field {
		ValidatedField::Username => {
			serde_json::from_str::<UsernameValidationResponse>(body).map(|response| response.rejection())
		}
		ValidatedField::Email => serde_json::from_str::<EmailValidationResponse>(body).map(|response| response.rejection()),
	};
	let rejection = rejection.map_err(|error| {
		log::debug!("Expected a JSON object with an optional {} key, got {:?}", field.error_key(), body);
		error
	})?;
	Ok(match rejection {
		Some(message) => ValidationOutcome::Rejected(message),
		None => ValidationOutcome::Available,
	})
}

#[cfg(test)]
pub(crate) mod testing {
	use super::{ValidationOutcome, ValidationTransport};
	use crate::error::CheckError;
	use futures::channel::oneshot;
	use futures::future::LocalBoxFuture;
	use futures::FutureExt;
	use register_form_shared::messages::validation::ValidationRequest;
	use std::cell::RefCell;
	use std::rc::Rc;

	type Responder = oneshot::Sender<Result<ValidationOutcome, CheckError>>;

	/// Transport whose requests stay pending until the test answers them
	#[derive(Clone, Default)]
	pub struct ManualTransport {
		pending: Rc<RefCell<Vec<(ValidationRequest, Option<Responder>)>>>,
	}

	impl ManualTransport {
		pub fn requests(&self) -> Vec<ValidationRequest> {
			self.pending.borrow().iter().map(|(request, _)| request.clone()).collect()
		}

		pub fn request_count(&self) -> usize {
			self.pending.borrow().len()
		}

		/// Resolves the request at `index` (in send order).
		pub fn respond(&self, index: usize, result: Result<ValidationOutcome, CheckError>) {
			let responder = self.pending.borrow_mut()[index].1.take().expect("request already answered");
			let _ = responder.send(result);
		}
	}

	impl ValidationTransport for ManualTransport {
		fn validate(&self, request: ValidationRequest) -> LocalBoxFuture<'static, Result<ValidationOutcome, CheckError>> {
			let (sender, receiver) = oneshot::channel();
			self.pending.borrow_mut().push((request, Some(sender)));
			async move {
				receiver
					.await
					.unwrap_or_else(|_| Err(CheckError::Request(String::from("request dropped"))))
			}
			.boxed_local()
		}
	}
}
