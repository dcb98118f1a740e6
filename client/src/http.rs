// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::CheckError;
use crate::transport::{decode_outcome, CheckRequest, ValidationOutcome, ValidationTransport};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use register_form_shared::messages::validation::{ValidatedField, ValidationRequest};
use std::rc::Rc;
use web_sys::HtmlInputElement;

impl From<gloo_net::Error> for CheckError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error.to_string())
	}
}

struct Endpoints {
	username_url: String,
	email_url: String,
	csrf_input: HtmlInputElement,
}

/// Posts availability checks to the backend's validation endpoints
#[derive(Clone)]
pub struct HttpTransport {
	endpoints: Rc<Endpoints>,
}

impl HttpTransport {
	pub fn new(username_url: String, email_url: String, csrf_input: HtmlInputElement) -> Self {
		let endpoints = Endpoints {
			username_url,
			email_url,
			csrf_input,
		};
		Self {
			endpoints: Rc::new(endpoints),
		}
	}

	fn url(&self, field: ValidatedField) -> &str {
		match field {
			ValidatedField::Username => &self.endpoints.username_url,
			ValidatedField::Email => &self.endpoints.email_url,
		}
	}
}

impl ValidationTransport for HttpTransport {
	fn validate(&self, request: ValidationRequest) -> LocalBoxFuture<'static, Result<ValidationOutcome, CheckError>> {
		let field = request.field();
		// The token is read per request so a rotated token is picked up
		let check = CheckRequest::new(self.url(field), &self.endpoints.csrf_input.value(), &request);

		async move {
			let check = check?;
			let mut builder = Request::post(&check.url);
			for (name, value) in &check.headers {
				builder = builder.header(name, value);
			}
			let response = builder.body(check.body)?.send().await?;
			log::debug!("{} check answered with status {}", field, response.status());
			let body = response.text().await?;
			decode_outcome(field, &body)
		}
		.boxed_local()
	}
}
