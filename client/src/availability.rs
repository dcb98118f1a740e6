// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::feedback::{Feedback, FieldState, FieldSurface};
use crate::tracker::{RequestTicket, RequestTracker};
use crate::transport::{ValidationOutcome, ValidationTransport};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use register_form_shared::messages::validation::{ValidatedField, ValidationRequest};
use std::rc::Rc;

/// A check that has been decided on for a keystroke but not yet sent
#[derive(Debug)]
pub struct PendingCheck {
	request: ValidationRequest,
	ticket: RequestTicket,
	tracker: RequestTracker,
}

impl PendingCheck {
	pub fn request(&self) -> &ValidationRequest {
		&self.request
	}

	/// Whether this is still the newest check for its field
	pub fn is_current(&self) -> bool {
		self.tracker.is_current(self.ticket)
	}
}

/// Checks one input field's value with the backend as the user types.
///
/// Every input supersedes all earlier checks for the field: their results are dropped when they arrive, so the field
/// always reflects the newest value regardless of the order responses come back in.
pub struct AvailabilityChecker<S, T> {
	field: ValidatedField,
	surface: Rc<S>,
	transport: T,
	tracker: RequestTracker,
	available_message: Option<String>,
	check_failed_message: String,
}

impl<S, T> AvailabilityChecker<S, T>
where
	S: FieldSurface + 'static,
	T: ValidationTransport,
{
	pub fn new(
		field: ValidatedField,
		surface: S,
		transport: T,
		available_message: Option<String>,
		check_failed_message: String,
	) -> Self {
		Self {
			field,
			surface: Rc::new(surface),
			transport,
			tracker: RequestTracker::new(),
			available_message,
			check_failed_message,
		}
	}

	/// Clears the field's feedback for a new input value and decides whether the value needs checking.
	///
	/// Returns `None` for blank input, which also discards any check still in flight.
	pub fn on_input(&self, raw_value: &str) -> Option<PendingCheck> {
		let value = raw_value.trim();
		self.surface.render(&FieldState::new(value.to_owned()));

		if value.is_empty() {
			self.tracker.invalidate();
			return None;
		}

		Some(PendingCheck {
			request: ValidationRequest::new(self.field, value.to_owned()),
			ticket: self.tracker.begin(),
			tracker: self.tracker.clone(),
		})
	}

	/// Sends a pending check. The request goes out immediately; the returned future applies the result.
	pub fn send(&self, pending: PendingCheck) -> LocalBoxFuture<'static, ()> {
		let PendingCheck { request, ticket, tracker } = pending;
		let field = self.field;
		let value = request.value().to_owned();
		let response = self.transport.validate(request);
		let surface = Rc::clone(&self.surface);
		let available_message = self.available_message.clone();
		let check_failed_message = self.check_failed_message.clone();

		async move {
			let feedback = match response.await {
				Ok(ValidationOutcome::Available) => match available_message {
					Some(message) => Feedback::Available(message),
					None => Feedback::None,
				},
				Ok(ValidationOutcome::Rejected(message)) => Feedback::Rejected(message),
				Err(error) => {
					log::warn!("Checking {} availability failed: {}", field, error);
					Feedback::CheckFailed(check_failed_message)
				}
			};

			if !tracker.is_current(ticket) {
				log::debug!("Dropping stale {} check result for {:?}", field, value);
				return;
			}
			surface.render(&FieldState { value, feedback });
		}
		.boxed_local()
	}

	/// Handles an input value without any delay: clears feedback and, for non-blank values, sends the check.
	pub fn handle_input(&self, raw_value: &str) -> Option<LocalBoxFuture<'static, ()>> {
		self.on_input(raw_value).map(|pending| self.send(pending))
	}
}
