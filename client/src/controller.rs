// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::availability::AvailabilityChecker;
use crate::config::FormConfig;
use crate::feedback::FieldSurface;
use crate::password::{PasswordSurface, PasswordToggle};
use crate::submit::SubmitHook;
use crate::transport::ValidationTransport;
use register_form_shared::messages::validation::ValidatedField;

/// The page pieces a controller drives
pub struct FormParts<F, P, T> {
	pub username: F,
	pub email: F,
	pub password: P,
	pub transport: T,
}

/// All of the registration form's client-side behavior for one form instance
pub struct FormController<F, P, T> {
	username: AvailabilityChecker<F, T>,
	email: AvailabilityChecker<F, T>,
	password: PasswordToggle<P>,
	submit: SubmitHook,
	debounce_ms: u32,
}

impl<F, P, T> FormController<F, P, T>
where
	F: FieldSurface + 'static,
	P: PasswordSurface,
	T: ValidationTransport + Clone,
{
	pub fn new(config: &FormConfig, parts: FormParts<F, P, T>) -> Self {
		let FormParts {
			username,
			email,
			password,
			transport,
		} = parts;

		Self {
			username: AvailabilityChecker::new(
				ValidatedField::Username,
				username,
				transport.clone(),
				Some(config.username_available_message.clone()),
				config.check_failed_message.clone(),
			),
			email: AvailabilityChecker::new(
				ValidatedField::Email,
				email,
				transport,
				None,
				config.check_failed_message.clone(),
			),
			password: PasswordToggle::new(password, config.show_label.clone(), config.hide_label.clone()),
			submit: SubmitHook,
			debounce_ms: config.debounce_ms,
		}
	}

	pub fn username(&self) -> &AvailabilityChecker<F, T> {
		&self.username
	}

	pub fn email(&self) -> &AvailabilityChecker<F, T> {
		&self.email
	}

	pub fn checker(&self, field: ValidatedField) -> &AvailabilityChecker<F, T> {
		match field {
			ValidatedField::Username => &self.username,
			ValidatedField::Email => &self.email,
		}
	}

	pub fn password(&self) -> &PasswordToggle<P> {
		&self.password
	}

	pub fn submit(&self) -> &SubmitHook {
		&self.submit
	}

	pub fn debounce_ms(&self) -> u32 {
		self.debounce_ms
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::feedback::testing::RecordingSurface;
	use crate::feedback::Feedback;
	use crate::password::testing::FakePassword;
	use crate::password::PasswordMode;
	use crate::submit::SubmitDecision;
	use crate::transport::testing::ManualTransport;
	use crate::transport::ValidationOutcome;
	use futures::executor::block_on;
	use std::rc::Rc;

	struct Harness {
		username: Rc<RecordingSurface>,
		email: Rc<RecordingSurface>,
		password: FakePassword,
		transport: ManualTransport,
	}

	impl Harness {
		fn new() -> Self {
			Self {
				username: Rc::new(RecordingSurface::default()),
				email: Rc::new(RecordingSurface::default()),
				password: FakePassword::new("password"),
				transport: ManualTransport::default(),
			}
		}

		fn controller(
			&self,
			config: &FormConfig,
		) -> FormController<Rc<RecordingSurface>, &FakePassword, ManualTransport> {
			FormController::new(
				config,
				FormParts {
					username: Rc::clone(&self.username),
					email: Rc::clone(&self.email),
					password: &self.password,
					transport: self.transport.clone(),
				},
			)
		}
	}

	#[test]
	fn submit_proceeds_without_requests() {
		let harness = Harness::new();
		let controller = harness.controller(&FormConfig::default());
		assert_eq!(controller.submit().on_submit(), SubmitDecision::Proceed);
		assert_eq!(harness.transport.request_count(), 0);
	}

	#[test]
	fn fields_are_independent() {
		let harness = Harness::new();
		let controller = harness.controller(&FormConfig::default());

		let username_check = controller.username().handle_input("alice").unwrap();
		let email_check = controller.email().handle_input("alice@example.com").unwrap();
		harness.transport.respond(1, Ok(ValidationOutcome::Rejected(String::from("in use"))));
		harness.transport.respond(0, Ok(ValidationOutcome::Available));
		block_on(email_check);
		block_on(username_check);

		assert!(harness.email.last().is_invalid());
		assert!(!harness.username.last().is_invalid());
		assert_eq!(controller.password().mode(), PasswordMode::Masked);
	}

	#[test]
	fn configuration_reaches_components() {
		let harness = Harness::new();
		let config = FormConfig {
			username_available_message: String::from("Free!"),
			show_label: String::from("Show"),
			hide_label: String::from("Hide"),
			debounce_ms: 300,
			..FormConfig::default()
		};
		let controller = harness.controller(&config);

		let check = controller.checker(ValidatedField::Username).handle_input("zed").unwrap();
		harness.transport.respond(0, Ok(ValidationOutcome::Available));
		block_on(check);
		assert_eq!(harness.username.last().feedback, Feedback::Available(String::from("Free!")));

		controller.password().toggle();
		assert_eq!(*harness.password.label.borrow(), "Hide");
		assert_eq!(controller.debounce_ms(), 300);
	}

	#[test]
	fn independent_instances_do_not_share_tickets() {
		let first = Harness::new();
		let second = Harness::new();
		let config = FormConfig::default();
		let first_controller = first.controller(&config);
		let second_controller = second.controller(&config);

		let pending = first_controller.username().on_input("amy").unwrap();
		second_controller.username().on_input("amy").unwrap();
		assert!(pending.is_current());
	}
}
