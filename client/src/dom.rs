// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::{FormConfig, CONFIG_ELEMENT_ID};
use crate::controller::{FormController, FormParts};
use crate::error::SetupError;
use crate::feedback::{Feedback, FieldState, FieldSurface};
use crate::http::HttpTransport;
use crate::js_def::{page_global_string, EMAIL_URL_GLOBAL, USERNAME_URL_GLOBAL};
use crate::password::PasswordSurface;
use crate::submit::SubmitDecision;
use gloo_timers::future::TimeoutFuture;
use register_form_shared::messages::validation::ValidatedField;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement};

const INVALID_CLASS: &str = "is-invalid";

type DomController = FormController<DomField, DomPassword, HttpTransport>;

impl From<JsValue> for SetupError {
	fn from(error: JsValue) -> Self {
		Self::Js(format!("{:?}", error))
	}
}

/// A validated input with the elements its feedback is written to
pub struct DomField {
	input: HtmlInputElement,
	feedback: HtmlElement,
	success: Option<Element>,
}

impl FieldSurface for DomField {
	fn render(&self, state: &FieldState) {
		let class_list = self.input.class_list();
		let class_update = if state.is_invalid() {
			class_list.add_1(INVALID_CLASS)
		} else {
			class_list.remove_1(INVALID_CLASS)
		};
		if let Err(error) = class_update {
			log::warn!("Failed to update input validity class: {:?}", error);
		}

		match &state.feedback {
			Feedback::Rejected(message) | Feedback::CheckFailed(message) => {
				self.feedback.set_text_content(Some(message));
				set_display(&self.feedback, "block");
			}
			Feedback::None | Feedback::Available(_) => set_display(&self.feedback, "none"),
		}

		if let Some(success) = &self.success {
			let text = match &state.feedback {
				Feedback::Available(message) => message.as_str(),
				_ => "",
			};
			success.set_text_content(Some(text));
		}
	}
}

fn set_display(element: &HtmlElement, display: &str) {
	if let Err(error) = element.style().set_property("display", display) {
		log::warn!("Failed to change feedback visibility: {:?}", error);
	}
}

/// The password input and the control that reveals it
pub struct DomPassword {
	input: HtmlInputElement,
	toggle: Element,
}

impl PasswordSurface for DomPassword {
	fn input_type(&self) -> String {
		self.input.type_()
	}

	fn set_input_type(&self, input_type: &str) {
		self.input.set_type(input_type);
	}

	fn set_toggle_label(&self, label: &str) {
		self.toggle.set_text_content(Some(label));
	}
}

/// Finds the element matching `selector`, failing if it's absent or of the wrong kind.
fn find<E: JsCast>(document: &Document, selector: &str) -> Result<E, SetupError> {
	let element = document
		.query_selector(selector)?
		.ok_or_else(|| SetupError::MissingElement(selector.to_owned()))?;
	element
		.dyn_into::<E>()
		.map_err(|_| SetupError::UnexpectedElement(selector.to_owned()))
}

/// Builds the configuration from the page's config block and the template's URL globals.
fn load_config(document: &Document) -> Result<FormConfig, SetupError> {
	let config = match document
		.get_element_by_id(CONFIG_ELEMENT_ID)
		.and_then(|element| element.text_content())
	{
		Some(json) => FormConfig::from_json(&json)?,
		None => FormConfig::default(),
	};
	Ok(config.with_endpoint_overrides(
		page_global_string(USERNAME_URL_GLOBAL),
		page_global_string(EMAIL_URL_GLOBAL),
	))
}

/// Registers `handler` for `event_type` on `target` for the rest of the page's life.
fn listen(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SetupError> {
	let closure = Closure::<dyn FnMut(Event)>::new(handler);
	target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

fn listen_for_input(
	input: &HtmlInputElement,
	field: ValidatedField,
	controller: &Rc<DomController>,
) -> Result<(), SetupError> {
	let controller = Rc::clone(controller);
	let value_source = input.clone();
	listen(input, "keyup", move |_event| {
		let Some(pending) = controller.checker(field).on_input(&value_source.value()) else {
			return;
		};
		let debounce_ms = controller.debounce_ms();
		let controller = Rc::clone(&controller);
		spawn_local(async move {
			if debounce_ms > 0 {
				TimeoutFuture::new(debounce_ms).await;
				if !pending.is_current() {
					return;
				}
			}
			controller.checker(field).send(pending).await;
		});
	})
}

/// Binds the registration form's behavior to the current page.
///
/// # Errors
///
/// Fails when the page has no document, the configuration block is invalid, an expected element is missing or of the
/// wrong kind, or the browser refuses an event listener.
pub fn start() -> Result<(), SetupError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| SetupError::Js(String::from("No document is available")))?;
	let config = load_config(&document)?;
	let selectors = &config.selectors;

	let username_input: HtmlInputElement = find(&document, &selectors.username)?;
	let email_input: HtmlInputElement = find(&document, &selectors.email)?;
	let toggle: Element = find(&document, &selectors.password_toggle)?;
	let form: HtmlFormElement = find(&document, &selectors.form)?;

	let parts = FormParts {
		username: DomField {
			input: username_input.clone(),
			feedback: find(&document, &selectors.username_feedback)?,
			success: Some(find(&document, &selectors.username_success)?),
		},
		email: DomField {
			input: email_input.clone(),
			feedback: find(&document, &selectors.email_feedback)?,
			success: None,
		},
		password: DomPassword {
			input: find(&document, &selectors.password)?,
			toggle: toggle.clone(),
		},
		transport: HttpTransport::new(
			config.username_url.clone(),
			config.email_url.clone(),
			find(&document, &selectors.csrf_token)?,
		),
	};
	let controller = Rc::new(FormController::new(&config, parts));

	listen_for_input(&username_input, ValidatedField::Username, &controller)?;
	listen_for_input(&email_input, ValidatedField::Email, &controller)?;

	{
		let controller = Rc::clone(&controller);
		listen(&toggle, "click", move |_event| {
			controller.password().toggle();
		})?;
	}

	listen(&form, "submit", move |_event| match controller.submit().on_submit() {
		SubmitDecision::Proceed => {}
	})?;

	log::info!("Registration form checks enabled");
	Ok(())
}
