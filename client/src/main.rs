// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

fn main() {
	console_error_panic_hook::set_once();

	let log_level = if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	};
	wasm_logger::init(wasm_logger::Config::new(log_level));

	bind_page();
}

#[cfg(target_arch = "wasm32")]
fn bind_page() {
	// Without the bindings the form still submits normally; only the live checks are lost.
	if let Err(error) = register_form_client::dom::start() {
		log::error!("Unable to enable registration form checks: {}", error);
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn bind_page() {
	log::warn!("Registration form bindings only run in a browser");
}
