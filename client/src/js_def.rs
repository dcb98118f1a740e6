// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wasm_bindgen::JsValue;

/// Global the registration template defines with the username validation URL
pub const USERNAME_URL_GLOBAL: &str = "validateUsernameUrl";
/// Global the registration template defines with the email validation URL
pub const EMAIL_URL_GLOBAL: &str = "validateEmailUrl";

/// Reads a string-valued global variable from the page.
pub fn page_global_string(name: &str) -> Option<String> {
	let window = web_sys::window()?;
	js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?.as_string()
}
