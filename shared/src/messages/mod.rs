// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod validation;

/// Header the backend reads the CSRF token from
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Name of the hidden form input holding the page's CSRF token
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";
