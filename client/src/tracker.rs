// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::Cell;
use std::rc::Rc;

/// Identity of one request made for a field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RequestTicket(u64);

/// Hands out request tickets for a single field and remembers which one is newest.
///
/// Clones share the same counter, so a ticket issued through one clone invalidates tickets issued through any other.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
	latest: Rc<Cell<u64>>,
}

impl RequestTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Issues a new ticket, making every earlier ticket stale.
	pub fn begin(&self) -> RequestTicket {
		let next = self.latest.get().wrapping_add(1);
		self.latest.set(next);
		RequestTicket(next)
	}

	/// Makes every outstanding ticket stale without issuing a new one.
	pub fn invalidate(&self) {
		self.begin();
	}

	pub fn is_current(&self, ticket: RequestTicket) -> bool {
		self.latest.get() == ticket.0
	}
}
