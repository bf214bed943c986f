//! Rate limiting for noisy browser events.
//!
//! [`Throttle`] is a pure leading-edge gate keyed on a millisecond clock.
//! [`Debounced`] wraps a browser timeout so a callback runs only after the
//! triggering events have been quiet for a while.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Leading-edge throttle: the first call passes, then calls are dropped until
/// `limit_ms` have elapsed.
#[derive(Clone, Debug)]
pub struct Throttle {
	limit_ms: f64,
	open_at: Option<f64>,
}

impl Throttle {
	/// A throttle that lets the first call through.
	pub fn new(limit_ms: f64) -> Self {
		Self {
			limit_ms,
			open_at: None,
		}
	}

	/// Whether a call at time `now_ms` should run.
	pub fn ready(&mut self, now_ms: f64) -> bool {
		match self.open_at {
			Some(open_at) if now_ms < open_at => false,
			_ => {
				self.open_at = Some(now_ms + self.limit_ms);
				true
			}
		}
	}
}

/// Current time from `performance.now()`, or 0 outside a browser.
pub fn now_ms() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or(0.0)
}

/// Wrap `f` so it only runs when called at least `limit_ms` after the last run.
pub fn throttled(limit_ms: f64, mut f: impl FnMut() + 'static) -> impl FnMut() + 'static {
	let mut gate = Throttle::new(limit_ms);
	move || {
		if gate.ready(now_ms()) {
			f();
		}
	}
}

/// A callback deferred until triggers stop arriving for `wait_ms`.
pub struct Debounced {
	callback: Closure<dyn FnMut()>,
	pending: Cell<Option<i32>>,
	wait_ms: i32,
}

impl Debounced {
	/// Wrap `f`; nothing runs until [`Debounced::trigger`] is called.
	pub fn new(wait_ms: u32, f: impl FnMut() + 'static) -> Rc<Self> {
		Rc::new(Self {
			callback: Closure::new(f),
			pending: Cell::new(None),
			wait_ms: wait_ms.min(i32::MAX as u32) as i32,
		})
	}

	/// Restart the quiet period.
	pub fn trigger(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(handle) = self.pending.take() {
			window.clear_timeout_with_handle(handle);
		}
		self.pending.set(
			window
				.set_timeout_with_callback_and_timeout_and_arguments_0(
					self.callback.as_ref().unchecked_ref(),
					self.wait_ms,
				)
				.ok(),
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_throttle_leading_edge() {
		let mut gate = Throttle::new(100.0);
		assert!(gate.ready(0.0));
		assert!(!gate.ready(10.0));
		assert!(!gate.ready(99.9));
		assert!(gate.ready(100.0));
		assert!(!gate.ready(150.0));
		assert!(gate.ready(250.0));
	}

	#[test]
	fn test_throttle_first_call_at_any_time() {
		let mut gate = Throttle::new(100.0);
		assert!(gate.ready(5_000.0));
	}
}
