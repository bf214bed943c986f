//! Visibility-triggered effects: section reveals, skill bar fills and stat
//! counters.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;

const REVEAL_SELECTOR: &str = ".section, .project-card, .timeline-item, .skill-item, .contact-item";
const COUNTER_DURATION_MS: f64 = 2000.0;
const COUNTER_TICK_MS: i32 = 16;

/// Fade and slide elements in the first time they scroll into view.
pub fn init_scroll_reveal() {
	let Some(observer) = dom::visibility_observer(0.1, Some("0px 0px -50px 0px"), |target, _| {
		if let Ok(el) = target.dyn_into::<HtmlElement>() {
			dom::set_style(&el, "opacity", "1");
			dom::set_style(&el, "transform", "translateY(0)");
		}
	}) else {
		return;
	};

	let elements: Vec<HtmlElement> = dom::query_all(REVEAL_SELECTOR);
	debug!("portfolio: revealing {} elements on scroll", elements.len());
	for el in &elements {
		dom::set_style(el, "opacity", "0");
		dom::set_style(el, "transform", "translateY(30px)");
		dom::set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
		observer.observe(el);
	}
}

/// CSS transform for a skill bar at `level` percent.
pub fn skill_transform(level: &str) -> Option<String> {
	let level: f64 = level.trim().parse().ok()?;
	Some(format!("scaleX({})", level / 100.0))
}

/// Stretch each `.skill-bar` to its `data-level` once half visible.
pub fn init_skill_bars() {
	let Some(observer) = dom::visibility_observer(0.5, None, |target, observer| {
		let transform = target
			.get_attribute("data-level")
			.and_then(|level| skill_transform(&level));
		if let (Some(transform), Ok(bar)) = (transform, target.clone().dyn_into::<HtmlElement>()) {
			dom::set_style(&bar, "transform", &transform);
		}
		observer.unobserve(&target);
	}) else {
		return;
	};

	for bar in dom::query_all::<Element>(".skill-bar") {
		observer.observe(&bar);
	}
}

/// Linear count-up from zero to a target in fixed increments.
#[derive(Clone, Debug)]
pub struct Counter {
	target: f64,
	step: f64,
	current: f64,
}

impl Counter {
	/// Count up to `target` over roughly `duration_ms`, one step per `tick_ms`.
	pub fn new(target: f64, duration_ms: f64, tick_ms: f64) -> Self {
		Self {
			target,
			step: target / (duration_ms / tick_ms),
			current: 0.0,
		}
	}

	/// Advance one tick. Returns the value to display and whether the target
	/// was reached.
	pub fn tick(&mut self) -> (i64, bool) {
		self.current += self.step;
		let done = self.current >= self.target;
		if done {
			self.current = self.target;
		}
		(self.current.floor() as i64, done)
	}
}

/// Count `.stat-number` elements up to their `data-target` once half visible.
pub fn init_stats_counter() {
	let Some(observer) = dom::visibility_observer(0.5, None, |target, observer| {
		observer.unobserve(&target);
		let Some(goal) = target
			.get_attribute("data-target")
			.and_then(|t| t.trim().parse::<i64>().ok())
		else {
			return;
		};
		animate_counter(target, goal as f64);
	}) else {
		return;
	};

	for stat in dom::query_all::<Element>(".stat-number") {
		observer.observe(&stat);
	}
}

fn animate_counter(el: Element, goal: f64) {
	let mut counter = Counter::new(goal, COUNTER_DURATION_MS, COUNTER_TICK_MS as f64);
	let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let handle_inner = handle.clone();
	handle.set(dom::set_interval(COUNTER_TICK_MS, move || {
		let (value, done) = counter.tick();
		el.set_text_content(Some(&value.to_string()));
		if done {
			if let Some(h) = handle_inner.take() {
				dom::clear_interval(h);
			}
		}
	}));
}
