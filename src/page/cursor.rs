//! Custom cursor dot trailing the mouse.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use crate::dom;

/// Fraction of the remaining gap closed per frame.
const FOLLOW: f64 = 0.1;
const DOT_SIZE: f64 = 20.0;

const DOT_CSS: &str = "position: fixed; width: 20px; height: 20px; background: var(--primary); \
	border-radius: 50%; pointer-events: none; z-index: 9999; mix-blend-mode: difference; \
	transition: transform 0.1s ease; opacity: 0;";

/// Eased follower position.
#[derive(Clone, Debug, Default)]
pub struct CursorTrail {
	target: (f64, f64),
	pos: (f64, f64),
}

impl CursorTrail {
	/// Move the target the dot eases toward.
	pub fn point_at(&mut self, x: f64, y: f64) {
		self.target = (x, y);
	}

	/// Move one frame toward the mouse and return the new position.
	pub fn tick(&mut self) -> (f64, f64) {
		self.pos.0 += (self.target.0 - self.pos.0) * FOLLOW;
		self.pos.1 += (self.target.1 - self.pos.1) * FOLLOW;
		self.pos
	}
}

/// Create the cursor dot and start following the pointer.
pub fn init() {
	let Some(document) = dom::document() else {
		return;
	};
	let Some(body) = document.body() else {
		return;
	};
	let Some(dot) = document
		.create_element("div")
		.ok()
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};
	dot.set_class_name("custom-cursor");
	dot.style().set_css_text(DOT_CSS);
	if body.append_child(&dot).is_err() {
		return;
	}

	let trail = Rc::new(RefCell::new(CursorTrail::default()));

	let (trail_move, dot_move) = (trail.clone(), dot.clone());
	dom::listen(&document, "mousemove", move |ev| {
		let Ok(ev) = ev.dyn_into::<MouseEvent>() else {
			return;
		};
		trail_move
			.borrow_mut()
			.point_at(ev.client_x() as f64, ev.client_y() as f64);
		dom::set_style(&dot_move, "opacity", "1");
	});

	let dot_leave = dot.clone();
	dom::listen(&document, "mouseleave", move |_| dom::set_style(&dot_leave, "opacity", "0"));

	// Runs for the life of the page; the closure keeps itself alive through
	// its own handle.
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();
	*animate.borrow_mut() = Some(Closure::new(move || {
		let (x, y) = trail.borrow_mut().tick();
		dom::set_style(&dot, "left", &format!("{}px", x - DOT_SIZE / 2.0));
		dom::set_style(&dot, "top", &format!("{}px", y - DOT_SIZE / 2.0));
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let (Some(window), Some(cb)) = (web_sys::window(), animate.borrow().as_ref()) {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}
