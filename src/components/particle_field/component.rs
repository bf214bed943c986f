//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a non-interactive canvas filling its container. An
//! animation loop runs via `requestAnimationFrame`, stepping the simulation
//! and redrawing each frame, until the page unloads.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use super::render;
use super::state::ParticleFieldState;
use super::theme::FieldStyle;
use crate::dom;
use crate::timing::Debounced;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Renders the particle field on a canvas sized to the viewport.
///
/// The canvas is absolutely positioned at the top-left of its container and
/// ignores pointer events, so it can sit behind page content.
#[component]
pub fn ParticleFieldCanvas(#[prop(optional)] style: FieldStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ParticleFieldState>>> = Rc::new(RefCell::new(None));
	let animate: Callback = Rc::new(RefCell::new(None));
	let resize_cb: Callback = Rc::new(RefCell::new(None));
	let unload_cb: Callback = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(mut ctx) = context_2d(&canvas) else {
			warn!("portfolio: 2d context unavailable, particle field disabled");
			return;
		};

		let (w, h) = dom::viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		*state.borrow_mut() = Some(ParticleFieldState::new(&style, w, h));
		info!("portfolio: particle field started with {} particles", style.count);

		let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
		let apply_resize = Debounced::new(style.resize_debounce_ms, move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = dom::viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(s) = state_resize.borrow_mut().as_mut() {
				s.resize(nw, nh);
			}
		});
		*resize_cb.borrow_mut() = Some(Closure::new(move || apply_resize.trigger()));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let state_unload = state.clone();
		*unload_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(s) = state_unload.borrow_mut().as_mut() {
				cancel_frame(s.teardown());
				debug!("portfolio: particle field torn down");
			}
		}));
		if let Some(ref cb) = *unload_cb.borrow() {
			let _ = window.add_event_listener_with_callback("beforeunload", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, style_anim) = (state.clone(), animate.clone(), style.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			let mut guard = state_anim.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return;
			};
			s.frame_started();
			if !render::frame(s, &mut ctx, &style_anim) {
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(handle) = request_frame(cb) {
					s.set_pending_frame(handle);
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			if let Some(handle) = request_frame(cb) {
				if let Some(s) = state.borrow_mut().as_mut() {
					s.set_pending_frame(handle);
				}
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: absolute; top: 0; left: 0; pointer-events: none;"
		/>
	}
}

/// Mount the particle field into the element with id `container_id`.
///
/// A missing container is not an error: the field is decorative, so the call
/// just does nothing.
pub fn mount(container_id: &str, style: FieldStyle) {
	let Some(container) = dom::by_id::<HtmlElement>(container_id) else {
		debug!("portfolio: no #{container_id} element, particle field skipped");
		return;
	};
	leptos::mount::mount_to(container, move || view! { <ParticleFieldCanvas style=style /> }).forget();
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	let window: Window = web_sys::window()?;
	window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

fn cancel_frame(handle: Option<i32>) {
	if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
		let _ = window.cancel_animation_frame(handle);
	}
}
