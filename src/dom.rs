//! Thin helpers over `web_sys` for page glue.
//!
//! Every lookup returns an `Option`: a missing element disables the feature
//! that needed it instead of failing the page.

use js_sys::{Array, Function};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, Window,
};

/// The current document, if running in a browser.
pub fn document() -> Option<Document> {
	web_sys::window()?.document()
}

/// Look up an element by id and cast it to the expected type.
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
	document()?.get_element_by_id(id)?.dyn_into().ok()
}

/// First element matching `selector`, cast to the expected type.
pub fn query<T: JsCast>(selector: &str) -> Option<T> {
	document()?.query_selector(selector).ok()??.dyn_into().ok()
}

/// All elements matching `selector` that cast to the expected type.
pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
	let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into().ok())
		.collect()
}

/// Inner width and height of the window.
pub fn viewport_size(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

/// Vertical scroll offset, 0 outside a browser.
pub fn scroll_y() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

/// Attach a listener that lives for the rest of the page.
pub fn listen(target: &EventTarget, event: &str, f: impl FnMut(Event) + 'static) {
	let cb = Closure::<dyn FnMut(Event)>::new(f);
	let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
	cb.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
	let cb = Closure::once_into_js(f);
	web_sys::window()?
		.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref::<Function>(), ms)
		.ok()
}

/// Run `f` every `ms` milliseconds for the rest of the page, or until
/// [`clear_interval`] is called with the returned handle.
pub fn set_interval(ms: i32, f: impl FnMut() + 'static) -> Option<i32> {
	let cb = Closure::<dyn FnMut()>::new(f);
	let handle = web_sys::window()?
		.set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
		.ok();
	cb.forget();
	handle
}

/// Cancel an interval started with [`set_interval`].
pub fn clear_interval(handle: i32) {
	if let Some(window) = web_sys::window() {
		window.clear_interval_with_handle(handle);
	}
}

/// Set one inline style property, ignoring failures.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
	let _ = el.style().set_property(property, value);
}

/// Build an observer calling `on_visible` for each target entering view.
///
/// The observer is handed to the callback so one-shot effects can
/// `unobserve` their target.
pub fn visibility_observer(
	threshold: f64,
	root_margin: Option<&str>,
	mut on_visible: impl FnMut(Element, &IntersectionObserver) + 'static,
) -> Option<IntersectionObserver> {
	let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					on_visible(entry.target(), &observer);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(threshold));
	if let Some(margin) = root_margin {
		options.set_root_margin(margin);
	}
	let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options).ok()?;
	cb.forget();
	Some(observer)
}
