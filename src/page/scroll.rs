//! In-page anchor scrolling and the back-to-top button.

use web_sys::{Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::timing::throttled;

/// Height of the fixed header, kept clear when jumping to a section.
const HEADER_OFFSET: f64 = 80.0;
/// Scroll depth after which the back-to-top button shows.
const BACK_TO_TOP_AT: f64 = 500.0;

/// Document offset to scroll to so a section starts below the header.
pub fn anchor_scroll_top(section_top: f64) -> f64 {
	section_top - HEADER_OFFSET
}

fn smooth_scroll_to(top: f64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// Route `a[href^="#"]` clicks through a smooth scroll.
pub fn init_smooth_scrolling() {
	for link in dom::query_all::<Element>("a[href^=\"#\"]") {
		let href = link.get_attribute("href").unwrap_or_default();
		dom::listen(&link, "click", move |ev: Event| {
			ev.prevent_default();
			if let Some(section) = dom::query::<HtmlElement>(&href) {
				smooth_scroll_to(anchor_scroll_top(section.offset_top() as f64));
			}
		});
	}
}

/// Show `.back-to-top` past 500px of scroll and scroll home on click.
pub fn init_back_to_top() {
	let (Some(window), Some(button)) = (web_sys::window(), dom::by_id::<Element>("back-to-top")) else {
		return;
	};

	let b = button.clone();
	let mut on_scroll = throttled(100.0, move || {
		let _ = b
			.class_list()
			.toggle_with_force("visible", dom::scroll_y() > BACK_TO_TOP_AT);
	});
	dom::listen(&window, "scroll", move |_| on_scroll());
	dom::listen(&button, "click", |_| smooth_scroll_to(0.0));
}
