//! Loading screen fade-out after the page finishes loading.

use web_sys::HtmlElement;

use crate::dom;

/// Time the loading screen stays up after `load`.
const HOLD_MS: i32 = 1500;
/// Length of the CSS fade before the element leaves layout.
const FADE_MS: i32 = 500;

/// Fade out `#loading-screen` shortly after the page loads.
pub fn init() {
	let (Some(window), Some(screen)) = (web_sys::window(), dom::by_id::<HtmlElement>("loading-screen")) else {
		return;
	};

	dom::listen(&window, "load", move |_| {
		let screen = screen.clone();
		dom::set_timeout(HOLD_MS, move || {
			let _ = screen.class_list().add_1("hidden");
			dom::set_timeout(FADE_MS, move || dom::set_style(&screen, "display", "none"));
		});
	});
}
