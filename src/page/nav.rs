//! Navigation bar: scrolled styling, mobile menu and active-link tracking.

use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::timing::throttled;

/// Scroll depth past which the navbar switches to its compact style.
const SCROLLED_AT: f64 = 100.0;
/// Lead applied to the scroll position when picking the active section.
const ACTIVE_LEAD: f64 = 100.0;
const SCROLL_THROTTLE_MS: f64 = 100.0;

/// Vertical extent of a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
	/// Section element id.
	pub id: String,
	/// Offset from the top of the document.
	pub top: f64,
	/// Rendered height.
	pub height: f64,
}

/// Id of the section containing `pos`. Later sections win on overlap.
pub fn active_section(pos: f64, sections: &[SectionBounds]) -> Option<&str> {
	sections
		.iter()
		.rev()
		.find(|s| pos >= s.top && pos < s.top + s.height)
		.map(|s| s.id.as_str())
}

/// Attach scroll styling, the mobile menu toggle and link highlighting.
pub fn init() {
	let Some(window) = web_sys::window() else {
		return;
	};

	if let Some(navbar) = dom::query::<Element>(".navbar") {
		let mut on_scroll = throttled(SCROLL_THROTTLE_MS, move || {
			let _ = navbar
				.class_list()
				.toggle_with_force("scrolled", dom::scroll_y() > SCROLLED_AT);
		});
		dom::listen(&window, "scroll", move |_| on_scroll());
	}

	init_menu();

	let sections: Vec<HtmlElement> = dom::query_all("section[id]");
	let nav_items: Vec<Element> = dom::query_all(".nav-link[href^=\"#\"]");
	let mut on_scroll = throttled(SCROLL_THROTTLE_MS, move || {
		let bounds: Vec<SectionBounds> = sections
			.iter()
			.map(|s| SectionBounds {
				id: s.id(),
				top: s.offset_top() as f64,
				height: s.offset_height() as f64,
			})
			.collect();
		let Some(id) = active_section(dom::scroll_y() + ACTIVE_LEAD, &bounds) else {
			return;
		};
		let href = format!("#{id}");
		for item in &nav_items {
			let is_active = item.get_attribute("href").as_deref() == Some(href.as_str());
			let _ = item.class_list().toggle_with_force("active", is_active);
		}
	});
	dom::listen(&window, "scroll", move |_| on_scroll());
}

/// Hamburger toggle, closed again by any nav link click.
fn init_menu() {
	let (Some(toggle), Some(links)) = (
		dom::by_id::<Element>("nav-toggle"),
		dom::query::<Element>(".nav-links"),
	) else {
		return;
	};

	let (t, l) = (toggle.clone(), links.clone());
	dom::listen(&toggle, "click", move |_| {
		let _ = t.class_list().toggle("active");
		let _ = l.class_list().toggle("active");
	});

	for item in dom::query_all::<Element>(".nav-link") {
		let (t, l) = (toggle.clone(), links.clone());
		dom::listen(&item, "click", move |_| {
			let _ = t.class_list().remove_1("active");
			let _ = l.class_list().remove_1("active");
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn section(id: &str, top: f64, height: f64) -> SectionBounds {
		SectionBounds {
			id: id.to_string(),
			top,
			height,
		}
	}

	#[test]
	fn test_active_section() {
		let sections = vec![
			section("home", 0.0, 800.0),
			section("about", 800.0, 600.0),
			section("projects", 1400.0, 1000.0),
		];

		assert_eq!(active_section(100.0, &sections), Some("home"));
		assert_eq!(active_section(800.0, &sections), Some("about"));
		assert_eq!(active_section(1399.9, &sections), Some("about"));
		assert_eq!(active_section(2399.0, &sections), Some("projects"));
		assert_eq!(active_section(2400.0, &sections), None);
	}

	#[test]
	fn test_overlap_prefers_later_section() {
		let sections = vec![section("a", 0.0, 500.0), section("b", 400.0, 500.0)];
		assert_eq!(active_section(450.0, &sections), Some("b"));
	}
}
