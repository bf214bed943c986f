//! Page glue wired onto the static markup.
//!
//! Each feature looks up the elements it needs and quietly does nothing when
//! they are absent, so the same build works on pages that only carry some of
//! the sections.

pub mod contact;
pub mod cursor;
pub mod loading;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod typing;
pub mod worker;

use web_sys::Element;

use crate::config::SiteConfig;
use crate::dom;

/// Attach every page behavior.
pub fn init(config: &SiteConfig) {
	loading::init();
	nav::init();
	typing::init(&config.typing);
	reveal::init_skill_bars();
	if config.stats {
		reveal::init_stats_counter();
	}
	scroll::init_smooth_scrolling();
	scroll::init_back_to_top();
	contact::init_contact_form();
	reveal::init_scroll_reveal();
	cursor::init();
	update_year();
	if let Some(url) = &config.service_worker {
		worker::init(url);
	}
}

/// Write the current year into `#year`.
pub fn update_year() {
	if let Some(el) = dom::by_id::<Element>("year") {
		let year = js_sys::Date::new_0().get_full_year();
		el.set_text_content(Some(&year.to_string()));
	}
}
