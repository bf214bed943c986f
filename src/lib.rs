//! portfolio-site: client-side behavior for a single-page portfolio.
//!
//! This crate enhances static portfolio markup from WASM: a decorative
//! particle field behind the hero, a project grid loaded from JSON, and the
//! page glue around them (navigation, typing effect, reveals, contact form).

use log::{Level, info};

// Only pulled in to enable its `js` feature for browser entropy.
use getrandom as _;

pub mod components;
pub mod config;
pub mod dom;
pub mod page;
pub mod timing;

pub use components::particle_field::{FieldStyle, ParticleFieldCanvas, ParticleFieldState};
pub use components::projects::{Project, ProjectGrid, ProjectLink};
pub use config::{SiteConfig, load_site_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Wire every behavior onto the current page.
pub fn start() {
	let config = load_site_config();
	components::particle_field::mount(&config.particles_container, config.particles.clone());
	components::projects::mount(&config.projects_container, config.projects_url.clone());
	page::init(&config);
	info!("portfolio: page initialized");
}

/// Whether a `document.readyState` value means parsing is still underway.
fn still_parsing(ready_state: &str) -> bool {
	ready_state == "loading"
}

/// Call [`start`] once the DOM is parsed, right away if it already is.
pub fn run() {
	let Some(document) = dom::document() else {
		return;
	};
	if still_parsing(&document.ready_state()) {
		dom::listen(&document, "DOMContentLoaded", |_| start());
	} else {
		start();
	}
}
