//! Site configuration read from the page.
//!
//! The page may embed a `<script id="site-config" type="application/json">`
//! element. Every field is optional; anything missing falls back to the
//! defaults below.

use log::{info, warn};
use serde::Deserialize;
use web_sys::HtmlScriptElement;

use crate::components::particle_field::FieldStyle;
use crate::dom;
use crate::page::typing::TypingConfig;

const CONFIG_ELEMENT_ID: &str = "site-config";

/// Top-level configuration for all page behavior.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Id of the element the particle canvas attaches to.
	pub particles_container: String,
	/// Background particle field.
	pub particles: FieldStyle,
	/// Hero typewriter settings.
	pub typing: TypingConfig,
	/// Where the project list is fetched from.
	pub projects_url: String,
	/// Id of the grid the project cards replace.
	pub projects_container: String,
	/// Enables the `.stat-number` count-up.
	pub stats: bool,
	/// Service worker script; `null` disables registration.
	pub service_worker: Option<String>,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			particles_container: "particles".to_string(),
			particles: FieldStyle::default(),
			typing: TypingConfig::default(),
			projects_url: "projects.json".to_string(),
			projects_container: "projects-grid".to_string(),
			stats: false,
			service_worker: Some("/sw.js".to_string()),
		}
	}
}

/// Parse a config document, falling back to defaults when it is malformed.
pub fn parse_site_config(json: &str) -> SiteConfig {
	match serde_json::from_str::<SiteConfig>(json) {
		Ok(config) => {
			info!("portfolio: loaded site config");
			config
		}
		Err(e) => {
			warn!("portfolio: failed to parse site config: {}", e);
			SiteConfig::default()
		}
	}
}

/// Load config from the `#site-config` script element, if present.
pub fn load_site_config() -> SiteConfig {
	dom::by_id::<HtmlScriptElement>(CONFIG_ELEMENT_ID)
		.and_then(|script| script.text().ok())
		.map(|json| parse_site_config(&json))
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_object_is_default() {
		let config = parse_site_config("{}");
		assert_eq!(config.particles_container, "particles");
		assert_eq!(config.projects_url, "projects.json");
		assert_eq!(config.particles.count, 50);
		assert_eq!(config.typing.char_delay_ms, 50);
		assert!(!config.stats);
		assert_eq!(config.service_worker.as_deref(), Some("/sw.js"));
	}

	#[test]
	fn test_nested_overrides() {
		let config = parse_site_config(
			r#"{
				"particles": { "count": 80, "seed": 42 },
				"typing": { "text": "hello" },
				"stats": true,
				"service_worker": null
			}"#,
		);
		assert_eq!(config.particles.count, 80);
		assert_eq!(config.particles.seed, Some(42));
		assert_eq!(config.particles.link_distance, 100.0);
		assert_eq!(config.typing.text, "hello");
		assert_eq!(config.typing.start_delay_ms, 1000);
		assert!(config.stats);
		assert!(config.service_worker.is_none());
	}

	#[test]
	fn test_malformed_falls_back() {
		let config = parse_site_config(r#"{ "particles": { "count": "many" } }"#);
		assert_eq!(config.particles.count, 50);
	}
}
