//! Visual styling for the particle field.
//!
//! Colors are kept as plain RGBA and formatted to CSS strings at draw time.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0.0..=1.0`.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same hue with alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits the functional `rgba()` form so alpha survives formatting.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Particle field configuration.
///
/// Every field has a default, so a partial JSON object in the site config
/// only overrides what it names.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Number of particles, fixed for the lifetime of the field
	pub count: usize,
	/// Maximum absolute velocity per axis, in pixels per frame
	pub speed: f64,
	/// Minimum particle radius
	pub size_min: f64,
	/// Maximum particle radius (exclusive)
	pub size_max: f64,
	/// Minimum particle opacity
	pub opacity_min: f64,
	/// Maximum particle opacity (exclusive)
	pub opacity_max: f64,
	/// Hue shared by particles and links; alpha is ignored
	pub color: Color,
	/// Pairs closer than this are linked
	pub link_distance: f64,
	/// Link opacity at zero distance
	pub link_opacity: f64,
	/// Link stroke width
	pub link_width: f64,
	/// Quiet period before a resize is applied
	pub resize_debounce_ms: u32,
	/// Fixed RNG seed; entropy is used when absent
	pub seed: Option<u64>,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			count: 50,
			speed: 0.25,
			size_min: 1.0,
			size_max: 3.0,
			opacity_min: 0.2,
			opacity_max: 0.7,
			color: Color::rgb(99, 102, 241),
			link_distance: 100.0,
			link_opacity: 0.1,
			link_width: 1.0,
			resize_debounce_ms: 250,
			seed: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_css_keeps_alpha() {
		let c = Color::rgb(99, 102, 241).with_alpha(0.05);
		assert_eq!(c.to_css(), "rgba(99, 102, 241, 0.05)");
	}

	#[test]
	fn test_partial_style_keeps_defaults() {
		let style: FieldStyle =
			serde_json::from_str(r#"{ "count": 12, "color": { "r": 1, "g": 2, "b": 3 } }"#)
				.unwrap();

		assert_eq!(style.count, 12);
		assert_eq!(style.color, Color::rgb(1, 2, 3));
		assert_eq!(style.link_distance, 100.0);
		assert_eq!(style.link_opacity, 0.1);
		assert_eq!(style.resize_debounce_ms, 250);
		assert!(style.seed.is_none());
	}
}
