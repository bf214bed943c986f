//! Drawing for the particle field.
//!
//! Each frame is two passes over a cleared surface:
//! 1. Particles, advanced by one step and filled as circles
//! 2. Links between every pair closer than the link distance
//!
//! Drawing goes through the [`Surface`] trait so the frame logic is the same
//! against a real canvas and a recording surface in tests.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ParticleFieldState;
use super::theme::FieldStyle;

/// Minimal 2D drawing target used by the field.
pub trait Surface {
	/// Erase the whole drawing area.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a circle centered on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
	/// Stroke a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.stroke();
	}
}

/// Run one frame step: clear, advance, draw particles, draw links.
///
/// Returns `false` without touching the surface once the field is torn down,
/// which tells the caller not to schedule another frame.
pub fn frame<S: Surface>(state: &mut ParticleFieldState, surface: &mut S, style: &FieldStyle) -> bool {
	if !state.is_running() {
		return false;
	}

	surface.clear(state.width, state.height);
	state.tick();
	draw_particles(state, surface);
	draw_links(state, surface, style);
	true
}

fn draw_particles<S: Surface>(state: &ParticleFieldState, surface: &mut S) {
	for p in &state.particles {
		surface.fill_circle(p.x, p.y, p.size, &p.color.to_css());
	}
}

fn draw_links<S: Surface>(state: &ParticleFieldState, surface: &mut S, style: &FieldStyle) {
	for link in state.links() {
		let (a, b) = (&state.particles[link.a], &state.particles[link.b]);
		surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			style.link_width,
			&style.color.with_alpha(link.opacity).to_css(),
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::particles::Particle;
	use crate::components::particle_field::theme::Color;

	#[derive(Debug, PartialEq)]
	enum Call {
		Clear(f64, f64),
		Circle(f64, f64, f64, String),
		Line((f64, f64), (f64, f64), f64, String),
	}

	#[derive(Default)]
	struct Recorder {
		calls: Vec<Call>,
	}

	impl Recorder {
		fn lines(&self) -> Vec<&Call> {
			self.calls.iter().filter(|c| matches!(c, Call::Line(..))).collect()
		}
	}

	impl Surface for Recorder {
		fn clear(&mut self, width: f64, height: f64) {
			self.calls.push(Call::Clear(width, height));
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
			self.calls.push(Call::Circle(x, y, radius, color.to_string()));
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
			self.calls.push(Call::Line(from, to, width, color.to_string()));
		}
	}

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			color: Color::rgba(99, 102, 241, 0.5),
		}
	}

	fn pair_state(gap: f64, style: &FieldStyle) -> ParticleFieldState {
		ParticleFieldState::from_particles(vec![still(200.0, 200.0), still(200.0 + gap, 200.0)], style, 800.0, 600.0)
	}

	#[test]
	fn test_frame_draw_order() {
		let style = FieldStyle::default();
		let mut state = pair_state(50.0, &style);
		let mut surface = Recorder::default();

		assert!(frame(&mut state, &mut surface, &style));

		assert_eq!(surface.calls[0], Call::Clear(800.0, 600.0));
		assert!(matches!(surface.calls[1], Call::Circle(..)));
		assert!(matches!(surface.calls[2], Call::Circle(..)));
		assert!(matches!(surface.calls[3], Call::Line(..)));
		assert_eq!(surface.calls.len(), 4);
	}

	#[test]
	fn test_pair_at_fifty_draws_half_opacity_line() {
		let style = FieldStyle {
			seed: Some(1),
			..FieldStyle::default()
		};
		let mut state = pair_state(50.0, &style);
		let mut surface = Recorder::default();

		frame(&mut state, &mut surface, &style);

		let lines = surface.lines();
		assert_eq!(lines.len(), 1);
		assert_eq!(
			*lines[0],
			Call::Line((200.0, 200.0), (250.0, 200.0), 1.0, "rgba(99, 102, 241, 0.05)".to_string())
		);
	}

	#[test]
	fn test_pair_at_hundred_fifty_draws_nothing() {
		let style = FieldStyle::default();
		let mut state = pair_state(150.0, &style);
		let mut surface = Recorder::default();

		frame(&mut state, &mut surface, &style);

		assert!(surface.lines().is_empty());
	}

	#[test]
	fn test_particle_fill_uses_spawn_color() {
		let style = FieldStyle::default();
		let mut state = pair_state(500.0, &style);
		let mut surface = Recorder::default();

		frame(&mut state, &mut surface, &style);

		assert_eq!(
			surface.calls[1],
			Call::Circle(200.0, 200.0, 2.0, "rgba(99, 102, 241, 0.5)".to_string())
		);
	}

	#[test]
	fn test_no_draws_after_teardown() {
		let style = FieldStyle {
			seed: Some(99),
			..FieldStyle::default()
		};
		let mut state = ParticleFieldState::new(&style, 800.0, 600.0);
		let mut surface = Recorder::default();

		for _ in 0..10 {
			assert!(frame(&mut state, &mut surface, &style));
		}
		let drawn = surface.calls.len();
		assert!(drawn > 0);

		state.set_pending_frame(3);
		assert_eq!(state.teardown(), Some(3));

		for _ in 0..10 {
			assert!(!frame(&mut state, &mut surface, &style));
		}
		assert_eq!(surface.calls.len(), drawn);
	}
}
