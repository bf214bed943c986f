//! Particle field simulation state and frame lifecycle.
//!
//! Owns the particle collection, the surface bounds, and the handle of the
//! single outstanding animation frame. Nothing here touches the DOM, so the
//! whole simulation runs the same under test as in the browser.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::particles::Particle;
use super::theme::FieldStyle;

/// A connection between two nearby particles.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle (always the smaller index).
	pub a: usize,
	/// Index of the second particle.
	pub b: usize,
	/// Center-to-center distance.
	pub distance: f64,
	/// Stroke alpha, falling linearly from the style maximum at distance 0
	/// to 0 at the link distance.
	pub opacity: f64,
}

/// Core field state, created once when the canvas mounts and mutated by the
/// animation loop every frame.
pub struct ParticleFieldState {
	/// Live particles; the count never changes after creation.
	pub particles: Vec<Particle>,
	/// Field width in CSS pixels.
	pub width: f64,
	/// Field height in CSS pixels.
	pub height: f64,
	link_distance: f64,
	link_opacity: f64,
	pending_frame: Option<i32>,
	torn_down: bool,
}

impl ParticleFieldState {
	/// Spawn `style.count` particles, seeded from `style.seed` when present.
	pub fn new(style: &FieldStyle, width: f64, height: f64) -> Self {
		let mut rng = match style.seed {
			Some(seed) => SmallRng::seed_from_u64(seed),
			None => SmallRng::from_entropy(),
		};
		Self::with_rng(style, width, height, &mut rng)
	}

	/// Like [`ParticleFieldState::new`] but drawing from the given generator.
	pub fn with_rng<R: Rng>(style: &FieldStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::spawn(rng, style, width, height))
			.collect();
		Self::from_particles(particles, style, width, height)
	}

	/// Build a field around existing particles.
	pub fn from_particles(particles: Vec<Particle>, style: &FieldStyle, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
			link_distance: style.link_distance,
			link_opacity: style.link_opacity,
			pending_frame: None,
			torn_down: false,
		}
	}

	/// Advance every particle by one frame.
	pub fn tick(&mut self) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.step(width, height);
		}
	}

	/// Stroke alpha for a pair at `distance`, or `None` when too far apart.
	pub fn link_opacity(&self, distance: f64) -> Option<f64> {
		(distance < self.link_distance)
			.then(|| self.link_opacity * (1.0 - distance / self.link_distance))
	}

	/// All links between distinct particle pairs, in `(i, j)` order with `i < j`.
	///
	/// Checks every pair. The particle count is small and fixed, so no spatial
	/// index is kept.
	pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
		self.particles.iter().enumerate().flat_map(move |(a, pa)| {
			self.particles[a + 1..]
				.iter()
				.enumerate()
				.filter_map(move |(offset, pb)| {
					let distance = pa.distance_to(pb);
					self.link_opacity(distance).map(|opacity| Link {
						a,
						b: a + 1 + offset,
						distance,
						opacity,
					})
				})
		})
	}

	/// Update surface bounds. Particles keep their positions and velocities.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// False once [`ParticleFieldState::teardown`] has run.
	pub fn is_running(&self) -> bool {
		!self.torn_down
	}

	/// Record the handle of the frame request just issued.
	pub fn set_pending_frame(&mut self, handle: i32) {
		self.pending_frame = Some(handle);
	}

	/// Forget the pending frame once its callback starts running.
	pub fn frame_started(&mut self) {
		self.pending_frame = None;
	}

	/// Handle of the scheduled animation frame, if any.
	pub fn pending_frame(&self) -> Option<i32> {
		self.pending_frame
	}

	/// Stop the loop and hand back the outstanding frame request for
	/// cancellation. Idempotent.
	pub fn teardown(&mut self) -> Option<i32> {
		self.torn_down = true;
		self.pending_frame.take()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::theme::Color;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 1.0,
			color: Color::rgb(99, 102, 241),
		}
	}

	fn seeded(count: usize, seed: u64) -> ParticleFieldState {
		let style = FieldStyle {
			count,
			seed: Some(seed),
			..FieldStyle::default()
		};
		ParticleFieldState::new(&style, 640.0, 480.0)
	}

	#[test]
	fn test_seed_is_reproducible() {
		let a = seeded(50, 42);
		let b = seeded(50, 42);
		assert_eq!(a.particles, b.particles);
		assert_eq!(a.particles.len(), 50);
	}

	#[test]
	fn test_positions_stay_in_bounds() {
		let mut state = seeded(50, 3);
		let max_step = FieldStyle::default().speed;

		for _ in 0..20_000 {
			state.tick();
			for p in &state.particles {
				assert!(p.x >= -max_step && p.x <= state.width + max_step);
				assert!(p.y >= -max_step && p.y <= state.height + max_step);
			}
		}
	}

	#[test]
	fn test_count_constant_across_ticks_and_resizes() {
		let mut state = seeded(50, 9);
		for i in 0..100 {
			state.tick();
			if i % 10 == 0 {
				state.resize(100.0 + i as f64, 200.0);
			}
		}
		assert_eq!(state.particles.len(), 50);
	}

	#[test]
	fn test_resize_keeps_particles() {
		let mut state = seeded(50, 11);
		let before = state.particles.clone();

		state.resize(1920.0, 1080.0);

		assert_eq!(state.particles, before);
		assert_eq!((state.width, state.height), (1920.0, 1080.0));
	}

	#[test]
	fn test_link_opacity_bounds() {
		let state = ParticleFieldState::from_particles(vec![], &FieldStyle::default(), 100.0, 100.0);
		assert_eq!(state.link_opacity(0.0), Some(0.1));
		assert_eq!(state.link_opacity(100.0), None);
		assert!(state.link_opacity(99.999).unwrap() > 0.0);
	}

	#[test]
	fn test_pair_at_half_distance() {
		let style = FieldStyle::default();
		let state = ParticleFieldState::from_particles(vec![at(100.0, 100.0), at(150.0, 100.0)], &style, 400.0, 400.0);

		let links: Vec<_> = state.links().collect();
		assert_eq!(links.len(), 1);
		assert_eq!((links[0].a, links[0].b), (0, 1));
		assert!((links[0].opacity - 0.05).abs() < 1e-12);
	}

	#[test]
	fn test_far_pair_not_linked() {
		let style = FieldStyle::default();
		let state = ParticleFieldState::from_particles(vec![at(100.0, 100.0), at(250.0, 100.0)], &style, 400.0, 400.0);
		assert_eq!(state.links().count(), 0);
	}

	#[test]
	fn test_links_match_all_pairs() {
		let state = seeded(50, 5);
		let links: Vec<_> = state.links().collect();

		let mut expected = 0;
		for i in 0..state.particles.len() {
			for j in i + 1..state.particles.len() {
				if state.particles[i].distance_to(&state.particles[j]) < 100.0 {
					expected += 1;
				}
			}
		}
		assert_eq!(links.len(), expected);
		assert!(links.iter().all(|l| l.a < l.b && l.distance < 100.0));
	}

	#[test]
	fn test_teardown_returns_pending_once() {
		let mut state = seeded(1, 1);
		state.set_pending_frame(7);
		assert_eq!(state.pending_frame(), Some(7));

		assert_eq!(state.teardown(), Some(7));
		assert!(!state.is_running());
		assert_eq!(state.teardown(), None);
	}
}
