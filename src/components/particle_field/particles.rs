//! Decorative particles and their spawning.

use rand::Rng;

use super::theme::{Color, FieldStyle};

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in CSS pixels.
	pub x: f64,
	/// Vertical position in CSS pixels.
	pub y: f64,
	/// Horizontal velocity per frame.
	pub vx: f64,
	/// Vertical velocity per frame.
	pub vy: f64,
	/// Circle radius.
	pub size: f64,
	/// Fill color, alpha baked in at spawn
	pub color: Color,
}

impl Particle {
	/// Spawn a particle uniformly inside `width` x `height`.
	pub fn spawn<R: Rng>(rng: &mut R, style: &FieldStyle, width: f64, height: f64) -> Self {
		let opacity = sample(rng, style.opacity_min, style.opacity_max);

		Self {
			x: sample(rng, 0.0, width),
			y: sample(rng, 0.0, height),
			vx: sample(rng, -style.speed, style.speed),
			vy: sample(rng, -style.speed, style.speed),
			size: sample(rng, style.size_min, style.size_max),
			color: style.color.with_alpha(opacity),
		}
	}

	/// Advance one frame and bounce off the walls of `[0, width] x [0, height]`.
	///
	/// Only a velocity pointing further outside is inverted, so a particle left
	/// outside by a shrinking viewport heads back in instead of jittering.
	pub fn step(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if (self.x < 0.0 && self.vx < 0.0) || (self.x > width && self.vx > 0.0) {
			self.vx = -self.vx;
		}
		if (self.y < 0.0 && self.vy < 0.0) || (self.y > height && self.vy > 0.0) {
			self.vy = -self.vy;
		}
	}

	/// Euclidean distance between the two centers.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Uniform sample in `[lo, hi)`, collapsing to `lo` for an empty range.
fn sample<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			size: 1.0,
			color: Color::rgb(0, 0, 0),
		}
	}

	#[test]
	fn test_spawn_within_ranges() {
		let style = FieldStyle::default();
		let mut rng = SmallRng::seed_from_u64(7);

		for _ in 0..500 {
			let p = Particle::spawn(&mut rng, &style, 800.0, 600.0);
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
			assert!((1.0..3.0).contains(&p.size));
			assert!((0.2..0.7).contains(&p.color.a));
			assert_eq!((p.color.r, p.color.g, p.color.b), (99, 102, 241));
		}
	}

	#[test]
	fn test_spawn_on_empty_surface() {
		let mut rng = SmallRng::seed_from_u64(1);
		let p = Particle::spawn(&mut rng, &FieldStyle::default(), 0.0, 0.0);
		assert_eq!((p.x, p.y), (0.0, 0.0));
	}

	#[test]
	fn test_bounce_flips_only_crossed_axis() {
		let mut p = particle(99.9, 50.0, 0.25, 0.1);
		p.step(100.0, 100.0);
		assert!(p.vx < 0.0);
		assert_eq!(p.vy, 0.1);

		let mut p = particle(50.0, 0.1, -0.1, -0.25);
		p.step(100.0, 100.0);
		assert_eq!(p.vx, -0.1);
		assert_eq!(p.vy, 0.25);
	}

	#[test]
	fn test_bounce_is_lossless() {
		let mut p = particle(0.1, 50.0, -0.2, 0.0);
		p.step(100.0, 100.0);
		assert_eq!(p.vx, 0.2);
		assert!((p.x - -0.1).abs() < 1e-12);
	}

	#[test]
	fn test_outside_particle_heads_back() {
		// Viewport shrank underneath it
		let mut p = particle(500.0, 50.0, -0.2, 0.0);
		p.step(100.0, 100.0);
		assert_eq!(p.vx, -0.2);
		p.step(100.0, 100.0);
		assert_eq!(p.vx, -0.2);
		assert!(p.x < 500.0);
	}

	#[test]
	fn test_stranded_particle_reenters_field() {
		let mut p = particle(500.0, 50.0, 0.2, 0.0);
		let mut steps = 0;
		while p.x > 100.0 && steps < 5000 {
			p.step(100.0, 100.0);
			steps += 1;
		}
		assert!(p.x <= 100.0);
		assert!(p.vx < 0.0);
	}

	#[test]
	fn test_distance() {
		let a = particle(0.0, 0.0, 0.0, 0.0);
		let b = particle(30.0, 40.0, 0.0, 0.0);
		assert_eq!(a.distance_to(&b), 50.0);
	}
}
