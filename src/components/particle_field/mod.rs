//! Decorative particle field.
//!
//! Renders drifting particles on a full-viewport canvas with:
//! - Wall-bounce movement at a fixed step per display frame
//! - Fading links between every pair of nearby particles
//! - Debounced resize that keeps particle positions
//! - Cancellation of the pending frame on page unload
//!
//! # Example
//!
//! ```ignore
//! use portfolio_site::{FieldStyle, ParticleFieldCanvas};
//!
//! view! { <ParticleFieldCanvas style=FieldStyle::default() /> }
//! ```

mod component;
mod particles;
mod render;
mod state;
pub mod theme;

pub use component::{ParticleFieldCanvas, mount};
pub use particles::Particle;
pub use render::{Surface, frame};
pub use state::{Link, ParticleFieldState};
pub use theme::{Color, FieldStyle};
