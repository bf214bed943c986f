//! Project grid loaded from a static JSON file.

mod component;
mod tech;
mod types;

pub use component::{ProjectGrid, mount};
pub use tech::{animation_delay, tech_tags};
pub use types::{Project, ProjectLink};
