//! Leptos components mounted into page containers.

pub mod particle_field;
pub mod projects;
