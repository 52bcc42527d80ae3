//! Rendering helpers shared by components

pub mod bars;
