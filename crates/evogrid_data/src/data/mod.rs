//! Core data structures for the evogrid simulation.

pub mod event;
pub mod genes;
pub mod grid;
pub mod organism;
