//! The `evogrid` command loop and text reports.
//!
//! The engine lives in `evogrid_core`; this crate only drives it and
//! prints what it finds.

pub mod app;

pub use evogrid_core::config::SimConfig;
pub use evogrid_core::World;
