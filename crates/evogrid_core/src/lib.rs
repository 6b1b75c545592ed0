//! # Evogrid Core
//!
//! The daily simulation engine for evogrid: a population of organisms on a
//! square grid that perceive food and rivals, fight, eat, starve and breed.
//!
//! This crate contains:
//! - Grid placement of food and organisms (Chebyshev metric)
//! - Gene construction and mutation
//! - Perception and target selection
//! - Contention resolution (fights and food splitting)
//! - The tick orchestrator ([`World::advance_one_day`]) and read-only queries
//! - Configuration, errors and structured logging
//!
//! ## Example
//!
//! ```
//! use evogrid_core::config::SimConfig;
//! use evogrid_core::World;
//!
//! let mut config = SimConfig::default();
//! config.world.seed = Some(7);
//! let mut world = World::new(config).unwrap();
//! let summary = world.advance_one_day();
//! assert_eq!(world.day, 1);
//! assert_eq!(summary.day, 0);
//! ```

/// Simulation parameters and TOML loading
pub mod config;
/// Fight resolution and food splitting
pub mod contention;
/// Engine error type
pub mod error;
/// Gene generation and mutation
pub mod genetics;
/// Food spawning and organism placement
pub mod grid;
/// Id issuing, metabolism and reproduction
pub mod lifecycle;
/// Day counters and logging setup
pub mod metrics;
/// Visible food and rivals for one organism
pub mod perception;
/// Nearest-target choice and the per-day target book
pub mod targeting;
/// World state and the daily tick
pub mod world;

pub use error::{EngineError, Result};
pub use genetics::GenesLogic;
pub use metrics::{init_logging, Metrics};
pub use world::{DaySummary, DietCensus, World};
