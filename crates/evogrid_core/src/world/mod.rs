use crate::config::SimConfig;
use crate::lifecycle::IdSequence;
use crate::metrics::Metrics;
use evogrid_data::{Cell, Organism};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;

pub mod finalize;
pub mod init;
pub mod state;
pub mod update;

pub use state::{DaySummary, DietCensus};

/// The whole simulation: grid, food, living population and death log.
///
/// All state changes go through [`World::advance_one_day`] or
/// [`World::spawn`]; everything else reads.
pub struct World {
    pub config: SimConfig,
    /// Days completed so far.
    pub day: u64,
    /// Food cells for the current day, resampled every day.
    pub food: BTreeSet<Cell>,
    /// Living organisms. Order is reshuffled every day.
    pub organisms: Vec<Organism>,
    /// Dead organisms, appended at the end of the day they died.
    pub death_log: Vec<Organism>,
    pub ids: IdSequence,
    pub rng: ChaCha8Rng,
    pub metrics: Metrics,
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("day", &self.day)
            .field("population", &self.organisms.len())
            .field("dead", &self.death_log.len())
            .field("food", &self.food.len())
            .finish()
    }
}
