//! Day counters and logging setup.
//!
//! Provides structured logging and per-world counters for monitoring a run.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

pub const COUNTER_FIGHTS: &str = "fights";
pub const COUNTER_KILLS: &str = "kills";
pub const COUNTER_FOOD_EATEN: &str = "food_eaten";
pub const COUNTER_BIRTHS: &str = "births";
pub const COUNTER_STARVED: &str = "starved";
pub const COUNTER_UNPLACED: &str = "unplaced";

/// Every counter, in the order they are reported.
pub const ALL_COUNTERS: [&str; 6] = [
    COUNTER_BIRTHS,
    COUNTER_STARVED,
    COUNTER_UNPLACED,
    COUNTER_FIGHTS,
    COUNTER_KILLS,
    COUNTER_FOOD_EATEN,
];

/// Days between two run summaries in the log.
pub const SUMMARY_INTERVAL: u64 = 10;

/// Running totals for one world.
#[derive(Debug, Clone)]
pub struct Metrics {
    day_count: u64,
    population: usize,
    counters: BTreeMap<&'static str, u64>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            day_count: 0,
            population: 0,
            counters: BTreeMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Records a completed day and logs its summary.
    pub fn record_day(
        &mut self,
        day: u64,
        duration: Duration,
        population: usize,
        births: usize,
        deaths: usize,
        food: usize,
    ) {
        self.day_count += 1;
        self.population = population;
        tracing::info!(
            day,
            population,
            births,
            deaths,
            food,
            duration_us = duration.as_micros() as u64,
            "Day complete"
        );

        if self.day_count % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                days = self.day_count,
                population,
                elapsed_ms = self.elapsed().as_millis() as u64,
                counters = %self.summary(),
                "Run summary"
            );
        }
    }

    pub fn increment_counter(&mut self, name: &'static str) {
        self.add_to_counter(name, 1);
    }

    pub fn add_to_counter(&mut self, name: &'static str, amount: u64) {
        *self.counters.entry(name).or_insert(0) += amount;
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// `(name, total)` for every counter, including those still at zero.
    pub fn counters(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        ALL_COUNTERS
            .iter()
            .map(move |&name| (name, self.counter(name)))
    }

    /// `births=3 starved=1 ...`
    #[must_use]
    pub fn summary(&self) -> String {
        self.counters()
            .map(|(name, total)| format!("{name}={total}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn day_count(&self) -> u64 {
        self.day_count
    }

    /// Population recorded at the end of the last day.
    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"warn"`)
/// is used. Output goes to stderr so it never mixes with reports.
pub fn init_logging(default_directive: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
