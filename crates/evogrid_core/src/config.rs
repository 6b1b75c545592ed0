//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map onto a `config.toml` file. Every
//! table and field is optional in the file; missing values fall back to
//! the `Default` impls.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! world_size = 20
//! food_amount = 100
//! seed = 42
//!
//! [energy]
//! energy_per_food = 35.0
//! energy_loss_per_day = 50.0
//! reproduction_energy_threshold = 60.0
//! omnivore_energy_proportion = 0.6
//! carnivore_energy_gain = 1.0
//! omnivore_energy_gain = 0.7
//!
//! [population]
//! initial_population = 20
//! initial_energy = 100.0
//! species = "species1"
//! ```

use serde::{Deserialize, Serialize};

/// Largest accepted grid side. Placement enumerates every cell each day.
pub const MAX_WORLD_SIZE: u32 = 1000;

/// Grid dimensions and food supply.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub world_size: u32,
    /// Food cells spawned each day, clamped to the number of cells.
    pub food_amount: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: 20,
            food_amount: 100,
            seed: None,
        }
    }
}

/// Energy flows: food, upkeep, reproduction and combat gains.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EnergyConfig {
    pub energy_per_food: f64,
    pub energy_loss_per_day: f64,
    pub reproduction_energy_threshold: f64,
    /// Share weight of an omnivore when splitting food (herbivores weigh 1).
    pub omnivore_energy_proportion: f64,
    pub carnivore_energy_gain: f64,
    pub omnivore_energy_gain: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            energy_per_food: 35.0,
            energy_loss_per_day: 50.0,
            reproduction_energy_threshold: 60.0,
            omnivore_energy_proportion: 0.6,
            carnivore_energy_gain: 1.0,
            omnivore_energy_gain: 0.7,
        }
    }
}

/// The population seeded when a world is created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PopulationConfig {
    pub initial_population: usize,
    pub initial_energy: f64,
    pub species: String,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            initial_population: 20,
            initial_energy: 100.0,
            species: "species1".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub energy: EnergyConfig,
    pub population: PopulationConfig,
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` describing the
    /// first validation failure.
    ///
    /// # Validation Rules
    /// - World size must be positive and at most [`MAX_WORLD_SIZE`]
    /// - Energy amounts, rates and multipliers must be finite and non-negative
    /// - Reproduction threshold and initial energy must be positive
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.world_size > 0, "World size must be positive");
        anyhow::ensure!(
            self.world.world_size <= MAX_WORLD_SIZE,
            "World size too large (max {MAX_WORLD_SIZE})"
        );

        let e = &self.energy;
        for (name, value) in [
            ("energy_per_food", e.energy_per_food),
            ("energy_loss_per_day", e.energy_loss_per_day),
            ("omnivore_energy_proportion", e.omnivore_energy_proportion),
            ("carnivore_energy_gain", e.carnivore_energy_gain),
            ("omnivore_energy_gain", e.omnivore_energy_gain),
        ] {
            anyhow::ensure!(
                value.is_finite() && value >= 0.0,
                "{name} must be finite and non-negative (got {value})"
            );
        }
        anyhow::ensure!(
            e.reproduction_energy_threshold.is_finite() && e.reproduction_energy_threshold > 0.0,
            "Reproduction energy threshold must be positive"
        );

        anyhow::ensure!(
            self.population.initial_energy.is_finite() && self.population.initial_energy > 0.0,
            "Initial energy must be positive"
        );
        anyhow::ensure!(
            !self.population.species.trim().is_empty(),
            "Species tag must not be empty"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of cells on the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let side = self.world.world_size as usize;
        side * side
    }

    /// Stable hash of the rule parameters, used to label runs in logs.
    /// The seed and initial population are not part of the fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(self.world.world_size.to_le_bytes());
        hasher.update((self.world.food_amount as u64).to_le_bytes());
        hasher.update(format!("{:?}", self.energy).as_bytes());
        hex::encode(hasher.finalize())
    }
}
