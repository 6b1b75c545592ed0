use crate::config::SimConfig;
use crate::error::{EngineError, Result};
use crate::genetics::GenesLogic;
use crate::lifecycle::{self, IdSequence};
use crate::metrics::Metrics;
use crate::world::World;
use evogrid_data::{Diet, Genes, OrganismId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;

impl World {
    /// Builds a world and seeds `initial_population` random organisms.
    ///
    /// Organisms get their first position when the first day starts.
    pub fn new(config: SimConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| EngineError::invalid_config(format!("{e:#}")))?;

        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut world = Self {
            config,
            day: 0,
            food: BTreeSet::new(),
            organisms: Vec::new(),
            death_log: Vec::new(),
            ids: IdSequence::new(),
            rng,
            metrics: Metrics::new(),
        };

        let population = &world.config.population;
        for _ in 0..population.initial_population {
            let org = lifecycle::create_organism_with_rng(
                &mut world.ids,
                population.initial_energy,
                &population.species,
                0,
                &mut world.rng,
            );
            world.organisms.push(org);
        }

        tracing::info!(
            world_size = world.config.world.world_size,
            food_amount = world.config.world.food_amount,
            population = world.organisms.len(),
            seed = ?world.config.world.seed,
            fingerprint = %world.config.fingerprint(),
            "World created"
        );

        let crowding = world.config.world.food_amount + world.organisms.len();
        if crowding > world.config.cell_count() {
            tracing::warn!(
                cells = world.config.cell_count(),
                food_amount = world.config.world.food_amount,
                population = world.organisms.len(),
                "Grid too small for food and population, some organisms will go unplaced"
            );
        }

        Ok(world)
    }

    /// Adds an organism with the given genes to the living population.
    ///
    /// It is born on the current day and placed with everyone else when
    /// the next day starts.
    pub fn spawn(&mut self, genes: Genes, energy: f64, species: &str) -> Result<OrganismId> {
        genes.validate()?;
        if !(energy.is_finite() && energy > 0.0) {
            return Err(EngineError::invalid_config(format!(
                "Spawn energy must be positive (got {energy})"
            )));
        }
        if species.trim().is_empty() {
            return Err(EngineError::invalid_config("Species tag must not be empty"));
        }

        let org = lifecycle::create_organism(&mut self.ids, genes, energy, species, self.day);
        let id = org.id;
        self.organisms.push(org);
        tracing::debug!(id = %id, day = self.day, "Organism spawned");
        Ok(id)
    }

    /// Spawns a random organism of the given diet with the configured
    /// starting energy and species.
    pub fn spawn_random(&mut self, diet: Diet) -> Result<OrganismId> {
        let genes = Genes::random_with_diet(diet, &mut self.rng);
        let energy = self.config.population.initial_energy;
        let species = self.config.population.species.clone();
        self.spawn(genes, energy, &species)
    }
}
