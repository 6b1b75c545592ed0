pub mod macros;

use evogrid_core::config::SimConfig;
use evogrid_core::World;
use evogrid_data::{Diet, Genes};

#[allow(dead_code)]
pub struct WorldBuilder {
    config: SimConfig,
    organisms: Vec<(Genes, f64)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    /// An empty world: no initial population, default grid and energy.
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.population.initial_population = 0;
        config.world.seed = Some(0);
        Self {
            config,
            organisms: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_world_size(mut self, world_size: u32) -> Self {
        self.config.world.world_size = world_size;
        self
    }

    pub fn with_food(mut self, food_amount: usize) -> Self {
        self.config.world.food_amount = food_amount;
        self
    }

    pub fn with_random_population(mut self, count: usize) -> Self {
        self.config.population.initial_population = count;
        self
    }

    pub fn with_organism(mut self, genes: Genes, energy: f64) -> Self {
        self.organisms.push((genes, energy));
        self
    }

    pub fn build(self) -> World {
        let species = self.config.population.species.clone();
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for (genes, energy) in self.organisms {
            world
                .spawn(genes, energy, &species)
                .expect("Failed to spawn organism in test builder");
        }
        world
    }
}

/// Gene set builder with mid-range defaults.
#[allow(dead_code)]
#[derive(Clone, Copy)]
pub struct GenesBuilder {
    genes: Genes,
}

#[allow(dead_code)]
impl GenesBuilder {
    pub fn new(diet: Diet) -> Self {
        Self {
            genes: Genes {
                diet,
                aggressiveness: 0.5,
                sight_range: 3,
                strength: 0.5,
                defense: 0.5,
                efficiency: 1.0,
                energy_passed_on: 0.3,
            },
        }
    }

    pub fn aggressiveness(mut self, value: f64) -> Self {
        self.genes.aggressiveness = value;
        self
    }

    pub fn sight(mut self, value: u8) -> Self {
        self.genes.sight_range = value;
        self
    }

    pub fn strength(mut self, value: f64) -> Self {
        self.genes.strength = value;
        self
    }

    pub fn defense(mut self, value: f64) -> Self {
        self.genes.defense = value;
        self
    }

    pub fn efficiency(mut self, value: f64) -> Self {
        self.genes.efficiency = value;
        self
    }

    pub fn passes_on(mut self, value: f64) -> Self {
        self.genes.energy_passed_on = value;
        self
    }

    pub fn build(self) -> Genes {
        self.genes.validate().expect("test genes out of range");
        self.genes
    }
}
