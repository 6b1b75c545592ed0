use evogrid_data::{Diet, Genes, EFFICIENCY_MAX, EFFICIENCY_MIN, SIGHT_RANGE_MAX, SIGHT_RANGE_MIN};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Noise on aggressiveness, strength, defense and energy_passed_on.
pub const UNIT_GENE_SIGMA: f64 = 0.05;
pub const EFFICIENCY_SIGMA: f64 = 0.1;
/// Chance that a child re-rolls its diet (possibly to the same value).
pub const DIET_MUTATION_CHANCE: f64 = 0.02;

/// Trait defining gene construction and inheritance.
pub trait GenesLogic: Sized {
    fn random_with_rng<R: Rng>(rng: &mut R) -> Self;
    fn random_with_diet<R: Rng>(diet: Diet, rng: &mut R) -> Self;
    /// Produces a child's gene set. Every numeric gene stays in its domain.
    fn mutate_with_rng<R: Rng>(&self, rng: &mut R) -> Self;
}

impl GenesLogic for Genes {
    fn random_with_rng<R: Rng>(rng: &mut R) -> Self {
        let diet = Diet::ALL[rng.gen_range(0..Diet::ALL.len())];
        Self::random_with_diet(diet, rng)
    }

    fn random_with_diet<R: Rng>(diet: Diet, rng: &mut R) -> Self {
        Genes {
            diet,
            aggressiveness: rng.gen_range(0.0..=1.0),
            sight_range: rng.gen_range(SIGHT_RANGE_MIN..=SIGHT_RANGE_MAX),
            strength: rng.gen_range(0.0..=1.0),
            defense: rng.gen_range(0.0..=1.0),
            efficiency: rng.gen_range(EFFICIENCY_MIN..=EFFICIENCY_MAX),
            energy_passed_on: rng.gen_range(0.1..=0.5),
        }
    }

    fn mutate_with_rng<R: Rng>(&self, rng: &mut R) -> Self {
        let mut child = *self;

        child.aggressiveness = unit_noise(child.aggressiveness, rng);
        child.strength = unit_noise(child.strength, rng);
        child.defense = unit_noise(child.defense, rng);
        child.energy_passed_on = unit_noise(child.energy_passed_on, rng);

        let step: i16 = rng.gen_range(-1..=1);
        child.sight_range = (i16::from(child.sight_range) + step)
            .clamp(i16::from(SIGHT_RANGE_MIN), i16::from(SIGHT_RANGE_MAX))
            as u8;

        child.efficiency = (child.efficiency + gaussian(EFFICIENCY_SIGMA, rng))
            .clamp(EFFICIENCY_MIN, EFFICIENCY_MAX);

        if rng.gen::<f64>() < DIET_MUTATION_CHANCE {
            child.diet = Diet::ALL[rng.gen_range(0..Diet::ALL.len())];
        }

        child
    }
}

fn unit_noise<R: Rng>(value: f64, rng: &mut R) -> f64 {
    (value + gaussian(UNIT_GENE_SIGMA, rng)).clamp(0.0, 1.0)
}

fn gaussian<R: Rng>(sigma: f64, rng: &mut R) -> f64 {
    Normal::new(0.0, sigma).map_or(0.0, |dist| dist.sample(rng))
}
