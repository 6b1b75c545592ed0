use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SIGHT_RANGE_MIN: u8 = 1;
pub const SIGHT_RANGE_MAX: u8 = 7;
/// Extra sight radius granted to carnivores on top of the gene value.
pub const CARNIVORE_SIGHT_BONUS: u8 = 2;
pub const EFFICIENCY_MIN: f64 = 1.0;
pub const EFFICIENCY_MAX: f64 = 2.0;

/// What an organism is able to eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Herbivore,
    Carnivore,
    Omnivore,
}

impl Diet {
    pub const ALL: [Diet; 3] = [Diet::Herbivore, Diet::Carnivore, Diet::Omnivore];

    /// Herbivores and omnivores see and eat food cells.
    #[inline]
    pub fn eats_plants(self) -> bool {
        matches!(self, Diet::Herbivore | Diet::Omnivore)
    }

    /// Carnivores and omnivores see rival organisms.
    #[inline]
    pub fn eats_meat(self) -> bool {
        matches!(self, Diet::Carnivore | Diet::Omnivore)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Diet::Herbivore => "herbivore",
            Diet::Carnivore => "carnivore",
            Diet::Omnivore => "omnivore",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = GeneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "herbivore" | "h" => Ok(Diet::Herbivore),
            "carnivore" | "c" => Ok(Diet::Carnivore),
            "omnivore" | "o" => Ok(Diet::Omnivore),
            other => Err(GeneError::UnknownDiet(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneError {
    #[error("gene `{gene}` = {value} is outside [{min}, {max}]")]
    OutOfRange {
        gene: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unknown diet `{0}` (expected herbivore, carnivore or omnivore)")]
    UnknownDiet(String),
}

/// The heritable traits of an organism.
///
/// Fixed once an organism is created; children receive a mutated copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Genes {
    pub diet: Diet,
    /// Probability of starting a fight when a rival is at hand.
    pub aggressiveness: f64,
    /// Base sight radius before the carnivore bonus.
    pub sight_range: u8,
    pub strength: f64,
    /// Chance of surviving a lost fight.
    pub defense: f64,
    /// Divides the daily energy loss.
    pub efficiency: f64,
    /// Fraction of energy handed to a child at birth.
    pub energy_passed_on: f64,
}

impl Genes {
    /// Builds a gene set, rejecting any value outside its declared domain.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        diet: Diet,
        aggressiveness: f64,
        sight_range: u8,
        strength: f64,
        defense: f64,
        efficiency: f64,
        energy_passed_on: f64,
    ) -> Result<Self, GeneError> {
        let genes = Self {
            diet,
            aggressiveness,
            sight_range,
            strength,
            defense,
            efficiency,
            energy_passed_on,
        };
        genes.validate()?;
        Ok(genes)
    }

    pub fn validate(&self) -> Result<(), GeneError> {
        check_range("aggressiveness", self.aggressiveness, 0.0, 1.0)?;
        check_range(
            "sight_range",
            f64::from(self.sight_range),
            f64::from(SIGHT_RANGE_MIN),
            f64::from(SIGHT_RANGE_MAX),
        )?;
        check_range("strength", self.strength, 0.0, 1.0)?;
        check_range("defense", self.defense, 0.0, 1.0)?;
        check_range("efficiency", self.efficiency, EFFICIENCY_MIN, EFFICIENCY_MAX)?;
        check_range("energy_passed_on", self.energy_passed_on, 0.0, 1.0)?;
        Ok(())
    }

    /// Sight radius actually used for perception.
    #[inline]
    pub fn effective_sight(&self) -> u8 {
        match self.diet {
            Diet::Carnivore => self.sight_range + CARNIVORE_SIGHT_BONUS,
            Diet::Herbivore | Diet::Omnivore => self.sight_range,
        }
    }
}

fn check_range(gene: &'static str, value: f64, min: f64, max: f64) -> Result<(), GeneError> {
    // NaN fails both comparisons and is rejected here.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(GeneError::OutOfRange {
            gene,
            value,
            min,
            max,
        })
    }
}
