use super::genes::{Diet, Genes};
use super::grid::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Monotonic organism identifier. Issued from 1 upwards; 0 is never valid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrganismId(pub u64);

impl fmt::Display for OrganismId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a valid organism id")]
pub struct IdParseError(pub String);

impl FromStr for OrganismId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(IdParseError(s.to_string())),
            Ok(n) => Ok(OrganismId(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CauseOfDeath {
    Starved,
    KilledInFight,
    /// No free cell was left for the organism at the start of a day.
    UnableToPlace,
}

impl fmt::Display for CauseOfDeath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CauseOfDeath::Starved => "Starved",
            CauseOfDeath::KilledInFight => "Killed in fight",
            CauseOfDeath::UnableToPlace => "Could not be placed",
        };
        f.write_str(text)
    }
}

/// Full record of one organism, living or dead.
///
/// Lineage is kept by id only: `parent_id` points up, `children` lists
/// every child this organism produced. Neither owns the other's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub id: OrganismId,
    pub genes: Genes,
    pub species: String,
    pub energy: f64,
    pub position: Cell,
    pub alive: bool,
    #[serde(skip)]
    pub fought: bool,
    #[serde(skip)]
    pub processed: bool,
    pub age: u64,
    pub birth_day: u64,
    pub death_day: Option<u64>,
    pub cause_of_death: Option<CauseOfDeath>,
    pub killer_id: Option<OrganismId>,
    pub parent_id: Option<OrganismId>,
    pub children: Vec<OrganismId>,
    pub victims: Vec<OrganismId>,
}

impl Organism {
    pub fn new(
        id: OrganismId,
        genes: Genes,
        energy: f64,
        position: Cell,
        species: impl Into<String>,
        birth_day: u64,
    ) -> Self {
        Self {
            id,
            genes,
            species: species.into(),
            energy,
            position,
            alive: true,
            fought: false,
            processed: false,
            age: 0,
            birth_day,
            death_day: None,
            cause_of_death: None,
            killer_id: None,
            parent_id: None,
            children: Vec::new(),
            victims: Vec::new(),
        }
    }

    #[inline]
    pub fn diet(&self) -> Diet {
        self.genes.diet
    }

    #[inline]
    pub fn aggressiveness(&self) -> f64 {
        self.genes.aggressiveness
    }

    /// Effective sight radius, including the carnivore bonus.
    #[inline]
    pub fn sight_range(&self) -> u8 {
        self.genes.effective_sight()
    }

    #[inline]
    pub fn strength(&self) -> f64 {
        self.genes.strength
    }

    #[inline]
    pub fn defense(&self) -> f64 {
        self.genes.defense
    }

    #[inline]
    pub fn efficiency(&self) -> f64 {
        self.genes.efficiency
    }

    #[inline]
    pub fn energy_passed_on(&self) -> f64 {
        self.genes.energy_passed_on
    }

    /// Marks the organism dead. Has no effect on an already dead organism.
    pub fn die(&mut self, cause: CauseOfDeath, day: u64, killer: Option<OrganismId>) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.cause_of_death = Some(cause);
        self.death_day = Some(day);
        self.killer_id = killer;
    }
}
