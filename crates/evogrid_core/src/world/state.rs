use crate::error::{EngineError, Result};
use crate::world::World;
use evogrid_data::{Diet, LifeEvent, Organism, OrganismId};
use serde::Serialize;
use std::collections::HashSet;

/// What happened during one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DaySummary {
    /// The day that was processed (the world's day counter before it ticked).
    pub day: u64,
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
    pub fights: usize,
    pub kills: usize,
    /// Food cells whose energy reached at least one organism.
    pub food_eaten: usize,
    pub unplaced: usize,
    pub events: Vec<LifeEvent>,
}

/// Living organism ids grouped by diet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DietCensus {
    pub herbivores: Vec<OrganismId>,
    pub omnivores: Vec<OrganismId>,
    pub carnivores: Vec<OrganismId>,
}

impl DietCensus {
    pub fn of(&self, diet: Diet) -> &[OrganismId] {
        match diet {
            Diet::Herbivore => &self.herbivores,
            Diet::Omnivore => &self.omnivores,
            Diet::Carnivore => &self.carnivores,
        }
    }

    pub fn count(&self, diet: Diet) -> usize {
        self.of(diet).len()
    }

    pub fn total(&self) -> usize {
        self.herbivores.len() + self.omnivores.len() + self.carnivores.len()
    }
}

impl World {
    pub fn population(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn population_count(&self) -> usize {
        self.organisms.len()
    }

    pub fn living_ids(&self) -> Vec<OrganismId> {
        self.organisms.iter().map(|o| o.id).collect()
    }

    pub fn death_log(&self) -> &[Organism] {
        &self.death_log
    }

    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    /// Looks an organism up among the living, then among the dead.
    pub fn find(&self, id: OrganismId) -> Option<&Organism> {
        self.organisms
            .iter()
            .chain(self.death_log.iter())
            .find(|o| o.id == id)
    }

    /// Full record of a living or dead organism.
    pub fn inspect(&self, id: OrganismId) -> Result<&Organism> {
        if id.0 == 0 {
            return Err(EngineError::invalid_id("0"));
        }
        self.find(id).ok_or(EngineError::NotFound(id))
    }

    /// Parses `raw` as an id and inspects it.
    pub fn inspect_str(&self, raw: &str) -> Result<&Organism> {
        let id: OrganismId = raw.parse()?;
        self.inspect(id)
    }

    /// Up to `n` living organisms, oldest first. Equal ages keep
    /// population order.
    pub fn oldest(&self, n: usize) -> Vec<&Organism> {
        let mut living: Vec<&Organism> = self.organisms.iter().collect();
        living.sort_by(|a, b| b.age.cmp(&a.age));
        living.truncate(n);
        living
    }

    pub fn diet_census(&self) -> DietCensus {
        let mut census = DietCensus::default();
        for org in &self.organisms {
            match org.diet() {
                Diet::Herbivore => census.herbivores.push(org.id),
                Diet::Omnivore => census.omnivores.push(org.id),
                Diet::Carnivore => census.carnivores.push(org.id),
            }
        }
        census
    }

    pub fn children_of(&self, id: OrganismId) -> Result<&[OrganismId]> {
        Ok(&self.inspect(id)?.children)
    }

    /// Ancestor chain of `id`, nearest parent first.
    pub fn lineage(&self, id: OrganismId) -> Result<Vec<OrganismId>> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.inspect(id)?;
        while let Some(parent) = current.parent_id {
            if !seen.insert(parent) {
                break;
            }
            chain.push(parent);
            match self.find(parent) {
                Some(org) => current = org,
                None => break,
            }
        }
        Ok(chain)
    }
}
