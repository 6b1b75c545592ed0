use crate::config::EnergyConfig;
use crate::genetics::GenesLogic;
use evogrid_data::{CauseOfDeath, Cell, Genes, Organism, OrganismId};
use rand::Rng;

/// Issues organism ids for one world, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> OrganismId {
        let id = OrganismId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`IdSequence::next_id`] will return.
    pub fn peek(&self) -> OrganismId {
        OrganismId(self.next)
    }
}

pub fn create_organism(
    ids: &mut IdSequence,
    genes: Genes,
    energy: f64,
    species: &str,
    birth_day: u64,
) -> Organism {
    Organism::new(ids.next_id(), genes, energy, Cell::default(), species, birth_day)
}

pub fn create_organism_with_rng<R: Rng>(
    ids: &mut IdSequence,
    energy: f64,
    species: &str,
    birth_day: u64,
    rng: &mut R,
) -> Organism {
    create_organism(ids, Genes::random_with_rng(rng), energy, species, birth_day)
}

/// Outcome of the end-of-day energy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vitality {
    Starved,
    ReadyToBreed,
    Living,
}

/// Charges the daily energy upkeep, refreshes age and settles starvation.
///
/// Energy at or below zero after upkeep is death; there is no
/// "alive with zero energy" state.
pub fn apply_metabolism(org: &mut Organism, energy: &EnergyConfig, day: u64) -> Vitality {
    org.energy -= energy.energy_loss_per_day * (1.0 / org.efficiency());
    org.age = day.saturating_sub(org.birth_day);

    if org.energy <= 0.0 {
        org.die(CauseOfDeath::Starved, day, None);
        Vitality::Starved
    } else if org.energy >= energy.reproduction_energy_threshold {
        Vitality::ReadyToBreed
    } else {
        Vitality::Living
    }
}

/// Splits off a child carrying `energy × energy_passed_on` of the parent's
/// energy, mutated genes, the parent's cell and species tag.
pub fn reproduce<R: Rng>(
    parent: &mut Organism,
    child_id: OrganismId,
    day: u64,
    rng: &mut R,
) -> Organism {
    let child_energy = parent.energy * parent.energy_passed_on();
    parent.energy -= child_energy;

    let genes = parent.genes.mutate_with_rng(rng);
    let mut child = Organism::new(
        child_id,
        genes,
        child_energy,
        parent.position,
        parent.species.clone(),
        day,
    );
    child.parent_id = Some(parent.id);
    parent.children.push(child_id);

    tracing::debug!(
        parent = %parent.id,
        child = %child_id,
        energy = child_energy,
        "Organism reproduced"
    );
    child
}
