//! Plain data records shared by the evogrid engine and its front ends.

pub mod data;

pub use data::event::LifeEvent;
pub use data::genes::{
    Diet, GeneError, Genes, CARNIVORE_SIGHT_BONUS, EFFICIENCY_MAX, EFFICIENCY_MIN,
    SIGHT_RANGE_MAX, SIGHT_RANGE_MIN,
};
pub use data::grid::Cell;
pub use data::organism::{CauseOfDeath, IdParseError, Organism, OrganismId};
