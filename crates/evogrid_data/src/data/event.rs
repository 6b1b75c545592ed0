use super::organism::{CauseOfDeath, OrganismId};
use serde::{Deserialize, Serialize};

/// Birth and death notices emitted while a day is processed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum LifeEvent {
    Birth {
        id: OrganismId,
        parent_id: OrganismId,
        day: u64,
    },
    Death {
        id: OrganismId,
        cause: CauseOfDeath,
        killer_id: Option<OrganismId>,
        day: u64,
    },
}

impl LifeEvent {
    pub fn is_birth(&self) -> bool {
        matches!(self, LifeEvent::Birth { .. })
    }

    pub fn is_death(&self) -> bool {
        matches!(self, LifeEvent::Death { .. })
    }
}
