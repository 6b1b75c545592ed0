use crate::lifecycle::{self, Vitality};
use crate::metrics::{COUNTER_BIRTHS, COUNTER_STARVED};
use crate::world::{DaySummary, World};
use evogrid_data::{LifeEvent, Organism};

impl World {
    /// Charges upkeep to every living organism, then lets those above
    /// the reproduction threshold breed. Children are returned rather than
    /// added, so they take no part in today's processing.
    pub(crate) fn apply_metabolism_and_reproduction(&mut self, day: u64) -> Vec<Organism> {
        let mut newborns = Vec::new();
        let mut starved = 0u64;

        for org in self.organisms.iter_mut().filter(|o| o.alive) {
            match lifecycle::apply_metabolism(org, &self.config.energy, day) {
                Vitality::Starved => starved += 1,
                Vitality::ReadyToBreed => {
                    let child_id = self.ids.next_id();
                    newborns.push(lifecycle::reproduce(org, child_id, day, &mut self.rng));
                }
                Vitality::Living => {}
            }
        }

        self.metrics.add_to_counter(COUNTER_STARVED, starved);
        self.metrics.add_to_counter(COUNTER_BIRTHS, newborns.len() as u64);
        newborns
    }

    /// Moves the dead into the death log, admits newborns and advances
    /// the day counter.
    pub(crate) fn commit_day(&mut self, newborns: Vec<Organism>) -> DaySummary {
        let day = self.day;
        let (living, dead): (Vec<Organism>, Vec<Organism>) =
            std::mem::take(&mut self.organisms)
                .into_iter()
                .partition(|o| o.alive);
        self.organisms = living;

        let mut events = Vec::with_capacity(dead.len() + newborns.len());
        for org in &dead {
            if let Some(cause) = org.cause_of_death {
                events.push(LifeEvent::Death {
                    id: org.id,
                    cause,
                    killer_id: org.killer_id,
                    day: org.death_day.unwrap_or(day),
                });
            }
        }
        for child in &newborns {
            if let Some(parent_id) = child.parent_id {
                events.push(LifeEvent::Birth {
                    id: child.id,
                    parent_id,
                    day,
                });
            }
        }

        let deaths = dead.len();
        let births = newborns.len();
        self.death_log.extend(dead);
        self.organisms.extend(newborns);
        self.day += 1;

        DaySummary {
            day,
            population: self.organisms.len(),
            births,
            deaths,
            events,
            ..DaySummary::default()
        }
    }
}
