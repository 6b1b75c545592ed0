use crate::grid::Occupancy;
use evogrid_data::{Cell, Organism};
use std::collections::BTreeSet;

/// What one organism can see this day.
///
/// Entries are kept in scan order (column by column across the sight
/// window); nearest-target ties are settled on that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Perception {
    pub food: Vec<Cell>,
    /// Indices into the population slice.
    pub rivals: Vec<usize>,
}

impl Perception {
    pub fn is_empty(&self) -> bool {
        self.food.is_empty() && self.rivals.is_empty()
    }
}

/// Scans the `(2r+1)²` window around `organisms[observer]`.
///
/// Food shows up only for plant eaters and rivals only for meat eaters.
/// Rival lookups are clipped to the grid; food lookups are not, since no
/// food exists off-grid.
pub fn perceive(
    observer: usize,
    organisms: &[Organism],
    food: &BTreeSet<Cell>,
    occupancy: &Occupancy,
    world_size: u32,
) -> Perception {
    let mut seen = Perception::default();
    let org = &organisms[observer];
    let diet = org.diet();
    let r = i32::from(org.sight_range());

    for dx in -r..=r {
        for dy in -r..=r {
            let cell = org.position.offset(dx, dy);

            if diet.eats_plants() && food.contains(&cell) {
                seen.food.push(cell);
            }

            if diet.eats_meat() && cell.in_bounds(world_size) {
                if let Some(other) = occupancy.at(cell) {
                    if other != observer && organisms[other].alive {
                        seen.rivals.push(other);
                    }
                }
            }
        }
    }
    seen
}
