use crate::perception::Perception;
use evogrid_data::{Cell, Organism};
use std::collections::BTreeMap;

/// The single thing an organism goes after on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Food(Cell),
    /// Index into the population slice.
    Organism(usize),
}

/// Picks the nearest visible food and the nearest visible rival, then the
/// closer of the two. Equal distances go to food. Within each kind the
/// first minimal entry in perception order wins.
pub fn choose_target(
    observer: &Organism,
    seen: &Perception,
    organisms: &[Organism],
) -> Option<Target> {
    let here = observer.position;

    let food = seen
        .food
        .iter()
        .copied()
        .min_by_key(|cell| here.chebyshev(*cell))
        .map(|cell| (here.chebyshev(cell), Target::Food(cell)));

    let rival = seen
        .rivals
        .iter()
        .copied()
        .min_by_key(|&idx| here.chebyshev(organisms[idx].position))
        .map(|idx| (here.chebyshev(organisms[idx].position), Target::Organism(idx)));

    match (food, rival) {
        (Some((food_dist, food)), Some((rival_dist, rival))) => {
            if rival_dist < food_dist {
                Some(rival)
            } else {
                Some(food)
            }
        }
        (Some((_, target)), None) | (None, Some((_, target))) => Some(target),
        (None, None) => None,
    }
}

/// Targets collected over one day, ahead of contention resolution.
#[derive(Debug, Clone, Default)]
pub struct TargetBook {
    /// Food cell → organisms heading for it, in the order they chose it.
    pub food_contenders: BTreeMap<Cell, Vec<usize>>,
    /// (attacker, target) pairs. An attacker appears at most once.
    pub attacks: Vec<(usize, usize)>,
}

impl TargetBook {
    pub fn record(&mut self, chooser: usize, target: Target) {
        match target {
            Target::Food(cell) => self.food_contenders.entry(cell).or_default().push(chooser),
            Target::Organism(victim) => self.attacks.push((chooser, victim)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.food_contenders.is_empty() && self.attacks.is_empty()
    }

    /// Organisms that picked `cell`.
    pub fn contenders(&self, cell: Cell) -> &[usize] {
        self.food_contenders
            .get(&cell)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
