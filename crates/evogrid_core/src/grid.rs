//! Food spawning and organism placement on the square grid.

use evogrid_data::{CauseOfDeath, Cell, Organism};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeSet, HashMap};

/// Every cell of a `world_size × world_size` grid, column by column.
pub fn all_cells(world_size: u32) -> Vec<Cell> {
    let side = world_size as i32;
    let mut cells = Vec::with_capacity((world_size as usize) * (world_size as usize));
    for x in 0..side {
        for y in 0..side {
            cells.push(Cell::new(x, y));
        }
    }
    cells
}

/// Draws `food_amount` distinct cells uniformly without replacement.
///
/// Requests beyond grid capacity are clamped to the whole grid.
pub fn spawn_food<R: Rng>(world_size: u32, food_amount: usize, rng: &mut R) -> BTreeSet<Cell> {
    let mut cells = all_cells(world_size);
    if food_amount > cells.len() {
        tracing::warn!(
            requested = food_amount,
            capacity = cells.len(),
            "Food amount exceeds grid capacity, clamping"
        );
    }
    let amount = food_amount.min(cells.len());
    let (chosen, _) = cells.partial_shuffle(rng, amount);
    chosen.iter().copied().collect()
}

/// Places every living organism on a distinct cell not holding food.
///
/// Organisms left over once the free cells run out die with
/// [`CauseOfDeath::UnableToPlace`]. Returns how many could not be placed.
pub fn place_organisms<R: Rng>(
    world_size: u32,
    food: &BTreeSet<Cell>,
    organisms: &mut [Organism],
    day: u64,
    rng: &mut R,
) -> usize {
    let mut free: Vec<Cell> = all_cells(world_size)
        .into_iter()
        .filter(|cell| !food.contains(cell))
        .collect();
    let wanted = organisms.iter().filter(|o| o.alive).count();
    let take = wanted.min(free.len());
    let (chosen, _) = free.partial_shuffle(rng, take);
    let mut slots = chosen.iter().copied();

    let mut unplaced = 0;
    for org in organisms.iter_mut().filter(|o| o.alive) {
        match slots.next() {
            Some(cell) => org.position = cell,
            None => {
                org.die(CauseOfDeath::UnableToPlace, day, None);
                unplaced += 1;
            }
        }
    }

    if unplaced > 0 {
        tracing::warn!(unplaced, day, "Not enough free cells, organisms could not be placed");
    }
    unplaced
}

/// Lookup from cell to the index of the living organism standing on it.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    cells: HashMap<Cell, usize>,
}

impl Occupancy {
    pub fn build(organisms: &[Organism]) -> Self {
        let cells = organisms
            .iter()
            .enumerate()
            .filter(|(_, o)| o.alive)
            .map(|(idx, o)| (o.position, idx))
            .collect();
        Self { cells }
    }

    #[inline]
    pub fn at(&self, cell: Cell) -> Option<usize> {
        self.cells.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
