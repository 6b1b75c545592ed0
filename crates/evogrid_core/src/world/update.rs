use crate::contention;
use crate::grid::{self, Occupancy};
use crate::metrics::{COUNTER_FIGHTS, COUNTER_FOOD_EATEN, COUNTER_KILLS, COUNTER_UNPLACED};
use crate::perception::perceive;
use crate::targeting::{choose_target, TargetBook};
use crate::world::{DaySummary, World};
use rand::seq::SliceRandom;
use std::time::Instant;

impl World {
    /// Runs one full day.
    ///
    /// Phases, in order: respawn food, place organisms, reset per-day
    /// flags, perceive and target, direct fights, food contention,
    /// metabolism and reproduction, commit. Births and deaths are staged
    /// and only applied to the population at commit.
    pub fn advance_one_day(&mut self) -> DaySummary {
        let start = Instant::now();
        let day = self.day;
        let world_size = self.config.world.world_size;

        self.food = grid::spawn_food(world_size, self.config.world.food_amount, &mut self.rng);
        let unplaced =
            grid::place_organisms(world_size, &self.food, &mut self.organisms, day, &mut self.rng);

        for org in &mut self.organisms {
            org.fought = false;
            org.processed = false;
        }
        self.organisms.shuffle(&mut self.rng);

        let book = self.collect_targets();

        let mut fights = contention::resolve_direct_fights(
            &mut self.organisms,
            &book.attacks,
            &self.config.energy,
            day,
            &mut self.rng,
        );
        let claims = contention::resolve_food_contention(
            &mut self.organisms,
            book.food_contenders,
            &self.config.energy,
            day,
            &mut self.rng,
        );

        let mut food_eaten = 0;
        for (_, claim) in claims {
            if !claim.shares.is_empty() {
                food_eaten += 1;
            }
            fights.extend(claim.fights);
        }
        let kills = fights.iter().filter(|f| f.is_kill()).count();

        let newborns = self.apply_metabolism_and_reproduction(day);
        let mut summary = self.commit_day(newborns);

        summary.fights = fights.len();
        summary.kills = kills;
        summary.food_eaten = food_eaten;
        summary.unplaced = unplaced;

        self.metrics.add_to_counter(COUNTER_FIGHTS, fights.len() as u64);
        self.metrics.add_to_counter(COUNTER_KILLS, kills as u64);
        self.metrics.add_to_counter(COUNTER_FOOD_EATEN, food_eaten as u64);
        self.metrics.add_to_counter(COUNTER_UNPLACED, unplaced as u64);
        self.metrics.record_day(
            day,
            start.elapsed(),
            summary.population,
            summary.births,
            summary.deaths,
            self.food.len(),
        );

        summary
    }

    /// Perception and targeting for every living organism not yet
    /// processed today, in current population order.
    fn collect_targets(&mut self) -> TargetBook {
        let world_size = self.config.world.world_size;
        let occupancy = Occupancy::build(&self.organisms);
        let mut book = TargetBook::default();

        for idx in 0..self.organisms.len() {
            let org = &self.organisms[idx];
            if !org.alive || org.processed {
                continue;
            }
            let seen = perceive(idx, &self.organisms, &self.food, &occupancy, world_size);
            if let Some(target) = choose_target(org, &seen, &self.organisms) {
                book.record(idx, target);
            }
            self.organisms[idx].processed = true;
        }

        book
    }
}
