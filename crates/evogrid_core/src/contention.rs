//! Fight resolution and food splitting.
//!
//! Every fight marks both sides as having fought, so an organism takes part
//! in at most one fight per day. All fights of a day run one after another.

use crate::config::EnergyConfig;
use evogrid_data::{CauseOfDeath, Cell, Diet, Organism, OrganismId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Combat score multiplier for carnivores.
pub const CARNIVORE_COMBAT_BONUS: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FightOutcome {
    /// The loser died; the winner gained `energy_gained`.
    Killed { energy_gained: f64 },
    /// The loser survived its defense roll and lost `energy_lost`.
    Wounded { energy_lost: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FightReport {
    pub winner: OrganismId,
    pub loser: OrganismId,
    pub outcome: FightOutcome,
}

impl FightReport {
    pub fn is_kill(&self) -> bool {
        matches!(self.outcome, FightOutcome::Killed { .. })
    }
}

/// Strength × energy, boosted for carnivores.
pub fn combat_score(org: &Organism) -> f64 {
    let base = org.strength() * org.energy;
    match org.diet() {
        Diet::Carnivore => base * CARNIVORE_COMBAT_BONUS,
        Diet::Herbivore | Diet::Omnivore => base,
    }
}

/// Energy multiplier a winner applies to its victim's energy.
pub fn kill_gain(diet: Diet, energy: &EnergyConfig) -> f64 {
    match diet {
        Diet::Carnivore => energy.carnivore_energy_gain,
        Diet::Omnivore => energy.omnivore_energy_gain,
        Diet::Herbivore => 0.0,
    }
}

/// Food share weight; `None` for diets that cannot eat food.
pub fn food_weight(diet: Diet, energy: &EnergyConfig) -> Option<f64> {
    match diet {
        Diet::Herbivore => Some(1.0),
        Diet::Omnivore => Some(energy.omnivore_energy_proportion),
        Diet::Carnivore => None,
    }
}

/// Resolves one fight between `a` and `b`.
///
/// The higher combat score wins, an exact tie is a coin flip. The loser
/// then rolls against its defense: a roll above defense kills it (dated
/// `day + 1`, the day number it will carry once this day is committed);
/// otherwise it loses a uniform fraction in `[0, 1 - defense)` of its
/// energy.
pub fn resolve_fight<R: Rng>(
    a: &mut Organism,
    b: &mut Organism,
    energy: &EnergyConfig,
    day: u64,
    rng: &mut R,
) -> FightReport {
    let score_a = combat_score(a);
    let score_b = combat_score(b);
    let a_wins = if score_a == score_b {
        rng.gen_bool(0.5)
    } else {
        score_a > score_b
    };
    let (winner, loser) = if a_wins { (a, b) } else { (b, a) };

    let roll: f64 = rng.gen();
    let outcome = if roll > loser.defense() {
        loser.die(CauseOfDeath::KilledInFight, day + 1, Some(winner.id));
        winner.victims.push(loser.id);
        let energy_gained = loser.energy * kill_gain(winner.diet(), energy);
        winner.energy += energy_gained;
        FightOutcome::Killed { energy_gained }
    } else {
        let energy_lost = loser.energy * rng.gen::<f64>() * (1.0 - loser.defense());
        loser.energy -= energy_lost;
        FightOutcome::Wounded { energy_lost }
    };

    winner.fought = true;
    loser.fought = true;

    tracing::debug!(
        winner = %winner.id,
        loser = %loser.id,
        killed = matches!(outcome, FightOutcome::Killed { .. }),
        "Fight resolved"
    );

    FightReport {
        winner: winner.id,
        loser: loser.id,
        outcome,
    }
}

/// Mutable access to two distinct organisms of the same slice.
fn pair_mut(organisms: &mut [Organism], i: usize, j: usize) -> (&mut Organism, &mut Organism) {
    debug_assert_ne!(i, j, "an organism cannot fight itself");
    if i < j {
        let (left, right) = organisms.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = organisms.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

fn ready(org: &Organism) -> bool {
    org.alive && !org.fought
}

/// Runs the attacker → target fights recorded during targeting.
///
/// A pair fights only while both sides are alive and unfought, and then
/// only if the attacker's aggressiveness roll succeeds.
pub fn resolve_direct_fights<R: Rng>(
    organisms: &mut [Organism],
    attacks: &[(usize, usize)],
    energy: &EnergyConfig,
    day: u64,
    rng: &mut R,
) -> Vec<FightReport> {
    let mut reports = Vec::new();
    for &(attacker, target) in attacks {
        if attacker == target || !ready(&organisms[attacker]) || !ready(&organisms[target]) {
            continue;
        }
        if rng.gen::<f64>() < organisms[attacker].aggressiveness() {
            let (a, b) = pair_mut(organisms, attacker, target);
            reports.push(resolve_fight(a, b, energy, day, rng));
        }
    }
    reports
}

/// Result of settling one contested food cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodClaim {
    pub fights: Vec<FightReport>,
    /// (organism index, energy received)
    pub shares: Vec<(usize, f64)>,
}

impl FoodClaim {
    pub fn distributed(&self) -> f64 {
        self.shares.iter().map(|(_, e)| e).sum()
    }
}

/// Settles one food cell: contenders are shuffled, each ready contender
/// may pick a fight with its nearest ready fellow contender, then the food
/// is split among the survivors that can eat it.
pub fn resolve_food_cell<R: Rng>(
    organisms: &mut [Organism],
    contenders: &mut [usize],
    energy: &EnergyConfig,
    day: u64,
    rng: &mut R,
) -> FoodClaim {
    contenders.shuffle(rng);
    let mut claim = FoodClaim::default();

    for &idx in contenders.iter() {
        if !ready(&organisms[idx]) {
            continue;
        }
        let here = organisms[idx].position;
        let nearest = contenders
            .iter()
            .copied()
            .filter(|&other| other != idx && ready(&organisms[other]))
            .min_by_key(|&other| here.chebyshev(organisms[other].position));

        if let Some(rival) = nearest {
            if rng.gen::<f64>() < organisms[idx].aggressiveness() {
                let (a, b) = pair_mut(organisms, idx, rival);
                claim.fights.push(resolve_fight(a, b, energy, day, rng));
            }
        }
    }

    claim.shares = split_food(organisms, contenders, energy);
    claim
}

/// Splits `energy_per_food` among living contenders that can eat food,
/// proportionally to their diet weight. Returns the shares handed out;
/// empty when nobody is eligible (the food is simply lost).
pub fn split_food(
    organisms: &mut [Organism],
    contenders: &[usize],
    energy: &EnergyConfig,
) -> Vec<(usize, f64)> {
    let eligible: Vec<(usize, f64)> = contenders
        .iter()
        .filter(|&&idx| organisms[idx].alive)
        .filter_map(|&idx| food_weight(organisms[idx].diet(), energy).map(|w| (idx, w)))
        .collect();

    let total: f64 = eligible.iter().map(|(_, w)| w).sum();
    if eligible.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    eligible
        .into_iter()
        .map(|(idx, weight)| {
            let share = energy.energy_per_food * (weight / total);
            organisms[idx].energy += share;
            (idx, share)
        })
        .collect()
}

/// Runs every contested food cell. Cells are visited in grid order.
pub fn resolve_food_contention<R: Rng>(
    organisms: &mut [Organism],
    food_contenders: BTreeMap<Cell, Vec<usize>>,
    energy: &EnergyConfig,
    day: u64,
    rng: &mut R,
) -> Vec<(Cell, FoodClaim)> {
    food_contenders
        .into_iter()
        .map(|(cell, mut contenders)| {
            let claim = resolve_food_cell(organisms, &mut contenders, energy, day, rng);
            (cell, claim)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use evogrid_data::Genes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn org(id: u64, diet: Diet, strength: f64, defense: f64, energy: f64) -> Organism {
        let genes = Genes::new(diet, 1.0, 2, strength, defense, 1.0, 0.2).unwrap();
        Organism::new(OrganismId(id), genes, energy, Cell::new(id as i32, 0), "s", 0)
    }

    #[test]
    fn test_combat_score_carnivore_bonus() {
        assert_eq!(combat_score(&org(1, Diet::Herbivore, 0.5, 0.0, 40.0)), 20.0);
        assert_eq!(combat_score(&org(2, Diet::Omnivore, 0.5, 0.0, 40.0)), 20.0);
        assert_eq!(combat_score(&org(3, Diet::Carnivore, 0.5, 0.0, 40.0)), 30.0);
    }

    #[test]
    fn test_defenseless_loser_dies_and_carnivore_feeds() {
        let cfg = EnergyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut a = org(1, Diet::Carnivore, 1.0, 0.0, 50.0);
        let mut b = org(2, Diet::Herbivore, 0.1, 0.0, 30.0);
        let report = resolve_fight(&mut a, &mut b, &cfg, 4, &mut rng);

        // defense 0: any roll above 0 kills
        assert_eq!(report.winner, OrganismId(1));
        assert!(report.is_kill());
        assert!(!b.alive);
        assert_eq!(b.cause_of_death, Some(CauseOfDeath::KilledInFight));
        assert_eq!(b.death_day, Some(5));
        assert_eq!(b.killer_id, Some(OrganismId(1)));
        assert_eq!(a.victims, vec![OrganismId(2)]);
        assert_eq!(a.energy, 50.0 + 30.0 * cfg.carnivore_energy_gain);
        assert!(a.fought && b.fought);
    }

    #[test]
    fn test_herbivore_winner_gains_nothing() {
        let cfg = EnergyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut a = org(1, Diet::Herbivore, 1.0, 0.0, 50.0);
        let mut b = org(2, Diet::Omnivore, 0.1, 0.0, 30.0);
        let report = resolve_fight(&mut a, &mut b, &cfg, 0, &mut rng);
        assert!(report.is_kill());
        assert_eq!(a.energy, 50.0);
    }

    #[test]
    fn test_full_defense_loser_always_survives_unharmed_range() {
        let cfg = EnergyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let mut a = org(1, Diet::Carnivore, 1.0, 0.0, 50.0);
            let mut b = org(2, Diet::Herbivore, 0.1, 1.0, 30.0);
            let report = resolve_fight(&mut a, &mut b, &cfg, 0, &mut rng);
            assert!(b.alive);
            assert_eq!(report.outcome, FightOutcome::Wounded { energy_lost: 0.0 });
            assert_eq!(b.energy, 30.0);
        }
    }

    #[test]
    fn test_wound_bounded_by_defense() {
        let cfg = EnergyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..500 {
            let mut a = org(1, Diet::Carnivore, 1.0, 0.0, 50.0);
            let mut b = org(2, Diet::Herbivore, 0.1, 0.6, 30.0);
            let report = resolve_fight(&mut a, &mut b, &cfg, 0, &mut rng);
            match report.outcome {
                FightOutcome::Killed { energy_gained } => {
                    assert_eq!(energy_gained, 30.0 * cfg.carnivore_energy_gain);
                    assert_eq!(a.energy, 50.0 + energy_gained);
                }
                FightOutcome::Wounded { energy_lost } => {
                    assert!(energy_lost >= 0.0 && energy_lost < 30.0 * 0.4);
                    assert!((b.energy - (30.0 - energy_lost)).abs() < 1e-12);
                    assert_eq!(a.energy, 50.0);
                }
            }
        }
    }

    #[test]
    fn test_tied_scores_pick_exactly_one_loser() {
        let cfg = EnergyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let (mut first, mut second) = (0, 0);
        for _ in 0..400 {
            let mut a = org(1, Diet::Herbivore, 0.5, 0.5, 20.0);
            let mut b = org(2, Diet::Herbivore, 0.5, 0.5, 20.0);
            let report = resolve_fight(&mut a, &mut b, &cfg, 0, &mut rng);
            assert_ne!(report.winner, report.loser);
            let (w, l) = if report.winner == a.id { (&a, &b) } else { (&b, &a) };
            assert!(w.alive);
            assert_eq!(w.energy, 20.0);
            match report.outcome {
                FightOutcome::Killed { .. } => assert!(!l.alive),
                FightOutcome::Wounded { .. } => assert!(l.alive && l.energy <= 20.0),
            }
            if report.winner == a.id {
                first += 1;
            } else {
                second += 1;
            }
        }
        assert!(first > 100 && second > 100, "{first} vs {second}");
    }

    #[test]
    fn test_direct_fight_skips_already_fought() {
        let cfg = EnergyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut orgs = vec![
            org(1, Diet::Carnivore, 1.0, 1.0, 50.0),
            org(2, Diet::Carnivore, 0.5, 1.0, 50.0),
            org(3, Diet::Carnivore, 0.5, 1.0, 50.0),
        ];
        let reports = resolve_direct_fights(&mut orgs, &[(0, 1), (2, 1), (1, 0)], &cfg, 0, &mut rng);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].winner, OrganismId(1));
        assert!(!orgs[2].fought);
    }

    #[test]
    fn test_passive_attacker_never_engages() {
        let cfg = EnergyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut orgs = vec![org(1, Diet::Carnivore, 1.0, 0.0, 50.0), org(2, Diet::Herbivore, 0.1, 0.0, 10.0)];
        orgs[0].genes.aggressiveness = 0.0;
        let reports = resolve_direct_fights(&mut orgs, &[(0, 1)], &cfg, 0, &mut rng);
        assert!(reports.is_empty());
        assert!(orgs[1].alive && !orgs[0].fought);
    }

    #[test]
    fn test_food_split_by_diet_weight() {
        let cfg = EnergyConfig::default();
        let mut orgs = vec![
            org(1, Diet::Herbivore, 0.5, 0.5, 10.0),
            org(2, Diet::Omnivore, 0.5, 0.5, 10.0),
            org(3, Diet::Carnivore, 0.5, 0.5, 10.0),
        ];
        let shares = split_food(&mut orgs, &[0, 1, 2], &cfg);
        let total: f64 = shares.iter().map(|(_, e)| e).sum();
        assert!((total - cfg.energy_per_food).abs() < 1e-9);
        assert!((orgs[0].energy - (10.0 + 35.0 / 1.6)).abs() < 1e-9);
        assert!((orgs[1].energy - (10.0 + 35.0 * 0.6 / 1.6)).abs() < 1e-9);
        assert_eq!(orgs[2].energy, 10.0);
    }

    #[test]
    fn test_food_lost_when_nobody_eligible() {
        let cfg = EnergyConfig::default();
        let mut orgs = vec![org(1, Diet::Herbivore, 0.5, 0.5, 10.0)];
        orgs[0].alive = false;
        assert!(split_food(&mut orgs, &[0], &cfg).is_empty());
        assert_eq!(orgs[0].energy, 10.0);
    }

    #[test]
    fn test_contested_food_goes_to_survivors() {
        let cfg = EnergyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        // Both aggressive and defenseless: exactly one fight, exactly one dies.
        let mut orgs = vec![
            org(1, Diet::Omnivore, 1.0, 0.0, 60.0),
            org(2, Diet::Herbivore, 0.2, 0.0, 20.0),
        ];
        let mut contenders = vec![0, 1];
        let claim = resolve_food_cell(&mut orgs, &mut contenders, &cfg, 0, &mut rng);
        assert_eq!(claim.fights.len(), 1);
        assert!(!orgs[1].alive);
        assert_eq!(claim.shares.len(), 1);
        assert_eq!(claim.shares[0].0, 0);
        assert!((claim.distributed() - cfg.energy_per_food).abs() < 1e-9);
        assert!((orgs[0].energy - (60.0 + 20.0 * 0.7 + 35.0)).abs() < 1e-9);
    }
}
