//! Plain-text rendering of engine state for the command loop.

use evogrid_core::{DaySummary, DietCensus};
use evogrid_data::{Organism, OrganismId};
use std::fmt::Write as _;

/// `1, 2, 3`
pub fn id_list(ids: &[OrganismId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `[1, 2, 3]`, or `None` when empty.
fn bracketed_or_none(ids: &[OrganismId]) -> String {
    if ids.is_empty() {
        "None".to_string()
    } else {
        format!("[{}]", id_list(ids))
    }
}

/// Multi-line record of one organism. Sight is shown as the effective
/// radius; death details are appended for the dead.
pub fn organism_stats(org: &Organism) -> String {
    let parent = org
        .parent_id
        .map_or_else(|| "None".to_string(), |id| format!("Organism {id}"));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "=== Organism {} ({}) ===",
        org.id,
        if org.alive { "Alive" } else { "Dead" }
    );
    let _ = writeln!(out, "Species: {}", org.species);
    let _ = writeln!(out, "Age: {} days", org.age);
    let _ = writeln!(out, "Born on day {}", org.birth_day);
    let _ = writeln!(out, "Position: {}", org.position);
    let _ = writeln!(out, "Energy: {:.2}", org.energy);
    let _ = writeln!(out, "Diet: {}", org.diet());
    let _ = writeln!(out, "Parent: {parent}");
    let _ = writeln!(out, "Children: {}", bracketed_or_none(&org.children));
    let _ = writeln!(out, "Victims: {}", bracketed_or_none(&org.victims));
    let _ = writeln!(out, "Genes:");
    let _ = writeln!(out, "  Aggressiveness: {:.2}", org.aggressiveness());
    let _ = writeln!(out, "  Sight Range: {}", org.sight_range());
    let _ = writeln!(out, "  Strength: {:.2}", org.strength());
    let _ = writeln!(out, "  Defense: {:.2}", org.defense());
    let _ = writeln!(out, "  Efficiency: {:.2}", org.efficiency());
    let _ = write!(out, "  Energy Passed On: {:.2}", org.energy_passed_on());

    if !org.alive {
        if let Some(cause) = org.cause_of_death {
            let _ = write!(out, "\nCause of Death: {cause}");
        }
        if let Some(killer) = org.killer_id {
            let _ = write!(out, "\nKilled by: Organism {killer}");
        }
        if let Some(day) = org.death_day {
            let _ = write!(out, "\nDied on day {day}");
        }
    }
    out
}

/// Header printed before each day's prompt.
pub fn daily_summary(day: u64, alive: &[OrganismId]) -> String {
    format!(
        "\n=== Day {day} Summary ===\nAlive organisms ({}): {}\nType an organism ID to inspect, or 'next' to continue",
        alive.len(),
        id_list(alive)
    )
}

pub fn dead_summary(dead: &[OrganismId]) -> String {
    format!("Dead organisms ({}): {}", dead.len(), id_list(dead))
}

pub fn diet_summary(census: &DietCensus) -> String {
    format!(
        "Herbivores ({}): {}\nOmnivores ({}): {}\nCarnivores ({}): {}",
        census.herbivores.len(),
        id_list(&census.herbivores),
        census.omnivores.len(),
        id_list(&census.omnivores),
        census.carnivores.len(),
        id_list(&census.carnivores),
    )
}

/// One-line digest of a processed day, used in headless runs.
pub fn day_digest(summary: &DaySummary) -> String {
    format!(
        "Day {:>4}: population {:>4} | births {:>3} | deaths {:>3} | fights {:>3} | kills {:>3} | food eaten {:>3}",
        summary.day,
        summary.population,
        summary.births,
        summary.deaths,
        summary.fights,
        summary.kills,
        summary.food_eaten,
    )
}

pub fn lineage_summary(id: OrganismId, ancestors: &[OrganismId]) -> String {
    if ancestors.is_empty() {
        format!("Organism {id} has no recorded ancestors")
    } else {
        let chain: Vec<String> = std::iter::once(id)
            .chain(ancestors.iter().copied())
            .map(|a| a.to_string())
            .collect();
        format!("Lineage: {}", chain.join(" <- "))
    }
}

pub const HELP: &str = "Commands:
  [ID]          - Inspect organism
  json [ID]     - Organism record as JSON
  lineage [ID]  - Ancestors of an organism
  next [N]      - Continue 1 (or N) days
  oldest        - Ten oldest living organisms
  dead          - All dead organisms
  diets         - Living organisms by diet
  add [DIET]    - Add a random organism (herbivore, omnivore, carnivore)
  quit          - End simulation early";
