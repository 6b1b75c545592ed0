pub mod input;
pub mod report;
pub mod state;

pub use input::{Command, CommandError};
pub use state::App;

use anyhow::{Context, Result};
use evogrid_data::OrganismId;
use std::io::{BufRead, Write};

/// Number of organisms listed by `oldest`.
pub const OLDEST_COUNT: usize = 10;

enum Flow {
    Advance,
    Stop,
}

impl App {
    /// Interactive run. Before each day the summary is printed and
    /// commands are served until `next`; `quit` or end of input stops.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        for _ in 0..self.days {
            writeln!(
                out,
                "{}",
                report::daily_summary(self.world.day, &self.world.living_ids())
            )?;

            if self.skip_prompts > 0 {
                self.skip_prompts -= 1;
            } else if let Flow::Stop = self.prompt(&mut input, out)? {
                writeln!(out, "\n=== Simulation ended early ===")?;
                writeln!(out, "Stopped after day {}", self.world.day)?;
                self.running = false;
                return Ok(());
            }

            self.world.advance_one_day();
        }

        writeln!(out, "\n=== Simulation completed ===")?;
        writeln!(out, "Finished {} days of simulation", self.days)?;
        self.running = false;
        Ok(())
    }

    fn prompt<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Flow> {
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line).context("Failed to read command")? == 0 {
                return Ok(Flow::Stop);
            }

            match Command::parse(&line) {
                Ok(Command::Next(days)) => {
                    self.skip_prompts = days - 1;
                    return Ok(Flow::Advance);
                }
                Ok(Command::Quit) => return Ok(Flow::Stop),
                Ok(command) => self.execute(command, out)?,
                Err(CommandError::Empty) => {}
                Err(err) => {
                    writeln!(out, "Invalid input: {err}")?;
                    writeln!(out, "{}", report::HELP)?;
                }
            }
        }
    }

    /// Serves one query or edit command. Lookup failures are reported to
    /// `out`, not returned.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::Oldest => {
                let ids: Vec<OrganismId> = self
                    .world
                    .oldest(OLDEST_COUNT)
                    .iter()
                    .map(|o| o.id)
                    .collect();
                writeln!(out, "[{}]", report::id_list(&ids))?;
            }
            Command::Dead => {
                let ids: Vec<OrganismId> = self.world.death_log().iter().map(|o| o.id).collect();
                writeln!(out, "{}", report::dead_summary(&ids))?;
            }
            Command::Diets => {
                writeln!(out, "{}", report::diet_summary(&self.world.diet_census()))?;
            }
            Command::Inspect(id) => match self.world.inspect(id) {
                Ok(org) => writeln!(out, "{}", report::organism_stats(org))?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Json(id) => match self.world.inspect(id) {
                Ok(org) => {
                    let json = serde_json::to_string_pretty(org)
                        .context("Failed to serialize organism")?;
                    writeln!(out, "{json}")?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Lineage(id) => match self.world.lineage(id) {
                Ok(ancestors) => writeln!(out, "{}", report::lineage_summary(id, &ancestors))?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Add(diet) => match self.world.spawn_random(diet) {
                Ok(id) => writeln!(out, "Added organism {id} ({diet})")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Help => writeln!(out, "{}", report::HELP)?,
            Command::Next(_) | Command::Quit => {}
        }
        Ok(())
    }

    /// Runs every day without prompting, printing a digest per day and a
    /// final census. Stops early if the population dies out.
    pub fn run_headless<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for _ in 0..self.days {
            let summary = self.world.advance_one_day();
            writeln!(out, "{}", report::day_digest(&summary))?;
            if self.world.population_count() == 0 {
                writeln!(out, "Population died out after day {}", self.world.day)?;
                break;
            }
        }

        writeln!(out, "\n=== Simulation completed ===")?;
        writeln!(out, "Days simulated: {}", self.world.day)?;
        writeln!(
            out,
            "Grid: {size}x{size} ({} cells)",
            self.world.config.cell_count(),
            size = self.world.config.world.world_size
        )?;
        writeln!(
            out,
            "Alive organisms ({}): {}",
            self.world.population_count(),
            report::id_list(&self.world.living_ids())
        )?;
        writeln!(out, "{}", report::diet_summary(&self.world.diet_census()))?;
        writeln!(out, "Dead organisms: {}", self.world.death_log().len())?;
        writeln!(out, "Totals: {}", self.world.metrics.summary())?;
        writeln!(
            out,
            "Wall time: {:.3}s",
            self.world.metrics.elapsed().as_secs_f64()
        )?;
        self.running = false;
        Ok(())
    }
}
