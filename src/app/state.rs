use anyhow::{Context, Result};
use evogrid_core::config::SimConfig;
use evogrid_core::World;
use std::path::Path;

pub struct App {
    pub world: World,
    /// Total days to run.
    pub days: u64,
    /// Days still to run without prompting, from `next N`.
    pub skip_prompts: u64,
    pub running: bool,
}

impl App {
    pub fn new(config: SimConfig, days: u64) -> Result<Self> {
        let world = World::new(config).context("Failed to create world")?;
        Ok(Self {
            world,
            days,
            skip_prompts: 0,
            running: true,
        })
    }

    /// Reads a TOML config file. A missing file yields the defaults.
    pub fn load_config(path: &Path) -> Result<SimConfig> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(SimConfig::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        SimConfig::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
