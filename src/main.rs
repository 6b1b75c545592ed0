use anyhow::Result;
use clap::Parser;
use evogrid_core::init_logging;
use evogrid_lib::app::App;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path (defaults are used when it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of days to simulate
    #[arg(short, long, default_value_t = 100)]
    days: u64,

    /// Random seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run every day without prompting and print a final summary
    #[arg(long)]
    headless: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = App::load_config(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }

    let mut app = App::new(config, args.days)?;
    let mut stdout = io::stdout().lock();

    if args.headless {
        app.run_headless(&mut stdout)?;
    } else {
        app.run(io::stdin().lock(), &mut stdout)?;
    }

    Ok(())
}
