use std::path::PathBuf;

use clap::Parser;
use rocket_launch::{
    logging::{init_logging, parse_log_level},
    telemetry_system::telemetry::format_time,
    *,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "rocket-launch")]
#[command(version = "0.1.0")]
#[command(about = "Headless single-stage rocket launch simulation", long_about = None)]
struct Cli {
    /// Mission configuration (YAML). Built-in defaults are used otherwise.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the explosion debris, overrides the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fly a recorded telemetry log instead of integrating
    #[arg(long, value_name = "CSV")]
    replay: Option<PathBuf>,

    /// Write the flight telemetry to a CSV log
    #[arg(long, value_name = "CSV")]
    export: Option<PathBuf>,

    /// Abort the mission if it has not finished after this many ticks
    #[arg(long, default_value_t = MAX_MISSION_TICKS)]
    max_ticks: u64,

    /// trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(parse_log_level(&cli.log_level)?)?;

    let mut config = match &cli.config {
        Some(path) => MissionConfig::from_file(path)?,
        None => MissionConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let mut mission = match &cli.replay {
        Some(path) => {
            let samples = read_log_file(path, config.gravity)?;
            Mission::from_replay(config, samples)?
        }
        None => Mission::new(config)?,
    };

    let summary = mission.run_to_summary(cli.max_ticks)?;
    mission.acknowledge()?;

    if let Some(path) = &cli.export {
        write_log_file(path, mission.recorder().samples())?;
        info!(path = %path.display(), samples = summary.samples, "telemetry exported");
    }

    println!("Mission timeline:");
    for transition in mission.transitions() {
        println!(
            "  tick {:>6} | T+{:>10} | {:?}",
            transition.tick,
            format_time(transition.mission_time),
            transition.phase
        );
    }
    println!();
    print!("{}", summary);

    Ok(())
}
