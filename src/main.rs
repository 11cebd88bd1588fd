//! Flood Climb entry point
//!
//! Runs the simulation headless: the autopilot plays, and each frame goes to
//! a render sink (log lines by default, JSON lines with `--trace`).

use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use flood_climb::host::{self, Autopilot, FramePacer, RunSummary};
use flood_climb::renderer::{LogSink, TraceSink};
use flood_climb::sim::GameState;
use flood_climb::{Tuning, Variant};

/// Climb the platforms ahead of the rising flood (autopilot, headless)
#[derive(Parser, Debug, Default)]
#[command(name = "flood-climb", version, about, long_about = None)]
struct Args {
    /// Game variant: classic, triple-jump or planks
    #[arg(long, value_name = "NAME", value_parser = Variant::from_str)]
    variant: Option<Variant>,

    /// Tuning JSON; missing fields use defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Platform layout seed (default: clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(long, value_name = "N")]
    frames: Option<u64>,

    /// Times the autopilot restarts after drowning
    #[arg(long, value_name = "N", default_value_t = 0)]
    restarts: u32,

    /// Write one JSON frame snapshot per line to stdout
    #[arg(long)]
    trace: bool,

    /// Run as fast as possible instead of at the frame rate
    #[arg(long)]
    unpaced: bool,

    /// Print the effective tuning as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn load_tuning(args: &Args) -> Result<Tuning> {
    let mut tuning = match &args.config {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    if let Some(variant) = args.variant {
        tuning.apply_preset(variant);
    }
    tuning.validate().context("tuning rejected")?;
    Ok(tuning)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut tuning = load_tuning(&args)?;
    if args.dump_config {
        println!("{}", tuning.to_json_pretty()?);
        return Ok(());
    }
    tuning.backdrop = tuning.backdrop.resolve();

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    log::info!("Flood Climb ({}) starting with seed {}", tuning.variant, seed);

    let mut pacer = (!args.unpaced).then(|| FramePacer::new(tuning.frame_rate));
    let status_every = u64::from(tuning.frame_rate);
    let backdrop = tuning.backdrop.clone();
    let mut state = GameState::new(seed, tuning);
    let mut input = Autopilot::new(args.restarts);

    let summary: RunSummary = if args.trace {
        let mut sink = TraceSink::new(io::stdout().lock());
        let summary = host::run(&mut state, &mut input, &mut sink, pacer.as_mut(), args.frames)?;
        sink.finish()?;
        summary
    } else {
        let mut sink = LogSink::new(backdrop, status_every);
        host::run(&mut state, &mut input, &mut sink, pacer.as_mut(), args.frames)?
    };

    log::info!(
        "Finished after {} frames and {} run(s): final score {}, best {}",
        summary.frames,
        summary.runs,
        summary.final_score,
        summary.best_score
    );
    Ok(())
}
