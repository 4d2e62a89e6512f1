//! NSG demo entry point - prints generated signal batches as plain text
//!
//! One line per channel vector, 12 space-separated integers in fixed
//! channel order. `--json` switches to a JSON array instead.

use anyhow::{bail, Context, Result};
use nsg_core::{ChannelStats, Pose, Trajectory};
use nsg_synthesis::{
    ClusterConfig, ClusterSynthesizer, NoiseConfig, NoiseKind, TrajectoryConfig,
    TrajectoryGenerator,
};
use tracing::{debug, info};

const USAGE: &str = "\
Usage: nsg-cli [trajectory|cluster] [options]

Options:
  --signals N      number of signals to generate (default 16)
  --noise KIND     trajectory noise kind: gaussian | uniform (default gaussian)
  --amplitude F    trajectory noise amplitude (default 0.0)
  --period MS      trajectory sample period in milliseconds (default 1)
  --strength F     cluster blend strength in [0, 1] (default 0.5)
  --seed N         fixed random seed for reproducible output
  --json           emit a JSON array instead of plain text
  --help           print this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Trajectory,
    Cluster,
}

#[derive(Debug)]
struct Args {
    strategy: Strategy,
    signals: usize,
    noise: NoiseKind,
    amplitude: f32,
    period_ms: u32,
    strength: f32,
    seed: Option<u64>,
    json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            strategy: Strategy::Trajectory,
            signals: 16,
            noise: NoiseKind::Gaussian,
            amplitude: 0.0,
            period_ms: 1,
            strength: 0.5,
            seed: None,
            json: false,
        }
    }
}

fn parse_args<I: Iterator<Item = String>>(mut raw: I) -> Result<Args> {
    let mut args = Args::default();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "trajectory" => args.strategy = Strategy::Trajectory,
            "cluster" => args.strategy = Strategy::Cluster,
            "--signals" => {
                args.signals = next_value(&mut raw, "--signals")?
                    .parse()
                    .context("--signals expects a positive integer")?;
            }
            "--noise" => {
                args.noise = next_value(&mut raw, "--noise")?.parse()?;
            }
            "--amplitude" => {
                args.amplitude = next_value(&mut raw, "--amplitude")?
                    .parse()
                    .context("--amplitude expects a number")?;
            }
            "--period" => {
                args.period_ms = next_value(&mut raw, "--period")?
                    .parse()
                    .context("--period expects a positive integer")?;
            }
            "--strength" => {
                args.strength = next_value(&mut raw, "--strength")?
                    .parse()
                    .context("--strength expects a number")?;
            }
            "--seed" => {
                let seed = next_value(&mut raw, "--seed")?
                    .parse()
                    .context("--seed expects an integer")?;
                args.seed = Some(seed);
            }
            "--json" => args.json = true,
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("Unknown argument '{}'\n{}", other, USAGE),
        }
    }

    Ok(args)
}

fn next_value<I: Iterator<Item = String>>(raw: &mut I, flag: &str) -> Result<String> {
    raw.next()
        .with_context(|| format!("{} expects a value", flag))
}

/// The default demo motion: a reach from the origin to (10, 20, 30)
/// with a quarter-turn pitch, fingers extending, over 10ms.
fn demo_trajectory() -> Result<Trajectory> {
    let end = Pose {
        x: 10.0,
        y: 20.0,
        z: 30.0,
        pitch: std::f32::consts::FRAC_PI_2,
        yaw: std::f32::consts::FRAC_PI_4,
        roll: 0.0,
        fingers_extended: true,
        relative_time_ms: 10,
    };
    Ok(Trajectory::new(Pose::origin(), end)?)
}

fn run_trajectory(args: &Args) -> Result<()> {
    let config = TrajectoryConfig {
        sample_period_ms: args.period_ms,
        noise: NoiseConfig::new(args.noise, args.amplitude),
        seed: args.seed,
        ..Default::default()
    };
    let mut generator = TrajectoryGenerator::new(config)?;

    let trajectory = demo_trajectory()?;
    let batch = generator.generate(&trajectory, args.signals)?;
    info!(
        batch_id = %batch.id,
        signals = batch.len(),
        sample_period_ms = batch.sample_period_ms,
        "generated trajectory batch"
    );

    if args.json {
        let samples: Vec<_> = batch.signals.iter().map(|s| &s.samples).collect();
        println!("{}", serde_json::to_string(&samples)?);
    } else {
        for signal in &batch.signals {
            for sample in &signal.samples {
                println!("{}", sample);
            }
        }
    }

    for signal in &batch.signals {
        for (channel, stat) in ChannelStats::per_channel(&signal.samples).iter().enumerate() {
            debug!(channel, min = stat.min, max = stat.max, mean = stat.mean, "channel stats");
        }
    }

    Ok(())
}

fn run_cluster(args: &Args) -> Result<()> {
    let config = ClusterConfig {
        cluster_strength: args.strength,
        seed: args.seed,
        ..Default::default()
    };
    let mut synthesizer = ClusterSynthesizer::new(config)?;

    let batch = synthesizer.generate(args.signals)?;
    info!(
        batch_id = %batch.id,
        snapshots = batch.len(),
        "generated cluster batch"
    );

    if args.json {
        println!("{}", serde_json::to_string(&batch.snapshots)?);
    } else {
        for snapshot in &batch.snapshots {
            println!("{}", snapshot);
        }
    }

    for (channel, stat) in ChannelStats::per_channel(&batch.snapshots).iter().enumerate() {
        debug!(channel, min = stat.min, max = stat.max, mean = stat.mean, "channel stats");
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = parse_args(std::env::args().skip(1))?;
    match args.strategy {
        Strategy::Trajectory => run_trajectory(&args),
        Strategy::Cluster => run_cluster(&args),
    }
}
