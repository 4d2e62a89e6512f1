//! Basic usage examples for the NSG framework
//!
//! Demonstrates both generation strategies end to end: trajectory
//! interpolation with noise injection, and cluster-activation synthesis.

use nsg_core::{ChannelStats, NsgResult, Pose, Trajectory};
use nsg_synthesis::{
    ClusterConfig, ClusterSynthesizer, NoiseConfig, NoiseKind, TrajectoryConfig,
    TrajectoryGenerator,
};

fn main() -> NsgResult<()> {
    println!("=== NSG-Framework Basic Usage Examples ===\n");

    trajectory_example()?;
    cluster_example()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

/// Example 1: Trajectory-mode generation
fn trajectory_example() -> NsgResult<()> {
    println!("1. Trajectory Interpolation Example");
    println!("   Reaching motion: origin to (10, 20, 30) over 50ms...");

    let end = Pose {
        x: 10.0,
        y: 20.0,
        z: 30.0,
        pitch: std::f32::consts::FRAC_PI_2,
        yaw: std::f32::consts::FRAC_PI_4,
        roll: 0.0,
        fingers_extended: true,
        relative_time_ms: 50,
    };
    let trajectory = Trajectory::new(Pose::origin(), end)?;

    let config = TrajectoryConfig {
        sample_period_ms: 5,
        noise: NoiseConfig::new(NoiseKind::Gaussian, 0.5),
        seed: Some(42),
        ..Default::default()
    };
    let mut generator = TrajectoryGenerator::new(config)?;
    let batch = generator.generate(&trajectory, 4)?;

    println!("   ✓ Generated batch {} with {} signals", batch.id, batch.len());
    for (i, signal) in batch.signals.iter().enumerate() {
        let stats = ChannelStats::per_channel(&signal.samples);
        println!(
            "   ✓ Signal {}: {} samples, channel 0 range [{}, {}]",
            i,
            signal.len(),
            stats[0].min,
            stats[0].max
        );
    }

    Ok(())
}

/// Example 2: Cluster-mode generation
fn cluster_example() -> NsgResult<()> {
    println!("\n2. Cluster Activation Example");
    println!("   Generating cluster-driven firing snapshots...");

    let config = ClusterConfig {
        cluster_strength: 0.7,
        seed: Some(42),
        ..Default::default()
    };
    let mut synthesizer = ClusterSynthesizer::new(config)?;
    let batch = synthesizer.generate(8)?;

    println!("   ✓ Generated batch {} with {} snapshots", batch.id, batch.len());
    for snapshot in &batch.snapshots {
        println!("   {}", snapshot);
    }

    let stats = ChannelStats::per_channel(&batch.snapshots);
    for (channel, stat) in stats.iter().enumerate() {
        println!(
            "   ✓ Channel {:2}: min={:4} max={:4} mean={:6.1}",
            channel, stat.min, stat.max, stat.mean
        );
    }

    Ok(())
}
