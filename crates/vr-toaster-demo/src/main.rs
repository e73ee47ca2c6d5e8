//! Toaster demo
//!
//! Drives the three toast groups headlessly with simulated head and hand
//! tracking and logs where each group ends up.
//!
//! Usage:
//!   toaster-demo                          # Defaults, 8 seconds at 72 fps
//!   toaster-demo --config toaster.toml    # Custom panel sizes and styles
//!   toaster-demo --no-realtime            # Run frames back to back
//!   RUST_LOG=vr_toaster=debug toaster-demo

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use vr_toaster::ToasterConfig;
use vr_toaster_demo::{run_demo, DemoOptions, MAX_FPS};

/// Headless walkthrough of hand and frontal toasts
#[derive(Parser, Debug)]
#[command(name = "toaster-demo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short = 'n', long, default_value_t = 576)]
    frames: u64,

    /// Frames per second
    #[arg(
        long,
        default_value_t = 72,
        value_parser = clap::value_parser!(u32).range(1..=MAX_FPS as i64)
    )]
    fps: u32,

    /// Log group poses every N frames (0 disables)
    #[arg(long, default_value_t = 36)]
    log_every: u64,

    /// Run frames back to back instead of pacing them
    #[arg(long)]
    no_realtime: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = &args.log_level;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "toaster_demo={level},vr_toaster_demo={level},vr_toaster={level}"
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    let config = match &args.config {
        Some(path) => ToasterConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ToasterConfig::default(),
    };

    info!(
        frames = args.frames,
        fps = args.fps,
        "starting toaster demo",
    );
    run_demo(DemoOptions {
        config,
        frames: args.frames,
        fps: args.fps,
        log_every: args.log_every,
        realtime: !args.no_realtime,
    })
    .await
}
