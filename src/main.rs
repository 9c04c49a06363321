//! bijou - accessory overlay replay tool
//!
//! Main entry point: replays a recorded landmark capture (JSON lines,
//! one frame packet per line) through the fusion pipeline and writes
//! per-frame output as JSON lines.

use clap::Parser;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bijou::{
    config::Config,
    error::InputError,
    landmark::FrameInput,
    overlay::AccessoryKind,
    FramePipeline,
};

/// bijou - virtual accessory overlay pipeline
#[derive(Parser, Debug)]
#[command(name = "bijou", version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recorded landmark capture (JSON lines); reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Accessory to draw: ring, necklace, or tiara (overrides config)
    #[arg(short, long)]
    accessory: Option<String>,

    /// Drawing surface width in pixels (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Drawing surface height in pixels (overrides config)
    #[arg(long)]
    height: Option<u32>,

    /// Emit smoothed snapshots only, without display lists
    #[arg(long)]
    snapshots_only: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    info!("Starting {} v{}", bijou::NAME, bijou::VERSION);

    // Load configuration
    let mut config = if let Some(ref path) = args.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };

    // Apply CLI overrides
    if let Some(ref accessory) = args.accessory {
        config.accessory.kind = AccessoryKind::from_str(accessory);
    }
    if let Some(width) = args.width {
        config.surface.width = width;
    }
    if let Some(height) = args.height {
        config.surface.height = height;
    }

    config.validate()?;

    info!("Accessory: {}", config.accessory.kind.as_str());
    info!(
        "Surface: {}x{}",
        config.surface.width, config.surface.height
    );

    let reader: Box<dyn BufRead> = match args.input {
        Some(ref path) => {
            info!("Replaying capture from: {}", path.display());
            Box::new(BufReader::new(std::fs::File::open(path)?))
        }
        None => {
            info!("Reading capture from stdin");
            Box::new(BufReader::new(std::io::stdin()))
        }
    };

    let mut pipeline = FramePipeline::from_config(&config);
    let pacing = std::time::Duration::from_millis(config.replay.frame_interval_ms);

    let mut frames = 0usize;
    let mut tracked = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        frames += 1;

        let input = match parse_frame(&line) {
            Ok(input) => input,
            Err(e) => {
                warn!("Skipping frame {}: {}", frames, e);
                continue;
            }
        };

        match pipeline.advance(&input) {
            Some(output) => {
                tracked += 1;
                let json = if args.snapshots_only {
                    serde_json::to_string(&output.snapshot)?
                } else {
                    serde_json::to_string(&output)?
                };
                println!("{}", json);
            }
            None => debug!("Frame {}: nothing trackable", frames),
        }

        if !pacing.is_zero() {
            std::thread::sleep(pacing);
        }
    }

    info!(
        "Replay finished: {} frames processed, {} with usable tracking",
        frames, tracked
    );

    Ok(())
}

fn parse_frame(line: &str) -> Result<FrameInput, InputError> {
    serde_json::from_str(line).map_err(|e| InputError::Parse(e.to_string()))
}
