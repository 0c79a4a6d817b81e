//! Replays a recorded skeleton stream through the gesture recognizer.

use anyhow::{Context, Result};
use body_gesture_recognition::{
    config::Config,
    constants::NO_GESTURE_NAME,
    library::{GestureKind, GestureLibrary},
    recognizer::GestureRecognizer,
    replay::Recording,
};
use clap::Parser;
use log::{info, warn};
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Skeleton recording to replay (YAML)
    #[arg(short, long)]
    recording: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Clear history whenever no user is tracked
    #[arg(long)]
    reset_on_loss: bool,

    /// Replay at the recording's frame rate instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if args.reset_on_loss {
        config.recognition.reset_on_tracking_loss = true;
    }
    if args.realtime {
        config.replay.realtime = true;
    }
    config.validate()?;

    let recording = Recording::from_file(&args.recording)
        .with_context(|| format!("Failed to load recording {}", args.recording))?;
    info!("Replaying {} frames from {}", recording.len(), args.recording);

    let mut recognizer = GestureRecognizer::new(GestureLibrary::standard(), &config.recognition)?;
    let interval = config.replay.frame_interval();
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();

    for (index, frame) in recording.frames.iter().enumerate() {
        if let Some(gesture) = recognizer.tick(frame) {
            println!("frame {:>6}: {}", index, gesture);
            *counts.entry(gesture.as_str()).or_default() += 1;
        }

        if config.replay.realtime {
            std::thread::sleep(interval);
        }
    }

    if counts.is_empty() {
        println!("{}", NO_GESTURE_NAME);
    } else {
        for kind in GestureKind::ALL {
            if let Some(count) = counts.get(kind.as_str()) {
                println!("{:>14}: {}", kind, count);
            }
        }
    }

    Ok(())
}
