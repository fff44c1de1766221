// lake2png - Run the lake headless and save the last frame
//
// Pipeline:
//   1. Build the default board, apply any --rotate clicks
//   2. Hold the pointer on the seed cell for --hold frames
//   3. Run --frames frames in total
//   4. Write the RGBA frame (sidebar included) as PNG
//
// Usage: cargo run --bin lake2png -- out.png [--frames N] [--rotate ROW,COL]...

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use image::RgbaImage;
use lake_engine::{ConfigError, Encoder, LakeConfig, Simulation};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "lake2png", about = "Render the pipe lake to a PNG")]
struct Args {
    /// Output PNG path
    output: PathBuf,

    /// Frames to simulate
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Frames the pointer stays on the seed cell
    #[arg(long, default_value_t = 10)]
    hold: u32,

    /// Fine row under the pointer
    #[arg(long, default_value_t = 5)]
    seed_row: u32,

    /// Fine column under the pointer
    #[arg(long, default_value_t = 20)]
    seed_col: u32,

    /// Tile to click before running, as ROW,COL (repeatable)
    #[arg(long, value_parser = parse_tile)]
    rotate: Vec<(u32, u32)>,
}

#[derive(Debug, Error)]
enum DriverError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("frame buffer does not match {0}x{1}")]
    FrameSize(u32, u32),
    #[error("writing image: {0}")]
    Image(#[from] image::ImageError),
}

fn parse_tile(s: &str) -> Result<(u32, u32), String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = r.trim().parse().map_err(|e| format!("row: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("col: {e}"))?;
    Ok((row, col))
}

fn run(args: &Args) -> Result<(), DriverError> {
    let cfg = LakeConfig::default();
    let mut sim = Simulation::with_default_board(cfg)?;
    let mut out = Encoder::new(sim.config());
    let tile = cfg.widget_size as f32;

    for &(row, col) in &args.rotate {
        let x = col as f32 * tile + 0.5;
        let y = row as f32 * tile + 0.5;
        if sim.click(x, y).is_none() {
            log::warn!("no widget at tile ({row}, {col})");
        }
    }

    let (px, py) = (args.seed_col as f32 + 0.5, args.seed_row as f32 + 0.5);
    for frame in 0..args.frames {
        if frame < args.hold && !sim.pointer_move(px, py) {
            log::warn!("seed ({}, {}) is not open water", args.seed_row, args.seed_col);
        }
        sim.frame(&mut out);
    }
    log::info!("simulated {} frames", sim.frame_count());

    let (w, h) = (out.width(), out.height());
    let img = RgbaImage::from_raw(w, h, out.rgba().to_vec()).ok_or(DriverError::FrameSize(w, h))?;
    img.save(&args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
