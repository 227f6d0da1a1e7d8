use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use canvasgrid::{Color, GridCanvas, Pixmap};

/// Render a grid of colored squares to a PPM image.
#[derive(Parser, Debug)]
#[command(name = "canvasgrid", version, about)]
struct Args {
    /// Number of grid columns
    #[arg(long, default_value_t = 16)]
    cols: u32,

    /// Number of grid rows
    #[arg(long, default_value_t = 16)]
    rows: u32,

    /// Pixel edge length of each square
    #[arg(long, default_value_t = 8)]
    square_size: u32,

    /// Background color used for cells set without an explicit color
    #[arg(long, default_value = "#333")]
    background: Color,

    /// Paint this many uniformly random cells (ignored with --scene)
    #[arg(long, default_value_t = 24)]
    fill: usize,

    /// RNG seed for reproducible random fills
    #[arg(long)]
    seed: Option<u64>,

    /// JSON scene file listing cells to paint instead of a random fill
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Write the PPM here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the SHA-256 of the raw RGBA buffer instead of emitting a PPM
    #[arg(long)]
    digest: bool,
}

/// One painted cell in a scene file: `{"x": 1, "y": 2, "color": "#f00"}`.
/// A missing color means the background color.
#[derive(Deserialize, Debug)]
struct SceneCell {
    x: i32,
    y: i32,
    color: Option<Color>,
}

#[derive(Deserialize, Debug)]
struct Scene {
    cells: Vec<SceneCell>,
}

// Palette for random fills.
const PALETTE: [Color; 6] = [
    Color::rgb(0xe6, 0x3b, 0x46),
    Color::rgb(0xf4, 0xa2, 0x61),
    Color::rgb(0xe9, 0xc4, 0x6a),
    Color::rgb(0x2a, 0x9d, 0x8f),
    Color::rgb(0x26, 0x46, 0x53),
    Color::rgb(0x1e, 0x90, 0xff),
];

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut canvas = GridCanvas::with_background(
        Pixmap::new(0, 0),
        args.square_size,
        args.cols,
        args.rows,
        args.background,
    )?;

    match &args.scene {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read scene {}", path.display()))?;
            let scene: Scene = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse scene {}", path.display()))?;
            info!("painting {} scene cells", scene.cells.len());
            for cell in &scene.cells {
                canvas.set_square_color([cell.x, cell.y], cell.color)?;
            }
        }
        None => {
            let mut rng: StdRng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            info!("painting {} random cells", args.fill);
            for _ in 0..args.fill {
                let pos = canvas.random_position_with(&mut rng);
                let color = *PALETTE.choose(&mut rng).unwrap_or(&canvasgrid::DEFAULT_BACKGROUND);
                canvas.set_square_color(pos, Some(color))?;
            }
        }
    }

    canvas.draw();
    let pixmap = canvas.into_surface();

    if args.digest {
        let digest = Sha256::digest(pixmap.data());
        println!("{}", hex::encode(digest));
        return Ok(());
    }

    let ppm = pixmap.to_ppm();
    match &args.output {
        Some(path) => fs::write(path, &ppm)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(&ppm).context("failed to write to stdout")?,
    }
    Ok(())
}
