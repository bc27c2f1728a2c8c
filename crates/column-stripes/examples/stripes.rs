//! Example: striped-band detection on an RGB image.
//!
//! Classifies each pixel as red (target), white (background) or neither
//! with simple channel thresholds, then scans every `--col-step`-th column
//! top-to-bottom for runs of near-equal red/white bands.
//!
//! Results are written to a JSON file next to the input image.
//!
//! Run from the workspace root:
//!   cargo run -p column-stripes --example stripes -- --help
//!   RUST_LOG=debug cargo run -p column-stripes --example stripes -- --input data/flag.png

use std::time::Instant;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use column_stripes::{ColumnScan, Image, MASK_SET, StripeConfig, StripeScanner};
use image::ImageReader;
use log::info;
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Find red/white striped regions column by column")]
struct Args {
    /// Path to the input image
    #[arg(long, default_value = "data/stripes.png")]
    input: String,

    /// Scan every N-th column
    #[arg(long, default_value_t = 1)]
    col_step: usize,

    /// Minimum red channel for a red pixel
    #[arg(long, default_value_t = 150)]
    red_min: u8,

    /// Maximum green/blue channel for a red pixel
    #[arg(long, default_value_t = 110)]
    red_max_gb: u8,

    /// Minimum value of every channel for a white pixel
    #[arg(long, default_value_t = 190)]
    white_min: u8,

    /// Lower bound of the adjacent streak ratio
    #[arg(long, default_value_t = 0.5)]
    ratio_low: f32,

    /// Upper bound of the adjacent streak ratio
    #[arg(long, default_value_t = 2.0)]
    ratio_high: f32,

    /// Minimum white fraction of the gaps between red bands
    #[arg(long, default_value_t = 0.3)]
    density: f32,

    /// Bridge white gaps of up to this many pixels inside red bands
    #[arg(long, default_value_t = 0)]
    gap_tolerance: usize,

    /// Output JSON path (default: <input stem>_stripes.json next to input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RegionDto {
    start: usize,
    end: usize,
    stripe_count: usize,
    mean_stripe_width: f32,
    background_fraction: f32,
}

#[derive(Serialize)]
struct ColumnDto {
    col: usize,
    accepted: bool,
    regions: Vec<RegionDto>,
}

#[derive(Serialize)]
struct ScanResult {
    width: usize,
    height: usize,
    /// Wall-clock time of the column scan, in milliseconds.
    elapsed_ms: f64,
    columns: Vec<ColumnDto>,
}

impl From<&ColumnScan> for ColumnDto {
    fn from(scan: &ColumnScan) -> Self {
        Self {
            col: scan.col,
            accepted: scan.stripes.accepted,
            regions: scan
                .stripes
                .regions
                .iter()
                .map(|r| RegionDto {
                    start: r.start,
                    end: r.end,
                    stripe_count: r.stripe_count,
                    mean_stripe_width: r.mean_stripe_width,
                    background_fraction: r.background_fraction,
                })
                .collect(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Splits an interleaved RGB buffer into red and white class masks.
fn classify(
    rgb: &[u8],
    width: usize,
    height: usize,
    args: &Args,
) -> Result<(Image<u8>, Image<u8>)> {
    let mut red = vec![0u8; width * height];
    let mut white = vec![0u8; width * height];
    for (i, px) in rgb.chunks_exact(3).enumerate() {
        let (r, g, b) = (px[0], px[1], px[2]);
        if r >= args.red_min && g <= args.red_max_gb && b <= args.red_max_gb {
            red[i] = MASK_SET;
        } else if r >= args.white_min && g >= args.white_min && b >= args.white_min {
            white[i] = MASK_SET;
        }
    }
    Ok((
        Image::from_vec(width, height, red).context("building red mask")?,
        Image::from_vec(width, height, white).context("building white mask")?,
    ))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.col_step > 0, "--col-step must be > 0");

    let img_path = &args.input;
    let out_path = args.out.clone().unwrap_or_else(|| {
        let p = std::path::Path::new(img_path);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(std::path::Path::new("."));
        dir.join(format!("{stem}_stripes.json"))
            .to_string_lossy()
            .into_owned()
    });

    let rgb = ImageReader::open(img_path)
        .with_context(|| format!("opening {img_path}"))?
        .decode()
        .with_context(|| format!("decoding {img_path}"))?
        .into_rgb8();

    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    println!("loaded {img_path}: {width}x{height}");

    let (red, white) = classify(rgb.as_raw(), width, height, &args)?;

    let cfg = StripeConfig {
        ratio_low: args.ratio_low,
        ratio_high: args.ratio_high,
        density_threshold: args.density,
        gap_tolerance: args.gap_tolerance,
    };
    info!("config: {cfg:?}");

    let mut scanner = StripeScanner::new();
    let t0 = Instant::now();
    let scans = scanner
        .scan_cols(
            &red.as_view(),
            &white.as_view(),
            (0..width).step_by(args.col_step),
            &cfg,
        )
        .context("scanning columns")?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let hits = scans
        .iter()
        .filter(|s| !s.stripes.regions.is_empty())
        .count();
    println!(
        "{hits}/{} scanned columns contain stripe regions  ({elapsed_ms:.2} ms)",
        scans.len()
    );

    let result = ScanResult {
        width,
        height,
        elapsed_ms,
        columns: scans.iter().map(ColumnDto::from).collect(),
    };

    let out_file =
        std::fs::File::create(&out_path).with_context(|| format!("creating {out_path}"))?;
    serde_json::to_writer_pretty(out_file, &result)
        .with_context(|| format!("writing JSON to {out_path}"))?;

    println!("results written to {out_path}");
    Ok(())
}
