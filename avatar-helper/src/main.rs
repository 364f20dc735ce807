use anyhow::{Context, Result, bail};
use bg_normalizer::{NormalizeConfig, normalize_files};
use clap::Parser;
use image::Rgb;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(version, about = "Normalize avatar image backgrounds to pure white")]
struct Args {
    /// Base directory holding the avatar images
    #[arg(short, long, default_value = "assets/avatars")]
    dir: PathBuf,

    /// Filenames under the base directory; scans the directory for PNG
    /// files when none are given
    files: Vec<PathBuf>,

    /// Also collapse near-white pixels into the target color
    #[arg(long)]
    flatten_near_white: bool,

    /// Channel cutoff for near-white detection (strictly greater than)
    #[arg(long, default_value_t = 240)]
    threshold: u8,

    /// Canvas color for transparent regions, as RRGGBB hex
    #[arg(long, default_value = "ffffff", value_parser = parse_hex_color)]
    canvas: Rgb<u8>,

    /// Color that near-white pixels collapse to, as RRGGBB hex
    #[arg(long, default_value = "ffffff", value_parser = parse_hex_color)]
    target: Rgb<u8>,
}

fn parse_hex_color(text: &str) -> Result<Rgb<u8>, String> {
    let text = text.trim_start_matches('#');
    if text.len() != 6 || !text.is_ascii() {
        return Err(format!("expected RRGGBB hex color, got '{text}'"));
    }

    let channel = |range| {
        u8::from_str_radix(&text[range], 16).map_err(|e| format!("invalid hex color: {e}"))
    };

    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}

fn collect_paths(args: &Args) -> Result<Vec<PathBuf>> {
    if !args.files.is_empty() {
        return Ok(args.files.iter().map(|name| args.dir.join(name)).collect());
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(&args.dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();

    paths.sort();

    if paths.is_empty() {
        bail!("no PNG files found under {}", args.dir.display());
    }

    Ok(paths)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let paths = collect_paths(&args)?;

    let config = NormalizeConfig::new()
        .with_flatten_near_white(args.flatten_near_white)
        .with_threshold(args.threshold)
        .with_canvas(args.canvas)
        .with_target(args.target);

    let report = normalize_files(&paths, &config)
        .with_context(|| format!("normalizing avatars under {}", args.dir.display()))?;

    println!(
        "All avatar images processed: {} normalized, {} skipped",
        report.processed.len(),
        report.skipped.len()
    );

    Ok(())
}
