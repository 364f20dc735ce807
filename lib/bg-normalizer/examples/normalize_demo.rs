use anyhow::Result;
use bg_normalizer::NormalizeConfig;
use image::{DynamicImage, Rgba, RgbaImage};
use std::{fs, path::Path};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = Path::new("tmp");
    fs::create_dir_all(output_dir)?;

    // Synthetic avatar: dark disc on a semi-transparent off-white field
    let size = 128u32;
    let mut img = RgbaImage::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as i32 - size as i32 / 2;
        let dy = y as i32 - size as i32 / 2;
        *pixel = if dx * dx + dy * dy < 40 * 40 {
            Rgba([40, 60, 90, 255])
        } else {
            Rgba([248, 246, 250, 96])
        };
    }
    let img = DynamicImage::ImageRgba8(img);

    let flattened = NormalizeConfig::new().apply(&img);
    flattened.save(output_dir.join("flattened.png"))?;
    log::info!("Saved composite-only result to tmp/flattened.png");

    let cleaned = NormalizeConfig::new()
        .with_flatten_near_white(true)
        .apply(&img);
    cleaned.save(output_dir.join("cleaned.png"))?;
    log::info!("Saved near-white-cleaned result to tmp/cleaned.png");

    Ok(())
}
