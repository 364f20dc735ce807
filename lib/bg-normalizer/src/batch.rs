//! Sequential batch driver: open, normalize, overwrite in place.

use crate::{NormalizeConfig, NormalizeResult};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Outcome of a batch run
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    pub processed: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed.len() + self.skipped.len()
    }
}

/// Normalize every file in `paths` in order, overwriting each file with
/// its PNG-encoded result. A missing file is skipped with a diagnostic;
/// a decode or write failure aborts the remaining batch.
pub fn normalize_files<P: AsRef<Path>>(
    paths: &[P],
    config: &NormalizeConfig,
) -> NormalizeResult<BatchReport> {
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();

        if !path.exists() {
            log::warn!("Skipping {} - file not found", path.display());
            report.skipped.push(path.to_path_buf());
            continue;
        }

        let image = image::open(path)?;
        let result = config.apply(&image);
        result.save_with_format(path, ImageFormat::Png)?;

        log::info!("Processed {} - ensured pure white background", path.display());
        report.processed.push(path.to_path_buf());
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    fn write_test_image(path: &Path) {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([250, 250, 250, 255]));
        img.put_pixel(1, 0, Rgba([100, 100, 100, 0]));
        img.save_with_format(path, ImageFormat::Png).unwrap();
    }

    #[test]
    fn test_normalize_files_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        write_test_image(&path);

        let config = NormalizeConfig::new().with_flatten_near_white(true);
        let report = normalize_files(&[&path], &config).unwrap();

        assert_eq!(report.processed, vec![path.clone()]);
        assert!(report.skipped.is_empty());

        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(*saved.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*saved.get_pixel(1, 0), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_missing_file_is_skipped_and_batch_continues() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-there.png");
        let present = dir.path().join("avatar.png");
        write_test_image(&present);

        let report = normalize_files(&[&missing, &present], &NormalizeConfig::new()).unwrap();

        assert_eq!(report.skipped, vec![missing]);
        assert_eq!(report.processed, vec![present]);
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn test_corrupt_file_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"not a png").unwrap();

        assert!(normalize_files(&[&bad], &NormalizeConfig::new()).is_err());
    }

    #[test]
    fn test_double_run_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        write_test_image(&path);

        let config = NormalizeConfig::new().with_flatten_near_white(true);
        normalize_files(&[&path], &config).unwrap();
        let first = std::fs::read(&path).unwrap();

        normalize_files(&[&path], &config).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }
}
