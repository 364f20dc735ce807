//! White-background normalization: alpha flattening and near-white cleanup.

use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, Rgb, RgbImage, RgbaImage};

/// Background normalization configuration
#[derive(Debug, Clone, Copy, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct NormalizeConfig {
    /// Snap near-white pixels to the target color after flattening
    #[derivative(Default(value = "false"))]
    flatten_near_white: bool,

    /// Channel cutoff for near-white detection (strict comparison)
    #[derivative(Default(value = "240"))]
    threshold: u8,

    /// Canvas color that transparent regions are composited onto
    #[derivative(Default(value = "Rgb([255, 255, 255])"))]
    canvas: Rgb<u8>,

    /// Color that near-white pixels collapse to
    #[derivative(Default(value = "Rgb([255, 255, 255])"))]
    target: Rgb<u8>,
}

impl NormalizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten the image onto the canvas color and optionally collapse
    /// near-white pixels. Output has the same dimensions and no alpha.
    pub fn apply(&self, image: &DynamicImage) -> RgbImage {
        let mut result = flatten_alpha(&image.to_rgba8(), self.canvas);

        if self.flatten_near_white {
            flatten_near_white(&mut result, self.threshold, self.target);
        }

        result
    }
}

/// Composite an image onto an opaque canvas using its own alpha channel
/// as the blend weight, "over" style: out = src*a + canvas*(1-a).
pub fn flatten_alpha(image: &RgbaImage, canvas: Rgb<u8>) -> RgbImage {
    let mut result = RgbImage::new(image.width(), image.height());

    for (src, dst) in image.pixels().zip(result.pixels_mut()) {
        let alpha = src[3] as u32;
        for i in 0..3 {
            let blended = src[i] as u32 * alpha + canvas[i] as u32 * (255 - alpha);
            // Rounded division keeps fully opaque pixels bit-exact
            dst[i] = ((blended + 127) / 255) as u8;
        }
    }

    result
}

/// Replace every pixel whose channels are all strictly above `threshold`
/// with `target`. A pixel at exactly the threshold is left unchanged.
pub fn flatten_near_white(image: &mut RgbImage, threshold: u8, target: Rgb<u8>) {
    for pixel in image.pixels_mut() {
        if pixel[0] > threshold && pixel[1] > threshold && pixel[2] > threshold {
            *pixel = target;
        }
    }
}
