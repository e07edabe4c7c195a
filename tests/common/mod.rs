// Shared fixtures for the integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgb, Rgba, RgbImage, RgbaImage};

/// Writes a square RGBA logo: opaque disc on a transparent field.
pub fn write_rgba_logo(path: &Path, size: u32) -> PathBuf {
    let center = size as f32 / 2.0;
    let radius = size as f32 * 0.4;
    let logo = RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy <= radius * radius {
            Rgba([250, 200, 20, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    logo.save(path).expect("save logo failed");
    path.to_path_buf()
}

/// Writes an opaque RGB logo (no alpha channel).
pub fn write_rgb_logo(path: &Path, size: u32) -> PathBuf {
    let logo = RgbImage::from_pixel(size, size, Rgb([30, 60, 90]));
    logo.save(path).expect("save logo failed");
    path.to_path_buf()
}
