#![allow(dead_code)]

use std::path::PathBuf;

use image::{Rgb, RgbImage};
use pixelpicker_core::store::Image;

/// Build an RGB buffer where pixel `(x, y)` is `(x, y, x ^ y)` (each mod 256).
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([x as u8, y as u8, (x ^ y) as u8])
    })
}

pub fn gradient_image(width: u32, height: u32) -> Image {
    Image::from_rgb(gradient_rgb(width, height)).expect("non-empty image")
}

/// Write a gradient PNG into `dir` and return its path.
pub fn write_gradient_png(dir: &tempfile::TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    gradient_rgb(width, height).save(&path).expect("write PNG");
    path
}

/// Write a file that no image decoder accepts.
pub fn write_not_an_image(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"this is plain text, not pixels\n").expect("write text file");
    path
}
