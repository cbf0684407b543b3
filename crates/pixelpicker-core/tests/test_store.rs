mod common;

use std::borrow::Cow;

use image::{Rgba, RgbaImage};

use pixelpicker_core::error::PickerError;
use pixelpicker_core::store::{Image, PixelColor};
use pixelpicker_core::zoom::ZoomFactor;

#[test]
fn test_open_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_gradient_png(&dir, "gradient.png", 100, 50);

    let img = Image::open(&path).unwrap();
    assert_eq!(img.width(), 100);
    assert_eq!(img.height(), 50);
    assert_eq!(img.pixel_at(10, 20), Some(PixelColor::new(10, 20, 30)));
}

#[test]
fn test_open_bmp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.bmp");
    common::gradient_rgb(8, 4).save(&path).unwrap();

    let img = Image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (8, 4));
    assert_eq!(img.pixel_at(7, 3), Some(PixelColor::new(7, 3, 4)));
}

#[test]
fn test_open_sniffs_misnamed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actually_png.jpg");
    common::gradient_rgb(6, 6).save_with_format(&path, image::ImageFormat::Png).unwrap();

    let img = Image::open(&path).unwrap();
    assert_eq!(img.pixel_at(2, 5), Some(PixelColor::new(2, 5, 7)));
}

#[test]
fn test_open_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.png");
    RgbaImage::from_pixel(3, 3, Rgba([200, 100, 50, 0])).save(&path).unwrap();

    let img = Image::open(&path).unwrap();
    assert_eq!(img.pixel_at(1, 1), Some(PixelColor::new(200, 100, 50)));
}

#[test]
fn test_open_rejects_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_not_an_image(&dir, "notes.png");

    let err = Image::open(&path).unwrap_err();
    assert!(matches!(err, PickerError::Image(_)), "got {err:?}");
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Image::open(&dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, PickerError::Io(_)), "got {err:?}");
}

#[test]
fn test_from_rgb_rejects_empty() {
    let err = Image::from_rgb(image::RgbImage::new(0, 5)).unwrap_err();
    assert!(matches!(err, PickerError::InvalidDimensions { width: 0, height: 5 }));
}

#[test]
fn test_pixel_at_out_of_range() {
    let img = common::gradient_image(4, 4);
    assert_eq!(img.pixel_at(4, 0), None);
    assert_eq!(img.pixel_at(0, 4), None);
}

#[test]
fn test_scaled_size_truncates() {
    let img = common::gradient_image(100, 50);
    assert_eq!(img.scaled_size(ZoomFactor::default()), [100, 50]);
    assert_eq!(img.scaled_size(ZoomFactor::new(1.1).unwrap()), [110, 55]);
    assert_eq!(img.scaled_size(ZoomFactor::new(0.333).unwrap()), [33, 16]);
}

#[test]
fn test_scaled_size_never_collapses() {
    let img = common::gradient_image(100, 50);
    assert_eq!(img.scaled_size(ZoomFactor::new(1e-6).unwrap()), [1, 1]);
}

#[test]
fn test_fit_within_keeps_small_image() {
    let img = common::gradient_image(100, 50);
    let fitted = img.fit_within(100);
    assert!(matches!(fitted, Cow::Borrowed(_)));
    assert_eq!(fitted.dimensions(), (100, 50));
}

#[test]
fn test_fit_within_downscales_wide_image() {
    // A panorama past the texture limit must still be displayable.
    let img = common::gradient_image(400, 40);
    let fitted = img.fit_within(100);
    assert!(matches!(fitted, Cow::Owned(_)));
    assert_eq!(fitted.dimensions(), (100, 10));

    let tall = common::gradient_image(30, 900);
    assert_eq!(tall.fit_within(300).dimensions(), (10, 300));
}

#[test]
fn test_fit_within_leaves_picks_at_full_resolution() {
    let img = common::gradient_image(400, 40);
    let _ = img.fit_within(100);
    assert_eq!((img.width(), img.height()), (400, 40));
    assert_eq!(
        img.pixel_at(399, 39),
        Some(PixelColor::from(*common::gradient_rgb(400, 40).get_pixel(399, 39)))
    );
}

#[test]
fn test_fit_within_never_collapses() {
    let img = common::gradient_image(1000, 2);
    assert_eq!(img.fit_within(0).dimensions(), (1, 1));
    assert_eq!(img.fit_within(10).dimensions(), (10, 1));
}

#[test]
fn test_color_display() {
    assert_eq!(PixelColor::new(255, 0, 17).to_string(), "(255, 0, 17)");
    assert_eq!(PixelColor::new(1, 2, 3).to_array(), [1, 2, 3]);
}
