use pixelpicker_core::store::Image;

/// Convert a decoded RGB image to an egui ColorImage whose longest edge is
/// at most `max_side`.
///
/// Returns the image and the display scale applied (1.0 if no downscaling).
pub fn image_to_color_image(image: &Image, max_side: usize) -> (egui::ColorImage, f32) {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
    let pixels = image.fit_within(max_side);
    let size = [pixels.width() as usize, pixels.height() as usize];
    let scale = pixels.width() as f32 / image.width() as f32;
    (egui::ColorImage::from_rgb(size, pixels.as_raw()), scale)
}
