use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Clicked outside the image area at ({x:.2}, {y:.2})")]
    PickOutsideImage { x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, PickerError>;
