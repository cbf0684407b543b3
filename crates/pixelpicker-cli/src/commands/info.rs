use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pixelpicker_core::store::Image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = Image::open(&args.file)
        .with_context(|| format!("Unable to load image {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());

    let bytes = image.as_rgb().as_raw().len();
    println!("RGB size:    {:.1} KB", bytes as f64 / 1024.0);

    Ok(())
}
