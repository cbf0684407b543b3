use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use pixelpicker_core::config::ViewerConfig;
use pixelpicker_core::event::{Command, Event};
use pixelpicker_core::viewer::{Effect, Viewer};

#[derive(Args)]
pub struct PickArgs {
    /// Input image file
    pub file: PathBuf,

    /// Click X, relative to the viewport's left edge
    #[arg(short)]
    pub x: f64,

    /// Click Y, relative to the viewport's top edge
    #[arg(short)]
    pub y: f64,

    /// Horizontal scroll offset of the viewport, in displayed pixels
    #[arg(long, default_value = "0")]
    pub scroll_x: f64,

    /// Vertical scroll offset of the viewport, in displayed pixels
    #[arg(long, default_value = "0")]
    pub scroll_y: f64,

    /// Number of zoom-in steps applied after loading
    #[arg(long, default_value = "0")]
    pub zoom_in: u32,

    /// Number of zoom-out steps applied after loading
    #[arg(long, default_value = "0")]
    pub zoom_out: u32,

    /// Override the zoom step factor
    #[arg(long)]
    pub zoom_step: Option<f64>,

    /// Viewer config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &PickArgs) -> Result<()> {
    let mut config = match args.config {
        Some(ref path) => super::config::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(step) = args.zoom_step {
        config.zoom_step = step;
    }

    let mut viewer = Viewer::new(&config);

    let mut events: Vec<Event> = vec![Command::Open(args.file.clone()).into()];
    events.extend((0..args.zoom_in).map(|_| Command::ZoomIn.into()));
    events.extend((0..args.zoom_out).map(|_| Command::ZoomOut.into()));
    events.push(Event::Scroll {
        x: args.scroll_x,
        y: args.scroll_y,
    });
    events.push(Command::PickPixel.into());
    events.push(Event::Click { x: args.x, y: args.y });

    for event in events {
        match viewer.handle(event) {
            Some(Effect::LoadFailed { path, message }) => {
                bail!("Unable to load image {}: {message}", path.display());
            }
            Some(Effect::PixelPicked(info)) => {
                crate::summary::print_pick_summary(&args.file, viewer.state(), &info);
                return Ok(());
            }
            Some(Effect::PickOutsideImage { x, y }) => {
                bail!("Clicked outside the image area (maps to {x:.2}, {y:.2})");
            }
            _ => {}
        }
    }

    bail!("No pixel was picked")
}
