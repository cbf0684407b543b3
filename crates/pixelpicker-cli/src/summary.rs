use std::path::Path;

use console::Style;
use pixelpicker_core::mapper::PixelInfo;
use pixelpicker_core::viewer::ViewerState;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pick_summary(file: &Path, state: &ViewerState, info: &PixelInfo) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Pixel Information"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    println!("  {:<12}{}", s.label.apply_to("Image"), s.path.apply_to(file.display()));
    if let Some(image) = state.image.as_ref() {
        println!(
            "  {:<12}{}",
            s.label.apply_to("Size"),
            s.value.apply_to(format!("{}x{}", image.width(), image.height()))
        );
    }
    println!("  {:<12}{}", s.label.apply_to("Zoom"), s.value.apply_to(state.zoom));
    println!();

    println!("  {:<12}{}", s.label.apply_to("Position"), s.value.apply_to(info.position_text()));
    let [r, g, b] = info.color.to_array();
    let swatch = Style::new().color256(ansi256(r, g, b)).apply_to("\u{2588}\u{2588}");
    println!(
        "  {:<12}{} {}",
        s.label.apply_to("Color"),
        s.value.apply_to(info.color_text()),
        swatch
    );
    println!();
}

/// Nearest entry of the 6x6x6 color cube in the 256-color palette.
fn ansi256(r: u8, g: u8, b: u8) -> u8 {
    let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}
