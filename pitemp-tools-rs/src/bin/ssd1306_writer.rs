//! Render a line of text on the OLED panel.
//!
//! Takes exactly one positional argument, the text to display. Runs the
//! full panel initialisation, draws the text centred in a 6×10 monospace
//! font, and transfers the frame in a single burst. The temperature
//! monitor invokes this binary once per polling iteration.

use anyhow::{Context, Result};

use pitemp_oled_display_rs::{layout, Frame, ScreenConfig};

fn main() -> Result<()> {
    pitemp_tools_rs::init_tracing();

    let text = std::env::args()
        .nth(1)
        .context("usage: ssd1306-writer <text>")?;

    let mut display = pitemp_tools_rs::open_display()?;
    display.init()?;

    let mut frame = Frame::new();
    layout::render_message(&mut frame, &text, &ScreenConfig::default())?;
    display.flush(&frame)?;

    tracing::info!(text = %text, "message displayed");
    Ok(())
}
