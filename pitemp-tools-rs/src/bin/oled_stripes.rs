//! Draw a horizontal stripe test pattern on the OLED panel.
//!
//! Fills the frame with alternating 0xAA/0x55 bytes, producing one-pixel
//! black/white stripes across the whole panel. A quick smoke check that
//! the bus, address, and panel all work. Takes no arguments.

use anyhow::Result;

use pitemp_oled_display_rs::Frame;

fn main() -> Result<()> {
    pitemp_tools_rs::init_tracing();

    let mut display = pitemp_tools_rs::open_display()?;
    display.init()?;

    let mut frame = Frame::new();
    for (index, byte) in frame.bytes_mut().iter_mut().enumerate() {
        *byte = if index % 2 == 0 { 0xAA } else { 0x55 };
    }
    display.flush(&frame)?;

    tracing::info!("stripe pattern displayed; check the panel for alternating lines");
    Ok(())
}
