//! Blank the OLED panel.
//!
//! Sends the minimal power-up sequence (charge pump on, display on,
//! horizontal addressing) followed by 1024 zero data bytes, one per
//! write, turning every pixel off. Takes no arguments. Any I2C failure
//! propagates straight out of `main` — no retries, no timeout.

use anyhow::Result;

fn main() -> Result<()> {
    pitemp_tools_rs::init_tracing();

    let mut display = pitemp_tools_rs::open_display()?;
    display.wake()?;
    display.blank()?;

    tracing::info!("display blanked");
    Ok(())
}
