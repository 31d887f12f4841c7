//! Shared plumbing for the OLED hardware tools.
//!
//! Each tool opens the Raspberry Pi I2C bus and drives the SSD1306 at a
//! fixed address. The bus device and address come from the environment
//! (`PITEMP_I2C_BUS`, `PITEMP_OLED_ADDR`) with defaults matching a stock
//! Pi: `/dev/i2c-1`, address `0x3C`. The tools take no command-line flags.

use anyhow::{Context, Result};
use linux_embedded_hal::I2cdev;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use pitemp_oled_display_rs::{OledDriver, DEFAULT_ADDRESS};

/// Default I2C character device on a Raspberry Pi.
pub const DEFAULT_I2C_BUS: &str = "/dev/i2c-1";

/// Initialise the tracing subscriber for a tool binary.
///
/// `RUST_LOG` is respected; the default filter shows info and above.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// The I2C bus device path, from `PITEMP_I2C_BUS` or the default.
pub fn i2c_bus_path() -> String {
    std::env::var("PITEMP_I2C_BUS").unwrap_or_else(|_| DEFAULT_I2C_BUS.to_owned())
}

/// The display's 7-bit address, from `PITEMP_OLED_ADDR` or the default.
pub fn oled_address() -> Result<u8> {
    match std::env::var("PITEMP_OLED_ADDR") {
        Ok(raw) => parse_address(&raw),
        Err(_) => Ok(DEFAULT_ADDRESS),
    }
}

/// Parse a 7-bit I2C address given as decimal (`60`) or hex (`0x3c`).
pub fn parse_address(raw: &str) -> Result<u8> {
    let raw = raw.trim();
    let parsed = if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else {
        raw.parse()
    };
    let address =
        parsed.with_context(|| format!("invalid I2C address {raw:?} in PITEMP_OLED_ADDR"))?;
    if address >= 0x80 {
        anyhow::bail!("I2C address {address:#04x} does not fit in 7 bits");
    }
    Ok(address)
}

/// Open the configured I2C bus and wrap it in an [`OledDriver`].
pub fn open_display() -> Result<OledDriver<I2cdev>> {
    let path = i2c_bus_path();
    let address = oled_address()?;
    let bus =
        I2cdev::new(&path).with_context(|| format!("failed to open I2C bus {path}"))?;
    tracing::debug!(bus = %path, address, "I2C bus opened");
    Ok(OledDriver::new(bus, address))
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_addresses() {
        assert_eq!(parse_address("0x3c").unwrap(), 0x3C);
        assert_eq!(parse_address("0X3D").unwrap(), 0x3D);
    }

    #[test]
    fn parses_decimal_addresses() {
        assert_eq!(parse_address("60").unwrap(), 60);
        assert_eq!(parse_address(" 61 ").unwrap(), 61);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_address("oled").is_err());
        assert!(parse_address("0x").is_err());
        assert!(parse_address("").is_err());
    }

    #[test]
    fn rejects_addresses_wider_than_seven_bits() {
        assert!(parse_address("0x80").is_err());
        assert!(parse_address("255").is_err());
        assert!(parse_address("0x7f").is_ok());
    }
}
