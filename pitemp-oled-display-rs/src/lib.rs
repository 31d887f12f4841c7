//! Register-level driver for the SSD1306 128×64 monochrome OLED over I2C.
//!
//! This crate provides [`OledDriver`], a thin command/data-register driver
//! for the SSD1306 controller, a page-packed [`Frame`] buffer that
//! implements the `embedded-graphics` [`DrawTarget`] trait, and a small
//! [`layout`] module for rendering a line of text onto the panel.
//!
//! The driver is generic over any blocking [`embedded_hal::i2c::I2c`]
//! implementation. On a Raspberry Pi the concrete bus is
//! `linux_embedded_hal::I2cdev` opened on `/dev/i2c-1`.
//!
//! # Quick Start
//!
//! ```no_run
//! use pitemp_oled_display_rs::{layout, Frame, OledDriver, ScreenConfig, DEFAULT_ADDRESS};
//!
//! # fn example(i2c: impl embedded_hal::i2c::I2c) {
//! let mut display = OledDriver::new(i2c, DEFAULT_ADDRESS);
//! display.init().unwrap();
//!
//! let mut frame = Frame::new();
//! layout::render_message(&mut frame, "TEMP: 45.2 C", &ScreenConfig::default()).unwrap();
//! display.flush(&frame).unwrap();
//! # }
//! ```
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

#![no_std]

#[cfg(test)]
extern crate std;

pub mod commands;
pub mod driver;
pub mod error;
pub mod frame;
pub mod layout;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use commands::{DEFAULT_ADDRESS, FRAME_BYTES, HEIGHT, PAGES, WIDTH};
pub use driver::OledDriver;
pub use error::OledError;
pub use frame::Frame;
pub use layout::ScreenConfig;
