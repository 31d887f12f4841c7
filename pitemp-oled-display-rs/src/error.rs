//! Error types for the OLED driver.

use core::fmt;

/// Errors that can occur when talking to the display.
#[derive(Debug, PartialEq, Eq)]
pub enum OledError<E> {
    /// Underlying I2C bus error.
    I2c(E),

    /// Column or page window out of range for the panel.
    InvalidWindow,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for OledError<E> {
    fn from(error: E) -> Self {
        OledError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for OledError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::I2c(e) => write!(f, "I2C error: {:?}", e),
            OledError::InvalidWindow => write!(f, "Invalid draw window for a 128x64 panel"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for OledError<E> {}
