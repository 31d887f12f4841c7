//! Core register-level driver for the SSD1306 controller.
//!
//! [`OledDriver`] owns the I2C peripheral and exposes the controller's
//! command/data register protocol: every transaction is a control byte
//! (`0x00` command, `0x40` data) followed by payload bytes. Frame
//! transfers use a single 1025-byte burst so power-on snow is replaced
//! in one transaction rather than column by column.

use embedded_hal::i2c::I2c;

use crate::commands::{
    COLUMN_ADDRESS, CONTROL_COMMAND, CONTROL_DATA, DISPLAY_OFF, DISPLAY_ON, FRAME_BYTES,
    INIT_SEQUENCE, PAGES, PAGE_ADDRESS, WAKE_SEQUENCE, WIDTH,
};
use crate::error::OledError;
use crate::frame::Frame;

/// Register-level driver for an SSD1306 128×64 OLED over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] — full panel initialisation, ending with the
///    display on and the RAM cleared. Alternatively [`OledDriver::wake()`]
///    for the minimal charge-pump power-up.
/// 3. Draw into a [`Frame`] and transfer it with [`OledDriver::flush()`].
///
/// # Example
///
/// ```no_run
/// use pitemp_oled_display_rs::{Frame, OledDriver, DEFAULT_ADDRESS};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut display = OledDriver::new(i2c, DEFAULT_ADDRESS);
/// display.init().unwrap();
/// display.flush(&Frame::new()).unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Create a new driver.
    ///
    /// No I2C traffic is generated until a command is sent.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    // -----------------------------------------------------------------------
    // Register writes
    // -----------------------------------------------------------------------

    /// Send a single command byte (control byte `0x00`).
    ///
    /// # Errors
    /// [`OledError::I2c`] on a bus-level failure.
    pub fn write_command(&mut self, command: u8) -> Result<(), OledError<I2C::Error>> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, command])?;
        Ok(())
    }

    /// Send a single data byte to display RAM (control byte `0x40`).
    ///
    /// # Errors
    /// [`OledError::I2c`] on a bus-level failure.
    pub fn write_data(&mut self, byte: u8) -> Result<(), OledError<I2C::Error>> {
        self.i2c.write(self.address, &[CONTROL_DATA, byte])?;
        Ok(())
    }

    /// Burst-write a full frame to display RAM in one transaction.
    ///
    /// The controller auto-increments through the current draw window, so
    /// callers must position the window first (see [`reset_window`]).
    ///
    /// [`reset_window`]: Self::reset_window
    fn write_burst(&mut self, data: &[u8; FRAME_BYTES]) -> Result<(), OledError<I2C::Error>> {
        let mut burst = [0u8; FRAME_BYTES + 1];
        burst[0] = CONTROL_DATA;
        burst[1..].copy_from_slice(data);
        self.i2c.write(self.address, &burst)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Power-up sequences
    // -----------------------------------------------------------------------

    /// Minimal power-up: charge pump on, display on, horizontal addressing.
    ///
    /// Sends exactly the five command bytes of
    /// [`WAKE_SEQUENCE`](crate::commands::WAKE_SEQUENCE), each as its own
    /// command write. Display RAM is left untouched.
    ///
    /// # Errors
    /// [`OledError::I2c`] on a bus-level failure.
    pub fn wake(&mut self) -> Result<(), OledError<I2C::Error>> {
        for &command in &WAKE_SEQUENCE {
            self.write_command(command)?;
        }
        Ok(())
    }

    /// Full panel initialisation.
    ///
    /// Sends [`INIT_SEQUENCE`](crate::commands::INIT_SEQUENCE) (display off,
    /// clock, multiplex, offset, charge pump, addressing, orientation,
    /// contrast), resets the draw window, burst-clears the RAM, and finally
    /// switches the display on. The clear happens before display-on so
    /// power-on snow is never visible.
    ///
    /// # Errors
    /// [`OledError::I2c`] on a bus-level failure.
    pub fn init(&mut self) -> Result<(), OledError<I2C::Error>> {
        for &command in &INIT_SEQUENCE {
            self.write_command(command)?;
        }
        self.reset_window()?;
        self.write_burst(&[0u8; FRAME_BYTES])?;
        self.write_command(DISPLAY_ON)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Blank every pixel by writing 1024 zero bytes to the data register.
    ///
    /// Each byte is sent as its own data write; use [`flush`] with an empty
    /// [`Frame`] when a single burst transaction is preferred.
    ///
    /// [`flush`]: Self::flush
    ///
    /// # Errors
    /// [`OledError::I2c`] on a bus-level failure.
    pub fn blank(&mut self) -> Result<(), OledError<I2C::Error>> {
        for _ in 0..FRAME_BYTES {
            self.write_data(0x00)?;
        }
        Ok(())
    }

    /// Set the column and page draw window.
    ///
    /// # Errors
    /// * [`OledError::InvalidWindow`] if a bound is out of range or a start
    ///   exceeds its end.
    /// * [`OledError::I2c`] on a bus-level failure.
    pub fn set_window(
        &mut self,
        column_start: u8,
        column_end: u8,
        page_start: u8,
        page_end: u8,
    ) -> Result<(), OledError<I2C::Error>> {
        if column_start > column_end
            || u32::from(column_end) >= WIDTH
            || page_start > page_end
            || usize::from(page_end) >= PAGES
        {
            return Err(OledError::InvalidWindow);
        }
        self.write_command(COLUMN_ADDRESS)?;
        self.write_command(column_start)?;
        self.write_command(column_end)?;
        self.write_command(PAGE_ADDRESS)?;
        self.write_command(page_start)?;
        self.write_command(page_end)?;
        Ok(())
    }

    /// Reset the draw window to the full panel (columns 0–127, pages 0–7).
    pub fn reset_window(&mut self) -> Result<(), OledError<I2C::Error>> {
        self.set_window(0, (WIDTH - 1) as u8, 0, (PAGES - 1) as u8)
    }

    /// Transfer a [`Frame`] to the panel.
    ///
    /// Resets the draw window, then sends the 1024 frame bytes as a single
    /// 1025-byte burst (one data control byte plus payload).
    ///
    /// # Errors
    /// [`OledError::I2c`] on a bus-level failure.
    pub fn flush(&mut self, frame: &Frame) -> Result<(), OledError<I2C::Error>> {
        self.reset_window()?;
        self.write_burst(frame.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Power control
    // -----------------------------------------------------------------------

    /// Switch the display on (RAM contents are preserved while off).
    pub fn display_on(&mut self) -> Result<(), OledError<I2C::Error>> {
        self.write_command(DISPLAY_ON)
    }

    /// Switch the display off (sleep mode).
    pub fn display_off(&mut self) -> Result<(), OledError<I2C::Error>> {
        self.write_command(DISPLAY_OFF)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// Mock bus that records every write transaction.
    struct RecordingBus {
        writes: Vec<(u8, Vec<u8>)>,
    }

    impl RecordingBus {
        fn new() -> Self {
            Self { writes: Vec::new() }
        }
    }

    impl embedded_hal::i2c::ErrorType for RecordingBus {
        type Error = core::convert::Infallible;
    }

    impl embedded_hal::i2c::I2c for RecordingBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [embedded_hal::i2c::Operation<'_>],
        ) -> Result<(), Self::Error> {
            for operation in operations {
                if let embedded_hal::i2c::Operation::Write(bytes) = operation {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    fn driver() -> OledDriver<RecordingBus> {
        OledDriver::new(RecordingBus::new(), crate::commands::DEFAULT_ADDRESS)
    }

    #[test]
    fn wake_then_blank_sends_exact_clear_sequence() {
        let mut display = driver();
        display.wake().unwrap();
        display.blank().unwrap();

        let writes = &display.i2c.writes;
        assert_eq!(writes.len(), 5 + 1024);

        // Five command writes: charge pump, display on, horizontal mode.
        let expected_commands = [0x8D, 0x14, 0xAF, 0x20, 0x00];
        for (write, &command) in writes.iter().zip(expected_commands.iter()) {
            assert_eq!(write.0, crate::commands::DEFAULT_ADDRESS);
            assert_eq!(write.1, std::vec![CONTROL_COMMAND, command]);
        }

        // Exactly 1024 zero data writes.
        for write in &writes[5..] {
            assert_eq!(write.1, std::vec![CONTROL_DATA, 0x00]);
        }
    }

    #[test]
    fn init_starts_off_and_ends_on() {
        let mut display = driver();
        display.init().unwrap();

        let writes = &display.i2c.writes;
        assert_eq!(writes[0].1, std::vec![CONTROL_COMMAND, DISPLAY_OFF]);
        assert_eq!(
            writes.last().unwrap().1,
            std::vec![CONTROL_COMMAND, DISPLAY_ON]
        );
    }

    #[test]
    fn init_clears_ram_with_single_burst() {
        let mut display = driver();
        display.init().unwrap();

        let bursts: Vec<_> = display
            .i2c
            .writes
            .iter()
            .filter(|(_, bytes)| bytes.len() == FRAME_BYTES + 1)
            .collect();
        assert_eq!(bursts.len(), 1);
        assert_eq!(bursts[0].1[0], CONTROL_DATA);
        assert!(bursts[0].1[1..].iter().all(|&b| b == 0x00));
    }

    #[test]
    fn flush_sends_window_then_burst() {
        let mut display = driver();
        let mut frame = Frame::new();
        frame.set_pixel(0, 0, true);
        display.flush(&frame).unwrap();

        let writes = &display.i2c.writes;
        // Window reset: 0x21 0 127, 0x22 0 7 — six command writes.
        assert_eq!(writes.len(), 7);
        assert_eq!(writes[0].1, std::vec![CONTROL_COMMAND, COLUMN_ADDRESS]);
        assert_eq!(writes[1].1, std::vec![CONTROL_COMMAND, 0x00]);
        assert_eq!(writes[2].1, std::vec![CONTROL_COMMAND, 0x7F]);
        assert_eq!(writes[3].1, std::vec![CONTROL_COMMAND, PAGE_ADDRESS]);
        assert_eq!(writes[4].1, std::vec![CONTROL_COMMAND, 0x00]);
        assert_eq!(writes[5].1, std::vec![CONTROL_COMMAND, 0x07]);

        let burst = &writes[6].1;
        assert_eq!(burst.len(), FRAME_BYTES + 1);
        assert_eq!(burst[0], CONTROL_DATA);
        assert_eq!(burst[1], 0x01); // pixel (0, 0) is bit 0 of byte 0
    }

    #[test]
    fn set_window_rejects_out_of_range_bounds() {
        let mut display = driver();
        assert_eq!(
            display.set_window(0, 128, 0, 7),
            Err(OledError::InvalidWindow)
        );
        assert_eq!(
            display.set_window(0, 127, 0, 8),
            Err(OledError::InvalidWindow)
        );
        assert_eq!(
            display.set_window(10, 5, 0, 7),
            Err(OledError::InvalidWindow)
        );
        assert!(display.i2c.writes.is_empty());
    }

    #[test]
    fn display_power_commands() {
        let mut display = driver();
        display.display_off().unwrap();
        display.display_on().unwrap();

        let writes = &display.i2c.writes;
        assert_eq!(writes[0].1, std::vec![CONTROL_COMMAND, DISPLAY_OFF]);
        assert_eq!(writes[1].1, std::vec![CONTROL_COMMAND, DISPLAY_ON]);
    }
}
