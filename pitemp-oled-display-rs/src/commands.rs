//! SSD1306 command constants and panel geometry.
//!
//! Every I2C transaction to the controller starts with a control byte that
//! selects the target register: `0x00` for the command register, `0x40` for
//! the data register (display RAM). Commands are single bytes, some followed
//! by one or more operand bytes sent as further command writes.

// ---------------------------------------------------------------------------
// Control bytes
// ---------------------------------------------------------------------------

/// Control byte selecting the command register.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte selecting the data register (display RAM).
pub const CONTROL_DATA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Display off (sleep mode).
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on.
pub const DISPLAY_ON: u8 = 0xAF;

/// Set display clock divide ratio / oscillator frequency. One operand.
pub const CLOCK_DIVIDE: u8 = 0xD5;

/// Default clock operand.
pub const CLOCK_DIVIDE_DEFAULT: u8 = 0x80;

/// Set multiplex ratio. One operand (rows - 1).
pub const MULTIPLEX_RATIO: u8 = 0xA8;

/// Multiplex operand for a 64-row panel.
pub const MULTIPLEX_64: u8 = 0x3F;

/// Set vertical display offset. One operand.
pub const DISPLAY_OFFSET: u8 = 0xD3;

/// Set display RAM start line to row 0.
pub const SET_START_LINE: u8 = 0x40;

/// Charge pump setting. One operand.
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump operand: enable during display on.
pub const CHARGE_PUMP_ON: u8 = 0x14;

/// Set memory addressing mode. One operand.
pub const MEMORY_MODE: u8 = 0x20;

/// Memory mode operand: horizontal addressing.
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Segment remap: column 127 maps to SEG0 (flip horizontally).
pub const SEGMENT_REMAP: u8 = 0xA1;

/// COM output scan direction: remapped (flip vertically).
pub const COM_SCAN_DECREMENT: u8 = 0xC8;

/// Set COM pins hardware configuration. One operand.
pub const COM_PINS: u8 = 0xDA;

/// COM pins operand for a 128×64 panel.
pub const COM_PINS_ALTERNATIVE: u8 = 0x12;

/// Set contrast. One operand (0x00–0xFF).
pub const CONTRAST: u8 = 0x81;

/// Default contrast operand.
pub const CONTRAST_DEFAULT: u8 = 0xCF;

/// Resume display from RAM content (undo "entire display on").
pub const RESUME_FROM_RAM: u8 = 0xA4;

/// Normal (non-inverted) display.
pub const NORMAL_DISPLAY: u8 = 0xA6;

// ---------------------------------------------------------------------------
// Addressing commands
// ---------------------------------------------------------------------------

/// Set column address window. Two operands: start column, end column.
pub const COLUMN_ADDRESS: u8 = 0x21;

/// Set page address window. Two operands: start page, end page.
pub const PAGE_ADDRESS: u8 = 0x22;

// ---------------------------------------------------------------------------
// Command sequences
// ---------------------------------------------------------------------------

/// Minimal power-up sequence: enable the charge pump, switch the display
/// on, and select horizontal addressing mode. Enough to take a panel out
/// of reset so that data writes land at predictable addresses.
pub const WAKE_SEQUENCE: [u8; 5] = [
    CHARGE_PUMP,
    CHARGE_PUMP_ON,
    DISPLAY_ON,
    MEMORY_MODE,
    MEMORY_MODE_HORIZONTAL,
];

/// Full initialisation sequence for a 128×64 panel.
///
/// Leaves the display OFF; [`OledDriver::init()`](crate::OledDriver::init)
/// clears the RAM before sending [`DISPLAY_ON`] so power-on snow is never
/// visible.
pub const INIT_SEQUENCE: [u8; 20] = [
    DISPLAY_OFF,
    CLOCK_DIVIDE,
    CLOCK_DIVIDE_DEFAULT,
    MULTIPLEX_RATIO,
    MULTIPLEX_64,
    DISPLAY_OFFSET,
    0x00,
    SET_START_LINE,
    CHARGE_PUMP,
    CHARGE_PUMP_ON,
    MEMORY_MODE,
    MEMORY_MODE_HORIZONTAL,
    SEGMENT_REMAP,
    COM_SCAN_DECREMENT,
    COM_PINS,
    COM_PINS_ALTERNATIVE,
    CONTRAST,
    CONTRAST_DEFAULT,
    RESUME_FROM_RAM,
    NORMAL_DISPLAY,
];

// ---------------------------------------------------------------------------
// Panel geometry
// ---------------------------------------------------------------------------

/// Panel width in pixels.
pub const WIDTH: u32 = 128;

/// Panel height in pixels.
pub const HEIGHT: u32 = 64;

/// Number of 8-row pages.
pub const PAGES: usize = 8;

/// Size of a full frame in bytes (128 columns × 8 pages).
pub const FRAME_BYTES: usize = 1024;

/// Default 7-bit I2C address for SSD1306 modules.
pub const DEFAULT_ADDRESS: u8 = 0x3C;
