//! Text layout for the one-line readout screen.
//!
//! The panel shows a single centred line of text in a 6×10 monospace
//! font. Geometry lives in [`ScreenConfig`] so callers can reposition the
//! line without touching library source.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Text};

use heapless::String;

use crate::commands::{HEIGHT, WIDTH};

/// Maximum characters of a message that fit across the panel in FONT_6X10.
pub const MAX_MESSAGE_CHARS: usize = (WIDTH / 6) as usize;

// ── ScreenConfig ─────────────────────────────────────────────────────────

/// Geometry for the readout screen.
///
/// [`ScreenConfig::default()`] centres a single FONT_6X10 line on a
/// 128×64 panel.
pub struct ScreenConfig {
    /// Panel width in pixels. Default: 128.
    pub width: u32,
    /// Panel height in pixels. Default: 64.
    pub height: u32,
    /// Baseline Y coordinate for the message line. Default: 36.
    pub message_baseline: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            // Vertical centre plus half the font height.
            message_baseline: (HEIGHT as i32) / 2 + 4,
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Draw a message centred on the panel.
///
/// Messages longer than [`MAX_MESSAGE_CHARS`] are silently truncated so
/// the centred line always fits the panel width.
///
/// # Example
///
/// ```
/// use pitemp_oled_display_rs::{layout, Frame, ScreenConfig};
///
/// let mut frame = Frame::new();
/// layout::render_message(&mut frame, "TEMP: 45.2 C", &ScreenConfig::default()).unwrap();
/// ```
pub fn render_message<D>(
    display: &mut D,
    message: &str,
    config: &ScreenConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    let mut line: String<MAX_MESSAGE_CHARS> = String::new();
    for ch in message.chars().take(MAX_MESSAGE_CHARS) {
        let _ = line.push(ch);
    }

    let centre = Point::new(config.width as i32 / 2, config.message_baseline);
    Text::with_alignment(line.as_str(), centre, style, Alignment::Center).draw(display)?;
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    fn lit_pixels(frame: &Frame) -> usize {
        frame
            .as_bytes()
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum()
    }

    #[test]
    fn render_message_touches_the_frame() {
        let mut frame = Frame::new();
        render_message(&mut frame, "TEMP: 45.2 C", &ScreenConfig::default()).unwrap();
        assert!(lit_pixels(&frame) > 0);
    }

    #[test]
    fn empty_message_leaves_frame_black() {
        let mut frame = Frame::new();
        render_message(&mut frame, "", &ScreenConfig::default()).unwrap();
        assert_eq!(lit_pixels(&frame), 0);
    }

    #[test]
    fn long_message_is_truncated_not_panicking() {
        let mut frame = Frame::new();
        let long = "0123456789012345678901234567890123456789";
        render_message(&mut frame, long, &ScreenConfig::default()).unwrap();
        assert!(lit_pixels(&frame) > 0);
    }

    #[test]
    fn baseline_moves_the_text() {
        let config_high = ScreenConfig {
            message_baseline: 10,
            ..ScreenConfig::default()
        };
        let config_low = ScreenConfig {
            message_baseline: 50,
            ..ScreenConfig::default()
        };

        let mut high = Frame::new();
        let mut low = Frame::new();
        render_message(&mut high, "W", &config_high).unwrap();
        render_message(&mut low, "W", &config_low).unwrap();

        assert_ne!(high, low);
        assert_eq!(lit_pixels(&high), lit_pixels(&low));
    }

    #[test]
    fn max_message_chars_matches_font_width() {
        assert_eq!(MAX_MESSAGE_CHARS, 21);
    }
}
