use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;

const SHORT_ESCAPE_LIMIT: u32 = 5;
const MEDIUM_ESCAPE_LIMIT: u32 = 20;

/// Colours escape times by band: red ramp for fast escapes, green for the
/// middle band, blue for everything slower, black inside the set.
#[derive(Debug, Default, Clone, Copy)]
pub struct MandelbrotEscapeBands;

impl ColourMap<EscapeTime> for MandelbrotEscapeBands {
    fn map(&self, value: EscapeTime) -> Colour {
        match value {
            EscapeTime::InSet => Colour::BLACK,
            EscapeTime::Escaped(i) if i < SHORT_ESCAPE_LIMIT => Colour::new(fade(i, 20), 0, 0),
            EscapeTime::Escaped(i) if i < MEDIUM_ESCAPE_LIMIT => Colour::new(0, fade(i, 20), 0),
            EscapeTime::Escaped(i) => Colour::new(0, 0, fade(i, 4)),
        }
    }

    fn display_name(&self) -> &str {
        "Escape bands"
    }
}

/// `255 - iterations * rate`, floored at 1.
fn fade(iterations: u32, rate: u32) -> u8 {
    let level = 255_u32.saturating_sub(iterations.saturating_mul(rate)).max(1);
    u8::try_from(level).unwrap_or(u8::MAX)
}
