use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub type ColorParseResult<T> = std::result::Result<T, ColorParseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 3, 6 or 8 hex digits, found {len}")]
    InvalidLength { len: usize },
}

/// Normalized RGBA color. Every channel lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const CLEAR: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Builds a color from float channels, clamping each into `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: channel(a),
        }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 0xFF)
    }

    /// Multiplies the alpha channel, leaving the color channels untouched.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: clamp_unit(self.a * opacity),
            ..self
        }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }

    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        (
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
            to_byte(self.a),
        )
    }

    /// `#RRGGBBAA`, uppercase.
    pub fn to_hex(self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    pub fn to_css(self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        let alpha = (self.a * 1000.0).round() / 1000.0;
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse_hex(s)
    }
}

/// Parses a hex color, ignoring every character that is not an ASCII hex digit.
///
/// Accepts `RGB`, `RRGGBB` and `AARRGGBB`. Any other digit count is rejected.
pub fn try_parse_hex(value: &str) -> ColorParseResult<Color> {
    let digits: Vec<u8> = value
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|digit| digit as u8)
        .collect();
    let byte = |index: usize| (digits[index] << 4) | digits[index + 1];

    match digits.len() {
        3 => Ok(Color::from_rgb8(
            digits[0] * 17,
            digits[1] * 17,
            digits[2] * 17,
        )),
        6 => Ok(Color::from_rgb8(byte(0), byte(2), byte(4))),
        8 => Ok(Color::from_rgba8(byte(2), byte(4), byte(6), byte(0))),
        len => Err(ColorParseError::InvalidLength { len }),
    }
}

/// Parses a hex color, falling back to opaque black on malformed input.
///
/// The fallback is silent: callers cannot distinguish an invalid string from a
/// genuine `#000000`. Use [`try_parse_hex`] when that difference matters.
pub fn parse_hex(value: &str) -> Color {
    try_parse_hex(value).unwrap_or_else(|err| {
        tracing::debug!(value, %err, "malformed hex color; using opaque black");
        Color::BLACK
    })
}

fn channel(value: u8) -> f64 {
    f64::from(value) / 255.0
}

fn to_byte(value: f64) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_six_digits_is_opaque_rgb() {
        let color = parse_hex("007AFF");
        assert_eq!(color.r, 0.0);
        assert_eq!(color.g, 122.0 / 255.0);
        assert_eq!(color.b, 1.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn parse_hex_three_digits_expands_each_nibble() {
        let color = parse_hex("F80");
        assert_eq!(color.r, (15.0 * 17.0) / 255.0);
        assert_eq!(color.g, (8.0 * 17.0) / 255.0);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn parse_hex_eight_digits_reads_alpha_first() {
        let color = parse_hex("80FF3B30");
        assert_eq!(color.a, 128.0 / 255.0);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 59.0 / 255.0);
        assert_eq!(color.b, 48.0 / 255.0);
    }

    #[test]
    fn six_digit_form_maps_every_byte_to_its_channel() {
        for byte in 0..=u8::MAX {
            let expected = f64::from(byte) / 255.0;
            let upper = format!("{byte:02X}{byte:02X}{byte:02X}");
            let lower = format!("#{byte:02x}{byte:02x}{byte:02x}");
            for text in [upper, lower] {
                let color = parse_hex(&text);
                assert_eq!((color.r, color.g, color.b), (expected, expected, expected));
                assert_eq!(color.a, 1.0, "{text}");
            }
        }
    }

    #[test]
    fn three_digit_form_repeats_every_nibble() {
        for nibble in 0..=15u8 {
            let text = format!("{nibble:X}{nibble:X}{nibble:X}");
            let expected = f64::from(nibble * 17) / 255.0;
            let color = parse_hex(&text);
            assert_eq!((color.r, color.g, color.b), (expected, expected, expected));
            assert_eq!(color.a, 1.0, "{text}");
        }
    }

    #[test]
    fn eight_digit_form_maps_every_alpha_byte() {
        for alpha in 0..=u8::MAX {
            let text = format!("{alpha:02X}FF3B30");
            let color = parse_hex(&text);
            assert_eq!(color.a, f64::from(alpha) / 255.0, "{text}");
            assert_eq!(color.to_rgba8(), (0xFF, 0x3B, 0x30, alpha), "{text}");
        }
    }

    #[test]
    fn parse_hex_ignores_non_hex_characters() {
        let plain = parse_hex("007AFF");
        assert_eq!(parse_hex("#007AFF"), plain);
        assert_eq!(parse_hex("0 0 7 A F F"), plain);
        assert_eq!(parse_hex("  #007aff\n"), plain);
    }

    #[test]
    fn parse_hex_falls_back_to_opaque_black() {
        for input in ["", "ZZ", "12345", "#1234567", "not a color"] {
            assert_eq!(parse_hex(input), Color::BLACK, "input {input:?}");
        }
    }

    #[test]
    fn try_parse_hex_reports_digit_count() {
        assert_eq!(
            try_parse_hex("#12345"),
            Err(ColorParseError::InvalidLength { len: 5 })
        );
        assert_eq!(
            try_parse_hex("ZZ"),
            Err(ColorParseError::InvalidLength { len: 0 })
        );
        assert!("#34C759".parse::<Color>().is_ok());
    }

    #[test]
    fn with_opacity_scales_alpha_only() {
        let faded = Color::WHITE.with_opacity(0.3);
        assert_eq!(faded.r, 1.0);
        assert_eq!(faded.a, 0.3);
        assert_eq!(faded.with_opacity(0.0), Color::new(1.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn new_clamps_out_of_range_channels() {
        let color = Color::new(-1.0, 2.0, 0.5, f64::NAN);
        assert_eq!(color, Color::new(0.0, 1.0, 0.5, 0.0));
    }

    #[test]
    fn hex_and_css_formatting() {
        let color = parse_hex("#007AFF");
        assert_eq!(color.to_hex(), "#007AFFFF");
        assert_eq!(color.to_string(), "#007AFFFF");
        assert_eq!(color.to_css(), "rgba(0, 122, 255, 1)");
        assert_eq!(color.with_opacity(0.1).to_css(), "rgba(0, 122, 255, 0.1)");
        assert_eq!(Color::CLEAR.to_css(), "rgba(0, 0, 0, 0)");
    }
}
