//! Hex color parsing and rgba() formatting

use thiserror::Error;

use crate::theme::Theme;

/// Errors raised by color parsing
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// An sRGB color with u8 channels and a unit-interval alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` hex notation.
    ///
    /// The alpha byte, when present, maps to [0, 1] through 255.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::InvalidHex(hex.to_string()))?;

        let invalid = || ColorError::InvalidHex(hex.to_string());

        // Byte-range slicing below requires ASCII input
        if !digits.is_ascii() {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let nibble = c.to_digit(16).ok_or_else(invalid)? as u8;
                    channels[i] = nibble * 16 + nibble;
                }
                Ok(Self::new(channels[0], channels[1], channels[2], 1.0))
            }
            6 | 8 => {
                let byte = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
                };
                let r = byte(0..2)?;
                let g = byte(2..4)?;
                let b = byte(4..6)?;
                let a = if digits.len() == 8 {
                    f64::from(byte(6..8)?) / 255.0
                } else {
                    1.0
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid()),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when alpha is below 1.
    ///
    /// The alpha rounds back through 0-255, so a parse/format round
    /// trip is exact for 6-digit input and within 1/255 for 8-digit.
    pub fn to_hex(&self) -> String {
        if self.a < 1.0 {
            let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, alpha)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    /// Format as a CSS `rgba()` value with an extra opacity multiplier
    pub fn to_css(&self, opacity: f64) -> String {
        let alpha = fmt_alpha(self.a * opacity.clamp(0.0, 1.0));
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Round an alpha value to 3 decimals and print its shortest form
fn fmt_alpha(a: f64) -> String {
    let rounded = (a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

/// Resolve a settings color to a CSS color value.
///
/// Hex strings parse directly; other strings are first tried as theme
/// tokens. Anything else (CSS named colors) passes through verbatim,
/// in which case the opacity multiplier cannot be applied.
pub fn css_color(color: &str, opacity: f64, theme: &Theme) -> Result<String, ColorError> {
    if color.starts_with('#') {
        return Ok(Rgba::from_hex(color)?.to_css(opacity));
    }
    if let Some(hex) = theme.resolve(color) {
        return Ok(Rgba::from_hex(hex)?.to_css(opacity));
    }
    Ok(color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        let c = Rgba::from_hex("#1a2b3c").unwrap();
        assert_eq!((c.r, c.g, c.b), (26, 43, 60));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_parse_short_hex() {
        let c = Rgba::from_hex("#f0a").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 170));
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        let c = Rgba::from_hex("#00000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Rgba::from_hex("red").is_err());
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#1a2b3c", "#deadbe"] {
            let c = Rgba::from_hex(hex).unwrap();
            assert_eq!(c.to_hex(), hex);
        }
    }

    #[test]
    fn test_alpha_round_trip_within_tolerance() {
        let original = Rgba::from_hex("#33557780").unwrap();
        let round_tripped = Rgba::from_hex(&original.to_hex()).unwrap();
        assert!((original.a - round_tripped.a).abs() <= 1.0 / 255.0);
        assert_eq!(
            (original.r, original.g, original.b),
            (round_tripped.r, round_tripped.g, round_tripped.b)
        );
    }

    #[test]
    fn test_to_css() {
        let c = Rgba::from_hex("#ff8800").unwrap();
        insta::assert_snapshot!(c.to_css(1.0), @"rgba(255, 136, 0, 1)");
        insta::assert_snapshot!(c.to_css(0.5), @"rgba(255, 136, 0, 0.5)");
    }

    #[test]
    fn test_to_css_combines_hex_alpha_and_opacity() {
        let c = Rgba::from_hex("#00000080").unwrap();
        // 128/255 * 0.5, rounded to 3 decimals
        assert_eq!(c.to_css(0.5), "rgba(0, 0, 0, 0.251)");
    }

    #[test]
    fn test_css_color_resolves_theme_tokens() {
        let theme = Theme::default();
        let resolved = css_color("primary", 1.0, &theme).unwrap();
        assert_eq!(resolved, "rgba(37, 99, 235, 1)");
    }

    #[test]
    fn test_css_color_passes_through_named_colors() {
        let theme = Theme::default();
        assert_eq!(css_color("tomato", 1.0, &theme).unwrap(), "tomato");
    }
}
