//! Zone colors and the proximity shading rule.
//!
//! Colors are stored as ARGB bytes. The palette constants match the
//! standard web named colors so zone definitions read the same in config
//! files and in code.

mod proximity;

pub use proximity::{display_color, MIDDLE_PERIMETER_THRESHOLD, OUTER_PERIMETER_THRESHOLD};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An ARGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 128, 0);
    pub const DARK_BLUE: Color = Color::from_rgb(0, 0, 139);
    pub const DARK_RED: Color = Color::from_rgb(139, 0, 0);
    pub const DARK_GREEN: Color = Color::from_rgb(0, 100, 0);
    pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
    pub const ORANGE: Color = Color::from_rgb(255, 165, 0);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const GRAY: Color = Color::from_rgb(128, 128, 128);

    /// Creates a color from alpha, red, green and blue channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates a fully opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Blends each color channel toward white by `factor`.
    ///
    /// Every channel becomes `min(255, channel + 255 * factor)`, truncated
    /// to an integer. Alpha is left untouched.
    pub fn lighten(&self, factor: f64) -> Self {
        let channel = |c: u8| (c as f64 + 255.0 * factor).clamp(0.0, 255.0) as u8;
        Self {
            a: self.a,
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }

    /// Looks up a palette color by name (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_lowercase().as_str() {
            "blue" => Self::BLUE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "darkblue" => Self::DARK_BLUE,
            "darkred" => Self::DARK_RED,
            "darkgreen" => Self::DARK_GREEN,
            "purple" => Self::PURPLE,
            "orange" => Self::ORANGE,
            "yellow" => Self::YELLOW,
            "white" => Self::WHITE,
            "gray" | "grey" => Self::GRAY,
            _ => return None,
        };
        Some(color)
    }

    /// Palette name of this color, if it is one of the named constants.
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::BLUE => "Blue",
            Self::RED => "Red",
            Self::GREEN => "Green",
            Self::DARK_BLUE => "DarkBlue",
            Self::DARK_RED => "DarkRed",
            Self::DARK_GREEN => "DarkGreen",
            Self::PURPLE => "Purple",
            Self::ORANGE => "Orange",
            Self::YELLOW => "Yellow",
            Self::WHITE => "White",
            Self::GRAY => "Gray",
            _ => return None,
        };
        Some(name)
    }
}

/// Errors from parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Hex form with the wrong number of digits
    #[error("expected #RRGGBB or #AARRGGBB, got '{0}'")]
    InvalidLength(String),

    /// Hex form containing a non-hex character
    #[error("invalid hex digits in '{0}'")]
    InvalidHex(String),

    /// Neither a hex value nor a known palette name
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Color::named(s).ok_or_else(|| ColorParseError::UnknownName(s.to_string()));
        };

        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::InvalidLength(s.to_string()));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(s.to_string()));
        }

        let value =
            u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::InvalidHex(s.to_string()))?;
        let [b3, b2, b1, b0] = value.to_be_bytes();

        if hex.len() == 6 {
            Ok(Color::from_rgb(b2, b1, b0))
        } else {
            Ok(Color::from_argb(b3, b2, b1, b0))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_opaque() {
        for color in [
            Color::BLUE,
            Color::RED,
            Color::GREEN,
            Color::DARK_BLUE,
            Color::DARK_RED,
            Color::DARK_GREEN,
            Color::PURPLE,
            Color::ORANGE,
            Color::YELLOW,
            Color::WHITE,
            Color::GRAY,
        ] {
            assert_eq!(color.a, 255);
        }
    }

    #[test]
    fn test_lighten_clamps_and_keeps_alpha() {
        let translucent = Color::from_argb(100, 200, 10, 0);
        let lighter = translucent.lighten(0.75);

        assert_eq!(lighter.a, 100);
        assert_eq!(lighter.r, 255);
        // 10 + 191.25 truncates to 201
        assert_eq!(lighter.g, 201);
        assert_eq!(lighter.b, 191);
    }

    #[test]
    fn test_lighten_by_zero_is_identity() {
        assert_eq!(Color::ORANGE.lighten(0.0), Color::ORANGE);
    }

    #[test]
    fn test_parse_rgb_hex() {
        let color: Color = "#00008B".parse().unwrap();
        assert_eq!(color, Color::DARK_BLUE);
    }

    #[test]
    fn test_parse_argb_hex() {
        let color: Color = "#80FFA500".parse().unwrap();
        assert_eq!(color, Color::from_argb(0x80, 255, 165, 0));
    }

    #[test]
    fn test_parse_named_case_insensitive() {
        assert_eq!("DarkGreen".parse::<Color>().unwrap(), Color::DARK_GREEN);
        assert_eq!("grey".parse::<Color>().unwrap(), Color::GRAY);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            "#GG0000".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "chartreuse".parse::<Color>(),
            Err(ColorParseError::UnknownName(_))
        ));
    }

    #[test]
    fn test_palette_names_round_trip() {
        assert_eq!(Color::DARK_RED.name(), Some("DarkRed"));
        assert_eq!(Color::named("DarkRed"), Some(Color::DARK_RED));
        assert_eq!(Color::from_rgb(1, 2, 3).name(), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = Color::from_argb(0x40, 1, 2, 3);
        assert_eq!(color.to_string(), "#40010203");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }
}
