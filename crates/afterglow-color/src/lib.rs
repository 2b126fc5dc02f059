//! Terminal color parsing for the afterglow screensaver pack
//!
//! Accepts the color spellings that show up in saver settings files: named
//! colors, 256-color palette indices, `R;G;B` triples, and `#RRGGBB` hex.
//! Every accepted form is normalized to the plain `R;G;B` sequence that the
//! renderers feed into SGR escape codes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unknown color name: {0}")]
    UnknownName(String),

    #[error("invalid color component: {0}")]
    InvalidComponent(String),

    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("empty color value")]
    Empty,
}

/// A 24-bit color resolved from any of the accepted input forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Resolve a 256-color palette index to its RGB value.
    ///
    /// Indices 0-15 use the standard ANSI table, 16-231 the 6x6x6 cube,
    /// and 232-255 the grayscale ramp.
    pub fn from_index(index: u8) -> Self {
        match index {
            0..=15 => ANSI_TABLE[index as usize],
            16..=231 => {
                let cube = index - 16;
                let r = cube / 36;
                let g = (cube % 36) / 6;
                let b = cube % 6;
                Self::rgb(CUBE_STEPS[r as usize], CUBE_STEPS[g as usize], CUBE_STEPS[b as usize])
            }
            232..=255 => {
                let gray = 8 + 10 * (index - 232);
                Self::rgb(gray, gray, gray)
            }
        }
    }

    /// The normalized `R;G;B` form stored in settings and spliced into
    /// SGR 38/48 escape sequences.
    pub fn plain_sequence(&self) -> String {
        format!("{};{};{}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.r, self.g, self.b)
    }
}

/// Component values of the 6x6x6 color cube.
const CUBE_STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// The 16 standard ANSI colors (xterm defaults).
const ANSI_TABLE: [Color; 16] = [
    Color::rgb(0, 0, 0),
    Color::rgb(128, 0, 0),
    Color::rgb(0, 128, 0),
    Color::rgb(128, 128, 0),
    Color::rgb(0, 0, 128),
    Color::rgb(128, 0, 128),
    Color::rgb(0, 128, 128),
    Color::rgb(192, 192, 192),
    Color::rgb(128, 128, 128),
    Color::rgb(255, 0, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(255, 0, 255),
    Color::rgb(0, 255, 255),
    Color::rgb(255, 255, 255),
];

/// Resolve a color name to its ANSI palette entry.
fn parse_named(name: &str) -> Option<Color> {
    let index = match name.to_lowercase().as_str() {
        "black" => 0,
        "maroon" | "darkred" => 1,
        "green" | "darkgreen" => 2,
        "olive" => 3,
        "navy" | "darkblue" => 4,
        "purple" => 5,
        "teal" | "darkcyan" => 6,
        "silver" => 7,
        "gray" | "grey" | "darkgray" | "darkgrey" => 8,
        "red" => 9,
        "lime" | "brightgreen" => 10,
        "yellow" => 11,
        "blue" => 12,
        "fuchsia" | "magenta" => 13,
        "aqua" | "cyan" => 14,
        "white" => 15,
        _ => return None,
    };
    Some(ANSI_TABLE[index])
}

/// Parse a `#RRGGBB` hex spelling.
fn parse_hex(value: &str) -> Result<Color, ColorParseError> {
    let hex = &value[1..];
    if hex.len() != 6 {
        return Err(ColorParseError::InvalidHex(value.to_string()));
    }
    let component = |range| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| ColorParseError::InvalidHex(value.to_string()))
    };
    Ok(Color {
        r: component(0..2)?,
        g: component(2..4)?,
        b: component(4..6)?,
    })
}

/// Parse an `R;G;B` triple.
fn parse_triple(value: &str) -> Result<Color, ColorParseError> {
    let mut parts = value.split(';');
    let mut component = || {
        let part = parts
            .next()
            .ok_or_else(|| ColorParseError::InvalidComponent(value.to_string()))?;
        part.trim()
            .parse::<u8>()
            .map_err(|_| ColorParseError::InvalidComponent(part.trim().to_string()))
    };
    let r = component()?;
    let g = component()?;
    let b = component()?;
    if parts.next().is_some() {
        return Err(ColorParseError::InvalidComponent(value.to_string()));
    }
    Ok(Color { r, g, b })
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if value.starts_with('#') {
            return parse_hex(value);
        }

        if value.contains(';') {
            return parse_triple(value);
        }

        if let Ok(index) = value.parse::<u8>() {
            return Ok(Color::from_index(index));
        }

        parse_named(value).ok_or_else(|| ColorParseError::UnknownName(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        let color: Color = "255;128;0".parse().unwrap();
        assert_eq!(color, Color::rgb(255, 128, 0));
        assert_eq!(color.plain_sequence(), "255;128;0");
    }

    #[test]
    fn test_parse_triple_with_spaces() {
        let color: Color = " 10 ; 20 ; 30 ".parse().unwrap();
        assert_eq!(color, Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("Black".parse::<Color>().unwrap(), Color::rgb(0, 0, 0));
        assert_eq!("white".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_index() {
        // ANSI entry
        assert_eq!("9".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        // Cube entry: 196 = 16 + 36*5 -> pure red
        assert_eq!("196".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        // Grayscale ramp
        assert_eq!("232".parse::<Color>().unwrap(), Color::rgb(8, 8, 8));
        assert_eq!("255".parse::<Color>().unwrap(), Color::rgb(238, 238, 238));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::rgb(255, 128, 0));
        assert!("#ff80".parse::<Color>().is_err());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!("".parse::<Color>().is_err());
        assert!("300;0;0".parse::<Color>().is_err());
        assert!("1;2".parse::<Color>().is_err());
        assert!("1;2;3;4".parse::<Color>().is_err());
        assert!("notacolor".parse::<Color>().is_err());
    }

    #[test]
    fn test_plain_sequence_roundtrip() {
        let color: Color = "lime".parse().unwrap();
        let replayed: Color = color.plain_sequence().parse().unwrap();
        assert_eq!(color, replayed);
    }
}
