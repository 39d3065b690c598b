use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// An 8-bit RGBA color. Parsed colors are always fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channel values in `[r, g, b, a]` order, the layout the renderer uses.
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a `#RRGGBB` color string.
///
/// Exactly six hex digits after the `#`, case-insensitive. No whitespace
/// trimming, no 3-digit shorthand, no named colors. Alpha is fixed at 255.
pub fn parse_hex(s: &str) -> Result<Color, ParseError> {
    let rest = s.strip_prefix('#').ok_or(ParseError::MissingPrefix)?;

    let digits: Vec<char> = rest.chars().collect();
    if digits.len() != 6 {
        return Err(ParseError::InvalidLength {
            found: digits.len(),
        });
    }

    let nibble = |c: char| -> Result<u8, ParseError> {
        c.to_digit(16)
            .map(|v| v as u8)
            .ok_or(ParseError::InvalidDigit { digit: c })
    };
    let pair = |hi: char, lo: char| -> Result<u8, ParseError> {
        Ok(nibble(hi)? << 4 | nibble(lo)?)
    };

    Ok(Color {
        r: pair(digits[0], digits[1])?,
        g: pair(digits[2], digits[3])?,
        b: pair(digits[4], digits[5])?,
        a: 255,
    })
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}
