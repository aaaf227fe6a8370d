//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use palette::{Mix, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{TexError, Result};

/// An RGBA colour value.
///
/// Equality is exact per channel, which is what colour replacement relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Parse a colour from a hex string or a CSS colour name.
    ///
    /// Names are looked up case-insensitively (`red`, `CornflowerBlue`,
    /// `transparent`). Anything else is treated as hex.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if !s.starts_with('#') {
            if let Some(named) = palette::named::from_str(&s.to_ascii_lowercase()) {
                return Ok(Self::rgb(named.red, named.green, named.blue));
            }
        }
        Self::from_hex(s)
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`; the leading `#`
    /// is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                let mut channels = [255u8; 4];
                for (i, c) in hex.chars().enumerate() {
                    let d = parse_hex_digit(c)?;
                    channels[i] = d << 4 | d;
                }
                Ok(Self::from_rgba(channels))
            }
            6 | 8 => {
                let mut channels = [255u8; 4];
                for i in 0..hex.len() / 2 {
                    channels[i] = parse_hex_byte(&hex[i * 2..i * 2 + 2])?;
                }
                Ok(Self::from_rgba(channels))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Build from an RGBA array.
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Mix the RGB channels of two colours in sRGB component space.
    ///
    /// `factor` 0.0 returns `self`, 1.0 returns `other`. Alpha is taken from
    /// `self`; gradients interpolate alpha separately.
    pub fn mix_rgb(self, other: Colour, factor: f32) -> Colour {
        let from: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        let to: Srgb<f32> = Srgb::new(other.r, other.g, other.b).into_format();
        let mixed: Srgb<u8> = from.mix(to, factor.clamp(0.0, 1.0)).into_format();
        Colour::new(mixed.red, mixed.green, mixed.blue, self.a)
    }
}

impl FromStr for Colour {
    type Err = TexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = TexError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_hex(s: &str) -> TexError {
    TexError::Parse {
        message: format!("Invalid colour: {}", s),
        help: Some("Use a CSS colour name or #RGB, #RGBA, #RRGGBB, #RRGGBBAA".to_string()),
    }
}

fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| TexError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| TexError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
