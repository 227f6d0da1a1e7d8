//! Cell colors parsed from CSS-style hex strings.
//!
//! Cells store a [`Color`] rather than the raw string, so malformed input is
//! rejected at the boundary instead of surfacing as garbage pixels later.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// An opaque 24-bit RGB color.
///
/// Parses from `#rgb` and `#rrggbb` hex notation and displays as `#rrggbb`.
///
/// # Examples
///
/// ```
/// use canvasgrid::Color;
///
/// let red: Color = "#f00".parse().unwrap();
/// assert_eq!(red, Color::rgb(0xff, 0x00, 0x00));
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rgb` or `#rrggbb` hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| Error::ColorParse(format!("missing '#' prefix in {:?}", s)))?;

        let parse = |chunk: &str| {
            u8::from_str_radix(chunk, 16)
                .map_err(|_| Error::ColorParse(format!("bad hex digits in {:?}", s)))
        };

        match digits.len() {
            // Short form: each digit doubles, per CSS (#abc == #aabbcc)
            3 => {
                let r = parse(&digits[0..1])?;
                let g = parse(&digits[1..2])?;
                let b = parse(&digits[2..3])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(
                parse(&digits[0..2])?,
                parse(&digits[2..4])?,
                parse(&digits[4..6])?,
            )),
            n => Err(Error::ColorParse(format!(
                "expected 3 or 6 hex digits, got {} in {:?}",
                n, s
            ))),
        }
    }

    /// RGBA bytes at full opacity, the layout pixmap surfaces store.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

// Scene files carry colors as hex strings, so serde round-trips through the
// display form rather than a struct of channels.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(D::Error::custom)
    }
}
