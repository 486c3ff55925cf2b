// SPDX-License-Identifier: MIT
//
// HexColor — an sRGB triplet that always prints as canonical `#RRGGBB`.
//
// Input is case-insensitive and the `#` is optional; output is always
// uppercase with the `#`. Short forms (`#RGB`) and alpha (`#RRGGBBAA`) are
// rejected: a brand color is exactly three bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::hsl::{Hsl, hex_to_hsl};

// ─── HexColor ────────────────────────────────────────────────────────────────

/// An opaque 24-bit sRGB color.
///
/// ```
/// use lento_color::HexColor;
///
/// let brand: HexColor = "#8b1e1e".parse().unwrap();
/// assert_eq!(brand.to_string(), "#8B1E1E");
/// assert_eq!(brand.channels(), (139, 30, 30));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Create a color from its three channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`, in any letter case.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidLength`] when the digit run is not six
    /// bytes long, and [`ColorError::InvalidDigit`] on the first byte that is
    /// not a hex digit.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let bytes = digits.as_bytes();

        if bytes.len() != 6 {
            return Err(ColorError::InvalidLength {
                input: input.to_owned(),
                len: digits.chars().count(),
            });
        }

        let mut channels = [0u8; 3];
        for (i, pair) in bytes.chunks_exact(2).enumerate() {
            let hi = digit_at(input, digits, 2 * i, pair[0])?;
            let lo = digit_at(input, digits, 2 * i + 1, pair[1])?;
            channels[i] = hi << 4 | lo;
        }

        let [r, g, b] = channels;
        Ok(Self::rgb(r, g, b))
    }

    /// The three channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channels scaled to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Convert to HSL with integer-rounded components.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        hex_to_hsl(self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({self})")
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

// ─── Digit parsing ───────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode the digit at byte `position` of `digits`, reporting the offending
/// character against the original `input` on failure.
///
/// Every byte before `position` is an ASCII hex digit, so `position` is
/// always a char boundary.
fn digit_at(input: &str, digits: &str, position: usize, byte: u8) -> Result<u8, ColorError> {
    parse_hex_digit(byte).ok_or_else(|| ColorError::InvalidDigit {
        input: input.to_owned(),
        position,
        found: digits[position..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
