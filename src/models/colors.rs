use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque RGB color.
///
/// Serialized as an uppercase six digit hex string without the leading `#`
/// (e.g. `"2563EB"`), which is the form presentation writers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    /// The red component of the color, from 0 to 255.
    pub red: u8,
    /// The green component of the color, from 0 to 255.
    pub green: u8,
    /// The blue component of the color, from 0 to 255.
    pub blue: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Parses `RRGGBB` or `#RRGGBB` (case-insensitive).
    /// Returns `None` for any other shape of input.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let red = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let green = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let blue = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Color::rgb(red, green, blue))
    }

    /// Formats the color as `RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}
