//! Seed color parsing and fallback policy.

use std::fmt;
use std::str::FromStr;

use csscolorparser::Color as CssColor;
use palette::Srgb;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Seed used when no valid color has been supplied.
pub const DEFAULT_SEED: SeedColor = SeedColor(Srgb::new(0x3B, 0x82, 0xF6));

/// Error returned when a seed string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("expected 6 hex digits, got {0} characters in '{1}'")]
    Length(usize, String),
    #[error("'{0}' contains non-hex characters")]
    NotHex(String),
    #[error("invalid CSS color '{0}': {1}")]
    Css(String, String),
}

/// The single user-chosen color every palette is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedColor(Srgb<u8>);

impl SeedColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Parse a 6-digit hex string, case-insensitive, with or without `#`.
    pub fn parse(input: &str) -> Result<Self, SeedError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.chars().count() != 6 {
            return Err(SeedError::Length(
                digits.chars().count(),
                input.to_string(),
            ));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SeedError::NotHex(input.to_string()));
        }
        // palette's FromStr takes the bare hex digits
        Srgb::from_str(digits)
            .map(Self)
            .map_err(|_| SeedError::NotHex(input.to_string()))
    }

    /// Parse any CSS color (hex, rgb(), hsl(), oklch(), named). Alpha is dropped.
    pub fn parse_css(input: &str) -> Result<Self, SeedError> {
        let css = input
            .parse::<CssColor>()
            .map_err(|e| SeedError::Css(input.to_string(), e.to_string()))?;
        let [r, g, b, _a] = css.to_rgba8();
        Ok(Self::new(r, g, b))
    }

    /// Parse, falling back to `fallback` on invalid input.
    pub fn parse_or(input: &str, fallback: SeedColor) -> Self {
        match Self::parse(input) {
            Ok(seed) => seed,
            Err(e) => {
                tracing::warn!(input, error = %e, fallback = %fallback, "Invalid seed color");
                fallback
            }
        }
    }

    pub fn rgb(self) -> Srgb<u8> {
        self.0
    }

    /// Upper-case `#RRGGBB`.
    pub fn to_hex(self) -> String {
        hex(self.0)
    }
}

impl Default for SeedColor {
    fn default() -> Self {
        DEFAULT_SEED
    }
}

impl From<Srgb<u8>> for SeedColor {
    fn from(color: Srgb<u8>) -> Self {
        Self(color)
    }
}

impl FromStr for SeedColor {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SeedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for SeedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SeedColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Format an sRGB color as upper-case `#RRGGBB`.
pub fn hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(SeedColor::parse("#3b82f6"), Ok(DEFAULT_SEED));
        assert_eq!(SeedColor::parse("3B82F6"), Ok(DEFAULT_SEED));
        assert_eq!(SeedColor::parse("  #3B82f6 "), Ok(DEFAULT_SEED));
    }

    #[test]
    fn rejects_short_and_non_hex() {
        assert!(matches!(
            SeedColor::parse("#fff"),
            Err(SeedError::Length(3, _))
        ));
        assert!(matches!(
            SeedColor::parse("#GGGGGG"),
            Err(SeedError::NotHex(_))
        ));
        assert!(SeedColor::parse("not-a-color").is_err());
        assert!(SeedColor::parse("").is_err());
    }

    #[test]
    fn parse_or_uses_fallback() {
        let pink = SeedColor::new(0xEC, 0x48, 0x99);
        assert_eq!(SeedColor::parse_or("nope", pink), pink);
        assert_eq!(SeedColor::parse_or("#3B82F6", pink), DEFAULT_SEED);
    }

    #[test]
    fn css_input_is_normalized() {
        assert_eq!(
            SeedColor::parse_css("rgb(59, 130, 246)").unwrap(),
            DEFAULT_SEED
        );
        assert_eq!(SeedColor::parse_css("red").unwrap().to_hex(), "#FF0000");
        assert!(SeedColor::parse_css("not-a-color").is_err());
    }

    #[test]
    fn displays_upper_case_hex() {
        assert_eq!(SeedColor::new(0xec, 0x48, 0x99).to_string(), "#EC4899");
    }
}
