//! Strongly typed 48-bit MAC address.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MacError, Result};
use crate::format::MacFormat;

/// Number of hex digits in a MAC address.
pub const MAC_HEX_DIGITS: usize = 12;

/// Extract the hexadecimal digits of `raw`, preserving their case and order.
///
/// Every other character (separators, whitespace, stray letters) is dropped.
pub fn hex_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_hexdigit).collect()
}

/// A 48-bit hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Build an address from exactly twelve hex digits with no separators.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidDigit`] for any non-hex character and
    /// [`MacError::InvalidLength`] when the digit count is not twelve.
    pub fn from_hex_digits(digits: &str) -> Result<Self> {
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(MacError::InvalidDigit(bad));
        }
        if digits.len() != MAC_HEX_DIGITS {
            return Err(MacError::InvalidLength {
                digits: digits.len(),
            });
        }
        let mut octets = [0u8; 6];
        for (index, octet) in octets.iter_mut().enumerate() {
            let pair = &digits[index * 2..index * 2 + 2];
            *octet = u8::from_str_radix(pair, 16)
                .map_err(|_| MacError::InvalidDigit(pair.chars().next().unwrap_or('?')))?;
        }
        Ok(Self(octets))
    }

    /// Parse free-form text by keeping only its hex digits.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::Empty`] for blank input and
    /// [`MacError::InvalidLength`] when the text does not hold twelve hex digits.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(MacError::Empty);
        }
        Self::from_hex_digits(&hex_digits(raw))
    }

    /// Render the address in the given notation.
    pub fn format(&self, format: MacFormat) -> String {
        match format {
            MacFormat::Colon | MacFormat::Hyphen | MacFormat::Windows | MacFormat::Dot => {
                let width = format.group_width() / 2;
                let separator = format.separator().map(String::from).unwrap_or_default();
                self.0
                    .chunks(width)
                    .map(|group| group.iter().map(|b| format!("{b:02X}")).collect::<String>())
                    .collect::<Vec<_>>()
                    .join(&separator)
            }
            MacFormat::Upper => self.0.iter().map(|b| format!("{b:02X}")).collect(),
            MacFormat::Lower => self.0.iter().map(|b| format!("{b:02x}")).collect(),
        }
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(MacFormat::Colon))
    }
}

impl FromStr for MacAddress {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: MacAddress = MacAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);

    #[test]
    fn hex_digits_keeps_case_and_order() {
        assert_eq!(hex_digits("aA:bB-0x9z"), "aAbB09");
        assert_eq!(hex_digits("not a mac at all"), "aacaa");
        assert_eq!(hex_digits(""), "");
    }

    #[test]
    fn parse_accepts_any_separators() {
        for raw in [
            "AA:BB:CC:DD:EE:FF",
            "aa-bb-cc-dd-ee-ff",
            "aabb.ccdd.eeff",
            "  AABBCCDDEEFF\n",
        ] {
            assert_eq!(MacAddress::parse(raw), Ok(SAMPLE), "input {raw:?}");
        }
    }

    #[test]
    fn parse_reports_empty_and_length() {
        assert_eq!(MacAddress::parse("   "), Err(MacError::Empty));
        assert_eq!(
            MacAddress::parse("AA:BB:CC:DD:EE"),
            Err(MacError::InvalidLength { digits: 10 })
        );
    }

    #[test]
    fn from_hex_digits_rejects_separators() {
        assert_eq!(
            MacAddress::from_hex_digits("AA:BB:CC:DD"),
            Err(MacError::InvalidDigit(':'))
        );
    }

    #[test]
    fn formats_every_notation() {
        assert_eq!(SAMPLE.format(MacFormat::Colon), "AA:BB:CC:DD:EE:FF");
        assert_eq!(SAMPLE.format(MacFormat::Hyphen), "AA-BB-CC-DD-EE-FF");
        assert_eq!(SAMPLE.format(MacFormat::Windows), "AABB-CCDD-EEFF");
        assert_eq!(SAMPLE.format(MacFormat::Dot), "AABB.CCDD.EEFF");
        assert_eq!(SAMPLE.format(MacFormat::Upper), "AABBCCDDEEFF");
        assert_eq!(SAMPLE.format(MacFormat::Lower), "aabbccddeeff");
    }

    #[test]
    fn leading_zero_octets_are_padded() {
        let mac = MacAddress::new([0x00, 0x04, 0x20, 0x0A, 0x0B, 0x01]);
        assert_eq!(mac.to_string(), "00:04:20:0A:0B:01");
    }

    #[test]
    fn serde_uses_colon_notation() {
        let json = serde_json::to_string(&SAMPLE).expect("serialize");
        assert_eq!(json, "\"AA:BB:CC:DD:EE:FF\"");
        let back: MacAddress = serde_json::from_str("\"aabb.ccdd.eeff\"").expect("deserialize");
        assert_eq!(back, SAMPLE);
    }
}
