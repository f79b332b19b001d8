//! Canonical MAC address notations.
//!
//! Each variant is one fixed layout for displaying a 12-digit hex value.
//! The declaration order is the display order used everywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MacError;

/// A canonical notation for a MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacFormat {
    /// Six uppercase pairs joined by colons: `AA:BB:CC:DD:EE:FF`.
    Colon,
    /// Six uppercase pairs joined by hyphens: `AA-BB-CC-DD-EE-FF`.
    Hyphen,
    /// Three uppercase quads joined by hyphens: `AABB-CCDD-EEFF`.
    Windows,
    /// Three uppercase quads joined by dots: `AABB.CCDD.EEFF`.
    Dot,
    /// Unseparated uppercase: `AABBCCDDEEFF`.
    Upper,
    /// Unseparated lowercase: `aabbccddeeff`.
    Lower,
}

impl MacFormat {
    /// Every format, in display order.
    pub const ALL: [MacFormat; 6] = [
        MacFormat::Colon,
        MacFormat::Hyphen,
        MacFormat::Windows,
        MacFormat::Dot,
        MacFormat::Upper,
        MacFormat::Lower,
    ];

    /// Formats that carry separators; always present for a valid address.
    pub const SEPARATED: [MacFormat; 4] = [
        MacFormat::Colon,
        MacFormat::Hyphen,
        MacFormat::Windows,
        MacFormat::Dot,
    ];

    /// Stable machine name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MacFormat::Colon => "colon",
            MacFormat::Hyphen => "hyphen",
            MacFormat::Windows => "windows",
            MacFormat::Dot => "dot",
            MacFormat::Upper => "upper",
            MacFormat::Lower => "lower",
        }
    }

    /// Short human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            MacFormat::Colon => "Colon-separated pairs (IEEE, Linux, macOS)",
            MacFormat::Hyphen => "Hyphen-separated pairs (IEEE 802)",
            MacFormat::Windows => "Hyphen-separated quads",
            MacFormat::Dot => "Dot-separated quads (Cisco)",
            MacFormat::Upper => "Unseparated uppercase",
            MacFormat::Lower => "Unseparated lowercase",
        }
    }

    /// Separator character between groups, if any.
    pub fn separator(&self) -> Option<char> {
        match self {
            MacFormat::Colon => Some(':'),
            MacFormat::Hyphen | MacFormat::Windows => Some('-'),
            MacFormat::Dot => Some('.'),
            MacFormat::Upper | MacFormat::Lower => None,
        }
    }

    /// Number of hex digits per separated group.
    pub fn group_width(&self) -> usize {
        match self {
            MacFormat::Colon | MacFormat::Hyphen => 2,
            MacFormat::Windows | MacFormat::Dot => 4,
            MacFormat::Upper | MacFormat::Lower => 12,
        }
    }
}

impl fmt::Display for MacFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MacFormat {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MacFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(trimmed))
            .or_else(|| match trimmed.to_ascii_lowercase().as_str() {
                "cisco" => Some(MacFormat::Dot),
                "ieee" => Some(MacFormat::Hyphen),
                _ => None,
            })
            .ok_or_else(|| MacError::UnknownFormat(trimmed.to_string()))
    }
}
