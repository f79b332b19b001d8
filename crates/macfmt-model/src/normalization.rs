//! Normalization outcome types.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::address::MacAddress;
use crate::error::{MacError, Result};
use crate::format::MacFormat;

/// Tri-state validity of the current input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationState {
    /// Blank or whitespace-only input.
    #[default]
    Empty,
    /// Input that does not hold exactly twelve hex digits.
    Invalid,
    /// Input that holds exactly twelve hex digits.
    Valid,
}

impl ValidationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationState::Empty => "empty",
            ValidationState::Invalid => "invalid",
            ValidationState::Valid => "valid",
        }
    }
}

/// Ordered set of formatted renderings of one address.
///
/// Entry order is display order. Every value is derived from the same
/// address, so the values are pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMac {
    address: MacAddress,
    entries: Vec<(MacFormat, String)>,
}

impl FormattedMac {
    /// Render `address` in every separated notation, plus the unseparated
    /// upper and lower forms when `include_plain` is set.
    pub fn new(address: MacAddress, include_plain: bool) -> Self {
        let entries = MacFormat::ALL
            .into_iter()
            .filter(|format| include_plain || format.separator().is_some())
            .map(|format| (format, address.format(format)))
            .collect();
        Self { address, entries }
    }

    pub fn address(&self) -> MacAddress {
        self.address
    }

    pub fn get(&self, format: MacFormat) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == format)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, format: MacFormat) -> bool {
        self.get(format).is_some()
    }

    /// Entry at a zero-based display position.
    pub fn nth(&self, index: usize) -> Option<(MacFormat, &str)> {
        self.entries
            .get(index)
            .map(|(format, value)| (*format, value.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (MacFormat, &str)> {
        self.entries
            .iter()
            .map(|(format, value)| (*format, value.as_str()))
    }

    pub fn formats(&self) -> impl Iterator<Item = MacFormat> + '_ {
        self.entries.iter().map(|(format, _)| *format)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the unseparated upper/lower forms were included.
    pub fn has_plain_forms(&self) -> bool {
        self.contains(MacFormat::Upper)
    }
}

impl Serialize for FormattedMac {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (format, value) in &self.entries {
            map.serialize_entry(format.as_str(), value)?;
        }
        map.end()
    }
}

/// Result of normalizing one raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Normalization {
    Empty,
    Invalid {
        /// Hex digits found after stripping everything else.
        digits: usize,
    },
    Valid {
        formats: FormattedMac,
    },
}

impl Normalization {
    pub fn state(&self) -> ValidationState {
        match self {
            Normalization::Empty => ValidationState::Empty,
            Normalization::Invalid { .. } => ValidationState::Invalid,
            Normalization::Valid { .. } => ValidationState::Valid,
        }
    }

    pub fn formats(&self) -> Option<&FormattedMac> {
        match self {
            Normalization::Valid { formats } => Some(formats),
            _ => None,
        }
    }

    /// Convert into a `Result` for callers that treat non-valid input as an error.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::Empty`] or [`MacError::InvalidLength`].
    pub fn into_result(self) -> Result<FormattedMac> {
        match self {
            Normalization::Empty => Err(MacError::Empty),
            Normalization::Invalid { digits } => Err(MacError::InvalidLength { digits }),
            Normalization::Valid { formats } => Ok(formats),
        }
    }
}
