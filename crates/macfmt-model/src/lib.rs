//! Shared types for MAC address normalization.
//!
//! This crate holds the strongly typed address, the fixed set of canonical
//! notations, and the tagged outcome produced by the normalizer.

pub mod address;
pub mod error;
pub mod format;
pub mod normalization;

pub use address::{MAC_HEX_DIGITS, MacAddress, hex_digits};
pub use error::{MacError, Result};
pub use format::MacFormat;
pub use normalization::{FormattedMac, Normalization, ValidationState};
