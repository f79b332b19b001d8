//! Free-form MAC address normalization.
//!
//! [`normalize`] turns arbitrary text into a [`Normalization`]: empty, invalid,
//! or valid with every canonical rendering. [`NormalizerSession`] layers the
//! input lifecycle on top: last-value memoization and the transient
//! "just copied" mark.

pub mod clipboard;
pub mod normalizer;
pub mod session;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use macfmt_model::{FormattedMac, MacAddress, MacFormat, Normalization, ValidationState};
pub use normalizer::{has_lowercase_digits, normalize};
pub use session::{CopyOutcome, DEFAULT_FLASH, NormalizerSession};
