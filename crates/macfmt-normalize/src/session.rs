//! Input session state for interactive front ends.
//!
//! The session owns the current raw input and its derived normalization.
//! The result is recomputed whenever the input changes and memoized for the
//! last input value only. The "just copied" mark is keyed by format, so two
//! entries never share it, and is dropped whenever the input changes.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use macfmt_model::{FormattedMac, MacFormat, Normalization, ValidationState};

use crate::clipboard::Clipboard;
use crate::normalizer::normalize;

/// How long an entry stays marked as copied.
pub const DEFAULT_FLASH: Duration = Duration::from_millis(2000);

/// Outcome of [`NormalizerSession::copy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The value was handed to the clipboard.
    Copied(String),
    /// The clipboard rejected the write; the failure was logged.
    Failed,
    /// The current result has no entry for the requested format.
    Unavailable,
}

#[derive(Debug, Clone, Copy)]
struct CopyMark {
    format: MacFormat,
    at: Instant,
}

#[derive(Debug)]
pub struct NormalizerSession {
    input: String,
    result: Normalization,
    copied: Option<CopyMark>,
    flash: Duration,
    recomputations: u64,
}

impl Default for NormalizerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerSession {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            result: Normalization::Empty,
            copied: None,
            flash: DEFAULT_FLASH,
            recomputations: 0,
        }
    }

    #[must_use]
    pub fn with_flash(mut self, flash: Duration) -> Self {
        self.flash = flash;
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input wholesale and return the derived result.
    ///
    /// Re-submitting the current input reuses the memoized result and keeps
    /// the copied mark.
    pub fn set_input(&mut self, raw: impl Into<String>) -> &Normalization {
        let raw = raw.into();
        if raw == self.input {
            return &self.result;
        }
        self.result = normalize(&raw);
        self.input = raw;
        self.copied = None;
        self.recomputations += 1;
        debug!(state = self.result.state().as_str(), "input updated");
        &self.result
    }

    pub fn clear(&mut self) {
        self.set_input(String::new());
    }

    pub fn result(&self) -> &Normalization {
        &self.result
    }

    pub fn state(&self) -> ValidationState {
        self.result.state()
    }

    pub fn formats(&self) -> Option<&FormattedMac> {
        self.result.formats()
    }

    /// Number of times the result was actually recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Copy the value of `format` to `clipboard` and mark it as just copied.
    ///
    /// Clipboard failures are logged and otherwise ignored.
    pub fn copy(
        &mut self,
        format: MacFormat,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> CopyOutcome {
        let Some(value) = self.formats().and_then(|f| f.get(format)).map(str::to_string) else {
            return CopyOutcome::Unavailable;
        };
        match clipboard.write_text(&value) {
            Ok(()) => {
                debug!(%format, "copied to clipboard");
                self.copied = Some(CopyMark { format, at: now });
                CopyOutcome::Copied(value)
            }
            Err(error) => {
                warn!(%format, error = %error, "clipboard write failed");
                CopyOutcome::Failed
            }
        }
    }

    /// Format currently flashing as copied at `now`, if any.
    pub fn just_copied(&self, now: Instant) -> Option<MacFormat> {
        self.copied
            .filter(|mark| now.saturating_duration_since(mark.at) < self.flash)
            .map(|mark| mark.format)
    }

    pub fn is_just_copied(&self, format: MacFormat, now: Instant) -> bool {
        self.just_copied(now) == Some(format)
    }
}
