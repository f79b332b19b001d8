//! Clipboard seam used by the session's copy operation.

use anyhow::Result;

/// A destination for copied text.
///
/// Implementations talk to the platform; failures are reported to the caller,
/// which logs them and moves on.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// In-process clipboard that keeps the last written text.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
