//! Platform clipboard glue.
//!
//! Copying is delegated to an external program (`pbcopy`, `wl-copy`,
//! `xclip -selection clipboard`, `clip.exe`, ...) that reads the text on stdin.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;

use macfmt_normalize::Clipboard;

/// Clipboard backed by an external command.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Build from a program followed by its arguments; `None` when empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        debug!(program = %self.program, "spawning clipboard command");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("spawn {}", self.program))?;
        // The child is reaped even when it stops reading early.
        let fed = match child.stdin.take() {
            Some(mut stdin) => stdin
                .write_all(text.as_bytes())
                .context("write to clipboard command"),
            None => Err(anyhow!("clipboard command has no stdin")),
        };
        let status = child.wait().context("wait for clipboard command")?;
        fed?;
        if !status.success() {
            bail!("{} exited with {status}", self.program);
        }
        Ok(())
    }
}

/// Clipboard used when no command is configured; every write fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        bail!("no clipboard command configured (set clipboard.command in settings)")
    }
}

/// Pick the clipboard implementation for a configured command line.
pub fn clipboard_from_settings(command: &[String]) -> Box<dyn Clipboard> {
    match CommandClipboard::from_argv(command) {
        Some(clipboard) => Box::new(clipboard),
        None => Box::new(NoClipboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argv_has_no_command() {
        assert!(CommandClipboard::from_argv(&[]).is_none());
    }

    #[test]
    fn argv_splits_program_and_args() {
        let argv = vec!["xclip".to_string(), "-selection".to_string(), "clipboard".to_string()];
        let clipboard = CommandClipboard::from_argv(&argv).expect("command");
        assert_eq!(clipboard.program, "xclip");
        assert_eq!(clipboard.args, vec!["-selection", "clipboard"]);
    }

    #[test]
    fn no_clipboard_always_fails() {
        assert!(NoClipboard.write_text("AA:BB:CC:DD:EE:FF").is_err());
    }

    #[test]
    fn missing_program_fails() {
        let argv = vec!["macfmt-test-no-such-clipboard-program".to_string()];
        let mut clipboard = CommandClipboard::from_argv(&argv).expect("command");
        assert!(clipboard.write_text("x").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn command_receives_text() {
        let argv = vec!["cat".to_string()];
        let mut clipboard = CommandClipboard::from_argv(&argv).expect("command");
        clipboard.write_text("AABB.CCDD.EEFF").expect("cat accepts stdin");
    }

    /// Zombie children of this process whose command name is `comm`.
    #[cfg(target_os = "linux")]
    fn zombie_children(comm: &str) -> usize {
        let me = std::process::id().to_string();
        let Ok(entries) = std::fs::read_dir("/proc") else {
            return 0;
        };
        entries
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                let Some(open) = stat.find('(') else {
                    return false;
                };
                let Some(close) = stat.rfind(')') else {
                    return false;
                };
                let name = &stat[open + 1..close];
                let mut fields = stat[close + 1..].split_whitespace();
                let state = fields.next();
                let ppid = fields.next();
                name == comm && state == Some("Z") && ppid == Some(me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn early_exit_is_reaped() {
        let argv = vec!["true".to_string()];
        let mut clipboard = CommandClipboard::from_argv(&argv).expect("command");
        // Larger than a pipe buffer, so the write fails once `true` exits.
        let result = clipboard.write_text(&"A".repeat(1 << 20));
        assert!(result.is_err());
        assert_eq!(zombie_children("true"), 0);
    }
}
