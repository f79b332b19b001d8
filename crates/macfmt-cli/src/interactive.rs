//! Line-oriented interactive session.
//!
//! Every line that is not a command replaces the current input. Commands start
//! with `:`; a line such as `:AA:BB:CC:DD:EE:FF` that only holds hex digits and
//! separators is still taken as input.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use macfmt_model::{MacFormat, Normalization};
use macfmt_normalize::{Clipboard, CopyOutcome, NormalizerSession};

use crate::logging::redact_value;
use crate::summary::{formats_table, invalid_message, state_indicator};

pub const PROMPT: &str = "mac> ";

const HELP: &str = "\
Type a MAC address in any notation to see every format.
  :copy <format|#>  copy one entry (e.g. :copy dot, :copy 2)
  :show             redraw the current result
  :clear            clear the input
  :help             show this help
  :quit             leave
A leading ':' before an address is ignored, so ':aa:bb:cc:dd:ee:ff' works.";

/// Which entry a `:copy` command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Format(MacFormat),
    /// One-based display position.
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Input(String),
    Copy(CopyTarget),
    Show,
    Clear,
    Help,
    Quit,
}

/// Parse one line typed at the prompt.
///
/// # Errors
///
/// Returns a message for unknown commands or a malformed `:copy` target.
pub fn parse_line(line: &str) -> Result<SessionCommand, String> {
    let Some(command) = line.trim().strip_prefix(':') else {
        return Ok(SessionCommand::Input(line.to_string()));
    };
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();
    match (name, argument) {
        ("copy" | "c", Some(target)) => parse_copy_target(target).map(SessionCommand::Copy),
        ("copy" | "c", None) => Err("usage: :copy <format|#>".to_string()),
        ("show" | "s", _) => Ok(SessionCommand::Show),
        ("clear", _) => Ok(SessionCommand::Clear),
        ("help" | "h" | "?", _) => Ok(SessionCommand::Help),
        ("quit" | "q" | "exit", _) => Ok(SessionCommand::Quit),
        _ if looks_like_address(command) => Ok(SessionCommand::Input(line.to_string())),
        (other, _) => Err(format!("unknown command :{other} (try :help)")),
    }
}

/// Hex digits and separators only, with at least one digit.
fn looks_like_address(text: &str) -> bool {
    text.chars().any(|ch| ch.is_ascii_hexdigit())
        && text
            .chars()
            .all(|ch| ch.is_ascii_hexdigit() || matches!(ch, ':' | '-' | '.' | ' ' | '\t'))
}

fn parse_copy_target(target: &str) -> Result<CopyTarget, String> {
    if let Ok(index) = target.parse::<usize>() {
        return if index == 0 {
            Err("entries are numbered from 1".to_string())
        } else {
            Ok(CopyTarget::Index(index))
        };
    }
    target
        .parse::<MacFormat>()
        .map(CopyTarget::Format)
        .map_err(|error| error.to_string())
}

/// Run the prompt loop until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<R: BufRead, W: Write>(
    mut reader: R,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
    flash: Duration,
) -> Result<()> {
    let mut session = NormalizerSession::new().with_flash(flash);
    writeln!(out, "{HELP}")?;
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        line.clear();
        if reader.read_line(&mut line).context("read prompt input")? == 0 {
            writeln!(out)?;
            break;
        }
        let typed = line.trim_end_matches(['\r', '\n']);
        let command = match parse_line(typed) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        match command {
            SessionCommand::Input(raw) => {
                debug!(input = redact_value(&raw), "prompt input");
                session.set_input(raw);
                render(out, &session, Instant::now())?;
            }
            SessionCommand::Copy(target) => {
                let Some(format) = resolve_target(&session, target) else {
                    writeln!(out, "nothing to copy")?;
                    continue;
                };
                let now = Instant::now();
                match session.copy(format, clipboard, now) {
                    CopyOutcome::Copied(value) => {
                        render(out, &session, now)?;
                        writeln!(out, "copied {format}: {value}")?;
                    }
                    CopyOutcome::Failed => render(out, &session, now)?,
                    CopyOutcome::Unavailable => writeln!(out, "no {format} entry to copy")?,
                }
            }
            SessionCommand::Show => render(out, &session, Instant::now())?,
            SessionCommand::Clear => {
                session.clear();
                render(out, &session, Instant::now())?;
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => break,
        }
    }
    info!(
        recomputations = session.recomputations(),
        "interactive session ended"
    );
    Ok(())
}

fn resolve_target(session: &NormalizerSession, target: CopyTarget) -> Option<MacFormat> {
    match target {
        CopyTarget::Format(format) => Some(format),
        CopyTarget::Index(index) => session
            .formats()
            .and_then(|formats| formats.nth(index - 1))
            .map(|(format, _)| format),
    }
}

fn render<W: Write>(out: &mut W, session: &NormalizerSession, now: Instant) -> Result<()> {
    writeln!(out, "[{}]", state_indicator(session.state()))?;
    match session.result() {
        Normalization::Empty => {}
        Normalization::Invalid { digits } => {
            writeln!(out, "{}", invalid_message(session.input(), *digits))?;
        }
        Normalization::Valid { formats } => {
            writeln!(out, "{}", formats_table(formats, session.just_copied(now)))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_input() {
        assert_eq!(
            parse_line("aa:bb:cc:dd:ee:ff"),
            Ok(SessionCommand::Input("aa:bb:cc:dd:ee:ff".to_string()))
        );
        assert_eq!(parse_line(""), Ok(SessionCommand::Input(String::new())));
    }

    #[test]
    fn copy_targets() {
        assert_eq!(
            parse_line(":copy dot"),
            Ok(SessionCommand::Copy(CopyTarget::Format(MacFormat::Dot)))
        );
        assert_eq!(
            parse_line("  :c 3"),
            Ok(SessionCommand::Copy(CopyTarget::Index(3)))
        );
        assert!(parse_line(":copy 0").is_err());
        assert!(parse_line(":copy").is_err());
        assert!(parse_line(":copy eui64").is_err());
    }

    #[test]
    fn other_commands() {
        assert_eq!(parse_line(":q"), Ok(SessionCommand::Quit));
        assert_eq!(parse_line(":clear"), Ok(SessionCommand::Clear));
        assert_eq!(parse_line(":show"), Ok(SessionCommand::Show));
        assert_eq!(parse_line(":?"), Ok(SessionCommand::Help));
        assert!(parse_line(":frobnicate").is_err());
    }

    #[test]
    fn leading_colon_address_is_input() {
        assert_eq!(
            parse_line(":AA:BB:CC:DD:EE:FF"),
            Ok(SessionCommand::Input(":AA:BB:CC:DD:EE:FF".to_string()))
        );
        assert_eq!(
            parse_line(" :aabb.ccdd.eeff"),
            Ok(SessionCommand::Input(" :aabb.ccdd.eeff".to_string()))
        );
        assert!(parse_line(":").is_err());
        assert!(parse_line(":::").is_err());
        assert!(parse_line(":ab:zz").is_err());
    }
}
