use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use macfmt_model::{FormattedMac, MacFormat, Normalization};
use macfmt_normalize::normalize;

use crate::logging::redact_value;
use crate::settings::{OutputStyle, Settings};
use crate::summary::{format_catalog_table, formats_table, invalid_message, render_json, render_plain};

/// Options for the `normalize` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Print only this format's value.
    pub only: Option<MacFormat>,
    pub style: OutputStyle,
}

/// Per-state counts for one `normalize` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub valid: usize,
    pub invalid: usize,
    pub empty: usize,
}

impl NormalizeSummary {
    pub fn has_errors(&self) -> bool {
        self.invalid > 0
    }
}

/// Read one input per line; line terminators are stripped.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .context("read inputs")
}

/// Normalize every input and write the results.
///
/// Formatted values go to `out`; messages for invalid inputs go to `err`.
///
/// # Errors
///
/// Returns an error only when writing fails.
pub fn run_normalize<W: Write, E: Write>(
    inputs: &[String],
    options: NormalizeOptions,
    out: &mut W,
    err: &mut E,
) -> Result<NormalizeSummary> {
    let started = Instant::now();
    let mut summary = NormalizeSummary::default();
    let headed = inputs.len() > 1 && options.only.is_none();
    for (index, raw) in inputs.iter().enumerate() {
        let span = info_span!("input", index);
        let _guard = span.enter();
        let result = normalize(raw);
        debug!(
            input = redact_value(raw),
            state = result.state().as_str(),
            "normalized"
        );
        if options.style == OutputStyle::Json && options.only.is_none() {
            writeln!(out, "{}", render_json(raw, &result)?)?;
        }
        match &result {
            Normalization::Empty => summary.empty += 1,
            Normalization::Invalid { digits } => {
                summary.invalid += 1;
                writeln!(err, "error: {}", invalid_message(raw, *digits))?;
            }
            Normalization::Valid { formats } => {
                summary.valid += 1;
                if let Some(format) = options.only {
                    writeln!(out, "{}", single_value(formats, format))?;
                } else if options.style != OutputStyle::Json {
                    if headed {
                        writeln!(out, "{}", raw.trim())?;
                    }
                    write_formats(out, formats, options.style)?;
                }
            }
        }
    }
    info!(
        valid = summary.valid,
        invalid = summary.invalid,
        empty = summary.empty,
        duration_ms = started.elapsed().as_millis(),
        "normalize complete"
    );
    Ok(summary)
}

/// Value of one format; plain forms missing from the set are rendered from
/// the address so `--only upper` works for any valid input.
fn single_value(formats: &FormattedMac, format: MacFormat) -> String {
    formats
        .get(format)
        .map_or_else(|| formats.address().format(format), str::to_string)
}

fn write_formats<W: Write>(out: &mut W, formats: &FormattedMac, style: OutputStyle) -> Result<()> {
    match style {
        OutputStyle::Table => writeln!(out, "{}", formats_table(formats, None))?,
        OutputStyle::Plain => write!(out, "{}", render_plain(formats))?,
        OutputStyle::Json => {}
    }
    Ok(())
}

/// Print the catalog of supported formats.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn run_formats<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", format_catalog_table())?;
    Ok(())
}

/// Print the effective settings and their source.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn run_config<W: Write>(settings: &Settings, source: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "# {}", source.display())?;
    write!(out, "{}", settings.to_toml()?)?;
    Ok(())
}
