//! Rendering of normalization results for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use macfmt_model::{FormattedMac, MacAddress, MacFormat, Normalization, ValidationState};

/// Address used to illustrate each format.
pub const EXAMPLE_ADDRESS: MacAddress = MacAddress::new([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]);

/// Marker shown next to an entry that was just copied.
pub const COPIED_MARKER: &str = "✓";

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: &'a Normalization,
}

/// Table of formatted values, one row per format in display order.
pub fn formats_table(formats: &FormattedMac, copied: Option<MacFormat>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Format"),
        header_cell("Value"),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, (format, value)) in formats.iter().enumerate() {
        let marker = if copied == Some(format) {
            Cell::new(COPIED_MARKER)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(format.as_str()).fg(Color::Blue),
            Cell::new(value).add_attribute(Attribute::Bold),
            marker,
        ]);
    }
    table
}

/// Table describing every supported format with an example value.
pub fn format_catalog_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Description"),
        header_cell("Example"),
    ]);
    apply_table_style(&mut table);
    for format in MacFormat::ALL {
        table.add_row(vec![
            Cell::new(format.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(format.description()),
            Cell::new(EXAMPLE_ADDRESS.format(format)),
        ]);
    }
    table
}

/// `name value` lines, one per format.
pub fn render_plain(formats: &FormattedMac) -> String {
    let width = formats
        .formats()
        .map(|format| format.as_str().len())
        .max()
        .unwrap_or(0);
    formats
        .iter()
        .map(|(format, value)| format!("{:<width$}  {value}\n", format.as_str()))
        .collect()
}

/// JSON object describing one input and its result.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(raw: &str, result: &Normalization) -> serde_json::Result<String> {
    serde_json::to_string(&Report { input: raw, result })
}

/// Tri-state indicator for the interactive prompt.
pub fn state_indicator(state: ValidationState) -> &'static str {
    match state {
        ValidationState::Empty => "·",
        ValidationState::Invalid => "✗ invalid",
        ValidationState::Valid => "✓ valid",
    }
}

/// Inline message for input that does not hold a MAC address.
pub fn invalid_message(raw: &str, digits: usize) -> String {
    format!("invalid MAC address {raw:?}: expected 12 hex digits, found {digits}")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_is_distinct_per_state() {
        assert_ne!(
            state_indicator(ValidationState::Empty),
            state_indicator(ValidationState::Invalid)
        );
        assert!(state_indicator(ValidationState::Valid).contains("valid"));
    }

    #[test]
    fn invalid_message_quotes_input() {
        assert_eq!(
            invalid_message("AA:BB", 4),
            "invalid MAC address \"AA:BB\": expected 12 hex digits, found 4"
        );
    }

    #[test]
    fn table_marks_copied_row() {
        let formats = FormattedMac::new(EXAMPLE_ADDRESS, false);
        let mut table = formats_table(&formats, Some(MacFormat::Dot));
        table.force_no_tty();
        let rendered = table.to_string();
        let dot_line = rendered
            .lines()
            .find(|line| line.contains("001A.2B3C.4D5E"))
            .expect("dot row");
        assert!(dot_line.contains(COPIED_MARKER));
        let colon_line = rendered
            .lines()
            .find(|line| line.contains("00:1A:2B:3C:4D:5E"))
            .expect("colon row");
        assert!(!colon_line.contains(COPIED_MARKER));
    }
}
