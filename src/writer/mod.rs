//! CSV line writer
//!
//! Every field is wrapped in double quotes and fields are joined by commas.
//! Field text is written as-is; embedded quotes, commas and newlines are not
//! escaped.

use calamine::Data;
use std::io::{self, Write};

use crate::excel::render_cell;

/// Index one past the last non-empty cell of a row (0 for an all-empty row)
fn present_len(row: &[Data]) -> usize {
    row.iter()
        .rposition(|cell| !matches!(cell, Data::Empty))
        .map_or(0, |idx| idx + 1)
}

/// Build one CSV line (without terminator) from a row of cells.
///
/// `first_col` is the sheet column of `row[0]`; a row with any value gets
/// that many leading empty fields so every line is aligned to column A.
pub fn format_line(row: &[Data], first_col: usize) -> String {
    let present = present_len(row);
    if present == 0 {
        return String::new();
    }

    let mut line = String::new();
    for _ in 0..first_col {
        line.push_str("\"\",");
    }
    for cell in &row[..present] {
        line.push('"');
        line.push_str(&render_cell(cell));
        line.push('"');
        line.push(',');
    }
    // Drop the separator after the last field
    line.pop();
    line
}

/// Write every row of a sheet as a newline-terminated line.
///
/// `origin` is the sheet position `(row, col)` of the first cell yielded by
/// `rows`. Rows above it are written as empty lines so line N of the output
/// is always sheet row N.
///
/// Returns the number of lines written.
pub fn write_rows<'a, W, I>(out: &mut W, origin: (u32, u32), rows: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a [Data]>,
{
    let (first_row, first_col) = origin;
    let mut lines = 0;
    for _ in 0..first_row {
        writeln!(out)?;
        lines += 1;
    }
    for row in rows {
        writeln!(out, "{}", format_line(row, first_col as usize))?;
        lines += 1;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_format_line_quotes_each_field() {
        assert_eq!(format_line(&[text("a"), text("b")], 0), r#""a","b""#);
    }

    #[test]
    fn test_format_line_single_field_has_no_trailing_comma() {
        assert_eq!(format_line(&[text("c")], 0), r#""c""#);
    }

    #[test]
    fn test_format_line_empty_row() {
        assert_eq!(format_line(&[], 0), "");
        assert_eq!(format_line(&[Data::Empty, Data::Empty], 0), "");
    }

    #[test]
    fn test_format_line_keeps_inner_empty_cells() {
        assert_eq!(
            format_line(&[text("a"), Data::Empty, text("c"), Data::Empty], 0),
            r#""a","","c""#
        );
    }

    #[test]
    fn test_format_line_does_not_escape() {
        assert_eq!(
            format_line(&[text(r#"say "hi", bye"#)], 0),
            r#""say "hi", bye""#
        );
    }

    #[test]
    fn test_format_line_mixed_values() {
        assert_eq!(
            format_line(&[Data::Float(1.0), Data::Int(42), Data::Bool(true)], 0),
            r#""1","42","TRUE""#
        );
    }

    #[test]
    fn test_write_rows_ragged() {
        let rows = vec![
            vec![text("a"), text("b")],
            vec![Data::Empty, Data::Empty],
            vec![text("c"), Data::Empty],
        ];

        let mut out = Vec::new();
        let lines = write_rows(&mut out, (0, 0), rows.iter().map(Vec::as_slice)).unwrap();

        assert_eq!(lines, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "\"a\",\"b\"\n\n\"c\"\n");
    }

    #[test]
    fn test_write_rows_no_rows() {
        let rows: Vec<Vec<Data>> = Vec::new();
        let mut out = Vec::new();
        assert_eq!(write_rows(&mut out, (0, 0), rows.iter().map(Vec::as_slice)).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_format_line_pads_to_column_a() {
        assert_eq!(format_line(&[text("c")], 2), r#""","","c""#);
        assert_eq!(format_line(&[Data::Empty, text("d")], 1), r#""","","d""#);
    }

    #[test]
    fn test_format_line_empty_row_is_not_padded() {
        assert_eq!(format_line(&[Data::Empty], 3), "");
    }

    #[test]
    fn test_write_rows_offset_origin() {
        let rows = vec![vec![text("x")], vec![Data::Empty], vec![text("y")]];

        let mut out = Vec::new();
        let lines = write_rows(&mut out, (1, 1), rows.iter().map(Vec::as_slice)).unwrap();

        assert_eq!(lines, 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n\"\",\"x\"\n\n\"\",\"y\"\n"
        );
    }
}
