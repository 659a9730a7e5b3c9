// src/csv.rs
use std::io::{self, Write};

use crate::core::Cell;

/* ---------------- Parsing ---------------- */

/// CSV/TSV text into string rows. Quoted fields, CRLF and ragged rows are
/// accepted. Blank lines are kept as empty rows so row numbers match the
/// spreadsheet; the reader skips them, so they are counted back from the
/// gap between one record's last byte and the next record's first.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let bytes = text.as_bytes();
    let mut rdr = ::csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(sep))
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let is_eol = |b: &u8| *b == b'\r' || *b == b'\n';
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut record = ::csv::StringRecord::new();
    let mut consumed = 0usize;
    let mut content_end: Option<usize> = None;

    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                logw!("CSV: skipping unreadable record: {}", e);
                consumed = (rdr.position().byte() as usize).clamp(consumed, bytes.len());
                continue;
            }
        }
        let end = (rdr.position().byte() as usize).clamp(consumed, bytes.len());
        let start = bytes[consumed..end]
            .iter()
            .position(|b| !is_eol(b))
            .map_or(end, |o| consumed + o);

        // one newline terminates the previous record; the rest are blank lines
        let gap = bytes[content_end.unwrap_or(0).min(start)..start]
            .iter()
            .filter(|b| **b == b'\n')
            .count();
        let blanks = if content_end.is_some() { gap.saturating_sub(1) } else { gap };
        rows.extend((0..blanks).map(|_| Vec::new()));

        rows.push(trim_blank_row(record.iter().map(|f| s!(f)).collect()));
        content_end = Some(
            bytes[start..end]
                .iter()
                .rposition(|b| !is_eol(b))
                .map_or(start, |o| start + o + 1),
        );
        consumed = end;
    }

    rows
}

fn delimiter_byte(sep: char) -> u8 {
    if sep.is_ascii() { sep as u8 } else { b',' }
}

fn trim_blank_row(row: Vec<String>) -> Vec<String> {
    if row.iter().all(|f| f.trim().is_empty()) { Vec::new() } else { row }
}

/// Same grid as `parse_rows`, as sheet cells.
pub fn parse_cells(text: &str, sep: char) -> Vec<Vec<Cell>> {
    parse_rows(text, sep)
        .into_iter()
        .map(|r| r.into_iter().map(Cell::from).collect())
        .collect()
}

/// Pick the separator from the first lines: tab, then ';', else ','.
/// Spreadsheets saved with a pt-BR locale use ';' since ',' is the decimal mark.
pub fn detect_delimiter(text: &str) -> char {
    const SAMPLE_LINES: usize = 20;
    let (mut tabs, mut semis, mut commas) = (0usize, 0usize, 0usize);
    for line in text.lines().filter(|l| !l.trim().is_empty()).take(SAMPLE_LINES) {
        for c in line.chars() {
            match c {
                '\t' => tabs += 1,
                ';' => semis += 1,
                ',' => commas += 1,
                _ => {}
            }
        }
    }

    if tabs > 0 && tabs >= semis && tabs >= commas {
        '\t'
    } else if semis > 0 && semis >= commas {
        ';'
    } else {
        ','
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full export text (Copy/Export).
pub fn to_export_string(
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
