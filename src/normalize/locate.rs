// src/normalize/locate.rs
//
// Where does the table start? The sheet is hand-kept: title rows, blank
// spacer rows and a "last updated" line usually sit above the column titles.
//
// Precedence:
//   1. a header row (enough cells carrying known column titles, no numbers
//      in the count columns): data starts below it, or below the last of
//      several stacked header rows;
//   2. the first row that already looks like data (textual name + a numeric
//      count column);
//   3. the configured fallback row, with a warning. Columns may be
//      mis-aligned at that point, so it is never silent.

use crate::config::options::{ColumnLayout, LocatorOptions, RecordRules};
use crate::core::cell::{parse_number, Cell};
use crate::core::sanitize::upper_ws;
use crate::sheet::cell_at;

use super::records::is_excluded_name;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Header,
    Heuristic,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataStart {
    pub row: usize,
    pub strategy: Strategy,
}

pub fn locate_data_start(
    rows: &[Vec<Cell>],
    layout: &ColumnLayout,
    opts: &LocatorOptions,
    rules: &RecordRules,
) -> usize {
    locate(rows, layout, opts, rules).row
}

pub fn locate(
    rows: &[Vec<Cell>],
    layout: &ColumnLayout,
    opts: &LocatorOptions,
    rules: &RecordRules,
) -> DataStart {
    let scan = &rows[..rows.len().min(opts.max_scan_rows)];

    let phrases: Vec<String> = opts
        .header_phrases
        .iter()
        .map(|p| upper_ws(p))
        .filter(|p| !p.is_empty())
        .collect();
    let min_hits = opts.min_header_hits.max(1);

    if let Some(first) = scan.iter().position(|r| is_header_row(r, layout, &phrases, min_hits)) {
        // grouped headers ("CÂMERAS" / "ALARMES" over "LOCAL | TOTAL | ONLINE"):
        // data starts below the last header row of the block
        let last = rows[first..]
            .iter()
            .take_while(|r| is_header_row(r, layout, &phrases, min_hits))
            .count()
            + first
            - 1;
        logd!("Locate: header row(s) {}..={}", first, last);
        return DataStart { row: last + 1, strategy: Strategy::Header };
    }

    if let Some(ix) = scan.iter().position(|r| looks_like_data(r, layout, rules)) {
        logd!("Locate: no header; first data-like row at {}", ix);
        return DataStart { row: ix, strategy: Strategy::Heuristic };
    }

    logw!(
        "Locate: no header or data-like row in the first {} rows; falling back to row {} (columns may be mis-aligned)",
        scan.len(),
        opts.fallback_row
    );
    DataStart { row: opts.fallback_row, strategy: Strategy::Fallback }
}

fn has_numeric_count(row: &[Cell], layout: &ColumnLayout) -> bool {
    layout.count_columns().iter().any(|&c| parse_number(cell_at(row, c)).is_some())
}

fn is_header_row(row: &[Cell], layout: &ColumnLayout, phrases: &[String], min_hits: usize) -> bool {
    if has_numeric_count(row, layout) { return false; }

    let hits = row
        .iter()
        .filter(|c| matches!(c, Cell::Text(_)))
        .filter(|c| {
            let u = upper_ws(&c.as_text());
            phrases.iter().any(|p| u.contains(p.as_str()))
        })
        .count();

    hits >= min_hits
}

fn looks_like_data(row: &[Cell], layout: &ColumnLayout, rules: &RecordRules) -> bool {
    let name = cell_at(row, layout.name);
    if name.is_blank() || parse_number(name).is_some() { return false; }
    if is_excluded_name(&name.as_text(), rules) { return false; }
    has_numeric_count(row, layout)
}
