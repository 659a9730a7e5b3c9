// src/normalize/mod.rs
//! # Site status normalizer
//!
//! Turns a [`RawSheet`] into typed [`SiteRecord`]s.
//!
//! ## Pipeline
//! ```text
//! RawSheet ─ locate::locate ─▶ DataStart ─ records::build_records ─▶ Vec<SiteRecord>
//! ```
//! plus the optional "last updated" cell, read as plain text.
//!
//! ## Conventions & invariants
//! - **Pure**: same sheet + same options → identical output. No I/O, no clock.
//! - **Lenient**: cell problems degrade to zero / derived labels, never errors.
//! - **Explicit wins**: recognised status text beats counts for cameras; a
//!   parseable percentage beats counts for alarms.
//! - The only diagnostic is the locator's fallback warning.

pub mod locate;
pub mod records;
pub mod status;

pub use locate::{DataStart, Strategy, locate_data_start};
pub use records::{SiteRecord, build_records};
pub use status::{AlarmStatus, CameraStatus};

use crate::config::consts::UPDATED_MARKER;
use crate::config::options::SheetOptions;
use crate::core::Cell;
use crate::sheet::RawSheet;

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedSheet {
    pub records: Vec<SiteRecord>,
    pub data_start: DataStart,
    pub updated_at: Option<String>,
}

impl NormalizedSheet {
    /// User-facing note when the table start was guessed.
    pub fn layout_warning(&self) -> Option<String> {
        (self.data_start.strategy == Strategy::Fallback).then(|| {
            format!(
                "No header row found; reading sites from row {} (columns may be mis-aligned)",
                self.data_start.row + 1
            )
        })
    }
}

/// Full pass over one sheet.
pub fn normalize(sheet: &RawSheet, opts: &SheetOptions) -> NormalizedSheet {
    let data_start = locate::locate(&sheet.rows, &opts.layout, &opts.locator, &opts.records);
    let records = build_records(&sheet.rows, data_start.row, &opts.layout, &opts.records);

    let updated_at = match opts.layout.updated_at {
        Some(at) => Some(sheet.cell(at).as_text()).filter(|s| !s.is_empty()),
        None => find_updated_line(&sheet.rows[..data_start.row.min(sheet.row_count())]),
    };

    logd!(
        "Normalize: {} record(s) from {} row(s), data start {} via {:?}",
        records.len(),
        sheet.row_count(),
        data_start.row,
        data_start.strategy
    );

    NormalizedSheet { records, data_start, updated_at }
}

/// Scan the rows above the table for an "Atualizado em ..." cell.
/// Returns the text after the marker (or the next cell when the marker stands alone).
fn find_updated_line(rows: &[Vec<Cell>]) -> Option<String> {
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            let text = cell.as_text();
            let upper = text.to_uppercase();
            if !upper.starts_with(UPDATED_MARKER) { continue; }

            let rest: String = text.chars().skip(UPDATED_MARKER.chars().count()).collect();
            let sep = |c: char| c == ':' || c == '-' || c.is_whitespace();
            let rest = rest.trim_start_matches(sep);
            let rest = match rest.get(..2) {
                Some(em) if em.eq_ignore_ascii_case("em")
                    && rest[2..].chars().next().is_none_or(sep) => &rest[2..],
                _ => rest,
            };
            let rest = rest.trim_start_matches(sep).trim_end();
            if !rest.is_empty() {
                return Some(s!(rest));
            }
            return row.get(ci + 1).map(|c| c.as_text()).filter(|s| !s.is_empty());
        }
    }
    None
}

/// Records only, for callers holding bare rows.
pub fn normalize_rows(rows: &[Vec<Cell>], opts: &SheetOptions) -> Vec<SiteRecord> {
    let start = locate_data_start(rows, &opts.layout, &opts.locator, &opts.records);
    build_records(rows, start, &opts.layout, &opts.records)
}
