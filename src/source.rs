// src/source.rs
//
// Where the sheet comes from and how it becomes a RawSheet.
//
//   SheetSource::Path ─ extension ─▶ calamine workbook | CSV text
//   SheetSource::Url  ─ GET ─ sniff bytes ─▶ calamine workbook | CSV text
//
// Everything below the grid (numbers, statuses) is the normalizer's job.

use std::fmt;
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};
use std::time::Duration;

use encoding_rs::WINDOWS_1252;
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use crate::config::options::SourceOptions;
use crate::core::net::http_get_bytes;
use crate::core::Cell;
use crate::csv;
use crate::error::SourceError;
use crate::sheet::RawSheet;

const WORKBOOK_EXTS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
const TEXT_EXTS: &[&str] = &["csv", "tsv", "txt"];

const DATE_FMT: &str = "%d/%m/%Y %H:%M";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SheetSource {
    Path(PathBuf),
    Url(String),
}

impl SheetSource {
    /// `http(s)://` → URL, anything else → local path. Blank → `NoSource`.
    pub fn parse(text: &str) -> Result<Self, SourceError> {
        let t = text.trim();
        if t.is_empty() {
            return Err(SourceError::NoSource);
        }
        let lower = t.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(SheetSource::Url(google_export_url(t).unwrap_or_else(|| s!(t))))
        } else {
            Ok(SheetSource::Path(PathBuf::from(t)))
        }
    }

    /// Cache key.
    pub fn key(&self) -> String {
        match self {
            SheetSource::Path(p) => p.to_string_lossy().into_owned(),
            SheetSource::Url(u) => u.clone(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SheetSource::Url(_))
    }
}

impl fmt::Display for SheetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSource::Path(p) => write!(f, "{}", p.display()),
            SheetSource::Url(u) => f.write_str(u),
        }
    }
}

/// Google Sheets share links ("/spreadsheets/d/<id>/edit#gid=0") point at the
/// editor page; the workbook itself lives at ".../export?format=xlsx".
/// Returns `None` for anything that isn't such a link.
pub fn google_export_url(url: &str) -> Option<String> {
    const MARK: &str = "docs.google.com/spreadsheets/d/";
    let at = url.find(MARK)?;
    let rest = &url[at + MARK.len()..];
    let id: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if id.is_empty() { return None; }

    let tail = &rest[id.len()..];
    if tail.starts_with("/export") { return None; }

    let scheme = &url[..at];
    Some(join!(scheme, MARK, &id, "/export?format=xlsx"))
}

/* ---------------- Loading ---------------- */

/// Read the configured sheet from `source`.
pub fn load_sheet(source: &SheetSource, opts: &SourceOptions) -> Result<RawSheet, SourceError> {
    let sheet = match source {
        SheetSource::Path(path) => load_path(path, opts.sheet.as_deref())?,
        SheetSource::Url(url) => {
            let bytes = http_get_bytes(url, Duration::from_secs(opts.timeout_secs.max(1)))?;
            load_bytes(bytes, url, opts.sheet.as_deref())?
        }
    };
    logf!("Source: {} row(s) from {}", sheet.row_count(), source);
    Ok(sheet)
}

fn load_path(path: &Path, sheet: Option<&str>) -> Result<RawSheet, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    if WORKBOOK_EXTS.contains(&ext.as_str()) {
        let origin = path.display().to_string();
        let wb = open_workbook_auto(path).map_err(|err| SourceError::Workbook { origin, err })?;
        read_workbook(wb, sheet)
    } else if TEXT_EXTS.contains(&ext.as_str()) {
        let bytes = fs::read(path).map_err(|err| SourceError::Io { path: path.to_path_buf(), err })?;
        Ok(read_text(&bytes))
    } else {
        Err(SourceError::Unsupported(ext))
    }
}

/// Downloaded body: zip (xlsx/ods) or OLE (xls) → workbook, else CSV text.
pub fn load_bytes(bytes: Vec<u8>, origin: &str, sheet: Option<&str>) -> Result<RawSheet, SourceError> {
    if is_workbook_bytes(&bytes) {
        let wb = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|err| SourceError::Workbook { origin: s!(origin), err })?;
        read_workbook(wb, sheet)
    } else {
        Ok(read_text(&bytes))
    }
}

fn is_workbook_bytes(bytes: &[u8]) -> bool {
    const ZIP: &[u8] = b"PK\x03\x04";
    const OLE: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    bytes.starts_with(ZIP) || bytes.starts_with(OLE)
}

/// CSV/TSV bytes. UTF-8 first; Windows pt-BR exports are CP-1252.
pub fn read_text(bytes: &[u8]) -> RawSheet {
    let text = match std::str::from_utf8(bytes) {
        Ok(t) => s!(t),
        Err(_) => {
            logd!("Source: text is not UTF-8, decoding as windows-1252");
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    };
    let sep = csv::detect_delimiter(&text);
    logd!("Source: text sheet, delimiter {:?}", sep);
    RawSheet::new(csv::parse_cells(&text, sep))
}

fn read_workbook<RS>(mut wb: Sheets<RS>, sheet: Option<&str>) -> Result<RawSheet, SourceError>
where
    RS: Read + Seek,
{
    let range = match sheet {
        Some(name) => {
            if !wb.sheet_names().iter().any(|n| n == name) {
                return Err(SourceError::MissingSheet(s!(name)));
            }
            wb.worksheet_range(name)
                .map_err(|err| SourceError::Workbook { origin: s!(name), err })?
        }
        None => wb
            .worksheet_range_at(0)
            .ok_or(SourceError::NoWorksheets)?
            .map_err(|err| SourceError::Workbook { origin: s!("sheet 1"), err })?,
    };
    Ok(range_to_sheet(&range))
}

/// calamine ranges start at the first used cell; pad so row/column indices
/// match the spreadsheet's A1 grid.
fn range_to_sheet(range: &Range<Data>) -> RawSheet {
    let (row0, col0) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row0];
    for r in range.rows() {
        let mut out = vec![Cell::Empty; col0];
        out.extend(r.iter().map(data_to_cell));
        while matches!(out.last(), Some(Cell::Empty)) {
            out.pop();
        }
        rows.push(out);
    }
    RawSheet::new(rows)
}

fn data_to_cell(d: &Data) -> Cell {
    match d {
        Data::Empty => Cell::Empty,
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Float(n) => Cell::Number(*n),
        Data::Bool(b) => Cell::from(*b),
        Data::String(s) => Cell::from(s.as_str()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => Cell::Text(ndt.format(DATE_FMT).to_string()),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::from(s.as_str()),
        Data::Error(_) => Cell::Empty,
    }
}
