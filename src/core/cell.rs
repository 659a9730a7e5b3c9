// src/core/cell.rs
//! Untyped sheet cells and the lenient coercions run on them.
//!
//! Nothing here fails. A cell that can't be read as a number is zero;
//! the sheet is maintained by hand and is expected to be irregular.

use std::fmt;

use crate::config::consts::ZERO_TOKENS;

/// One cell as ingestion hands it over.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Number(_) => false,
            Cell::Text(s) => s.trim().is_empty(),
        }
    }

    /// Display text, whitespace-normalized. Whole numbers print without ".0".
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => s!(),
            Cell::Number(n) => fmt_number(*n),
            Cell::Text(s) => super::sanitize::normalize_ws(s),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.trim().is_empty() { Cell::Empty } else { Cell::Text(s!(s)) }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        if s.trim().is_empty() { Cell::Empty } else { Cell::Text(s) }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self { Cell::Number(n) }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self { Cell::Number(n as f64) }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self { Cell::Number(n as f64) }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self { Cell::Number(n as f64) }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self { Cell::Number(if b { 1.0 } else { 0.0 }) }
}

fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Case-insensitive match against the "means zero" tokens (OFFLINE, SEM ALARME, ...).
pub fn is_zero_token(s: &str) -> bool {
    let u = super::sanitize::normalize_ws(s).to_uppercase();
    ZERO_TOKENS.iter().any(|t| u == *t)
}

/// Strict numeric read: `None` for blanks, tokens and anything unparseable.
/// Decimal commas are accepted.
pub fn parse_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Empty => None,
        Cell::Number(n) => n.is_finite().then_some(*n),
        Cell::Text(s) => parse_number_str(s),
    }
}

fn parse_number_str(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() || is_zero_token(t) { return None; }
    let v: f64 = t.replace(',', ".").parse().ok()?;
    v.is_finite().then_some(v)
}

pub fn coerce_float(cell: &Cell) -> f64 {
    parse_number(cell).unwrap_or(0.0)
}

/// Integer read, truncating fractions. Never fails.
pub fn coerce_int(cell: &Cell) -> i64 {
    coerce_float(cell).trunc() as i64
}

/// Device count: like `coerce_int`, clamped to `0..=u32::MAX`.
pub fn coerce_count(cell: &Cell) -> u32 {
    coerce_float(cell).max(0.0).trunc() as u32
}

/// Percentage read: "75%", "75,5 %", "0.75", or a numeric cell.
/// Without a '%' sign, values up to 1 are fractions. Clamped to 0..=100.
pub fn parse_percent(cell: &Cell) -> Option<f64> {
    let v = match cell {
        Cell::Empty => return None,
        Cell::Number(n) if n.is_finite() => {
            if *n <= 1.0 { n * 100.0 } else { *n }
        }
        Cell::Number(_) => return None,
        Cell::Text(s) => {
            let t = s.trim();
            let has_pct = t.ends_with('%');
            let v = parse_number_str(t.trim_end_matches('%'))?;
            if !has_pct && v <= 1.0 { v * 100.0 } else { v }
        }
    };
    Some(round2(v.clamp(0.0, 100.0)))
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
