// src/core/a1.rs
//
// Spreadsheet-style references ("C", "B3") for the config file.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// Zero-based column index. Deserializes from a letter ("C") or an index (2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Col(pub usize);

/// Zero-based (row, col). Deserializes from A1 notation ("B3").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// "A" → 0, "Z" → 25, "AA" → 26. Case-insensitive.
pub fn column_index(letters: &str) -> Option<usize> {
    let letters = letters.trim();
    if letters.is_empty() { return None; }
    let mut n: usize = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() { return None; }
        let v = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n = n.checked_mul(26)?.checked_add(v)?;
    }
    Some(n - 1)
}

/// 0 → "A", 27 → "AB".
pub fn column_name(mut idx: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (idx % 26) as u8);
        if idx < 26 { break; }
        idx = idx / 26 - 1;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// "B3" → row 2, col 1.
pub fn parse_a1(s: &str) -> Option<CellRef> {
    let s = s.trim();
    let split = s.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = s.split_at(split);
    let col = column_index(letters)?;
    let row: usize = digits.parse().ok()?;
    if row == 0 { return None; }
    Some(CellRef { row: row - 1, col })
}

impl fmt::Display for Col {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&column_name(self.0))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_name(self.col), self.row + 1)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColRepr {
    Index(usize),
    Letters(String),
}

impl<'de> Deserialize<'de> for Col {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match ColRepr::deserialize(d)? {
            ColRepr::Index(i) => Ok(Col(i)),
            ColRepr::Letters(s) => column_index(&s)
                .map(Col)
                .ok_or_else(|| de::Error::custom(format!("invalid column reference '{s}'"))),
        }
    }
}

impl<'de> Deserialize<'de> for CellRef {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        parse_a1(&s).ok_or_else(|| de::Error::custom(format!("invalid cell reference '{s}'")))
    }
}
