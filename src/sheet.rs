// src/sheet.rs
//
// RawSheet: the untyped grid handed from ingestion to the normalizer.

use crate::core::{Cell, CellRef, Col};

static EMPTY: Cell = Cell::Empty;

/// Ordered 2D grid of cells, no header assumed. Rows may be ragged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawSheet {
    pub rows: Vec<Vec<Cell>>,
}

impl RawSheet {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Missing cells read as `Empty`.
    pub fn cell(&self, at: CellRef) -> &Cell {
        self.rows.get(at.row).map(|r| cell_at(r, Col(at.col))).unwrap_or(&EMPTY)
    }
}

/// Cell of one row by column; `Empty` past the end.
pub fn cell_at(row: &[Cell], col: Col) -> &Cell {
    row.get(col.0).unwrap_or(&EMPTY)
}

/// Same, for optional layout columns.
pub fn opt_cell_at(row: &[Cell], col: Option<Col>) -> &Cell {
    col.map(|c| cell_at(row, c)).unwrap_or(&EMPTY)
}
