// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,load,reload}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod reload;  // src/gui/actions/reload.rs

pub use copy::copy;
pub use export::export;
pub use reload::{load, reload};

use crate::{gui::app::App, table::{self, TableData}};

/// Current tab's table over the current search view.
#[inline]
pub(super) fn current_table(app: &App) -> Option<TableData> {
    let kind = app.current_page_kind();
    app.view().map(|v| table::build(kind, v.records()))
}
