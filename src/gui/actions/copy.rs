// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let Some(data) = super::current_table(app) else {
        app.status("Nothing to copy (no data loaded)");
        return;
    };

    logf!("Copy: page={:?}, rows={}", app.current_page_kind(), data.nrows());
    let txt = file::to_export_string(&app.state.options.export, &data);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", data.nrows()));
}
