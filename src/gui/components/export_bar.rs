// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    gui::{actions, app::App},
    config::options::ExportFormat,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_page_kind();

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        // --- Format + toggles ---
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
        if ui.checkbox(&mut export.filtered_only, "Only search results").changed() {
            logf!("UI: Filtered_only → {}", export.filtered_only);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .on_hover_text(format!(
                "Tab name is appended: {}",
                app.state.options.export.out_path_for(kind).display()
            ))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });
}
