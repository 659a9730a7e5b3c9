// src/gui/components/search_bar.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("🔎");
        let changed = ui
            .add(
                egui::TextEdit::singleline(&mut app.state.gui.search)
                    .hint_text("Buscar local")
                    .desired_width(260.0),
            )
            .changed();

        if !app.state.gui.search.is_empty() && ui.small_button("✖").clicked() {
            app.state.gui.search.clear();
            app.rebuild_view();
            logd!("UI: Search cleared");
        } else if changed {
            app.rebuild_view();
            logd!("UI: Search → {:?} ({} row(s))", app.state.gui.search, app.row_ix.len());
        }

        if let Some(raw) = &app.raw {
            ui.label(format!("{} de {} locais", app.row_ix.len(), raw.records().len()));
        }
    });
}
