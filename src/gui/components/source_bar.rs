// src/gui/components/source_bar.rs
use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Planilha:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.source_text)
                .hint_text("dados.xlsx ou link")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if submitted || ui.button("Carregar").clicked() {
            logf!("UI: Load clicked");
            actions::load(app);
        }
        if ui.button("⟳ Recarregar").on_hover_text("Ler a planilha novamente").clicked() {
            logf!("UI: Reload clicked");
            actions::reload(app);
        }
    });
}
