// src/gui/components/header.rs
//
// Logo, title and the "Atualizado em" line.

use eframe::egui::{self, RichText};
use crate::gui::app::App;

const LOGO_H: f32 = 48.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if let Some(tex) = &app.logo {
            let [w, h] = tex.size();
            let scale = LOGO_H / h.max(1) as f32;
            let size = egui::vec2(w as f32 * scale, LOGO_H);
            ui.add(egui::Image::new(egui::load::SizedTexture::new(tex.id(), size)));
        }

        ui.vertical(|ui| {
            ui.heading(RichText::new(&app.state.options.gui.title).strong());
            if let Some(raw) = &app.raw {
                ui.label(RichText::new(format!("Atualizado em {}", raw.updated_label())).weak());
            }
        });
    });
}
