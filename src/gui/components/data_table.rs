// src/gui/components/data_table.rs
//
// Draws the live table for the current tab over the search view.
// Purely a view; the projection comes from crate::table.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::table;

/// Label colour: OK green, EXCESS blue, MISSING/PARTIAL amber, OFFLINE red, no devices grey.
pub fn status_color(label: &str) -> Color32 {
    let u = label.to_ascii_uppercase();
    if u == "OK" || u == "100%" {
        Color32::from_rgb(0x3C, 0xB4, 0x4B)
    } else if u.starts_with("EXCESS") {
        Color32::from_rgb(0x64, 0xB4, 0xFF)
    } else if u.starts_with("MISSING") || u.starts_with("PARTIAL") {
        Color32::from_rgb(0xF0, 0xB4, 0x3C)
    } else if u == "OFFLINE" {
        Color32::from_rgb(0xDC, 0x3C, 0x3C)
    } else {
        Color32::GRAY
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let kind = page.kind();

    let Some(view) = app.view() else { return };
    if view.is_empty() {
        ui.label("Nenhum local corresponde à busca.");
        return;
    }

    let headers = table::headers(kind);
    let status_cols = table::status_columns(kind);
    let text_cols = table::text_columns(kind);
    let widths = page.preferred_column_widths().unwrap_or(&[]);

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("table_state", kind));
    for ci in 0..headers.len() {
        let w = widths.get(ci).copied().unwrap_or(100.0);
        builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    let cell = |ui: &mut egui::Ui, ci: usize, rt: RichText| {
        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
        if text_cols.contains(&ci) {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
        } else {
            ui.centered_and_justified(|ui| { ui.label(rt); });
        }
    };

    builder
        .header(24.0, |mut header| {
            for (ci, h) in headers.iter().enumerate() {
                header.col(|ui| cell(ui, ci, RichText::new(*h).strong()));
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(rec) = view.record(row.index()) else { return };
                for (ci, text) in table::row(kind, rec).into_iter().enumerate() {
                    let mut rt = RichText::new(text.as_str());
                    if status_cols.contains(&ci) {
                        rt = rt.color(status_color(&text)).strong();
                    }
                    row.col(|ui| cell(ui, ci, rt));
                }
            });
        });
}
