// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// Tabs only change the projection; the loaded records and the search view stay.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page_kind();
                app.set_current_index(idx);
                logf!("UI: Tab switch {:?} → {:?}", prev, page.kind());
            }
        }
    });
}
