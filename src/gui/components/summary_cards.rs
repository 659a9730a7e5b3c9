// src/gui/components/summary_cards.rs
//
// One row of cards per metric the page shows, over the current search.

use eframe::egui::{self, RichText};
use crate::gui::app::App;
use crate::summary::{self, Metric, Summary};

use super::data_table::status_color;

const CARD_W: f32 = 120.0;

fn card(ui: &mut egui::Ui, label: &str, value: String, color: Option<egui::Color32>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(CARD_W);
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small().weak());
            let mut rt = RichText::new(value).size(20.0).strong();
            if let Some(c) = color { rt = rt.color(c); }
            ui.label(rt);
        });
    });
}

fn metric_row(ui: &mut egui::Ui, metric: Metric, s: &Summary) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(metric.title()).strong());
        card(ui, "Locais", s.sites.to_string(), None);
        card(ui, "Total", s.total.to_string(), None);
        card(ui, "Online", format!("{} ({:.1}%)", s.online, s.online_percent()), Some(status_color("OK")));
        card(ui, "Offline", s.offline.to_string(), (s.offline > 0).then(|| status_color("OFFLINE")));
        card(ui, "Locais offline", s.offline_sites.to_string(), None);
        card(ui, "Atenção", s.needs_attention.to_string(), (s.needs_attention > 0).then(|| status_color("MISSING")));
    });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(raw) = &app.raw else { return };
    let page = app.current_page();
    let query = app.state.gui.query();

    for &metric in page.metrics() {
        let s = raw.summarize(metric, query);
        metric_row(ui, metric, &s);

        if page.show_breakdown() {
            ui.horizontal_wrapped(|ui| {
                for (group, n) in summary::status_breakdown(raw.records(), metric, query) {
                    if n == 0 { continue; }
                    ui.label(RichText::new(format!("{group}: {n}")).color(status_color(group)));
                }
            });
        }
    }
}
