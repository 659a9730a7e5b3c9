// src/gui/pages/alarms.rs
use crate::{config::options::PageKind, summary::Metric};

pub struct AlarmsPage;
pub static PAGE: AlarmsPage = AlarmsPage;

impl super::Page for AlarmsPage {
    fn title(&self) -> &'static str { "🚨 Alarmes" }
    fn kind(&self) -> PageKind { PageKind::Alarms }
    fn metrics(&self) -> &'static [Metric] { &[Metric::Alarms] }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[260.0, 70.0, 70.0, 80.0, 140.0])
    }
}
