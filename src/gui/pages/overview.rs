// src/gui/pages/overview.rs
use crate::{config::options::PageKind, summary::Metric};

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

impl super::Page for OverviewPage {
    fn title(&self) -> &'static str { "📊 Geral" }
    fn kind(&self) -> PageKind { PageKind::Overview }
    fn metrics(&self) -> &'static [Metric] { &[Metric::Cameras, Metric::Alarms] }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[220.0, 140.0, 80.0, 120.0, 80.0, 130.0])
    }

    fn show_breakdown(&self) -> bool { true }
}
