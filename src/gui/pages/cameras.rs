// src/gui/pages/cameras.rs
use crate::{config::options::PageKind, summary::Metric};

pub struct CamerasPage;
pub static PAGE: CamerasPage = CamerasPage;

impl super::Page for CamerasPage {
    fn title(&self) -> &'static str { "📹 Câmeras" }
    fn kind(&self) -> PageKind { PageKind::Cameras }
    fn metrics(&self) -> &'static [Metric] { &[Metric::Cameras] }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[260.0, 70.0, 70.0, 140.0])
    }
}
