// src/gui/pages/mod.rs
use crate::config::options::PageKind;
use crate::summary::Metric;

pub mod alarms;
pub mod cameras;
pub mod overview;

/// One dashboard tab. Pages are static descriptions; the data itself lives in App.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Which summary cards the page shows.
    fn metrics(&self) -> &'static [Metric];

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }

    /// Per-status site counts under the cards.
    fn show_breakdown(&self) -> bool { false }
}
