// src/table.rs
//! Per-tab table projection of site records.
//!
//! One place decides which columns each tab shows, so the GUI table, the
//! CLI printout and the export files always agree.

use crate::config::options::PageKind;
use crate::normalize::SiteRecord;

/// Headers + string rows for one tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn ncols(&self) -> usize { self.headers.len() }
    pub fn nrows(&self) -> usize { self.rows.len() }
}

pub fn headers(kind: PageKind) -> &'static [&'static str] {
    match kind {
        PageKind::Cameras => &["Local", "Total", "Online", "Status"],
        PageKind::Alarms => &["Local", "Total", "Online", "%", "Status"],
        PageKind::Overview => {
            &["Local", "Apelido", "Câmeras", "Status câmeras", "Alarmes", "Status alarmes"]
        }
    }
}

/// Columns holding a status label, for colouring.
pub fn status_columns(kind: PageKind) -> &'static [usize] {
    match kind {
        PageKind::Cameras => &[3],
        PageKind::Alarms => &[4],
        PageKind::Overview => &[3, 5],
    }
}

/// Columns drawn left-aligned; the rest are centered.
pub fn text_columns(kind: PageKind) -> &'static [usize] {
    match kind {
        PageKind::Overview => &[0, 1],
        _ => &[0],
    }
}

/// "75%", "66.67%".
pub fn fmt_percent(p: f64) -> String {
    if p.fract() == 0.0 { format!("{}%", p as i64) } else { format!("{:.2}%", p) }
}

pub fn row(kind: PageKind, r: &SiteRecord) -> Vec<String> {
    match kind {
        PageKind::Cameras => vec![
            r.name.clone(),
            r.camera_total.to_string(),
            r.camera_online.to_string(),
            r.camera_status_label(),
        ],
        PageKind::Alarms => vec![
            r.name.clone(),
            r.alarm_total.to_string(),
            r.alarm_online.to_string(),
            fmt_percent(r.alarm_percent),
            s!(r.alarm_status_label()),
        ],
        PageKind::Overview => vec![
            r.name.clone(),
            r.alias.clone().unwrap_or_default(),
            format!("{}/{}", r.camera_online, r.camera_total),
            r.camera_status_label(),
            format!("{}/{}", r.alarm_online, r.alarm_total),
            s!(r.alarm_status_label()),
        ],
    }
}

pub fn build<'a, I>(kind: PageKind, records: I) -> TableData
where
    I: IntoIterator<Item = &'a SiteRecord>,
{
    TableData {
        headers: headers(kind).iter().map(|h| s!(*h)).collect(),
        rows: records.into_iter().map(|r| row(kind, r)).collect(),
    }
}
