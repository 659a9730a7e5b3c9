// src/normalize/records.rs
use crate::config::options::{ColumnLayout, RecordRules};
use crate::core::cell::{self, Cell};
use crate::core::sanitize::upper_ws;
use crate::sheet::{cell_at, opt_cell_at};

use super::status::{AlarmStatus, CameraStatus};

/// One normalized site row. Built fresh on every ingestion; never mutated after.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteRecord {
    pub name: String,
    pub alias: Option<String>,
    pub camera_total: u32,
    pub camera_online: u32,
    pub camera_status: CameraStatus,
    pub alarm_total: u32,
    pub alarm_online: u32,
    pub alarm_percent: f64,
    pub alarm_status: AlarmStatus,
}

impl SiteRecord {
    pub fn camera_status_label(&self) -> String {
        self.camera_status.to_string()
    }

    pub fn alarm_status_label(&self) -> &'static str {
        self.alarm_status.label()
    }

    /// Cameras not online; excess counts as zero.
    pub fn cameras_offline(&self) -> u32 {
        self.camera_total.saturating_sub(self.camera_online)
    }

    pub fn alarms_offline(&self) -> u32 {
        self.alarm_total.saturating_sub(self.alarm_online)
    }
}

/// Name cells of summary/footer rows ("TOTAL", "RELATÓRIO", ...).
pub fn is_excluded_name(name: &str, rules: &RecordRules) -> bool {
    let u = upper_ws(name);
    rules.exclude_keywords.iter().any(|k| {
        let k = upper_ws(k);
        !k.is_empty() && u.contains(&k)
    })
}

/// `100 * online / total` rounded to 2 places, capped at 100; 0 without panels.
pub fn alarm_percent(total: u32, online: u32) -> f64 {
    if total == 0 { return 0.0; }
    cell::round2((100.0 * online as f64 / total as f64).min(100.0))
}

/// Build one record; `None` for blank-name and excluded rows.
pub fn build_record(row: &[Cell], layout: &ColumnLayout, rules: &RecordRules) -> Option<SiteRecord> {
    let name = cell_at(row, layout.name).as_text();
    if name.is_empty() || is_excluded_name(&name, rules) {
        return None;
    }

    let alias = Some(opt_cell_at(row, layout.alias).as_text()).filter(|a| !a.is_empty());

    let camera_total = cell::coerce_count(cell_at(row, layout.camera_total));
    let camera_online = cell::coerce_count(cell_at(row, layout.camera_online));
    let camera_text = opt_cell_at(row, layout.camera_status).as_text();
    let camera_status = CameraStatus::from_text(&camera_text, camera_total, camera_online)
        .unwrap_or_else(|| CameraStatus::from_counts(camera_total, camera_online));

    let alarm_total = cell::coerce_count(cell_at(row, layout.alarm_total));
    let alarm_online = cell::coerce_count(cell_at(row, layout.alarm_online));
    let alarm_percent = cell::parse_percent(opt_cell_at(row, layout.alarm_percent))
        .or_else(|| cell::parse_percent(opt_cell_at(row, layout.alarm_status)))
        .unwrap_or_else(|| alarm_percent(alarm_total, alarm_online));
    let alarm_status = AlarmStatus::from_percent(alarm_percent);

    Some(SiteRecord {
        name,
        alias,
        camera_total,
        camera_online,
        camera_status,
        alarm_total,
        alarm_online,
        alarm_percent,
        alarm_status,
    })
}

/// Records for every data row from `start` on.
pub fn build_records(
    rows: &[Vec<Cell>],
    start: usize,
    layout: &ColumnLayout,
    rules: &RecordRules,
) -> Vec<SiteRecord> {
    rows.iter()
        .skip(start)
        .filter_map(|r| build_record(r, layout, rules))
        .collect()
}
