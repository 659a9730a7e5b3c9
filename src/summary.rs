// src/summary.rs
//
// Reductions over normalized records. Pure: records are only read, and the
// search query is always passed in by the caller.

use crate::core::sanitize::contains_ci;
use crate::normalize::{AlarmStatus, CameraStatus, SiteRecord};

/// Which device family a summary counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Cameras,
    Alarms,
}

impl Metric {
    pub fn title(self) -> &'static str {
        match self {
            Metric::Cameras => "Câmeras",
            Metric::Alarms => "Alarmes",
        }
    }

    fn total(self, r: &SiteRecord) -> u64 {
        match self {
            Metric::Cameras => r.camera_total as u64,
            Metric::Alarms => r.alarm_total as u64,
        }
    }

    fn online(self, r: &SiteRecord) -> u64 {
        match self {
            Metric::Cameras => r.camera_online as u64,
            Metric::Alarms => r.alarm_online as u64,
        }
    }

    fn offline(self, r: &SiteRecord) -> u64 {
        match self {
            Metric::Cameras => r.cameras_offline() as u64,
            Metric::Alarms => r.alarms_offline() as u64,
        }
    }

    fn is_ok(self, r: &SiteRecord) -> bool {
        match self {
            Metric::Cameras => r.camera_status.is_ok(),
            Metric::Alarms => r.alarm_status.is_ok(),
        }
    }

    fn is_offline(self, r: &SiteRecord) -> bool {
        match self {
            Metric::Cameras => r.camera_status == CameraStatus::Offline,
            Metric::Alarms => r.alarm_status == AlarmStatus::Offline,
        }
    }

    /// Breakdown key: camera labels without their count, alarm tiers as-is.
    fn group(self, r: &SiteRecord) -> &'static str {
        match self {
            Metric::Cameras => r.camera_status.group(),
            Metric::Alarms => r.alarm_status.label(),
        }
    }

    fn groups(self) -> &'static [&'static str] {
        match self {
            Metric::Cameras => &CameraStatus::GROUPS,
            Metric::Alarms => &AlarmStatus::GROUPS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Records that passed the filter.
    pub sites: usize,
    pub total: u64,
    pub online: u64,
    /// Devices not online, per site `max(total - online, 0)`.
    pub offline: u64,
    /// Sites whose label is OFFLINE.
    pub offline_sites: usize,
    /// Sites whose label is not OK / 100%.
    pub needs_attention: usize,
}

impl Summary {
    /// Online share of all devices, 0..=100; 0 without devices.
    pub fn online_percent(&self) -> f64 {
        if self.total == 0 { return 0.0; }
        crate::core::cell::round2((100.0 * self.online as f64 / self.total as f64).min(100.0))
    }
}

/// Blank or missing query matches everything.
pub fn matches_query(record: &SiteRecord, query: Option<&str>) -> bool {
    match query.map(str::trim) {
        None | Some("") => true,
        Some(q) => contains_ci(&record.name, q),
    }
}

/// Positions of the records matching `query`, in sheet order.
pub fn filter_indices(records: &[SiteRecord], query: Option<&str>) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_query(r, query))
        .map(|(i, _)| i)
        .collect()
}

pub fn summarize(records: &[SiteRecord], metric: Metric, query: Option<&str>) -> Summary {
    records
        .iter()
        .filter(|r| matches_query(r, query))
        .fold(Summary::default(), |mut acc, r| {
            acc.sites += 1;
            acc.total += metric.total(r);
            acc.online += metric.online(r);
            acc.offline += metric.offline(r);
            if metric.is_offline(r) { acc.offline_sites += 1; }
            if !metric.is_ok(r) { acc.needs_attention += 1; }
            acc
        })
}

/// Sites per status group, in display order. Groups with no sites are kept (count 0).
pub fn status_breakdown(
    records: &[SiteRecord],
    metric: Metric,
    query: Option<&str>,
) -> Vec<(&'static str, usize)> {
    let mut out: Vec<(&'static str, usize)> = metric.groups().iter().map(|g| (*g, 0)).collect();
    for r in records.iter().filter(|r| matches_query(r, query)) {
        let g = metric.group(r);
        if let Some(slot) = out.iter_mut().find(|(k, _)| *k == g) {
            slot.1 += 1;
        }
    }
    out
}
