// src/normalize/status.rs
use std::fmt;

use crate::config::consts::{ALARM_FULL_PCT, ALARM_HALF_PCT, ALARM_HIGH_PCT};
use crate::core::sanitize::{first_uint, upper_ws};

/// Camera classification of one site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraStatus {
    Ok,
    Excess,
    Offline,
    Missing(u32),
    NoCameras,
}

impl CameraStatus {
    /// Display order for breakdowns.
    pub const GROUPS: [&'static str; 5] = ["OK", "EXCESS", "MISSING", "OFFLINE", "NO_CAMERAS"];

    pub fn from_counts(total: u32, online: u32) -> Self {
        if total == 0 {
            CameraStatus::NoCameras
        } else if online == 0 {
            CameraStatus::Offline
        } else if online == total {
            CameraStatus::Ok
        } else if online > total {
            CameraStatus::Excess
        } else {
            CameraStatus::Missing(total - online)
        }
    }

    /// Recognize a hand-typed status. `None` when the text carries no known label.
    /// "FALTANDO n" without a number falls back to the count difference.
    pub fn from_text(text: &str, total: u32, online: u32) -> Option<Self> {
        let u = upper_ws(text);
        if u.is_empty() { return None; }

        if u.contains("NO_CAMERAS") || u.contains("SEM CÂMERA") || u.contains("SEM CAMERA") {
            return Some(CameraStatus::NoCameras);
        }
        if u.contains("OFFLINE") {
            return Some(CameraStatus::Offline);
        }
        if u.contains("EXCESS") || u.contains("EXCEDENTE") {
            return Some(CameraStatus::Excess);
        }
        if u.contains("MISSING") || u.contains("FALTA") {
            let n = first_uint(&u).unwrap_or_else(|| total.saturating_sub(online));
            return Some(CameraStatus::Missing(n));
        }
        if u.split(|c: char| !c.is_alphanumeric()).any(|w| w == "OK") {
            return Some(CameraStatus::Ok);
        }
        None
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, CameraStatus::Ok)
    }

    /// Label without the count ("MISSING" for every `Missing(n)`).
    pub fn group(&self) -> &'static str {
        match self {
            CameraStatus::Ok => "OK",
            CameraStatus::Excess => "EXCESS",
            CameraStatus::Offline => "OFFLINE",
            CameraStatus::Missing(_) => "MISSING",
            CameraStatus::NoCameras => "NO_CAMERAS",
        }
    }
}

impl fmt::Display for CameraStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraStatus::Missing(n) => write!(f, "MISSING {n}"),
            other => f.write_str(other.group()),
        }
    }
}

/// Alarm tier by percent of panels online.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlarmStatus {
    Full,
    PartialHigh,
    PartialHalf,
    PartialLow,
    Offline,
}

impl AlarmStatus {
    pub const GROUPS: [&'static str; 5] =
        ["100%", "PARTIAL(≥66%)", "PARTIAL(50%)", "PARTIAL(<50%)", "OFFLINE"];

    pub fn from_percent(pct: f64) -> Self {
        if pct >= ALARM_FULL_PCT {
            AlarmStatus::Full
        } else if pct >= ALARM_HIGH_PCT {
            AlarmStatus::PartialHigh
        } else if pct >= ALARM_HALF_PCT {
            AlarmStatus::PartialHalf
        } else if pct > 0.0 {
            AlarmStatus::PartialLow
        } else {
            AlarmStatus::Offline
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, AlarmStatus::Full)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlarmStatus::Full => "100%",
            AlarmStatus::PartialHigh => "PARTIAL(≥66%)",
            AlarmStatus::PartialHalf => "PARTIAL(50%)",
            AlarmStatus::PartialLow => "PARTIAL(<50%)",
            AlarmStatus::Offline => "OFFLINE",
        }
    }
}

impl fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
