// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::core::{CellRef, Col};
use crate::error::ConfigError;

/// Everything the dashboard reads from `dashboard.toml`. Every section is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub sheet: SheetOptions,
    pub export: ExportOptions,
    pub gui: GuiOptions,
}

impl AppOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|err| ConfigError::Io { path: path.to_path_buf(), err })?;
        Self::from_toml_str(&text)
            .map_err(|err| ConfigError::Parse { path: path.to_path_buf(), err })
    }

    /// Explicit path must exist; without one, `dashboard.toml` is used if present.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if p.is_file() { Self::load(p) } else { Ok(Self::default()) }
            }
        }
    }
}

/* ---------------- Source ---------------- */

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    /// Local path or http(s) URL.
    pub location: String,
    /// Worksheet name; first sheet when unset.
    pub sheet: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            location: s!(DEFAULT_SOURCE),
            sheet: None,
            timeout_secs: FETCH_TIMEOUT_SECS,
        }
    }
}

/* ---------------- Sheet shape ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SheetOptions {
    pub layout: ColumnLayout,
    pub locator: LocatorOptions,
    pub records: RecordRules,
}

/// Which column holds which field. Columns not listed here are never read.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub name: Col,
    pub camera_total: Col,
    pub camera_online: Col,
    pub camera_status: Option<Col>,
    pub alarm_total: Col,
    pub alarm_online: Col,
    pub alarm_status: Option<Col>,
    pub alias: Option<Col>,
    pub alarm_percent: Option<Col>,
    /// Free-text "last updated" cell. Unset: the rows above the table are
    /// searched for an "Atualizado em" line.
    pub updated_at: Option<CellRef>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name: Col(0),
            camera_total: Col(1),
            camera_online: Col(2),
            camera_status: Some(Col(3)),
            alarm_total: Col(4),
            alarm_online: Col(5),
            alarm_status: Some(Col(6)),
            alias: Some(Col(7)),
            alarm_percent: None,
            updated_at: None,
        }
    }
}

impl ColumnLayout {
    /// Columns that must hold numbers on a data row.
    pub fn count_columns(&self) -> [Col; 4] {
        [self.camera_total, self.camera_online, self.alarm_total, self.alarm_online]
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocatorOptions {
    pub max_scan_rows: usize,
    pub fallback_row: usize,
    pub min_header_hits: usize,
    pub header_phrases: Vec<String>,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            max_scan_rows: MAX_SCAN_ROWS,
            fallback_row: FALLBACK_DATA_ROW,
            min_header_hits: MIN_HEADER_HITS,
            header_phrases: HEADER_PHRASES.iter().map(|s| s!(*s)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordRules {
    /// Name-cell markers for summary/footer rows (case-insensitive substring).
    pub exclude_keywords: Vec<String>,
}

impl Default for RecordRules {
    fn default() -> Self {
        Self { exclude_keywords: EXCLUDE_KEYWORDS.iter().map(|s| s!(*s)).collect() }
    }
}

/* ---------------- Views ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Cameras,
    Alarms,
    Overview,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Cameras, PageKind::Alarms, PageKind::Overview];

    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Cameras => "cameras",
            PageKind::Alarms => "alarms",
            PageKind::Overview => "overview",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cameras" | "câmeras" => Some(PageKind::Cameras),
            "alarms" | "alarmes" => Some(PageKind::Alarms),
            "overview" | "geral" | "all" => Some(PageKind::Overview),
            _ => None,
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// File path; a missing extension is taken from `format`.
    path: PathBuf,
    pub include_headers: bool,
    /// Export only rows matching the current search.
    pub filtered_only: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE),
            include_headers: true,
            filtered_only: true,
        }
    }
}

impl ExportOptions {
    /// Final path. A user-typed extension is kept even if it disagrees with `format`.
    pub fn out_path(&self) -> PathBuf {
        if self.path.extension().is_some() {
            self.path.clone()
        } else {
            self.path.with_extension(self.format.ext())
        }
    }

    /// Same, with the page slug appended to the stem ("out/sites_alarms.csv").
    pub fn out_path_for(&self, kind: PageKind) -> PathBuf {
        let base = self.out_path();
        let stem = base.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let ext = base
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!(self.format.ext()));
        base.with_file_name(join!(&stem, "_", kind.slug(), ".", &ext))
    }

    /// Parse GUI/CLI text into the path.
    pub fn set_path(&mut self, text: &str) {
        self.path = PathBuf::from(text.trim());
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

/* ---------------- GUI ---------------- */

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GuiOptions {
    pub title: String,
    /// PNG used for the header logo and window icon.
    pub logo: Option<PathBuf>,
    /// Tab shown at startup.
    pub start_tab: PageKind,
    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            title: s!(APP_TITLE),
            logo: None,
            start_tab: PageKind::Cameras,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}
