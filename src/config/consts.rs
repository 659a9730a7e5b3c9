// src/config/consts.rs

// App
pub const APP_TITLE: &str = "Dashboard Operacional – CFTV & Alarmes";
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 720.0;

// Source
pub const DEFAULT_SOURCE: &str = "dados.xlsx";
pub const FETCH_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("cftv_dash/", env!("CARGO_PKG_VERSION"));

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Locator
pub const MAX_SCAN_ROWS: usize = 25;
pub const FALLBACK_DATA_ROW: usize = 2;
pub const MIN_HEADER_HITS: usize = 2;
pub const HEADER_PHRASES: &[&str] = &[
    "LOCAL", "UNIDADE", "CLIENTE", "CÂMERAS", "CAMERAS", "CÂMERA", "CAMERA",
    "ALARMES", "ALARME", "ONLINE", "STATUS", "APELIDO",
];

// Record filtering
pub const EXCLUDE_KEYWORDS: &[&str] = &[
    "TOTAL", "RELATÓRIO", "RELATORIO", "ATUALIZADO EM", "LEGENDA",
];

// "Atualizado em 12/03/2025 08:00"
pub const UPDATED_MARKER: &str = "ATUALIZADO";

// Cell text that means "zero" in a count column
pub const ZERO_TOKENS: &[&str] = &[
    "OFFLINE", "SEM ALARME", "SEM ALARMES", "SEM CÂMERAS", "SEM CAMERAS", "SEM CÂMERA",
    "SEM CAMERA", "NO_CAMERAS",
];

// Alarm tiers (percent online)
pub const ALARM_FULL_PCT: f64 = 99.9;
pub const ALARM_HIGH_PCT: f64 = 66.0;
pub const ALARM_HALF_PCT: f64 = 50.0;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "sites";
