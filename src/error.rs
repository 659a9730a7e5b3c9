// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Ingestion failures. These stop the render; cell-level problems never get here.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no sheet source configured")]
    NoSource,

    #[error("sheet not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {err}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("failed to fetch {url}: {err}")]
    Http {
        url: String,
        #[source]
        err: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not open workbook {origin}: {err}")]
    Workbook {
        origin: String,
        #[source]
        err: calamine::Error,
    },

    #[error("worksheet '{0}' not found")]
    MissingSheet(String),

    #[error("workbook has no worksheets")]
    NoWorksheets,

    #[error("unsupported sheet type: .{0}")]
    Unsupported(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {err}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("invalid config {}: {err}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        err: toml::de::Error,
    },
}
