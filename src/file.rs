// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, PageKind};
use crate::csv::{self, write_row};
use crate::normalize::SiteRecord;
use crate::table::{self, TableData};

/// Export text for one tab (Copy/Export), honoring the header toggle and delimiter.
pub fn to_export_string(export: &ExportOptions, data: &TableData) -> String {
    let headers = export.include_headers.then_some(data.headers.as_slice());
    csv::to_export_string(headers, &data.rows, export.delim())
}

/// Write one tab's records to `export.out_path_for(kind)` ("out/sites_alarms.csv").
/// Returns the final path written to.
pub fn write_export<'a, I>(export: &ExportOptions, kind: PageKind, records: I) -> io::Result<PathBuf>
where
    I: IntoIterator<Item = &'a SiteRecord>,
{
    let path = export.out_path_for(kind);
    write_export_to(&path, export, kind, records)?;
    Ok(path)
}

/// Same, to an explicit path.
pub fn write_export_to<'a, I>(path: &Path, export: &ExportOptions, kind: PageKind, records: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a SiteRecord>,
{
    let data = table::build(kind, records);
    write_table(path, &data, export.include_headers, export.delim())?;
    logf!("Export: {:?} {} row(s) → {}", kind, data.nrows(), path.display());
    Ok(())
}

/// Ensure parent dir exists; create/truncate file; stream rows.
pub fn write_table(path: &Path, data: &TableData, include_headers: bool, sep: char) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if include_headers {
        write_row(&mut out, &data.headers, sep)?;
    }
    for row in &data.rows {
        write_row(&mut out, row, sep)?;
    }
    out.flush()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
