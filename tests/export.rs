// tests/export.rs
use std::fs;
use std::path::{Path, PathBuf};

use cftv_dash::cells;
use cftv_dash::config::options::{ExportFormat, ExportOptions, PageKind, SheetOptions};
use cftv_dash::file;
use cftv_dash::normalize::{normalize_rows, SiteRecord};
use cftv_dash::table;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cftv_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn norm(p: &Path) -> PathBuf { p.components().collect() }

fn records() -> Vec<SiteRecord> {
    let rows = vec![
        cells!["Site A", 10, 10, "", 4, 4, "", "Matriz"],
        cells!["Site B", 5, 0, "", 3, 2, ""],
    ];
    normalize_rows(&rows, &SheetOptions::default())
}

#[test]
fn default_path_follows_format() {
    let mut opts = ExportOptions::default();
    assert!(opts.out_path().to_string_lossy().ends_with("sites.csv"));
    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("sites.tsv"));
    assert_eq!(norm(&opts.out_path_for(PageKind::Alarms)), norm(Path::new("out/sites_alarms.tsv")));
}

#[test]
fn user_extension_is_kept() {
    let mut opts = ExportOptions::default();
    opts.set_path("  relatorio/hoje.txt ");
    opts.format = ExportFormat::Tsv;
    assert_eq!(norm(&opts.out_path()), norm(Path::new("relatorio/hoje.txt")));
    assert_eq!(norm(&opts.out_path_for(PageKind::Cameras)), norm(Path::new("relatorio/hoje_cameras.txt")));
}

#[test]
fn tab_tables() {
    let recs = records();

    let cams = table::build(PageKind::Cameras, &recs);
    assert_eq!(cams.headers, ["Local", "Total", "Online", "Status"]);
    assert_eq!(cams.rows[1], ["Site B", "5", "0", "OFFLINE"]);

    let alarms = table::build(PageKind::Alarms, &recs);
    assert_eq!(alarms.rows[1], ["Site B", "3", "2", "66.67%", "PARTIAL(≥66%)"]);
    assert_eq!(alarms.rows[0][3], "100%");

    let all = table::build(PageKind::Overview, &recs);
    assert_eq!(all.ncols(), 6);
    assert_eq!(all.rows[0], ["Site A", "Matriz", "10/10", "OK", "4/4", "100%"]);
    assert_eq!(all.rows[1][1], "");
}

#[test]
fn csv_file_content() {
    let dir = tmp_dir("csv");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("nested").join("sites").to_str().unwrap());

    let path = file::write_export(&opts, PageKind::Cameras, &records()).unwrap();
    assert_eq!(norm(&path), norm(&dir.join("nested").join("sites_cameras.csv")));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Local,Total,Online,Status\nSite A,10,10,OK\nSite B,5,0,OFFLINE\n");
}

#[test]
fn tsv_without_headers() {
    let dir = tmp_dir("tsv");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;
    opts.set_path(dir.join("a").to_str().unwrap());

    let recs = records();
    let path = file::write_export(&opts, PageKind::Alarms, recs.iter().take(1)).unwrap();
    assert!(path.to_string_lossy().ends_with("a_alarms.tsv"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Site A\t4\t4\t100%\t100%\n");
}

#[test]
fn clipboard_text_quotes_separators() {
    let rows = vec![cells!["Loja 1, Centro", 2, 1, "", 0, 0, ""]];
    let recs = normalize_rows(&rows, &SheetOptions::default());
    let data = table::build(PageKind::Cameras, &recs);

    let opts = ExportOptions::default();
    assert_eq!(
        file::to_export_string(&opts, &data),
        "Local,Total,Online,Status\n\"Loja 1, Centro\",2,1,MISSING 1\n"
    );
}

#[test]
fn export_fails_when_parent_is_a_file() {
    let dir = tmp_dir("blocked");
    let blocker = dir.join("blocker");
    fs::write(&blocker, b"x").unwrap();

    let mut opts = ExportOptions::default();
    opts.set_path(blocker.join("sites.csv").to_str().unwrap());
    assert!(file::write_export(&opts, PageKind::Cameras, &records()).is_err());
}
