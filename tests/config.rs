// tests/config.rs
use cftv_dash::config::options::{AppOptions, ExportFormat, PageKind};
use cftv_dash::core::a1::{column_index, column_name, parse_a1};
use cftv_dash::core::{CellRef, Col};

#[test]
fn empty_file_is_all_defaults() {
    assert_eq!(AppOptions::from_toml_str("").unwrap(), AppOptions::default());
}

#[test]
fn sections_override_defaults() {
    let text = r#"
        [source]
        location = "https://docs.google.com/spreadsheets/d/abc/edit"
        sheet = "Plan1"
        timeout_secs = 5

        [sheet.layout]
        name = "B"
        camera_total = 2
        alarm_percent = "i"
        updated_at = "A2"

        [sheet.locator]
        max_scan_rows = 10

        [sheet.records]
        exclude_keywords = ["SUBTOTAL"]

        [export]
        format = "tsv"
        path = "relatorios/sites"
        include_headers = false

        [gui]
        title = "Painel"
        start_tab = "overview"
    "#;
    let o = AppOptions::from_toml_str(text).unwrap();

    assert_eq!(o.source.sheet.as_deref(), Some("Plan1"));
    assert_eq!(o.source.timeout_secs, 5);

    let l = &o.sheet.layout;
    assert_eq!(l.name, Col(1));
    assert_eq!(l.camera_total, Col(2));
    assert_eq!(l.camera_online, Col(2)); // untouched default (C)
    assert_eq!(l.alarm_percent, Some(Col(8)));
    assert_eq!(l.updated_at, Some(CellRef { row: 1, col: 0 }));

    assert_eq!(o.sheet.locator.max_scan_rows, 10);
    assert_eq!(o.sheet.locator.fallback_row, 2);
    assert_eq!(o.sheet.records.exclude_keywords, ["SUBTOTAL"]);

    assert_eq!(o.export.format, ExportFormat::Tsv);
    assert!(!o.export.include_headers);
    assert!(o.export.out_path().to_string_lossy().ends_with("sites.tsv"));

    assert_eq!(o.gui.title, "Painel");
    assert_eq!(o.gui.start_tab, PageKind::Overview);
}

#[test]
fn bad_column_is_rejected() {
    let err = AppOptions::from_toml_str("[sheet.layout]\nname = \"1A\"\n").unwrap_err();
    assert!(err.to_string().contains("invalid column reference"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let p = std::env::temp_dir().join("cftv_no_such_config.toml");
    let _ = std::fs::remove_file(&p);
    assert!(AppOptions::load_or_default(Some(&p)).is_err());
}

#[test]
fn a1_references() {
    assert_eq!(column_index("A"), Some(0));
    assert_eq!(column_index("z"), Some(25));
    assert_eq!(column_index("AA"), Some(26));
    assert_eq!(column_index("A1"), None);
    assert_eq!(column_index(""), None);
    assert_eq!(column_name(27), "AB");
    assert_eq!(parse_a1("B3"), Some(CellRef { row: 2, col: 1 }));
    assert_eq!(parse_a1("A0"), None);
    assert_eq!(parse_a1("12"), None);
    assert_eq!(CellRef { row: 0, col: 26 }.to_string(), "AA1");
}

#[test]
fn tab_slugs() {
    for k in PageKind::ALL {
        assert_eq!(PageKind::from_slug(k.slug()), Some(k));
    }
    assert_eq!(PageKind::from_slug("Alarmes"), Some(PageKind::Alarms));
    assert_eq!(PageKind::from_slug("geral"), Some(PageKind::Overview));
    assert_eq!(PageKind::from_slug("x"), None);
}
