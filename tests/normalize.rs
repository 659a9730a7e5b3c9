// tests/normalize.rs
use cftv_dash::cells;
use cftv_dash::config::options::SheetOptions;
use cftv_dash::core::Cell;
use cftv_dash::normalize::{
    self, locate, records::{alarm_percent, build_records}, AlarmStatus, CameraStatus, Strategy,
};
use cftv_dash::sheet::RawSheet;

fn opts() -> SheetOptions {
    SheetOptions::default()
}

fn one(row: Vec<Cell>) -> normalize::SiteRecord {
    let o = opts();
    let mut recs = build_records(&[row], 0, &o.layout, &o.records);
    assert_eq!(recs.len(), 1);
    recs.remove(0)
}

#[test]
fn site_a_all_online() {
    let r = one(cells!["Site A", 10, 10, "", 4, 4, ""]);
    assert_eq!(r.camera_status_label(), "OK");
    assert_eq!(r.alarm_percent, 100.0);
    assert_eq!(r.alarm_status_label(), "100%");
    assert_eq!(r.alias, None);
}

#[test]
fn site_b_cameras_down_alarms_half() {
    let r = one(cells!["Site B", 5, 0, "", 2, 1, ""]);
    assert_eq!(r.camera_status_label(), "OFFLINE");
    assert_eq!(r.alarm_percent, 50.0);
    assert_eq!(r.alarm_status_label(), "PARTIAL(50%)");
}

#[test]
fn site_c_nothing_installed() {
    let r = one(cells!["Site C", 0, 0, "", 0, 0, ""]);
    assert_eq!(r.camera_status_label(), "NO_CAMERAS");
    assert_eq!(r.alarm_percent, 0.0);
    assert_eq!(r.alarm_status_label(), "OFFLINE");
}

#[test]
fn missing_and_excess_from_counts() {
    assert_eq!(one(cells!["X", 10, 7, "", 0, 0, ""]).camera_status_label(), "MISSING 3");
    assert_eq!(one(cells!["X", 4, 6, "", 0, 0, ""]).camera_status, CameraStatus::Excess);
}

#[test]
fn explicit_status_text_wins() {
    let r = one(cells!["Site D", 10, 10, "offline", 3, 3, ""]);
    assert_eq!(r.camera_status, CameraStatus::Offline);

    let r = one(cells!["Site E", 10, 8, "FALTANDO 5", 0, 0, ""]);
    assert_eq!(r.camera_status_label(), "MISSING 5");

    // no number in the text: count difference
    let r = one(cells!["Site F", 10, 8, "Faltando", 0, 0, ""]);
    assert_eq!(r.camera_status_label(), "MISSING 2");

    let r = one(cells!["Site G", 0, 0, "Sem câmeras", 0, 0, ""]);
    assert_eq!(r.camera_status, CameraStatus::NoCameras);

    // unrecognized text falls back to counts
    let r = one(cells!["Site H", 3, 3, "ver contrato", 0, 0, ""]);
    assert_eq!(r.camera_status, CameraStatus::Ok);

    // "OK" must be a word, not a fragment
    let r = one(cells!["Site I", 3, 1, "BLOKADO", 0, 0, ""]);
    assert_eq!(r.camera_status_label(), "MISSING 2");
}

#[test]
fn explicit_alarm_percent_overrides_counts() {
    let r = one(cells!["Site J", 0, 0, "", 4, 4, "75%"]);
    assert_eq!(r.alarm_percent, 75.0);
    assert_eq!(r.alarm_status, AlarmStatus::PartialHigh);

    // non-numeric status text: computed from counts
    let r = one(cells!["Site K", 0, 0, "", 4, 1, "PARCIAL"]);
    assert_eq!(r.alarm_percent, 25.0);
    assert_eq!(r.alarm_status, AlarmStatus::PartialLow);
}

#[test]
fn alarm_tier_boundaries() {
    assert_eq!(AlarmStatus::from_percent(100.0), AlarmStatus::Full);
    assert_eq!(AlarmStatus::from_percent(99.9), AlarmStatus::Full);
    assert_eq!(AlarmStatus::from_percent(99.89), AlarmStatus::PartialHigh);
    assert_eq!(AlarmStatus::from_percent(66.0), AlarmStatus::PartialHigh);
    assert_eq!(AlarmStatus::from_percent(65.99), AlarmStatus::PartialHalf);
    assert_eq!(AlarmStatus::from_percent(50.0), AlarmStatus::PartialHalf);
    assert_eq!(AlarmStatus::from_percent(0.01), AlarmStatus::PartialLow);
    assert_eq!(AlarmStatus::from_percent(0.0), AlarmStatus::Offline);
}

#[test]
fn ok_iff_all_online_and_some_installed() {
    for total in 0u32..6 {
        for online in 0u32..8 {
            let s = CameraStatus::from_counts(total, online);
            assert_eq!(s.is_ok(), total == online && total > 0, "total={total} online={online}");
        }
    }
}

#[test]
fn alarm_percent_matches_rounded_ratio() {
    for total in 0u32..10 {
        for online in 0..=total {
            let r = one(cells!["S", 0, 0, "", total, online, ""]);
            let expected = if total > 0 {
                (100.0 * online as f64 / total as f64 * 100.0).round() / 100.0
            } else {
                0.0
            };
            assert_eq!(r.alarm_percent, expected);
            assert_eq!(alarm_percent(total, online), expected);
        }
    }
    assert_eq!(alarm_percent(3, 2), 66.67);
}

#[test]
fn footer_and_blank_rows_are_dropped() {
    let o = opts();
    let rows = vec![
        cells!["Site A", 10, 10, "", 4, 4, ""],
        cells!["TOTAL", 99, 99, "OK", 9, 9, "100%"],
        cells!["Total geral", 1, 1, "", 1, 1, ""],
        cells!["", 3, 3, "", 1, 1, ""],
        Vec::new(),
        cells!["Relatório gerado em 01/02", "", "", "", "", "", ""],
        cells!["Site B", 5, 0, "", 2, 1, ""],
    ];
    let recs = build_records(&rows, 0, &o.layout, &o.records);
    let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Site A", "Site B"]);
}

#[test]
fn alias_column_is_read() {
    let r = one(cells!["Site A", 1, 1, "", 0, 0, "", "Matriz"]);
    assert_eq!(r.alias.as_deref(), Some("Matriz"));
}

fn dashboard_sheet() -> RawSheet {
    RawSheet::new(vec![
        cells!["Dashboard Operacional – CFTV & Alarmes"],
        cells!["Atualizado em 12/03/2025 08:00"],
        Vec::new(),
        cells!["Local", "Câmeras", "Online", "Status", "Alarmes", "Online", "Status", "Apelido"],
        cells!["Site A", 10, 10, "", 4, 4, "", "Matriz"],
        cells!["Site B", 5, 0, "", 2, 1, ""],
        cells!["Site C", 0, 0, "", 0, 0, ""],
        cells!["TOTAL", 15, 10, "", 6, 5, ""],
    ])
}

#[test]
fn header_row_is_found() {
    let sheet = dashboard_sheet();
    let o = opts();
    let at = locate::locate(&sheet.rows, &o.layout, &o.locator, &o.records);
    assert_eq!(at.row, 4);
    assert_eq!(at.strategy, Strategy::Header);
}

#[test]
fn data_row_heuristic_without_header() {
    let o = opts();
    let rows = vec![
        cells!["Relatório semanal"],
        Vec::new(),
        cells!["Site A", 10, 10, "", 4, 4, ""],
        cells!["Site B", 5, 0, "", 2, 1, ""],
    ];
    let at = locate::locate(&rows, &o.layout, &o.locator, &o.records);
    assert_eq!(at, locate::DataStart { row: 2, strategy: Strategy::Heuristic });
}

#[test]
fn fallback_when_nothing_matches() {
    let o = opts();
    let rows = vec![cells!["foo"], cells!["bar"], cells!["baz"]];
    let at = locate::locate(&rows, &o.layout, &o.locator, &o.records);
    assert_eq!(at.strategy, Strategy::Fallback);
    assert_eq!(at.row, o.locator.fallback_row);
    assert_eq!(normalize::locate_data_start(&[], &o.layout, &o.locator, &o.records), o.locator.fallback_row);
}

#[test]
fn header_scan_is_bounded() {
    let mut o = opts();
    o.locator.max_scan_rows = 3;
    let mut rows: Vec<Vec<Cell>> = (0..5).map(|_| cells!["-"]).collect();
    rows.push(cells!["Local", "Câmeras", "Online", "Status"]);
    rows.push(cells!["Site A", 1, 1, "", 0, 0, ""]);
    let at = locate::locate(&rows, &o.layout, &o.locator, &o.records);
    assert_eq!(at.strategy, Strategy::Fallback);
}

#[test]
fn grouped_header_block_is_skipped() {
    let sheet = RawSheet::new(vec![
        cells!["", "CÂMERAS", "", "", "ALARMES"],
        cells!["LOCAL", "TOTAL", "ONLINE", "STATUS", "TOTAL", "ONLINE", "STATUS"],
        cells!["Site A", 4, 4, "", 2, 2, ""],
    ]);
    let out = normalize::normalize(&sheet, &opts());
    assert_eq!(out.data_start, locate::DataStart { row: 2, strategy: Strategy::Header });
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].name, "Site A");
    assert!(out.layout_warning().is_none());
}

#[test]
fn guessed_start_carries_a_warning() {
    let sheet = RawSheet::new(vec![cells!["foo"], cells!["bar"], cells!["baz"]]);
    let out = normalize::normalize(&sheet, &opts());
    let w = out.layout_warning().unwrap();
    assert!(w.contains("row 3"), "{w}");
    assert!(normalize::normalize(&dashboard_sheet(), &opts()).layout_warning().is_none());
}

#[test]
fn full_pass_reads_records_and_updated_line() {
    let sheet = dashboard_sheet();
    let out = normalize::normalize(&sheet, &opts());
    assert_eq!(out.records.len(), 3);
    assert_eq!(out.records[0].alias.as_deref(), Some("Matriz"));
    assert_eq!(out.updated_at.as_deref(), Some("12/03/2025 08:00"));
}

#[test]
fn updated_value_in_next_cell() {
    let sheet = RawSheet::new(vec![
        cells!["Atualizado em:", "12/03/2025"],
        cells!["Local", "Câmeras", "Online", "Status", "Alarmes", "Online", "Status"],
        cells!["Site A", 10, 10, "", 4, 4, ""],
    ]);
    let out = normalize::normalize(&sheet, &opts());
    assert_eq!(out.updated_at.as_deref(), Some("12/03/2025"));
    assert_eq!(out.records.len(), 1);
}

#[test]
fn updated_marker_word_is_not_cut() {
    let sheet = RawSheet::new(vec![
        cells!["Atualizado emergencialmente 12/03"],
        cells!["Local", "Câmeras", "Online", "Status", "Alarmes", "Online", "Status"],
        cells!["Site A", 10, 10, "", 4, 4, ""],
    ]);
    let out = normalize::normalize(&sheet, &opts());
    assert_eq!(out.updated_at.as_deref(), Some("emergencialmente 12/03"));

    let sheet = RawSheet::new(vec![
        cells!["ATUALIZADO EM"],
        cells!["Local", "Câmeras", "Online", "Status"],
    ]);
    assert_eq!(normalize::normalize(&sheet, &opts()).updated_at, None);
}

#[test]
fn configured_updated_cell() {
    let mut o = opts();
    o.layout.updated_at = Some(cftv_dash::core::CellRef { row: 0, col: 1 });
    let sheet = RawSheet::new(vec![
        cells!["Base", "01/01/2025"],
        cells!["Site A", 1, 1, "", 1, 1, ""],
    ]);
    let out = normalize::normalize(&sheet, &o);
    assert_eq!(out.updated_at.as_deref(), Some("01/01/2025"));
}

#[test]
fn normalizing_twice_is_identical() {
    let sheet = dashboard_sheet();
    let o = opts();
    assert_eq!(normalize::normalize(&sheet, &o), normalize::normalize(&sheet, &o));
    assert_eq!(normalize::normalize_rows(&sheet.rows, &o), normalize::normalize(&sheet, &o).records);
}
