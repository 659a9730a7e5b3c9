// tests/summary.rs
use cftv_dash::cells;
use cftv_dash::config::options::SheetOptions;
use cftv_dash::normalize::{normalize_rows, SiteRecord};
use cftv_dash::summary::{filter_indices, status_breakdown, summarize, Metric, Summary};

fn records() -> Vec<SiteRecord> {
    let rows = vec![
        cells!["Site A", 10, 10, "", 4, 4, ""],
        cells!["Site B", 5, 0, "", 2, 1, ""],
        cells!["Site C", 0, 0, "", 0, 0, ""],
        cells!["Posto Site A-2", 8, 6, "", 3, 3, ""],
    ];
    normalize_rows(&rows, &SheetOptions::default())
}

#[test]
fn cameras_all_sites() {
    let s = summarize(&records(), Metric::Cameras, None);
    assert_eq!(
        s,
        Summary { sites: 4, total: 23, online: 16, offline: 7, offline_sites: 1, needs_attention: 3 }
    );
}

#[test]
fn alarms_all_sites() {
    let s = summarize(&records(), Metric::Alarms, None);
    // B is partial, C has no panels online
    assert_eq!(
        s,
        Summary { sites: 4, total: 9, online: 8, offline: 1, offline_sites: 1, needs_attention: 2 }
    );
}

#[test]
fn search_is_case_insensitive_substring_of_name() {
    let recs = records();
    let s = summarize(&recs, Metric::Cameras, Some("site a"));
    assert_eq!(s.sites, 2);
    assert_eq!(s.total, 18);
    assert_eq!(s.online, 16);
    assert_eq!(s.needs_attention, 1);

    assert_eq!(filter_indices(&recs, Some("SITE A")), vec![0, 3]);
    assert_eq!(filter_indices(&recs, Some("nope")), Vec::<usize>::new());
}

#[test]
fn blank_query_keeps_everything() {
    let recs = records();
    assert_eq!(filter_indices(&recs, Some("   ")), vec![0, 1, 2, 3]);
    assert_eq!(summarize(&recs, Metric::Alarms, Some("")), summarize(&recs, Metric::Alarms, None));
}

#[test]
fn empty_input() {
    let s = summarize(&[], Metric::Cameras, None);
    assert_eq!(s, Summary::default());
    assert_eq!(s.online_percent(), 0.0);
}

#[test]
fn online_percent_is_rounded() {
    let s = summarize(&records(), Metric::Cameras, None);
    assert_eq!(s.online_percent(), 69.57);
}

#[test]
fn breakdown_keeps_display_order() {
    let recs = records();
    assert_eq!(
        status_breakdown(&recs, Metric::Cameras, None),
        vec![("OK", 1), ("EXCESS", 0), ("MISSING", 1), ("OFFLINE", 1), ("NO_CAMERAS", 1)]
    );
    assert_eq!(
        status_breakdown(&recs, Metric::Alarms, Some("site b")),
        vec![("100%", 0), ("PARTIAL(≥66%)", 0), ("PARTIAL(50%)", 1), ("PARTIAL(<50%)", 0), ("OFFLINE", 0)]
    );
}

#[test]
fn records_are_not_touched() {
    let recs = records();
    let before = recs.clone();
    let _ = summarize(&recs, Metric::Cameras, Some("b"));
    let _ = status_breakdown(&recs, Metric::Alarms, None);
    assert_eq!(recs, before);
}
