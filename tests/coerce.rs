// tests/coerce.rs
use cftv_dash::core::Cell;
use cftv_dash::core::cell::{coerce_count, coerce_float, coerce_int, is_zero_token, parse_number, parse_percent};

#[test]
fn sentinel_tokens_coerce_to_zero() {
    for t in ["OFFLINE", "offline", "Sem Alarme", "SEM CÂMERAS", "sem câmeras", "NO_CAMERAS", "  OFFLINE  "] {
        assert!(is_zero_token(t), "{t:?} should be a zero token");
        assert_eq!(coerce_int(&Cell::from(t)), 0, "{t:?}");
        assert_eq!(parse_number(&Cell::from(t)), None, "{t:?}");
    }
}

#[test]
fn decimal_comma_is_accepted() {
    assert_eq!(coerce_float(&Cell::from("3,5")), 3.5);
    assert_eq!(coerce_float(&Cell::from(" 12.25 ")), 12.25);
    assert_eq!(coerce_int(&Cell::from("7,9")), 7);
}

#[test]
fn garbage_and_blanks_are_zero() {
    assert_eq!(coerce_int(&Cell::Empty), 0);
    assert_eq!(coerce_int(&Cell::from("   ")), 0);
    assert_eq!(coerce_int(&Cell::from("n/a")), 0);
    assert_eq!(coerce_int(&Cell::Number(f64::NAN)), 0);
    assert_eq!(coerce_int(&Cell::Number(7.9)), 7);
    assert_eq!(coerce_int(&Cell::Number(-2.0)), -2);
}

#[test]
fn counts_never_go_negative() {
    assert_eq!(coerce_count(&Cell::Number(-3.0)), 0);
    assert_eq!(coerce_count(&Cell::from("-1")), 0);
    assert_eq!(coerce_count(&Cell::from("12")), 12);
}

#[test]
fn percent_forms() {
    assert_eq!(parse_percent(&Cell::from("75%")), Some(75.0));
    assert_eq!(parse_percent(&Cell::from("75,5 %")), Some(75.5));
    assert_eq!(parse_percent(&Cell::from("0.5")), Some(50.0));
    assert_eq!(parse_percent(&Cell::Number(0.75)), Some(75.0));
    assert_eq!(parse_percent(&Cell::Number(66.666)), Some(66.67));
    assert_eq!(parse_percent(&Cell::from("150%")), Some(100.0));
    assert_eq!(parse_percent(&Cell::from("OFFLINE")), None);
    assert_eq!(parse_percent(&Cell::from("PARTIAL")), None);
    assert_eq!(parse_percent(&Cell::Empty), None);
}

#[test]
fn whole_numbers_print_without_fraction() {
    assert_eq!(Cell::Number(10.0).as_text(), "10");
    assert_eq!(Cell::Number(2.5).as_text(), "2.5");
    assert_eq!(Cell::from("  Site\u{a0}  A ").as_text(), "Site A");
}
