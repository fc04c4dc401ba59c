// tests/parse_progress.rs
//
// Extraction math: progress-text parsing and percent computation.
//
use tpg_scrape::core::parse::{group_thousands, parse_progress, percent_complete};

#[test]
fn parses_comma_separated_progress() {
    assert_eq!(parse_progress("1,234 / 10,000"), Some((1234, 10000)));
}

#[test]
fn percent_is_floored() {
    let (current, total) = parse_progress("1,234 / 10,000").unwrap();
    assert_eq!(percent_complete(current, total), 12);
}

#[test]
fn zero_total_means_zero_percent() {
    assert_eq!(percent_complete(5, 0), 0);
}

#[test]
fn parses_plain_numbers() {
    assert_eq!(parse_progress("7 / 9"), Some((7, 9)));
}

#[test]
fn rejects_malformed_progress() {
    assert_eq!(parse_progress(""), None);
    assert_eq!(parse_progress("1234"), None); // one part
    assert_eq!(parse_progress("1 / 2 / 3"), None); // three parts
    assert_eq!(parse_progress("abc / def"), None); // non-numeric
    assert_eq!(parse_progress(" / "), None); // empty parts
}

#[test]
fn percent_boundaries() {
    assert_eq!(percent_complete(0, 100), 0);
    assert_eq!(percent_complete(100, 100), 100);
    assert_eq!(percent_complete(999, 1000), 99); // 99.9 floors to 99
    assert_eq!(percent_complete(150, 100), 150); // overfunded goals keep counting
}

#[test]
fn regroups_thousands_for_display() {
    assert_eq!(group_thousands(1234), "1,234");
    assert_eq!(group_thousands(10000), "10,000");
}
