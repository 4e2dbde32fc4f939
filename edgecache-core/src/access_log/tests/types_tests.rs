use crate::access_log::{CacheStatus, parse_line};
use chrono::{Datelike, Timelike};

#[test]
fn cache_status_tags_round_trip_through_as_str() {
    let known = [
        CacheStatus::Hit,
        CacheStatus::Miss,
        CacheStatus::Bypass,
        CacheStatus::Stale,
        CacheStatus::Updating,
        CacheStatus::Revalidated,
    ];

    for status in known {
        assert_eq!(CacheStatus::from_tag(status.as_str()), status);
    }
}

#[test]
fn cache_status_tags_are_case_sensitive() {
    // Act
    let status = CacheStatus::from_tag("hit");

    // Assert
    assert_eq!(status, CacheStatus::Unknown);
}

#[test]
fn timestamp_parses_time_local_format() {
    // Arrange
    let line = r#"10.0.0.1 - [27/Oct/2025:10:15:30 +0200] "GET / HTTP/1.1" 200 1 0.1 "HIT""#;
    let record = parse_line(line).unwrap();

    // Act
    let ts = record.timestamp().expect("timestamp should parse");

    // Assert
    assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 10, 27));
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (10, 15, 30));
    assert_eq!(ts.offset().local_minus_utc(), 2 * 3600);
}

#[test]
fn timestamp_is_none_for_free_form_time() {
    // Arrange
    let line = r#"10.0.0.1 - [yesterday] "GET / HTTP/1.1" 200 1 0.1 "HIT""#;
    let record = parse_line(line).unwrap();

    // Act
    let ts = record.timestamp();

    // Assert
    assert!(ts.is_none());
}

#[test]
fn status_classes() {
    // Arrange
    let make = |status: u64| {
        let line = format!(
            r#"10.0.0.1 - [27/Oct/2025:10:00:00 +0000] "GET / HTTP/1.1" {status} 1 0.1 "HIT""#
        );
        parse_line(&line).unwrap()
    };

    // Assert
    assert!(make(404).is_client_error());
    assert!(!make(404).is_server_error());
    assert!(make(503).is_server_error());
    assert!(!make(304).is_client_error());
    assert!(!make(600).is_server_error());
}
