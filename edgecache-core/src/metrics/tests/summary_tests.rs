use crate::metrics::{MetricsAnalyzer, render_summary};
use pretty_assertions::assert_eq;

#[test]
fn summary_renders_percentages_milliseconds_and_megabytes() {
    // Arrange
    let mut analyzer = MetricsAnalyzer::new();
    analyzer.process_content(concat!(
        r#"10.0.0.1 - [27/Oct/2025:10:00:00 +0000] "GET /a HTTP/1.1" 200 1048576 0.010 "HIT""#,
        "\n",
        r#"10.0.0.2 - [27/Oct/2025:10:00:01 +0000] "GET /b HTTP/1.1" 404 1048576 0.030 "MISS""#,
        "\n",
        r#"10.0.0.3 - [27/Oct/2025:10:00:02 +0000] "GET /c HTTP/1.1" 502 0 0.020 "STALE""#,
        "\n",
    ));

    // Act
    let summary = analyzer.summary();

    // Assert
    let expected = "\
Cache Metrics Summary
=====================
Total Requests: 3
Cache Hits:     1 (50.00%)
Cache Misses:   1
Cache Bypass:   0
Cache Stale:    1
Cache Updating: 0

Error Rate: 66.67%
  4xx errors: 1
  5xx errors: 1

Latency:
  P50: 20.00ms
  P95: 30.00ms
  P99: 30.00ms

Total Bytes: 2.00 MB
";
    assert_eq!(summary, expected);
}

#[test]
fn summary_of_empty_run_is_all_zero() {
    // Act
    let summary = render_summary(&MetricsAnalyzer::new().snapshot());

    // Assert
    assert!(summary.contains("Total Requests: 0\n"));
    assert!(summary.contains("Cache Hits:     0 (0.00%)\n"));
    assert!(summary.contains("  P99: 0.00ms\n"));
    assert!(summary.ends_with("Total Bytes: 0.00 MB\n"));
}
