//! Tests for diagnostic report formatting

use pagesnap::snap_engine::SnapReport;
use std::path::PathBuf;

fn report_for(content: &str, body: &str) -> SnapReport {
    SnapReport::new(
        "http://localhost:4200/".to_string(),
        content,
        body,
        500,
        PathBuf::from("/tmp/screenshots/01_initial.png"),
    )
}

#[test]
fn diagnostic_lines_are_in_print_order() {
    let report = report_for("<html><body>hi</body></html>", "hi");
    let lines = report.diagnostic_lines();

    assert_eq!(lines[0], "Page URL: http://localhost:4200/");
    assert_eq!(lines[1], "Page content length: 28");
    assert_eq!(lines[2], "Body text: hi");
}

#[test]
fn content_length_counts_bytes_not_chars() {
    // 3 bytes per CJK char: byte length and char count diverge
    let markup = "<p>你好</p>";
    let report = report_for(markup, "你好");

    assert_eq!(report.content_bytes, markup.len());
    assert_ne!(report.content_bytes, markup.chars().count());
}

#[test]
fn body_excerpt_is_truncated_to_preview_limit() {
    let body = "x".repeat(800);
    let report = report_for("<html></html>", &body);

    assert_eq!(report.body_excerpt.chars().count(), 500);
}

#[test]
fn blank_body_renders_placeholder() {
    let report = report_for("<html><body></body></html>", "");
    assert_eq!(report.body_excerpt, "Empty");

    let lines = report.diagnostic_lines();
    assert_eq!(lines[2], "Body text: Empty");
}

#[test]
fn whitespace_only_body_renders_placeholder() {
    let report = report_for("<html><body> </body></html>", " \n ");
    assert_eq!(report.body_excerpt, "Empty");
}
