//! Output tests for the implementation guide.
//!
//! The full console output is compared against a saved copy, and the
//! structural properties of the guide are checked separately so a failure
//! points at what changed.

use guide::{run, write_guide, GUIDE_COMPLETE, SECTIONS, TITLE};
use std::process::Command;

const EXPECTED_OUTPUT: &str = include_str!("fixtures/expected_output.txt");

/// The only line that differs from the historical console output.
const WIKIPEDIA_PATTERN_LINE: &str =
    r"                                    year_match = re.match(r'^(\d{4})\s*[–-]?\s*(.*)', text)";

const EXPECTED_HEADERS: [&str; 10] = [
    "1. MULTI-SOURCE DATA FETCHING STRATEGY",
    "2. DATA FILTERING AND PROCESSING",
    "3. WIKIPEDIA API IMPLEMENTATION (Python)",
    "4. ON THIS DAY API IMPLEMENTATION (Python)",
    "5. MERGE AND VERIFY EVENTS IMPLEMENTATION (Python)",
    "6. ENHANCED CATEGORIZATION IMPLEMENTATION (Python)",
    "7. CONTENT FORMATTING ENHANCEMENTS (Python)",
    "8. STREAMLIT INTEGRATION",
    "9. IMPLEMENTATION SUMMARY",
    "10. PERFORMANCE CONSIDERATIONS",
];

async fn render() -> String {
    let mut out = Vec::new();
    let status = run(&mut out).await.expect("writing to a Vec cannot fail");
    assert_eq!(status, GUIDE_COMPLETE);
    String::from_utf8(out).expect("guide output is UTF-8")
}

/// Test that the output matches the saved copy byte for byte.
///
/// The saved copy is the historical console output with one deliberate
/// difference: the Wikipedia snippet's pattern keeps its backslashes
/// (`r'^(\d{4})\s*[–-]?\s*(.*)'`), where the old console output had
/// dropped them and printed `r'^(d{4})s*[–-]?s*(.*)'`.
#[tokio::test]
async fn test_output_matches_saved_copy() {
    assert_eq!(render().await, EXPECTED_OUTPUT);
}

/// Test that the Wikipedia snippet keeps its regex escapes.
#[tokio::test]
async fn test_wikipedia_pattern_keeps_escapes() {
    let text = render().await;
    assert_eq!(text.lines().filter(|l| *l == WIKIPEDIA_PATTERN_LINE).count(), 1);
    assert!(!text.contains("r'^(d{4})s*"));
}

/// Test that the output is identical across runs.
#[tokio::test]
async fn test_output_is_deterministic() {
    assert_eq!(render().await, render().await);
}

/// Test that the body alone returns the completion status.
#[tokio::test]
async fn test_write_guide_returns_status() {
    let mut out = Vec::new();
    let status = write_guide(&mut out).await.unwrap();
    assert_eq!(status, "Implementation guide generated successfully");

    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Ready to implement"));
}

/// Test that exactly ten numbered headers appear in order.
#[tokio::test]
async fn test_ten_headers_in_order() {
    let text = render().await;

    let headers: Vec<&str> = text
        .lines()
        .filter(|line| EXPECTED_HEADERS.contains(line))
        .collect();
    assert_eq!(headers, EXPECTED_HEADERS);

    let mut last = 0;
    for header in EXPECTED_HEADERS {
        let pos = text.find(&format!("\n\n{}\n", header)).expect("header preceded by blank line");
        assert!(pos > last);
        last = pos;
    }

    let rendered: Vec<String> = SECTIONS.iter().map(|s| s.header()).collect();
    assert_eq!(rendered, EXPECTED_HEADERS);
}

/// Test the first and last lines.
#[tokio::test]
async fn test_first_and_last_lines() {
    let text = render().await;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], TITLE);
    assert!(lines[0].starts_with("Enhanced Historical Events API"));
    assert_eq!(lines[2], "");
    assert_eq!(
        lines[3],
        "Fetching historical events for 4/15 from multiple sources..."
    );

    let last = lines.last().unwrap();
    assert!(last.contains("Ready to implement"));
    assert!(text.ends_with("Ready to implement in your Streamlit application!\n"));
}

/// Test that every snippet is printed and closed with two spaces.
#[tokio::test]
async fn test_snippets_present() {
    let text = render().await;
    for function in [
        "def fetch_from_wikipedia(month, day):",
        "def fetch_from_on_this_day(month, day):",
        "def merge_and_verify_events(events_lists):",
        "def categorize_event(event_text):",
        "def format_event_for_display(event):",
        "def display_event_card(event, event_id, is_indian=False):",
    ] {
        assert_eq!(text.matches(function).count(), 1, "{function}");
    }
    assert_eq!(text.matches("\n  \n").count(), 6);
}

/// Test the `histofact-guide` binary end-to-end.
#[test]
fn test_binary_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_histofact-guide"))
        .output()
        .expect("Failed to run histofact-guide");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_OUTPUT);
}
