//! Event Records
//!
//! The record shared by every source, merge step and display layer.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::{Category, Year};

/// Well-known source names.
pub mod sources {
    pub const WIKIPEDIA: &str = "Wikipedia";
    pub const ON_THIS_DAY: &str = "On This Day";
    pub const INDIAN_ARCHIVES: &str = "Indian Historical Archives";
    /// Attribution used when an event carries no source.
    pub const DEFAULT: &str = "Historical Archives";
}

/// Separator between source names in [`HistoricalEvent::source`].
pub const SOURCE_SEPARATOR: &str = ", ";

/// Wiki parser artifacts and HTML tags leaking into event text.
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mw-parser-output|\.frac|fontsize|</?\w+>")
        .expect("markup pattern should always compile")
});

/// A single "on this day" event from one or more sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    pub year: Year,
    pub text: String,
    /// Source names joined by `", "`.
    #[serde(default)]
    pub source: String,
    /// True once the event was confirmed by a second source.
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f32>,
}

impl HistoricalEvent {
    /// Creates an unverified, uncategorized event.
    pub fn new(year: Year, text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            year,
            text: text.into(),
            source: source.into(),
            verified: false,
            category: None,
            details: None,
            relevance_score: None,
        }
    }

    /// Builder-style category assignment.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Builder-style verification flag.
    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// Builder-style details text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Iterates over the individual source names.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.source
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Returns true if `name` is one of this event's sources.
    pub fn has_source(&self, name: &str) -> bool {
        self.sources().any(|s| s == name)
    }

    /// Appends the sources of `other` that are not yet listed.
    ///
    /// Returns true if anything was added.
    pub fn add_sources(&mut self, other: &str) -> bool {
        let mut names: Vec<String> = self.sources().map(str::to_string).collect();
        let mut added = false;
        for name in other.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
                added = true;
            }
        }
        if added {
            self.source = names.join(SOURCE_SEPARATOR);
        }
        added
    }

    /// Source attribution for display, falling back to the default.
    pub fn source_or_default(&self) -> &str {
        if self.source.trim().is_empty() {
            sources::DEFAULT
        } else {
            &self.source
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Serializes the event to a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Checks that an event carries usable text.
///
/// Rejects empty or short text (fewer than `min_words` words) and text
/// containing wiki parser artifacts or HTML tags.
pub fn validate_event(event: &HistoricalEvent, min_words: usize) -> bool {
    let text = event.text.trim();
    if text.is_empty() || event.word_count() < min_words {
        return false;
    }
    !MARKUP.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(text: &str) -> HistoricalEvent {
        HistoricalEvent::new(Year::new(1969), text, sources::WIKIPEDIA)
    }

    #[test]
    fn test_new_event_defaults() {
        let e = event("Apollo 11 lands on the Moon");
        assert!(!e.verified);
        assert!(e.category.is_none());
        assert!(e.details.is_none());
        assert!(e.relevance_score.is_none());
    }

    #[test]
    fn test_sources_split_and_trim() {
        let mut e = event("Apollo 11 lands on the Moon");
        e.source = "Wikipedia, On This Day".to_string();
        let names: Vec<&str> = e.sources().collect();
        assert_eq!(names, vec!["Wikipedia", "On This Day"]);
        assert!(e.has_source("On This Day"));
        assert!(!e.has_source("Britannica"));
    }

    #[test]
    fn test_add_sources_keeps_first_seen_order() {
        let mut e = event("Apollo 11 lands on the Moon");
        assert!(e.add_sources("On This Day"));
        assert!(!e.add_sources("Wikipedia"));
        assert!(e.add_sources("Wikipedia, Britannica"));
        assert_eq!(e.source, "Wikipedia, On This Day, Britannica");
    }

    #[test]
    fn test_source_or_default() {
        let mut e = event("Apollo 11 lands on the Moon");
        e.source.clear();
        assert_eq!(e.source_or_default(), sources::DEFAULT);
    }

    #[test]
    fn test_validate_event_accepts_plain_text() {
        assert!(validate_event(&event("Apollo 11 lands on the Moon"), 4));
    }

    #[test]
    fn test_validate_event_rejects_short_text() {
        assert!(!validate_event(&event("Moon landing"), 4));
        assert!(!validate_event(&event("   "), 0));
    }

    #[test]
    fn test_validate_event_rejects_markup() {
        assert!(!validate_event(
            &event("Something .mw-parser-output leaked into this text"),
            4
        ));
        assert!(!validate_event(&event("A <b>bold</b> claim about history"), 4));
        assert!(validate_event(&event("Prices rose by < 5 percent that year"), 4));
    }

    #[test]
    fn test_validate_event_rejects_non_ascii_tags() {
        assert!(!validate_event(&event("A caption <é> left in the text"), 4));
        assert!(!validate_event(&event("Fragment of </überschrift> markup here"), 4));
    }

    #[test]
    fn test_jsonl_roundtrip_preserves_optional_fields() {
        let e = event("Apollo 11 lands on the Moon")
            .with_category(Category::Science)
            .with_details("Neil Armstrong and Buzz Aldrin walked on the surface.")
            .verified();
        let line = e.to_jsonl().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains(r#""category":"Science & Technology""#));
        assert_eq!(HistoricalEvent::from_jsonl(&line).unwrap(), e);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let e = HistoricalEvent::from_jsonl(r#"{"year": 1947, "text": "India gains independence"}"#)
            .unwrap();
        assert_eq!(e.year, Year::new(1947));
        assert!(e.source.is_empty());
        assert!(!e.verified);
    }
}
