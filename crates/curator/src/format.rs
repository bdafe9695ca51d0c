//! Display formatting for events.
//!
//! Extracts named entities from event text, bolds them, and renders event
//! cards as Markdown.

use history_events::{Category, HistoricalEvent};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::Range;

use crate::error::CuratorError;

const NAME_PATTERN: &str = r"(?:[A-Z][a-z]+ )+[A-Z][a-z]+";
const PLACE_PATTERN: &str = r"\b(?:in|at|from|to) ([A-Z][a-z]+(?: [A-Z][a-z]+)*)";
const DATE_PATTERN: &str = r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December) \d{1,2}(?:st|nd|rd|th)?, \d{4}\b";
const ORG_PATTERN: &str = r"(?:The )?[A-Z][a-z]+(?: [A-Z][a-z]+)*(?: Organization| Association| Company| Corporation| University| Institute| Government)";
const EVENT_PATTERN: &str = r"(?:The )?[A-Z][a-z]+(?: [A-Z][a-z]+)* (?:War|Battle|Revolution|Movement|Uprising|Conference|Treaty|Agreement|Accord)";

/// Badge shown on verified events.
pub const VERIFIED_BADGE: &str = "✓ Verified";

/// Display-ready pieces of an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattedEvent {
    /// Event text with entities in `**bold**`
    pub formatted_text: String,
    /// `*Source: ...*`
    pub source_info: String,
    /// Verification badge or empty
    pub verification: String,
    /// Extra details or empty
    pub details: String,
}

/// Regex-based named entity extraction and event formatting.
#[derive(Debug, Clone)]
pub struct EventFormatter {
    names: Regex,
    places: Regex,
    dates: Regex,
    orgs: Regex,
    events: Regex,
}

impl EventFormatter {
    pub fn new() -> Result<Self, CuratorError> {
        Ok(Self {
            names: Regex::new(NAME_PATTERN)?,
            places: Regex::new(PLACE_PATTERN)?,
            dates: Regex::new(DATE_PATTERN)?,
            orgs: Regex::new(ORG_PATTERN)?,
            events: Regex::new(EVENT_PATTERN)?,
        })
    }

    /// Extracts people, places, dates, organizations and named events.
    ///
    /// Duplicates are removed; the result is sorted longest first, then
    /// alphabetically.
    pub fn extract_entities(&self, text: &str) -> Vec<String> {
        let mut found: BTreeSet<&str> = BTreeSet::new();

        for regex in [&self.names, &self.dates, &self.orgs, &self.events] {
            found.extend(regex.find_iter(text).map(|m| m.as_str()));
        }
        found.extend(
            self.places
                .captures_iter(text)
                .filter_map(|c| c.get(1))
                .map(|m| m.as_str()),
        );

        let mut entities: Vec<String> = found.into_iter().map(str::to_string).collect();
        entities.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        entities
    }

    /// Wraps every entity occurrence in `**`.
    ///
    /// Longer entities claim their spans first; shorter entities inside an
    /// already bolded span are left alone.
    pub fn highlight(&self, text: &str) -> String {
        let mut claimed: Vec<Range<usize>> = Vec::new();
        for entity in self.extract_entities(text) {
            for (start, matched) in text.match_indices(entity.as_str()) {
                let span = start..start + matched.len();
                if !claimed.iter().any(|c| c.start < span.end && span.start < c.end) {
                    claimed.push(span);
                }
            }
        }
        claimed.sort_by_key(|r| r.start);

        let mut out = String::with_capacity(text.len() + claimed.len() * 4);
        let mut cursor = 0;
        for span in claimed {
            out.push_str(&text[cursor..span.start]);
            out.push_str("**");
            out.push_str(&text[span.clone()]);
            out.push_str("**");
            cursor = span.end;
        }
        out.push_str(&text[cursor..]);
        out
    }

    /// Splits an event into its display pieces.
    pub fn format_event(&self, event: &HistoricalEvent) -> FormattedEvent {
        if event.text.trim().is_empty() {
            return FormattedEvent::default();
        }

        FormattedEvent {
            formatted_text: self.highlight(&event.text),
            source_info: format!("*Source: {}*", event.source_or_default()),
            verification: if event.verified {
                VERIFIED_BADGE.to_string()
            } else {
                String::new()
            },
            details: event.details.clone().unwrap_or_default(),
        }
    }

    /// Renders an event card as Markdown.
    pub fn render_markdown(&self, event: &HistoricalEvent) -> String {
        let formatted = self.format_event(event);
        let category = event.category.unwrap_or(Category::Other);

        let mut footer = format!(
            "<span class='category-tag'><i class=\"{}\"></i> {}</span> {}",
            category.icon(),
            category,
            formatted.source_info
        );
        if !formatted.verification.is_empty() {
            footer.push(' ');
            footer.push_str(&formatted.verification);
        }

        let mut card = format!(
            "### {}\n{}\n\n{}\n",
            event.year, formatted.formatted_text, footer
        );
        if !formatted.details.is_empty() {
            card.push_str(&format!(
                "\n<details><summary>See more details</summary>\n\n{}\n\n</details>\n",
                formatted.details
            ));
        }
        card
    }
}
