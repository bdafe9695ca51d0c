//! Source payload parsing.
//!
//! Turns raw payloads from the public "on this day" services into
//! [`HistoricalEvent`] lists. Fetching is left to the caller; this module
//! only reads what has already been downloaded.

use history_events::{sources, Category, HistoricalEvent, MonthDay, Year};
use serde::Deserialize;
use std::path::Path;

use crate::error::SourceError;

/// Payload of `https://byabbe.se/on-this-day/{month}/{day}/events.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct OnThisDayPayload {
    pub events: Vec<OnThisDayEntry>,
}

/// One entry of an On This Day payload.
#[derive(Debug, Clone, Deserialize)]
pub struct OnThisDayEntry {
    pub year: String,
    pub description: String,
}

/// Parses an On This Day payload, keeping events from `min_year` onwards.
///
/// Entries with unparseable years are skipped.
pub fn parse_on_this_day(json: &str, min_year: i64) -> Result<Vec<HistoricalEvent>, SourceError> {
    let payload: OnThisDayPayload = serde_json::from_str(json)?;
    Ok(on_this_day_events(payload, min_year))
}

fn on_this_day_events(payload: OnThisDayPayload, min_year: i64) -> Vec<HistoricalEvent> {
    payload
        .events
        .into_iter()
        .filter_map(|entry| match entry.year.parse::<Year>() {
            Ok(year) => Some(HistoricalEvent::new(
                year,
                entry.description.trim(),
                sources::ON_THIS_DAY,
            )),
            Err(e) => {
                tracing::debug!(year = %entry.year, %e, "skipping On This Day entry");
                None
            }
        })
        .filter(|event| event.year.sort_key() >= min_year)
        .collect()
}

/// Splits `"1945 – text"` into its year and body.
fn split_year_line(line: &str) -> Option<(u32, &str)> {
    let line = line.trim();
    let digits = line.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rest = line[4..].trim_start();
    let rest = rest
        .strip_prefix('–')
        .or_else(|| rest.strip_prefix('-'))
        .unwrap_or(rest);
    Some((digits.parse().ok()?, rest.trim()))
}

/// Parses the text of the list items under a Wikipedia date page's
/// "Events" heading, one item per line (`"1945 – text"`).
///
/// Lines that do not start with a four-digit year are ignored, as are
/// events before `min_year`.
pub fn parse_wikipedia_events(text: &str, min_year: i64) -> Vec<HistoricalEvent> {
    text.lines()
        .filter_map(split_year_line)
        .filter(|(year, body)| !body.is_empty() && i64::from(*year) >= min_year)
        .map(|(year, body)| HistoricalEvent::new(Year::new(year), body, sources::WIKIPEDIA))
        .collect()
}

/// Parses event records serialized as a JSON array or as JSON lines.
///
/// Records are kept as they are; no year cutoff is applied.
pub fn parse_event_records(content: &str) -> Result<Vec<HistoricalEvent>, SourceError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            HistoricalEvent::from_jsonl(line).map_err(|e| SourceError::InvalidLine {
                line: i + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Parses any supported payload.
///
/// A JSON object with an `events` array is an On This Day payload; a JSON
/// array or JSON lines are event records.
pub fn parse_payload(content: &str, min_year: i64) -> Result<Vec<HistoricalEvent>, SourceError> {
    if content.trim_start().starts_with('{') {
        if let Ok(payload) = serde_json::from_str::<OnThisDayPayload>(content) {
            return Ok(on_this_day_events(payload, min_year));
        }
    }
    parse_event_records(content)
}

/// Loads one source file.
///
/// `.txt` files hold Wikipedia list lines; everything else goes through
/// [`parse_payload`].
pub fn load_source(path: &Path, min_year: i64) -> Result<Vec<HistoricalEvent>, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let events = match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => parse_wikipedia_events(&content, min_year),
        _ => parse_payload(&content, min_year)?,
    };
    tracing::info!(path = %path.display(), count = events.len(), "loaded source");
    Ok(events)
}

/// Built-in Indian history events for a handful of dates.
pub fn sample_indian_events(date: MonthDay) -> Vec<HistoricalEvent> {
    let entries: &[(u32, &str)] = match (date.month(), date.day()) {
        (1, 26) => &[(
            1950,
            "The Constitution of India came into effect, marking the country's transition to a republic. This day is celebrated as Republic Day in India.",
        )],
        (1, 30) => &[(
            1948,
            "Mahatma Gandhi was assassinated by Nathuram Godse at Birla House in Delhi during his evening prayers.",
        )],
        (8, 15) => &[(
            1947,
            "India gained independence from British rule after nearly 200 years of colonial rule. Jawaharlal Nehru became the first Prime Minister.",
        )],
        (10, 2) => &[(
            1869,
            "Mohandas Karamchand Gandhi, leader of India's independence movement, was born in Porbandar, Gujarat.",
        )],
        _ => &[],
    };

    entries
        .iter()
        .map(|(year, text)| {
            HistoricalEvent::new(Year::new(*year), *text, sources::INDIAN_ARCHIVES)
                .with_category(Category::IndianHistory)
                .verified()
        })
        .collect()
}
