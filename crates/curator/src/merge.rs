//! Cross-source merging and verification.
//!
//! Events reported by several sources are collapsed into one record. A
//! record confirmed by a second, different source is marked verified and
//! carries both attributions.

use history_events::HistoricalEvent;
use std::collections::HashSet;

use crate::config::MergeConfig;

/// Words ignored when building dedup keys.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "in", "on", "at", "by", "for", "with", "and", "or", "of",
];

/// Normalizes event text for matching.
///
/// Lowercases, strips punctuation, drops stop words, collapses whitespace
/// and truncates to `max_chars` characters.
pub fn normalize_text(text: &str, max_chars: usize) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    let joined = stripped
        .split_whitespace()
        .filter(|w| !STOP_WORDS.contains(w))
        .collect::<Vec<_>>()
        .join(" ");
    joined.chars().take(max_chars).collect()
}

/// Jaccard similarity of the whitespace-separated word sets.
///
/// Returns 0.0 when both texts are empty.
pub fn similarity(a: &str, b: &str) -> f32 {
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();
    let union = words_a.union(&words_b).count();
    if union == 0 {
        return 0.0;
    }
    words_a.intersection(&words_b).count() as f32 / union as f32
}

/// An event being accumulated during a merge, with its match key.
struct MergeEntry {
    year_key: i64,
    text_key: String,
    event: HistoricalEvent,
}

/// Merges per-source event lists into one deduplicated list.
///
/// Events with an empty text are skipped. Two events are the same when
/// their years match and their normalized texts are identical or more
/// similar than `config.similarity_threshold`. The result is sorted by
/// year, newest first; equal years keep first-seen order.
pub fn merge_and_verify<I>(lists: I, config: &MergeConfig) -> Vec<HistoricalEvent>
where
    I: IntoIterator<Item = Vec<HistoricalEvent>>,
{
    let mut entries: Vec<MergeEntry> = Vec::new();
    let mut skipped = 0usize;
    let mut merged = 0usize;

    for event in lists.into_iter().flatten() {
        if event.text.trim().is_empty() {
            skipped += 1;
            continue;
        }

        let text_key = normalize_text(&event.text, config.key_length);
        let year_key = event.year.sort_key();

        let existing = entries.iter_mut().find(|entry| {
            entry.year_key == year_key
                && (entry.text_key == text_key
                    || similarity(&entry.text_key, &text_key) > config.similarity_threshold)
        });

        match existing {
            Some(entry) => {
                merged += 1;
                absorb(&mut entry.event, event);
            }
            None => entries.push(MergeEntry {
                year_key,
                text_key,
                event,
            }),
        }
    }

    tracing::debug!(
        kept = entries.len(),
        merged,
        skipped,
        "merged events from all sources"
    );

    let mut events: Vec<HistoricalEvent> = entries.into_iter().map(|e| e.event).collect();
    // Stable sort keeps first-seen order within a year.
    events.sort_by(|a, b| b.year.sort_key().cmp(&a.year.sort_key()));
    events
}

/// Folds a duplicate into the record that was seen first.
fn absorb(existing: &mut HistoricalEvent, incoming: HistoricalEvent) {
    if existing.source == incoming.source {
        return;
    }

    existing.verified = true;
    existing.add_sources(&incoming.source);

    if incoming.text.chars().count() > existing.text.chars().count() {
        existing.text = incoming.text;
    }

    if let Some(category) = incoming.category.filter(|c| c.is_sticky()) {
        existing.category = Some(category);
    }

    if existing.details.is_none() {
        existing.details = incoming.details;
    }
}
