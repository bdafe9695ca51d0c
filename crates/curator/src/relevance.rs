//! Relevance scoring.
//!
//! Ranks the events of a day by how notable they are likely to be:
//! verification, significance keywords, round anniversaries and the
//! length of the description all raise the score.

use history_events::HistoricalEvent;

use crate::config::RelevanceConfig;

/// Words that mark an event as historically significant.
pub const SIGNIFICANCE_KEYWORDS: &[&str] = &[
    "revolution", "war", "independence", "discovery", "invention", "founded", "established",
    "treaty", "agreement", "disaster", "catastrophe", "pandemic", "epidemic", "assassination",
    "coronation", "inauguration", "landmark", "breakthrough", "milestone", "turning point",
    "pivotal", "historic",
];

/// Computes the relevance score of a single event.
pub fn relevance_score(event: &HistoricalEvent, current_year: i32, config: &RelevanceConfig) -> f32 {
    let mut score = 1.0f32;

    if event.verified {
        score *= config.verified;
    }

    let text_lower = event.text.to_lowercase();
    if SIGNIFICANCE_KEYWORDS.iter().any(|k| text_lower.contains(k)) {
        score *= config.significance;
    }

    // Only bare years count; "1066 AD" and "44 BC" get no anniversary bonus.
    if event.year.era.is_none() && config.anniversary_step > 0 {
        let years_ago = event.year.years_before(current_year);
        if years_ago > 0
            && years_ago % config.anniversary_step == 0
            && years_ago <= config.anniversary_horizon
        {
            score *= 1.5 - years_ago as f32 / 400.0;
        }
    }

    let length = event.text.chars().count();
    if length > config.long_text_chars {
        score *= config.long_text;
    } else if length > config.medium_text_chars {
        score *= config.medium_text;
    }

    score
}

/// Scores every event and sorts them by score, highest first.
///
/// Events with equal scores keep their relative order.
pub fn apply_relevance(events: &mut [HistoricalEvent], current_year: i32, config: &RelevanceConfig) {
    for event in events.iter_mut() {
        event.relevance_score = Some(relevance_score(event, current_year, config));
    }
    events.sort_by(|a, b| {
        let a = a.relevance_score.unwrap_or(0.0);
        let b = b.relevance_score.unwrap_or(0.0);
        b.total_cmp(&a)
    });
}
