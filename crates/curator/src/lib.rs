//! Curator: cross-source merging, categorization and ranking of historical
//! events for a single day.
//!
//! The curator takes the event lists reported by several sources for one
//! calendar day and turns them into a single ranked report.
//!
//! # Pipeline
//!
//! ```text
//! sources ─▶ validate ─▶ merge ─▶ relevance ─▶ recent window ─▶ categorize ─▶ category filter ─▶ DayReport
//! ```
//!
//! When nothing survives, the report falls back to the built-in sample
//! events for the day, filtered the same way.
//!
//! # Modules
//!
//! - [`sources`]: Source payload parsing and the sample events
//! - [`merge`]: Deduplication and cross-source verification
//! - [`categorize`]: Keyword and context-pattern categorization
//! - [`relevance`]: Relevance scoring and ranking
//! - [`format`]: Entity highlighting and Markdown event cards
//! - [`config`]: TOML configuration

pub mod categorize;
pub mod config;
pub mod error;
pub mod format;
pub mod merge;
pub mod relevance;
pub mod sources;

pub use categorize::Categorizer;
pub use config::{default_config_toml, CuratorConfig, FilterConfig, MergeConfig, RelevanceConfig};
pub use error::{ConfigError, CuratorError, SourceError};
pub use format::{EventFormatter, FormattedEvent, VERIFIED_BADGE};
pub use merge::{merge_and_verify, normalize_text, similarity};
pub use relevance::{apply_relevance, relevance_score, SIGNIFICANCE_KEYWORDS};
pub use sources::{load_source, parse_on_this_day, parse_wikipedia_events, sample_indian_events};

use history_events::{validate_event, Category, HistoricalEvent, MonthDay};
use serde::Serialize;

/// The curated events of one day.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    /// Day the events happened on, as `M/D`
    pub date: MonthDay,
    /// Wikipedia page for the day
    pub url: String,
    /// Events, most relevant first
    pub events: Vec<HistoricalEvent>,
    /// True when the events come from the built-in samples
    pub fallback: bool,
}

impl DayReport {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Runs the curation pipeline with one configuration.
#[derive(Debug, Clone)]
pub struct Curator {
    config: CuratorConfig,
    categorizer: Categorizer,
    formatter: EventFormatter,
}

impl Curator {
    /// Creates a curator, applying the configured category weights.
    pub fn new(config: CuratorConfig) -> Result<Self, CuratorError> {
        let categorizer = Categorizer::with_weights(&config.categories)?;
        let formatter = EventFormatter::new()?;
        Ok(Self {
            config,
            categorizer,
            formatter,
        })
    }

    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }

    pub fn categorizer(&self) -> &Categorizer {
        &self.categorizer
    }

    pub fn formatter(&self) -> &EventFormatter {
        &self.formatter
    }

    /// Curates the events reported by `sources` for `date`.
    ///
    /// `category` restricts the report to one category. `current_year`
    /// anchors anniversaries and the recent window.
    pub fn curate(
        &self,
        date: MonthDay,
        sources: Vec<Vec<HistoricalEvent>>,
        category: Option<Category>,
        current_year: i32,
    ) -> DayReport {
        let min_words = self.config.filter.min_words;
        let validated = sources.into_iter().map(|events| {
            let total = events.len();
            let valid: Vec<HistoricalEvent> = events
                .into_iter()
                .filter(|e| validate_event(e, min_words))
                .collect();
            if valid.len() < total {
                tracing::debug!(dropped = total - valid.len(), "dropped invalid events");
            }
            valid
        });

        let mut events = merge_and_verify(validated, &self.config.merge);
        apply_relevance(&mut events, current_year, &self.config.relevance);
        let events = self.refine(events, category, current_year);

        if !events.is_empty() {
            tracing::info!(%date, count = events.len(), "curated events");
            return self.report(date, events, false);
        }

        tracing::info!(%date, "no events survived, using samples");
        let samples = self.refine(sample_indian_events(date), category, current_year);
        self.report(date, samples, true)
    }

    /// Applies the recent window, fills in missing categories and
    /// applies the category filter.
    fn refine(
        &self,
        events: Vec<HistoricalEvent>,
        category: Option<Category>,
        current_year: i32,
    ) -> Vec<HistoricalEvent> {
        let filter = &self.config.filter;
        let cutoff = i64::from(current_year) - filter.recent_window_years;

        events
            .into_iter()
            .filter(|e| !filter.recent_only || e.year.sort_key() >= cutoff)
            .map(|mut e| {
                if e.category.is_none() {
                    e.category = Some(self.categorizer.categorize(&e.text));
                }
                e
            })
            .filter_map(|e| match category {
                Some(wanted) => self.restrict(e, wanted),
                None => Some(e),
            })
            .collect()
    }

    /// Keeps `event` only if it belongs to `wanted`.
    ///
    /// Indian History and Arts & Culture use the stricter topic detectors
    /// and rewrite the category of what they keep.
    fn restrict(&self, mut event: HistoricalEvent, wanted: Category) -> Option<HistoricalEvent> {
        let keep = match wanted {
            Category::IndianHistory => {
                self.categorizer.is_indian_event(&event.text)
                    && (event.category == Some(Category::IndianHistory)
                        || self.categorizer.categorize(&event.text) == Category::IndianHistory)
            }
            Category::Arts => {
                self.categorizer.is_arts_culture_event(&event.text)
                    || event.category == Some(Category::Arts)
            }
            other => event.category == Some(other),
        };
        if !keep {
            return None;
        }
        event.category = Some(wanted);
        Some(event)
    }

    fn report(&self, date: MonthDay, events: Vec<HistoricalEvent>, fallback: bool) -> DayReport {
        DayReport {
            date,
            url: format!("https://en.wikipedia.org/wiki/{}", date.wiki_title()),
            events,
            fallback,
        }
    }

    /// Renders a report as a Markdown document of event cards.
    pub fn render_markdown(&self, report: &DayReport) -> String {
        let mut out = format!(
            "## Events on {} {}\n\n[Wikipedia]({})\n",
            report.date.month_name(),
            report.date.day(),
            report.url
        );
        if report.fallback {
            out.push_str("\n*Showing sample events.*\n");
        }
        if report.events.is_empty() {
            out.push_str("\nNo events found.\n");
        }
        for event in &report.events {
            out.push('\n');
            out.push_str(&self.formatter.render_markdown(event));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use history_events::{fixtures, sources as source_names, Year};

    fn curator() -> Curator {
        Curator::new(CuratorConfig::default()).unwrap()
    }

    fn april_15() -> MonthDay {
        MonthDay::new(4, 15).unwrap()
    }

    fn fixture_sources() -> Vec<Vec<HistoricalEvent>> {
        vec![fixtures::wikipedia_events(), fixtures::on_this_day_events()]
    }

    #[test]
    fn test_curate_merges_and_ranks() {
        let report = curator().curate(april_15(), fixture_sources(), None, 2024);

        assert!(!report.fallback);
        assert_eq!(report.url, "https://en.wikipedia.org/wiki/April_15");
        assert_eq!(report.events.len(), 7);
        assert_eq!(report.events.iter().filter(|e| e.verified).count(), 2);
        assert!(report.events.iter().all(|e| e.category.is_some()));

        let scores: Vec<f32> = report
            .events
            .iter()
            .map(|e| e.relevance_score.unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_curate_drops_invalid_events() {
        let sources = vec![vec![
            HistoricalEvent::new(Year::new(1990), "Too short", source_names::WIKIPEDIA),
            HistoricalEvent::new(
                Year::new(1991),
                "<div class=\"mw-parser-output\">broken markup here</div>",
                source_names::WIKIPEDIA,
            ),
            HistoricalEvent::new(
                Year::new(1992),
                "A bridge opens to traffic over the river",
                source_names::WIKIPEDIA,
            ),
        ]];

        let report = curator().curate(april_15(), sources, None, 2024);

        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].year, Year::new(1992));
    }

    #[test]
    fn test_recent_only_window() {
        let mut config = CuratorConfig::default();
        config.filter.recent_only = true;
        config.filter.recent_window_years = 50;
        let curator = Curator::new(config).unwrap();

        let report = curator.curate(april_15(), fixture_sources(), None, 2024);

        let mut years: Vec<i64> = report.events.iter().map(|e| e.year.sort_key()).collect();
        years.sort();
        assert_eq!(years, vec![1989, 2013, 2019]);
    }

    #[test]
    fn test_existing_category_is_kept() {
        let sources = vec![vec![HistoricalEvent::new(
            Year::new(1992),
            "A bridge opens to traffic over the river",
            source_names::WIKIPEDIA,
        )
        .with_category(Category::Science)]];

        let report = curator().curate(april_15(), sources, None, 2024);
        assert_eq!(report.events[0].category, Some(Category::Science));
    }

    #[test]
    fn test_standard_category_filter() {
        let sources = vec![vec![
            HistoricalEvent::new(Year::new(1992), "A bridge opens to traffic today", "Wikipedia")
                .with_category(Category::Science),
            HistoricalEvent::new(Year::new(1993), "A stadium opens to the public today", "Wikipedia")
                .with_category(Category::Sports),
        ]];

        let report = curator().curate(april_15(), sources, Some(Category::Sports), 2024);

        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].year, Year::new(1993));
    }

    #[test]
    fn test_indian_history_filter_is_strict() {
        let sources = vec![vec![
            HistoricalEvent::new(
                Year::new(1950),
                "The Constitution of India comes into effect in New Delhi",
                "Wikipedia",
            ),
            HistoricalEvent::new(
                Year::new(1951),
                "The East India Company is dissolved by an act of Parliament",
                "Wikipedia",
            )
            .with_category(Category::IndianHistory),
        ]];

        let report = curator().curate(april_15(), sources, Some(Category::IndianHistory), 2024);

        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].year, Year::new(1950));
        assert_eq!(report.events[0].category, Some(Category::IndianHistory));
    }

    #[test]
    fn test_arts_filter_rewrites_category() {
        let sources = vec![vec![HistoricalEvent::new(
            Year::new(1990),
            "A new exhibition opens at the art museum",
            "Wikipedia",
        )
        .with_category(Category::Arts)]];

        let report = curator().curate(april_15(), sources, Some(Category::Arts), 2024);
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].category, Some(Category::Arts));
    }

    #[test]
    fn test_fallback_to_samples() {
        let date = MonthDay::new(8, 15).unwrap();
        let report = curator().curate(date, Vec::new(), None, 2024);

        assert!(report.fallback);
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].year, Year::new(1947));
        assert_eq!(report.events[0].source, source_names::INDIAN_ARCHIVES);
    }

    #[test]
    fn test_fallback_is_filtered_too() {
        let date = MonthDay::new(8, 15).unwrap();
        let report = curator().curate(date, Vec::new(), Some(Category::Sports), 2024);

        assert!(report.fallback);
        assert!(report.is_empty());
    }

    #[test]
    fn test_fallback_without_samples_is_empty() {
        let report = curator().curate(
            april_15(),
            fixture_sources(),
            Some(Category::IndianHistory),
            2024,
        );
        assert!(report.fallback);
        assert!(report.is_empty());
    }

    #[test]
    fn test_render_markdown() {
        let curator = curator();
        let report = curator.curate(april_15(), fixture_sources(), None, 2024);

        let markdown = curator.render_markdown(&report);

        assert!(markdown.starts_with("## Events on April 15\n"));
        assert_eq!(markdown.matches("### ").count(), 7);
        assert_eq!(markdown.matches(VERIFIED_BADGE).count(), 2);
    }

    #[test]
    fn test_render_empty_report() {
        let curator = curator();
        let report = curator.curate(april_15(), Vec::new(), None, 2024);
        let markdown = curator.render_markdown(&report);
        assert!(markdown.contains("*Showing sample events.*"));
        assert!(markdown.contains("No events found."));
    }

    #[test]
    fn test_report_serializes_date_as_string() {
        let report = curator().curate(MonthDay::new(8, 15).unwrap(), Vec::new(), None, 2024);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["date"], "8/15");
        assert_eq!(json["fallback"], true);
    }
}
