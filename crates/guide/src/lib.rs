//! Implementation guide printer.
//!
//! Writes a fixed, ordered walkthrough of how a multi-source "on this day"
//! events feature is put together: numbered sections with bullet lists and
//! reference snippets. The output is byte-identical on every run.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> std::io::Result<()> {
//! let mut out = Vec::new();
//! let status = guide::write_guide(&mut out).await?;
//! assert_eq!(status, guide::GUIDE_COMPLETE);
//! # Ok(())
//! # }
//! ```

use std::io::{self, Write};

/// Title line of the guide.
pub const TITLE: &str = "Enhanced Historical Events API - Implementation Guide";

/// Underline printed below the title, one character short of it.
pub const UNDERLINE: &str = "====================================================";

/// Value returned once the whole guide has been written.
pub const GUIDE_COMPLETE: &str = "Implementation guide generated successfully";

/// Closing line printed after the guide.
pub const READY_MESSAGE: &str = "\nReady to implement in your Streamlit application!";

/// Day used in the walkthrough.
pub const DEMO_MONTH: u8 = 4;
pub const DEMO_DAY: u8 = 15;

/// Body of a guide section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody {
    /// Bullet points, indented under the section title
    Bullets(&'static [&'static str]),
    /// Reference code, printed verbatim
    Snippet(&'static str),
}

/// One numbered section of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub number: u8,
    pub title: &'static str,
    pub body: SectionBody,
}

impl Section {
    /// Header line, e.g. `"3. WIKIPEDIA API IMPLEMENTATION (Python)"`.
    pub fn header(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    /// Bullets line up with the first letter of the title.
    fn bullet_indent(&self) -> usize {
        self.number.to_string().len() + 2
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", self.header())?;
        match self.body {
            SectionBody::Bullets(items) => {
                let indent = self.bullet_indent();
                for item in items {
                    writeln!(out, "{:indent$}- {}", "", item, indent = indent)?;
                }
            }
            SectionBody::Snippet(code) => writeln!(out, "\n{}  ", code)?,
        }
        Ok(())
    }
}

/// The guide's sections, in print order.
pub const SECTIONS: [Section; 10] = [
    Section {
        number: 1,
        title: "MULTI-SOURCE DATA FETCHING STRATEGY",
        body: SectionBody::Bullets(&[
            "Primary source: Wikipedia API",
            "Secondary source: History.com API equivalent",
            "Tertiary source: On This Day API",
            "Verification: Cross-reference events across sources",
        ]),
    },
    Section {
        number: 2,
        title: "DATA FILTERING AND PROCESSING",
        body: SectionBody::Bullets(&[
            "Filter events from last 100 years only (1924-present)",
            "Deduplicate events found in multiple sources",
            "Add source attribution for verification",
            "Categorize events into predefined categories",
            "Extract key entities and dates for better search",
        ]),
    },
    Section {
        number: 3,
        title: "WIKIPEDIA API IMPLEMENTATION (Python)",
        body: SectionBody::Snippet(include_str!("../snippets/wikipedia.py")),
    },
    Section {
        number: 4,
        title: "ON THIS DAY API IMPLEMENTATION (Python)",
        body: SectionBody::Snippet(include_str!("../snippets/on_this_day.py")),
    },
    Section {
        number: 5,
        title: "MERGE AND VERIFY EVENTS IMPLEMENTATION (Python)",
        body: SectionBody::Snippet(include_str!("../snippets/merge_and_verify.py")),
    },
    Section {
        number: 6,
        title: "ENHANCED CATEGORIZATION IMPLEMENTATION (Python)",
        body: SectionBody::Snippet(include_str!("../snippets/categorize.py")),
    },
    Section {
        number: 7,
        title: "CONTENT FORMATTING ENHANCEMENTS (Python)",
        body: SectionBody::Snippet(include_str!("../snippets/format_event.py")),
    },
    Section {
        number: 8,
        title: "STREAMLIT INTEGRATION",
        body: SectionBody::Snippet(include_str!("../snippets/event_card.py")),
    },
    Section {
        number: 9,
        title: "IMPLEMENTATION SUMMARY",
        body: SectionBody::Bullets(&[
            "Replace the existing fetch_historical_events() function with the enhanced version",
            "Add the new helper functions for Wikipedia and On This Day API integration",
            "Implement the merge_and_verify_events() function to combine data from multiple sources",
            "Enhance the categorize_event() function with weighted scoring",
            "Update the display_event_card() function with improved formatting",
            "Add entity extraction and highlighting for better readability",
            "Implement source attribution and verification indicators",
        ]),
    },
    Section {
        number: 10,
        title: "PERFORMANCE CONSIDERATIONS",
        body: SectionBody::Bullets(&[
            "Use caching aggressively to minimize API calls",
            "Implement parallel fetching from multiple sources",
            "Use background processing for data enrichment",
            "Optimize entity extraction for performance",
            "Consider implementing a local cache for frequently accessed dates",
        ]),
    },
];

/// Writes the title block and every section to `out`.
///
/// Returns [`GUIDE_COMPLETE`] once everything is written. Write errors
/// are returned as they happen; nothing is retried.
pub async fn write_guide<W: Write>(out: &mut W) -> io::Result<&'static str> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", UNDERLINE)?;
    writeln!(
        out,
        "\nFetching historical events for {}/{} from multiple sources...",
        DEMO_MONTH, DEMO_DAY
    )?;

    for section in &SECTIONS {
        tracing::debug!(section = section.number, "writing section");
        section.write_to(out)?;
    }

    out.flush()?;
    Ok(GUIDE_COMPLETE)
}

/// Runs the guide to completion and writes the closing line.
pub async fn run<W: Write>(out: &mut W) -> io::Result<&'static str> {
    let status = write_guide(out).await?;
    writeln!(out, "{}", READY_MESSAGE)?;
    out.flush()?;
    Ok(status)
}
