//! Day-of-year keys used to look up "on this day" events.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Days per month; February allows the 29th.
const DAYS_IN_MONTH: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A month and day without a year.
///
/// Displays and serializes as `"M/D"` (e.g. `"4/15"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Creates a validated month/day pair.
    pub fn new(month: u8, day: u8) -> Result<Self, ParseMonthDayError> {
        if !(1..=12).contains(&month) {
            return Err(ParseMonthDayError::InvalidMonth(month.to_string()));
        }
        if day == 0 || day > DAYS_IN_MONTH[month as usize - 1] {
            return Err(ParseMonthDayError::InvalidDay { month, day });
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// Title of the Wikipedia date page, e.g. `"April_15"`.
    pub fn wiki_title(&self) -> String {
        format!("{}_{}", self.month_name(), self.day)
    }

    /// Key used by the sample-data tables, e.g. `"4_15"`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.month, self.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

/// Error type for parsing a MonthDay.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseMonthDayError {
    InvalidFormat(String),
    InvalidMonth(String),
    InvalidDay { month: u8, day: u8 },
}

impl fmt::Display for ParseMonthDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMonthDayError::InvalidFormat(s) => {
                write!(f, "invalid date: '{}', expected 'M/D'", s)
            }
            ParseMonthDayError::InvalidMonth(s) => write!(f, "invalid month: '{}'", s),
            ParseMonthDayError::InvalidDay { month, day } => {
                write!(f, "invalid day {} for month {}", day, month)
            }
        }
    }
}

impl std::error::Error for ParseMonthDayError {}

impl FromStr for MonthDay {
    type Err = ParseMonthDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| ParseMonthDayError::InvalidFormat(s.to_string()))?;
        let month = month
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseMonthDayError::InvalidMonth(month.to_string()))?;
        let day = day
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseMonthDayError::InvalidFormat(s.to_string()))?;
        MonthDay::new(month, day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
