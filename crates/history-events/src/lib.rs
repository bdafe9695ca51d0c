//! Shared historical event types.
//!
//! This crate contains pure data structures with no processing logic.
//! It is a dependency for the other crates in the workspace.

pub mod category;
pub mod date;
pub mod event;
pub mod year;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use category::{Category, ParseCategoryError};
pub use date::{MonthDay, ParseMonthDayError, MONTH_NAMES};
pub use event::{sources, validate_event, HistoricalEvent, SOURCE_SEPARATOR};
pub use year::{Era, ParseYearError, Year, MAX_YEAR_NUMBER};
