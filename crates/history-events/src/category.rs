//! Event Categories
//!
//! The fixed set of topics a historical event can be filed under.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Topic category of a historical event.
///
/// Serializes to the display name (`"War & Conflict"`). Unknown names
/// deserialize to [`Category::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Politics,
    War,
    Science,
    Arts,
    Sports,
    Medicine,
    IndianHistory,
    Disasters,
    Other,
}

impl Category {
    /// All categories in scoring order. Earlier entries win score ties.
    pub fn all() -> &'static [Category] {
        &[
            Category::Politics,
            Category::War,
            Category::Science,
            Category::Arts,
            Category::Sports,
            Category::Medicine,
            Category::IndianHistory,
            Category::Disasters,
            Category::Other,
        ]
    }

    /// Human-readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Politics => "Politics & Government",
            Category::War => "War & Conflict",
            Category::Science => "Science & Technology",
            Category::Arts => "Arts & Culture",
            Category::Sports => "Sports & Recreation",
            Category::Medicine => "Medicine & Health",
            Category::IndianHistory => "Indian History",
            Category::Disasters => "Disasters & Accidents",
            Category::Other => "Other Historical Events",
        }
    }

    /// Font Awesome icon class shown next to the category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Politics => "fas fa-landmark",
            Category::War => "fas fa-fighter-jet",
            Category::Science => "fas fa-microscope",
            Category::Arts => "fas fa-palette",
            Category::Sports => "fas fa-trophy",
            Category::Medicine => "fas fa-heartbeat",
            Category::IndianHistory => "fas fa-om",
            Category::Disasters => "fas fa-exclamation-triangle",
            Category::Other => "fas fa-history",
        }
    }

    /// Categories whose assignment survives a merge with a differently
    /// categorized duplicate.
    pub fn is_sticky(&self) -> bool {
        matches!(self, Category::IndianHistory | Category::Arts)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a category name is not recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Matches the display name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(Category::Other))
    }
}
