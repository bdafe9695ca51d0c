//! Event Years
//!
//! Years as they appear in historical sources: `"1947"`, `"44 BC"`,
//! `"300 BCE"`, `"1066 AD"`.
//!
//! # Example
//!
//! ```
//! use history_events::{Era, Year};
//!
//! let year: Year = "44 BC".parse().unwrap();
//! assert_eq!(year.number, 44);
//! assert_eq!(year.era, Some(Era::Bc));
//! assert_eq!(year.sort_key(), -44);
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Largest year number accepted (four digits).
pub const MAX_YEAR_NUMBER: u32 = 9999;

/// Era suffix attached to a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Bc,
    Bce,
    Ad,
    Ce,
}

impl Era {
    /// Returns true for eras counted backwards from year 1.
    pub fn is_before_common_era(self) -> bool {
        matches!(self, Era::Bc | Era::Bce)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Era::Bc => "BC",
            Era::Bce => "BCE",
            Era::Ad => "AD",
            Era::Ce => "CE",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Era {
    type Err = ParseYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BC" => Ok(Era::Bc),
            "BCE" => Ok(Era::Bce),
            "AD" => Ok(Era::Ad),
            "CE" => Ok(Era::Ce),
            _ => Err(ParseYearError::InvalidEra(s.to_string())),
        }
    }
}

/// A calendar year with an optional era.
///
/// Serializes to the display form (`"1947"`, `"44 BC"`). Deserializes from
/// either a string or a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Year {
    pub number: u32,
    pub era: Option<Era>,
}

impl Year {
    /// Creates a common-era year without a suffix.
    pub fn new(number: u32) -> Self {
        Self { number, era: None }
    }

    /// Creates a year with an explicit era.
    pub fn with_era(number: u32, era: Era) -> Self {
        Self {
            number,
            era: Some(era),
        }
    }

    pub fn is_before_common_era(&self) -> bool {
        self.era.map(Era::is_before_common_era).unwrap_or(false)
    }

    /// Signed ordering key: negative for BC/BCE years.
    pub fn sort_key(&self) -> i64 {
        if self.is_before_common_era() {
            -(self.number as i64)
        } else {
            self.number as i64
        }
    }

    /// Years elapsed between this year and `current_year`.
    ///
    /// Negative when the year lies in the future.
    pub fn years_before(&self, current_year: i32) -> i64 {
        current_year as i64 - self.sort_key()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.era {
            Some(era) => write!(f, "{} {}", self.number, era),
            None => write!(f, "{}", self.number),
        }
    }
}

/// Error type for parsing a Year from a string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseYearError {
    Empty,
    InvalidNumber(String),
    InvalidEra(String),
}

impl fmt::Display for ParseYearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseYearError::Empty => write!(f, "empty year"),
            ParseYearError::InvalidNumber(s) => {
                write!(f, "invalid year: '{}', expected 1 to 4 digits", s)
            }
            ParseYearError::InvalidEra(s) => {
                write!(f, "invalid era: '{}', expected BC, BCE, AD or CE", s)
            }
        }
    }
}

impl std::error::Error for ParseYearError {}

impl FromStr for Year {
    type Err = ParseYearError;

    /// Parses `"1947"`, `"44 BC"` or `"44BC"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseYearError::Empty);
        }

        let digits_end = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let digits = &s[..digits_end];
        if digits.is_empty() || digits.len() > 4 {
            return Err(ParseYearError::InvalidNumber(s.to_string()));
        }
        let number = digits
            .parse::<u32>()
            .map_err(|_| ParseYearError::InvalidNumber(s.to_string()))?;

        let rest = s[digits_end..].trim_start();
        let era = if rest.is_empty() {
            None
        } else {
            Some(rest.parse::<Era>()?)
        };

        Ok(Year { number, era })
    }
}

impl Serialize for Year {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct YearVisitor;

        impl<'de> Visitor<'de> for YearVisitor {
            type Value = Year;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a year string like \"1947\" or \"44 BC\", or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Year, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Year, E> {
                if v > MAX_YEAR_NUMBER as u64 {
                    return Err(E::custom(ParseYearError::InvalidNumber(v.to_string())));
                }
                Ok(Year::new(v as u32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Year, E> {
                if v < 0 {
                    let n = v.unsigned_abs();
                    if n > MAX_YEAR_NUMBER as u64 {
                        return Err(E::custom(ParseYearError::InvalidNumber(v.to_string())));
                    }
                    return Ok(Year::with_era(n as u32, Era::Bc));
                }
                self.visit_u64(v as u64)
            }
        }

        deserializer.deserialize_any(YearVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_year() {
        let year: Year = "1947".parse().unwrap();
        assert_eq!(year, Year::new(1947));
        assert_eq!(year.sort_key(), 1947);
        assert!(!year.is_before_common_era());
    }

    #[test]
    fn test_parse_era_suffixes() {
        assert_eq!("44 BC".parse::<Year>().unwrap(), Year::with_era(44, Era::Bc));
        assert_eq!("300BCE".parse::<Year>().unwrap(), Year::with_era(300, Era::Bce));
        assert_eq!("1066 AD".parse::<Year>().unwrap(), Year::with_era(1066, Era::Ad));
        assert_eq!(" 5 CE ".parse::<Year>().unwrap(), Year::with_era(5, Era::Ce));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Year>(), Err(ParseYearError::Empty));
        assert!(matches!(
            "12345".parse::<Year>(),
            Err(ParseYearError::InvalidNumber(_))
        ));
        assert!(matches!(
            "c. 1500".parse::<Year>(),
            Err(ParseYearError::InvalidNumber(_))
        ));
        assert!(matches!(
            "1500s".parse::<Year>(),
            Err(ParseYearError::InvalidEra(_))
        ));
    }

    #[test]
    fn test_bc_sorts_before_ad() {
        let bc: Year = "500 BC".parse().unwrap();
        let ad: Year = "5".parse().unwrap();
        assert!(bc.sort_key() < ad.sort_key());
    }

    #[test]
    fn test_years_before() {
        assert_eq!(Year::new(1947).years_before(2022), 75);
        assert_eq!(Year::with_era(44, Era::Bc).years_before(2000), 2044);
        assert_eq!(Year::new(2030).years_before(2025), -5);
    }

    #[test]
    fn test_display_normalizes_spacing() {
        let year: Year = "44BC".parse().unwrap();
        assert_eq!(year.to_string(), "44 BC");
    }

    #[test]
    fn test_serde_accepts_strings_and_integers() {
        assert_eq!(serde_json::from_str::<Year>(r#""1969""#).unwrap(), Year::new(1969));
        assert_eq!(serde_json::from_str::<Year>("1969").unwrap(), Year::new(1969));
        assert_eq!(
            serde_json::from_str::<Year>("-44").unwrap(),
            Year::with_era(44, Era::Bc)
        );
        assert!(serde_json::from_str::<Year>("123456").is_err());
        assert_eq!(serde_json::to_string(&Year::with_era(44, Era::Bc)).unwrap(), r#""44 BC""#);
    }
}
