//! LeaseDate value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual form used throughout the intake form: day-month-year.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Shape check before the calendar parse, so `1.1.2024` is rejected even
/// though chrono would accept it.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("date pattern is valid"));

/// A calendar date carried in `DD.MM.YYYY` textual form.
///
/// Construction validates both the shape and calendar validity, so
/// `31.02.2024` is rejected. Ordering compares calendar dates, never the
/// text.
///
/// # Example
///
/// ```
/// use lease_leads::domain::LeaseDate;
///
/// let start = LeaseDate::parse("01.06.2024").unwrap();
/// let end = LeaseDate::parse("01.07.2024").unwrap();
/// assert!(end > start);
/// assert_eq!(start.to_string(), "01.06.2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeaseDate(NaiveDate);

impl LeaseDate {
    /// Parse a `DD.MM.YYYY` string into a LeaseDate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string is not
    /// two-digit day, two-digit month, four-digit year, or does not name
    /// a real calendar date.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE.is_match(text) {
            return Err(ValidationError::InvalidDate(text.to_string()));
        }

        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(text.to_string()))
    }

    /// Whether a string is a valid `DD.MM.YYYY` calendar date.
    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize back to the DD.MM.YYYY form
impl Serialize for LeaseDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for LeaseDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LeaseDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for LeaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
