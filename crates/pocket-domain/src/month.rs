//! Calendar month keys and the single date-parsing entry point.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Three-letter labels indexed by zero-based month of year.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Failure raised when a stored date or month key cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date is empty")]
    Empty,
    #[error("unrecognised date `{0}`")]
    Invalid(String),
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),
}

/// Parses a persisted entry date into a calendar date.
///
/// Accepts plain `YYYY-MM-DD` dates, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps. Only the calendar part is kept.
pub fn parse_entry_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DateParseError::Empty);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(stamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(stamp.date());
        }
    }
    Err(DateParseError::Invalid(value.to_string()))
}

/// Calendar `(year, month)` pair used to group entries, formatted as `YYYY-MM`.
///
/// Ordering is calendar order, which matches the lexicographic order of the
/// zero-padded string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Builds a key from a year and a one-based month.
    pub fn new(year: i32, month: u32) -> Result<Self, DateParseError> {
        if !(1..=12).contains(&month) {
            return Err(DateParseError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Builds a key from a year and a zero-based month index (0 = January).
    pub fn from_index(year: i32, month_index: u32) -> Result<Self, DateParseError> {
        Self::new(year, month_index + 1)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// One-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-based month-of-year index.
    pub fn month_index(&self) -> usize {
        (self.month - 1) as usize
    }

    /// Numeric form `year * 100 + month`, sortable like the string form.
    pub fn as_number(&self) -> i64 {
        i64::from(self.year) * 100 + i64::from(self.month)
    }

    pub fn short_label(&self) -> &'static str {
        MONTH_LABELS[self.month_index()]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the `count` calendar months ending with the month of `today`, oldest first.
    pub fn trailing(today: NaiveDate, count: usize) -> Vec<MonthKey> {
        let mut keys = Vec::with_capacity(count);
        let mut cursor = Self::from_date(today);
        for _ in 0..count {
            keys.push(cursor);
            cursor = cursor.previous();
        }
        keys.reverse();
        keys
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = DateParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DateParseError::Empty);
        }
        let (year, month) = trimmed
            .split_once('-')
            .ok_or_else(|| DateParseError::Invalid(trimmed.to_string()))?;
        if month.len() != 2 {
            return Err(DateParseError::Invalid(trimmed.to_string()));
        }
        let year = year
            .parse::<i32>()
            .map_err(|_| DateParseError::Invalid(trimmed.to_string()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| DateParseError::Invalid(trimmed.to_string()))?;
        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_with_zero_padded_month() {
        let key = MonthKey::from_date(date(2024, 3, 17));
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!(key.as_number(), 202403);
        assert_eq!(key.short_label(), "Mar");
    }

    #[test]
    fn ordering_matches_calendar_order() {
        let dec = MonthKey::new(2023, 12).unwrap();
        let jan = MonthKey::new(2024, 1).unwrap();
        let oct = MonthKey::new(2024, 10).unwrap();
        assert!(dec < jan);
        assert!(jan < oct);
        assert!(dec.to_string() < jan.to_string());
        assert!(jan.to_string() < oct.to_string());
    }

    #[test]
    fn same_month_different_day_collapses() {
        assert_eq!(
            MonthKey::from_date(date(2024, 2, 1)),
            MonthKey::from_date(date(2024, 2, 29))
        );
    }

    #[test]
    fn parses_and_rejects_month_keys() {
        assert_eq!("2024-07".parse::<MonthKey>(), MonthKey::new(2024, 7));
        assert_eq!(
            "2024-13".parse::<MonthKey>(),
            Err(DateParseError::MonthOutOfRange(13))
        );
        assert!("2024-7".parse::<MonthKey>().is_err());
        assert!("July".parse::<MonthKey>().is_err());
        assert_eq!("".parse::<MonthKey>(), Err(DateParseError::Empty));
    }

    #[test]
    fn from_index_uses_zero_based_months() {
        let key = MonthKey::from_index(2024, 0).unwrap();
        assert_eq!(key.month(), 1);
        assert!(MonthKey::from_index(2024, 12).is_err());
    }

    #[test]
    fn previous_and_next_wrap_years() {
        let jan = MonthKey::new(2024, 1).unwrap();
        assert_eq!(jan.previous(), MonthKey::new(2023, 12).unwrap());
        assert_eq!(jan.previous().next(), jan);
    }

    #[test]
    fn trailing_window_ends_at_today() {
        let keys = MonthKey::trailing(date(2024, 2, 10), 3);
        let labels: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["2023-12", "2024-01", "2024-02"]);
        assert!(MonthKey::trailing(date(2024, 2, 10), 0).is_empty());
    }

    #[test]
    fn parses_supported_date_shapes() {
        assert_eq!(parse_entry_date("2024-01-10"), Ok(date(2024, 1, 10)));
        assert_eq!(
            parse_entry_date("2024-01-10T08:30:00Z"),
            Ok(date(2024, 1, 10))
        );
        assert_eq!(
            parse_entry_date("2024-01-10T08:30:00.250"),
            Ok(date(2024, 1, 10))
        );
        assert_eq!(parse_entry_date("  "), Err(DateParseError::Empty));
        assert_eq!(
            parse_entry_date("not a date"),
            Err(DateParseError::Invalid("not a date".into()))
        );
        assert!(parse_entry_date("2024-02-30").is_err());
    }

    #[test]
    fn month_key_serializes_as_string() {
        let key = MonthKey::new(2024, 5).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-05\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
