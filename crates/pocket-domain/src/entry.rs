//! Financial entries shared by expenses, incomes and savings deposits.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::common::*;
use crate::month::{parse_entry_date, DateParseError, MonthKey};

/// Distinguishes the three collections an entry can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Expense,
    Income,
    Deposit,
}

impl EntryKind {
    pub const ALL: [EntryKind; 3] = [EntryKind::Expense, EntryKind::Income, EntryKind::Deposit];

    /// Collection name used by persistence backends.
    pub fn collection(self) -> &'static str {
        match self {
            EntryKind::Expense => "expenses",
            EntryKind::Income => "incomes",
            EntryKind::Deposit => "savings_deposits",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Expense => "expense",
            EntryKind::Income => "income",
            EntryKind::Deposit => "deposit",
        };
        f.write_str(label)
    }
}

/// Reasons an entry is refused before it reaches a repository.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryValidationError {
    #[error("entry name must not be empty")]
    EmptyName,
    #[error("entry amount must not be negative (got {0})")]
    NegativeAmount(f64),
    #[error("entry amount must be a finite number")]
    NonFiniteAmount,
}

/// One expense, income or deposit record.
///
/// The date is kept as persisted so that records with unreadable dates can
/// still be listed; date-keyed aggregation goes through [`Entry::month_key`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::with_raw_date(name, amount, category, date.format("%Y-%m-%d").to_string())
    }

    /// Builds an entry from an already-serialised date string.
    pub fn with_raw_date(
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    pub fn parsed_date(&self) -> Result<NaiveDate, DateParseError> {
        parse_entry_date(&self.date)
    }

    pub fn month_key(&self) -> Result<MonthKey, DateParseError> {
        self.parsed_date().map(MonthKey::from_date)
    }

    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.name.trim().is_empty() {
            return Err(EntryValidationError::EmptyName);
        }
        if !self.amount.is_finite() {
            return Err(EntryValidationError::NonFiniteAmount);
        }
        if self.amount < 0.0 {
            return Err(EntryValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }

    /// Produces a whole-record replacement that keeps this entry's id.
    pub fn replaced_with(
        &self,
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: self.id,
            ..Self::new(name, amount, category, date)
        }
    }
}

impl Identifiable for Entry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Entry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Entry {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Categorized for Entry {
    fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn new_entry_stores_iso_date_and_fresh_id() {
        let a = Entry::new("Gym", 120.0, "Fitness", jan(5));
        let b = Entry::new("Gym", 120.0, "Fitness", jan(5));
        assert_eq!(a.date, "2024-01-05");
        assert_ne!(a.id, b.id);
        assert_eq!(a.month_key().unwrap().to_string(), "2024-01");
    }

    #[test]
    fn unparseable_date_surfaces_typed_error() {
        let entry = Entry::with_raw_date("Broken", 10.0, "Other", "yesterday");
        assert!(matches!(entry.month_key(), Err(DateParseError::Invalid(_))));
    }

    #[test]
    fn validation_rejects_bad_records() {
        let mut entry = Entry::new("Rent", 0.0, "Building", jan(1));
        assert_eq!(entry.validate(), Ok(()));

        entry.name = "   ".into();
        assert_eq!(entry.validate(), Err(EntryValidationError::EmptyName));

        entry.name = "Rent".into();
        entry.amount = -1.0;
        assert_eq!(
            entry.validate(),
            Err(EntryValidationError::NegativeAmount(-1.0))
        );

        entry.amount = f64::NAN;
        assert_eq!(entry.validate(), Err(EntryValidationError::NonFiniteAmount));
    }

    #[test]
    fn replacement_keeps_identifier() {
        let original = Entry::new("Meat", 100.0, "Food", jan(3));
        let updated = original.replaced_with("Fish", 80.0, "Food", jan(4));
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Fish");
        assert_eq!(updated.date, "2024-01-04");
        assert_eq!(original.name, "Meat");
    }

    #[test]
    fn kind_collections_match_storage_names() {
        let names: Vec<_> = EntryKind::ALL.iter().map(|k| k.collection()).collect();
        assert_eq!(names, vec!["expenses", "incomes", "savings_deposits"]);
        assert_eq!(EntryKind::Deposit.to_string(), "deposit");
    }
}
