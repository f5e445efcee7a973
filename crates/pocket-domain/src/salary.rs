//! Salary schemes and the classification of income categories.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FOURTEEN_MONTH_LABEL: &str = "Salary (14-month)";
pub const DEFAULT_TWELVE_MONTH_LABEL: &str = "Salary (12-month)";

/// Detected or declared salary payment pattern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SalaryScheme {
    TwelveMonth,
    FourteenMonth,
    #[default]
    None,
}

impl fmt::Display for SalaryScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SalaryScheme::TwelveMonth => "12-month",
            SalaryScheme::FourteenMonth => "14-month",
            SalaryScheme::None => "none",
        };
        f.write_str(label)
    }
}

/// How a single income category is treated by salary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeClass {
    FourteenMonthSalary,
    TwelveMonthSalary,
    Other,
}

/// Exact category labels that mark salary income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalaryLabels {
    pub fourteen_month: String,
    pub twelve_month: String,
}

impl Default for SalaryLabels {
    fn default() -> Self {
        Self {
            fourteen_month: DEFAULT_FOURTEEN_MONTH_LABEL.into(),
            twelve_month: DEFAULT_TWELVE_MONTH_LABEL.into(),
        }
    }
}

impl SalaryLabels {
    /// Resolves a category label with an exact, case-sensitive match.
    pub fn classify(&self, category: &str) -> IncomeClass {
        if category == self.fourteen_month {
            IncomeClass::FourteenMonthSalary
        } else if category == self.twelve_month {
            IncomeClass::TwelveMonthSalary
        } else {
            IncomeClass::Other
        }
    }
}

/// Salary scheme together with the monthly base amount it pays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SalaryDetection {
    pub scheme: SalaryScheme,
    pub monthly_base: f64,
}

impl SalaryDetection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_salaried(&self) -> bool {
        self.scheme != SalaryScheme::None
    }
}

/// User-declared salary that takes precedence over detection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SalaryOverride {
    pub scheme: SalaryScheme,
    pub monthly_base: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_exact_and_case_sensitive() {
        let labels = SalaryLabels::default();
        assert_eq!(
            labels.classify("Salary (14-month)"),
            IncomeClass::FourteenMonthSalary
        );
        assert_eq!(
            labels.classify("Salary (12-month)"),
            IncomeClass::TwelveMonthSalary
        );
        assert_eq!(labels.classify("salary (12-month)"), IncomeClass::Other);
        assert_eq!(labels.classify("Salary"), IncomeClass::Other);
    }

    #[test]
    fn custom_labels_are_honoured() {
        let labels = SalaryLabels {
            fourteen_month: "Misthos 14".into(),
            twelve_month: "Misthos 12".into(),
        };
        assert_eq!(labels.classify("Misthos 14"), IncomeClass::FourteenMonthSalary);
        assert_eq!(labels.classify(DEFAULT_TWELVE_MONTH_LABEL), IncomeClass::Other);
    }

    #[test]
    fn scheme_serializes_in_snake_case() {
        let json = serde_json::to_string(&SalaryScheme::FourteenMonth).unwrap();
        assert_eq!(json, "\"fourteen_month\"");
        assert!(!SalaryDetection::none().is_salaried());
    }
}
