use std::path::PathBuf;

use pocket_domain::{SalaryLabels, SalaryOverride};
use serde::{Deserialize, Serialize};

/// Stores user preferences that shape reports and projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub salary_labels: SalaryLabels,
    /// Declared salary used instead of detection when set with a positive base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_override: Option<SalaryOverride>,
    #[serde(default = "Config::default_expense_categories")]
    pub expense_categories: Vec<String>,
    #[serde(default = "Config::default_income_categories")]
    pub income_categories: Vec<String>,
    #[serde(default = "Config::default_deposit_categories")]
    pub deposit_categories: Vec<String>,
    /// Number of months shown on the dashboard chart.
    #[serde(default = "Config::default_recent_months")]
    pub recent_months: usize,
    /// Number of months covered by the savings report.
    #[serde(default = "Config::default_savings_window")]
    pub savings_window: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for entry data. Defaults to `data/` under the tracker home.
    pub default_data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            salary_labels: SalaryLabels::default(),
            salary_override: None,
            expense_categories: Self::default_expense_categories(),
            income_categories: Self::default_income_categories(),
            deposit_categories: Self::default_deposit_categories(),
            recent_months: Self::default_recent_months(),
            savings_window: Self::default_savings_window(),
            default_data_root: None,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "EUR".into()
    }

    pub fn default_expense_categories() -> Vec<String> {
        [
            "Insurance",
            "Telecom",
            "Utilities",
            "Childcare",
            "Fitness",
            "Subscription",
            "Energy",
            "Building",
            "Groceries",
            "Food",
            "Other",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    pub fn default_income_categories() -> Vec<String> {
        let labels = SalaryLabels::default();
        [labels.fourteen_month, labels.twelve_month]
            .into_iter()
            .chain(
                ["Freelance", "Investments", "Rental", "Bonus", "Other"]
                    .into_iter()
                    .map(String::from),
            )
            .collect()
    }

    pub fn default_deposit_categories() -> Vec<String> {
        ["Savings", "Emergency fund", "Investments", "Other"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn default_recent_months() -> usize {
        6
    }

    pub fn default_savings_window() -> usize {
        12
    }

    /// Data root from the preferences, or [`Config::default_home`].
    pub fn resolve_default_data_root(&self) -> PathBuf {
        if let Some(path) = &self.default_data_root {
            return path.clone();
        }
        Self::default_home()
    }

    /// `~/Documents/Pocket`, falling back to `~/Pocket` without a documents folder.
    pub fn default_home() -> PathBuf {
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Pocket")
    }
}
