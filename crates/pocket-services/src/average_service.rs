//! Month-normalised averages.

use std::collections::BTreeSet;

use pocket_domain::Entry;
use serde::Serialize;

use crate::aggregate_service::CategoryTotals;
use crate::grouping_service::GroupingService;

/// Average monthly amount overall and per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Averages {
    pub overall_monthly: f64,
    pub per_category: CategoryTotals,
    /// Number of distinct months the sums were divided by.
    pub month_count: usize,
}

pub struct AverageService;

impl AverageService {
    /// Averages amounts over the number of distinct months that have entries.
    ///
    /// A category seen in one month out of six is still divided by six,
    /// and a stretch of months with no entries at all does not count.
    /// Entries with unparseable dates contribute neither months nor amounts.
    pub fn averages<'a, I>(entries: I) -> Averages
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut months = BTreeSet::new();
        let mut total = 0.0;
        let mut per_category = CategoryTotals::new();
        for entry in entries {
            let Some(key) = GroupingService::month_key(entry) else {
                continue;
            };
            months.insert(key);
            total += entry.amount;
            *per_category.entry(entry.category.clone()).or_insert(0.0) += entry.amount;
        }

        if months.is_empty() {
            return Averages::default();
        }

        let month_count = months.len();
        let divisor = month_count as f64;
        for sum in per_category.values_mut() {
            *sum /= divisor;
        }
        Averages {
            overall_monthly: total / divisor,
            per_category,
            month_count,
        }
    }
}
