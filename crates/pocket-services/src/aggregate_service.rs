//! Per-month and per-category totals plus the balances derived from them.

use std::collections::BTreeMap;

use pocket_domain::{Entry, MonthKey};

use crate::grouping_service::GroupingService;

/// Summed amounts keyed by calendar month, ascending.
pub type MonthlyTotals = BTreeMap<MonthKey, f64>;

/// Summed amounts keyed by the exact category label.
pub type CategoryTotals = BTreeMap<String, f64>;

pub struct AggregateService;

impl AggregateService {
    /// Sums amounts per month. Entries with unparseable dates are left out.
    pub fn monthly_totals<'a, I>(entries: I) -> MonthlyTotals
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut totals = MonthlyTotals::new();
        for entry in entries {
            if let Some(key) = GroupingService::month_key(entry) {
                *totals.entry(key).or_insert(0.0) += entry.amount;
            }
        }
        totals
    }

    /// Sums amounts per category label, case-sensitive and unnormalised.
    pub fn category_totals<'a, I>(entries: I) -> CategoryTotals
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut totals = CategoryTotals::new();
        for entry in entries {
            *totals.entry(entry.category.clone()).or_insert(0.0) += entry.amount;
        }
        totals
    }

    /// Income minus expense for every month seen on either side.
    pub fn net_savings<'a, E, I>(expenses: E, incomes: I) -> MonthlyTotals
    where
        E: IntoIterator<Item = &'a Entry>,
        I: IntoIterator<Item = &'a Entry>,
    {
        let expense = Self::monthly_totals(expenses);
        let income = Self::monthly_totals(incomes);
        combine(&income, &[&expense])
    }

    /// Income minus expense minus deposits for every month seen in any input.
    pub fn available_balance<'a, E, I, D>(expenses: E, incomes: I, deposits: D) -> MonthlyTotals
    where
        E: IntoIterator<Item = &'a Entry>,
        I: IntoIterator<Item = &'a Entry>,
        D: IntoIterator<Item = &'a Entry>,
    {
        let expense = Self::monthly_totals(expenses);
        let income = Self::monthly_totals(incomes);
        let deposit = Self::monthly_totals(deposits);
        combine(&income, &[&expense, &deposit])
    }
}

/// `base[k] - sum(subtract[..][k])` over the union of keys, absent sides counting as zero.
fn combine(base: &MonthlyTotals, subtract: &[&MonthlyTotals]) -> MonthlyTotals {
    let keys = base
        .keys()
        .chain(subtract.iter().flat_map(|totals| totals.keys()))
        .copied();
    let mut result = MonthlyTotals::new();
    for key in keys {
        if result.contains_key(&key) {
            continue;
        }
        let positive = base.get(&key).copied().unwrap_or(0.0);
        let negative: f64 = subtract
            .iter()
            .map(|totals| totals.get(&key).copied().unwrap_or(0.0))
            .sum();
        result.insert(key, positive - negative);
    }
    result
}
