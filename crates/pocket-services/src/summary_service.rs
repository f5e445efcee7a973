//! Report-shaped summaries consumed by statistics, savings and dashboard views.

use std::cmp::Ordering;

use pocket_domain::{total_amount, Entry, MonthKey};
use serde::Serialize;

use crate::aggregate_service::{AggregateService, CategoryTotals, MonthlyTotals};
use crate::average_service::AverageService;
use crate::grouping_service::GroupingService;

/// Category with its average monthly amount and all-time total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverageRow {
    pub category: String,
    pub monthly_average: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

/// Income, expense and their difference for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceRow {
    pub month: MonthKey,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub average_monthly_expense: f64,
    pub average_monthly_income: f64,
    pub total_expense: f64,
    pub total_income: f64,
    pub total_saved: f64,
    /// Percentage of income kept, 0 when there is no income.
    pub savings_rate: f64,
    pub cheapest_month: f64,
    pub most_expensive_month: f64,
    pub expense_categories: Vec<CategoryAverageRow>,
    pub income_categories: Vec<CategoryAverageRow>,
    /// Newest month first.
    pub history: Vec<BalanceRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsReport {
    /// Oldest month first, at most `window` rows.
    pub months: Vec<BalanceRow>,
    pub total_saved: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub average_saved: f64,
    pub savings_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSnapshot {
    pub month: MonthKey,
    pub income: f64,
    pub expense: f64,
    pub deposit: f64,
    pub net: f64,
    pub available: f64,
    /// Largest expense category first.
    pub expense_categories: Vec<CategoryAmount>,
}

pub struct SummaryService;

impl SummaryService {
    /// Statistics over dated entries only, so totals agree with the
    /// monthly history and with [`SummaryService::savings`].
    pub fn statistics(expenses: &[Entry], incomes: &[Entry]) -> StatisticsReport {
        let expenses = GroupingService::dated(expenses);
        let incomes = GroupingService::dated(incomes);
        let expense_averages = AverageService::averages(expenses.iter().copied());
        let income_averages = AverageService::averages(incomes.iter().copied());
        let expense_monthly = AggregateService::monthly_totals(expenses.iter().copied());
        let income_monthly = AggregateService::monthly_totals(incomes.iter().copied());
        let net = AggregateService::net_savings(expenses.iter().copied(), incomes.iter().copied());

        let total_income = total_amount(incomes.iter().copied());
        let total_saved: f64 = net.values().sum();

        StatisticsReport {
            average_monthly_expense: expense_averages.overall_monthly,
            average_monthly_income: income_averages.overall_monthly,
            total_expense: total_amount(expenses.iter().copied()),
            total_income,
            total_saved,
            savings_rate: rate(total_saved, total_income),
            cheapest_month: expense_monthly.values().copied().reduce(f64::min).unwrap_or(0.0),
            most_expensive_month: expense_monthly
                .values()
                .copied()
                .reduce(f64::max)
                .unwrap_or(0.0),
            expense_categories: category_rows(
                &expense_averages.per_category,
                &AggregateService::category_totals(expenses.iter().copied()),
            ),
            income_categories: category_rows(
                &income_averages.per_category,
                &AggregateService::category_totals(incomes.iter().copied()),
            ),
            history: balance_rows(&net, &income_monthly, &expense_monthly)
                .into_iter()
                .rev()
                .collect(),
        }
    }

    /// Net savings over the latest `window` months with rate and average.
    pub fn savings(expenses: &[Entry], incomes: &[Entry], window: usize) -> SavingsReport {
        let expense_monthly = AggregateService::monthly_totals(expenses);
        let income_monthly = AggregateService::monthly_totals(incomes);
        let net = AggregateService::net_savings(expenses, incomes);

        let rows = balance_rows(&net, &income_monthly, &expense_monthly);
        let skip = rows.len().saturating_sub(window);
        let months: Vec<BalanceRow> = rows.into_iter().skip(skip).collect();

        let total_saved: f64 = months.iter().map(|row| row.net).sum();
        let total_income: f64 = income_monthly.values().sum();
        let average_saved = if months.is_empty() {
            0.0
        } else {
            total_saved / months.len() as f64
        };

        SavingsReport {
            total_saved,
            total_income,
            total_expense: expense_monthly.values().sum(),
            average_saved,
            savings_rate: rate(total_saved, total_income),
            months,
        }
    }

    pub fn month_snapshot(
        expenses: &[Entry],
        incomes: &[Entry],
        deposits: &[Entry],
        month: MonthKey,
    ) -> MonthSnapshot {
        let month_expenses = GroupingService::entries_in_month(expenses, month);
        let income = total_amount(GroupingService::entries_in_month(incomes, month));
        let expense = total_amount(month_expenses.iter().copied());
        let deposit = total_amount(GroupingService::entries_in_month(deposits, month));

        let mut expense_categories: Vec<CategoryAmount> =
            AggregateService::category_totals(month_expenses)
                .into_iter()
                .map(|(category, amount)| CategoryAmount { category, amount })
                .collect();
        expense_categories.sort_by(|a, b| descending(a.amount, b.amount, &a.category, &b.category));

        MonthSnapshot {
            month,
            income,
            expense,
            deposit,
            net: income - expense,
            available: income - expense - deposit,
            expense_categories,
        }
    }
}

fn rate(saved: f64, income: f64) -> f64 {
    if income > 0.0 {
        saved / income * 100.0
    } else {
        0.0
    }
}

fn descending(a: f64, b: f64, a_name: &str, b_name: &str) -> Ordering {
    b.total_cmp(&a).then_with(|| a_name.cmp(b_name))
}

fn category_rows(averages: &CategoryTotals, totals: &CategoryTotals) -> Vec<CategoryAverageRow> {
    let mut rows: Vec<CategoryAverageRow> = averages
        .iter()
        .map(|(category, average)| CategoryAverageRow {
            category: category.clone(),
            monthly_average: *average,
            total: totals.get(category).copied().unwrap_or(0.0),
        })
        .collect();
    rows.sort_by(|a, b| descending(a.monthly_average, b.monthly_average, &a.category, &b.category));
    rows
}

/// Rows for every month of `net`, oldest first.
fn balance_rows(
    net: &MonthlyTotals,
    income: &MonthlyTotals,
    expense: &MonthlyTotals,
) -> Vec<BalanceRow> {
    net.iter()
        .map(|(month, net)| BalanceRow {
            month: *month,
            income: income.get(month).copied().unwrap_or(0.0),
            expense: expense.get(month).copied().unwrap_or(0.0),
            net: *net,
        })
        .collect()
}
