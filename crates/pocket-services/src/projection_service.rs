//! Twelve-month salary-aware projection built on historical averages.

use chrono::NaiveDate;
use pocket_domain::{
    LedgerSnapshot, MonthKey, SalaryDetection, SalaryLabels, SalaryOverride, SalaryScheme,
    MONTH_LABELS,
};
use serde::Serialize;
use tracing::debug;

use crate::{average_service::AverageService, salary_service::SalaryService};

pub const PROJECTION_MONTHS: usize = 12;

/// Month-of-year indices (0 = January) receiving 14-month salary bonuses.
const EASTER_BONUS_MONTH: usize = 3;
const SUMMER_BONUS_MONTH: usize = 5;
const CHRISTMAS_BONUS_MONTH: usize = 11;

/// Everything a projection depends on besides the start date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProjectionInputs {
    pub salary: SalaryDetection,
    pub average_expense: f64,
    pub average_other_income: f64,
    pub average_deposit: f64,
}

/// One forecast position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedMonth {
    pub position: usize,
    /// Month of year, 0 = January.
    pub month_index: usize,
    pub label: &'static str,
    pub income: f64,
    pub expense: f64,
    pub deposit: f64,
    pub available: f64,
    pub cumulative_available: f64,
    pub cumulative_saved: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProjectionTotals {
    pub income: f64,
    pub expense: f64,
    pub deposit: f64,
    pub available: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub start: MonthKey,
    pub inputs: ProjectionInputs,
    pub months: Vec<ProjectedMonth>,
    pub totals: ProjectionTotals,
}

pub struct ProjectionService;

impl ProjectionService {
    /// Salary paid in a given month of year, bonuses included.
    ///
    /// The 14-month schedule adds half a base in April and June and a full
    /// extra base in December. Bonus months are fixed calendar months.
    pub fn salary_for_month(salary: &SalaryDetection, month_index: usize) -> f64 {
        match salary.scheme {
            SalaryScheme::None => 0.0,
            SalaryScheme::TwelveMonth => salary.monthly_base,
            SalaryScheme::FourteenMonth => {
                let base = salary.monthly_base;
                match month_index {
                    EASTER_BONUS_MONTH | SUMMER_BONUS_MONTH => base + base * 0.5,
                    CHRISTMAS_BONUS_MONTH => base + base,
                    _ => base,
                }
            }
        }
    }

    pub fn projected_income(inputs: &ProjectionInputs, month_index: usize) -> f64 {
        Self::salary_for_month(&inputs.salary, month_index) + inputs.average_other_income
    }

    /// Projects twelve months starting with the month of `today`.
    ///
    /// Expenses and deposits are flat at their averages. Month names cycle
    /// modulo twelve from the start month.
    pub fn project(today: NaiveDate, inputs: ProjectionInputs) -> Projection {
        let start = MonthKey::from_date(today);
        let mut months = Vec::with_capacity(PROJECTION_MONTHS);
        let mut totals = ProjectionTotals::default();
        let mut cumulative_available = 0.0;
        let mut cumulative_saved = 0.0;

        for position in 0..PROJECTION_MONTHS {
            let month_index = (start.month_index() + position) % 12;
            let income = Self::projected_income(&inputs, month_index);
            let expense = inputs.average_expense;
            let deposit = inputs.average_deposit;
            let available = income - expense - deposit;

            cumulative_available += available;
            cumulative_saved += deposit;
            totals.income += income;
            totals.expense += expense;
            totals.deposit += deposit;
            totals.available += available;

            months.push(ProjectedMonth {
                position,
                month_index,
                label: MONTH_LABELS[month_index],
                income,
                expense,
                deposit,
                available,
                cumulative_available,
                cumulative_saved,
            });
        }

        debug!(
            start = %start,
            scheme = %inputs.salary.scheme,
            total_available = totals.available,
            "built projection"
        );

        Projection {
            start,
            inputs,
            months,
            totals,
        }
    }

    /// Derives projection inputs from a snapshot.
    ///
    /// Salary-labelled incomes feed the salary scheme; every other income is
    /// averaged separately and added to each projected month.
    pub fn inputs_from_snapshot(
        snapshot: &LedgerSnapshot,
        labels: &SalaryLabels,
        preference: Option<&SalaryOverride>,
    ) -> ProjectionInputs {
        let partition = SalaryService::partition(&snapshot.incomes, labels);
        let salary = SalaryService::resolve(&snapshot.incomes, labels, preference);
        ProjectionInputs {
            salary,
            average_expense: AverageService::averages(&snapshot.expenses).overall_monthly,
            average_other_income: AverageService::averages(partition.other.iter().copied())
                .overall_monthly,
            average_deposit: AverageService::averages(&snapshot.deposits).overall_monthly,
        }
    }

    pub fn project_snapshot(
        today: NaiveDate,
        snapshot: &LedgerSnapshot,
        labels: &SalaryLabels,
        preference: Option<&SalaryOverride>,
    ) -> Projection {
        Self::project(
            today,
            Self::inputs_from_snapshot(snapshot, labels, preference),
        )
    }
}
