mod common;

use common::{date, memory_tracker};
use pocket_core::{
    domain::{EntryKind, SalaryOverride, SalaryScheme},
    FinanceTracker,
};

fn seeded(today: chrono::NaiveDate) -> FinanceTracker {
    let mut tracker = memory_tracker(today);
    for month in 1..=3 {
        tracker
            .add(EntryKind::Income, "Pay", 2800.0, "Salary (14-month)", date(2024, month, 1))
            .unwrap();
        tracker
            .add(EntryKind::Expense, "Rent", 1000.0, "Building", date(2024, month, 2))
            .unwrap();
    }
    tracker
        .add(EntryKind::Income, "Side job", 300.0, "Freelance", date(2024, 2, 10))
        .unwrap();
    tracker
        .add(EntryKind::Expense, "Dinner", 300.0, "Food", date(2024, 1, 20))
        .unwrap();
    for month in 1..=2 {
        tracker
            .add(EntryKind::Deposit, "Piggy", 200.0, "Savings", date(2024, month, 25))
            .unwrap();
    }
    tracker
}

#[test]
fn fourteen_month_salary_drives_bonus_months() {
    let tracker = seeded(date(2024, 3, 15));
    let projection = tracker.projection().expect("projection");

    assert_eq!(projection.start.to_string(), "2024-03");
    assert_eq!(projection.inputs.salary.scheme, SalaryScheme::FourteenMonth);
    assert_eq!(projection.inputs.average_expense, 1100.0);
    assert_eq!(projection.inputs.average_other_income, 300.0);
    assert_eq!(projection.inputs.average_deposit, 200.0);

    let labels: Vec<&str> = projection.months.iter().map(|m| m.label).collect();
    assert_eq!(
        labels,
        vec!["Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]
    );

    let march = &projection.months[0];
    assert_eq!(march.income, 3100.0);
    assert_eq!(march.available, 1800.0);

    let april = &projection.months[1];
    assert_eq!(april.income, 4500.0);
    assert_eq!(april.available, 3200.0);
    assert_eq!(projection.months[3].income, 4500.0);

    let december = &projection.months[9];
    assert_eq!(december.income, 5900.0);
    assert_eq!(december.available, 4600.0);

    assert_eq!(projection.totals.income, 42800.0);
    assert_eq!(projection.totals.expense, 13200.0);
    assert_eq!(projection.totals.available, 27200.0);

    let last = projection.months.last().unwrap();
    assert_eq!(last.cumulative_available, 27200.0);
    assert_eq!(last.cumulative_saved, 2400.0);
}

#[test]
fn declared_salary_replaces_detection() {
    let mut tracker = seeded(date(2024, 3, 15));
    let mut config = tracker.config().clone();
    config.salary_override = Some(SalaryOverride {
        scheme: SalaryScheme::TwelveMonth,
        monthly_base: 2000.0,
    });
    tracker.update_config(config).unwrap();

    let projection = tracker.projection().unwrap();
    assert!(projection.months.iter().all(|m| m.income == 2300.0));
    assert_eq!(projection.totals.income, 27600.0);
}

#[test]
fn unusable_override_falls_back_to_detection() {
    let mut tracker = seeded(date(2024, 3, 15));
    let mut config = tracker.config().clone();
    config.salary_override = Some(SalaryOverride {
        scheme: SalaryScheme::TwelveMonth,
        monthly_base: 0.0,
    });
    tracker.update_config(config).unwrap();

    assert_eq!(tracker.salary().unwrap().scheme, SalaryScheme::FourteenMonth);
}

#[test]
fn empty_ledger_projects_zeroes() {
    let tracker = memory_tracker(date(2024, 11, 2));
    let projection = tracker.projection().unwrap();
    assert_eq!(projection.months.len(), 12);
    assert_eq!(projection.months[0].label, "Nov");
    assert!(projection.months.iter().all(|m| m.available == 0.0));
    assert_eq!(projection.totals.available, 0.0);
}
