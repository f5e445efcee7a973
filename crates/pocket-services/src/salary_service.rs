//! Salary scheme detection from income history.

use pocket_domain::{
    Entry, IncomeClass, SalaryDetection, SalaryLabels, SalaryOverride, SalaryScheme,
};
use tracing::debug;

/// Income entries split by how their category classifies.
#[derive(Debug, Clone, Default)]
pub struct IncomePartition<'a> {
    pub fourteen_month: Vec<&'a Entry>,
    pub twelve_month: Vec<&'a Entry>,
    pub other: Vec<&'a Entry>,
}

pub struct SalaryService;

impl SalaryService {
    /// Classifies each income entry once against the configured salary labels.
    pub fn partition<'a, I>(incomes: I, labels: &SalaryLabels) -> IncomePartition<'a>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut partition = IncomePartition::default();
        for entry in incomes {
            match labels.classify(&entry.category) {
                IncomeClass::FourteenMonthSalary => partition.fourteen_month.push(entry),
                IncomeClass::TwelveMonthSalary => partition.twelve_month.push(entry),
                IncomeClass::Other => partition.other.push(entry),
            }
        }
        partition
    }

    /// Infers the salary scheme and its monthly base.
    ///
    /// 14-month wins when it has at least one entry and at least as many
    /// entries as 12-month. The base is the plain mean of the winning
    /// entries' amounts, not a per-month average.
    pub fn detect<'a, I>(incomes: I, labels: &SalaryLabels) -> SalaryDetection
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        Self::detect_partition(&Self::partition(incomes, labels))
    }

    pub fn detect_partition(partition: &IncomePartition<'_>) -> SalaryDetection {
        let fourteen = partition.fourteen_month.len();
        let twelve = partition.twelve_month.len();
        let detection = if fourteen > 0 && fourteen >= twelve {
            SalaryDetection {
                scheme: SalaryScheme::FourteenMonth,
                monthly_base: mean(&partition.fourteen_month),
            }
        } else if twelve > 0 {
            SalaryDetection {
                scheme: SalaryScheme::TwelveMonth,
                monthly_base: mean(&partition.twelve_month),
            }
        } else {
            SalaryDetection::none()
        };
        debug!(
            fourteen_month = fourteen,
            twelve_month = twelve,
            scheme = %detection.scheme,
            monthly_base = detection.monthly_base,
            "detected salary scheme"
        );
        detection
    }

    /// Prefers a usable user-declared salary, falling back to detection.
    ///
    /// An override is usable when it names a scheme and a positive, finite base.
    pub fn resolve<'a, I>(
        incomes: I,
        labels: &SalaryLabels,
        preference: Option<&SalaryOverride>,
    ) -> SalaryDetection
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        match preference {
            Some(declared) if is_usable(declared) => SalaryDetection {
                scheme: declared.scheme,
                monthly_base: declared.monthly_base,
            },
            _ => Self::detect(incomes, labels),
        }
    }
}

fn is_usable(declared: &SalaryOverride) -> bool {
    declared.scheme != SalaryScheme::None
        && declared.monthly_base.is_finite()
        && declared.monthly_base > 0.0
}

fn mean(entries: &[&Entry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(|entry| entry.amount).sum::<f64>() / entries.len() as f64
}
