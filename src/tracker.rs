//! Facade that ties a repository, user preferences and a clock to the services.

use std::path::PathBuf;

use chrono::NaiveDate;
use pocket_config::{Config, ConfigManager};
use pocket_domain::{Entry, EntryKind, LedgerSnapshot, MonthKey, SalaryDetection};
use pocket_services::{
    storage::EntryRepository, AggregateService, Clock, CoreError, GroupingService, MonthSnapshot,
    MonthlyTotals, Projection, ProjectionService, SalaryService, SavingsReport,
    StatisticsReport, SummaryService, SystemClock,
};
use pocket_storage_json::JsonEntryStore;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::PocketError;

/// Calendar months shown on the home overview.
pub const HOME_TRAILING_MONTHS: usize = 3;

/// Dashboard figures computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub current: MonthSnapshot,
    /// Latest months that have any income or expense, oldest first.
    pub recent: Vec<MonthSnapshot>,
    /// Calendar months ending with the current one, oldest first.
    pub trailing: Vec<MonthSnapshot>,
}

/// Coordinates entry persistence with the aggregation and projection services.
///
/// Every report reads a fresh snapshot from the repository first, so results
/// always reflect the latest stored entries.
pub struct FinanceTracker {
    repository: Box<dyn EntryRepository>,
    config: Config,
    config_manager: Option<ConfigManager>,
    clock: Box<dyn Clock>,
}

impl FinanceTracker {
    pub fn new(repository: Box<dyn EntryRepository>, config: Config) -> Self {
        Self {
            repository,
            config,
            config_manager: None,
            clock: Box::new(SystemClock),
        }
    }

    /// Opens the tracker home at [`Config::default_home`].
    pub fn open_default() -> Result<Self, PocketError> {
        Self::open(Config::default_home())
    }

    /// Opens JSON-backed entries and stored preferences under `base`.
    ///
    /// Entries live in `base/data` unless the preferences name another root.
    pub fn open(base: PathBuf) -> Result<Self, PocketError> {
        let config_manager = ConfigManager::with_base_dir(base.clone())?;
        let config = config_manager.load()?;
        let data_root = config
            .default_data_root
            .clone()
            .unwrap_or_else(|| base.join("data"));
        let store = JsonEntryStore::new(data_root)?;
        info!(path = %store.path().display(), "opened entry store");
        Ok(Self {
            repository: Box::new(store),
            config,
            config_manager: Some(config_manager),
            clock: Box::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the preferences and persists them when a config manager is attached.
    pub fn update_config(&mut self, config: Config) -> Result<(), PocketError> {
        if let Some(manager) = &self.config_manager {
            manager.save(&config)?;
        }
        self.config = config;
        Ok(())
    }

    /// Writes a timestamped copy of the current preferences.
    pub fn backup_config(&self, note: Option<&str>) -> Result<String, PocketError> {
        let name = self.config_manager()?.backup(&self.config, note)?;
        info!(backup = %name, "backed up preferences");
        Ok(name)
    }

    /// Preference backups, newest first.
    pub fn config_backups(&self) -> Result<Vec<String>, PocketError> {
        Ok(self.config_manager()?.list_backups()?)
    }

    /// Restores a backup and makes it the active, persisted preferences.
    pub fn restore_config(&mut self, backup_name: &str) -> Result<(), PocketError> {
        let restored = self.config_manager()?.restore(backup_name)?;
        self.update_config(restored)?;
        info!(backup = %backup_name, "restored preferences");
        Ok(())
    }

    fn config_manager(&self) -> Result<&ConfigManager, PocketError> {
        self.config_manager
            .as_ref()
            .ok_or(PocketError::PreferencesUnavailable)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Category labels offered for new entries of `kind`.
    pub fn categories(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::Expense => &self.config.expense_categories,
            EntryKind::Income => &self.config.income_categories,
            EntryKind::Deposit => &self.config.deposit_categories,
        }
    }

    pub fn add(
        &mut self,
        kind: EntryKind,
        name: &str,
        amount: f64,
        category: &str,
        date: NaiveDate,
    ) -> Result<Uuid, PocketError> {
        let entry = Entry::new(name.trim(), amount, category, date);
        let id = entry.id;
        self.repository.upsert(kind, entry)?;
        Ok(id)
    }

    /// Replaces a stored entry as a whole; the id must already exist.
    pub fn update(&mut self, kind: EntryKind, entry: Entry) -> Result<(), PocketError> {
        let exists = self
            .repository
            .list_entries(kind)?
            .iter()
            .any(|stored| stored.id == entry.id);
        if !exists {
            return Err(CoreError::EntryNotFound { kind, id: entry.id }.into());
        }
        self.repository.upsert(kind, entry)?;
        Ok(())
    }

    pub fn delete(&mut self, kind: EntryKind, id: Uuid) -> Result<(), PocketError> {
        self.repository.delete(kind, id)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), PocketError> {
        self.repository.clear()?;
        info!("cleared all entries");
        Ok(())
    }

    /// Current entries; entries with unparseable dates are logged once here.
    pub fn snapshot(&self) -> Result<LedgerSnapshot, PocketError> {
        let snapshot = self.repository.snapshot()?;
        GroupingService::log_undated(&snapshot);
        Ok(snapshot)
    }

    pub fn monthly_totals(&self, kind: EntryKind) -> Result<MonthlyTotals, PocketError> {
        let snapshot = self.snapshot()?;
        Ok(AggregateService::monthly_totals(snapshot.entries(kind)))
    }

    pub fn available_balance(&self) -> Result<MonthlyTotals, PocketError> {
        let snapshot = self.snapshot()?;
        Ok(AggregateService::available_balance(
            &snapshot.expenses,
            &snapshot.incomes,
            &snapshot.deposits,
        ))
    }

    pub fn month(&self, month: MonthKey) -> Result<MonthSnapshot, PocketError> {
        let snapshot = self.snapshot()?;
        Ok(month_of(&snapshot, month))
    }

    pub fn dashboard(&self) -> Result<Dashboard, PocketError> {
        let snapshot = self.snapshot()?;
        let today = self.today();
        let recent = GroupingService::recent_months(
            &[snapshot.expenses.as_slice(), snapshot.incomes.as_slice()],
            self.config.recent_months,
        );
        Ok(Dashboard {
            current: month_of(&snapshot, MonthKey::from_date(today)),
            recent: recent
                .into_iter()
                .map(|month| month_of(&snapshot, month))
                .collect(),
            trailing: MonthKey::trailing(today, HOME_TRAILING_MONTHS)
                .into_iter()
                .map(|month| month_of(&snapshot, month))
                .collect(),
        })
    }

    pub fn statistics(&self) -> Result<StatisticsReport, PocketError> {
        let snapshot = self.snapshot()?;
        Ok(SummaryService::statistics(
            &snapshot.expenses,
            &snapshot.incomes,
        ))
    }

    pub fn savings(&self) -> Result<SavingsReport, PocketError> {
        let snapshot = self.snapshot()?;
        Ok(SummaryService::savings(
            &snapshot.expenses,
            &snapshot.incomes,
            self.config.savings_window,
        ))
    }

    pub fn salary(&self) -> Result<SalaryDetection, PocketError> {
        let snapshot = self.snapshot()?;
        Ok(SalaryService::resolve(
            &snapshot.incomes,
            &self.config.salary_labels,
            self.config.salary_override.as_ref(),
        ))
    }

    pub fn projection(&self) -> Result<Projection, PocketError> {
        let snapshot = self.snapshot()?;
        Ok(ProjectionService::project_snapshot(
            self.today(),
            &snapshot,
            &self.config.salary_labels,
            self.config.salary_override.as_ref(),
        ))
    }
}

fn month_of(snapshot: &LedgerSnapshot, month: MonthKey) -> MonthSnapshot {
    SummaryService::month_snapshot(
        &snapshot.expenses,
        &snapshot.incomes,
        &snapshot.deposits,
        month,
    )
}
