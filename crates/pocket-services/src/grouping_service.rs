//! Month-key derivation and calendar grouping of entries.

use std::collections::BTreeSet;

use pocket_domain::{Entry, EntryKind, LedgerSnapshot, MonthKey};
use tracing::{debug, warn};

pub struct GroupingService;

impl GroupingService {
    /// Derives the month key of an entry.
    ///
    /// Entries whose date cannot be parsed yield `None`; every date-keyed
    /// computation skips them through this function. Reports run several
    /// passes over one slice, so this only logs at `debug`. Use
    /// [`GroupingService::log_undated`] to warn once per snapshot.
    pub fn month_key(entry: &Entry) -> Option<MonthKey> {
        match entry.month_key() {
            Ok(key) => Some(key),
            Err(err) => {
                debug!(entry = %entry.id, error = %err, "skipping entry with unparseable date");
                None
            }
        }
    }

    /// Entries with a parseable date, in input order.
    pub fn dated<'a, I>(entries: I) -> Vec<&'a Entry>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        entries
            .into_iter()
            .filter(|entry| Self::month_key(entry).is_some())
            .collect()
    }

    /// Warns once for every entry in `snapshot` whose date cannot be parsed.
    ///
    /// Returns how many entries were reported.
    pub fn log_undated(snapshot: &LedgerSnapshot) -> usize {
        let mut undated = 0;
        for kind in EntryKind::ALL {
            for entry in snapshot.entries(kind) {
                if let Err(err) = entry.month_key() {
                    warn!(%kind, entry = %entry.id, date = %entry.date, error = %err, "entry has an unparseable date and is left out of monthly figures");
                    undated += 1;
                }
            }
        }
        undated
    }

    /// Distinct month keys present in `entries`, ascending.
    pub fn distinct_months<'a, I>(entries: I) -> Vec<MonthKey>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        entries
            .into_iter()
            .filter_map(Self::month_key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct month keys across several collections, ascending.
    pub fn union_months(collections: &[&[Entry]]) -> Vec<MonthKey> {
        Self::distinct_months(collections.iter().flat_map(|entries| entries.iter()))
    }

    /// The latest `count` distinct month keys across the collections, ascending.
    pub fn recent_months(collections: &[&[Entry]], count: usize) -> Vec<MonthKey> {
        let months = Self::union_months(collections);
        let skip = months.len().saturating_sub(count);
        months.into_iter().skip(skip).collect()
    }

    /// Entries dated within the given calendar month.
    pub fn entries_in_month<'a, I>(entries: I, month: MonthKey) -> Vec<&'a Entry>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        entries
            .into_iter()
            .filter(|entry| Self::month_key(entry) == Some(month))
            .collect()
    }
}
