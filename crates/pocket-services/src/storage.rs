use pocket_domain::{Entry, EntryKind, LedgerSnapshot};
use tracing::debug;
use uuid::Uuid;

use crate::CoreError;

/// Abstraction over persistence backends that hold the three entry collections.
pub trait EntryRepository {
    fn list_entries(&self, kind: EntryKind) -> Result<Vec<Entry>, CoreError>;
    /// Replaces the entry with the same id, or appends it.
    fn upsert(&mut self, kind: EntryKind, entry: Entry) -> Result<(), CoreError>;
    fn delete(&mut self, kind: EntryKind, id: Uuid) -> Result<(), CoreError>;
    fn clear(&mut self) -> Result<(), CoreError>;

    /// Captures every collection at once.
    fn snapshot(&self) -> Result<LedgerSnapshot, CoreError> {
        Ok(LedgerSnapshot {
            expenses: self.list_entries(EntryKind::Expense)?,
            incomes: self.list_entries(EntryKind::Income)?,
            deposits: self.list_entries(EntryKind::Deposit)?,
        })
    }
}

/// Validates `entry` and writes it into `snapshot`, replacing by id.
pub fn upsert_entry(
    snapshot: &mut LedgerSnapshot,
    kind: EntryKind,
    entry: Entry,
) -> Result<(), CoreError> {
    entry.validate()?;
    let entries = snapshot.entries_mut(kind);
    match entries.iter_mut().find(|existing| existing.id == entry.id) {
        Some(existing) => {
            debug!(%kind, id = %entry.id, "replacing entry");
            *existing = entry;
        }
        None => {
            debug!(%kind, id = %entry.id, "adding entry");
            entries.push(entry);
        }
    }
    Ok(())
}

pub fn remove_entry(
    snapshot: &mut LedgerSnapshot,
    kind: EntryKind,
    id: Uuid,
) -> Result<Entry, CoreError> {
    let entries = snapshot.entries_mut(kind);
    let position = entries
        .iter()
        .position(|entry| entry.id == id)
        .ok_or(CoreError::EntryNotFound { kind, id })?;
    debug!(%kind, %id, "removing entry");
    Ok(entries.remove(position))
}

/// Repository that keeps entries in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    data: LedgerSnapshot,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(data: LedgerSnapshot) -> Self {
        Self { data }
    }
}

impl EntryRepository for InMemoryRepository {
    fn list_entries(&self, kind: EntryKind) -> Result<Vec<Entry>, CoreError> {
        Ok(self.data.entries(kind).to_vec())
    }

    fn upsert(&mut self, kind: EntryKind, entry: Entry) -> Result<(), CoreError> {
        upsert_entry(&mut self.data, kind, entry)
    }

    fn delete(&mut self, kind: EntryKind, id: Uuid) -> Result<(), CoreError> {
        remove_entry(&mut self.data, kind, id).map(|_| ())
    }

    fn clear(&mut self) -> Result<(), CoreError> {
        self.data = LedgerSnapshot::default();
        Ok(())
    }

    fn snapshot(&self) -> Result<LedgerSnapshot, CoreError> {
        Ok(self.data.clone())
    }
}
