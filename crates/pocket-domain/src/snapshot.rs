//! Consistent point-in-time view of every tracked entry.

use serde::{Deserialize, Serialize};

use crate::entry::{Entry, EntryKind};

/// All three entry collections captured together.
///
/// Computations take a snapshot so they never observe a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub expenses: Vec<Entry>,
    #[serde(default)]
    pub incomes: Vec<Entry>,
    #[serde(default, rename = "savings_deposits")]
    pub deposits: Vec<Entry>,
}

impl LedgerSnapshot {
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Expense => &self.expenses,
            EntryKind::Income => &self.incomes,
            EntryKind::Deposit => &self.deposits,
        }
    }

    pub fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Expense => &mut self.expenses,
            EntryKind::Income => &mut self.incomes,
            EntryKind::Deposit => &mut self.deposits,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.incomes.is_empty() && self.deposits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expenses.len() + self.incomes.len() + self.deposits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_collections_deserialize_as_empty() {
        let snapshot: LedgerSnapshot = serde_json::from_str(r#"{"expenses": []}"#).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }

    #[test]
    fn entries_are_routed_by_kind() {
        let mut snapshot = LedgerSnapshot::default();
        snapshot
            .entries_mut(EntryKind::Deposit)
            .push(Entry::with_raw_date("Piggy", 50.0, "Savings", "2024-01-01"));
        assert_eq!(snapshot.entries(EntryKind::Deposit).len(), 1);
        assert!(snapshot.entries(EntryKind::Expense).is_empty());
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("savings_deposits"));
    }
}
