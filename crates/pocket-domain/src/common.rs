//! Shared traits implemented by tracked records.

use uuid::Uuid;

/// Exposes a stable identifier for records stored by a repository.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to a record's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Exposes the free-text category label a record was filed under.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Sums the amounts of any iterator of amounted records.
pub fn total_amount<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
