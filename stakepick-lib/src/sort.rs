//! Ordering primitives for the validator table.

use std::cmp::Ordering;

use crate::validator::Validator;

/// Fields the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Apr,
    Delegated,
}

impl SortKey {
    /// Header label for the column this key sorts.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Apr => "APR",
            SortKey::Delegated => "Delegated",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Ascending comparison of two validators on `key`.
///
/// Lexicographic for the name, numeric for apr/delegated.
pub fn compare(a: &Validator, b: &Validator, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Apr => a.apr.total_cmp(&b.apr),
        SortKey::Delegated => a.delegated.total_cmp(&b.delegated),
    }
}

/// Comparison of two validators on `key` in `direction`.
///
/// Descending is the exact reversal of the ascending result, not a second
/// comparison, so equal keys stay equal under both directions.
pub fn compare_directed(
    a: &Validator,
    b: &Validator,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let ordering = compare(a, b, key);
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sort `items` by `comparator`, preserving the input order of equal elements.
///
/// Each element is decorated with its original index and ties are broken by
/// that index, so stability holds no matter what the underlying sort
/// primitive guarantees.
pub fn stable_sort<T: Clone, F>(items: &[T], mut comparator: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut decorated: Vec<(usize, &T)> = items.iter().enumerate().collect();
    decorated.sort_unstable_by(|a, b| comparator(a.1, b.1).then(a.0.cmp(&b.0)));
    decorated.into_iter().map(|(_, item)| item.clone()).collect()
}
