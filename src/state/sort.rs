//! Column sorting of the working list (pure).
//!
//! One direction flag is shared by all columns and flips after every sort.
//! Sorting a different column continues from wherever the flag stands, so
//! pressing F1 then F2 sorts the ID column one way and the name column the
//! other. There is no per-column direction memory.

use crate::model::{Column, Record};
use tracing::debug;

/// Order applied by a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Shared sort direction toggle.
///
/// The working list starts in ascending ID (and name) order, so the first
/// sort runs descending and a second press of the same column restores the
/// loaded order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortController {
    next: SortDirection,
    last: Option<(Column, SortDirection)>,
}

impl Default for SortController {
    fn default() -> Self {
        Self {
            next: SortDirection::Descending,
            last: None,
        }
    }
}

impl SortController {
    /// Direction the next sort will use.
    pub fn next_direction(&self) -> SortDirection {
        self.next
    }

    /// Column and direction of the most recent sort.
    pub fn last(&self) -> Option<(Column, SortDirection)> {
        self.last
    }

    /// Stable-sort `records` by `column` in the current direction, then flip.
    ///
    /// Records with equal keys keep their relative order in both directions.
    pub fn sort_by(&mut self, records: &mut [Record], column: Column) -> SortDirection {
        let direction = self.next;
        match direction {
            SortDirection::Ascending => records.sort_by(|a, b| a.cmp_by(b, column)),
            SortDirection::Descending => records.sort_by(|a, b| b.cmp_by(a, column)),
        }
        debug!(?column, ?direction, "Sorted working list");

        self.last = Some((column, direction));
        self.next = direction.flipped();
        direction
    }
}
