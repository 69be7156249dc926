//! Connection records and their identifiers.
//!
//! Records are produced once by the record store loader and never change
//! shape afterwards. Only their position in the working list moves.

use std::cmp::Ordering;
use std::fmt;

/// Stable connection number assigned at load time.
///
/// IDs are dense: a store of `n` records uses exactly `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(usize);

impl RecordId {
    /// Wrap a raw connection number.
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    /// Raw connection number.
    pub fn get(self) -> usize {
        self.0
    }

    /// Parse user-typed connection number text.
    ///
    /// Returns `None` for empty, signed, or non-numeric input. Range
    /// checking against the working list happens at lookup time.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse().ok().map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: String,
    command: String,
    comment: String,
}

impl Record {
    /// Create a record from already-normalized fields.
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        command: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            command: command.into(),
            comment: comment.into(),
        }
    }

    /// Stable connection number.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Friendly name (the store key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Connection string in `user@address` form.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Free-text comment, possibly empty.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Compare two records by one column using that column's natural order.
    ///
    /// The ID column compares numerically, text columns compare by code point.
    pub fn cmp_by(&self, other: &Self, column: Column) -> Ordering {
        match column {
            Column::Id => self.id.cmp(&other.id),
            Column::Name => self.name.cmp(&other.name),
            Column::Command => self.command.cmp(&other.command),
            Column::Comment => self.comment.cmp(&other.comment),
        }
    }
}

/// The four displayed columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Connection number.
    Id,
    /// Friendly name.
    Name,
    /// `user@address` connection string.
    Command,
    /// Free-text comment.
    Comment,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 4] = [Column::Id, Column::Name, Column::Command, Column::Comment];

    /// Column for a zero-based index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based display index.
    pub fn index(self) -> usize {
        match self {
            Column::Id => 0,
            Column::Name => 1,
            Column::Command => 2,
            Column::Comment => 3,
        }
    }
}
