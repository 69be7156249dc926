//! Line rendering and token filtering (pure).
//!
//! Records are rendered once into fixed-width lines. Each filter pass walks
//! the working list in its current order and keeps the lines that contain
//! every filter token, ignoring case.

use crate::model::{Record, RecordId};
use std::collections::BTreeSet;
use unicode_width::UnicodeWidthStr;

/// Separator between rendered columns.
pub const COLUMN_GAP: &str = "    ";

/// Maximum display width of each column across the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Widest connection number.
    pub id: usize,
    /// Widest friendly name.
    pub name: usize,
    /// Widest `user@address` string.
    pub command: usize,
    /// Widest comment.
    pub comment: usize,
}

impl ColumnWidths {
    /// Measure every column over `records`.
    pub fn measure(records: &[Record]) -> Self {
        records.iter().fold(Self::default(), |widths, record| Self {
            id: widths.id.max(record.id().to_string().width()),
            name: widths.name.max(record.name().width()),
            command: widths.command.max(record.command().width()),
            comment: widths.comment.max(record.comment().width()),
        })
    }
}

/// Render one record as a left-justified, padded line.
pub fn render_line(record: &Record, widths: &ColumnWidths) -> String {
    let mut line = String::new();
    push_padded(&mut line, &record.id().to_string(), widths.id);
    line.push_str(COLUMN_GAP);
    push_padded(&mut line, record.name(), widths.name);
    line.push_str(COLUMN_GAP);
    push_padded(&mut line, record.command(), widths.command);
    line.push_str(COLUMN_GAP);
    push_padded(&mut line, record.comment(), widths.comment);
    line
}

/// Append `text` followed by spaces up to `width` display columns.
fn push_padded(line: &mut String, text: &str, width: usize) {
    line.push_str(text);
    let pad = width.saturating_sub(text.width());
    line.extend(std::iter::repeat_n(' ', pad));
}

/// Pad `text` on the right to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut padded = String::with_capacity(text.len() + width);
    push_padded(&mut padded, text, width);
    padded
}

/// A record's rendered line plus its lowercase form for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CachedLine {
    text: String,
    folded: String,
    width: usize,
}

/// Rendered lines for every record, indexed by record ID.
///
/// Built once at load. Sorting permutes records, never their lines.
#[derive(Debug, Clone, Default)]
pub struct LineCache {
    widths: ColumnWidths,
    lines: Vec<CachedLine>,
}

impl LineCache {
    /// Render every record in `records`.
    ///
    /// IDs are expected to be dense (`0..records.len()`).
    pub fn build(records: &[Record]) -> Self {
        let widths = ColumnWidths::measure(records);
        let mut lines = vec![CachedLine::default(); records.len()];
        for record in records {
            let text = render_line(record, &widths);
            let cached = CachedLine {
                folded: text.to_lowercase(),
                width: text.width(),
                text,
            };
            if let Some(slot) = lines.get_mut(record.id().get()) {
                *slot = cached;
            }
        }
        Self { widths, lines }
    }

    /// Column widths used for rendering.
    pub fn widths(&self) -> ColumnWidths {
        self.widths
    }

    /// Rendered text for a record, if known.
    pub fn text(&self, id: RecordId) -> Option<&str> {
        self.lines.get(id.get()).map(|line| line.text.as_str())
    }
}

/// Lowercase substrings that must all appear in a line for it to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTokens(BTreeSet<String>);

impl FilterTokens {
    /// Union the space-delimited tokens of every input text.
    ///
    /// Empty tokens from repeated spaces are dropped, so blank input means
    /// no filter at all.
    pub fn from_inputs<'a>(inputs: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            inputs
                .into_iter()
                .flat_map(|text| text.split(' '))
                .filter(|token| !token.is_empty())
                .map(str::to_lowercase)
                .collect(),
        )
    }

    /// Whether no token constrains the results.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every token occurs in the already-lowercased line.
    pub fn matches(&self, folded_line: &str) -> bool {
        self.0.iter().all(|token| folded_line.contains(token.as_str()))
    }

    /// Tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One line of the filtered results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    /// Record the line was rendered from.
    pub id: RecordId,
    /// Rendered text, padded to the widest line of its pass.
    pub text: String,
}

/// Output of one filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPass {
    /// Surviving lines in working-list order.
    pub results: Vec<ResultLine>,
    /// Widest rendered line examined in this pass, matched or not.
    pub widest_seen: usize,
}

/// Filter the working list against `tokens`.
///
/// Included lines are padded to the widest included line so horizontal
/// scrolling stays aligned within one result set.
pub fn recompute(working: &[Record], cache: &LineCache, tokens: &FilterTokens) -> FilterPass {
    let mut widest_seen = 0;
    let mut widest_kept = 0;
    let mut kept = Vec::new();

    for record in working {
        let Some(line) = cache.lines.get(record.id().get()) else {
            continue;
        };
        widest_seen = widest_seen.max(line.width);
        if tokens.matches(&line.folded) {
            widest_kept = widest_kept.max(line.width);
            kept.push((record.id(), line));
        }
    }

    let results = kept
        .into_iter()
        .map(|(id, line)| ResultLine {
            id,
            text: pad_to_width(&line.text, widest_kept),
        })
        .collect();

    FilterPass {
        results,
        widest_seen,
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
