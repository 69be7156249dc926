//! Application state and transitions.
//!
//! AppState is the engine context: it exclusively owns the working list,
//! the filtered results, the viewport, the marker and the input fields.
//! All transitions are plain method calls testable without a terminal.

use crate::model::{Column, Record, RecordId};
use crate::state::filter::{self, FilterTokens, LineCache, ResultLine};
use crate::state::marker::Marker;
use crate::state::sort::{SortController, SortDirection};
use crate::state::text_input::{FocusRing, InputField, TextInput, CONNECTION_INPUT_CAPACITY};
use crate::state::viewport::Viewport;
use tracing::debug;

// ===== AppState =====

/// Browser state. Pure data, no side effects.
///
/// # Refresh order
///
/// Every transition that can change what is on screen ends in
/// [`AppState::refresh`] or [`AppState::settle`], which apply, in order:
///
/// 1. filter recompute (only `refresh`)
/// 2. viewport re-clamp against the result count
/// 3. marker re-clamp against the visible count
/// 4. selection resolve from the marked visible line
///
/// so that after any public method the scroll, marker and selection
/// invariants hold.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Working list in current sort order.
    records: Vec<Record>,

    /// Rendered line per record ID.
    lines: LineCache,

    /// Lines surviving the current filter.
    results: Vec<ResultLine>,

    viewport: Viewport,
    marker: Marker,
    sort: SortController,

    connection_input: TextInput,
    filter_input: TextInput,
    focus: FocusRing,

    /// Whether the key binding overlay is shown.
    pub help_visible: bool,
}

impl AppState {
    /// Create state over `records` with a `text_lines` x `text_width` list area.
    ///
    /// `records` must carry dense IDs `0..records.len()` as produced by the
    /// record store loader.
    pub fn new(records: Vec<Record>, text_lines: usize, text_width: usize) -> Self {
        let lines = LineCache::build(&records);
        let mut state = Self {
            records,
            lines,
            results: Vec::new(),
            viewport: Viewport::new(text_lines, text_width),
            marker: Marker::default(),
            sort: SortController::default(),
            connection_input: TextInput::new(CONNECTION_INPUT_CAPACITY),
            filter_input: TextInput::new(usize::MAX),
            focus: FocusRing::default(),
            help_visible: false,
        };
        state.refresh();
        state
    }

    // ===== Reads =====

    /// Working list in current order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// All lines surviving the current filter.
    pub fn results(&self) -> &[ResultLine] {
        &self.results
    }

    /// Lines currently inside the viewport.
    pub fn visible_lines(&self) -> &[ResultLine] {
        self.viewport.visible_slice(&self.results)
    }

    /// Scroll offsets and geometry.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Index of the marked line within [`AppState::visible_lines`].
    pub fn marker_line(&self) -> usize {
        self.marker.line()
    }

    /// Record ID under the marker, if any line is visible.
    pub fn selected_id(&self) -> Option<RecordId> {
        self.marker.selected()
    }

    /// Record under the marker, if any line is visible.
    pub fn selected_record(&self) -> Option<&Record> {
        let id = self.marker.selected()?;
        self.records.iter().find(|record| record.id() == id)
    }

    /// Direction the next sort will use.
    pub fn next_sort_direction(&self) -> SortDirection {
        self.sort.next_direction()
    }

    /// Column and direction of the most recent sort.
    pub fn last_sort(&self) -> Option<(Column, SortDirection)> {
        self.sort.last()
    }

    /// Field receiving typed characters.
    pub fn focus(&self) -> InputField {
        self.focus.current()
    }

    /// Contents of an input field.
    pub fn input(&self, field: InputField) -> &TextInput {
        match field {
            InputField::Connection => &self.connection_input,
            InputField::Filter => &self.filter_input,
        }
    }

    /// Current filter tokens from all input fields.
    pub fn tokens(&self) -> FilterTokens {
        FilterTokens::from_inputs([self.filter_input.text(), self.connection_input.text()])
    }

    /// Look up a record by typed connection number in the unfiltered list.
    ///
    /// Ignores filter and marker state entirely. Returns `None` for
    /// non-numeric text or a number outside `0..records.len()`.
    pub fn lookup_direct(&self, text: &str) -> Option<&Record> {
        let id = RecordId::parse(text)?;
        if id.get() >= self.records.len() {
            return None;
        }
        self.records.iter().find(|record| record.id() == id)
    }

    /// Record that Enter would connect to right now.
    ///
    /// With `Conn #` focused and non-empty, only the direct lookup is
    /// consulted, so an invalid number rejects the commit even when a line
    /// is marked. Otherwise the marked line is used.
    pub fn commit_target(&self) -> Option<&Record> {
        if self.focus() == InputField::Connection && !self.connection_input.is_empty() {
            let target = self.lookup_direct(self.connection_input.text());
            if target.is_none() {
                debug!(
                    input = self.connection_input.text(),
                    "Rejected direct connection number"
                );
            }
            return target;
        }
        self.selected_record()
    }

    // ===== Transitions =====

    /// Recompute results from the working list, then settle.
    pub fn refresh(&mut self) {
        let pass = filter::recompute(&self.records, &self.lines, &self.tokens());
        self.viewport.observe_line_length(pass.widest_seen);
        self.results = pass.results;
        self.settle();
    }

    /// Re-clamp viewport and marker against unchanged results, then resolve.
    fn settle(&mut self) {
        let count = self.results.len();
        self.viewport.clamp(count);
        self.marker.clamp(self.viewport.visible_count(count));
        self.marker.resolve(self.viewport.visible_slice(&self.results));
    }

    /// Replace the list area geometry.
    pub fn set_geometry(&mut self, text_lines: usize, text_width: usize) {
        self.viewport
            .set_geometry(text_lines, text_width, self.results.len());
        self.settle();
    }

    /// Limit how many characters the `Filter:` field holds.
    pub fn set_filter_capacity(&mut self, capacity: usize) {
        self.filter_input.set_capacity(capacity);
    }

    /// Type `ch` into the focused field if that field accepts it.
    ///
    /// Editing the filter returns the viewport to the origin.
    /// Returns whether the text changed.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let field = self.focus();
        if !field.accepts(ch) {
            return false;
        }
        let changed = match field {
            InputField::Connection => self.connection_input.push(ch),
            InputField::Filter => self.filter_input.push(ch),
        };
        if changed {
            self.after_edit(field);
        }
        changed
    }

    /// Append text to the `Filter:` field, as if typed.
    pub fn type_filter(&mut self, text: &str) {
        self.filter_input.push_str(text);
        self.after_edit(InputField::Filter);
    }

    /// Delete the last character of the focused field.
    pub fn delete_back(&mut self) -> bool {
        let field = self.focus();
        let changed = match field {
            InputField::Connection => self.connection_input.pop(),
            InputField::Filter => self.filter_input.pop(),
        };
        if changed {
            self.after_edit(field);
        }
        changed
    }

    fn after_edit(&mut self, field: InputField) {
        if field == InputField::Filter {
            self.viewport.reset();
        }
        self.refresh();
    }

    /// Move focus to the next input field.
    pub fn cycle_focus(&mut self) -> InputField {
        self.focus.advance()
    }

    /// Sort the working list by `column` and refresh.
    pub fn sort_by(&mut self, column: Column) -> SortDirection {
        let direction = self.sort.sort_by(&mut self.records, column);
        self.refresh();
        direction
    }

    /// Scroll the list by `delta` rows.
    pub fn scroll_vertical(&mut self, delta: isize) {
        self.viewport.scroll_vertical(delta, self.results.len());
        self.settle();
    }

    /// Scroll one horizontal step left.
    pub fn scroll_left(&mut self) {
        self.viewport.scroll_left();
        self.settle();
    }

    /// Scroll one horizontal step right.
    pub fn scroll_right(&mut self) {
        self.viewport.scroll_right();
        self.settle();
    }

    /// Scroll up one page.
    pub fn page_up(&mut self) {
        self.viewport.page_up(self.results.len());
        self.settle();
    }

    /// Scroll down one page.
    pub fn page_down(&mut self) {
        self.viewport.page_down(self.results.len());
        self.settle();
    }

    /// Jump to the first result.
    pub fn jump_home(&mut self) {
        self.viewport.jump_home();
        self.settle();
    }

    /// Jump to the last page of results.
    pub fn jump_end(&mut self) {
        self.viewport.jump_end(self.results.len());
        self.settle();
    }

    /// Move the marker by `delta` visible lines without scrolling.
    pub fn move_marker(&mut self, delta: isize) {
        let visible = self.viewport.visible_count(self.results.len());
        self.marker.move_by(delta, visible);
        self.settle();
    }

    /// Mark the first visible line.
    pub fn marker_to_top(&mut self) {
        self.marker.jump_to_top();
        self.settle();
    }

    /// Mark the last visible line.
    pub fn marker_to_bottom(&mut self) {
        let visible = self.viewport.visible_count(self.results.len());
        self.marker.jump_to_bottom(visible);
        self.settle();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
