//! Scrollable window onto the filtered results (pure).
//!
//! Every operation clamps immediately, so after any call
//! `y_offset <= max(0, results - text_lines)` and
//! `x_offset <= max(0, max_line_length - text_width)` hold.

use crate::state::filter::ResultLine;
use std::ops::Range;

/// Vertical and horizontal scroll state plus page geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    y_offset: usize,
    x_offset: usize,
    text_lines: usize,
    text_width: usize,
    max_line_length: usize,
}

impl Viewport {
    /// Create a viewport showing `text_lines` rows of `text_width` columns.
    pub fn new(text_lines: usize, text_width: usize) -> Self {
        Self {
            y_offset: 0,
            x_offset: 0,
            text_lines,
            text_width,
            max_line_length: 0,
        }
    }

    /// First visible result index.
    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// First visible display column.
    pub fn x_offset(&self) -> usize {
        self.x_offset
    }

    /// Visible row budget.
    pub fn text_lines(&self) -> usize {
        self.text_lines
    }

    /// Visible column budget.
    pub fn text_width(&self) -> usize {
        self.text_width
    }

    /// Widest rendered line ever observed.
    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Replace the page geometry and re-clamp.
    pub fn set_geometry(&mut self, text_lines: usize, text_width: usize, result_count: usize) {
        self.text_lines = text_lines;
        self.text_width = text_width;
        self.clamp(result_count);
    }

    /// Record a line width. The maximum only ever grows.
    pub fn observe_line_length(&mut self, length: usize) {
        self.max_line_length = self.max_line_length.max(length);
    }

    /// Largest valid vertical offset for `result_count` results.
    pub fn max_y_offset(&self, result_count: usize) -> usize {
        result_count.saturating_sub(self.text_lines)
    }

    /// Largest valid horizontal offset.
    pub fn max_x_offset(&self) -> usize {
        self.max_line_length.saturating_sub(self.text_width)
    }

    /// Horizontal step for one arrow press: a third of the width.
    pub fn horizontal_step(&self) -> usize {
        self.text_width / 3
    }

    /// Pull both offsets back inside their bounds.
    pub fn clamp(&mut self, result_count: usize) {
        self.y_offset = self.y_offset.min(self.max_y_offset(result_count));
        self.x_offset = self.x_offset.min(self.max_x_offset());
    }

    /// Scroll by `delta` rows, negative is up.
    pub fn scroll_vertical(&mut self, delta: isize, result_count: usize) {
        self.y_offset = offset_by(self.y_offset, delta).min(self.max_y_offset(result_count));
    }

    /// Scroll by `delta` columns, negative is left.
    pub fn scroll_horizontal(&mut self, delta: isize) {
        self.x_offset = offset_by(self.x_offset, delta).min(self.max_x_offset());
    }

    /// Scroll one horizontal step left.
    pub fn scroll_left(&mut self) {
        self.scroll_horizontal(-signed(self.horizontal_step()));
    }

    /// Scroll one horizontal step right.
    pub fn scroll_right(&mut self) {
        self.scroll_horizontal(signed(self.horizontal_step()));
    }

    /// Scroll up one page.
    pub fn page_up(&mut self, result_count: usize) {
        self.scroll_vertical(-signed(self.text_lines), result_count);
    }

    /// Scroll down one page.
    pub fn page_down(&mut self, result_count: usize) {
        self.scroll_vertical(signed(self.text_lines), result_count);
    }

    /// Jump to the first result.
    pub fn jump_home(&mut self) {
        self.y_offset = 0;
    }

    /// Jump so the last result sits on the last visible row.
    pub fn jump_end(&mut self, result_count: usize) {
        self.y_offset = self.max_y_offset(result_count);
    }

    /// Return both offsets to the origin.
    pub fn reset(&mut self) {
        self.y_offset = 0;
        self.x_offset = 0;
    }

    /// Result indices currently on screen.
    pub fn visible_range(&self, result_count: usize) -> Range<usize> {
        let start = self.y_offset.min(result_count);
        let end = start.saturating_add(self.text_lines).min(result_count);
        start..end
    }

    /// Number of results currently on screen.
    pub fn visible_count(&self, result_count: usize) -> usize {
        self.visible_range(result_count).len()
    }

    /// The results currently on screen.
    pub fn visible_slice<'a>(&self, results: &'a [ResultLine]) -> &'a [ResultLine] {
        &results[self.visible_range(results.len())]
    }
}

fn offset_by(offset: usize, delta: isize) -> usize {
    if delta < 0 {
        offset.saturating_sub(delta.unsigned_abs())
    } else {
        offset.saturating_add(delta.unsigned_abs())
    }
}

fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;

    fn results(count: usize) -> Vec<ResultLine> {
        (0..count)
            .map(|i| ResultLine {
                id: RecordId::new(i),
                text: format!("line {i}"),
            })
            .collect()
    }

    #[test]
    fn scroll_down_stops_at_last_page() {
        let mut viewport = Viewport::new(5, 40);
        for _ in 0..20 {
            viewport.scroll_vertical(1, 12);
        }
        assert_eq!(viewport.y_offset(), 7);
    }

    #[test]
    fn scroll_up_stops_at_zero() {
        let mut viewport = Viewport::new(5, 40);
        viewport.scroll_vertical(-3, 12);
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn short_list_never_scrolls() {
        let mut viewport = Viewport::new(10, 40);
        viewport.scroll_vertical(1, 4);
        viewport.page_down(4);
        viewport.jump_end(4);
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn page_down_converges_to_last_page() {
        let mut viewport = Viewport::new(4, 40);
        viewport.page_down(10);
        assert_eq!(viewport.y_offset(), 4);
        viewport.page_down(10);
        assert_eq!(viewport.y_offset(), 6);
        viewport.page_down(10);
        assert_eq!(viewport.y_offset(), 6);
    }

    #[test]
    fn page_up_saturates_at_zero() {
        let mut viewport = Viewport::new(4, 40);
        viewport.jump_end(10);
        viewport.page_up(10);
        assert_eq!(viewport.y_offset(), 2);
        viewport.page_up(10);
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        let mut viewport = Viewport::new(3, 40);
        viewport.jump_end(10);
        assert_eq!(viewport.y_offset(), 7);
        viewport.jump_home();
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn clamp_after_results_shrink() {
        let mut viewport = Viewport::new(3, 40);
        viewport.jump_end(10);
        viewport.clamp(4);
        assert_eq!(viewport.y_offset(), 1);
        viewport.clamp(0);
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn horizontal_step_is_a_third_of_width() {
        let mut viewport = Viewport::new(3, 30);
        viewport.observe_line_length(100);
        viewport.scroll_right();
        assert_eq!(viewport.x_offset(), 10);
        viewport.scroll_right();
        assert_eq!(viewport.x_offset(), 20);
        viewport.scroll_left();
        assert_eq!(viewport.x_offset(), 10);
    }

    #[test]
    fn horizontal_scroll_bounded_by_widest_line() {
        let mut viewport = Viewport::new(3, 30);
        viewport.observe_line_length(45);
        for _ in 0..5 {
            viewport.scroll_right();
        }
        assert_eq!(viewport.x_offset(), 15);
        for _ in 0..5 {
            viewport.scroll_left();
        }
        assert_eq!(viewport.x_offset(), 0);
    }

    #[test]
    fn narrow_lines_do_not_scroll_horizontally() {
        let mut viewport = Viewport::new(3, 30);
        viewport.observe_line_length(20);
        viewport.scroll_right();
        assert_eq!(viewport.x_offset(), 0);
    }

    #[test]
    fn max_line_length_is_monotonic() {
        let mut viewport = Viewport::new(3, 30);
        viewport.observe_line_length(80);
        viewport.observe_line_length(40);
        assert_eq!(viewport.max_line_length(), 80);
    }

    #[test]
    fn visible_slice_is_bounded_by_page() {
        let lines = results(10);
        let mut viewport = Viewport::new(4, 40);
        viewport.scroll_vertical(3, lines.len());
        let visible = viewport.visible_slice(&lines);
        let ids: Vec<_> = visible.iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![3, 4, 5, 6]);
    }

    #[test]
    fn visible_slice_of_last_page_may_be_short_when_list_is_short() {
        let lines = results(2);
        let viewport = Viewport::new(4, 40);
        assert_eq!(viewport.visible_slice(&lines).len(), 2);
        assert_eq!(viewport.visible_count(0), 0);
    }

    #[test]
    fn shrinking_geometry_reclamps() {
        let mut viewport = Viewport::new(2, 40);
        viewport.jump_end(10);
        viewport.set_geometry(8, 40, 10);
        assert_eq!(viewport.y_offset(), 2);
    }
}
