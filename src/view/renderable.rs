//! Common drawing capability for screen widgets.

use ratatui::{buffer::Buffer, layout::Rect};

/// Something that can draw itself into a rectangle of the frame buffer.
///
/// Every screen widget implements this so one draw pass can walk a
/// homogeneous list of `(Rect, &dyn Renderable)` pairs.
pub trait Renderable {
    /// Draw into `area` of `buf`. Must not touch cells outside `area`.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Draw every widget into its area, in order.
pub fn render_all(widgets: &[(Rect, &dyn Renderable)], buf: &mut Buffer) {
    for (area, widget) in widgets {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            continue;
        }
        widget.render(area, buf);
    }
}
