//! Cropping into an independently owned canvas

use super::Canvas;
use crate::error::Result;
use crate::geometry::Rect;

impl Canvas {
    /// Copy the region `rect` into a new canvas
    ///
    /// The origin must pass the same bounds test as [`Canvas::set_cursor`].
    /// A region reaching past the right or bottom edge is truncated to the
    /// part that overlaps this canvas. The cursor is not moved.
    pub fn crop(&self, rect: Rect) -> Result<Canvas> {
        let (x, y) = self.check_bounds(rect.origin.x, rect.origin.y)?;
        let width = rect.width.min(self.width - x);
        let height = rect.height.min(self.height - y);

        let mut cropped = Canvas::new(width, height);
        for row in 0..height {
            let src = (y + row) * self.width + x;
            let dst = row * width;
            cropped.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }
        Ok(cropped)
    }
}
