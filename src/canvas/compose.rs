//! Compositing
//!
//! Drawing pastes one canvas into another at a signed offset. Negative
//! offsets crop the source; the destination is never shifted. Cells that run
//! past the destination's right or bottom edge are dropped.

use std::collections::HashSet;

use super::Canvas;
use crate::geometry::{signed, Point};

/// Which source cells a draw leaves out
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Transparency {
    /// Copy every cell
    #[default]
    Opaque,
    /// Skip unset cells, so they act as an alpha mask
    Unset,
    /// Skip any cell in the set
    Chars(HashSet<char>),
}

impl Transparency {
    /// Build a transparency set from characters
    pub fn chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self::Chars(chars.into_iter().collect())
    }

    /// Check if `ch` should leave the destination cell untouched
    pub fn is_transparent(&self, ch: char) -> bool {
        match self {
            Self::Opaque => false,
            Self::Unset => ch == Canvas::UNSET,
            Self::Chars(set) => set.contains(&ch),
        }
    }
}

impl FromIterator<char> for Transparency {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::chars(iter)
    }
}

/// Split a signed offset into (source crop, destination paste)
fn split_offset(offset: isize) -> (usize, usize) {
    if offset < 0 {
        (offset.unsigned_abs(), 0)
    } else {
        (0, offset.unsigned_abs())
    }
}

impl Canvas {
    /// Draw `source` into this canvas with its top-left corner at `offset`
    ///
    /// Returns the number of destination cells visited, including cells
    /// left untouched because the source cell was transparent.
    ///
    /// Afterwards the cursor sits one cell past the bottom-right corner of
    /// the pasted region, so a following [`Canvas::write_text`] or draw at
    /// [`Canvas::cursor`] continues where this one ended.
    ///
    /// A canvas cannot be drawn into itself; draw from a clone instead.
    pub fn draw(&mut self, source: &Canvas, offset: Point, transparency: &Transparency) -> usize {
        if signed(source.width).saturating_add(offset.x) <= 0
            || signed(source.height).saturating_add(offset.y) <= 0
        {
            tracing::trace!("draw at {} lies outside the destination", offset);
            return 0;
        }
        if self.is_empty() || source.is_empty() {
            return 0;
        }

        let (crop_x, paste_x) = split_offset(offset.x);
        let (crop_y, paste_y) = split_offset(offset.y);
        // non-zero: the source reaches past column and row 0
        let visible_width = source.width - crop_x;
        let visible_height = source.height - crop_y;

        let span = self.width.saturating_sub(paste_x).min(visible_width);
        let mut count = 0;
        if span > 0 {
            for (i, src_row) in source.rows().skip(crop_y).enumerate() {
                let y = paste_y.saturating_add(i);
                if y >= self.height {
                    break;
                }

                let src = &src_row[crop_x..crop_x + span];
                let start = y * self.width + paste_x;
                let dst = &mut self.cells[start..start + span];
                match transparency {
                    Transparency::Opaque => dst.copy_from_slice(src),
                    _ => {
                        for (cell, &ch) in dst.iter_mut().zip(src) {
                            if !transparency.is_transparent(ch) {
                                *cell = ch;
                            }
                        }
                    },
                }
                count += span;
            }
        }

        let right = paste_x
            .saturating_add(visible_width - 1)
            .min(self.width - 1);
        let bottom = paste_y
            .saturating_add(visible_height - 1)
            .min(self.height - 1);
        self.cursor = bottom * self.width + right + 1;

        tracing::trace!("draw at {} visited {} cells", offset, count);
        count
    }

    /// Fill this canvas with adjacent copies of `source`
    ///
    /// Copies are laid out left to right, top to bottom, each one placed at
    /// the cursor left by the previous draw. Copies in the last column and
    /// row are clipped. Returns the total cell count reported by the draws.
    pub fn tile(&mut self, source: &Canvas, transparency: &Transparency) -> usize {
        if self.is_empty() || source.is_empty() {
            tracing::debug!(
                "nothing to tile: {} source into {} destination",
                source.dimensions(),
                self.dimensions()
            );
            return 0;
        }

        let bottom_edge = signed(self.height);
        let mut at = Point::ORIGIN;
        let mut count = 0;
        let mut tiles = 0;
        loop {
            let row_start = at.y;
            count += self.draw(source, at, transparency);
            tiles += 1;
            if self.is_full() {
                break;
            }

            let cursor = self.cursor();
            at = if cursor.x != 0 {
                Point::new(cursor.x, row_start)
            } else {
                cursor
            };
            if at.y >= bottom_edge {
                break;
            }
        }

        tracing::debug!("tiled {} copies, {} cells", tiles, count);
        count
    }
}
