//! Character canvas
//!
//! A canvas is a fixed-size grid of code points stored row-major in one
//! contiguous buffer, plus a write cursor. The cursor is kept as a flat
//! offset into the buffer, so advancing it past the last column of a row
//! lands on column 0 of the next row.
//!
//! The zero code point ([`Canvas::UNSET`]) marks a cell that was never
//! written. Linear writes store it like any other character; compositing
//! can treat it as transparent (see [`Transparency`]).

mod compose;
mod crop;

use std::fmt;

use crate::error::{CanvasError, Result};
use crate::geometry::{signed, Dimensions, Point};

pub use compose::Transparency;

/// Conversion of a raw value into a storable code point
///
/// Implemented for `char`, which always succeeds, and for `u32`, which fails
/// with [`CanvasError::InvalidCharacter`] for surrogates and values past
/// `U+10FFFF`.
pub trait IntoCodePoint {
    fn into_code_point(self) -> Result<char>;
}

impl IntoCodePoint for char {
    fn into_code_point(self) -> Result<char> {
        Ok(self)
    }
}

impl IntoCodePoint for u32 {
    fn into_code_point(self) -> Result<char> {
        char::from_u32(self).ok_or(CanvasError::InvalidCharacter(self))
    }
}

/// A fixed-size 2D buffer of code points with a write cursor
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Cell storage, row-major: `index = y * width + x`
    cells: Vec<char>,
    width: usize,
    height: usize,
    /// Flat offset of the next linear write, `0..=cells.len()`
    cursor: usize,
}

impl Canvas {
    /// The "never written" sentinel
    pub const UNSET: char = '\0';

    /// Create a canvas with every cell unset and the cursor at the origin
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Self::UNSET; width * height],
            width,
            height,
            cursor: 0,
        }
    }

    /// Create a canvas from signed dimensions, taking their absolute value
    pub fn from_signed(width: isize, height: isize) -> Self {
        Self::new(width.unsigned_abs(), height.unsigned_abs())
    }

    /// Create a canvas exactly large enough to hold `lines`
    ///
    /// The width is the longest line in code points and the height is the
    /// number of lines. Columns past the end of a shorter line stay unset.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut canvas = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let start = y * width;
            canvas.cells[start..start + row.len()].copy_from_slice(row);
        }
        canvas
    }

    /// Create a canvas from a block of text, one row per line
    ///
    /// A trailing newline does not add an empty row.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the canvas has no cells (zero width or height)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (x, y) to a flat index, `None` if outside the canvas
    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Get the code point at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.index_of(x, y).map(|i| self.cells[i])
    }

    /// Set the code point at (x, y) without moving the cursor
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<()> {
        match self.index_of(x, y) {
            Some(i) => {
                self.cells[i] = ch;
                Ok(())
            },
            None => Err(self.out_of_bounds(signed(x), signed(y))),
        }
    }

    /// Get a row as a slice of the backing buffer
    pub fn row(&self, y: usize) -> Option<&[char]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// All cells in row-major order
    pub fn code_points(&self) -> &[char] {
        &self.cells
    }

    /// UTF-8 encoding of the rendered text
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Current cursor position
    pub fn cursor(&self) -> Point {
        if self.width == 0 {
            return Point::ORIGIN;
        }
        Point::new(
            signed(self.cursor % self.width),
            signed(self.cursor / self.width),
        )
    }

    /// Move the cursor to (x, y)
    ///
    /// `x == width` and `y == height` are accepted and denote the position
    /// just past the last cell, so writes can be chained. The resulting
    /// offset never exceeds the number of cells.
    pub fn set_cursor(&mut self, x: isize, y: isize) -> Result<()> {
        let (x, y) = self.check_bounds(x, y)?;
        self.cursor = (y * self.width + x).min(self.cells.len());
        Ok(())
    }

    /// Validate a cursor-style position, `0..=width` by `0..=height`
    pub(crate) fn check_bounds(&self, x: isize, y: isize) -> Result<(usize, usize)> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(col), Ok(row)) if col <= self.width && row <= self.height => Ok((col, row)),
            _ => Err(self.out_of_bounds(x, y)),
        }
    }

    fn out_of_bounds(&self, x: isize, y: isize) -> CanvasError {
        CanvasError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Number of cells left between the cursor and the end of the canvas
    pub fn runway(&self) -> usize {
        self.cells.len() - self.cursor
    }

    /// Check if a linear write has nowhere left to go
    pub fn is_full(&self) -> bool {
        self.runway() == 0
    }

    /// Write a string at the cursor
    ///
    /// Returns the number of code points written. Writing stops silently
    /// when the canvas fills up; only a write into an already full canvas
    /// fails with [`CanvasError::Full`].
    pub fn write_text(&mut self, text: &str) -> Result<usize> {
        self.write_chars(text.chars())
    }

    /// Write raw code points at the cursor, unset cells included
    pub fn write_code_points(&mut self, code_points: &[char]) -> Result<usize> {
        self.write_chars(code_points.iter().copied())
    }

    /// Write the rendered text of another canvas at the cursor
    ///
    /// Row terminators are written as `'\n'` cells.
    pub fn write_canvas_text(&mut self, other: &Canvas) -> Result<usize> {
        self.write_text(&other.to_string())
    }

    /// Decode UTF-8 bytes and write them at the cursor
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            CanvasError::UnsupportedType(format!(
                "invalid UTF-8 after {} bytes",
                e.valid_up_to()
            ))
        })?;
        self.write_text(text)
    }

    fn write_chars(&mut self, chars: impl Iterator<Item = char>) -> Result<usize> {
        if self.is_full() {
            return Err(CanvasError::Full);
        }

        let mut written = 0;
        for (cell, ch) in self.cells[self.cursor..].iter_mut().zip(chars) {
            *cell = ch;
            written += 1;
        }
        self.cursor += written;
        Ok(written)
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: impl IntoCodePoint) -> Result<()> {
        let ch = value.into_code_point()?;
        self.cells.fill(ch);
        Ok(())
    }

    /// Replace every `from` cell with `to`, returning the number replaced
    pub fn replace(&mut self, from: impl IntoCodePoint, to: impl IntoCodePoint) -> Result<usize> {
        let from = from.into_code_point()?;
        let to = to.into_code_point()?;

        let mut count = 0;
        for cell in self.cells.iter_mut().filter(|c| **c == from) {
            *cell = to;
            count += 1;
        }
        Ok(count)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for row in self.rows() {
            for &ch in row {
                f.write_char(ch)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cursor", &self.cursor())
            .finish()
    }
}

/// Formatted writes go through [`Canvas::write_text`]; a full canvas is a
/// formatting error.
impl fmt::Write for Canvas {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_text(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}
