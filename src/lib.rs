//! Textcanvas
//!
//! Fixed-size character canvases for building text layouts:
//!
//! - `canvas`: the [`Canvas`] grid with its write cursor, compositing
//!   (draw, tile), crop, fill and replace
//! - `geometry`: points, rectangles and dimensions
//! - `error`: canvas error type
//! - `term`: terminal window size, for sizing a canvas to the screen
//!
//! ```
//! use textcanvas::{Canvas, Point, Transparency};
//!
//! let mut background = Canvas::new(5, 2);
//! background.fill('x').unwrap();
//!
//! let stamp = Canvas::from_lines(["ab"]);
//! background.draw(&stamp, Point::new(-1, 1), &Transparency::Opaque);
//! assert_eq!(background.to_string(), "xxxxx\nbxxxx\n");
//! ```

pub mod canvas;
pub mod error;
pub mod geometry;
#[cfg(unix)]
pub mod term;

pub use canvas::{Canvas, IntoCodePoint, Transparency};
pub use error::{CanvasError, Result};
pub use geometry::{Dimensions, Point, Rect};
