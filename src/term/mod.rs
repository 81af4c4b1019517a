//! Terminal dimensions
//!
//! Callers that want a canvas covering the visible terminal query the
//! window size here. The canvas itself never depends on this module.
//!
//! Reference: https://man7.org/linux/man-pages/man4/tty_ioctl.4.html

mod error;
mod size;

pub use error::{TermError, TermResult};
pub use size::{terminal_size, terminal_size_or_default, window_size, WindowSize};
