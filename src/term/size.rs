//! Window size queries

use std::os::unix::io::{AsRawFd, RawFd};

use nix::errno::Errno;
use nix::libc;

use super::error::{TermError, TermResult};
use crate::geometry::Dimensions;

/// Window size in characters and pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Number of rows (characters)
    pub rows: u16,
    /// Number of columns (characters)
    pub cols: u16,
    /// Width in pixels (often 0)
    pub pixel_width: u16,
    /// Height in pixels (often 0)
    pub pixel_height: u16,
}

impl WindowSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            rows,
            cols,
            pixel_width: 0,
            pixel_height: 0,
        }
    }

    /// Character dimensions of the window
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(usize::from(self.cols), usize::from(self.rows))
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl From<libc::winsize> for WindowSize {
    fn from(ws: libc::winsize) -> Self {
        Self {
            rows: ws.ws_row,
            cols: ws.ws_col,
            pixel_width: ws.ws_xpixel,
            pixel_height: ws.ws_ypixel,
        }
    }
}

impl From<WindowSize> for Dimensions {
    fn from(size: WindowSize) -> Self {
        size.dimensions()
    }
}

/// Get the window size of the terminal behind `fd`
pub fn window_size(fd: RawFd) -> TermResult<WindowSize> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCGWINSZ only writes into the winsize we pass
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ as _, &mut ws) };
    if result < 0 {
        return Err(TermError::NotATerminal(Errno::last()));
    }

    let size = WindowSize::from(ws);
    if size.cols == 0 || size.rows == 0 {
        return Err(TermError::EmptyWindow {
            cols: size.cols,
            rows: size.rows,
        });
    }
    Ok(size)
}

/// Get the dimensions of the terminal attached to stdin
pub fn terminal_size() -> TermResult<Dimensions> {
    window_size(std::io::stdin().as_raw_fd()).map(Dimensions::from)
}

/// Get the terminal dimensions, or 80x24 when there is no terminal
pub fn terminal_size_or_default() -> Dimensions {
    terminal_size().unwrap_or_else(|e| {
        tracing::debug!("terminal size unavailable, using default: {}", e);
        Dimensions::default()
    })
}
