//! Error types for terminal queries

use thiserror::Error;

/// Terminal query error type
#[derive(Error, Debug)]
pub enum TermError {
    /// The descriptor is not attached to a terminal
    #[error("not a terminal: {0}")]
    NotATerminal(#[source] nix::Error),

    /// The terminal reported a zero-sized window
    #[error("terminal reported an empty window ({cols}x{rows})")]
    EmptyWindow { cols: u16, rows: u16 },
}

/// Result type for terminal queries
pub type TermResult<T> = Result<T, TermError>;
