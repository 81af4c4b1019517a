//! Error types for canvas operations

use thiserror::Error;

/// Canvas error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// A cursor position or crop origin lies outside the canvas
    #[error("location ({x}, {y}) out of bounds for {width}x{height} canvas")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    /// A linear write was attempted with no runway left
    #[error("canvas full")]
    Full,

    /// A value is not a Unicode scalar value
    #[error("invalid character: U+{0:04X}")]
    InvalidCharacter(u32),

    /// Input has no code-point conversion
    #[error("unsupported input: {0}")]
    UnsupportedType(String),
}

/// Result type for canvas operations
pub type Result<T> = std::result::Result<T, CanvasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CanvasError::OutOfBounds {
            x: 6,
            y: 0,
            width: 5,
            height: 2,
        };
        assert_eq!(err.to_string(), "location (6, 0) out of bounds for 5x2 canvas");
        assert_eq!(
            CanvasError::InvalidCharacter(0xD800).to_string(),
            "invalid character: U+D800"
        );
        assert_eq!(CanvasError::Full.to_string(), "canvas full");
    }
}
