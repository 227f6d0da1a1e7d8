//! Error types for the grid canvas

use thiserror::Error;

/// Result type alias for canvas operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or driving a grid canvas
#[derive(Error, Debug)]
pub enum Error {
    /// A sizing parameter at construction was zero or otherwise unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A cell coordinate fell outside the grid extents
    #[error("Coordinate ({x}, {y}) out of bounds for {cols}x{rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        cols: u32,
        rows: u32,
    },

    /// A color string could not be parsed
    #[error("Invalid color: {0}")]
    ColorParse(String),
}
