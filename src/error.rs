//! Error types for map generation
//!
//! Everything here is recoverable: generation is a pure computation over
//! in-memory grids, so failures surface as values rather than aborts.

use thiserror::Error;

/// Errors that can occur while constructing pieces or assembling maps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapGenError {
    /// A puzzle piece was constructed from a tile sequence of the wrong length.
    #[error("puzzle piece requires exactly {expected} tiles, got {len}")]
    InvalidPiece { len: usize, expected: usize },

    /// A piece write would land outside the target map array.
    #[error("piece placement at ({x}, {y}) exceeds map bounds {width}x{height}")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// The piece catalog had no piece satisfying the neighbor constraints at a cell.
    #[error("no piece in the catalog fits at piece cell ({x}, {y})")]
    NoFittingPiece { x: usize, y: usize },

    /// Map dimensions too small to hold the left/middle/right column classes.
    #[error("map must be at least 2x1 pieces, got {pieces_wide}x{pieces_high}")]
    InvalidDimensions {
        pieces_wide: usize,
        pieces_high: usize,
    },
}
