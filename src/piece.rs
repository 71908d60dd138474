//! Puzzle pieces: fixed-size tile blocks whose edges must interlock.
//!
//! A piece is a 5x5 block of tiles. Its four edge-opening profiles are
//! derived once at construction and drive the compatibility checks the map
//! assembler relies on.

use std::fmt;

use bitflags::bitflags;

use crate::error::MapGenError;
use crate::tile::{Tile, TILE_OPENING};

/// Length of a side of a puzzle piece, in tiles.
pub const PIECE_SIZE: usize = 5;
/// Number of tiles in a puzzle piece.
pub const PIECE_AREA: usize = PIECE_SIZE * PIECE_SIZE;

bitflags! {
    /// Directions in which one piece may sit next to another. Combinable,
    /// since two pieces can fit together several ways at once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DirectionFlags: u8 {
        const UP = 1;
        const RIGHT = 2;
        const DOWN = 4;
        const LEFT = 8;
    }
}

bitflags! {
    /// Which column class of a generated map a piece may occupy: the first
    /// column, any middle column, or the last column. A template can allow
    /// several classes at once (blank pieces allow all three).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PieceType: u8 {
        const LEFT = 1;
        const MIDDLE = 2;
        const RIGHT = 4;
    }
}

/// One 5x5 tile block with derived edge-opening profiles.
///
/// For example, the left column of
///
/// ```text
/// 10000
/// 00000
/// 10000
/// 00000
/// 00000
/// ```
///
/// gives `left_edge_openings` of `[true, false, true, false, false]`.
///
/// All derived fields are a pure function of `tiles`; they are computed once
/// here and never mutated afterwards, which is why everything is private.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzlePiece {
    tiles: [Tile; PIECE_AREA],
    piece_type: PieceType,
    left_edge_openings: [bool; PIECE_SIZE],
    right_edge_openings: [bool; PIECE_SIZE],
    top_edge_openings: [bool; PIECE_SIZE],
    bottom_edge_openings: [bool; PIECE_SIZE],
    is_blank: bool,
    has_left_opening: bool,
    has_right_opening: bool,
    has_top_opening: bool,
    has_bottom_opening: bool,
}

impl PuzzlePiece {
    /// Build a piece from a row-major tile sequence of exactly
    /// [`PIECE_AREA`] values, deriving all edges and flags.
    pub fn new(tiles: &[Tile], piece_type: PieceType) -> Result<Self, MapGenError> {
        if tiles.len() != PIECE_AREA {
            return Err(MapGenError::InvalidPiece {
                len: tiles.len(),
                expected: PIECE_AREA,
            });
        }

        let mut fixed = [0 as Tile; PIECE_AREA];
        fixed.copy_from_slice(tiles);

        let mut piece = Self {
            tiles: fixed,
            piece_type,
            left_edge_openings: [false; PIECE_SIZE],
            right_edge_openings: [false; PIECE_SIZE],
            top_edge_openings: [false; PIECE_SIZE],
            bottom_edge_openings: [false; PIECE_SIZE],
            is_blank: true,
            has_left_opening: false,
            has_right_opening: false,
            has_top_opening: false,
            has_bottom_opening: false,
        };

        // One scan touches all four edges at each index.
        for i in 0..PIECE_SIZE {
            piece.left_edge_openings[i] = fixed[i * PIECE_SIZE] == TILE_OPENING;
            piece.right_edge_openings[i] =
                fixed[i * PIECE_SIZE + (PIECE_SIZE - 1)] == TILE_OPENING;
            piece.top_edge_openings[i] = fixed[i] == TILE_OPENING;
            piece.bottom_edge_openings[i] =
                fixed[i + PIECE_SIZE * (PIECE_SIZE - 1)] == TILE_OPENING;

            piece.has_left_opening |= piece.left_edge_openings[i];
            piece.has_right_opening |= piece.right_edge_openings[i];
            piece.has_top_opening |= piece.top_edge_openings[i];
            piece.has_bottom_opening |= piece.bottom_edge_openings[i];
        }

        // Blankness covers the whole block, not just the boundary tiles.
        piece.is_blank = fixed.iter().all(|&t| t != TILE_OPENING);

        Ok(piece)
    }

    pub fn tiles(&self) -> &[Tile; PIECE_AREA] {
        &self.tiles
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn left_edge_openings(&self) -> &[bool; PIECE_SIZE] {
        &self.left_edge_openings
    }

    pub fn right_edge_openings(&self) -> &[bool; PIECE_SIZE] {
        &self.right_edge_openings
    }

    pub fn top_edge_openings(&self) -> &[bool; PIECE_SIZE] {
        &self.top_edge_openings
    }

    pub fn bottom_edge_openings(&self) -> &[bool; PIECE_SIZE] {
        &self.bottom_edge_openings
    }

    pub fn is_blank(&self) -> bool {
        self.is_blank
    }

    pub fn has_left_opening(&self) -> bool {
        self.has_left_opening
    }

    pub fn has_right_opening(&self) -> bool {
        self.has_right_opening
    }

    pub fn has_top_opening(&self) -> bool {
        self.has_top_opening
    }

    pub fn has_bottom_opening(&self) -> bool {
        self.has_bottom_opening
    }

    /// Figure out in which directions this piece can sit next to `other`.
    ///
    /// `None` means "edge of map": anything fits next to nothing, so all four
    /// flags come back set. Otherwise a direction is compatible iff the two
    /// facing edge profiles are element-wise identical. E.g. RIGHT being set
    /// means this piece may be placed to the right of `other`.
    pub fn can_fit_together(&self, other: Option<&PuzzlePiece>) -> DirectionFlags {
        let Some(other) = other else {
            return DirectionFlags::all();
        };

        let mut flags = DirectionFlags::empty();

        if self.left_edge_openings == other.right_edge_openings {
            flags |= DirectionFlags::RIGHT;
        }
        if self.right_edge_openings == other.left_edge_openings {
            flags |= DirectionFlags::LEFT;
        }
        if self.top_edge_openings == other.bottom_edge_openings {
            flags |= DirectionFlags::DOWN;
        }
        if self.bottom_edge_openings == other.top_edge_openings {
            flags |= DirectionFlags::UP;
        }

        flags
    }

    /// Write this piece's tiles into a flat map array of stride `width`,
    /// with the piece's top-left corner at `(x, y)`.
    pub fn apply_to_map_array(
        &self,
        map_array: &mut [Tile],
        width: usize,
        x: usize,
        y: usize,
    ) -> Result<(), MapGenError> {
        let height = if width == 0 { 0 } else { map_array.len() / width };
        if x + PIECE_SIZE > width || y + PIECE_SIZE > height {
            return Err(MapGenError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        for (i, &tile) in self.tiles.iter().enumerate() {
            let row = i / PIECE_SIZE;
            let column = i % PIECE_SIZE;
            map_array[(y + row) * width + x + column] = tile;
        }

        Ok(())
    }
}

/// Renders the piece as rows of concatenated tile digits. Diagnostic only.
impl fmt::Display for PuzzlePiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..PIECE_SIZE {
            for column in 0..PIECE_SIZE {
                write!(f, "{}", self.tiles[row * PIECE_SIZE + column])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
