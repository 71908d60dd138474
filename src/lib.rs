//! Puzzle-piece map generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod error;
pub mod gamemap;
pub mod generator;
pub mod overworld;
pub mod piece;
pub mod pieces;
pub mod seeds;
pub mod tile;
pub mod util;
