//! Map assembly from interlocking puzzle pieces.
//!
//! A gameplay map is a grid of 5x5 puzzle pieces. Column 0 takes LEFT
//! pieces, the last column RIGHT pieces, everything between MIDDLE pieces.
//! Pieces are chosen row by row; every candidate must interlock with the
//! already-placed left and top neighbors, so edge openings line up across
//! the whole map. One randomly chosen row is forced to carry a corridor all
//! the way across, which guarantees a left-to-right path.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::MapGenError;
use crate::gamemap::GameMap;
use crate::piece::{DirectionFlags, PieceType, PuzzlePiece, PIECE_SIZE};
use crate::pieces::{self, PieceTemplate};
use crate::seeds::GenSeeds;
use crate::tile::{Tile, TileGrid, TILE_EMPTY};
use crate::util::{self, Weighted};

/// Tileset used for generated gameplay maps. Resolved by the renderer.
pub const GAMEPLAY_TILESET_ID: u32 = 2;

/// Configuration for one generation run.
#[derive(Clone, Copy, Debug)]
pub struct GenConfig {
    /// Map width in pieces (at least 2, for the left and right columns).
    pub pieces_wide: usize,
    /// Map height in pieces (at least 1).
    pub pieces_high: usize,
    /// Difficulty of the overworld node, >= 1. Harder maps keep fewer blank
    /// pieces, so the corridor network gets denser.
    pub difficulty: u32,
    pub seed: u64,
}

/// A catalog piece that survived the neighbor constraints at one cell.
struct Candidate<'a> {
    piece: &'a PuzzlePiece,
    weight: f64,
}

impl Weighted for Candidate<'_> {
    fn relative_weight(&self) -> f64 {
        self.weight
    }
}

/// Assemble a gameplay map from puzzle pieces. Deterministic for a given
/// config: the seed is split into layout and piece-draw sub-seeds.
pub fn generate_map(config: &GenConfig) -> Result<GameMap, MapGenError> {
    let GenConfig {
        pieces_wide,
        pieces_high,
        difficulty,
        seed,
    } = *config;

    if pieces_wide < 2 || pieces_high < 1 {
        return Err(MapGenError::InvalidDimensions {
            pieces_wide,
            pieces_high,
        });
    }
    let difficulty = difficulty.max(1);

    let seeds = GenSeeds::from_master(seed);
    let mut layout_rng = ChaCha8Rng::seed_from_u64(seeds.layout);
    let mut piece_rng = ChaCha8Rng::seed_from_u64(seeds.pieces);

    let built: Vec<(PieceTemplate, PuzzlePiece)> = pieces::catalog()
        .into_iter()
        .map(|template| {
            let piece = template.build()?;
            Ok((template, piece))
        })
        .collect::<Result<_, MapGenError>>()?;

    // The row that is guaranteed to carry a corridor across the map.
    let path_row = util::random_integer(&mut layout_rng, 0, pieces_high as i64) as usize;

    let mut placed: TileGrid<Option<PuzzlePiece>> = TileGrid::new(pieces_wide, pieces_high);

    for y in 0..pieces_high {
        for x in 0..pieces_wide {
            let class = column_class(x, pieces_wide);
            let left = if x > 0 {
                placed.get(x - 1, y).as_ref()
            } else {
                None
            };
            let top = if y > 0 {
                placed.get(x, y - 1).as_ref()
            } else {
                None
            };

            let mut candidates = Vec::new();
            for (template, piece) in &built {
                if !template.piece_type.contains(class) {
                    continue;
                }
                // The forced path row only accepts pieces that carry the
                // corridor from their left edge to their right edge.
                if y == path_row && !(piece.has_left_opening() && piece.has_right_opening()) {
                    continue;
                }
                // No corridors may run off the top or bottom of the map.
                if y == 0 && piece.has_top_opening() {
                    continue;
                }
                if y + 1 == pieces_high && piece.has_bottom_opening() {
                    continue;
                }
                if !piece.can_fit_together(left).contains(DirectionFlags::RIGHT) {
                    continue;
                }
                if !piece.can_fit_together(top).contains(DirectionFlags::DOWN) {
                    continue;
                }

                // Harder maps dilute blank filler.
                let weight = if piece.is_blank() {
                    template.relative_weight / difficulty as f64
                } else {
                    template.relative_weight
                };
                candidates.push(Candidate { piece, weight });
            }

            let choice = util::random_from_weights(&mut piece_rng, &candidates)
                .ok_or(MapGenError::NoFittingPiece { x, y })?;
            placed.set(x, y, Some(choice.piece.clone()));
        }
    }

    // Stamp the chosen pieces into the flat tile array.
    let width = pieces_wide * PIECE_SIZE;
    let height = pieces_high * PIECE_SIZE;
    let mut canvas: TileGrid<Tile> = TileGrid::new_with(width, height, TILE_EMPTY);
    for y in 0..pieces_high {
        for x in 0..pieces_wide {
            // Every cell was filled above.
            if let Some(piece) = placed.get(x, y) {
                piece.apply_to_map_array(
                    canvas.as_mut_slice(),
                    width,
                    x * PIECE_SIZE,
                    y * PIECE_SIZE,
                )?;
            }
        }
    }

    let tiles = canvas.into_flat();
    let doodad_indices = vec![TILE_EMPTY; tiles.len()];
    Ok(GameMap::new(
        tiles,
        doodad_indices,
        GAMEPLAY_TILESET_ID,
        width,
        false,
    ))
}

/// Which column class a piece cell belongs to.
fn column_class(x: usize, pieces_wide: usize) -> PieceType {
    if x == 0 {
        PieceType::LEFT
    } else if x + 1 == pieces_wide {
        PieceType::RIGHT
    } else {
        PieceType::MIDDLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TILE_OPENING;

    fn config(seed: u64, difficulty: u32) -> GenConfig {
        GenConfig {
            pieces_wide: 8,
            pieces_high: 5,
            difficulty,
            seed,
        }
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        let bad = GenConfig {
            pieces_wide: 1,
            pieces_high: 3,
            difficulty: 1,
            seed: 0,
        };
        assert!(matches!(
            generate_map(&bad),
            Err(MapGenError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_map(&config(99, 3)).unwrap();
        let b = generate_map(&config(99, 3)).unwrap();
        assert_eq!(a.tile_indices, b.tile_indices);

        let c = generate_map(&config(100, 3)).unwrap();
        assert_ne!(a.tile_indices, c.tile_indices);
    }

    #[test]
    fn test_map_dimensions() {
        let map = generate_map(&config(7, 1)).unwrap();
        assert_eq!(map.width, 8 * PIECE_SIZE);
        assert_eq!(map.height, 5 * PIECE_SIZE);
        assert!(!map.is_overworld);
        assert_eq!(map.tileset_id, GAMEPLAY_TILESET_ID);
    }

    #[test]
    fn test_left_to_right_path_exists() {
        // Every piece on the forced path row has a fully open middle row, so
        // some tile row must be open across the entire map width.
        for seed in 0..25 {
            let map = generate_map(&config(seed, 2)).unwrap();
            let found = (0..map.height).any(|y| {
                (0..map.width).all(|x| map.tile_at(x, y) == TILE_OPENING)
            });
            assert!(found, "no full corridor row for seed {}", seed);
        }
    }

    #[test]
    fn test_adjacent_pieces_interlock() {
        // At every piece boundary, openings on the two facing edges must
        // agree tile by tile.
        for seed in 0..25 {
            let map = generate_map(&config(seed, 4)).unwrap();

            // Vertical boundaries between piece columns.
            for bx in (PIECE_SIZE..map.width).step_by(PIECE_SIZE) {
                for y in 0..map.height {
                    let a = map.tile_at(bx - 1, y) == TILE_OPENING;
                    let b = map.tile_at(bx, y) == TILE_OPENING;
                    assert_eq!(a, b, "seed {} column boundary {} row {}", seed, bx, y);
                }
            }

            // Horizontal boundaries between piece rows.
            for by in (PIECE_SIZE..map.height).step_by(PIECE_SIZE) {
                for x in 0..map.width {
                    let a = map.tile_at(x, by - 1) == TILE_OPENING;
                    let b = map.tile_at(x, by) == TILE_OPENING;
                    assert_eq!(a, b, "seed {} row boundary {} column {}", seed, by, x);
                }
            }
        }
    }

    #[test]
    fn test_no_corridor_runs_off_top_or_bottom() {
        for seed in 0..25 {
            let map = generate_map(&config(seed, 5)).unwrap();
            assert!((0..map.width).all(|x| map.tile_at(x, 0) != TILE_OPENING));
            assert!((0..map.width).all(|x| map.tile_at(x, map.height - 1) != TILE_OPENING));
        }
    }

    #[test]
    fn test_difficulty_densifies_maps() {
        // Blank filler is weighted down as difficulty rises, so across many
        // seeds the harder maps carry more opening tiles in total.
        let count_openings = |difficulty: u32| -> usize {
            (0..30)
                .map(|seed| {
                    let map = generate_map(&config(seed, difficulty)).unwrap();
                    map.tile_indices
                        .iter()
                        .filter(|&&t| t == TILE_OPENING)
                        .count()
                })
                .sum()
        };

        assert!(count_openings(9) > count_openings(1));
    }

    #[test]
    fn test_column_class() {
        assert_eq!(column_class(0, 4), PieceType::LEFT);
        assert_eq!(column_class(1, 4), PieceType::MIDDLE);
        assert_eq!(column_class(2, 4), PieceType::MIDDLE);
        assert_eq!(column_class(3, 4), PieceType::RIGHT);
    }
}
