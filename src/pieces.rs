//! Predefined puzzle piece templates
//!
//! The shipped catalog keeps every corridor on the middle row/column, so any
//! two templates either share an open middle cell on a facing edge or are
//! both closed there. That keeps the catalog fully interlockable.

use crate::piece::{PieceType, PuzzlePiece, PIECE_AREA};
use crate::tile::Tile;
use crate::util::Weighted;

/// A named piece template with a selection weight.
#[derive(Clone, Debug)]
pub struct PieceTemplate {
    pub name: &'static str,
    pub piece_type: PieceType,
    pub relative_weight: f64,
    pub tiles: [Tile; PIECE_AREA],
}

impl PieceTemplate {
    /// Instantiate the template as a puzzle piece.
    pub fn build(&self) -> Result<PuzzlePiece, crate::error::MapGenError> {
        PuzzlePiece::new(&self.tiles, self.piece_type)
    }
}

impl Weighted for PieceTemplate {
    fn relative_weight(&self) -> f64 {
        self.relative_weight
    }
}

/// Empty filler. Valid in any column.
pub fn blank() -> PieceTemplate {
    PieceTemplate {
        name: "blank",
        piece_type: PieceType::LEFT | PieceType::MIDDLE | PieceType::RIGHT,
        relative_weight: 24.0,
        tiles: [0; PIECE_AREA],
    }
}

/// Corridor entering the map from its left edge. First column only.
pub fn left_entrance() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
        1, 1, 1, 1, 1,
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ];
    PieceTemplate {
        name: "left_entrance",
        piece_type: PieceType::LEFT,
        relative_weight: 10.0,
        tiles,
    }
}

/// Corridor leaving the map through its right edge. Last column only.
pub fn right_exit() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
        1, 1, 1, 1, 1,
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ];
    PieceTemplate {
        name: "right_exit",
        piece_type: PieceType::RIGHT,
        relative_weight: 10.0,
        tiles,
    }
}

/// Straight east-west corridor.
pub fn straight_horizontal() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
        1, 1, 1, 1, 1,
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ];
    PieceTemplate {
        name: "straight_horizontal",
        piece_type: PieceType::MIDDLE,
        relative_weight: 10.0,
        tiles,
    }
}

/// Straight north-south corridor.
pub fn straight_vertical() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
    ];
    PieceTemplate {
        name: "straight_vertical",
        piece_type: PieceType::MIDDLE,
        relative_weight: 6.0,
        tiles,
    }
}

/// Four-way intersection.
pub fn cross() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        1, 1, 1, 1, 1,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
    ];
    PieceTemplate {
        name: "cross",
        piece_type: PieceType::MIDDLE,
        relative_weight: 4.0,
        tiles,
    }
}

/// Bend from the left edge down to the bottom edge.
pub fn corner_left_down() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
        1, 1, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
    ];
    PieceTemplate {
        name: "corner_left_down",
        piece_type: PieceType::MIDDLE,
        relative_weight: 5.0,
        tiles,
    }
}

/// Bend from the left edge up to the top edge.
pub fn corner_left_up() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        1, 1, 1, 0, 0,
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ];
    PieceTemplate {
        name: "corner_left_up",
        piece_type: PieceType::MIDDLE,
        relative_weight: 5.0,
        tiles,
    }
}

/// Bend from the top edge to the right edge.
pub fn corner_up_right() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 1, 1,
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ];
    PieceTemplate {
        name: "corner_up_right",
        piece_type: PieceType::MIDDLE,
        relative_weight: 5.0,
        tiles,
    }
}

/// Bend from the bottom edge to the right edge.
pub fn corner_down_right() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
        0, 0, 1, 1, 1,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
    ];
    PieceTemplate {
        name: "corner_down_right",
        piece_type: PieceType::MIDDLE,
        relative_weight: 5.0,
        tiles,
    }
}

/// East-west corridor with a branch up.
pub fn tee_up() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        1, 1, 1, 1, 1,
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
    ];
    PieceTemplate {
        name: "tee_up",
        piece_type: PieceType::MIDDLE,
        relative_weight: 3.0,
        tiles,
    }
}

/// East-west corridor with a branch down.
pub fn tee_down() -> PieceTemplate {
    #[rustfmt::skip]
    let tiles = [
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 0,
        1, 1, 1, 1, 1,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
    ];
    PieceTemplate {
        name: "tee_down",
        piece_type: PieceType::MIDDLE,
        relative_weight: 3.0,
        tiles,
    }
}

/// The full shipped catalog.
pub fn catalog() -> Vec<PieceTemplate> {
    vec![
        blank(),
        left_entrance(),
        right_exit(),
        straight_horizontal(),
        straight_vertical(),
        cross(),
        corner_left_down(),
        corner_left_up(),
        corner_up_right(),
        corner_down_right(),
        tee_up(),
        tee_down(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_builds() {
        for template in catalog() {
            let piece = template.build().unwrap();
            assert_eq!(piece.piece_type(), template.piece_type, "{}", template.name);
        }
    }

    #[test]
    fn test_catalog_covers_all_column_classes() {
        let templates = catalog();
        for class in [PieceType::LEFT, PieceType::MIDDLE, PieceType::RIGHT] {
            assert!(templates
                .iter()
                .any(|t| t.piece_type.contains(class)));
        }
    }

    #[test]
    fn test_corridors_stay_on_middle_lanes() {
        // Every open edge cell sits at index 2 of its edge; this is what
        // keeps arbitrary catalog pieces interlockable.
        for template in catalog() {
            let piece = template.build().unwrap();
            for edges in [
                piece.left_edge_openings(),
                piece.right_edge_openings(),
                piece.top_edge_openings(),
                piece.bottom_edge_openings(),
            ] {
                for (i, open) in edges.iter().enumerate() {
                    if *open {
                        assert_eq!(i, 2, "{} has an off-lane opening", template.name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_blank_is_blank() {
        assert!(blank().build().unwrap().is_blank());
    }

    #[test]
    fn test_entrance_exits_line_up() {
        let left = left_entrance().build().unwrap();
        let mid = straight_horizontal().build().unwrap();
        let right = right_exit().build().unwrap();

        use crate::piece::DirectionFlags;
        assert!(mid
            .can_fit_together(Some(&left))
            .contains(DirectionFlags::RIGHT));
        assert!(right
            .can_fit_together(Some(&mid))
            .contains(DirectionFlags::RIGHT));
    }
}
