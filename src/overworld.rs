//! The static overworld selection map.
//!
//! A fixed background grid with a handful of named nodes overlaid on it.
//! Each node launches generation of a puzzle-piece gameplay map at that
//! node's difficulty. The background and node table are compiled-in
//! constants; initialization builds a fresh, owned context every time, so
//! nothing here is global state.

use crate::error::MapGenError;
use crate::gamemap::GameMap;
use crate::generator::{self, GenConfig};
use crate::tile::{Tile, TILE_SPAWNER};

/// Background terrain of the overworld (marsh water).
pub const TILE_OVERWORLD_BG: Tile = 70;
/// Decorative path terrain of the overworld.
pub const TILE_OVERWORLD_PATH: Tile = 72;
/// Tileset the overworld renders with. Resolved by the renderer.
pub const MARSH_TILESET_ID: u32 = 1;

/// Width of the overworld background grid in tiles.
pub const OVERWORLD_WIDTH: usize = 50;

/// The overworld background, one char per tile: `~` is background terrain,
/// `#` is path. Height is the row count (21).
const BACKGROUND_ROWS: [&str; 21] = [
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~###~###~#~#~###~###~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~#~#~#~#~#~#~#~#~#~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~#~###########~###~#~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~#~#~#~~~#~#~#~#~#~#~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~###~#~~~#~#~###~###~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
];

/// A named, fixed location on the selection map that launches generation of
/// a gameplay map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverworldNode {
    /// x coordinate in tiles
    pub x: i32,
    /// y coordinate in tiles
    pub y: i32,
    /// Shown verbatim over the node
    pub description: &'static str,
    /// Difficulty of the map generated from this node, >= 1
    pub difficulty: u32,
}

/// The fixed node table. Coordinates are assumed unique; lookups resolve
/// duplicates to the first match.
pub const OVERWORLD_MAP_NODES: [OverworldNode; 6] = [
    OverworldNode {
        x: 1,
        y: 3,
        description: "Green Hill Zone",
        difficulty: 1,
    },
    OverworldNode {
        x: 7,
        y: 1,
        description: "Pumpkin Hill",
        difficulty: 2,
    },
    OverworldNode {
        x: 9,
        y: 5,
        description: "Bot Land",
        difficulty: 3,
    },
    OverworldNode {
        x: 11,
        y: 1,
        description: "The Casino",
        difficulty: 4,
    },
    OverworldNode {
        x: 14,
        y: 5,
        description: "The Future",
        difficulty: 5,
    },
    OverworldNode {
        x: 19,
        y: 3,
        description: "Lazy Town",
        difficulty: 6,
    },
];

/// Find the node at exact tile coordinates. First match wins.
pub fn get_overworld_node(tile_x: i32, tile_y: i32) -> Option<&'static OverworldNode> {
    OVERWORLD_MAP_NODES
        .iter()
        .find(|node| node.x == tile_x && node.y == tile_y)
}

/// Decode the background art into a flat tile-index array.
fn background_tile_indices() -> Vec<Tile> {
    BACKGROUND_ROWS
        .iter()
        .flat_map(|row| {
            debug_assert_eq!(row.len(), OVERWORLD_WIDTH);
            row.bytes().map(|b| match b {
                b'#' => TILE_OVERWORLD_PATH,
                _ => TILE_OVERWORLD_BG,
            })
        })
        .collect()
}

/// The initialized overworld: the active selection map plus its node table.
pub struct OverworldContext {
    pub map: GameMap,
    pub nodes: &'static [OverworldNode],
}

impl OverworldContext {
    /// Find the node at exact tile coordinates. First match wins.
    pub fn node_at(&self, tile_x: i32, tile_y: i32) -> Option<&'static OverworldNode> {
        get_overworld_node(tile_x, tile_y)
    }

    /// Selecting a node: generate a fresh gameplay map at the node's
    /// difficulty.
    pub fn generate_map_for_node(
        &self,
        node: &OverworldNode,
        pieces_wide: usize,
        pieces_high: usize,
        seed: u64,
    ) -> Result<GameMap, MapGenError> {
        generator::generate_map(&GenConfig {
            pieces_wide,
            pieces_high,
            difficulty: node.difficulty,
            seed,
        })
    }
}

/// Build the overworld map: overlay each node's cell with a spawner tile,
/// attach an empty doodad layer, and clear the fog around the first node.
///
/// Each call builds a fresh context from the pristine background constant,
/// so calling this more than once is harmless.
pub fn initialize_overworld_map() -> OverworldContext {
    let mut tile_indices = background_tile_indices();

    for node in &OVERWORLD_MAP_NODES {
        let index = node.y as usize * OVERWORLD_WIDTH + node.x as usize;
        // Make the nodes look like blue spawners.
        tile_indices[index] = TILE_SPAWNER;
    }

    let doodad_indices = vec![0; tile_indices.len()];
    let mut map = GameMap::new(
        tile_indices,
        doodad_indices,
        MARSH_TILESET_ID,
        OVERWORLD_WIDTH,
        true,
    );

    // The first node starts visible.
    let first = &OVERWORLD_MAP_NODES[0];
    map.set_fog(first.x, first.y, 1, false);

    OverworldContext {
        map,
        nodes: &OVERWORLD_MAP_NODES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TILE_OPENING;

    #[test]
    fn test_background_dimensions() {
        let tiles = background_tile_indices();
        assert_eq!(tiles.len(), OVERWORLD_WIDTH * 21);
        assert!(tiles
            .iter()
            .all(|&t| t == TILE_OVERWORLD_BG || t == TILE_OVERWORLD_PATH));
    }

    #[test]
    fn test_get_overworld_node() {
        let node = get_overworld_node(1, 3).unwrap();
        assert_eq!(node.description, "Green Hill Zone");
        assert_eq!(node.difficulty, 1);

        assert!(get_overworld_node(0, 0).is_none());
        assert_eq!(get_overworld_node(19, 3).unwrap().description, "Lazy Town");
    }

    #[test]
    fn test_node_coordinates_are_unique() {
        for (i, a) in OVERWORLD_MAP_NODES.iter().enumerate() {
            for b in &OVERWORLD_MAP_NODES[i + 1..] {
                assert!(a.x != b.x || a.y != b.y);
            }
        }
    }

    #[test]
    fn test_initialize_overlays_spawners() {
        let ctx = initialize_overworld_map();
        assert!(ctx.map.is_overworld);
        assert_eq!(ctx.map.width, OVERWORLD_WIDTH);
        assert_eq!(ctx.map.height, 21);
        assert_eq!(ctx.map.tileset_id, MARSH_TILESET_ID);

        for node in ctx.nodes {
            assert_eq!(
                ctx.map.tile_at(node.x as usize, node.y as usize),
                TILE_SPAWNER
            );
        }
    }

    #[test]
    fn test_initialize_clears_fog_around_first_node() {
        let ctx = initialize_overworld_map();

        // 3x3 region around (1, 3) is visible.
        for y in 2..=4 {
            for x in 0..=2 {
                assert!(!ctx.map.is_foggy(x, y));
            }
        }
        // Other nodes stay hidden.
        assert!(ctx.map.is_foggy(7, 1));
        assert!(ctx.map.is_foggy(19, 3));
    }

    #[test]
    fn test_initialize_twice_is_independent() {
        let a = initialize_overworld_map();
        let b = initialize_overworld_map();
        assert_eq!(a.map.tile_indices, b.map.tile_indices);
        assert_eq!(a.map.fog, b.map.fog);
    }

    #[test]
    fn test_generate_map_for_node() {
        let ctx = initialize_overworld_map();
        let node = ctx.node_at(9, 5).unwrap();
        let map = ctx.generate_map_for_node(node, 6, 4, 11).unwrap();

        assert_eq!(map.width, 30);
        assert_eq!(map.height, 20);
        assert!(map.tile_indices.iter().any(|&t| t == TILE_OPENING));
    }
}
