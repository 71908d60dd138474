//! The finished-map container handed over by the generators.
//!
//! The wider game treats this as the active map: it owns the final tile and
//! doodad arrays plus the fog-of-war layer. Rendering and input live
//! elsewhere; this type only stores and mutates the data.

use serde::Serialize;

use crate::tile::Tile;

/// A finished map: tile indices, doodad overlay, and fog.
#[derive(Clone, Debug, Serialize)]
pub struct GameMap {
    /// Graphic index per tile, row-major.
    pub tile_indices: Vec<Tile>,
    /// Doodad overlay, parallel to `tile_indices` (0 = none).
    pub doodad_indices: Vec<Tile>,
    /// Opaque tileset identifier, resolved by the renderer.
    pub tileset_id: u32,
    pub width: usize,
    pub height: usize,
    pub is_overworld: bool,
    /// Fog-of-war, parallel to `tile_indices`. Starts fully foggy.
    pub fog: Vec<bool>,
}

impl GameMap {
    /// Bundle up finished map data. Height is derived from the array length,
    /// so `tile_indices.len()` must be a multiple of `width`.
    pub fn new(
        tile_indices: Vec<Tile>,
        doodad_indices: Vec<Tile>,
        tileset_id: u32,
        width: usize,
        is_overworld: bool,
    ) -> Self {
        debug_assert!(width > 0 && tile_indices.len() % width == 0);
        debug_assert_eq!(tile_indices.len(), doodad_indices.len());
        let height = tile_indices.len() / width;
        let fog = vec![true; tile_indices.len()];
        Self {
            tile_indices,
            doodad_indices,
            tileset_id,
            width,
            height,
            is_overworld,
            fog,
        }
    }

    pub fn tile_at(&self, x: usize, y: usize) -> Tile {
        self.tile_indices[y * self.width + x]
    }

    pub fn is_foggy(&self, x: usize, y: usize) -> bool {
        self.fog[y * self.width + x]
    }

    /// Set or clear fog in a square of Chebyshev radius `radius` around
    /// `(center_x, center_y)`, clamped to the map bounds.
    pub fn set_fog(&mut self, center_x: i32, center_y: i32, radius: i32, foggy: bool) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let x = center_x + dx;
                let y = center_y + dy;
                if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
                    self.fog[y as usize * self.width + x as usize] = foggy;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_map() -> GameMap {
        GameMap::new(vec![0; 20], vec![0; 20], 1, 5, false)
    }

    #[test]
    fn test_height_derived_from_width() {
        let map = small_map();
        assert_eq!(map.width, 5);
        assert_eq!(map.height, 4);
    }

    #[test]
    fn test_fog_starts_full() {
        let map = small_map();
        assert!((0..map.height).all(|y| (0..map.width).all(|x| map.is_foggy(x, y))));
    }

    #[test]
    fn test_set_fog_clears_square() {
        let mut map = small_map();
        map.set_fog(2, 2, 1, false);

        // 3x3 region around (2, 2) is clear.
        for y in 1..=3 {
            for x in 1..=3 {
                assert!(!map.is_foggy(x, y));
            }
        }
        // A corner outside the radius stays foggy.
        assert!(map.is_foggy(0, 0));
        assert!(map.is_foggy(4, 0));
    }

    #[test]
    fn test_set_fog_clamps_to_bounds() {
        let mut map = small_map();
        // Radius hangs off the map edge; must not panic.
        map.set_fog(0, 0, 2, false);
        assert!(!map.is_foggy(0, 0));
        assert!(!map.is_foggy(2, 2));
        assert!(map.is_foggy(3, 3));
    }
}
