//! Tile values and the flat grid container they live in.

/// A tile is just a graphic/terrain index at a grid cell.
pub type Tile = u8;

/// Filled background, nothing walkable.
pub const TILE_EMPTY: Tile = 0;
/// Connective/walkable cell along a puzzle piece corridor.
pub const TILE_OPENING: Tile = 1;
/// Spawner marker overlaid on overworld node cells.
pub const TILE_SPAWNER: Tile = 65;

/// A 2D grid stored as a flat row-major array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> TileGrid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> TileGrid<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build a grid from an existing flat array. Height is derived from the
    /// array length, so `data.len()` must be a multiple of `width`.
    pub fn from_flat(width: usize, data: Vec<T>) -> Self {
        debug_assert!(width > 0 && data.len() % width == 0);
        let height = data.len() / width;
        Self {
            width,
            height,
            data,
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    /// Bounds-checked access.
    pub fn try_get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            Some(self.get(x, y))
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, val)
        })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_flat(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_default_filled() {
        let grid: TileGrid<Tile> = TileGrid::new(4, 3);
        assert_eq!(grid.width, 4);
        assert_eq!(grid.height, 3);
        assert!(grid.as_slice().iter().all(|&t| t == TILE_EMPTY));
    }

    #[test]
    fn test_from_flat_derives_height() {
        let grid = TileGrid::from_flat(5, vec![0u8; 15]);
        assert_eq!(grid.height, 3);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut grid: TileGrid<Tile> = TileGrid::new(3, 3);
        grid.set(2, 1, TILE_OPENING);
        assert_eq!(*grid.get(2, 1), TILE_OPENING);
        assert_eq!(grid.as_slice()[1 * 3 + 2], TILE_OPENING);
    }

    #[test]
    fn test_try_get_out_of_bounds() {
        let grid: TileGrid<Tile> = TileGrid::new(3, 3);
        assert!(grid.try_get(2, 2).is_some());
        assert!(grid.try_get(3, 0).is_none());
        assert!(grid.try_get(0, 3).is_none());
    }
}
