//! Walking the grid in tile-number order.

use crate::ring::{grid_size, ring_start, TILE_COUNT};
use crate::{PolarCoord, TileId};

/// Iterator over tiles in spiral order, yielding each tile with its slot coordinates.
pub struct Spiral {
    current: u64,
    limit: u64,
}

impl Spiral {
    /// Iterate every addressable tile, starting from the center.
    pub fn new() -> Self {
        Self {
            current: 0,
            limit: TILE_COUNT,
        }
    }

    /// Iterate the first `count` tiles.
    pub fn take_tiles(count: u64) -> Self {
        Self {
            current: 0,
            limit: count.min(TILE_COUNT),
        }
    }

    /// Iterate rings `start_ring..=end_ring`.
    ///
    /// # Panics
    ///
    /// If either ring exceeds [`MAX_RADIUS`](crate::MAX_RADIUS).
    pub fn rings(start_ring: u32, end_ring: u32) -> Self {
        let start = ring_start(start_ring);
        let end = grid_size(end_ring);

        Self {
            current: start,
            limit: end,
        }
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Spiral {
    type Item = (TileId, PolarCoord);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.limit {
            return None;
        }

        let tile = TileId(self.current);
        self.current += 1;
        Some((tile, tile.polar()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit.saturating_sub(self.current);
        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
