//! Transform configuration.

use crate::transform::number_tile;
use crate::Result;

/// What the forward transform does when an angle rounds past the ring's last slot.
///
/// An angle just below 360° can round to `ring_length(radius)`, which is the
/// first tile number of the next ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RingOverflow {
    /// Stay on the ring: use its last tile.
    #[default]
    Clamp,
    /// Return the next ring's first tile, `grid_size(radius)`.
    Spill,
}

/// Configuration for [`SpiralConfig::tile_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpiralConfig {
    /// Behaviour at the 360° boundary.
    pub overflow: RingOverflow,
}

impl SpiralConfig {
    /// Default configuration (clamping).
    pub const fn new() -> Self {
        Self {
            overflow: RingOverflow::Clamp,
        }
    }

    /// Set the boundary behaviour.
    pub const fn with_overflow(mut self, overflow: RingOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Tile number for `(radius, angle)` under this configuration.
    ///
    /// Same contract as [`tile_number`](crate::tile_number) except at the 360°
    /// boundary, which follows [`SpiralConfig::overflow`].
    pub fn tile_number(&self, radius: u32, angle: f64) -> Result<u64> {
        number_tile(radius, angle, self.overflow)
    }
}
