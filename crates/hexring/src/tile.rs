//! Tile numbers as a value type.

use crate::ring::{raw_ring_start, TILE_COUNT};
use crate::{angle_of, radius_of, Error, PolarCoord, Result};

/// A tile number - the dense index of a tile in ring-spiral order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TileId(pub u64);

impl TileId {
    /// The center tile.
    pub const ORIGIN: Self = Self(0);

    /// The last addressable tile.
    pub const MAX: Self = Self(TILE_COUNT - 1);

    /// Create from a raw tile number.
    #[inline]
    pub const fn new(number: u64) -> Self {
        Self(number)
    }

    /// Create from a raw tile number, rejecting numbers past [`TileId::MAX`].
    pub const fn checked(number: u64) -> Result<Self> {
        if number < TILE_COUNT {
            Ok(Self(number))
        } else {
            Err(Error::TileOutOfRange {
                number,
                max: TILE_COUNT - 1,
            })
        }
    }

    /// Get the raw tile number.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Ring this tile sits on.
    ///
    /// Ring 0: tile 0
    /// Ring 1: tiles 1-6
    /// Ring 2: tiles 7-18
    /// Ring r: tiles from grid_size(r-1) to grid_size(r)-1
    #[inline]
    pub fn ring(&self) -> u32 {
        radius_of(self.0)
    }

    /// Offset within the ring (0 to ring_length(r) - 1).
    pub fn offset_in_ring(&self) -> u64 {
        self.0 - raw_ring_start(self.ring())
    }

    /// Angle of the tile's slot, in degrees from noon.
    #[inline]
    pub fn angle(&self) -> f64 {
        angle_of(self.0)
    }

    /// Polar coordinates of the tile's slot.
    pub fn polar(&self) -> PolarCoord {
        PolarCoord::from_tile(*self)
    }
}

impl From<u64> for TileId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<TileId> for u64 {
    fn from(value: TileId) -> Self {
        value.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
