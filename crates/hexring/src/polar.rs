//! Polar coordinates on the ring spiral.

use crate::{angle_of, radius_of, tile_number, Result, TileId};

/// A ring radius paired with an angle in degrees, clockwise from noon.
///
/// The angle is not validated on construction; [`PolarCoord::tile`] rejects
/// angles outside `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarCoord {
    /// Ring distance from the center
    pub radius: u32,
    /// Degrees from noon
    pub angle: f64,
}

impl PolarCoord {
    /// The center tile's coordinates.
    pub const ORIGIN: Self = Self {
        radius: 0,
        angle: 0.0,
    };

    /// Create a new coordinate.
    pub const fn new(radius: u32, angle: f64) -> Self {
        Self { radius, angle }
    }

    /// Slot coordinates of a tile.
    pub fn from_tile(tile: TileId) -> Self {
        Self {
            radius: radius_of(tile.0),
            angle: angle_of(tile.0),
        }
    }

    /// Tile whose slot this coordinate rounds to, clamping at the 360° boundary.
    pub fn tile(&self) -> Result<TileId> {
        tile_number(self.radius, self.angle).map(TileId)
    }
}

impl From<TileId> for PolarCoord {
    fn from(tile: TileId) -> Self {
        Self::from_tile(tile)
    }
}

impl std::fmt::Display for PolarCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}°)", self.radius, self.angle)
    }
}
