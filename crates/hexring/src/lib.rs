//! Hexring Spiral Numbering
//!
//! Bidirectional transform between polar ring coordinates and a flat tile
//! number on a hexagonal spiral grid whose rings double in length.
//!
//! # Numbering
//!
//! Tile 0 is the center. Ring 1 holds the next 6 tiles, and each later ring
//! holds twice as many as the one inside it. Within a ring, numbering starts
//! at 0° (noon) and runs clockwise:
//!
//! ```text
//! ring 0: 0
//! ring 1: 1 ..= 6       (6 tiles, 60° apart)
//! ring 2: 7 ..= 18      (12 tiles, 30° apart)
//! ring 3: 19 ..= 42     (24 tiles, 15° apart)
//! ring r: grid_size(r-1) ..= grid_size(r) - 1
//! ```
//!
//! # Closed Forms
//!
//! - `ring_length(r) = 6 * 2^(r-1)` for r > 0
//! - `grid_size(r) = 6 * 2^r - 5`
//!
//! Inverting `grid_size` takes one floor-log2, so the ring of a tile number is
//! found in constant time without walking the rings.
//!
//! ```
//! use hexring::{angle_of, radius_of, tile_number};
//!
//! let n = tile_number(3, 45.0)?;
//! assert_eq!(n, 22);
//! assert_eq!(radius_of(n), 3);
//! assert_eq!(angle_of(n), 45.0);
//! # Ok::<(), hexring::Error>(())
//! ```

mod bits;
mod config;
mod error;
mod polar;
mod ring;
mod spiral;
mod tile;
mod transform;

pub use config::{RingOverflow, SpiralConfig};
pub use error::{Error, Result};
pub use polar::PolarCoord;
pub use ring::{grid_size, ring_length, ring_start, MAX_RADIUS, TILE_COUNT};
pub use spiral::Spiral;
pub use tile::TileId;
pub use transform::{angle_of, radius_of, tile_number, FULL_TURN};

// Every ring through MAX_RADIUS must be numbered without overflow
const _: () = assert!(grid_size(MAX_RADIUS) == ring_start(MAX_RADIUS) + ring_length(MAX_RADIUS));
