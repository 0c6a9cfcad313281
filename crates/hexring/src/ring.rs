//! Ring and disk sizes.
//!
//! Ring 0 is the center tile. Ring 1 holds 6 tiles and every further ring
//! doubles the previous one:
//!
//! ```text
//! ring      0   1   2   3   4    ...  r
//! length    1   6   12  24  48        6 * 2^(r-1)
//! disk      1   7   19  43  91        6 * 2^r - 5
//! ```
//!
//! The disk size has a closed form, so nothing here sums over rings.

/// Largest radius whose whole disk can be numbered with `u64` tile numbers.
///
/// `grid_size(61) = 6 * 2^61 - 5` fits; `6 * 2^62` does not.
pub const MAX_RADIUS: u32 = 61;

/// Number of addressable tiles, `grid_size(MAX_RADIUS)`.
pub const TILE_COUNT: u64 = grid_size(MAX_RADIUS);

/// Number of tiles on ring `radius`.
///
/// - Ring 0: 1 tile (center)
/// - Ring r > 0: `6 * 2^(r-1)` tiles
///
/// # Panics
///
/// If `radius > MAX_RADIUS`.
#[inline]
pub const fn ring_length(radius: u32) -> u64 {
    assert!(radius <= MAX_RADIUS, "radius exceeds MAX_RADIUS");
    raw_ring_length(radius)
}

/// Total tiles in the disk of `radius`, center included.
///
/// Formula: `6 * 2^radius - 5`, which equals `1 + sum(ring_length(1..=radius))`.
///
/// # Panics
///
/// If `radius > MAX_RADIUS`.
#[inline]
pub const fn grid_size(radius: u32) -> u64 {
    assert!(radius <= MAX_RADIUS, "radius exceeds MAX_RADIUS");
    (6u64 << radius) - 5
}

/// First tile number on ring `radius` (`grid_size(radius - 1)`, 0 for the center).
///
/// # Panics
///
/// If `radius > MAX_RADIUS`.
#[inline]
pub const fn ring_start(radius: u32) -> u64 {
    assert!(radius <= MAX_RADIUS, "radius exceeds MAX_RADIUS");
    raw_ring_start(radius)
}

// The raw forms stay exact one ring past MAX_RADIUS: 6 << 61 still fits in a
// u64, so the inverse transform can place tile numbers beyond TILE_COUNT.

#[inline]
pub(crate) const fn raw_ring_length(radius: u32) -> u64 {
    if radius == 0 {
        1
    } else {
        6u64 << (radius - 1)
    }
}

#[inline]
pub(crate) const fn raw_ring_start(radius: u32) -> u64 {
    if radius == 0 {
        0
    } else {
        raw_ring_length(radius) - 5
    }
}
