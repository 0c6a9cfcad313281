//! The (radius, angle) <-> tile number transform.
//!
//! Tiles are numbered from 0 at the center, then ring by ring, each ring
//! starting at 0° (noon) and proceeding clockwise. A ring's tiles are spread
//! evenly over 360°, so an angle selects a slot by its fraction of the turn:
//!
//! ```text
//! tile = round_half_even(ring_start(r) + ring_length(r) * angle / 360)
//! ```
//!
//! The ring start is an integer, so only the slot offset is rounded in
//! floating point; ties are then resolved against the whole tile number.
//!
//! The inverse recovers the ring from `grid_size(r) = 6 * 2^r - 5` with a
//! single floor-log2, then the angle from the offset within that ring.

use tracing::{debug, trace};

use crate::bits::msb_rank;
use crate::ring::{raw_ring_length, raw_ring_start, ring_length, ring_start, MAX_RADIUS};
use crate::{Error, Result, RingOverflow};

/// A full turn, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Largest angle below a full turn.
const LAST_ANGLE: f64 = 359.999_999_999_999_94;

/// Tile number for the polar coordinates `(radius, angle)`.
///
/// `angle` is in degrees, clockwise from noon, and must lie in `[0, 360)`.
/// The center tile (radius 0) is 0 whatever the angle. Angles that round past
/// the ring's last slot are clamped to it; see [`SpiralConfig::tile_number`]
/// for the alternative.
///
/// # Examples
///
/// ```
/// use hexring::tile_number;
///
/// assert_eq!(tile_number(0, 123.0), Ok(0));
/// assert_eq!(tile_number(1, 0.0), Ok(1));
/// assert_eq!(tile_number(2, 90.0), Ok(10)); // 7 + 12 * 90 / 360
/// assert!(tile_number(1, 360.0).is_err());
/// ```
pub fn tile_number(radius: u32, angle: f64) -> Result<u64> {
    number_tile(radius, angle, RingOverflow::default())
}

pub(crate) fn number_tile(radius: u32, angle: f64, overflow: RingOverflow) -> Result<u64> {
    if !(0.0..FULL_TURN).contains(&angle) {
        debug!("Rejecting angle {} for ring {}: outside [0, 360)", angle, radius);
        return Err(Error::InvalidAngle { angle });
    }
    if radius > MAX_RADIUS {
        debug!("Rejecting radius {}: past MAX_RADIUS {}", radius, MAX_RADIUS);
        return Err(Error::RadiusOutOfRange {
            radius,
            max: MAX_RADIUS,
        });
    }
    if radius == 0 {
        return Ok(0);
    }

    let length = ring_length(radius);
    let start = ring_start(radius);
    let offset = round_slot(length as f64 * angle / FULL_TURN);
    if offset < length {
        return Ok(start + offset);
    }

    match overflow {
        RingOverflow::Clamp => {
            trace!("Angle {} rounds past ring {}, clamping to its last tile", angle, radius);
            Ok(start + length - 1)
        }
        RingOverflow::Spill => {
            trace!("Angle {} rounds past ring {}, spilling into the next", angle, radius);
            Ok(start + length)
        }
    }
}

/// Round a fractional slot position so that `ring_start + slot` is rounded
/// half to even.
///
/// Every ring past the center starts on an odd tile number, so an even
/// absolute tile means an odd offset: exact halves go to the odd neighbour.
fn round_slot(position: f64) -> u64 {
    let base = position.floor();
    if position - base == 0.5 {
        let base = base as u64;
        if base % 2 == 0 {
            base + 1
        } else {
            base
        }
    } else {
        position.round() as u64
    }
}

/// Ring that tile `number` sits on.
///
/// Ring r starts at `6 * 2^(r-1) - 5`, so `(number + 5) / 6` has its most
/// significant bit at rank `r - 1`. Tile numbers at or past
/// [`TILE_COUNT`](crate::TILE_COUNT) report `MAX_RADIUS + 1`.
///
/// # Examples
///
/// ```
/// use hexring::radius_of;
///
/// assert_eq!(radius_of(0), 0);
/// assert_eq!(radius_of(6), 1);
/// assert_eq!(radius_of(7), 2);
/// ```
pub fn radius_of(number: u64) -> u32 {
    if number == 0 {
        return 0;
    }
    // (number + 5) / 6, without overflowing near u64::MAX
    let q = number / 6 + (number % 6 + 5) / 6;
    msb_rank(q).map_or(0, |rank| rank + 1)
}

/// Angle, in degrees from noon, of the slot tile `number` occupies.
///
/// This is the discretised slot angle, `360 * offset / ring_length`, not
/// whatever angle was originally passed to [`tile_number`]. The center tile
/// reports 0. The denominator is the ring length `6 * 2^msb(q)` with
/// `q = (number + 5) / 6`, not `6q`; the two agree only when `q` is a power of two.
///
/// # Examples
///
/// ```
/// use hexring::angle_of;
///
/// assert_eq!(angle_of(0), 0.0);
/// assert_eq!(angle_of(1), 0.0);
/// assert_eq!(angle_of(2), 60.0);
/// assert_eq!(angle_of(18), 330.0); // last tile of ring 2
/// ```
pub fn angle_of(number: u64) -> f64 {
    let radius = radius_of(number);
    if radius == 0 {
        return 0.0;
    }
    let offset = number - raw_ring_start(radius);
    let angle = FULL_TURN * offset as f64 / raw_ring_length(radius) as f64;
    // Offsets past 2^53 lose precision and may round up to a full turn.
    angle.min(LAST_ANGLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid_size, TILE_COUNT};
    use proptest::prelude::*;

    #[test]
    fn last_angle_is_below_full_turn() {
        assert!(LAST_ANGLE < FULL_TURN);
        assert_eq!(f64::from_bits(LAST_ANGLE.to_bits() + 1), FULL_TURN);
    }

    #[test]
    fn center_ignores_angle() {
        for angle in [0.0, 0.5, 90.0, 180.0, 359.999] {
            assert_eq!(tile_number(0, angle), Ok(0));
        }
    }

    #[test]
    fn first_tile_of_each_ring_is_at_noon() {
        assert_eq!(tile_number(1, 0.0), Ok(1));
        for r in 1..=MAX_RADIUS {
            assert_eq!(tile_number(r, 0.0), Ok(grid_size(r - 1)));
        }
    }

    #[test]
    fn ring_one_slots() {
        let expected = [(0.0, 1), (60.0, 2), (120.0, 3), (180.0, 4), (240.0, 5), (300.0, 6)];
        for (angle, number) in expected {
            assert_eq!(tile_number(1, angle), Ok(number), "angle {}", angle);
        }
    }

    #[test]
    fn rejects_angles_outside_turn() {
        assert_eq!(
            tile_number(1, -1.0),
            Err(Error::InvalidAngle { angle: -1.0 })
        );
        assert_eq!(
            tile_number(1, 360.0),
            Err(Error::InvalidAngle { angle: 360.0 })
        );
        // Rejected even where the angle would be ignored.
        assert!(tile_number(0, 360.0).is_err());
        assert!(matches!(
            tile_number(1, f64::NAN),
            Err(Error::InvalidAngle { angle }) if angle.is_nan()
        ));
        assert!(tile_number(1, f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_radius_past_max() {
        assert_eq!(
            tile_number(MAX_RADIUS + 1, 0.0),
            Err(Error::RadiusOutOfRange {
                radius: MAX_RADIUS + 1,
                max: MAX_RADIUS
            })
        );
        assert!(tile_number(MAX_RADIUS, 0.0).is_ok());
    }

    #[test]
    fn halfway_rounds_tile_number_to_even() {
        // Ring 1: 30° sits halfway between tiles 1 and 2.
        assert_eq!(tile_number(1, 30.0), Ok(2));
        // 90° sits halfway between tiles 2 and 3.
        assert_eq!(tile_number(1, 90.0), Ok(2));
        // 150° sits halfway between tiles 3 and 4.
        assert_eq!(tile_number(1, 150.0), Ok(4));
    }

    #[test]
    fn halfway_ties_on_outer_rings() {
        // Ring 2 starts at 7, slots 30° apart.
        assert_eq!(tile_number(2, 15.0), Ok(8));
        assert_eq!(tile_number(2, 45.0), Ok(8));
        assert_eq!(tile_number(2, 75.0), Ok(10));
        // Ring 3 starts at 19, slots 15° apart.
        assert_eq!(tile_number(3, 7.5), Ok(20));
        assert_eq!(tile_number(3, 22.5), Ok(20));
        assert_eq!(tile_number(3, 37.5), Ok(22));
    }

    #[test]
    fn slot_rounding() {
        assert_eq!(round_slot(0.0), 0);
        assert_eq!(round_slot(0.4), 0);
        assert_eq!(round_slot(0.5), 1);
        assert_eq!(round_slot(1.5), 1);
        assert_eq!(round_slot(2.5), 3);
        assert_eq!(round_slot(2.6), 3);
        assert_eq!(round_slot(11.5), 11);
    }

    #[test]
    fn boundary_clamps_by_default() {
        assert_eq!(tile_number(1, 359.9), Ok(6));
        assert_eq!(tile_number(2, 359.9), Ok(18));
        assert_eq!(radius_of(tile_number(3, 359.9).unwrap()), 3);
    }

    #[test]
    fn boundary_spills_when_configured() {
        let spill = crate::SpiralConfig::new().with_overflow(RingOverflow::Spill);
        assert_eq!(spill.tile_number(1, 359.9), Ok(grid_size(1)));
        assert_eq!(spill.tile_number(2, 359.9), Ok(grid_size(2)));
        // Away from the boundary both policies agree.
        assert_eq!(spill.tile_number(2, 180.0), tile_number(2, 180.0));
    }

    #[test]
    fn radius_of_known_tiles() {
        assert_eq!(radius_of(0), 0);
        assert_eq!(radius_of(1), 1);
        assert_eq!(radius_of(6), 1);
        assert_eq!(radius_of(7), 2);
        assert_eq!(radius_of(18), 2);
        assert_eq!(radius_of(19), 3);
        assert_eq!(radius_of(42), 3);
        assert_eq!(radius_of(43), 4);
    }

    #[test]
    fn radius_of_every_tile_in_small_disk() {
        for r in 1..=10 {
            for n in grid_size(r - 1)..grid_size(r) {
                assert_eq!(radius_of(n), r, "tile {} should be ring {}", n, r);
            }
        }
    }

    #[test]
    fn radius_of_extremes() {
        assert_eq!(radius_of(TILE_COUNT - 1), MAX_RADIUS);
        assert_eq!(radius_of(TILE_COUNT), MAX_RADIUS + 1);
        assert_eq!(radius_of(u64::MAX), MAX_RADIUS + 1);
    }

    #[test]
    fn angle_of_known_tiles() {
        assert_eq!(angle_of(0), 0.0);
        assert_eq!(angle_of(1), 0.0);
        assert_eq!(angle_of(6), 300.0);
        assert_eq!(angle_of(7), 0.0);
        assert_eq!(angle_of(8), 30.0);
        assert_eq!(angle_of(13), 180.0);
        assert_eq!(angle_of(19), 0.0);
        assert_eq!(angle_of(20), 15.0);
    }

    #[test]
    fn angle_of_stays_below_full_turn() {
        for n in [TILE_COUNT - 1, TILE_COUNT, u64::MAX] {
            let angle = angle_of(n);
            assert!((0.0..FULL_TURN).contains(&angle), "tile {} -> {}", n, angle);
        }
    }

    proptest! {
        #[test]
        fn forward_stays_on_ring(radius in 1u32..=MAX_RADIUS, angle in 0.0f64..360.0) {
            let number = tile_number(radius, angle).unwrap();
            prop_assert_eq!(radius_of(number), radius);
        }

        #[test]
        fn forward_is_monotone_in_angle(
            radius in 0u32..=MAX_RADIUS,
            a in 0.0f64..360.0,
            b in 0.0f64..360.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(tile_number(radius, lo).unwrap() <= tile_number(radius, hi).unwrap());
        }

        #[test]
        fn slot_angle_maps_back_to_tile(number in 0u64..grid_size(24)) {
            let radius = radius_of(number);
            prop_assert_eq!(tile_number(radius, angle_of(number)), Ok(number));
        }

        #[test]
        fn angle_of_is_in_turn(number in any::<u64>()) {
            let angle = angle_of(number);
            prop_assert!((0.0..FULL_TURN).contains(&angle));
        }
    }
}
