//! Integer floor-log2.

use crate::{Error, Result};

/// Rank of the most significant set bit of `x`.
///
/// Returns `n` such that `2^n <= x < 2^(n+1)`, so it doubles as an integer
/// binary logarithm:
///
/// - msb(1) = 0
/// - msb(8) = 3    (0b1000)
/// - msb(128) = 7  (0b1000_0000)
#[inline]
pub(crate) fn msb_rank(x: u64) -> Result<u32> {
    x.checked_ilog2().ok_or(Error::InvalidMsbInput { value: x })
}
