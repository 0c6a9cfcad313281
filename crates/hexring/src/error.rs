//! Error types for hexring.

use thiserror::Error;

/// Result type for hexring operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the spiral transform.
///
/// Every variant carries the offending input so callers can report it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The angle is outside `[0, 360)` (or is NaN).
    #[error("angle must be in [0, 360) degrees, got {angle}")]
    InvalidAngle { angle: f64 },

    /// Floor-log2 of zero is undefined.
    #[error("no most significant bit for {value}")]
    InvalidMsbInput { value: u64 },

    /// The ring cannot be numbered within a `u64`.
    #[error("radius {radius} exceeds the maximum radius {max}")]
    RadiusOutOfRange { radius: u32, max: u32 },

    /// The tile number lies past the last addressable tile.
    #[error("tile number {number} is past the last addressable tile {max}")]
    TileOutOfRange { number: u64, max: u64 },
}
