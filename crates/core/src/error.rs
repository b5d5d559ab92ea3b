//! Error types for scan configuration.

use thiserror::Error;

/// Errors raised when building configuration values for scan processing.
///
/// Malformed scan data (a ring id outside the sensor's range, columns of
/// different lengths) is a programming error and panics instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingScanError {
    /// A sensor must have at least one ring.
    #[error("sensor ring count must be at least 1")]
    ZeroRingCount,

    /// Ring ids are stored as `u16`.
    #[error("sensor ring count {0} exceeds the supported maximum of 65536")]
    TooManyRings(usize),

    /// Target interval for normalization is empty, inverted or non-finite.
    #[error("invalid target interval [{min}, {max}]")]
    InvalidTargetRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },

    /// Projection matrices must be 3x4 or homogeneous 4x4.
    #[error("projection matrix must be 3x4 or 4x4, got {rows}x{cols} ({len} values)")]
    ProjectionShape {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Number of values supplied.
        len: usize,
    },

    /// Viewport with negative or non-finite extent.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
}

pub type Result<T> = std::result::Result<T, RingScanError>;
