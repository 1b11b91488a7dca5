//! Error types for the projection pipeline.
//!
//! Both numeric failure modes are configuration or geometry bugs rather than
//! runtime conditions to recover from: callers propagate them with `?` and the
//! driver aborts the frame loop.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A homogeneous transform produced `w == 0`, so the perspective divide is undefined.
    #[error("degenerate transform: homogeneous w is {w}")]
    DegenerateTransform { w: f32 },

    /// Projection parameters that cannot produce a usable perspective matrix.
    #[error("invalid projection: {reason}")]
    InvalidProjection { reason: String },

    /// A screen with a zero dimension.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Platform (window/input) failure.
    #[error("window error: {0}")]
    Window(String),
}

impl Error {
    pub(crate) fn invalid_projection(reason: impl Into<String>) -> Self {
        Error::InvalidProjection {
            reason: reason.into(),
        }
    }
}
