use thiserror::Error;

/// Top-level error type for the road alignment kernel.
#[derive(Debug, Error)]
pub enum RoadlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

/// Errors related to geometric input validation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("radius {radius} at IP {index:?} must be positive and finite")]
    InvalidRadius { index: Option<usize>, radius: f64 },
}

/// Errors raised when editing an alignment model.
#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("an alignment needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("point index {index} is out of range for {len} points")]
    PointIndexOutOfRange { index: usize, len: usize },

    #[error("IP {index} is not an interior point of a {len}-point alignment")]
    NotAnInteriorIp { index: usize, len: usize },

    #[error("alignment not found: {0}")]
    UnknownAlignment(String),
}

/// Convenience type alias for results using [`RoadlineError`].
pub type Result<T> = std::result::Result<T, RoadlineError>;
