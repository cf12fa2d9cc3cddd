use thiserror::Error;

/// Errors raised by the circle construction and the Joukowsky map. All of them are validation
/// failures on the caller's input, there is nothing transient to retry.
#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    /// The imaginary part of the offset exceeds the circle radius, so `beta` and the edge
    /// radius are not real.
    #[error("offset imaginary part {imag} exceeds circle radius {radius}")]
    Domain { imag: f64, radius: f64 },

    /// A point at the origin was handed to the map, where `k / z` is undefined.
    #[error("joukowsky map is singular at the origin (point index {index:?})")]
    Singularity { index: Option<usize> },

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Errors from the SVG rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid style configuration: {0}")]
    Style(#[from] serde_json::Error),

    #[error("nothing to draw")]
    EmptyGeometry,
}

pub type Result<T> = std::result::Result<T, MappingError>;
