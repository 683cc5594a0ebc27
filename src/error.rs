//! Error types.
//!
//! Construction failures are reported as [`MalformedSampleSet`] and abort the
//! load of the table they belong to. Everything else surfaces as [`Error`].
//! Query points outside the sampled domain are never an error here.

use thiserror::Error;

use crate::engine::{Quantity, Rating};

/// The sample columns handed to the grid builder are inconsistent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedSampleSet {
    /// No coordinate columns were supplied.
    #[error("Sample set has no coordinate columns")]
    NoDimensions,

    /// More coordinate columns than the evaluator supports.
    #[error("Sample set has {got} coordinate columns, maximum is {max}")]
    TooManyDimensions { got: usize, max: usize },

    /// Columns are present but hold no samples.
    #[error("Sample set is empty")]
    Empty,

    /// A coordinate column has a different length than the first one.
    #[error("Coordinate column {dim} has {got} entries, expected {expected}")]
    CoordinateLengthMismatch {
        dim: usize,
        got: usize,
        expected: usize,
    },

    /// Dependent values do not line up with the samples.
    #[error("Sample set has {got} dependent values for {expected} samples")]
    ValueCountMismatch { got: usize, expected: usize },

    /// NaN or infinite coordinates cannot be ordered or matched to an axis.
    #[error("Coordinate column {dim} has a non-finite entry at sample {index}")]
    NonFiniteCoordinate { dim: usize, index: usize },

    /// The distinct coordinate values span more grid cells than allowed,
    /// usually because coordinates were not sampled on a common grid.
    #[error("Grid of shape {shape:?} exceeds {max} cells")]
    GridTooLarge { shape: Vec<usize>, max: usize },

    /// An active dimension ended up with no axis values.
    #[error("Active dimension {dim} has an empty axis")]
    EmptyAxis { dim: usize },
}

/// Crate-level error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Malformed sample set: {0}")]
    MalformedSampleSet(#[from] MalformedSampleSet),

    /// Number of coordinates does not match the grid.
    #[error("Dimension mismatch: got {got}, expected {expected}")]
    DimensionMismatch { got: usize, expected: usize },

    /// Grid axes or values are unusable by the evaluator.
    #[error("Invalid grid: {0}")]
    InvalidGrid(&'static str),

    /// No table was loaded for this rating and output quantity.
    #[error("No table loaded for {rating} {quantity}")]
    MissingGrid { rating: Rating, quantity: Quantity },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),
}
