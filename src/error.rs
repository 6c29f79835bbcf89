//! Error types shared by the oscillator, waveform factory, and math helpers.

use thiserror::Error;

/// Result type for fallible beatwave operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a precondition of a pure helper is violated.
///
/// Every operation is deterministic, so none of these are retried: the
/// error goes straight back to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Oscillator evaluated with a non-positive tempo.
    #[error("BPM must be greater than 0, got {bpm}")]
    InvalidBpm {
        /// The rejected tempo.
        bpm: f64,
    },

    /// Waveform name that is not one of the known variants.
    #[error("invalid waveform: {name}")]
    InvalidVariant {
        /// The unrecognized name.
        name: String,
    },

    /// A unit-range bound lies outside `[0, 1]`.
    #[error("range values must be between 0 and 1, got min {min} and max {max}")]
    OutOfUnitRange {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// A range with identical bounds.
    #[error("range must be greater than 0, given max {max} and min {min}")]
    ZeroRange {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// Dead-zone thresholds in the wrong order.
    #[error("high threshold must be greater than low threshold, given low {low} and high {high}")]
    InvalidThresholds {
        /// Lower threshold.
        low: f64,
        /// Upper threshold.
        high: f64,
    },

    /// Input outside the function's `[0, 1]` domain.
    #[error("input must be between 0 and 1, got {value}")]
    Domain {
        /// The rejected input.
        value: f64,
    },

    /// Array index out of range.
    #[error("index {index} out of bounds for length {len}")]
    Bounds {
        /// The rejected index.
        index: usize,
        /// Length of the container.
        len: usize,
    },

    /// A null value where a container was expected.
    #[error("container cannot be null")]
    NullContainer,

    /// A non-mapping value where an object was expected.
    #[error("expected an object, found {found}")]
    NotAnObject {
        /// Short description of what was found.
        found: String,
    },
}
