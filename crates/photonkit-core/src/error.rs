//! Error handling for PhotonKit
//!
//! Provides the error taxonomy shared by every layout crate:
//! - Validation errors (malformed construction parameters)
//! - Geometry errors (inconsistent or self-intersecting geometry)
//! - Lookup errors (missing ports, layers, references, materials)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Parameter validation error
///
/// Raised before any geometry is built when a construction parameter
/// describes a physically meaningless fabrication request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A length, radius, width, or pitch was zero or negative
    #[error("Parameter '{param}' must be positive, got {value}")]
    NonPositive {
        /// The parameter name.
        param: String,
        /// The rejected value.
        value: f64,
    },

    /// A bounded parameter fell outside its open or closed range
    #[error("Parameter '{param}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        /// The parameter name.
        param: String,
        /// The rejected value.
        value: f64,
        /// Lower bound of the valid range.
        min: f64,
        /// Upper bound of the valid range.
        max: f64,
    },

    /// An array grid with no rows or no columns
    #[error("Empty grid shape: {columns}x{rows}")]
    EmptyGrid {
        /// Number of columns requested.
        columns: usize,
        /// Number of rows requested.
        rows: usize,
    },

    /// Any other invalid parameter combination
    #[error("Invalid value for '{param}': {reason}")]
    InvalidValue {
        /// The parameter name.
        param: String,
        /// Why the value is invalid.
        reason: String,
    },
}

impl ValidationError {
    /// Reject `value` unless it is strictly positive and finite.
    pub fn require_positive(param: &str, value: f64) -> Result<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(ValidationError::NonPositive {
                param: param.to_string(),
                value,
            }
            .into())
        }
    }

    /// Reject `value` unless it is finite and not negative.
    pub fn require_non_negative(param: &str, value: f64) -> Result<f64> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange {
                param: param.to_string(),
                value,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into())
        }
    }

    /// Reject `value` unless `min < value < max`.
    pub fn require_open_range(param: &str, value: f64, min: f64, max: f64) -> Result<f64> {
        if value > min && value < max {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange {
                param: param.to_string(),
                value,
                min,
                max,
            }
            .into())
        }
    }

    /// Reject `value` unless `min <= value <= max`.
    pub fn require_closed_range(param: &str, value: f64, min: f64, max: f64) -> Result<f64> {
        if value >= min && value <= max {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange {
                param: param.to_string(),
                value,
                min,
                max,
            }
            .into())
        }
    }
}

/// Geometric-consistency error
///
/// Raised by the operation that detects the inconsistency. Geometry is never
/// auto-corrected since that would change physical dimensions on the mask.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Offsetting a trajectory by half the width folds the polygon over itself
    #[error("Width {width} exceeds the safe bend radius {radius}")]
    WidthExceedsRadius {
        /// The path width at the offending sample.
        width: f64,
        /// The local radius of curvature at that sample.
        radius: f64,
    },

    /// Docking two ports of different widths
    #[error("Port '{port}' width mismatch: expected {expected}, got {actual}")]
    PortWidthMismatch {
        /// The docking port name.
        port: String,
        /// Width of the target port.
        expected: f64,
        /// Width of the port being docked.
        actual: f64,
    },

    /// A region or curve collapsed to nothing
    #[error("Degenerate geometry: {0}")]
    Degenerate(String),
}

/// Lookup error
///
/// Raised with the offending key when a name does not resolve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// A port name not present in the port mapping
    #[error("Port not found: {port}")]
    MissingPort {
        /// The missing port name.
        port: String,
    },

    /// A layer name not present in the layer registry
    #[error("Unknown layer: {layer}")]
    UnknownLayer {
        /// The unknown layer name.
        layer: String,
    },

    /// A named structural reference not held by the pattern
    #[error("Reference not found: {name}")]
    MissingReference {
        /// The missing reference name.
        name: String,
    },

    /// A material name not present in the material table
    #[error("Unknown material: {material}")]
    UnknownMaterial {
        /// The unknown material name.
        material: String,
    },
}

/// Main error type for PhotonKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Geometric-consistency error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Lookup error
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a missing-port lookup error
    pub fn missing_port(port: impl Into<String>) -> Self {
        Error::Lookup(LookupError::MissingPort { port: port.into() })
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a lookup error
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Error::Lookup(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
