//! Error handling for PhiKit
//!
//! Provides the error taxonomy shared by every layer of the engine:
//! - Geometry errors (out-of-domain parameters, invalid table indices)
//! - A unified [`Error`] wrapping geometry, I/O and free-form failures
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised synchronously by the constant tables, the curve primitives and
/// every shape generator when a caller supplies input outside its domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A numeric parameter is outside its valid domain
    #[error("Invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        param: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A table index is negative, fractional or beyond the table
    #[error("Invalid index {index}: {reason}")]
    InvalidIndex {
        /// The offending index as supplied by the caller.
        index: f64,
        /// Why the index was rejected.
        reason: String,
    },
}

impl GeometryError {
    /// Create an `InvalidParameter` error
    pub fn invalid_parameter(param: impl Into<String>, reason: impl Into<String>) -> Self {
        GeometryError::InvalidParameter {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Create an `InvalidIndex` error
    pub fn invalid_index(index: f64, reason: impl Into<String>) -> Self {
        GeometryError::InvalidIndex {
            index,
            reason: reason.into(),
        }
    }

    /// Check if this is a parameter error
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, GeometryError::InvalidParameter { .. })
    }

    /// Check if this is an index error
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, GeometryError::InvalidIndex { .. })
    }
}

/// Main error type for PhiKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type for geometry operations
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Reject a value that is NaN or infinite.
pub fn ensure_finite(param: &str, value: f64) -> GeometryResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::invalid_parameter(
            param,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Reject a value that is not strictly positive (or not finite).
pub fn ensure_positive(param: &str, value: f64) -> GeometryResult<f64> {
    let value = ensure_finite(param, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::invalid_parameter(
            param,
            format!("must be > 0, got {}", value),
        ))
    }
}

/// Reject a value outside the closed range `[min, max]`.
pub fn ensure_in_range(param: &str, value: f64, min: f64, max: f64) -> GeometryResult<f64> {
    let value = ensure_finite(param, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(GeometryError::invalid_parameter(
            param,
            format!("must be within [{}, {}], got {}", min, max, value),
        ))
    }
}
