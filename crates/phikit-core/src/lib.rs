//! # PhiKit Core
//!
//! Core types and constant tables for PhiKit.
//! Provides the golden-ratio constants, the memoized Fibonacci table,
//! the shared point type and the error taxonomy used by every generator.

pub mod constants;
pub mod error;
pub mod fibonacci;
pub mod point;

pub use constants::{
    golden_angle, golden_ratio, golden_ratio_inverse, GoldenConstants, EPSILON, GOLDEN_ANGLE, PHI,
    PHI_INVERSE,
};

pub use error::{Error, GeometryError, GeometryResult, Result};

pub use fibonacci::{
    fibonacci, fibonacci_checked, fibonacci_sequence, fibonacci_table, is_fibonacci, FibonacciTable,
    MAX_FIBONACCI_INDEX,
};

pub use point::Point2D;
