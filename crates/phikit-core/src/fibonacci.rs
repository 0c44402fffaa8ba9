//! Memoized Fibonacci table
//!
//! Terms are indexed from zero with `F[0] = F[1] = 1`. The table only ever
//! grows; an extension and the read that triggered it happen under a single
//! write lock so concurrent callers never observe a partially built table.

use crate::error::{GeometryError, GeometryResult};
use parking_lot::RwLock;
use std::sync::OnceLock;

/// Largest index whose term fits in a `u64` (F[92] = 12200160415121876738).
pub const MAX_FIBONACCI_INDEX: usize = 92;

/// Append-only Fibonacci memo.
#[derive(Debug)]
pub struct FibonacciTable {
    terms: RwLock<Vec<u64>>,
}

impl FibonacciTable {
    /// Create a table seeded with `F[0]` and `F[1]`.
    pub fn new() -> Self {
        Self {
            terms: RwLock::new(vec![1, 1]),
        }
    }

    /// Returns the nth term, extending the cache when `n` is past its end.
    pub fn get(&self, n: usize) -> GeometryResult<u64> {
        if n > MAX_FIBONACCI_INDEX {
            return Err(GeometryError::invalid_index(
                n as f64,
                format!("exceeds the largest u64 term index {}", MAX_FIBONACCI_INDEX),
            ));
        }

        let cached = self.terms.read().get(n).copied();
        if let Some(term) = cached {
            return Ok(term);
        }

        let mut terms = self.terms.write();
        // Another caller may have extended the table between the two locks.
        while terms.len() <= n {
            let len = terms.len();
            let next = terms[len - 1]
                .checked_add(terms[len - 2])
                .ok_or_else(|| GeometryError::invalid_index(n as f64, "term overflows u64"))?;
            terms.push(next);
        }
        tracing::trace!("Fibonacci table extended to {} terms", terms.len());
        Ok(terms[n])
    }

    /// Number of terms currently memoized.
    pub fn cached_len(&self) -> usize {
        self.terms.read().len()
    }

    /// First `len` terms.
    pub fn sequence(&self, len: usize) -> GeometryResult<Vec<u64>> {
        if len == 0 {
            return Ok(Vec::new());
        }
        self.get(len - 1)?;
        Ok(self.terms.read()[..len].to_vec())
    }
}

impl Default for FibonacciTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Global table instance
static GLOBAL_TABLE: OnceLock<FibonacciTable> = OnceLock::new();

/// Get or initialize the process-wide table.
pub fn fibonacci_table() -> &'static FibonacciTable {
    GLOBAL_TABLE.get_or_init(FibonacciTable::new)
}

/// Returns the nth Fibonacci term from the process-wide table.
pub fn fibonacci(n: usize) -> GeometryResult<u64> {
    fibonacci_table().get(n)
}

/// Returns the term for an index supplied as a floating point value
/// (e.g. from configuration). Negative, fractional and non-finite
/// indices are rejected rather than rounded.
pub fn fibonacci_checked(index: f64) -> GeometryResult<u64> {
    if !index.is_finite() {
        return Err(GeometryError::invalid_index(index, "must be finite"));
    }
    if index < 0.0 {
        return Err(GeometryError::invalid_index(index, "must be non-negative"));
    }
    if index.fract() != 0.0 {
        return Err(GeometryError::invalid_index(index, "must be an integer"));
    }
    if index > MAX_FIBONACCI_INDEX as f64 {
        return Err(GeometryError::invalid_index(
            index,
            format!("exceeds the largest u64 term index {}", MAX_FIBONACCI_INDEX),
        ));
    }
    fibonacci(index as usize)
}

/// First `len` terms from the process-wide table.
pub fn fibonacci_sequence(len: usize) -> GeometryResult<Vec<u64>> {
    fibonacci_table().sequence(len)
}

/// Whether `value` appears in the table.
pub fn is_fibonacci(value: u64) -> bool {
    (0..=MAX_FIBONACCI_INDEX)
        .map_while(|n| fibonacci(n).ok())
        .take_while(|term| *term <= value)
        .any(|term| term == value)
}
