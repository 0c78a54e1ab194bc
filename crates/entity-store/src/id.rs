//! # Identifier Generation
//!
//! This module defines [`IdGenerator`], the single source of identifiers for a
//! store. Every call to [`IdGenerator::next`] returns a value strictly greater
//! than every value it returned before, starting at 1.
//!
//! The generator is a thin wrapper around an [`AtomicI64`], so it is safe to
//! call from any number of threads at once: the fetch-and-add is a single
//! atomic instruction, two callers can never observe the same value, and no
//! value is skipped and later reused. Overflow of the i64 range is treated as
//! unreachable.

use std::sync::atomic::{AtomicI64, Ordering};

/// Produces unique, strictly increasing `i64` identifiers starting at 1.
///
/// A store owns exactly one generator and consults it whenever an entity is
/// inserted without an id. The generator carries no other state and has no
/// failure modes.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicI64,
}

impl IdGenerator {
    /// Creates a generator whose first [`next`](Self::next) call returns 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next identifier.
    ///
    /// Strictly greater than every previously returned value, even under
    /// unbounded concurrent calls.
    pub fn next(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}
