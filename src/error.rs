//! Crate error types.
//!
//! The only failure mode in this crate is buffer allocation: sizing or
//! duplicating a [`ValueArray`](crate::ValueArray) must obtain memory before
//! any state changes hands.

use std::collections::TryReserveError;
use thiserror::Error;

/// Buffer allocation was refused while constructing a `ValueArray`.
///
/// Carries the requested element count and the underlying reservation error.
/// No partially built array is observable after this error: the operation
/// that raised it either fully succeeds or produces nothing, and any
/// receiver keeps its previous value.
#[derive(Error, Debug)]
#[error("failed to allocate a buffer of {len} elements")]
pub struct AllocationError {
    /// Element count the failed allocation asked for.
    pub len: usize,
    /// The allocator's refusal.
    #[source]
    pub source: TryReserveError,
}
