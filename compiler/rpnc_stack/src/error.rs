//! Failure kinds reported by [`GrowableStack`](crate::GrowableStack).

use thiserror::Error;

/// Errors returned by stack operations.
///
/// Each failure is scoped to the single call that raised it; the stack is
/// left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop`, `top` or `peek` was called on an empty stack.
    #[error("stack underflow: the stack is empty")]
    Underflow,

    /// The buffer could not be grown to hold `requested` elements.
    #[error("unable to allocate a buffer for {requested} elements")]
    AllocationFailure {
        /// Capacity the stack attempted to reach.
        requested: usize,
    },

    /// Indexed access outside of `[0, len)`.
    #[error("index {index} is out of range for a stack of {len} elements")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
}
