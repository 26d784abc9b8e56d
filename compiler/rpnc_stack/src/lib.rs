//! Growable last-in-first-out storage for the rpnc converter.
//!
//! [`GrowableStack`] owns one contiguous buffer whose logical capacity
//! doubles on overflow (0, 1, 2, 4, ...). Every fallible operation returns a
//! [`StackError`] instead of panicking, and a failed operation never changes
//! the stack's size or capacity.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod stack;

// Re-export the main types for convenience
pub use error::StackError;
pub use stack::GrowableStack;
