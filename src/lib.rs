//! # Null-safe iteration helpers
//!
//! Two small generic helpers over optional sequences:
//!
//! 1. [`enumerate`]: invoke an indexed callback `(index, value)` per
//!    element, with the index counting up from 0
//! 2. [`for_each_check_null`]: invoke a plain callback per element
//!
//! Both treat an absent (`None`) sequence as a documented no-op rather
//! than an error, and both accept anything that implements
//! [`IntoIterator`]: an owned collection, a borrowed one, or a lazy
//! single-pass iterator.
//!
//! ## Usage example
//!
//! ```
//! use iterwise::enumerate;
//!
//! let names = vec!["ada", "grace", "barbara"];
//! enumerate(Some(&names), Some(|i, name: &&str| {
//!     println!("{i}: {name}");
//! })).unwrap();
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod iterate; // enumerate / for_each_check_null

// Re-exports for convenience
pub use iterate::{enumerate, for_each_check_null};

use thiserror::Error;

/// Errors raised by the iteration helpers
///
/// Failures produced by a caller-supplied callback are not represented
/// here: callbacks signal failure by panicking, and panics propagate
/// unmodified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationError {
    /// A sequence was supplied but the mandatory callback was absent
    #[error("callback is required when a sequence is supplied")]
    MissingCallback,
}
