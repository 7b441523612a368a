//! Iteration helpers over optional sequences
//!
//! Both helpers take the sequence and the callback as `Option`s: an
//! absent sequence is a no-op, an absent callback alongside a present
//! sequence is a contract violation reported as
//! [`IterationError::MissingCallback`](crate::IterationError).

mod enumerate;
mod for_each;

pub use enumerate::enumerate;
pub use for_each::for_each_check_null;
