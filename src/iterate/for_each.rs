//! Null-guarded for-each over an optional sequence

use tracing::trace;

use crate::IterationError;

/// Invoke `action(value)` for each element of `data`
///
/// Same traversal contract as [`enumerate`](crate::enumerate) without
/// the index: one synchronous pass in natural order, absent sequence is
/// a TRACE-logged no-op, and no bookkeeping beyond advancing the
/// iterator.
///
/// # Errors
///
/// [`IterationError::MissingCallback`] if `data` is present but
/// `action` is not.
///
/// # Example
///
/// ```
/// use iterwise::for_each_check_null;
///
/// let words = vec!["One", "Two", "Three"];
/// let mut seen = Vec::new();
/// for_each_check_null(Some(&words), Some(|w: &&'static str| seen.push(*w))).unwrap();
/// assert_eq!(seen, words);
/// ```
pub fn for_each_check_null<I, F>(data: Option<I>, action: Option<F>) -> Result<(), IterationError>
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    let Some(data) = data else {
        trace!("for_each_check_null called with an absent sequence; nothing to iterate");
        return Ok(());
    };

    let mut action = action.ok_or(IterationError::MissingCallback)?;

    for value in data {
        action(value);
    }

    Ok(())
}
