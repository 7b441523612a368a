//! Indexed iteration over an optional sequence

use tracing::trace;

use crate::IterationError;

/// Invoke `action(index, value)` for each element of `data`, counting
/// from 0
///
/// The sequence is traversed exactly once, in its natural order, and
/// every callback invocation completes before this function returns.
/// An absent sequence is a no-op (logged at TRACE level), never an
/// error. Lazy single-pass producers are consumed; re-running over an
/// already drained producer invokes the callback zero times.
///
/// # Errors
///
/// [`IterationError::MissingCallback`] if `data` is present but
/// `action` is not.
///
/// # Example
///
/// ```
/// use iterwise::enumerate;
///
/// let values = vec![3, 2, 1];
/// let mut seen = Vec::new();
/// enumerate(Some(&values), Some(|i, v: &i32| seen.push((i, *v)))).unwrap();
/// assert_eq!(seen, vec![(0, 3), (1, 2), (2, 1)]);
/// ```
pub fn enumerate<I, F>(data: Option<I>, action: Option<F>) -> Result<(), IterationError>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item),
{
    let Some(data) = data else {
        trace!("enumerate called with an absent sequence; nothing to iterate");
        return Ok(());
    };

    let mut action = action.ok_or(IterationError::MissingCallback)?;

    for (index, value) in data.into_iter().enumerate() {
        action(index, value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_count_from_zero() {
        let values = vec!['a', 'b', 'c'];
        let mut indices = Vec::new();

        enumerate(Some(&values), Some(|i, _: &char| indices.push(i))).unwrap();

        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_absent_sequence_is_noop() {
        let mut calls = 0;
        let result = enumerate(
            None::<Vec<i32>>,
            Some(|_, _: i32| calls += 1),
        );

        assert_eq!(result, Ok(()));
        assert_eq!(calls, 0, "Callback must not run for an absent sequence");
    }

    #[test]
    fn test_missing_callback_is_rejected() {
        let values = vec![1, 2, 3];
        let result = enumerate(Some(&values), None::<fn(usize, &i32)>);

        assert_eq!(result, Err(IterationError::MissingCallback));
    }

    #[test]
    fn test_empty_sequence_invokes_nothing() {
        let values: Vec<u8> = Vec::new();
        let mut calls = 0;

        enumerate(Some(&values), Some(|_, _: &u8| calls += 1)).unwrap();

        assert_eq!(calls, 0);
    }
}
