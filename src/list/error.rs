use thiserror::Error;

/// Errors reported by the fallible list operations.
///
/// Every failure propagates immediately to the caller; nothing is retried
/// or swallowed. Both cases are avoidable up front by checking
/// [`is_empty`] or [`len`] before calling.
///
/// [`is_empty`]: crate::List::is_empty
/// [`len`]: crate::List::len
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Returned by [`pop_front`] and [`pop_back`] when the list has no
    /// elements to remove.
    ///
    /// [`pop_front`]: crate::List::pop_front
    /// [`pop_back`]: crate::List::pop_back
    #[error("pop from empty list")]
    EmptyList,

    /// Returned by [`insert`] and [`remove`] when the position argument
    /// exceeds the valid range.
    ///
    /// [`insert`]: crate::List::insert
    /// [`remove`]: crate::List::remove
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// The offending position argument.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use crate::ListError;

    #[test]
    fn error_display() {
        assert_eq!(ListError::EmptyList.to_string(), "pop from empty list");
        assert_eq!(
            ListError::OutOfRange { index: 5, len: 3 }.to_string(),
            "index 5 out of range for list of length 3",
        );
    }
}
