use thiserror::Error;

/// Errors returned by the range based entry points.
///
/// All checks happen before the slice is touched, a returned error means the slice is unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// `low` or `high` is out of bounds for a slice of length `len`, or a partition was requested
    /// for `low > high`.
    #[error("invalid range [{low}, {high}] for slice of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },

    /// The caller declared a length that disagrees with the actual slice length.
    #[error("declared length {declared} does not match slice length {actual}")]
    LengthMismatch { declared: usize, actual: usize },
}

/// Checks that both `low` and `high` are valid indices into a slice of length `len`.
pub(crate) fn check_bounds(low: usize, high: usize, len: usize) -> Result<(), SortError> {
    if low >= len || high >= len {
        tracing::debug!(low, high, len, "rejecting out of bounds range");
        return Err(SortError::InvalidRange { low, high, len });
    }

    Ok(())
}

/// Checks the bounds of a range to sort.
///
/// `high` must be a valid index. `low` may be one past the end, which is the empty range right of
/// a pivot that landed on the last index.
pub(crate) fn check_sort_bounds(low: usize, high: usize, len: usize) -> Result<(), SortError> {
    if low > len || high >= len {
        tracing::debug!(low, high, len, "rejecting out of bounds range");
        return Err(SortError::InvalidRange { low, high, len });
    }

    Ok(())
}

/// Like [`check_bounds`], but additionally requires the range to be non-empty.
pub(crate) fn check_range(low: usize, high: usize, len: usize) -> Result<(), SortError> {
    if low > high {
        tracing::debug!(low, high, len, "rejecting empty range");
        return Err(SortError::InvalidRange { low, high, len });
    }

    check_bounds(low, high, len)
}
