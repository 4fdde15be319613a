use core::cmp::Ordering;

use crate::error::{check_sort_bounds, SortError};
use crate::partition::partition_at;
use crate::pivot::choose_pivot;

/// Sorts the slice in ascending order, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place (i.e., does not
/// allocate). Recursion depth is *O*(log(*n*)), runtime is *O*(*n* \* log(*n*)) on average and
/// *O*(*n*^2) on adversarial inputs.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// quicksort_rs::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but all original elements
/// remain in the slice.
///
/// ```
/// let mut floats = [5f64, 4.0, 1.0, 3.0, 2.0];
/// quicksort_rs::sort_by(&mut floats, |a, b| a.total_cmp(b));
/// assert_eq!(floats, [1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called twice per comparison.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    unstable_sort(v, &mut |a: &T, b: &T| f(a).lt(&f(b)));
}

/// Sorts the inclusive range `v[low..=high]` in ascending order, leaving the rest of `v` as is.
///
/// `low >= high` is a no-op as long as `high` is in-bounds and `low` is at most one past the end,
/// the shapes left and right of a pivot at either end of a range. Returns
/// [`SortError::InvalidRange`] without touching `v` otherwise, which includes every call on an
/// empty slice.
#[inline]
pub fn sort_range<T>(v: &mut [T], low: usize, high: usize) -> Result<(), SortError>
where
    T: Ord,
{
    sort_range_impl(v, low, high, &mut |a: &T, b: &T| a.lt(b))
}

/// Same as [`sort_range`] but uses `compare` to order the elements.
#[inline]
pub fn sort_range_by<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    mut compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range_impl(v, low, high, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    })
}

/// Sorts all of `v` after checking that the caller's idea of its length is correct.
///
/// Returns [`SortError::LengthMismatch`] without touching `v` if `len != v.len()`. Catches callers
/// that compute the bounds from a stale or unrelated length.
#[inline]
pub fn sort_with_len<T>(v: &mut [T], len: usize) -> Result<(), SortError>
where
    T: Ord,
{
    if len != v.len() {
        tracing::debug!(declared = len, actual = v.len(), "rejecting length mismatch");
        return Err(SortError::LengthMismatch {
            declared: len,
            actual: v.len(),
        });
    }

    tracing::trace!(len, "sorting slice");
    sort(v);

    Ok(())
}

// --- IMPL ---

fn sort_range_impl<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    check_sort_bounds(low, high, v.len())?;

    if low >= high {
        return Ok(());
    }

    tracing::trace!(low, high, len = v.len(), "sorting range");
    unstable_sort(&mut v[low..=high], is_less);

    Ok(())
}

#[inline]
fn unstable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Empty and single element slices are sorted, there is nothing to partition.
    if v.len() < 2 {
        return;
    }

    quicksort(v, None, is_less);
}

/// Sorts `v` recursively.
///
/// If the slice had a predecessor in the original array, it is specified as `ancestor_pivot`.
/// Every element of `v` is greater than or equal to it.
///
/// Only the shorter side of each partition is handled by recursion, the longer side is handled by
/// the loop. That bounds the recursion depth to `log2(v.len())` no matter how bad the pivots are.
fn quicksort<'a, T, F>(mut v: &'a mut [T], mut ancestor_pivot: Option<&'a T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let pivot_pos = choose_pivot(v, is_less);

        // If the chosen pivot is equal to the predecessor, then it's the smallest element in the
        // slice. Partition the slice into elements equal to and elements greater than the pivot.
        // This case is usually hit when the slice contains many duplicate elements.
        if let Some(p) = ancestor_pivot {
            if !is_less(p, &v[pivot_pos]) {
                let num_le = partition_at(v, pivot_pos, &mut |a: &T, b: &T| !is_less(b, a));

                // Continue sorting elements greater than the pivot. We know that `num_le` contains
                // the pivot. So we can continue after `num_le`.
                v = &mut v[(num_le + 1)..];
                ancestor_pivot = None;
                continue;
            }
        }

        let num_lt = partition_at(v, pivot_pos, is_less);

        // Split the slice into `left`, `pivot`, and `right`. The pivot is in its final position
        // and is never looked at again, except as ancestor of `right`.
        let (left, right) = v.split_at_mut(num_lt);
        let (pivot, right) = right.split_at_mut(1);
        let pivot = &pivot[0];

        if left.len() < right.len() {
            quicksort(left, ancestor_pivot, is_less);
            v = right;
            ancestor_pivot = Some(pivot);
        } else {
            quicksort(right, Some(pivot), is_less);
            v = left;
        }
    }
}
