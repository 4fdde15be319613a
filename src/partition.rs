use core::cmp::Ordering;

use crate::error::{check_range, SortError};
use crate::pivot::choose_pivot;

/// Partitions `v[low..=high]` around a pivot chosen from that range and returns the pivot's final
/// index.
///
/// After the call every element in `v[low..p]` is less than or equal to `v[p]` and every element
/// in `v[p + 1..=high]` is greater than or equal to `v[p]`. Elements outside the range are not
/// touched. A single element range returns `low` without comparing anything.
///
/// Returns [`SortError::InvalidRange`] if `low > high` or `high >= v.len()`, in which case `v` is
/// left unchanged.
#[inline]
pub fn partition<T>(v: &mut [T], low: usize, high: usize) -> Result<usize, SortError>
where
    T: Ord,
{
    partition_range(v, low, high, &mut |a: &T, b: &T| a.lt(b))
}

/// Same as [`partition`] but uses `compare` to order the elements.
///
/// `compare` must define a total order, otherwise the resulting order is unspecified. All
/// original elements will remain in `v` in any case.
#[inline]
pub fn partition_by<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    mut compare: F,
) -> Result<usize, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition_range(v, low, high, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    })
}

fn partition_range<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
) -> Result<usize, SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    check_range(low, high, v.len())?;

    if low == high {
        return Ok(low);
    }

    let range = &mut v[low..=high];
    let pivot_pos = choose_pivot(range, is_less);
    let num_lt = partition_at(range, pivot_pos, is_less);

    Ok(low + num_lt)
}

/// Takes the input slice `v` and re-arranges elements such that when the call returns normally
/// all elements that compare true for `is_less(elem, pivot)` where `pivot == v[pivot_pos]` are
/// on the left side of `v` followed by the pivot and then the other elements, notionally
/// considered greater or equal to `pivot`.
///
/// Returns the number of elements that are compared true for `is_less(elem, pivot)`, which is
/// also the final position of the pivot.
///
/// If `is_less` does not implement a total order the resulting order and return value are
/// unspecified. All original elements will remain in `v` and any possible modifications via
/// interior mutability will be observable. Same is true if `is_less` panics.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition_at<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len == 0 {
        return 0;
    }

    assert!(
        pivot_pos < len,
        "pivot position {pivot_pos} out of bounds for slice of length {len}"
    );

    // Place the pivot at the beginning of slice.
    v.swap(0, pivot_pos);
    let (pivot, v_without_pivot) = v.split_at_mut(1);

    // A signature of the form `(v: &mut [T], pivot: &T)` guarantees that pivot and v can't alias.
    let pivot = &pivot[0];

    let num_lt = partition_hoare(v_without_pivot, pivot, is_less);

    // Place the pivot between the two partitions.
    v.swap(0, num_lt);

    num_lt
}

/// Two pointer scan that moves every element that is less than `pivot` to the front of `v`.
///
/// Elements equal to the pivot are never less than it, so they stay on or move to the right
/// side. Every swap advances both `left` and `right`, which guarantees progress on constant input.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition_hoare<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len == 0 {
        return 0;
    }

    // Invariant: v[..left] is less than the pivot and v[right..] is not.
    let mut left = 0;
    let mut right = len;

    loop {
        // Find the first element greater than or equal to the pivot.
        while left < right && is_less(&v[left], pivot) {
            left += 1;
        }

        // Find the last element less than the pivot. `right > left >= 0` or `left == right > 0`
        // holds here, so the decrement can't underflow.
        loop {
            right -= 1;
            if left >= right || is_less(&v[right], pivot) {
                break;
            }
        }

        if left >= right {
            break;
        }

        v.swap(left, right);
        left += 1;
    }

    left
}
