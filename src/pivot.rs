// Recursively select a pseudomedian if above this threshold.
const PSEUDO_MEDIAN_REC_THRESHOLD: usize = 64;

// Below this length sampling is not worth the comparisons, take the middle element.
const MEDIAN_OF_3_THRESHOLD: usize = 8;

/// Selects a pivot from `v` and returns its position.
///
/// Uses the middle element for short slices, median of 3 for medium slices and the compact
/// pseudomedian of 9 otherwise. The result is always in-bounds for a non-empty `v`.
pub(crate) fn choose_pivot<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < MEDIAN_OF_3_THRESHOLD {
        return len / 2;
    }

    let a = 0; // start
    let b = len / 2; // mid
    let c = len - 1; // end

    if len < PSEUDO_MEDIAN_REC_THRESHOLD {
        median3(v, a, b, c, is_less)
    } else {
        median9(v, a, b, c, is_less)
    }
}

/// Calculates the compact pseudo-median of 9 elements, sampled in steps of `len / 8` around the
/// start, the middle and the end of `v`.
fn median9<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let n8 = (c - a + 1) / 8;

    let m1 = median3(v, a, a + n8, a + n8 * 2, is_less);
    let m2 = median3(v, b - n8, b, b + n8, is_less);
    let m3 = median3(v, c - n8 * 2, c - n8, c, is_less);

    median3(v, m1, m2, m3, is_less)
}

/// Calculates the median of the elements at positions `a`, `b` and `c`.
fn median3<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Compiler tends to make this branchless when sensible, and avoids the
    // third comparison when not.
    let x = is_less(&v[a], &v[b]);
    let y = is_less(&v[a], &v[c]);
    if x == y {
        // If x=y=0 then b, c <= a. In this case we want to return max(b, c).
        // If x=y=1 then a < b, c. In this case we want to return min(b, c).
        // By toggling the outcome of b < c using XOR x we get this behavior.
        let z = is_less(&v[b], &v[c]);
        if z ^ x {
            c
        } else {
            b
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        a
    }
}

