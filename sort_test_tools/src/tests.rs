use std::cmp::Ordering;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use rand::prelude::*;

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: [usize; 26] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 50, 63, 64, 65, 100, 500,
    1_000,
];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: [usize; 30] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 50, 63, 64, 65, 100, 500,
    1_000, 2_048, 10_000, 100_000, 1_000_000,
];

/// Sorts `v` with `S` and compares the result against the standard library sort.
fn sort_comp<T, S>(v: &mut [T])
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();

    let mut expected = v.to_vec();
    expected.sort();

    S::sort(v);

    if v != expected.as_slice() {
        if v.len() <= 20 {
            panic!(
                "{}: expected {expected:?} got {v:?} seed: {seed}",
                S::name()
            );
        }

        let first_diff = v
            .iter()
            .zip(expected.iter())
            .position(|(a, b)| a != b)
            .unwrap_or(0);
        panic!(
            "{}: len {} differs first at index {first_diff} seed: {seed}",
            S::name(),
            v.len()
        );
    }
}

fn test_impl<T, S>(pattern_fn: impl Fn(usize) -> Vec<T>)
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        sort_comp::<T, S>(test_data.as_mut_slice());
    }
}

// --- TESTS ---

pub fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut []);
    sort_comp::<(), S>(&mut [()]);
    sort_comp::<(), S>(&mut [(), ()]);
    sort_comp::<(), S>(&mut [(), (), ()]);
    sort_comp::<i32, S>(&mut [77]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
}

pub fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

pub fn random<S: Sort>() {
    test_impl::<i32, S>(patterns::random);
}

pub fn random_type_u64<S: Sort>() {
    test_impl::<u64, S>(|len| {
        patterns::random(len)
            .into_iter()
            .map(|val| (val as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .collect()
    });
}

pub fn random_type_u128<S: Sort>() {
    test_impl::<u128, S>(|len| {
        patterns::random(len)
            .into_iter()
            .map(|val| ((val as u128) << 64) | (val as u32 as u128))
            .collect()
    });
}

pub fn random_str<S: Sort>() {
    test_impl::<String, S>(|len| {
        patterns::random(len)
            .into_iter()
            .map(|val| format!("{:010}", val.saturating_abs()))
            .collect()
    });
}

pub fn random_d4<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_uniform(len, 0..4));
}

pub fn random_d8<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_uniform(len, 0..8));
}

pub fn random_d256<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_uniform(len, 0..256));
}

pub fn random_binary<S: Sort>() {
    test_impl::<i32, S>(patterns::random_binary);
}

pub fn random_zipf<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_zipf(len, 1.0));
}

pub fn random_s95<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_sorted(len, 5.0));
}

pub fn all_equal<S: Sort>() {
    test_impl::<i32, S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_impl::<i32, S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<i32, S>(patterns::descending);
}

pub fn saw_ascending<S: Sort>() {
    test_impl::<i32, S>(|len| {
        patterns::saw_ascending(len, ((len as f64).log2().round()) as usize)
    });
}

pub fn saw_descending<S: Sort>() {
    test_impl::<i32, S>(|len| {
        patterns::saw_descending(len, ((len as f64).log2().round()) as usize)
    });
}

pub fn pipe_organ<S: Sort>() {
    test_impl::<i32, S>(patterns::pipe_organ);
}

pub fn int_edge<S: Sort>() {
    sort_comp::<i32, S>(&mut [i32::MAX, i32::MIN]);
    sort_comp::<i32, S>(&mut [i32::MIN, i32::MAX]);
    sort_comp::<i32, S>(&mut [i32::MIN, 3]);
    sort_comp::<i32, S>(&mut [i32::MIN, -3]);
    sort_comp::<i32, S>(&mut [i32::MIN, -3, i32::MAX]);
    sort_comp::<i32, S>(&mut [i32::MIN, -3, i32::MAX, i32::MIN, 5]);
    sort_comp::<i32, S>(&mut [i32::MAX, 3, i32::MIN, 5, i32::MIN, -3, 60, 200, 50, 7, 10]);

    sort_comp::<u64, S>(&mut [u64::MAX, u64::MIN]);
    sort_comp::<u64, S>(&mut [u64::MIN, u64::MAX]);
    sort_comp::<u64, S>(&mut [u64::MIN, 3]);
    sort_comp::<u64, S>(&mut [u64::MIN, u64::MAX - 3]);
    sort_comp::<u64, S>(&mut [u64::MIN, u64::MAX - 3, u64::MAX]);
    sort_comp::<u64, S>(&mut [u64::MIN, u64::MAX - 3, u64::MAX, u64::MIN, 5]);

    let mut large = patterns::random(TEST_SIZES[TEST_SIZES.len() - 2]);
    large.push(i32::MAX);
    large.push(i32::MIN);
    large.push(i32::MAX);
    sort_comp::<i32, S>(&mut large);
}

pub fn sort_vs_sort_by<S: Sort>() {
    // Ensure that sort and sort_by produce the same result.
    let mut input_normal = [800, 3, -801, 5, -801, -3, 60, 200, 50, 7, 10];
    let expected = [-801, -801, -3, 3, 5, 7, 10, 50, 60, 200, 800];

    let mut input_sort_by = input_normal.to_vec();

    S::sort(&mut input_normal);
    S::sort_by(&mut input_sort_by, |a, b| a.cmp(b));

    assert_eq!(input_normal, expected);
    assert_eq!(input_sort_by, expected);
}

pub fn sort_by_reversed<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut test_data = patterns::random(test_size);
        let mut expected = test_data.clone();
        expected.sort_by(|a, b| b.cmp(a));

        S::sort_by(&mut test_data, |a, b| b.cmp(a));

        assert_eq!(test_data, expected, "seed: {}", patterns::random_init_seed());
    }
}

pub fn idempotent<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut test_data = patterns::random_uniform(test_size, 0..64);
        S::sort(&mut test_data);

        let once = test_data.clone();
        S::sort(&mut test_data);

        assert_eq!(test_data, once, "seed: {}", patterns::random_init_seed());
    }
}

fn is_same_multiset(a: &[i32], b: &[i32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();

    a == b
}

pub fn panic_retain_original_set<S: Sort>() {
    for test_size in TEST_SIZES.into_iter().filter(|len| *len >= 2) {
        let mut test_data = patterns::random(test_size);
        let original = test_data.clone();

        let mut rng = StdRng::seed_from_u64(patterns::random_init_seed());
        let panic_at = rng.gen_range(0..test_size);
        let mut comp_count = 0;

        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            S::sort_by(&mut test_data, |a, b| {
                if comp_count == panic_at {
                    panic!("explicit panic");
                }
                comp_count += 1;

                a.cmp(b)
            });
        }));

        assert!(
            is_same_multiset(&test_data, &original),
            "lost elements after panic, seed: {}",
            patterns::random_init_seed()
        );
    }
}

pub fn violate_ord_retain_original_set<S: Sort>() {
    let mut rng = StdRng::seed_from_u64(patterns::random_init_seed());

    let mut random_ordering = move |_: &i32, _: &i32| -> Ordering {
        match rng.gen_range(0..3) {
            0 => Ordering::Less,
            1 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    };

    for test_size in TEST_SIZES {
        let mut test_data = patterns::random(test_size);
        let original = test_data.clone();

        // Inconsistent orderings must neither panic nor lose or duplicate elements.
        S::sort_by(&mut test_data, &mut random_ordering);

        assert!(
            is_same_multiset(&test_data, &original),
            "violating Ord changed the set of elements, seed: {}",
            patterns::random_init_seed()
        );
    }
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_fns!(
            $sort_impl,
            basic,
            fixed_seed,
            random,
            random_type_u64,
            random_type_u128,
            random_str,
            random_d4,
            random_d8,
            random_d256,
            random_binary,
            random_zipf,
            random_s95,
            all_equal,
            ascending,
            descending,
            saw_ascending,
            saw_descending,
            pipe_organ,
            int_edge,
            sort_vs_sort_by,
            sort_by_reversed,
            idempotent,
            panic_retain_original_set,
            violate_ord_retain_original_set
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_fns {
    ($sort_impl:ty, $($test_fn:ident),*) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<sort_ $test_fn>]() {
                    $crate::tests::$test_fn::<$sort_impl>();
                }
            }
        )*
    };
}
