pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

/// Partitions the inclusive range `arr[low..=high]` and returns the final pivot index.
///
/// Implementations may panic on invalid ranges, the generic tests only pass valid ones.
pub trait Partition {
    fn name() -> String;

    fn partition<T>(arr: &mut [T], low: usize, high: usize) -> usize
    where
        T: Ord;

    fn partition_by<T, F>(arr: &mut [T], low: usize, high: usize, compare: F) -> usize
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
pub mod tests;

#[doc(hidden)]
pub use paste;
