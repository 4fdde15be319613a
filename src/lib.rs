//! In-place unstable quicksort over slices and inclusive index ranges of slices.

mod error;
mod partition;
mod pivot;
mod quicksort;

pub use error::SortError;
pub use partition::{partition, partition_by};
pub use quicksort::{sort, sort_by, sort_by_key, sort_range, sort_range_by, sort_with_len};
