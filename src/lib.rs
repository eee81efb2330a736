//! Bottom-up timsort with fixed size runs.
//!
//! The input is cut into blocks of `run` elements, each block is sorted with insertion sort and
//! the blocks are then merged pairwise with doubling widths until one sorted run remains.

// Gives a sort module a `name()` used to label benchmarks and CLI output.
macro_rules! sort_impl {
    ($name:expr) => {
        pub fn name() -> String {
            $name.into()
        }
    };
}

mod error;
mod insertion;
mod merge;

pub mod harness;
pub mod patterns;
pub mod timsort;

pub use error::SortError;
pub use insertion::sort_bounded;
pub use merge::merge_ranges;
pub use timsort::{sort, TimSort, RUN};
