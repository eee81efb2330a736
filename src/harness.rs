//! Demo datasets and timing helpers used by the `timsort` binary.

use std::fmt::Write;
use std::time::{Duration, Instant};

use crate::error::SortError;
use crate::timsort::TimSort;

/// Eleven element datasets covering sorted, reversed, duplicate heavy and negative input.
pub const DEMO_DATASETS: [[i32; 11]; 6] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    [10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
    [0, 3, 2, 1, 4, 7, 6, 5, 8, 9, 10],
    [2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [100, 201, 52, 3223, 24, 55, 623, 75, 8523, -9, 150],
    [-1, 1, 2, -3, 4, 5, -6, 7, 8, -9, 10],
];

/// Formats `v` as decimal values, each followed by a single space, terminated by a newline.
pub fn format_sequence(v: &[i32]) -> String {
    let mut out = String::with_capacity(v.len() * 4 + 1);
    for val in v {
        // Writing to a String can't fail.
        let _ = write!(out, "{val} ");
    }
    out.push('\n');
    out
}

/// Sorts every demo dataset with `sorter` and returns the results in dataset order.
pub fn sort_demo_datasets(sorter: &TimSort) -> Result<Vec<[i32; 11]>, SortError> {
    DEMO_DATASETS
        .iter()
        .map(|dataset| {
            let mut v = *dataset;
            sorter.sort(&mut v)?;
            Ok(v)
        })
        .collect()
}

/// Sorts `v` with `sorter` and returns the wall-clock time spent, measured with a monotonic clock.
pub fn time_sort(sorter: &TimSort, v: &mut [i32]) -> Result<Duration, SortError> {
    let start = Instant::now();
    sorter.sort(v)?;
    Ok(start.elapsed())
}

pub fn is_sorted(v: &[i32]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
