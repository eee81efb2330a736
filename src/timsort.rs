use std::cmp;
use std::mem::size_of;

use log::{debug, trace};

use crate::error::SortError;
use crate::insertion::sort_bounded;
use crate::merge::merge_ranges;

sort_impl!("timsort_fixed_run");

/// Default length of the blocks sorted by insertion sort before merging starts.
pub const RUN: usize = 2;

/// Sorts `v` using the default run size [`RUN`].
///
/// See [`TimSort::sort`].
#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Copy + Ord,
{
    TimSort::default().sort(v)
}

/// A fixed-run timsort configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimSort {
    run: usize,
}

impl Default for TimSort {
    fn default() -> Self {
        Self { run: RUN }
    }
}

impl TimSort {
    /// Creates a sort that cuts the input into blocks of `run` elements.
    ///
    /// Any `run` of at least one yields a correct sort, it only changes how much work is done by
    /// insertion sort versus merging.
    pub fn with_run(run: usize) -> Result<Self, SortError> {
        if run == 0 {
            return Err(SortError::ZeroRun);
        }

        Ok(Self { run })
    }

    pub fn run(&self) -> usize {
        self.run
    }

    /// Sorts the slice in place.
    ///
    /// This sort is *O*(*n* \* log(*n*)) worst-case. It is not stable in general, see
    /// [`merge_ranges`] for how equal keys meeting at a merge boundary are ordered.
    ///
    /// # Current implementation
    ///
    /// The slice is split into consecutive blocks of `run` elements, the last one possibly
    /// shorter, and every block is sorted with insertion sort. Then neighbouring blocks are merged
    /// pairwise, doubling the block width after each sweep, until a single block covers the whole
    /// slice.
    ///
    /// A scratch buffer the size of the slice is allocated once per call. If that allocation
    /// fails, `v` is left untouched and [`SortError::ScratchAlloc`] is returned.
    pub fn sort<T>(&self, v: &mut [T]) -> Result<(), SortError>
    where
        T: Copy + Ord,
    {
        // Sorting has no meaningful behavior on zero-sized types.
        if size_of::<T>() == 0 {
            return Ok(());
        }

        let len = v.len();
        if len <= 1 {
            return Ok(());
        }

        let run = self.run;
        debug!("sorting {len} elements with run size {run}");

        // Allocate before touching `v` so a failed allocation leaves the input as it was. The
        // buffer only ever holds shallow copies of the elements of `v`, so seeding it with them is
        // as good as any other initial contents.
        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(len)
            .map_err(|source| SortError::ScratchAlloc { len, source })?;
        scratch.extend_from_slice(v);

        for low in (0..len).step_by(run) {
            let high = cmp::min(low.saturating_add(run - 1), len - 1);
            sort_bounded(v, low, high);
        }

        // `width` is the length of the already sorted blocks. Each sweep merges block pairs
        // starting at 0, 2 * width, 4 * width and so on.
        let mut width = run;
        while width < len {
            trace!("merge sweep with width {width}");

            let step = width.saturating_mul(2);
            let mut low = 0;
            while low < len {
                let mid = low.saturating_add(width - 1);
                let high = cmp::min(low.saturating_add(step - 1), len - 1);
                // A trailing block without a right partner is already sorted.
                if mid < high {
                    merge_ranges(v, &mut scratch, low, mid, high);
                }
                low = low.saturating_add(step);
            }

            width = step;
        }

        Ok(())
    }
}
