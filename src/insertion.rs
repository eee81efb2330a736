/// Sorts `v[low..=high]` in place with insertion sort.
///
/// Elements outside of `low..=high` are never touched. The sort is stable, an element only moves
/// past neighbours that are strictly greater than it.
///
/// Ranges with fewer than two elements and ranges reaching past the end of `v` are ignored.
pub fn sort_bounded<T>(v: &mut [T], low: usize, high: usize)
where
    T: Copy + Ord,
{
    if low >= high || high >= v.len() {
        return;
    }

    for i in (low + 1)..=high {
        let key = v[i];

        // `hole` is the slot that `key` will end up in.
        let mut hole = i;
        while hole > low && v[hole - 1] > key {
            v[hole] = v[hole - 1];
            hole -= 1;
        }
        v[hole] = key;
    }
}
