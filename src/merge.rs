/// Merges the sorted ranges `v[low..=mid]` and `v[mid + 1..=high]` so that `v[low..=high]` ends
/// up sorted.
///
/// The merged output is first written to `scratch[low..=high]` and then copied back, so `scratch`
/// must be at least `high + 1` elements long. Nothing outside of `low..=high` is read or written
/// in either slice.
///
/// Equal keys are consumed in pairs: when the heads of both ranges compare equal, the left element
/// is emitted followed directly by the right one and both ranges advance. With a single equal key
/// on either side this matches a stable merge. With more, equal keys from the two ranges are
/// interleaved, e.g. left `[a, b]` and right `[c, d]` with equal keys come out as `[a, c, b, d]`.
///
/// Bounds that do not describe two non-empty adjacent ranges inside both slices are ignored.
pub fn merge_ranges<T>(v: &mut [T], scratch: &mut [T], low: usize, mid: usize, high: usize)
where
    T: Copy + Ord,
{
    if low > mid || mid >= high || high >= v.len() || high >= scratch.len() {
        return;
    }

    let mut left = low;
    let mut right = mid + 1;
    let mut out = low;

    while left <= mid && right <= high {
        let (l, r) = (v[left], v[right]);
        if l < r {
            scratch[out] = l;
            left += 1;
            out += 1;
        } else if l == r {
            scratch[out] = l;
            scratch[out + 1] = r;
            left += 1;
            right += 1;
            out += 2;
        } else {
            scratch[out] = r;
            right += 1;
            out += 1;
        }
    }

    // At most one of the two sides still has elements left.
    let rest = if left <= mid {
        left..=mid
    } else {
        right..=high
    };
    let rest_len = rest.end() + 1 - rest.start();
    scratch[out..out + rest_len].copy_from_slice(&v[rest]);

    v[low..=high].copy_from_slice(&scratch[low..=high]);
}
