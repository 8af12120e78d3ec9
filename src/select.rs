use crate::accessor::Elements;
use crate::config::SelectConfig;
use crate::partition::partition_around;
use crate::pivot::{naive_select_aux, select_pivot};

/// Moves the element of rank `i` within `[l, r]` to index `i` and returns `i`.
///
/// `i` is an absolute index into `v`. When this returns, every element in `[l, i)` is `leq`
/// `v[i]` and `v[i]` is `leq` every element in `(i, r]`. Runs in linear time for a constant time
/// `leq` and `config.group_size >= 5`.
pub(crate) fn select_aux<B, F>(
    v: &mut B,
    i: usize,
    mut l: usize,
    mut r: usize,
    leq: &mut F,
    config: &SelectConfig,
) -> usize
where
    B: Elements + ?Sized,
    F: FnMut(&B::Elem, &B::Elem) -> bool,
{
    debug_assert!(l <= i && i <= r && r < v.len());

    loop {
        if r - l + 1 < config.small_threshold {
            return naive_select_aux(v, i, l, r, leq);
        }

        let pivot_pos = select_pivot(v, l, r, leq, config);
        let (lo, hi) = partition_around(v, l, r, pivot_pos, leq, config.policy);

        if i < lo {
            // `l <= i < lo`, so `lo - 1` does not underflow.
            r = lo - 1;
        } else if i > hi {
            l = hi + 1;
        } else {
            // Everything in [lo, hi] is a copy of the pivot and already in place.
            return i;
        }
    }
}
