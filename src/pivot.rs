use crate::accessor::Elements;
use crate::config::SelectConfig;

/// Sorts the inclusive range `[l, r]` by insertion, moving elements with adjacent swaps only.
///
/// Only meant for ranges bounded by a small constant, the cost is quadratic in `r - l`.
pub(crate) fn selection_sort_aux<B, F>(v: &mut B, l: usize, r: usize, leq: &mut F)
where
    B: Elements + ?Sized,
    F: FnMut(&B::Elem, &B::Elem) -> bool,
{
    debug_assert!(l <= r && r < v.len());

    for i in (l + 1)..=r {
        let mut j = i;
        while j > l && !leq(v.elem(j - 1), v.elem(j)) {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Orders `[l, r]` directly and returns `i`, which then holds the element of that rank.
pub(crate) fn naive_select_aux<B, F>(v: &mut B, i: usize, l: usize, r: usize, leq: &mut F) -> usize
where
    B: Elements + ?Sized,
    F: FnMut(&B::Elem, &B::Elem) -> bool,
{
    debug_assert!(l <= i && i <= r);

    selection_sort_aux(v, l, r, leq);
    i
}

/// Chooses a pivot for `[l, r]` with the median of medians and returns its index.
///
/// The range is cut into groups of `config.group_size`, the median of every group is moved to
/// the front of the range and the median of that prefix is selected recursively. With groups of
/// at least five and a total order, roughly 3/10 of the range is guaranteed to be on each side of
/// the returned pivot, which bounds both the selection and the sort drivers.
pub(crate) fn select_pivot<B, F>(
    v: &mut B,
    l: usize,
    r: usize,
    leq: &mut F,
    config: &SelectConfig,
) -> usize
where
    B: Elements + ?Sized,
    F: FnMut(&B::Elem, &B::Elem) -> bool,
{
    debug_assert!(l <= r && r < v.len());

    let group_size = config.group_size;
    let len = r - l + 1;

    if len < group_size {
        return naive_select_aux(v, l + (len - 1) / 2, l, r, leq);
    }

    let group_count = (len + group_size - 1) / group_size;

    for group in 0..group_count {
        let group_l = l + group * group_size;
        let group_r = (group_l + group_size - 1).min(r);
        let median = naive_select_aux(v, group_l + (group_r - group_l) / 2, group_l, group_r, leq);

        // `l + group <= group_l <= median`, so medians collected so far are never displaced.
        v.swap(l + group, median);
    }

    let medians_r = l + group_count - 1;
    crate::select::select_aux(v, l + (group_count - 1) / 2, l, medians_r, leq, config)
}
