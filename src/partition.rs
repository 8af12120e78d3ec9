use crate::accessor::Elements;
use crate::config::PartitionPolicy;

/// Lomuto partition of the inclusive range `[l, r]` around the element at `p`.
///
/// On return every element in `[l, m)` is `leq` the pivot, the pivot sits at `m` and every
/// element in `(m, r]` is not `leq` the pivot. Returns `m`. Elements equal to the pivot all end
/// up on the left.
///
/// If `leq` does not implement a total order the split is unspecified, but the range is still a
/// permutation of its previous contents.
pub(crate) fn deterministic_pivot_partition<B, F>(
    v: &mut B,
    l: usize,
    r: usize,
    p: usize,
    leq: &mut F,
) -> usize
where
    B: Elements + ?Sized,
    F: FnMut(&B::Elem, &B::Elem) -> bool,
{
    debug_assert!(l <= p && p <= r && r < v.len());

    // Park the pivot at the start, it stays there while the rest of the range is scanned.
    v.swap(l, p);

    let mut store = l;
    for i in (l + 1)..=r {
        if leq(v.elem(i), v.elem(l)) {
            store += 1;
            v.swap(store, i);
        }
    }

    v.swap(l, store);

    store
}

/// Dutch national flag partition of the inclusive range `[l, r]` around the element at `p`.
///
/// Returns `(lo, hi)` such that `[l, lo)` holds elements strictly less than the pivot,
/// `[lo, hi]` elements equal to it and `(hi, r]` elements strictly greater. An element `x` is
/// equal to the pivot if `leq(x, pivot) && leq(pivot, x)`.
pub(crate) fn three_way_partition<B, F>(
    v: &mut B,
    l: usize,
    r: usize,
    p: usize,
    leq: &mut F,
) -> (usize, usize)
where
    B: Elements + ?Sized,
    F: FnMut(&B::Elem, &B::Elem) -> bool,
{
    debug_assert!(l <= p && p <= r && r < v.len());

    v.swap(l, p);

    // Invariants: [l, lt) < pivot, [lt, i) == pivot, (gt, r] > pivot. The equal zone is never
    // empty, so `v[lt]` always holds a copy of the pivot to compare against.
    let mut lt = l;
    let mut i = l + 1;
    let mut gt = r;

    while i <= gt {
        if !leq(v.elem(lt), v.elem(i)) {
            v.swap(lt, i);
            lt += 1;
            i += 1;
        } else if !leq(v.elem(i), v.elem(lt)) {
            v.swap(i, gt);
            // `gt >= i >= 1`, no underflow.
            gt -= 1;
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

/// Partitions `[l, r]` around the element at `p` as dictated by `policy`.
///
/// Returns the inclusive bounds of a zone that holds the pivot and is already in its final
/// sorted position. Everything left of it is `leq` the pivot, everything right of it is not.
/// For a two-way split the zone is the pivot alone.
pub(crate) fn partition_around<B, F>(
    v: &mut B,
    l: usize,
    r: usize,
    p: usize,
    leq: &mut F,
    policy: PartitionPolicy,
) -> (usize, usize)
where
    B: Elements + ?Sized,
    F: FnMut(&B::Elem, &B::Elem) -> bool,
{
    match policy {
        PartitionPolicy::TwoWay => {
            let m = deterministic_pivot_partition(v, l, r, p, leq);
            (m, m)
        }
        PartitionPolicy::ThreeWay => three_way_partition(v, l, r, p, leq),
        PartitionPolicy::Adaptive { tie_percent } => {
            let m = deterministic_pivot_partition(v, l, r, p, leq);
            let len = r - l + 1;

            if (r - m) * 100 >= len * (tie_percent as usize) {
                return (m, m);
            }

            // Nothing in [l, m] is greater than the pivot, so the three-way pass only has to
            // separate the copies of the pivot from the strictly smaller elements.
            log::trace!("Three-way fallback on [{l}, {m}] of [{l}, {r}]");
            let (lo, _) = three_way_partition(v, l, m, m, leq);
            (lo, m)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leq(a: &i32, b: &i32) -> bool {
        a <= b
    }

    fn assert_two_way(v: &[i32], l: usize, r: usize, m: usize) {
        for i in l..m {
            assert!(v[i] <= v[m], "{v:?} m: {m}");
        }
        for i in (m + 1)..=r {
            assert!(v[i] > v[m], "{v:?} m: {m}");
        }
    }

    fn assert_three_way(v: &[i32], l: usize, r: usize, lo: usize, hi: usize, pivot: i32) {
        assert!(lo <= hi);
        for i in l..lo {
            assert!(v[i] < pivot, "{v:?} lo: {lo} hi: {hi}");
        }
        for i in lo..=hi {
            assert_eq!(v[i], pivot, "{v:?} lo: {lo} hi: {hi}");
        }
        for i in (hi + 1)..=r {
            assert!(v[i] > pivot, "{v:?} lo: {lo} hi: {hi}");
        }
    }

    fn sorted(v: &[i32]) -> Vec<i32> {
        let mut v = v.to_vec();
        v.sort();
        v
    }

    #[test]
    fn two_way_single() {
        let mut v = [42];
        let m = deterministic_pivot_partition(&mut v[..], 0, 0, 0, &mut leq);
        assert_eq!(m, 0);
        assert_eq!(v, [42]);
    }

    #[test]
    fn two_way_reverse_sorted() {
        let mut v = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let m = deterministic_pivot_partition(&mut v[..], 0, 9, 4, &mut leq);
        assert_eq!(v[m], 6);
        assert_eq!(m, 5);
        assert_two_way(&v, 0, 9, m);
    }

    #[test]
    fn two_way_all_equal() {
        let mut v = [5, 5, 5, 5, 5];
        let m = deterministic_pivot_partition(&mut v[..], 0, 4, 2, &mut leq);
        // Copies of the pivot go left.
        assert_eq!(m, 4);
        assert_eq!(v, [5, 5, 5, 5, 5]);
    }

    #[test]
    fn two_way_subrange() {
        let mut v = [100, 5, 3, 8, 2, 7, 100];
        let m = deterministic_pivot_partition(&mut v[..], 1, 5, 3, &mut leq);

        assert_eq!(v[0], 100);
        assert_eq!(v[6], 100);
        assert_eq!(v[m], 8);
        assert_two_way(&v, 1, 5, m);
        assert_eq!(sorted(&v[1..=5]), [2, 3, 5, 7, 8]);
    }

    #[test]
    fn three_way_duplicates() {
        let mut v = [3, 1, 3, 4, 3, 0, 3, 9, 3];
        let (lo, hi) = three_way_partition(&mut v[..], 0, 8, 4, &mut leq);
        assert_eq!((lo, hi), (2, 6));
        assert_three_way(&v, 0, 8, lo, hi, 3);
        assert_eq!(sorted(&v), [0, 1, 3, 3, 3, 3, 3, 4, 9]);
    }

    #[test]
    fn three_way_pivot_extremes() {
        let mut v = [7, 2, 9, 2, 5];
        let (lo, hi) = three_way_partition(&mut v[..], 0, 4, 1, &mut leq);
        assert_eq!((lo, hi), (0, 1));
        assert_three_way(&v, 0, 4, lo, hi, 2);

        let mut v = [7, 2, 9, 2, 5];
        let (lo, hi) = three_way_partition(&mut v[..], 0, 4, 2, &mut leq);
        assert_eq!((lo, hi), (4, 4));
        assert_three_way(&v, 0, 4, lo, hi, 9);
    }

    #[test]
    fn three_way_all_equal() {
        let mut v = [1; 16];
        let (lo, hi) = three_way_partition(&mut v[..], 3, 12, 7, &mut leq);
        assert_eq!((lo, hi), (3, 12));
    }

    #[test]
    fn adaptive_falls_back_on_ties() {
        let mut v = [4, 4, 1, 4, 4, 9, 4, 4, 0, 4];
        let policy = PartitionPolicy::Adaptive { tie_percent: 20 };
        let (lo, hi) = partition_around(&mut v[..], 0, 9, 0, &mut leq, policy);

        // One element greater than the pivot is below 20% of ten.
        assert_eq!((lo, hi), (2, 8));
        assert_three_way(&v, 0, 9, lo, hi, 4);
    }

    #[test]
    fn adaptive_keeps_balanced_split() {
        let mut v = [6, 1, 8, 3, 5, 9, 2, 7, 4, 0];
        let policy = PartitionPolicy::Adaptive { tie_percent: 20 };
        let (lo, hi) = partition_around(&mut v[..], 0, 9, 4, &mut leq, policy);

        assert_eq!((lo, hi), (5, 5));
        assert_two_way(&v, 0, 9, lo);
    }

    #[test]
    fn policies_agree_on_zone_contents() {
        for policy in [
            PartitionPolicy::TwoWay,
            PartitionPolicy::ThreeWay,
            PartitionPolicy::Adaptive { tie_percent: 20 },
            PartitionPolicy::Adaptive { tie_percent: 100 },
        ] {
            let mut v = [5, 3, 8, 1, 9, 2, 5, 5];
            let (lo, hi) = partition_around(&mut v[..], 0, 7, 0, &mut leq, policy);

            assert!(lo <= hi && hi <= 7);
            for i in lo..=hi {
                assert_eq!(v[i], 5, "{policy}");
            }
            for i in 0..lo {
                assert!(v[i] <= 5, "{policy}");
            }
            for i in (hi + 1)..8 {
                assert!(v[i] > 5, "{policy}");
            }
            assert_eq!(sorted(&v), [1, 2, 3, 5, 5, 5, 8, 9]);
        }
    }
}
