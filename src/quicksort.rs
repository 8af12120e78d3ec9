use crate::accessor::Elements;
use crate::config::SelectConfig;
use crate::partition::partition_around;
use crate::pivot::{select_pivot, selection_sort_aux};

/// Sorts the inclusive range `[l, r]` of `v` according to `leq`.
///
/// Every pivot is the median of medians of its range, so with a total order each partition keeps
/// a constant fraction on both sides and the sort is *O*(*n* \* log(*n*)) worst-case. Copies of
/// the pivot gathered by a three-way split are final and excluded from further work.
pub(crate) fn quick_sort_select_aux<B, F>(
    v: &mut B,
    mut l: usize,
    mut r: usize,
    leq: &mut F,
    config: &SelectConfig,
) where
    B: Elements + ?Sized,
    F: FnMut(&B::Elem, &B::Elem) -> bool,
{
    loop {
        if l >= r {
            return;
        }

        if r - l + 1 < config.small_threshold {
            selection_sort_aux(v, l, r, leq);
            return;
        }

        let pivot_pos = select_pivot(v, l, r, leq, config);
        let (lo, hi) = partition_around(v, l, r, pivot_pos, leq, config.policy);

        // Recurse into the shorter side and loop on the longer one. A `leq` that is not a total
        // order can defeat the pivot guarantee, this keeps the stack depth logarithmic anyway.
        let left_len = lo - l;
        let right_len = r - hi;

        if left_len < right_len {
            if left_len > 1 {
                quick_sort_select_aux(v, l, lo - 1, leq, config);
            }
            l = hi + 1;
        } else {
            if right_len > 1 {
                quick_sort_select_aux(v, hi + 1, r, leq, config);
            }
            if lo == l {
                return;
            }
            r = lo - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartitionPolicy;

    #[test]
    fn sorts_subrange_only() {
        let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let config = SelectConfig::default();
        quick_sort_select_aux(&mut v[..], 2, 7, &mut |a: &i32, b: &i32| a <= b, &config);
        assert_eq!(v, [9, 8, 2, 3, 4, 5, 6, 7, 1, 0]);
    }

    #[test]
    fn tiny_thresholds() {
        let input = (0..128).map(|x| (x * 29) % 17).collect::<Vec<i32>>();
        let mut expected = input.clone();
        expected.sort();

        for policy in [PartitionPolicy::TwoWay, PartitionPolicy::ThreeWay] {
            let config = SelectConfig::default()
                .with_group_size(3)
                .with_small_threshold(1)
                .with_policy(policy);

            let mut v = input.clone();
            quick_sort_select_aux(&mut v[..], 0, 127, &mut |a: &i32, b: &i32| a <= b, &config);
            assert_eq!(v, expected, "{policy}");
        }
    }

    #[test]
    fn always_true_leq_terminates() {
        let mut v = (0..1000).collect::<Vec<i32>>();
        let config = SelectConfig::default();
        quick_sort_select_aux(&mut v[..], 0, 999, &mut |_: &i32, _: &i32| true, &config);

        v.sort();
        assert_eq!(v, (0..1000).collect::<Vec<i32>>());
    }
}
