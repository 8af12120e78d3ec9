/// A sort that orders elements by a `leq` ("less than or equal") predicate.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], leq: F)
    where
        F: FnMut(&T, &T) -> bool;
}

/// A selection algorithm that moves the element of rank `index` to `index`.
///
/// Implementations return the index the selected element ended up at.
pub trait Select {
    fn name() -> String;

    fn select_nth<T>(arr: &mut [T], index: usize) -> usize
    where
        T: Ord;

    fn select_nth_by<T, F>(arr: &mut [T], index: usize, leq: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

/// Turns a `leq` predicate into the comparator the standard library expects.
pub fn ordering_from_leq<T>(
    mut leq: impl FnMut(&T, &T) -> bool,
) -> impl FnMut(&T, &T) -> std::cmp::Ordering {
    move |a: &T, b: &T| match (leq(a, b), leq(b, a)) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Less,
        _ => std::cmp::Ordering::Greater,
    }
}

#[doc(hidden)]
pub use paste;

pub mod patterns;
