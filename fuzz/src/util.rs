/// Reads `data` as little endian i32 values, trailing bytes that don't fill a value are dropped.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

pub fn is_sorted_by<T>(v: &[T], mut leq: impl FnMut(&T, &T) -> bool) -> bool {
    v.windows(2).all(|w| leq(&w[0], &w[1]))
}

pub fn same_elements<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();

    a == b
}
