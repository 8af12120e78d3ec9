#![no_main]

use libfuzzer_sys::fuzz_target;

use momselect_fuzz::{is_sorted_by, same_elements};

fuzz_target!(|data: &[u8]| {
    // The first byte picks the element width, the rest are the elements.
    let Some((&size_byte, rest)) = data.split_first() else {
        return;
    };

    let elem_size = (size_byte % 16) as usize + 1;
    let len = rest.len() / elem_size;

    let original = rest
        .chunks_exact(elem_size)
        .map(|c| c.to_vec())
        .collect::<Vec<_>>();

    let mut bytes = rest.to_vec();
    momselect::quick_sort_select_raw(&mut bytes, len, elem_size, |a, b| a <= b).unwrap();

    let sorted = bytes
        .chunks_exact(elem_size)
        .map(|c| c.to_vec())
        .collect::<Vec<_>>();
    assert!(is_sorted_by(&sorted, |a, b| a <= b));
    assert!(same_elements(&original, &sorted));
    assert_eq!(bytes[len * elem_size..], rest[len * elem_size..]);

    if len > 0 {
        let mut bytes = rest.to_vec();
        let mid = momselect::select_median_raw(&mut bytes, len, elem_size, |a, b| a <= b).unwrap();
        assert_eq!(mid, len / 2);
        assert_eq!(&bytes[mid * elem_size..(mid + 1) * elem_size], &sorted[mid][..]);
    }
});
