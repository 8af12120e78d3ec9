#![no_main]

use libfuzzer_sys::fuzz_target;

use momselect_fuzz::{is_sorted_by, same_elements, u8_as_i32};

fuzz_target!(|data: &[u8]| {
    let original = u8_as_i32(data);
    let mut v = original.clone();

    momselect::quick_sort_select(&mut v);

    assert!(is_sorted_by(&v, |a, b| a <= b));
    assert!(same_elements(&original, &v));
});
