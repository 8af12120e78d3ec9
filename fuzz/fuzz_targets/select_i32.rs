#![no_main]

use libfuzzer_sys::fuzz_target;

use momselect_fuzz::u8_as_i32;

fuzz_target!(|data: &[u8]| {
    // The first byte picks the rank.
    let Some((&rank_byte, rest)) = data.split_first() else {
        return;
    };

    let mut v = u8_as_i32(rest);
    if v.is_empty() {
        return;
    }

    let index = rank_byte as usize % v.len();
    let mut sorted = v.clone();
    sorted.sort_unstable();

    let ret = momselect::select_nth(&mut v, index).unwrap();

    assert_eq!(ret, index);
    assert_eq!(v[index], sorted[index]);
    assert!(v[..index].iter().all(|x| *x <= v[index]));
    assert!(v[index + 1..].iter().all(|x| *x >= v[index]));
});
