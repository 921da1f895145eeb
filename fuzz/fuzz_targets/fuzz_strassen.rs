#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::base_case::multiply_naive;
use strassen_core::{Matrix, Options, SequentialScheduler, Strassen};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the side length (1..=16), second the cutover.
    let n = 1usize << (data[0] % 5);
    let cutover = usize::from(data[1] % 8);
    let bytes = &data[2..];
    if bytes.len() < 2 * n * n * 4 {
        return;
    }

    let entry = |i: usize| {
        let at = i * 4;
        i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    };
    let a = Matrix::from_fn(n, n, |r, c| entry(r * n + c));
    let b = Matrix::from_fn(n, n, |r, c| entry(n * n + r * n + c));

    let opts = Options {
        cutover,
        ..Options::default()
    };
    let strassen = Strassen::new(&SequentialScheduler, opts);
    let product = strassen.multiply(&a, &b).unwrap();
    assert_eq!(product, multiply_naive(&a, &b).unwrap());
});
