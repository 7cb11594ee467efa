#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use widecalc_core::WideInt;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let parsed = s.parse::<WideInt>();
    // BigInt also accepts '_' separators; only compare on plain decimal input.
    if s.contains('_') {
        return;
    }
    match (parsed, s.parse::<BigInt>()) {
        (Ok(w), Ok(b)) => assert_eq!(w.to_string(), b.to_string(), "input {s:?}"),
        (Err(_), Err(_)) => {}
        (w, b) => panic!("parse disagreement on {s:?}: {w:?} vs {b:?}"),
    }
});
