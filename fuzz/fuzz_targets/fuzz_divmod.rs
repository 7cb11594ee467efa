#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};

use widecalc_core::{WideInt, WideIntError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 || data.len() > 96 {
        return;
    }
    let flags = data[0];
    let split = 1 + usize::from(data[1]) % (data.len() - 1);
    let (a, b) = data[1..].split_at(split - 1);
    let sign = |neg: bool| if neg { Sign::Minus } else { Sign::Plus };
    let a = BigInt::from_bytes_le(sign(flags & 1 != 0), a);
    let b = BigInt::from_bytes_le(sign(flags & 2 != 0), b);

    let wa: WideInt = a.to_string().parse().unwrap();
    let wb: WideInt = b.to_string().parse().unwrap();

    match wa.div_rem(&wb) {
        Ok((q, r)) => {
            // BigInt division also truncates toward zero.
            assert_eq!(q.to_string(), (&a / &b).to_string());
            assert_eq!(r.to_string(), (&a % &b).to_string());
        }
        Err(err) => {
            assert_eq!(err, WideIntError::DivisionByZero);
            assert_eq!(b, BigInt::from(0));
        }
    }
});
