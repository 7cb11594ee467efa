#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};

use widecalc_core::{Calculator, Options, TransformKind, WideInt};

/// Split the input in two and read each half as a little-endian signed magnitude.
fn operands(data: &[u8]) -> Option<(BigInt, BigInt)> {
    let (&flags, rest) = data.split_first()?;
    let (a, b) = rest.split_at(rest.len() / 2);
    let sign = |neg: bool| if neg { Sign::Minus } else { Sign::Plus };
    Some((
        BigInt::from_bytes_le(sign(flags & 1 != 0), a),
        BigInt::from_bytes_le(sign(flags & 2 != 0), b),
    ))
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }
    let Some((a, b)) = operands(data) else {
        return;
    };
    let expected = (&a * &b).to_string();
    let wa: WideInt = a.to_string().parse().unwrap();
    let wb: WideInt = b.to_string().parse().unwrap();

    for transform in [TransformKind::Complex, TransformKind::Modular] {
        let calc = Calculator::from_options(&Options {
            transform,
            parallel_threshold: 64,
            ..Default::default()
        });
        assert_eq!(calc.multiply(&wa, &wb).to_string(), expected, "{transform}");
    }
});
