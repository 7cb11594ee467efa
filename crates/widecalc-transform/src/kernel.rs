//! Radix-2 decimation-in-time kernels.
//!
//! Both kernels apply the same butterfly with the same twiddle at every
//! position, so they produce identical values in every domain.

use crate::domain::TransformDomain;

#[inline]
fn butterfly<T: TransformDomain>(lo: &mut T, hi: &mut T, w: T) {
    let t = *hi * w;
    let u = *lo;
    *lo = u + t;
    *hi = u - t;
}

/// Combine two transformed halves in place.
///
/// `stride` maps the sub-transform's root powers onto the full-length
/// twiddle table: `w_n^j = w_N^(j * stride)`.
#[inline]
fn combine<T: TransformDomain>(lo: &mut [T], hi: &mut [T], twiddles: &[T], stride: usize) {
    for (j, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
        butterfly(a, b, twiddles[j * stride]);
    }
}

/// Recursive even/odd transform.
///
/// With `fork_threshold` set, sub-sequences of at least that length
/// transform their halves as a rayon task pair and join before combining;
/// shorter ones finish on the iterative kernel.
pub(crate) fn recursive<T: TransformDomain>(
    data: &mut [T],
    twiddles: &[T],
    stride: usize,
    fork_threshold: Option<usize>,
) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    if let Some(threshold) = fork_threshold {
        if n < threshold {
            iterative(data, twiddles, stride);
            return;
        }
    }

    deinterleave(data);
    let (lo, hi) = data.split_at_mut(n / 2);

    if fork_threshold.is_some() {
        rayon::join(
            || recursive(lo, twiddles, stride * 2, fork_threshold),
            || recursive(hi, twiddles, stride * 2, fork_threshold),
        );
    } else {
        recursive(lo, twiddles, stride * 2, None);
        recursive(hi, twiddles, stride * 2, None);
    }

    combine(lo, hi, twiddles, stride);
}

/// Iterative transform: bit-reversal permutation, then bottom-up butterflies.
///
/// `base_stride` is the ratio between the twiddle table's length and
/// `data.len()`, for running on a sub-sequence of a larger transform.
pub(crate) fn iterative<T: TransformDomain>(data: &mut [T], twiddles: &[T], base_stride: usize) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    bit_reverse_permutation(data);

    let mut size = 2;
    while size <= n {
        let stride = base_stride * (n / size);
        for block in data.chunks_exact_mut(size) {
            let (lo, hi) = block.split_at_mut(size / 2);
            combine(lo, hi, twiddles, stride);
        }
        size *= 2;
    }
}

/// Move even-indexed elements to the front half and odd-indexed ones to the back.
fn deinterleave<T: Copy>(data: &mut [T]) {
    let half = data.len() / 2;
    let odd: Vec<T> = data.iter().copied().skip(1).step_by(2).collect();
    for i in 0..half {
        data[i] = data[2 * i];
    }
    data[half..].copy_from_slice(&odd);
}

fn bit_reverse_permutation<T>(data: &mut [T]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}
