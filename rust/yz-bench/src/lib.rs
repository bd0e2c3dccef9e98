//! Shared inputs for the scoring benchmarks.

/// Deterministic dice hands in input order (not sorted).
///
/// Simple xorshift64, no rand dependency.
pub fn gen_dice_samples(n: usize) -> Vec<[i32; 5]> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut d = [0i32; 5];
        for slot in &mut d {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *slot = (x % 6) as i32 + 1;
        }
        out.push(d);
    }
    out
}
