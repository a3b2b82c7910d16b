/// Linearly re-maps `n` from `[start1, end1]` onto `[start2, end2]`.
///
/// Values outside the source range extrapolate along the same line.
/// A degenerate source range (`start1 == end1`) yields a non-finite result.
#[inline]
pub fn map_range(n: f64, start1: f64, end1: f64, start2: f64, end2: f64) -> f64 {
    ((n - start1) / (end1 - start1)) * (end2 - start2) + start2
}
