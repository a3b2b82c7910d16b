//! 2D noise sources that drive point and hue displacement.
//!
//! The animator only needs `noise2D(a, b) -> [-1, 1]`, expressed here as the
//! [`Noise2D`] trait. [`SimplexNoise`] is the production source; any
//! `Fn(f64, f64) -> f64` closure also implements the trait, which is how
//! tests inject deterministic stubs.

use ::noise::{NoiseFn, Simplex};

/// A continuous 2D scalar field sampled once per point per tick.
pub trait Noise2D {
    /// Samples the field at `(x, y)`. Implementations should return values in
    /// `[-1, 1]`; the displacement bound of the ring relies on it.
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> Noise2D for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Standard 2D simplex noise, clamped to `[-1, 1]`.
///
/// Sampled along the diagonal `(t, t)` it swings to roughly ±0.89, so
/// points use most of their displacement range. The clamp only guards the
/// bound against floating point edge cases.
pub struct SimplexNoise {
    inner: Simplex,
    seed: u32,
}

impl SimplexNoise {
    /// Creates a noise field with the given permutation seed.
    pub fn new(seed: u32) -> Self {
        Self {
            inner: Simplex::new(seed),
            seed,
        }
    }

    /// Creates a noise field with a randomly drawn seed.
    pub fn from_rng(rng: &mut impl rand::Rng) -> Self {
        Self::new(rng.random())
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Clone for SimplexNoise {
    fn clone(&self) -> Self {
        Self::new(self.seed)
    }
}

impl std::fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Noise2D for SimplexNoise {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.inner.get([x, y]).clamp(-1.0, 1.0)
    }
}
