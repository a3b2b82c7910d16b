//! Per-tick update phases of the morphing blob.
//!
//! One tick is:
//! 1. [`displace_phase`] — every anchor point samples the noise field at its
//!    offsets, is moved within `amplitude` of its origin, and then advances
//!    its offsets by the noise step.
//! 2. [`hue_phase`] — the hue phase advances by half a noise step and is
//!    sampled into the gradient end vector.
//!
//! The spline fit of the displaced ring lives in [`crate::spline`].

use glam::DVec2;

use crate::{anchor::PointRing, config::Config, math::map_range, sampler::Noise2D};

/// Displaces every point of the ring from a noise sample.
///
/// For each point, in ring order:
///
/// 1. Samples `nx = noise(off.x, off.x)` and `ny = noise(off.y, off.y)`.
///    Both coordinates of a sample are the same offset.
/// 2. Maps `nx` from `[-1, 1]` onto `[origin.x - amplitude, origin.x + amplitude]`
///    and `ny` likewise for y, storing the result in `pos`.
/// 3. Advances both offsets by `cfg.noise_step`, so the first tick samples
///    the seed offsets unchanged.
///
/// ### Parameters
/// - `ring` - The ring to update in place.
/// - `noise` - Field sampled once per axis per point.
/// - `cfg` - Provides `amplitude` and `noise_step`.
pub fn displace_phase(ring: &mut PointRing, noise: &impl Noise2D, cfg: &Config) {
    let a = cfg.amplitude;

    for p in ring.points.iter_mut() {
        let nx = noise.sample(p.noise_offset.x, p.noise_offset.x);
        let ny = noise.sample(p.noise_offset.y, p.noise_offset.y);

        p.pos = DVec2::new(
            map_range(nx, -1.0, 1.0, p.origin.x - a, p.origin.x + a),
            map_range(ny, -1.0, 1.0, p.origin.y - a, p.origin.y + a),
        );

        p.noise_offset += DVec2::splat(cfg.noise_step);
    }
}

/// Advances the hue phase and returns the new gradient end vector.
///
/// Unlike [`displace_phase`], the phase is advanced *before* sampling.
///
/// ### Parameters
/// - `phase` - Hue phase, advanced by [`Config::hue_step`].
/// - `noise` - Field sampled at `(phase, phase)`.
/// - `cfg` - Provides the hue range and the fixed x of the end vector.
///
/// ### Returns
/// `(cfg.gradient_end_x, hue)` where `hue` is the sample mapped from
/// `[-1, 1]` onto `cfg.hue_range`.
pub fn hue_phase(phase: &mut f64, noise: &impl Noise2D, cfg: &Config) -> DVec2 {
    *phase += cfg.hue_step();
    let n = noise.sample(*phase, *phase);
    let hue = map_range(n, -1.0, 1.0, cfg.hue_range.0, cfg.hue_range.1);
    DVec2::new(cfg.gradient_end_x, hue)
}
