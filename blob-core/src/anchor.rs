use std::f64::consts::TAU;

use glam::DVec2;
use log::debug;
use rand::Rng;

use crate::config::Config;

/// One vertex of the blob.
///
/// `origin` is the rest position on the regular polygon and never changes.
/// `pos` is the displaced position written every tick. `noise_offset` holds
/// the x and y phases into the noise field, advanced every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPoint {
    pub pos: DVec2,
    pub origin: DVec2,
    pub noise_offset: DVec2,
}

impl AnchorPoint {
    pub fn new(origin: DVec2, noise_offset: DVec2) -> Self {
        Self {
            pos: origin,
            origin,
            noise_offset,
        }
    }

    /// Current displacement from the rest position.
    #[inline]
    pub fn displacement(&self) -> DVec2 {
        self.pos - self.origin
    }
}

/// The ordered ring of anchor points. Order matters: the spline fitter
/// walks it as a closed loop.
#[derive(Clone, Debug, PartialEq)]
pub struct PointRing {
    pub points: Vec<AnchorPoint>,
}

impl PointRing {
    /// Rest positions of a ring described by `cfg`.
    ///
    /// Points sit at angle `i * TAU / n` for `i` in `1..=n`, so the first
    /// point is one step past the positive x axis.
    pub fn origins(cfg: &Config) -> Vec<DVec2> {
        let n = cfg.point_count;
        let angle_step = TAU / n as f64;

        (1..=n)
            .map(|i| {
                let theta = i as f64 * angle_step;
                cfg.center + DVec2::new(theta.cos(), theta.sin()) * cfg.radius
            })
            .collect()
    }

    /// Builds a ring from explicit origins and offsets, pairing them in order.
    pub fn from_parts(origins: Vec<DVec2>, offsets: Vec<DVec2>) -> Self {
        let points = origins
            .into_iter()
            .zip(offsets)
            .map(|(origin, offset)| AnchorPoint::new(origin, offset))
            .collect();

        Self { points }
    }

    /// Creates a ring whose noise offsets are drawn from `rng`, each
    /// component uniformly in `[0, cfg.offset_seed_range)`.
    pub fn with_rng(cfg: &Config, rng: &mut impl Rng) -> Self {
        let origins = Self::origins(cfg);
        let offsets = (0..origins.len())
            .map(|_| {
                let x = rng.random_range(0.0..cfg.offset_seed_range);
                let y = rng.random_range(0.0..cfg.offset_seed_range);
                DVec2::new(x, y)
            })
            .collect();

        let ring = Self::from_parts(origins, offsets);
        debug!("created point ring with {} points", ring.len());
        ring
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current displaced positions, in ring order.
    pub fn positions(&self) -> Vec<DVec2> {
        self.points.iter().map(|p| p.pos).collect()
    }
}

/// Creates the stock six-point ring with thread-local randomness.
pub fn create_point_ring() -> PointRing {
    PointRing::with_rng(&Config::default(), &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    const EPS: f64 = 1e-9;

    #[test]
    fn fresh_ring_rests_on_its_origins() {
        let ring = create_point_ring();
        assert_eq!(ring.len(), 6);

        for p in &ring.points {
            assert_eq!(p.pos, p.origin);
            assert_eq!(p.displacement(), DVec2::ZERO);
        }
    }

    #[test]
    fn origins_lie_on_circle_sixty_degrees_apart() {
        let cfg = Config::default();
        let origins = PointRing::origins(&cfg);

        for (k, o) in origins.iter().enumerate() {
            let rel = *o - cfg.center;
            assert!((rel.length() - 120.0).abs() < EPS, "radius off at {k}");

            // Starts at step index 1, not 0.
            let expected = (k as f64 + 1.0) * TAU / 6.0;
            let expected_dir = DVec2::new(expected.cos(), expected.sin());
            assert!((rel.normalize() - expected_dir).length() < EPS);
        }

        for k in 0..origins.len() {
            let a = origins[k] - cfg.center;
            let b = origins[(k + 1) % origins.len()] - cfg.center;
            let angle = a.angle_to(b);
            assert!((angle - TAU / 6.0).abs() < 1e-9, "step {k} is {angle}");
        }
    }

    #[test]
    fn last_point_sits_on_positive_x_axis() {
        let origins = PointRing::origins(&Config::default());
        let last = origins[5];
        assert!((last.x - 250.0).abs() < EPS);
        assert!((last.y - 130.0).abs() < EPS);
    }

    #[test]
    fn offsets_are_seeded_within_range() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let ring = PointRing::with_rng(&cfg, &mut rng);
            for p in &ring.points {
                assert!((0.0..1000.0).contains(&p.noise_offset.x));
                assert!((0.0..1000.0).contains(&p.noise_offset.y));
            }
        }
    }

    #[test]
    fn seeded_rings_are_reproducible() {
        let cfg = Config::default();
        let a = PointRing::with_rng(&cfg, &mut StdRng::seed_from_u64(5));
        let b = PointRing::with_rng(&cfg, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn from_parts_pairs_in_order() {
        let ring = PointRing::from_parts(
            vec![DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)],
            vec![DVec2::new(10.0, 20.0), DVec2::new(30.0, 40.0)],
        );
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.points[1].origin, DVec2::new(3.0, 4.0));
        assert_eq!(ring.points[1].noise_offset, DVec2::new(30.0, 40.0));
        assert_eq!(ring.positions(), vec![DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)]);
    }
}
