use glam::DVec2;
use kurbo::BezPath;
use log::{debug, trace};

use crate::{
    anchor::PointRing,
    config::Config,
    error::ConfigError,
    gradient::LinearGradient,
    phases,
    sampler::{Noise2D, SimplexNoise},
    spline,
};

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Closed spline through the displaced ring.
    pub path: BezPath,
    /// Moving end point of the fill gradient.
    pub gradient_end: DVec2,
    /// Number of ticks taken so far, including this one.
    pub tick: u64,
}

impl Frame {
    pub fn gradient(&self) -> LinearGradient {
        LinearGradient::blob(self.gradient_end)
    }
}

/// Owns the point ring and hue phase of one mounted blob and advances
/// them once per clock tick.
#[derive(Debug)]
pub struct ShapeAnimator<N = SimplexNoise> {
    ring: PointRing,
    hue_phase: f64,
    noise: N,
    cfg: Config,
    ticks: u64,
}

impl ShapeAnimator<SimplexNoise> {
    /// Creates an animator with a randomly seeded ring and noise field.
    ///
    /// The config is validated before any randomness is drawn.
    pub fn new(cfg: Config) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let mut rng = rand::rng();
        let ring = PointRing::with_rng(&cfg, &mut rng);
        let noise = SimplexNoise::from_rng(&mut rng);
        debug!("animator mounted with noise seed {}", noise.seed());
        Ok(Self::assemble(cfg, ring, noise))
    }
}

impl<N: Noise2D> ShapeAnimator<N> {
    /// Creates an animator from an explicit ring and noise source.
    pub fn with_parts(cfg: Config, ring: PointRing, noise: N) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::assemble(cfg, ring, noise))
    }

    fn assemble(cfg: Config, ring: PointRing, noise: N) -> Self {
        Self {
            ring,
            hue_phase: 0.0,
            noise,
            cfg,
            ticks: 0,
        }
    }

    /// Advances one tick: displaces the ring, fits the closed spline, and
    /// moves the gradient end point.
    pub fn tick(&mut self) -> Frame {
        phases::displace_phase(&mut self.ring, &self.noise, &self.cfg);
        let path = spline::fit(&self.ring.positions(), self.cfg.tension, true);
        let gradient_end = phases::hue_phase(&mut self.hue_phase, &self.noise, &self.cfg);
        self.ticks += 1;

        trace!(
            "tick {}: gradient end = ({:.2}, {:.2})",
            self.ticks, gradient_end.x, gradient_end.y
        );

        Frame {
            path,
            gradient_end,
            tick: self.ticks,
        }
    }

    pub fn ring(&self) -> &PointRing {
        &self.ring
    }

    pub fn hue_phase(&self) -> f64 {
        self.hue_phase
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
