use glam::DVec2;

use crate::error::ConfigError;

/// Tunable constants of the morphing blob.
///
/// [`Config::default`] reproduces the stock screen: six points on a
/// radius-120 ring around `(130, 130)`, each wobbling up to 20 units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Number of anchor points on the ring.
    pub point_count: usize,
    /// Radius of the rest polygon.
    pub radius: f64,
    /// Center of the rest polygon in canvas units.
    pub center: DVec2,
    /// Maximum displacement of a point from its origin along each axis.
    pub amplitude: f64,
    /// Amount every per-point noise offset advances per tick.
    /// The hue phase advances by half of this.
    pub noise_step: f64,
    /// Noise offsets are seeded uniformly from `[0, offset_seed_range)`.
    pub offset_seed_range: f64,
    /// Spline tension handed to [`crate::spline::fit`].
    pub tension: f64,
    /// Range the hue noise sample is mapped onto.
    pub hue_range: (f64, f64),
    /// Fixed x component of the gradient end vector.
    pub gradient_end_x: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            point_count: 6,
            radius: 120.0,
            center: DVec2::new(130.0, 130.0),
            amplitude: 20.0,
            noise_step: 0.005,
            offset_seed_range: 1000.0,
            tension: 1.0,
            hue_range: (0.0, 360.0),
            gradient_end_x: 256.0,
        }
    }
}

impl Config {
    /// Step applied to the hue phase on every tick.
    #[inline]
    pub fn hue_step(&self) -> f64 {
        self.noise_step / 2.0
    }

    /// Checks that the configuration describes a drawable ring.
    ///
    /// ### Returns
    /// - `Ok(())` if every field is usable.
    /// - `Err(ConfigError)` naming the first offending field otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("radius", self.radius),
            ("center.x", self.center.x),
            ("center.y", self.center.y),
            ("amplitude", self.amplitude),
            ("noise_step", self.noise_step),
            ("offset_seed_range", self.offset_seed_range),
            ("tension", self.tension),
            ("hue_range.0", self.hue_range.0),
            ("hue_range.1", self.hue_range.1),
            ("gradient_end_x", self.gradient_end_x),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        if self.point_count == 0 {
            return Err(ConfigError::NoPoints);
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if self.amplitude < 0.0 {
            return Err(ConfigError::NegativeAmplitude(self.amplitude));
        }
        if self.noise_step <= 0.0 {
            return Err(ConfigError::NonPositiveNoiseStep(self.noise_step));
        }
        if self.offset_seed_range <= 0.0 {
            return Err(ConfigError::EmptySeedRange(self.offset_seed_range));
        }
        Ok(())
    }
}
