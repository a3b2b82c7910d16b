//! Linear gradient used to fill the blob.

use glam::DVec2;

/// An opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const ORANGE: Self = Self::new(255, 165, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const GREEN: Self = Self::new(0, 128, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear interpolation, rounded to the nearest value.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// Stops of the blob fill: orange, orange, white, green.
pub const BLOB_COLORS: [Rgb; 4] = [Rgb::ORANGE, Rgb::ORANGE, Rgb::WHITE, Rgb::GREEN];

/// A two-point linear gradient with sorted color stops in `[0, 1]`.
///
/// Positions are projected onto the `start -> end` axis; parameters outside
/// `[0, 1]` take the color of the nearest end stop.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: DVec2,
    pub end: DVec2,
    stops: Vec<(f64, Rgb)>,
}

impl LinearGradient {
    /// Creates a gradient with `colors` spread evenly over `[0, 1]`.
    ///
    /// ### Panics
    /// Panics if `colors` is empty.
    pub fn evenly_spaced(start: DVec2, end: DVec2, colors: &[Rgb]) -> Self {
        assert!(!colors.is_empty(), "gradient needs at least one color");
        let last = (colors.len() - 1).max(1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f64 / last, c))
            .collect();

        Self { start, end, stops }
    }

    /// The blob fill from `(0, 0)` to `end`.
    pub fn blob(end: DVec2) -> Self {
        Self::evenly_spaced(DVec2::ZERO, end, &BLOB_COLORS)
    }

    pub fn stops(&self) -> &[(f64, Rgb)] {
        &self.stops
    }

    /// Gradient parameter of `p`, unclamped. A zero-length axis maps
    /// everything to `0`.
    pub fn parameter(&self, p: DVec2) -> f64 {
        let axis = self.end - self.start;
        let len2 = axis.length_squared();
        if len2 == 0.0 {
            0.0
        } else {
            (p - self.start).dot(axis) / len2
        }
    }

    /// Color at parameter `t`, clamped to the end stops.
    pub fn color_at_parameter(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);

        let (first_t, first_c) = self.stops[0];
        if t <= first_t {
            return first_c;
        }

        for pair in self.stops.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t <= t1 {
                let span = t1 - t0;
                return if span <= 0.0 {
                    c1
                } else {
                    c0.lerp(c1, (t - t0) / span)
                };
            }
        }

        self.stops[self.stops.len() - 1].1
    }

    /// Color at canvas position `p`.
    #[inline]
    pub fn color_at(&self, p: DVec2) -> Rgb {
        self.color_at_parameter(self.parameter(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_stops_are_evenly_spaced() {
        let g = LinearGradient::blob(DVec2::new(256.0, 180.0));
        let ts: Vec<f64> = g.stops().iter().map(|s| s.0).collect();
        assert_eq!(ts.len(), 4);
        assert_eq!(ts[0], 0.0);
        assert!((ts[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!((ts[2] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(ts[3], 1.0);
    }

    #[test]
    fn stop_parameters_yield_stop_colors() {
        let g = LinearGradient::blob(DVec2::new(256.0, 0.0));
        assert_eq!(g.color_at_parameter(0.0), Rgb::ORANGE);
        assert_eq!(g.color_at_parameter(1.0 / 3.0), Rgb::ORANGE);
        assert_eq!(g.color_at_parameter(2.0 / 3.0), Rgb::WHITE);
        assert_eq!(g.color_at_parameter(1.0), Rgb::GREEN);
    }

    #[test]
    fn parameters_outside_unit_range_clamp() {
        let g = LinearGradient::blob(DVec2::new(256.0, 0.0));
        assert_eq!(g.color_at_parameter(-3.0), Rgb::ORANGE);
        assert_eq!(g.color_at_parameter(7.0), Rgb::GREEN);
    }

    #[test]
    fn interior_parameters_interpolate() {
        let g = LinearGradient::evenly_spaced(
            DVec2::ZERO,
            DVec2::new(1.0, 0.0),
            &[Rgb::WHITE, Rgb::GREEN],
        );
        assert_eq!(g.color_at_parameter(0.5), Rgb::new(128, 192, 128));

        let blob = LinearGradient::blob(DVec2::new(256.0, 0.0));
        assert_eq!(blob.color_at_parameter(0.2), Rgb::ORANGE);
    }

    #[test]
    fn positions_project_onto_axis() {
        let g = LinearGradient::blob(DVec2::new(200.0, 0.0));
        assert_eq!(g.parameter(DVec2::new(100.0, 55.0)), 0.5);
        assert_eq!(g.color_at(DVec2::new(200.0, -40.0)), Rgb::GREEN);
        assert_eq!(g.color_at(DVec2::new(-10.0, 0.0)), Rgb::ORANGE);
    }

    #[test]
    fn zero_length_axis_uses_first_stop() {
        let g = LinearGradient::blob(DVec2::ZERO);
        assert_eq!(g.parameter(DVec2::new(5.0, 5.0)), 0.0);
        assert_eq!(g.color_at(DVec2::new(5.0, 5.0)), Rgb::ORANGE);
    }
}
