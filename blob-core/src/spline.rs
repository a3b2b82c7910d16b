//! Smooth curves through an ordered list of points.
//!
//! Each segment `p1 -> p2` is a cubic Bézier whose control points come from
//! the Catmull-Rom tangents of its neighbours `p0` and `p3`:
//!
//! ```text
//! c1 = p1 + (p2 - p0) / 6 * tension
//! c2 = p2 - (p3 - p1) / 6 * tension
//! ```

use glam::DVec2;
use kurbo::{BezPath, Point};

#[inline]
fn to_point(v: DVec2) -> Point {
    Point::new(v.x, v.y)
}

fn control_points(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, tension: f64) -> (Point, Point) {
    let c1 = p1 + (p2 - p0) / 6.0 * tension;
    let c2 = p2 - (p3 - p1) / 6.0 * tension;
    (to_point(c1), to_point(c2))
}

/// Fits a spline through `points`.
///
/// - `closed == true`: the path starts at the last point and emits one
///   cubic per point, wrapping around so every segment sees real
///   neighbours. The result ends where it started and is closed.
/// - `closed == false`: the path starts at the first point and emits
///   `n - 1` cubics; the missing outer neighbours are the end points
///   themselves.
///
/// Fewer than two points produce an empty path.
pub fn fit(points: &[DVec2], tension: f64, closed: bool) -> BezPath {
    let n = points.len();
    let mut path = BezPath::new();
    if n < 2 {
        return path;
    }

    if closed {
        let at = |k: usize| points[k % n];

        path.move_to(to_point(points[n - 1]));
        // Segment j runs from points[j - 1] to points[j], indices cyclic.
        for j in 0..n {
            let p0 = at(j + n - 2);
            let p1 = at(j + n - 1);
            let p2 = at(j);
            let p3 = at(j + 1);
            let (c1, c2) = control_points(p0, p1, p2, p3, tension);
            path.curve_to(c1, c2, to_point(p2));
        }
        path.close_path();
    } else {
        path.move_to(to_point(points[0]));
        for j in 0..n - 1 {
            let p0 = if j == 0 { points[0] } else { points[j - 1] };
            let p1 = points[j];
            let p2 = points[j + 1];
            let p3 = if j + 2 < n { points[j + 2] } else { p2 };
            let (c1, c2) = control_points(p0, p1, p2, p3, tension);
            path.curve_to(c1, c2, to_point(p2));
        }
    }

    path
}
