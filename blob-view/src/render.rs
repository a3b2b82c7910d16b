//! Turns a blob [`Frame`] into egui shapes.
//!
//! The closed spline is flattened into a polygon with `kurbo`, then filled
//! as a triangle fan around the ring center. Each fan spoke is split into
//! [`FAN_RINGS`] concentric rings and every vertex is colored by evaluating
//! the frame's linear gradient at its canvas position. Rings sit well under
//! the stop spacing apart, so per-vertex interpolation keeps the white band.

use blob_core::{
    Frame,
    gradient::{LinearGradient, Rgb},
};
use glam::DVec2;
use kurbo::{BezPath, PathEl};

/// Side length of the square drawing surface, in canvas units.
pub const CANVAS_SIZE: f32 = 275.0;

/// Maximum distance between the flattened outline and the true curve.
pub const FLATTEN_TOLERANCE: f64 = 0.25;

/// Concentric rings between the pivot and the outline. On the stock ring
/// that is one ring per 7.5 units, against a stop spacing of at least 85.
pub const FAN_RINGS: u32 = 16;

pub fn to_color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Maps a canvas-space position onto the screen. Canvas units are points,
/// with y growing downwards as on the screen.
pub fn canvas_to_screen(p: DVec2, canvas_min: egui::Pos2) -> egui::Pos2 {
    egui::pos2(canvas_min.x + p.x as f32, canvas_min.y + p.y as f32)
}

/// Flattens the first subpath of `path` into a polygon.
///
/// The closing vertex is dropped when it duplicates the first one.
pub fn flatten_outline(path: &BezPath, tolerance: f64) -> Vec<DVec2> {
    let mut outline = Vec::new();
    let mut started = false;
    let mut done = false;

    kurbo::flatten(path.elements().iter().copied(), tolerance, |el| {
        if done {
            return;
        }
        match el {
            PathEl::MoveTo(p) => {
                if started {
                    done = true;
                } else {
                    started = true;
                    outline.push(DVec2::new(p.x, p.y));
                }
            }
            PathEl::LineTo(p) => outline.push(DVec2::new(p.x, p.y)),
            PathEl::ClosePath => done = true,
            _ => {}
        }
    });

    if outline.len() > 1 && outline.first() == outline.last() {
        outline.pop();
    }
    outline
}

/// Builds a gradient-filled triangle fan of `outline` around `pivot`.
///
/// Vertex `0` is the pivot; ring `k` (`1..=FAN_RINGS`) holds `outline.len()`
/// vertices at fraction `k / FAN_RINGS` of the way to the outline, the last
/// ring being the outline itself.
pub fn fan_mesh(
    outline: &[DVec2],
    pivot: DVec2,
    gradient: &LinearGradient,
    canvas_min: egui::Pos2,
) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    if outline.len() < 3 {
        return mesh;
    }

    let mut push = |p: DVec2| {
        mesh.colored_vertex(
            canvas_to_screen(p, canvas_min),
            to_color32(gradient.color_at(p)),
        );
    };

    push(pivot);
    for k in 1..=FAN_RINGS {
        let f = k as f64 / FAN_RINGS as f64;
        for &p in outline {
            push(if k == FAN_RINGS { p } else { pivot + (p - pivot) * f });
        }
    }

    let n = outline.len() as u32;
    let at = |k: u32, i: u32| 1 + (k - 1) * n + i % n;

    for i in 0..n {
        mesh.add_triangle(0, at(1, i), at(1, i + 1));
        for k in 2..=FAN_RINGS {
            mesh.add_triangle(at(k - 1, i), at(k, i), at(k, i + 1));
            mesh.add_triangle(at(k - 1, i), at(k, i + 1), at(k - 1, i + 1));
        }
    }
    mesh
}

/// Full blob shape for `frame`, drawn on a canvas whose top-left corner is
/// `canvas_min`.
pub fn blob_shape(frame: &Frame, pivot: DVec2, canvas_min: egui::Pos2) -> egui::Shape {
    let outline = flatten_outline(&frame.path, FLATTEN_TOLERANCE);
    egui::Shape::mesh(fan_mesh(&outline, pivot, &frame.gradient(), canvas_min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blob_core::spline;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn flattening_a_polygon_keeps_its_corners() {
        // Zero tension gives straight edges.
        let path = spline::fit(&square(), 0.0, true);
        let outline = flatten_outline(&path, FLATTEN_TOLERANCE);

        // Starts at the last point, then walks the ring in order.
        for corner in square() {
            assert!(
                outline.iter().any(|p| (*p - corner).length() < 1e-9),
                "corner {corner:?} missing from {outline:?}"
            );
        }
        assert_ne!(outline.first(), outline.last());
    }

    #[test]
    fn curved_outline_stays_near_control_points() {
        let path = spline::fit(&square(), 1.0, true);
        let outline = flatten_outline(&path, FLATTEN_TOLERANCE);
        assert!(outline.len() > 4);

        let center = DVec2::new(5.0, 5.0);
        for p in &outline {
            assert!((*p - center).length() < 10.0);
        }
    }

    fn hexagon() -> Vec<DVec2> {
        (0..6)
            .map(|i| {
                let t = i as f64 * std::f64::consts::TAU / 6.0;
                DVec2::new(130.0 + t.cos() * 120.0, 130.0 + t.sin() * 120.0)
            })
            .collect()
    }

    #[test]
    fn fan_mesh_splits_each_spoke_into_rings() {
        let outline = square();
        let gradient = LinearGradient::blob(DVec2::new(10.0, 0.0));
        let mesh = fan_mesh(&outline, DVec2::new(5.0, 5.0), &gradient, egui::pos2(100.0, 50.0));

        let n = outline.len();
        let rings = FAN_RINGS as usize;
        assert_eq!(mesh.vertices.len(), 1 + rings * n);
        assert_eq!(mesh.indices.len(), 3 * n + 6 * n * (rings - 1));
        assert_eq!(mesh.vertices[0].pos, egui::pos2(105.0, 55.0));

        // The outer ring is the outline: left edge is the gradient start,
        // right edge the end.
        let outer = 1 + (rings - 1) * n;
        assert_eq!(mesh.vertices[outer].pos, egui::pos2(100.0, 50.0));
        assert_eq!(mesh.vertices[outer].color, to_color32(Rgb::ORANGE));
        assert_eq!(mesh.vertices[outer + 1].color, to_color32(Rgb::GREEN));
        assert!(mesh.is_valid());
    }

    #[test]
    fn interior_vertex_keeps_white_band() {
        let outline = hexagon();
        let pivot = DVec2::new(130.0, 130.0);
        let gradient = LinearGradient::blob(DVec2::new(256.0, 0.0));
        let mesh = fan_mesh(&outline, pivot, &gradient, egui::Pos2::ZERO);

        // Halfway along the spoke towards (250, 130).
        let mid = 1 + (FAN_RINGS as usize / 2 - 1) * outline.len();
        let v = mesh.vertices[mid];
        assert_eq!(v.pos, egui::pos2(190.0, 130.0));

        let expected = to_color32(gradient.color_at(DVec2::new(190.0, 130.0)));
        assert_eq!(v.color, expected);
        // Between the white and green stops, much closer to white.
        assert!(v.color.r() > 180 && v.color.g() > 200 && v.color.b() > 180);
    }

    #[test]
    fn every_vertex_matches_gradient_at_its_position() {
        let outline = hexagon();
        let gradient = LinearGradient::blob(DVec2::new(256.0, 200.0));
        let mesh = fan_mesh(&outline, DVec2::new(130.0, 130.0), &gradient, egui::Pos2::ZERO);

        for v in &mesh.vertices {
            let p = DVec2::new(v.pos.x as f64, v.pos.y as f64);
            let want = to_color32(gradient.color_at(p));
            let close = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 1;
            assert!(
                close(v.color.r(), want.r())
                    && close(v.color.g(), want.g())
                    && close(v.color.b(), want.b()),
                "vertex at {p:?} is {:?}, gradient gives {want:?}",
                v.color
            );
        }
    }

    #[test]
    fn degenerate_outline_gives_empty_mesh() {
        let gradient = LinearGradient::blob(DVec2::new(10.0, 0.0));
        let mesh = fan_mesh(&square()[..2], DVec2::ZERO, &gradient, egui::Pos2::ZERO);
        assert!(mesh.is_empty());
    }
}
