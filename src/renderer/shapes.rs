//! Shape generation for 2D primitives
//!
//! Every generator emits a plain triangle list in field coordinates.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;
use crate::geom::Rect;

/// Convert HSV (hue in degrees, any range) to RGBA
pub fn hsv(hue: f32, saturation: f32, value: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, 1.0]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (min, max) = (r.min(), r.max());
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a rectangle with rounded corners.
///
/// The corner radius is clamped to half the shorter side; zero falls back
/// to a plain rectangle.
pub fn rounded_rect(r: &Rect, radius: f32, color: [f32; 4], corner_segments: u32) -> Vec<Vertex> {
    let radius = radius.min(r.size.x / 2.0).min(r.size.y / 2.0);
    if radius <= 0.0 || corner_segments == 0 {
        return rect(r, color);
    }

    let (min, max) = (r.min(), r.max());
    let mut vertices = Vec::with_capacity((18 + corner_segments * 12) as usize);

    // Centre column plus the two side strips between the corners
    vertices.extend(rect(
        &Rect::new(Vec2::new(min.x + radius, min.y), Vec2::new(r.size.x - radius * 2.0, r.size.y)),
        color,
    ));
    vertices.extend(rect(
        &Rect::new(Vec2::new(min.x, min.y + radius), Vec2::new(radius, r.size.y - radius * 2.0)),
        color,
    ));
    vertices.extend(rect(
        &Rect::new(
            Vec2::new(max.x - radius, min.y + radius),
            Vec2::new(radius, r.size.y - radius * 2.0),
        ),
        color,
    ));

    // Quarter discs, screen space (+Y down): angle 0 points right, PI/2 down
    let corners = [
        (Vec2::new(max.x - radius, max.y - radius), 0.0),
        (Vec2::new(min.x + radius, max.y - radius), FRAC_PI_2),
        (Vec2::new(min.x + radius, min.y + radius), PI),
        (Vec2::new(max.x - radius, min.y + radius), PI + FRAC_PI_2),
    ];
    for (center, start) in corners {
        for i in 0..corner_segments {
            let theta1 = start + (i as f32 / corner_segments as f32) * FRAC_PI_2;
            let theta2 = start + ((i + 1) as f32 / corner_segments as f32) * FRAC_PI_2;

            vertices.push(Vertex::new(center.x, center.y, color));
            vertices.push(Vertex::new(
                center.x + radius * theta1.cos(),
                center.y + radius * theta1.sin(),
                color,
            ));
            vertices.push(Vertex::new(
                center.x + radius * theta2.cos(),
                center.y + radius * theta2.sin(),
                color,
            ));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn test_hsv_primaries() {
        assert!(close(hsv(0.0, 1.0, 1.0), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(hsv(120.0, 1.0, 1.0), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(hsv(240.0, 1.0, 1.0), [0.0, 0.0, 1.0, 1.0]));
        // Wraps around
        assert!(close(hsv(360.0, 1.0, 1.0), hsv(0.0, 1.0, 1.0)));
        assert!(close(hsv(-120.0, 1.0, 1.0), hsv(240.0, 1.0, 1.0)));
        // Zero saturation is grey
        assert!(close(hsv(77.0, 0.0, 0.5), [0.5, 0.5, 0.5, 1.0]));
    }

    #[test]
    fn test_circle_vertex_count_and_extent() {
        let verts = circle(Vec2::new(10.0, 20.0), 8.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            let d = Vec2::from(v.position).distance(Vec2::new(10.0, 20.0));
            assert!(d <= 8.0 + 1e-4);
        }
    }

    #[test]
    fn test_rect_covers_bounds() {
        let r = Rect::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let verts = rect(&r, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [1.0, 2.0]));
        assert!(verts.iter().any(|v| v.position == [4.0, 6.0]));
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let r = Rect::new(Vec2::new(370.0, 495.0), Vec2::new(60.0, 10.0));
        let verts = rounded_rect(&r, 3.0, [1.0; 4], 4);
        assert_eq!(verts.len(), 18 + 4 * 4 * 3);
        for v in &verts {
            assert!(v.position[0] >= 370.0 - 1e-3 && v.position[0] <= 430.0 + 1e-3);
            assert!(v.position[1] >= 495.0 - 1e-3 && v.position[1] <= 505.0 + 1e-3);
        }
    }

    #[test]
    fn test_rounded_rect_zero_radius_is_plain() {
        let r = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert_eq!(rounded_rect(&r, 0.0, [1.0; 4], 4), rect(&r, [1.0; 4]));
    }
}
