//! Gizmo collision detection utilities
//!
//! This module implements screen-space hit testing for gizmo handle picking.
//! Handle geometry is projected with [`crate::projection`] and compared
//! against the 2D pointer position; no 3D collision volumes are involved.
//!
//! Every test treats geometry that could not be projected (a point with
//! non-positive view depth) as a miss.

use glam::Vec2;

use crate::constants::hit::QUAD_AREA_EPSILON;
use crate::projection::{ScreenEllipse, ScreenPoint};

/// Pointer vs. projected axis segment test.
///
/// # Algorithm
///
/// The pointer is projected onto the screen segment `a -> b` with the
/// parametric coordinate
/// ```text
/// t = clamp(((p - a) · (b - a)) / |b - a|², 0, 1)
/// ```
/// and the distance from the pointer to `a + t (b - a)` is compared with the
/// thickness tolerance. A segment that collapses to a single pixel (the axis
/// points straight at the camera) measures the distance to that point.
///
/// # Arguments
///
/// * `pointer` - Pointer position in pixels.
/// * `a`, `b` - Projected endpoints of the axis segment.
/// * `thickness` - Maximum pointer distance in pixels.
///
/// # Returns
///
/// `true` if the pointer is strictly closer than `thickness` to the segment.
pub fn axis_hit(pointer: Vec2, a: ScreenPoint, b: ScreenPoint, thickness: f32) -> bool {
    if !a.is_visible() || !b.is_visible() {
        return false;
    }

    let ab = b.position - a.position;
    let len_sq = ab.length_squared();
    let t = if len_sq > f32::EPSILON {
        ((pointer - a.position).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let closest = a.position + ab * t;
    pointer.distance(closest) < thickness
}

/// Unsigned area of the triangle `p1 p2 p3`
fn triangle_area(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    ((p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y)) * 0.5).abs()
}

/// Pointer vs. projected plane quad test.
///
/// # Algorithm
///
/// Point-in-convex-quad via area equality: the quad area (split along the
/// `0-2` diagonal) is compared with the sum of the four triangles formed by
/// the pointer and each quad edge. For a pointer inside the quad the two
/// agree; outside, the fan overshoots. The comparison allows
/// `QUAD_AREA_EPSILON` square pixels of slack.
///
/// A quad seen exactly edge-on has zero area and is reported as a miss, since
/// the area comparison would otherwise accept any pointer on its line.
pub fn quad_hit(pointer: Vec2, corners: &[ScreenPoint; 4]) -> bool {
    if corners.iter().any(|c| !c.is_visible()) {
        return false;
    }

    let p = corners.map(|c| c.position);
    let quad_area = triangle_area(p[0], p[1], p[2]) + triangle_area(p[0], p[2], p[3]);
    if quad_area <= QUAD_AREA_EPSILON {
        return false;
    }

    let fan_area: f32 = (0..4)
        .map(|i| triangle_area(p[i], p[(i + 1) % 4], pointer))
        .sum();

    (fan_area - quad_area).abs() < QUAD_AREA_EPSILON
}

/// Pointer vs. projected rotation ring test.
///
/// # Algorithm
///
/// The pointer offset from the ellipse centre is expressed in the ellipse's
/// major/minor basis `(x, y)`, giving a normalized radius
/// ```text
/// r² = x² / a² + y² / b²
/// ```
/// which is 1 exactly on the ellipse. The hit band is the open annulus
/// `1 - ε < r² < 1 + ε` with `ε = thickness / max(a, b)`.
///
/// A ring seen edge-on (zero-length minor axis) has no interior to measure
/// against and is reported as a miss.
pub fn ellipse_annulus_hit(pointer: Vec2, ellipse: &ScreenEllipse, thickness: f32) -> bool {
    let a = ellipse.major;
    let b = ellipse.minor;
    if a <= f32::EPSILON || b <= f32::EPSILON {
        return false;
    }

    let major_dir = ellipse.major_dir.normalize_or_zero();
    let minor_dir = major_dir.perp();
    let delta = pointer - ellipse.center;
    let x = delta.dot(major_dir);
    let y = delta.dot(minor_dir);

    let r_sq = (x * x) / (a * a) + (y * y) / (b * b);
    let epsilon = thickness / a.max(b);

    r_sq > 1.0 - epsilon && r_sq < 1.0 + epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp(x: f32, y: f32) -> ScreenPoint {
        ScreenPoint {
            position: Vec2::new(x, y),
            depth: 10.0,
        }
    }

    #[test]
    fn test_axis_hit_on_segment() {
        assert!(axis_hit(Vec2::new(50.0, 105.0), sp(0.0, 100.0), sp(100.0, 100.0), 16.0));
    }

    #[test]
    fn test_axis_hit_clamps_to_endpoints() {
        // Beyond the end of the segment the distance is measured to the endpoint
        assert!(!axis_hit(Vec2::new(120.0, 100.0), sp(0.0, 100.0), sp(100.0, 100.0), 16.0));
        assert!(axis_hit(Vec2::new(110.0, 100.0), sp(0.0, 100.0), sp(100.0, 100.0), 16.0));
    }

    #[test]
    fn test_axis_hit_thickness_is_strict() {
        assert!(!axis_hit(Vec2::new(50.0, 116.0), sp(0.0, 100.0), sp(100.0, 100.0), 16.0));
    }

    #[test]
    fn test_axis_hit_degenerate_segment() {
        assert!(axis_hit(Vec2::new(5.0, 5.0), sp(0.0, 0.0), sp(0.0, 0.0), 16.0));
        assert!(!axis_hit(Vec2::new(20.0, 0.0), sp(0.0, 0.0), sp(0.0, 0.0), 16.0));
    }

    #[test]
    fn test_axis_hit_behind_camera() {
        let behind = ScreenPoint {
            position: Vec2::new(100.0, 100.0),
            depth: -1.0,
        };
        assert!(!axis_hit(Vec2::new(50.0, 100.0), sp(0.0, 100.0), behind, 16.0));
    }

    #[test]
    fn test_quad_hit_inside_and_outside() {
        let corners = [sp(0.0, 0.0), sp(100.0, 0.0), sp(100.0, 100.0), sp(0.0, 100.0)];
        assert!(quad_hit(Vec2::new(50.0, 50.0), &corners));
        assert!(quad_hit(Vec2::new(1.0, 99.0), &corners));
        assert!(!quad_hit(Vec2::new(150.0, 50.0), &corners));
        assert!(!quad_hit(Vec2::new(-5.0, -5.0), &corners));
    }

    #[test]
    fn test_quad_hit_skewed_quad() {
        let corners = [sp(0.0, 0.0), sp(80.0, 20.0), sp(100.0, 100.0), sp(10.0, 70.0)];
        assert!(quad_hit(Vec2::new(50.0, 50.0), &corners));
        assert!(!quad_hit(Vec2::new(90.0, 10.0), &corners));
    }

    #[test]
    fn test_quad_hit_edge_on() {
        let corners = [sp(0.0, 50.0), sp(100.0, 50.0), sp(100.0, 50.0), sp(0.0, 50.0)];
        assert!(!quad_hit(Vec2::new(50.0, 50.0), &corners));
    }

    #[test]
    fn test_ring_hit_on_circle() {
        let ellipse = ScreenEllipse {
            center: Vec2::new(400.0, 300.0),
            major_dir: Vec2::X,
            major: 100.0,
            minor: 100.0,
        };
        assert!(ellipse_annulus_hit(Vec2::new(500.0, 300.0), &ellipse, 16.0));
        assert!(ellipse_annulus_hit(Vec2::new(400.0, 205.0), &ellipse, 16.0));
        // Centre and far outside are misses
        assert!(!ellipse_annulus_hit(Vec2::new(400.0, 300.0), &ellipse, 16.0));
        assert!(!ellipse_annulus_hit(Vec2::new(600.0, 300.0), &ellipse, 16.0));
    }

    #[test]
    fn test_ring_hit_rotated_ellipse() {
        let dir = Vec2::new(1.0, 1.0).normalize();
        let ellipse = ScreenEllipse {
            center: Vec2::ZERO,
            major_dir: dir,
            major: 100.0,
            minor: 40.0,
        };
        assert!(ellipse_annulus_hit(dir * 100.0, &ellipse, 16.0));
        assert!(ellipse_annulus_hit(dir.perp() * 40.0, &ellipse, 16.0));
        // A point 100px along the minor axis is far outside the ellipse
        assert!(!ellipse_annulus_hit(dir.perp() * 100.0, &ellipse, 16.0));
    }

    #[test]
    fn test_ring_hit_edge_on() {
        let ellipse = ScreenEllipse {
            center: Vec2::ZERO,
            major_dir: Vec2::X,
            major: 100.0,
            minor: 0.0,
        };
        assert!(!ellipse_annulus_hit(Vec2::new(100.0, 0.0), &ellipse, 16.0));
    }
}
