//! Drag solvers
//!
//! Every solver recomposes the new pose from the drag-start snapshot in the
//! [`DragSession`], never from the previous frame's pose, so repeated frames
//! cannot accumulate drift. A solver returning `None` leaves the target
//! untouched for that frame.

use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec3};
use te_core::{Plane, Pose, Ray, closest_point_on_axis};
use te_renderer::config::{DragConfig, RotationStrategy};

use crate::handle::{Handle, HandleShape};
use crate::session::{DragAnchor, DragSession};

/// Capture the drag-start snapshot for a handle.
///
/// Returns `None` when the pointer ray cannot anchor the drag (a plane or
/// ring seen exactly edge-on, or an intersection behind the camera).
pub fn begin_drag(handle: &Handle, frame: &Pose, ray: Ray) -> Option<DragSession> {
    let direction = handle.world_direction(frame);

    let anchor = match *handle.shape() {
        HandleShape::Axis { .. } => DragAnchor::Axis {
            direction,
            start_point: closest_point_on_axis(&ray, frame.position, direction),
        },
        HandleShape::Plane { .. } => {
            let plane = Plane::new(direction, frame.position);
            let (plane, start_point) = match plane.intersect(&ray) {
                Some(point) => (plane, point),
                None => {
                    // Same crossing as the stated normal for a plane through a point
                    let flipped = plane.flipped();
                    (flipped, flipped.intersect(&ray)?)
                }
            };
            DragAnchor::Plane { plane, start_point }
        }
        HandleShape::Rotate { axis, .. } => {
            let plane = Plane::new(direction, frame.position);
            let start_point = plane.intersect(&ray)?;
            DragAnchor::Rotate {
                plane,
                local_axis: axis.direction(),
                start_point,
                last_angle: angle_around_axis(start_point - frame.position, direction),
                accumulated_angle: 0.0,
            }
        }
    };

    Some(DragSession {
        handle: handle.id(),
        start_ray: ray,
        start_pose: *frame,
        anchor,
    })
}

/// Compute the target pose for the current pointer ray
pub fn solve(session: &mut DragSession, ray: &Ray, config: &DragConfig) -> Option<Pose> {
    let start = session.start_pose;

    match &mut session.anchor {
        DragAnchor::Axis {
            direction,
            start_point,
        } => solve_axis(&start, *direction, *start_point, ray, config.max_drag_delta),
        DragAnchor::Plane { plane, start_point } => {
            solve_plane(&start, plane, *start_point, ray, config.max_drag_delta)
        }
        DragAnchor::Rotate {
            plane,
            local_axis,
            start_point,
            last_angle,
            accumulated_angle,
        } => {
            let current = plane.intersect(ray)?;
            let angle = match config.rotation_strategy {
                RotationStrategy::ShortestArc => {
                    shortest_arc_angle(start.position, *start_point, current, plane.normal)?
                }
                RotationStrategy::Continuous => {
                    let angle = angle_around_axis(current - start.position, plane.normal);
                    *accumulated_angle += wrap_angle(angle - *last_angle);
                    *last_angle = angle;
                    *accumulated_angle
                }
            };
            Some(Pose::new(
                start.position,
                start.rotation * Quat::from_axis_angle(*local_axis, angle),
            ))
        }
    }
}

fn solve_axis(
    start: &Pose,
    direction: Vec3,
    start_point: Vec3,
    ray: &Ray,
    max_delta: f32,
) -> Option<Pose> {
    let current = closest_point_on_axis(ray, start.position, direction);
    let delta = direction * (current - start_point).dot(direction);

    if delta.length() >= max_delta {
        tracing::trace!(delta = delta.length(), "Discarding runaway axis drag frame");
        return None;
    }

    Some(Pose::new(start.position + delta, start.rotation))
}

fn solve_plane(
    start: &Pose,
    plane: &Plane,
    start_point: Vec3,
    ray: &Ray,
    max_delta: f32,
) -> Option<Pose> {
    let Some(current) = plane.intersect(ray) else {
        tracing::trace!("Pointer ray misses drag plane");
        return None;
    };
    let delta = current - start_point;

    if delta.length() >= max_delta {
        tracing::trace!(delta = delta.length(), "Discarding runaway plane drag frame");
        return None;
    }

    Some(Pose::new(start.position + delta, start.rotation))
}

/// Signed angle from the drag-start direction to the current direction.
///
/// Uses the shortest-arc rotation between the two directions and flips its
/// angle when the arc's axis points against `axis`. When the directions are
/// close to opposite the arc axis is ill-defined and the sign may flip.
fn shortest_arc_angle(center: Vec3, start_point: Vec3, current: Vec3, axis: Vec3) -> Option<f32> {
    let start_dir = (start_point - center).normalize_or_zero();
    let current_dir = (current - center).normalize_or_zero();
    if start_dir == Vec3::ZERO || current_dir == Vec3::ZERO {
        return None;
    }

    let (arc_axis, angle) = Quat::from_rotation_arc(start_dir, current_dir).to_axis_angle();
    if arc_axis.dot(axis) < 0.0 {
        Some(-angle)
    } else {
        Some(angle)
    }
}

/// Angle of `offset` around `axis`, measured in a right-handed in-plane basis
fn angle_around_axis(offset: Vec3, axis: Vec3) -> f32 {
    let hint = if axis.y.abs() < 0.9 { Vec3::Y } else { Vec3::X };
    let u = hint.cross(axis).normalize_or_zero();
    let v = axis.cross(u).normalize_or_zero();
    offset.dot(v).atan2(offset.dot(u))
}

/// Wrap an angle difference into `(-PI, PI]`
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}
