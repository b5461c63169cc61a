//! Gizmo geometry generation
//!
//! This module contains the procedural meshes for the nine gizmo handles:
//! cylinders for the translation axes, dual-sided quads for the translation
//! planes and tori for the rotation rings. All meshes are built in the gizmo's
//! local frame; the per-frame handle instance supplies the world transform
//! and colour.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use te_core::{Axis, HandleId, HandleKind, PlaneKind};

use crate::config::HandleGeometryConfig;
use crate::constants::gizmo;

/// Gizmo vertex data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, PartialEq)]
pub struct GizmoVertex {
    /// Position in the gizmo's local frame
    pub position: [f32; 3],
    /// Outward surface normal
    pub normal: [f32; 3],
    /// Creation-order index of the owning handle
    pub handle_id: u32,
    /// 1 for the visual-only back face of a plane handle
    pub back_face: u32,
}

impl GizmoVertex {
    fn new(position: Vec3, normal: Vec3, handle: HandleId, back_face: bool) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            handle_id: handle.to_index() as u32,
            back_face: back_face as u32,
        }
    }
}

/// Indexed triangle mesh of a single handle
#[derive(Debug, Clone, PartialEq)]
pub struct HandleMesh {
    /// Owning handle
    pub handle: HandleId,
    /// Vertex data
    pub vertices: Vec<GizmoVertex>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl HandleMesh {
    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Render meshes for all nine handles.
///
/// Each attach with a new configuration produces a fresh set with a higher
/// generation; hosts re-upload GPU buffers when the generation changes.
#[derive(Debug, Clone, PartialEq)]
pub struct GizmoMeshes {
    /// Incremented every time the meshes are regenerated
    pub generation: u64,
    /// One mesh per handle, in creation order
    pub handles: Vec<HandleMesh>,
}

impl GizmoMeshes {
    /// Generate meshes for every handle from the geometry config
    pub fn generate(config: &HandleGeometryConfig, generation: u64) -> Self {
        let handles = HandleId::ALL
            .iter()
            .map(|&id| generate_handle_mesh(id, config))
            .collect();

        Self {
            generation,
            handles,
        }
    }

    /// Mesh of a single handle
    pub fn get(&self, handle: HandleId) -> Option<&HandleMesh> {
        self.handles.get(handle.to_index())
    }

    /// Total vertex count across all handles
    pub fn vertex_count(&self) -> usize {
        self.handles.iter().map(|m| m.vertices.len()).sum()
    }
}

/// Generate the mesh for one handle
pub fn generate_handle_mesh(handle: HandleId, config: &HandleGeometryConfig) -> HandleMesh {
    let (vertices, indices) = match handle.kind() {
        HandleKind::Axis(axis) => generate_axis_cylinder(
            handle,
            axis,
            config.axis_length,
            config.axis_shaft_radius,
        ),
        HandleKind::Plane(plane) => generate_plane_quad(
            handle,
            plane,
            config.plane_center(plane),
            config.plane_size * 0.5,
        ),
        HandleKind::Rotate(axis) => generate_ring_torus(
            handle,
            axis,
            config.ring_radius,
            config.ring_radius * gizmo::RING_TUBE_RATIO,
        ),
    };

    HandleMesh {
        handle,
        vertices,
        indices,
    }
}

/// Two unit vectors completing `axis` to a right-handed basis
fn perpendicular_basis(axis: Axis) -> (Vec3, Vec3) {
    match axis {
        Axis::X => (Vec3::Y, Vec3::Z),
        Axis::Y => (Vec3::Z, Vec3::X),
        Axis::Z => (Vec3::X, Vec3::Y),
    }
}

/// Open cylinder along `axis`, centred on the origin so it matches the hit segment
fn generate_axis_cylinder(
    handle: HandleId,
    axis: Axis,
    length: f32,
    radius: f32,
) -> (Vec<GizmoVertex>, Vec<u32>) {
    let segments = gizmo::SHAFT_SEGMENTS;
    let direction = axis.direction();
    let (e1, e2) = perpendicular_basis(axis);
    let half = direction * (length * 0.5);

    let mut vertices = Vec::with_capacity(((segments + 1) * 2) as usize);
    let mut indices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * TAU;
        let normal = e1 * angle.cos() + e2 * angle.sin();
        let offset = normal * radius;

        // Bottom of shaft
        vertices.push(GizmoVertex::new(offset - half, normal, handle, false));
        // Top of shaft
        vertices.push(GizmoVertex::new(offset + half, normal, handle, false));
    }

    for i in 0..segments {
        let i0 = i * 2;
        let i1 = i * 2 + 1;
        let i2 = (i + 1) * 2;
        let i3 = (i + 1) * 2 + 1;
        indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
    }

    (vertices, indices)
}

/// Square plane handle with a separate reversed back face
fn generate_plane_quad(
    handle: HandleId,
    plane: PlaneKind,
    center: Vec3,
    half_size: f32,
) -> (Vec<GizmoVertex>, Vec<u32>) {
    let (right, up) = plane.quad_basis();
    let normal = right.cross(up);
    let r = right * half_size;
    let u = up * half_size;
    let corners = [center - r - u, center + r - u, center + r + u, center - r + u];

    let mut vertices = Vec::with_capacity(8);
    for corner in corners {
        vertices.push(GizmoVertex::new(corner, normal, handle, false));
    }
    // Back face: same corners, flipped normal and winding
    for corner in corners {
        vertices.push(GizmoVertex::new(corner, -normal, handle, true));
    }

    let indices = vec![0, 1, 2, 0, 2, 3, 4, 6, 5, 4, 7, 6];
    (vertices, indices)
}

/// Torus lying in the plane perpendicular to `axis`
fn generate_ring_torus(
    handle: HandleId,
    axis: Axis,
    radius: f32,
    tube_radius: f32,
) -> (Vec<GizmoVertex>, Vec<u32>) {
    let segments = gizmo::RING_SEGMENTS;
    let sides = gizmo::RING_SIDES;
    let axis_dir = axis.direction();
    let (e1, e2) = perpendicular_basis(axis);

    let mut vertices = Vec::with_capacity(((segments + 1) * (sides + 1)) as usize);
    let mut indices = Vec::with_capacity((segments * sides * 6) as usize);

    for i in 0..=segments {
        let u = (i as f32 / segments as f32) * TAU;
        let radial = e1 * u.cos() + e2 * u.sin();
        let ring_point = radial * radius;

        for j in 0..=sides {
            let v = (j as f32 / sides as f32) * TAU;
            let normal = radial * v.cos() + axis_dir * v.sin();
            vertices.push(GizmoVertex::new(
                ring_point + normal * tube_radius,
                normal,
                handle,
                false,
            ));
        }
    }

    let stride = sides + 1;
    for i in 0..segments {
        for j in 0..sides {
            let i0 = i * stride + j;
            let i1 = i0 + 1;
            let i2 = (i + 1) * stride + j;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    (vertices, indices)
}
