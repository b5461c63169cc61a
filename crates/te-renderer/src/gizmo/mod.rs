//! Transform gizmo render state
//!
//! This module holds what the host renderer needs to draw the gizmo each
//! frame: procedural handle meshes, one instance record per handle, and the
//! screen-space collision tests used for handle picking.

pub mod collision;
pub mod geometry;

pub use collision::{axis_hit, ellipse_annulus_hit, quad_hit};
pub use geometry::{GizmoMeshes, GizmoVertex, HandleMesh, generate_handle_mesh};

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use te_core::HandleId;
use te_core::constants::HANDLE_COUNT;

use crate::config::GizmoColors;

/// Per-handle instance data, laid out for direct upload to a GPU buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, PartialEq)]
pub struct HandleInstance {
    /// Gizmo-local to world transform
    pub transform: [[f32; 4]; 4],
    /// Final colour with the render alpha applied
    pub color: [f32; 4],
    /// 1 when the handle should be drawn
    pub visible: u32,
    /// 1 when the handle is hovered or being dragged
    pub highlighted: u32,
    /// Padding to a 16-byte multiple
    pub _pad: [u32; 2],
}

impl Default for HandleInstance {
    fn default() -> Self {
        Self {
            transform: Mat4::IDENTITY.to_cols_array_2d(),
            color: [0.0; 4],
            visible: 0,
            highlighted: 0,
            _pad: [0; 2],
        }
    }
}

impl HandleInstance {
    /// Build an instance, choosing the hover colour when highlighted
    pub fn new(
        transform: Mat4,
        base_color: [f32; 4],
        visible: bool,
        highlighted: bool,
        colors: &GizmoColors,
    ) -> Self {
        let mut color = if highlighted { colors.hover } else { base_color };
        color[3] = colors.render_alpha;

        Self {
            transform: transform.to_cols_array_2d(),
            color,
            visible: visible as u32,
            highlighted: highlighted as u32,
            _pad: [0; 2],
        }
    }

    /// Whether the handle should be drawn
    pub fn is_visible(&self) -> bool {
        self.visible != 0
    }

    /// Whether the handle uses the hover colour
    pub fn is_highlighted(&self) -> bool {
        self.highlighted != 0
    }
}

/// Everything the host renderer needs for one frame of the gizmo
#[derive(Debug, Clone, PartialEq)]
pub struct GizmoRenderState {
    /// One instance per handle, in creation order
    pub instances: [HandleInstance; HANDLE_COUNT],
    /// Hovered or dragged handle
    pub active: Option<HandleId>,
    /// Generation of the meshes these instances refer to
    pub mesh_generation: u64,
}

impl Default for GizmoRenderState {
    fn default() -> Self {
        Self {
            instances: [HandleInstance::default(); HANDLE_COUNT],
            active: None,
            mesh_generation: 0,
        }
    }
}

impl GizmoRenderState {
    /// Instance record of a handle
    pub fn instance(&self, handle: HandleId) -> &HandleInstance {
        &self.instances[handle.to_index()]
    }

    /// Handles that should be drawn this frame
    pub fn visible_handles(&self) -> impl Iterator<Item = HandleId> + '_ {
        HandleId::ALL
            .into_iter()
            .filter(|id| self.instance(*id).is_visible())
    }

    /// Raw bytes of the instance array
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_applies_render_alpha() {
        let colors = GizmoColors::default();
        let instance = HandleInstance::new(Mat4::IDENTITY, colors.xy_plane, true, false, &colors);
        assert_eq!(instance.color[3], colors.render_alpha);
        assert_eq!(instance.color[0], 1.0);
    }

    #[test]
    fn test_instance_highlight_uses_hover_color() {
        let colors = GizmoColors::default();
        let instance = HandleInstance::new(Mat4::IDENTITY, colors.x_axis, true, true, &colors);
        assert!(instance.is_highlighted());
        assert_eq!(instance.color[..3], colors.hover[..3]);
    }

    #[test]
    fn test_instance_bytes_size() {
        let state = GizmoRenderState::default();
        assert_eq!(
            state.instance_bytes().len(),
            HANDLE_COUNT * std::mem::size_of::<HandleInstance>()
        );
        assert_eq!(std::mem::size_of::<HandleInstance>(), 96);
    }

    #[test]
    fn test_visible_handles_filter() {
        let mut state = GizmoRenderState::default();
        state.instances[HandleId::AxisY.to_index()].visible = 1;
        let visible: Vec<_> = state.visible_handles().collect();
        assert_eq!(visible, vec![HandleId::AxisY]);
    }
}
