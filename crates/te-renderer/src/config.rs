//! Gizmo configuration structures
//!
//! This module provides configurable settings for the gizmo that can be
//! serialized and loaded from RON configuration files.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use te_core::PlaneKind;
use te_core::constants::MAX_DRAG_DELTA;

use crate::constants::gizmo::{self as defaults, colors};

/// Handle geometry settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandleGeometryConfig {
    /// Length of each axis handle, centred on the gizmo origin
    pub axis_length: f32,
    /// Rendered radius of the axis shafts
    pub axis_shaft_radius: f32,
    /// Screen-space hit tolerance of axis handles (pixels)
    pub axis_thickness: f32,
    /// Distance of plane handle centres from the origin along both plane axes
    pub plane_offset: f32,
    /// Edge length of a plane handle
    pub plane_size: f32,
    /// Local-frame centre of the XY plane handle, replacing the default offset
    #[serde(default)]
    pub xy_plane_center: Option<Vec3>,
    /// Local-frame centre of the XZ plane handle, replacing the default offset
    #[serde(default)]
    pub xz_plane_center: Option<Vec3>,
    /// Local-frame centre of the YZ plane handle, replacing the default offset
    #[serde(default)]
    pub yz_plane_center: Option<Vec3>,
    /// Radius of the rotation rings
    pub ring_radius: f32,
    /// Screen-space hit tolerance of rotation rings (pixels)
    pub ring_thickness: f32,
}

impl Default for HandleGeometryConfig {
    fn default() -> Self {
        Self {
            axis_length: defaults::AXIS_LENGTH,
            axis_shaft_radius: defaults::AXIS_SHAFT_RADIUS,
            axis_thickness: defaults::AXIS_THICKNESS,
            plane_offset: defaults::PLANE_OFFSET,
            plane_size: defaults::PLANE_SIZE,
            xy_plane_center: None,
            xz_plane_center: None,
            yz_plane_center: None,
            ring_radius: defaults::RING_RADIUS,
            ring_thickness: defaults::RING_THICKNESS,
        }
    }
}

impl HandleGeometryConfig {
    /// Centre of a plane handle in the gizmo's local frame
    pub fn plane_center(&self, plane: PlaneKind) -> Vec3 {
        let (override_center, a, b) = match plane {
            PlaneKind::XY => (self.xy_plane_center, Vec3::X, Vec3::Y),
            PlaneKind::XZ => (self.xz_plane_center, Vec3::X, Vec3::Z),
            PlaneKind::YZ => (self.yz_plane_center, Vec3::Y, Vec3::Z),
        };
        override_center.unwrap_or((a + b) * self.plane_offset)
    }
}

/// Handle colour palette
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GizmoColors {
    /// X axis and X ring colour (RGBA)
    pub x_axis: [f32; 4],
    /// Y axis and Y ring colour (RGBA)
    pub y_axis: [f32; 4],
    /// Z axis and Z ring colour (RGBA)
    pub z_axis: [f32; 4],
    /// XY plane colour (RGBA)
    pub xy_plane: [f32; 4],
    /// XZ plane colour (RGBA)
    pub xz_plane: [f32; 4],
    /// YZ plane colour (RGBA)
    pub yz_plane: [f32; 4],
    /// Colour of the hovered or dragged handle (RGBA)
    pub hover: [f32; 4],
    /// Alpha written into every colour at render time
    pub render_alpha: f32,
}

impl Default for GizmoColors {
    fn default() -> Self {
        Self {
            x_axis: colors::X_AXIS,
            y_axis: colors::Y_AXIS,
            z_axis: colors::Z_AXIS,
            xy_plane: colors::XY_PLANE,
            xz_plane: colors::XZ_PLANE,
            yz_plane: colors::YZ_PLANE,
            hover: colors::HOVER,
            render_alpha: defaults::RENDER_ALPHA,
        }
    }
}

/// How a rotation drag turns pointer motion into an angle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RotationStrategy {
    /// Shortest-arc rotation between the drag-start and current directions,
    /// with its sign taken from the rotation axis. Ambiguous when the two
    /// directions are close to opposite.
    #[default]
    ShortestArc,
    /// Accumulate signed per-frame angle deltas around the ring axis
    Continuous,
}

/// Drag behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DragConfig {
    /// Per-frame translation (world units) at or above which an update is discarded
    pub max_drag_delta: f32,
    /// Rotation drag strategy
    pub rotation_strategy: RotationStrategy,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            max_drag_delta: MAX_DRAG_DELTA,
            rotation_strategy: RotationStrategy::default(),
        }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 40.0,
            near_plane: 0.1,
            far_plane: 100000.0,
        }
    }
}

/// Complete gizmo configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GizmoConfig {
    /// Handle geometry
    #[serde(default)]
    pub geometry: HandleGeometryConfig,
    /// Colour palette
    #[serde(default)]
    pub colors: GizmoColors,
    /// Drag behaviour
    #[serde(default)]
    pub drag: DragConfig,
    /// Camera defaults
    #[serde(default)]
    pub camera: CameraConfig,
}

impl GizmoConfig {
    /// Create a new gizmo configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that all dimensions and tolerances are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.geometry;
        let positive = [
            ("axis_length", g.axis_length),
            ("axis_shaft_radius", g.axis_shaft_radius),
            ("axis_thickness", g.axis_thickness),
            ("plane_size", g.plane_size),
            ("ring_radius", g.ring_radius),
            ("ring_thickness", g.ring_thickness),
            ("max_drag_delta", self.drag.max_drag_delta),
            ("near_plane", self.camera.near_plane),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.colors.render_alpha) {
            return Err(ConfigError::Invalid(format!(
                "render_alpha must be within 0..=1, got {}",
                self.colors.render_alpha
            )));
        }

        if self.camera.far_plane <= self.camera.near_plane {
            return Err(ConfigError::Invalid(
                "far_plane must be greater than near_plane".to_string(),
            ));
        }

        Ok(())
    }

    /// Serialize to a pretty RON string
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Parse and validate a configuration from RON text
    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: GizmoConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::load_from_str(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_ron_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(String),
    /// Encoding the configuration failed
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// The file is not a valid configuration
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
