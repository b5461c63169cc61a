//! Scripted pointer replay
//!
//! A [`ReplayScript`] describes a camera, a target pose and a sequence of
//! pointer frames. [`run`] feeds the frames through a [`GizmoController`] and
//! reports the active handle and target pose after each one.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use te_core::{HandleId, Pose};
use te_gizmo::{ButtonState, GizmoController, PointerSample, VisibilityConfig};
use te_renderer::Camera;
use te_renderer::config::{ConfigError, GizmoConfig};
use te_renderer::projection::project_point;
use uuid::Uuid;

/// Look-at camera placement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraSetup {
    pub position: Vec3,
    pub target: Vec3,
    pub viewport: Vec2,
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            viewport: Vec2::new(800.0, 600.0),
        }
    }
}

/// Where the pointer is on a frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum PointerAt {
    /// Pixel position
    Screen(Vec2),
    /// Screen projection of a world point
    World(Vec3),
}

/// One sampled frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReplayFrame {
    pub pointer: PointerAt,
    /// Whether the primary button is down
    pub down: bool,
}

/// A complete replay input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplayScript {
    #[serde(default)]
    pub camera: CameraSetup,
    #[serde(default)]
    pub target: Pose,
    #[serde(default)]
    pub visibility: VisibilityConfig,
    pub frames: Vec<ReplayFrame>,
}

impl ReplayScript {
    /// Parse a script from RON text
    pub fn from_ron(content: &str) -> Result<Self, ReplayError> {
        ron::from_str(content).map_err(|e| ReplayError::Deserialize(e.to_string()))
    }

    /// Load a script from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ReplayError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }
}

/// State after one replayed frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: usize,
    pub active: Option<HandleId>,
    pub pose: Pose,
}

/// Replay every frame of the script against a fresh controller
pub fn run(script: &ReplayScript, config: GizmoConfig) -> Result<Vec<FrameReport>, ReplayError> {
    let camera = Camera::from_config(
        &config.camera,
        script.camera.position,
        script.camera.target,
        script.camera.viewport,
    );

    let mut controller = GizmoController::new(config.clone())?;
    controller.attach(Uuid::new_v4(), config, script.visibility)?;

    let mut pose = script.target;
    let mut was_down = false;
    let mut reports = Vec::with_capacity(script.frames.len());

    for (frame, sample) in script.frames.iter().enumerate() {
        let position = match sample.pointer {
            PointerAt::Screen(position) => position,
            PointerAt::World(point) => project_point(&camera, point).position,
        };
        let button = ButtonState::from_samples(was_down, sample.down);
        was_down = sample.down;

        controller.update(Some(&mut pose), Some(&camera), PointerSample::new(position, button));

        let report = FrameReport {
            frame,
            active: controller.active_handle(),
            pose,
        };
        tracing::debug!(
            frame,
            active = ?report.active.map(|h| h.name()),
            position = ?pose.position,
            "Replayed frame"
        );
        reports.push(report);
    }

    Ok(reports)
}

/// Replay errors
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Usage: {0}")]
    Usage(String),
}
