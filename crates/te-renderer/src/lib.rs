//! Tiles Editor Renderer
//!
//! Screen-space side of the transform gizmo: camera abstraction, projection of
//! handle geometry to the viewport, handle picking, and the render state handed
//! to the host each frame.
//!
//! # Module Structure
//!
//! ```text
//! te-renderer/
//! ├── camera.rs        # ViewCamera trait and look-at perspective camera
//! ├── config.rs        # GizmoConfig (RON) and ConfigError
//! ├── constants.rs     # Handle dimensions, palette, hit tolerances
//! ├── projection.rs    # Point, segment, quad and circle projection
//! └── gizmo/           # Collision tests, handle meshes, render state
//! ```

pub mod camera;
pub mod config;
pub mod constants;
pub mod gizmo;
pub mod projection;

pub use camera::{Camera, ViewCamera};
pub use config::{
    CameraConfig, ConfigError, DragConfig, GizmoColors, GizmoConfig, HandleGeometryConfig,
    RotationStrategy,
};
pub use gizmo::{GizmoMeshes, GizmoRenderState, GizmoVertex, HandleInstance, HandleMesh};
pub use projection::{ScreenEllipse, ScreenPoint};
