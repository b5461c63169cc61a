//! Tiles Editor Transform Gizmo
//!
//! Hover and drag handling for a nine-handle transform gizmo (three
//! translation axes, three translation planes, three rotation rings). All
//! picking happens in screen space; see `te-renderer` for the projection and
//! hit tests.
//!
//! # Usage
//!
//! ```ignore
//! let mut gizmo = GizmoController::new(GizmoConfig::default())?;
//! gizmo.attach(object_id, GizmoConfig::default(), VisibilityConfig::tile())?;
//!
//! // Once per frame
//! let button = ButtonState::from_samples(was_down, is_down);
//! gizmo.update(Some(&mut object_pose), Some(&camera), PointerSample::new(mouse, button));
//! draw(gizmo.meshes(), gizmo.render_state());
//! ```

pub mod controller;
pub mod handle;
pub mod session;
pub mod solver;
pub mod state;
pub mod visibility;

pub use controller::GizmoController;
pub use handle::{Handle, HandleShape};
pub use session::{DragAnchor, DragSession};
pub use state::{ButtonState, Effect, Interaction, InteractionState, PointerSample, step};
pub use visibility::VisibilityConfig;
