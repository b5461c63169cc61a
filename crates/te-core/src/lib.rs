//! Tiles Editor Core
//!
//! Renderer-independent types shared by the transform gizmo crates:
//! target poses, rays and planes, and the identities of the nine gizmo handles.

pub mod constants;
pub mod handle;
pub mod pose;
pub mod ray;

pub use handle::{Axis, HandleId, HandleKind, PlaneKind};
pub use pose::Pose;
pub use ray::{Plane, Ray, closest_point_on_axis};
