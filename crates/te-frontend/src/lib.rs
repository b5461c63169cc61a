//! Tiles Editor Frontend
//!
//! Headless driver for the transform gizmo: replays scripted pointer input
//! through a [`te_gizmo::GizmoController`] and reports the resulting poses.

pub mod replay;

pub use replay::{FrameReport, PointerAt, ReplayError, ReplayFrame, ReplayScript, run};
