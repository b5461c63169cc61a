//! Gizmo handle identities
//!
//! The gizmo always has exactly nine handles: three translation axes, three
//! translation planes and three rotation rings. Their identity and kind are
//! fixed; everything mutable about a handle lives in the gizmo crate.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A principal axis of the gizmo frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit direction in the gizmo's local frame (right / up / forward)
    pub fn direction(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// One of the three translation planes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneKind {
    XY,
    XZ,
    YZ,
}

impl PlaneKind {
    pub const ALL: [PlaneKind; 3] = [PlaneKind::XY, PlaneKind::XZ, PlaneKind::YZ];

    /// The two axes spanning the plane
    pub fn axes(&self) -> (Axis, Axis) {
        match self {
            PlaneKind::XY => (Axis::X, Axis::Y),
            PlaneKind::XZ => (Axis::X, Axis::Z),
            PlaneKind::YZ => (Axis::Y, Axis::Z),
        }
    }

    /// Plane normal in the gizmo's local frame
    pub fn normal(&self) -> Vec3 {
        match self {
            PlaneKind::XY => Vec3::Z,
            PlaneKind::XZ => Vec3::Y,
            PlaneKind::YZ => Vec3::X,
        }
    }

    /// In-plane (right, up) basis of the handle quad in the gizmo's local frame
    pub fn quad_basis(&self) -> (Vec3, Vec3) {
        match self {
            PlaneKind::XY => (Vec3::X, Vec3::Y),
            PlaneKind::XZ => (Vec3::X, Vec3::Z),
            PlaneKind::YZ => (Vec3::Z, Vec3::Y),
        }
    }
}

/// Kind-specific payload of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Translation along a single axis
    Axis(Axis),
    /// Translation within a plane
    Plane(PlaneKind),
    /// Rotation around an axis
    Rotate(Axis),
}

/// Identity of one of the nine gizmo handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleId {
    AxisX,
    AxisY,
    AxisZ,
    PlaneXY,
    PlaneXZ,
    PlaneYZ,
    RotateX,
    RotateY,
    RotateZ,
}

impl HandleId {
    /// All handles in creation order
    pub const ALL: [HandleId; 9] = [
        HandleId::AxisX,
        HandleId::AxisY,
        HandleId::AxisZ,
        HandleId::PlaneXY,
        HandleId::PlaneXZ,
        HandleId::PlaneYZ,
        HandleId::RotateX,
        HandleId::RotateY,
        HandleId::RotateZ,
    ];

    /// Order in which overlapping hit regions are resolved; first match wins.
    ///
    /// Rotation rings (Y, X, Z), then axes (X, Y, Z), then planes (XY, XZ, YZ).
    pub const HOVER_ORDER: [HandleId; 9] = [
        HandleId::RotateY,
        HandleId::RotateX,
        HandleId::RotateZ,
        HandleId::AxisX,
        HandleId::AxisY,
        HandleId::AxisZ,
        HandleId::PlaneXY,
        HandleId::PlaneXZ,
        HandleId::PlaneYZ,
    ];

    pub fn kind(&self) -> HandleKind {
        match self {
            HandleId::AxisX => HandleKind::Axis(Axis::X),
            HandleId::AxisY => HandleKind::Axis(Axis::Y),
            HandleId::AxisZ => HandleKind::Axis(Axis::Z),
            HandleId::PlaneXY => HandleKind::Plane(PlaneKind::XY),
            HandleId::PlaneXZ => HandleKind::Plane(PlaneKind::XZ),
            HandleId::PlaneYZ => HandleKind::Plane(PlaneKind::YZ),
            HandleId::RotateX => HandleKind::Rotate(Axis::X),
            HandleId::RotateY => HandleKind::Rotate(Axis::Y),
            HandleId::RotateZ => HandleKind::Rotate(Axis::Z),
        }
    }

    /// Index into creation-ordered handle arrays
    pub fn to_index(&self) -> usize {
        match self {
            HandleId::AxisX => 0,
            HandleId::AxisY => 1,
            HandleId::AxisZ => 2,
            HandleId::PlaneXY => 3,
            HandleId::PlaneXZ => 4,
            HandleId::PlaneYZ => 5,
            HandleId::RotateX => 6,
            HandleId::RotateY => 7,
            HandleId::RotateZ => 8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandleId::AxisX => "X_Handle",
            HandleId::AxisY => "Y_Handle",
            HandleId::AxisZ => "Z_Handle",
            HandleId::PlaneXY => "XY_Handle",
            HandleId::PlaneXZ => "XZ_Handle",
            HandleId::PlaneYZ => "YZ_Handle",
            HandleId::RotateX => "X_Rotate",
            HandleId::RotateY => "Y_Rotate",
            HandleId::RotateZ => "Z_Rotate",
        }
    }
}
