//! Global constants for te-core

/// Determinant threshold below which two lines are treated as parallel
pub const LINE_PARALLEL_EPSILON: f32 = 0.0001;

/// Ray direction / plane normal dot product below which they are treated as parallel
pub const RAY_PLANE_PARALLEL_EPSILON: f32 = 1e-6;

/// Default per-frame drag delta (world units) above which a drag update is discarded
pub const MAX_DRAG_DELTA: f32 = 100.0;

/// Number of gizmo handles (3 axes, 3 planes, 3 rings)
pub const HANDLE_COUNT: usize = 9;
