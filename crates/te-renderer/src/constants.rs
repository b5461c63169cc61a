//! Renderer constants

/// Gizmo handle dimensions and palette
pub mod gizmo {
    /// Length of an axis handle's hit segment (world units, centred on the gizmo origin)
    pub const AXIS_LENGTH: f32 = 0.8;
    /// Radius of the rendered axis shaft
    pub const AXIS_SHAFT_RADIUS: f32 = 0.05;
    /// Screen-space tolerance for axis hits (pixels)
    pub const AXIS_THICKNESS: f32 = 16.0;
    /// Offset of plane handle centres along both of their axes
    pub const PLANE_OFFSET: f32 = 0.55;
    /// Edge length of a plane handle quad
    pub const PLANE_SIZE: f32 = 0.5;
    /// Radius of the rotation rings
    pub const RING_RADIUS: f32 = 1.2;
    /// Tube radius of the rendered rings, relative to the ring radius
    pub const RING_TUBE_RATIO: f32 = 0.05;
    /// Screen-space tolerance for ring hits (pixels)
    pub const RING_THICKNESS: f32 = 16.0;
    /// Segments around an axis shaft
    pub const SHAFT_SEGMENTS: u32 = 16;
    /// Segments along a ring
    pub const RING_SEGMENTS: u32 = 64;
    /// Segments around a ring's tube
    pub const RING_SIDES: u32 = 12;
    /// Alpha applied to every handle colour at render time
    pub const RENDER_ALPHA: f32 = 0.8;

    /// Default handle colours (RGBA)
    pub mod colors {
        /// Red
        pub const X_AXIS: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
        /// Green
        pub const Y_AXIS: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
        /// Blue
        pub const Z_AXIS: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
        /// Translucent yellow
        pub const XY_PLANE: [f32; 4] = [1.0, 1.0, 0.0, 0.3];
        /// Translucent magenta
        pub const XZ_PLANE: [f32; 4] = [1.0, 0.0, 1.0, 0.3];
        /// Translucent cyan
        pub const YZ_PLANE: [f32; 4] = [0.0, 1.0, 1.0, 0.3];
        /// Hover and drag highlight
        pub const HOVER: [f32; 4] = [1.0, 0.92, 0.016, 1.0];
    }
}

/// Screen-space hit test tolerances
pub mod hit {
    /// Allowed mismatch (square pixels) between a quad's area and the
    /// four pointer triangles in the point-in-quad test
    pub const QUAD_AREA_EPSILON: f32 = 1.5;
}
