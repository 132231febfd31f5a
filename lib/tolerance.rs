//! Numeric thresholds, one per comparison class.

/// A ray is treated as parallel to a slab, plane or triangle when the relevant dot product (or determinant) is
/// smaller than this in magnitude.
pub const PARALLEL_EPSILON: f32 = f32::EPSILON;

/// Per-component threshold under which a scatter direction counts as degenerate.
pub const NEAR_ZERO_EPSILON: f32 = f32::EPSILON;

/// Squared-length threshold for rejecting zero normals, axes, half-extents and triangle areas at construction.
pub const DEGENERATE_EPSILON: f32 = 1e-12;

/// Front-face test: `dot(direction, outward_normal) < -ORIENTATION_EPSILON`. Zero makes it an exact sign test.
pub const ORIENTATION_EPSILON: f32 = 0.0;

/// Exclusive lower bound on `t` used by `Surface::hit`.
pub const FORWARD_T_MIN: f32 = 0.0;
