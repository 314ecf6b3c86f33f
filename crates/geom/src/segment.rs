//! Segment direction and orientation helpers.
//!
//! Every placement routine shares one facing convention so that objects
//! duplicated along a boundary loop all face the same way relative to
//! the walk direction.

use glam::Vec2;

use crate::GeomError;

/// Unit vector from `p1` to `p2`.
///
/// Fails when the endpoints coincide; callers skip such edges silently
/// (nothing is placed on a zero-length edge).
pub fn direction(p1: Vec2, p2: Vec2) -> Result<Vec2, GeomError> {
    let v = p2 - p1;
    if v == Vec2::ZERO {
        return Err(GeomError::DegenerateSegment);
    }
    Ok(v.normalize())
}

/// Signed angle in radians from `axis` to `v`, counter-clockwise positive.
pub fn signed_angle_to_axis(v: Vec2, axis: Vec2) -> f32 {
    axis.perp_dot(v).atan2(axis.dot(v))
}

/// Rotation applied to an object placed along a segment with direction `dir`.
///
/// Signed angle of the direction to the +X axis, negated when the segment
/// runs toward +X. A segment along +X yields rotation 0.
pub fn segment_rotation(dir: Vec2) -> f32 {
    let ang = signed_angle_to_axis(dir, Vec2::X);
    if dir.x > 0.0 {
        -ang
    } else {
        ang
    }
}
