//! Core 2D geometry for the city generator.
//!
//! This crate provides the foundational types used across all layout passes:
//! - Segment direction, signed angles, and the facing convention
//! - Polygons, centroids, and the inset engine

pub mod polygon;
pub mod segment;

pub use polygon::*;
pub use segment::*;

// Re-export commonly used types
pub use glam::{Vec2, Vec3};

/// Errors for degenerate geometric input. Callers that can skip the
/// offending edge or cell recover locally instead of propagating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeomError {
    /// Segment endpoints coincide, so it has no direction.
    #[error("segment endpoints coincide")]
    DegenerateSegment,
    /// Polygon has fewer than three points.
    #[error("polygon needs at least 3 points, got {0}")]
    DegeneratePolygon(usize),
}
