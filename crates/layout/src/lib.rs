//! Placement algorithms for the city generator.
//!
//! Turns the polygonal cells of a planar subdivision into concrete
//! object placements: fences and walls distributed along edges, houses
//! packed along building fronts, trees at cell centers, towers on the
//! defense perimeter, and spawn sites spread apart over the street graph.

pub mod catalog;
pub mod distribute;
pub mod district;
pub mod mesh;
pub mod pack;
pub mod spawn;

pub use catalog::*;
pub use distribute::*;
pub use district::*;
pub use mesh::*;
pub use pack::*;
pub use spawn::*;

use glam::Vec2;
use serde::Serialize;

/// A single object placement handed to the scene instantiator.
///
/// The core never creates renderable objects itself; it only reports
/// which prototype goes where, at which rotation about the up axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// Prototype name in the external asset library.
    pub prototype: String,
    /// Position in the city plane.
    pub position: Vec2,
    /// Rotation about the up axis, radians.
    pub rotation: f32,
}

impl Placement {
    pub fn new(prototype: impl Into<String>, position: Vec2, rotation: f32) -> Self {
        Self {
            prototype: prototype.into(),
            position,
            rotation,
        }
    }
}
