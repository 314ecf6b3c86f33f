//! Polygons and the inset engine.
//!
//! Cells from the planar subdivision arrive as ordered boundary loops.
//! The inset engine shrinks a loop toward its centroid to carve street
//! rings and building plots. This is a per-vertex clamp toward the
//! centroid, not a true polygon offset (Minkowski erosion): for convex
//! or mildly non-convex cells it yields a simple ring, while highly
//! concave or very small cells may still produce overlapping edges.
//! That is an accepted approximation of this pass.

use glam::Vec2;

use crate::GeomError;

/// An ordered cyclic boundary loop. Edge `i` connects point `i` to
/// point `(i + 1) % n`. Orientation is not guaranteed; consumers must
/// not assume a winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    /// Build a polygon from its boundary points. Requires n >= 3.
    pub fn new(points: Vec<Vec2>) -> Result<Self, GeomError> {
        if points.len() < 3 {
            return Err(GeomError::DegeneratePolygon(points.len()));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of the boundary points. Recomputed on demand.
    pub fn centroid(&self) -> Vec2 {
        let sum: Vec2 = self.points.iter().copied().sum();
        sum / self.points.len() as f32
    }

    /// Iterate the cyclic edges `(points[i], points[(i + 1) % n])`.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shrink the polygon toward its centroid by `offset`.
    ///
    /// Each point moves `offset` along its point-to-centroid direction.
    /// A point already closer than `offset` to the centroid is left
    /// unmoved, which prevents inversion on very small cells.
    pub fn inset(&self, offset: f32) -> Polygon {
        let centroid = self.centroid();
        let points = self
            .points
            .iter()
            .map(|&p| inset_point(p, centroid, offset))
            .collect();
        Polygon { points }
    }

    /// The building-front ring at `offset` and the back-fence envelope
    /// at `offset * 1.5`.
    ///
    /// Both rings are derived independently from this polygon, never
    /// from each other, so the per-vertex clamp artifact does not
    /// compound.
    pub fn building_rings(&self, offset: f32) -> (Polygon, Polygon) {
        (self.inset(offset), self.inset(offset * 1.5))
    }
}

/// `p` moved toward `centroid` by `offset`; unchanged when `p` is
/// already closer than `offset` to the centroid.
pub fn inset_point(p: Vec2, centroid: Vec2, offset: f32) -> Vec2 {
    let to_center = centroid - p;
    let dist = to_center.length();
    if dist < offset {
        p
    } else {
        p + to_center * (offset / dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn polygon_rejects_fewer_than_three_points() {
        let r = Polygon::new(vec![Vec2::ZERO, Vec2::X]);
        assert_eq!(r, Err(GeomError::DegeneratePolygon(2)));
    }

    #[test]
    fn centroid_of_square() {
        assert_eq!(unit_square().centroid(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn edges_are_cyclic() {
        let square = unit_square();
        let edges: Vec<_> = square.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Vec2::new(0.0, 4.0), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn inset_points_lie_between_boundary_and_centroid() {
        let square = unit_square();
        let centroid = square.centroid();
        let inner = square.inset(0.5);
        for (&orig, &moved) in square.points().iter().zip(inner.points()) {
            let before = orig.distance(centroid);
            let after = moved.distance(centroid);
            assert!(after < before, "point did not move inward");
            assert!(after > 0.0, "point collapsed onto the centroid");
            assert!((before - after - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn inset_clamps_points_near_centroid() {
        let square = unit_square();
        // Offset larger than every vertex-to-centroid distance: nothing moves.
        let inner = square.inset(10.0);
        assert_eq!(inner.points(), square.points());
    }

    #[test]
    fn building_rings_are_independent() {
        let square = unit_square();
        let (front, envelope) = square.building_rings(1.0);
        assert_eq!(front, square.inset(1.0));
        assert_eq!(envelope, square.inset(1.5));
    }
}
