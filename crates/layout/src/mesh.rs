//! Flat surface meshes for streets, plots, and the ground disk.
//!
//! Simple fan/ring triangulation only; topology beyond that (holes,
//! self-intersection repair) is out of scope for this pass.

use geom::Polygon;
use glam::{Vec2, Vec3};
use serde::Serialize;

/// What a surface mesh represents, so the instantiator can assign the
/// right material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SurfaceKind {
    /// Street ring between a cell boundary and its inset ring.
    Street,
    /// Plot interior inside a street ring.
    Plot,
    /// Ground disk around the whole city.
    Ground,
}

/// A flat triangulated surface.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceMesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub surface: SurfaceKind,
}

fn lift(p: Vec2, z: f32) -> Vec3 {
    Vec3::new(p.x, p.y, z)
}

/// Ring of quads between a cell boundary and its street-front inset,
/// one quad per edge, each split into two triangles.
pub fn street_ring(outer: &Polygon, inner: &Polygon) -> SurfaceMesh {
    let n = outer.len() as u32;
    let mut vertices = Vec::with_capacity(2 * n as usize);
    vertices.extend(outer.points().iter().map(|&p| lift(p, 0.0)));
    vertices.extend(inner.points().iter().map(|&p| lift(p, 0.0)));

    let mut indices = Vec::with_capacity(6 * n as usize);
    for i in 0..n {
        let prev = (i + n - 1) % n;
        // Quad (prev, i, n+i, n+prev)
        indices.extend([prev, i, n + i]);
        indices.extend([prev, n + i, n + prev]);
    }
    SurfaceMesh {
        vertices,
        indices,
        surface: SurfaceKind::Street,
    }
}

/// Fan triangulation of a plot interior.
pub fn plot_interior(ring: &Polygon) -> SurfaceMesh {
    let vertices: Vec<Vec3> = ring.points().iter().map(|&p| lift(p, 0.0)).collect();
    let mut indices = Vec::with_capacity(3 * (vertices.len() - 2));
    for i in 1..vertices.len() as u32 - 1 {
        indices.extend([0, i, i + 1]);
    }
    SurfaceMesh {
        vertices,
        indices,
        surface: SurfaceKind::Plot,
    }
}

/// Regular 16-gon disk around the city, slightly below street level so
/// it never z-fights the plots.
pub fn ground_disk(radius: f32) -> SurfaceMesh {
    const SIDES: u32 = 16;
    let step = std::f32::consts::TAU / SIDES as f32;
    let vertices: Vec<Vec3> = (0..SIDES)
        .map(|i| {
            let a = step * i as f32;
            Vec3::new(a.sin() * radius, a.cos() * radius, -0.1)
        })
        .collect();
    let mut indices = Vec::with_capacity(3 * (SIDES as usize - 2));
    for i in 1..SIDES - 1 {
        indices.extend([0, i, i + 1]);
    }
    SurfaceMesh {
        vertices,
        indices,
        surface: SurfaceKind::Ground,
    }
}
