//! District and defense-wall build passes.
//!
//! Pure functions of their inputs: cells and style in, placements and
//! surface meshes out. Instantiating renderable objects from the
//! resulting placements is the scene collaborator's job.

use geom::{signed_angle_to_axis, Polygon};
use glam::Vec2;
use rand::Rng;

use crate::{
    distribute_uniform, ground_disk, materialize, pack, plot_interior, street_ring, Catalog,
    Placement, Prototype, SurfaceMesh,
};

/// Multiplier from the street-front offset to the building-front
/// offset: houses sit well behind the curb line.
const BUILDING_OFFSET_FACTOR: f32 = 6.0;

/// How a district cell is dressed.
#[derive(Debug, Clone)]
pub struct DistrictStyle {
    /// Inward offset of the street ring from the cell boundary.
    pub street_offset: f32,
    /// Target gap between curb fence sections.
    pub curb_gap: f32,
    /// Gap between houses along a building front.
    pub house_gap: f32,
    /// Prototype placed once at the cell centroid.
    pub tree: String,
    /// Curb fence prototype distributed along the street ring.
    pub curb: Prototype,
    /// Back-wall prototype distributed along the plot envelope.
    pub back_wall: Prototype,
    /// House prototypes packed along building fronts.
    pub houses: Catalog,
}

/// How the city perimeter is fortified.
#[derive(Debug, Clone)]
pub struct WallStyle {
    /// Tower prototype placed on every boundary vertex.
    pub tower: String,
    /// Door prototype placed twice per tower, one per incident wall.
    pub door: String,
    /// Wall section tightly packed along every boundary edge.
    pub wall: Prototype,
}

/// Output of one build pass.
#[derive(Debug, Default)]
pub struct DistrictLayout {
    pub placements: Vec<Placement>,
    pub meshes: Vec<SurfaceMesh>,
}

impl DistrictLayout {
    fn merge(&mut self, other: DistrictLayout) {
        self.placements.extend(other.placements);
        self.meshes.extend(other.meshes);
    }
}

/// Lay out a single district cell.
///
/// Carves the street ring, fills the plot interior, puts a tree at the
/// centroid, fences the curb line, packs houses along the building
/// front at `street_offset * 6`, and closes the plot with back walls on
/// the envelope ring at 1.5 times that. Degenerate edges contribute
/// nothing.
pub fn build_district<R: Rng>(
    cell: &Polygon,
    style: &DistrictStyle,
    rng: &mut R,
) -> DistrictLayout {
    let mut layout = DistrictLayout::default();

    let street = cell.inset(style.street_offset);
    layout.meshes.push(street_ring(cell, &street));
    layout.meshes.push(plot_interior(&street));

    layout
        .placements
        .push(Placement::new(style.tree.clone(), cell.centroid(), 0.0));

    for (a, b) in street.edges() {
        for (pos, rot) in distribute_uniform(a, b, style.curb.footprint, style.curb_gap, false) {
            layout
                .placements
                .push(Placement::new(style.curb.name.clone(), pos, rot));
        }
    }

    let (front, envelope) = cell.building_rings(style.street_offset * BUILDING_OFFSET_FACTOR);
    for (a, b) in front.edges() {
        let solution = pack(a.distance(b), style.house_gap, &style.houses);
        layout
            .placements
            .extend(materialize(&solution, a, b, style.house_gap, &style.houses, rng));
    }
    for (a, b) in envelope.edges() {
        for (pos, rot) in distribute_uniform(a, b, style.back_wall.footprint, 0.0, true) {
            layout
                .placements
                .push(Placement::new(style.back_wall.name.clone(), pos, rot));
        }
    }

    log::debug!(
        "cell with {} corners: {} placements",
        cell.len(),
        layout.placements.len()
    );
    layout
}

/// Lay out every cell of the subdivision.
pub fn build_districts<R: Rng>(
    cells: &[Polygon],
    style: &DistrictStyle,
    rng: &mut R,
) -> DistrictLayout {
    let mut layout = DistrictLayout::default();
    for cell in cells {
        layout.merge(build_district(cell, style, rng));
    }
    log::info!(
        "laid out {} cells: {} placements, {} meshes",
        cells.len(),
        layout.placements.len(),
        layout.meshes.len()
    );
    layout
}

/// Fortify the external boundary loop.
///
/// Per boundary vertex: a tower rotated to the mean of its two incident
/// wall angles, and one door per incident wall at that wall's angle.
/// The right-hand angle is lifted by a full turn when it falls below
/// the left one, so the mean always lands between them. Wall sections
/// are tightly packed (gap 0) along every boundary edge.
pub fn build_defense_wall(
    vertices: &[Vec2],
    boundary: &[usize],
    style: &WallStyle,
) -> Vec<Placement> {
    let n = boundary.len();
    let mut placements = Vec::new();
    for i in 0..n {
        let v1 = vertices[boundary[(i + n - 1) % n]];
        let v2 = vertices[boundary[i]];
        let v3 = vertices[boundary[(i + 1) % n]];

        let ang_l = signed_angle_to_axis(v1 - v2, Vec2::X);
        let mut ang_r = signed_angle_to_axis(v3 - v2, Vec2::X);
        if ang_l > ang_r {
            ang_r += std::f32::consts::TAU;
        }

        placements.push(Placement::new(style.tower.clone(), v2, (ang_l + ang_r) * 0.5));
        placements.push(Placement::new(style.door.clone(), v2, ang_l));
        placements.push(Placement::new(style.door.clone(), v2, ang_r));

        for (pos, rot) in distribute_uniform(v1, v2, style.wall.footprint, 0.0, false) {
            placements.push(Placement::new(style.wall.name.clone(), pos, rot));
        }
    }
    log::info!("defense wall: {} towers, {} placements", n, placements.len());
    placements
}

/// Ground disk radius: 50 world units past the farthest vertex.
pub fn ground_radius(vertices: &[Vec2]) -> f32 {
    let max = vertices
        .iter()
        .map(|v| v.length())
        .fold(0.0_f32, f32::max);
    50.0 + max
}

/// Ground pass: one disk mesh around the whole city.
pub fn build_ground(vertices: &[Vec2]) -> SurfaceMesh {
    ground_disk(ground_radius(vertices))
}
