//! City generator binary.
//!
//! Reads the planar subdivision and routing data, runs the layout
//! passes, and writes every placement and surface mesh to a JSON file
//! for the scene instantiator to consume.

mod config;
mod map;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use layout::{
    build_defense_wall, build_districts, build_ground, nearest_vertex, select_spawn_points,
    Catalog, DistrictStyle, Placement, SurfaceMesh, WallStyle,
};

use crate::config::GenConfig;
use crate::map::{CityMap, RoutingData};

/// Everything the generator hands to the scene instantiator.
#[derive(Debug, Serialize)]
struct CityPlacements {
    name: Option<String>,
    player_vertex: Option<usize>,
    monster_vertices: Vec<usize>,
    placements: Vec<Placement>,
    meshes: Vec<SurfaceMesh>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("citygen.ron"));
    let config = GenConfig::load(&config_path);

    let start = Instant::now();
    let map = CityMap::load(&config.city_map)?;
    log::info!(
        "loaded {}: {} vertices, {} regions, {} boundary points",
        map.name.as_deref().unwrap_or("city"),
        map.vertices.len(),
        map.regions.len(),
        map.external_points.len()
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut placements = Vec::new();
    let mut meshes = Vec::new();

    if config.build_streets {
        let style = DistrictStyle {
            street_offset: config.street_offset,
            curb_gap: config.curb_gap,
            house_gap: config.house_gap,
            tree: config.tree.clone(),
            curb: config.curb.clone(),
            back_wall: config.back_wall.clone(),
            houses: Catalog::new(config.houses.clone()),
        };
        let cells = map.cell_polygons()?;
        let layout = build_districts(&cells, &style, &mut rng);
        placements.extend(layout.placements);
        meshes.extend(layout.meshes);
    }

    if config.build_defense_wall {
        let style = WallStyle {
            tower: config.tower.clone(),
            door: config.door.clone(),
            wall: config.wall.clone(),
        };
        placements.extend(build_defense_wall(&map.vertices, &map.external_points, &style));
    }

    if config.build_ground {
        meshes.push(build_ground(&map.vertices));
    }

    let player_vertex = nearest_vertex(&map.vertices, Vec2::ZERO);
    let mut monster_vertices = Vec::new();
    if config.num_monsters > 0 {
        let player = player_vertex.context("city map has no vertices")?;
        let table = RoutingData::load(&config.routing)?.distance_table()?;
        monster_vertices =
            select_spawn_points(&map.internal_points(), &[player], &table, config.num_monsters)
                .context("choosing monster spawn points")?;
        log::info!("monster spawn vertices: {:?}", monster_vertices);
        for &v in &monster_vertices {
            placements.push(Placement::new(config.monster.clone(), map.vertices[v], 0.0));
        }
    }

    let out = CityPlacements {
        name: map.name.clone(),
        player_vertex,
        monster_vertices,
        placements,
        meshes,
    };
    let json = serde_json::to_string_pretty(&out).context("serializing placements")?;
    std::fs::write(&config.placements, json)
        .with_context(|| format!("writing {:?}", config.placements))?;

    log::info!(
        "wrote {} placements and {} meshes to {:?} in {:.2?}",
        out.placements.len(),
        out.meshes.len(),
        config.placements,
        start.elapsed()
    );
    Ok(())
}
