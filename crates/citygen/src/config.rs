//! Generator configuration. Loaded from citygen.ron at startup.
//!
//! Every knob is a named, typed field with a documented default; a
//! missing key falls back to its default instead of silently skipping
//! a feature.

use layout::Prototype;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Generator settings. Loaded from `citygen.ron` in the current
/// directory unless another path is given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// City map JSON (vertices, regions, external boundary).
    #[serde(default = "default_city_map")]
    pub city_map: PathBuf,
    /// Routing JSON with the all-pairs shortest-path matrix.
    #[serde(default = "default_routing")]
    pub routing: PathBuf,
    /// Output JSON with all placements and meshes.
    #[serde(default = "default_placements")]
    pub placements: PathBuf,

    /// Build the tower-and-wall perimeter.
    #[serde(default = "default_true")]
    pub build_defense_wall: bool,
    /// Build the ground disk around the city.
    #[serde(default = "default_true")]
    pub build_ground: bool,
    /// Build streets, plots, fences, and houses per cell.
    #[serde(default = "default_true")]
    pub build_streets: bool,

    /// Number of monsters to spread over the street graph.
    #[serde(default = "default_num_monsters")]
    pub num_monsters: usize,
    /// RNG seed for house shuffling. None = nondeterministic.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Inward offset of the street ring from each cell boundary.
    #[serde(default = "default_street_offset")]
    pub street_offset: f32,
    /// Target gap between curb fence sections.
    #[serde(default = "default_curb_gap")]
    pub curb_gap: f32,
    /// Gap between houses along a building front.
    #[serde(default = "default_house_gap")]
    pub house_gap: f32,

    /// Prototype placed at each cell centroid.
    #[serde(default = "default_tree")]
    pub tree: String,
    /// Monster prototype placed on the selected spawn vertices.
    #[serde(default = "default_monster")]
    pub monster: String,
    /// Tower prototype on each boundary vertex.
    #[serde(default = "default_tower")]
    pub tower: String,
    /// Door prototype, two per tower.
    #[serde(default = "default_door")]
    pub door: String,
    /// Wall section prototype along boundary edges.
    #[serde(default = "default_wall")]
    pub wall: Prototype,
    /// Curb fence prototype along street rings.
    #[serde(default = "default_curb")]
    pub curb: Prototype,
    /// Back-wall prototype along plot envelopes.
    #[serde(default = "default_back_wall")]
    pub back_wall: Prototype,
    /// House prototypes packed along building fronts.
    #[serde(default = "default_houses")]
    pub houses: Vec<Prototype>,
}

fn default_city_map() -> PathBuf {
    PathBuf::from("city.graph.json")
}
fn default_routing() -> PathBuf {
    PathBuf::from("city.AI.json")
}
fn default_placements() -> PathBuf {
    PathBuf::from("city.placements.json")
}
fn default_true() -> bool {
    true
}
fn default_num_monsters() -> usize {
    4
}
fn default_street_offset() -> f32 {
    1.0
}
fn default_curb_gap() -> f32 {
    0.1
}
fn default_house_gap() -> f32 {
    1.0
}
fn default_tree() -> String {
    "Tree".into()
}
fn default_monster() -> String {
    "Monster".into()
}
fn default_tower() -> String {
    "StoneTower".into()
}
fn default_door() -> String {
    "StoneTowerDoor".into()
}
fn default_wall() -> Prototype {
    Prototype::new("StoneWall", 2.0)
}
fn default_curb() -> Prototype {
    Prototype::new("Curb", 0.5)
}
fn default_back_wall() -> Prototype {
    Prototype::new("WallHouse", 2.0)
}
fn default_houses() -> Vec<Prototype> {
    vec![
        Prototype::new("House3", 4.0),
        Prototype::new("House4", 5.0),
        Prototype::new("House5", 6.0),
        Prototype::new("House6", 4.5),
        Prototype::new("House7", 7.0),
    ]
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            city_map: default_city_map(),
            routing: default_routing(),
            placements: default_placements(),
            build_defense_wall: true,
            build_ground: true,
            build_streets: true,
            num_monsters: default_num_monsters(),
            seed: None,
            street_offset: default_street_offset(),
            curb_gap: default_curb_gap(),
            house_gap: default_house_gap(),
            tree: default_tree(),
            monster: default_monster(),
            tower: default_tower(),
            door: default_door(),
            wall: default_wall(),
            curb: default_curb(),
            back_wall: default_back_wall(),
            houses: default_houses(),
        }
    }
}

impl GenConfig {
    /// Load config from `path`. If the file is missing or invalid,
    /// returns the defaults with a warning.
    pub fn load(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_pass() {
        let c = GenConfig::default();
        assert!(c.build_defense_wall && c.build_ground && c.build_streets);
        assert_eq!(c.num_monsters, 4);
        assert_eq!(c.houses.len(), 5);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let c: GenConfig = ron::from_str("(num_monsters: 9)").unwrap();
        assert_eq!(c.num_monsters, 9);
        assert_eq!(c.street_offset, 1.0);
        assert!(c.build_streets);
        assert_eq!(c.tower, "StoneTower");
    }
}
