//! City map and routing data input.
//!
//! The planar subdivision arrives as JSON produced by the upstream map
//! generator: a vertex catalog, cell polygons as vertex-index lists,
//! and the external boundary loop. The routing collaborator supplies
//! the all-pairs shortest-path matrix, with `null` for unreachable
//! pairs.

use anyhow::{bail, Context, Result};
use geom::Polygon;
use glam::Vec2;
use layout::DistanceTable;
use serde::Deserialize;
use std::path::Path;

/// The planar subdivision the generator builds on.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityMap {
    #[serde(default)]
    pub name: Option<String>,
    /// Ordered vertex catalog, 2D positions.
    pub vertices: Vec<Vec2>,
    /// Cell polygons as vertex indices.
    pub regions: Vec<Vec<usize>>,
    /// External boundary loop as vertex indices.
    pub external_points: Vec<usize>,
}

impl CityMap {
    /// Load and validate a city map from JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading city map {:?}", path))?;
        let map: CityMap = serde_json::from_str(&data)
            .with_context(|| format!("parsing city map {:?}", path))?;
        map.validate()?;
        Ok(map)
    }

    /// Reject out-of-range indices up front instead of attempting
    /// partial work.
    pub fn validate(&self) -> Result<()> {
        let n = self.vertices.len();
        for (r, region) in self.regions.iter().enumerate() {
            if let Some(&bad) = region.iter().find(|&&i| i >= n) {
                bail!("region {} references vertex {} of {}", r, bad, n);
            }
        }
        if let Some(&bad) = self.external_points.iter().find(|&&i| i >= n) {
            bail!("external boundary references vertex {} of {}", bad, n);
        }
        Ok(())
    }

    /// Cell polygons in vertex order. Regions with fewer than three
    /// corners are rejected.
    pub fn cell_polygons(&self) -> Result<Vec<Polygon>> {
        self.regions
            .iter()
            .enumerate()
            .map(|(r, region)| {
                let points = region.iter().map(|&i| self.vertices[i]).collect();
                Polygon::new(points).with_context(|| format!("region {}", r))
            })
            .collect()
    }

    /// Vertices not on the external boundary: the monster spawn
    /// candidates.
    pub fn internal_points(&self) -> Vec<usize> {
        (0..self.vertices.len())
            .filter(|i| !self.external_points.contains(i))
            .collect()
    }
}

/// Precomputed routing data for spawn dispersal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingData {
    /// Row-major shortest-path costs; `null` marks unreachable pairs.
    pub shortest_path_matrix: Vec<Vec<Option<f32>>>,
}

impl RoutingData {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading routing data {:?}", path))?;
        serde_json::from_str(&data).with_context(|| format!("parsing routing data {:?}", path))
    }

    /// Convert to a validated distance table.
    pub fn distance_table(self) -> Result<DistanceTable> {
        DistanceTable::from_rows(self.shortest_path_matrix)
            .context("shortest path matrix is not square")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP_JSON: &str = r#"{
        "name": "testville",
        "vertices": [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [2.0, 2.0]],
        "regions": [[0, 1, 4], [1, 2, 4]],
        "externalPoints": [0, 1, 2, 3]
    }"#;

    #[test]
    fn parses_map_json() {
        let map: CityMap = serde_json::from_str(MAP_JSON).unwrap();
        assert_eq!(map.name.as_deref(), Some("testville"));
        assert_eq!(map.vertices.len(), 5);
        assert_eq!(map.regions.len(), 2);
        assert_eq!(map.external_points, vec![0, 1, 2, 3]);
        assert!(map.validate().is_ok());
    }

    #[test]
    fn internal_points_exclude_boundary() {
        let map: CityMap = serde_json::from_str(MAP_JSON).unwrap();
        assert_eq!(map.internal_points(), vec![4]);
    }

    #[test]
    fn cell_polygons_use_vertex_positions() {
        let map: CityMap = serde_json::from_str(MAP_JSON).unwrap();
        let cells = map.cell_polygons().unwrap();
        assert_eq!(cells[0].points()[2], Vec2::new(2.0, 2.0));
    }

    #[test]
    fn out_of_range_region_index_is_rejected() {
        let map: CityMap = serde_json::from_str(
            r#"{"vertices": [[0.0, 0.0]], "regions": [[0, 7, 0]], "externalPoints": []}"#,
        )
        .unwrap();
        assert!(map.validate().is_err());
    }

    #[test]
    fn routing_nulls_become_unreachable() {
        let routing: RoutingData = serde_json::from_str(
            r#"{"shortestPathMatrix": [[0.0, null], [1.0, 0.0]]}"#,
        )
        .unwrap();
        let table = routing.distance_table().unwrap();
        assert!(table.cost(0, 1).is_infinite());
        assert_eq!(table.cost(1, 0), 1.0);
    }
}
