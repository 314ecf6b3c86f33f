//! Spawn-site selection over the street graph.
//!
//! Monsters start far from the player and from each other. Given the
//! precomputed all-pairs shortest-path table for the subdivision
//! vertices, the selector repeatedly picks the candidate vertex that
//! maximizes its minimum graph distance to everything already occupied
//! (farthest-point placement). True max-min dispersion is NP-hard; the
//! greedy is deterministic and stays stable as earlier picks are fixed,
//! which matters because the spawn count is a runtime knob.

use glam::Vec2;

/// Errors from spawn-site selection. `Disconnected` is fatal for the
/// caller: falling back to an arbitrary vertex would break the
/// dispersion guarantee gameplay balance relies on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpawnError {
    #[error("distance table is not square: {entries} entries for {rows} rows")]
    MalformedTable { rows: usize, entries: usize },
    #[error("vertex index {index} out of range for table of {size} vertices")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("no reachable candidate left at selection {iteration}")]
    Disconnected { iteration: usize },
}

/// All-pairs shortest-path costs between subdivision vertices.
///
/// Row-major square matrix; `f32::INFINITY` marks an unreachable pair.
/// Symmetry is not assumed (directed street graphs are fine). Read-only
/// input, produced by the external routing collaborator.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    size: usize,
    costs: Vec<f32>,
}

impl DistanceTable {
    /// Build a table from row-major costs for `size` vertices.
    pub fn new(size: usize, costs: Vec<f32>) -> Result<Self, SpawnError> {
        if costs.len() != size * size {
            return Err(SpawnError::MalformedTable {
                rows: size,
                entries: costs.len(),
            });
        }
        Ok(Self { size, costs })
    }

    /// Build a table from per-row costs with `None` for unreachable pairs.
    pub fn from_rows(rows: Vec<Vec<Option<f32>>>) -> Result<Self, SpawnError> {
        let size = rows.len();
        let mut costs = Vec::with_capacity(size * size);
        for row in &rows {
            if row.len() != size {
                return Err(SpawnError::MalformedTable {
                    rows: size,
                    entries: row.len(),
                });
            }
            costs.extend(row.iter().map(|c| c.unwrap_or(f32::INFINITY)));
        }
        Ok(Self { size, costs })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest-path cost from vertex `from` to vertex `to`.
    pub fn cost(&self, from: usize, to: usize) -> f32 {
        self.costs[from * self.size + to]
    }
}

/// Greedily pick `count` spawn vertices that maximize the minimum graph
/// distance to the occupied set.
///
/// The occupied set starts as `seed_occupied` (typically the player's
/// vertex) and grows by each pick. Per iteration, every not-yet-chosen
/// candidate is scored by its minimum distance to the occupied set,
/// with unreachable pairs treated as +infinity so any finite distance
/// wins; the candidate with the strictly largest finite score is
/// chosen, ties resolved by enumeration order (first wins). If no
/// candidate has a finite score the graph cannot supply enough spawn
/// diversity and the whole call fails.
pub fn select_spawn_points(
    candidates: &[usize],
    seed_occupied: &[usize],
    table: &DistanceTable,
    count: usize,
) -> Result<Vec<usize>, SpawnError> {
    for &index in candidates.iter().chain(seed_occupied) {
        if index >= table.size() {
            return Err(SpawnError::IndexOutOfRange {
                index,
                size: table.size(),
            });
        }
    }

    let mut chosen: Vec<usize> = Vec::with_capacity(count);
    for iteration in 0..count {
        let mut best: Option<(usize, f32)> = None;
        for &v in candidates.iter().filter(|&v| !chosen.contains(v)) {
            let min_dist = seed_occupied
                .iter()
                .chain(&chosen)
                .map(|&o| table.cost(v, o))
                .fold(f32::INFINITY, f32::min);
            if min_dist.is_finite() && best.map_or(true, |(_, d)| min_dist > d) {
                best = Some((v, min_dist));
            }
        }
        match best {
            Some((v, _)) => chosen.push(v),
            None => return Err(SpawnError::Disconnected { iteration }),
        }
    }
    Ok(chosen)
}

/// Index of the vertex closest to `target`, or `None` for an empty
/// catalog. Used to pick the player's start vertex (nearest the city
/// center).
pub fn nearest_vertex(vertices: &[Vec2], target: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, v) in vertices.iter().enumerate() {
        let d = v.distance_squared(target);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Path graph 0-1-2-3-4 with unit edges.
    fn path_table() -> DistanceTable {
        let mut costs = Vec::new();
        for i in 0_i32..5 {
            for j in 0_i32..5 {
                costs.push((i - j).abs() as f32);
            }
        }
        DistanceTable::new(5, costs).unwrap()
    }

    #[test]
    fn rejects_non_square_table() {
        let err = DistanceTable::new(3, vec![0.0; 8]).unwrap_err();
        assert_eq!(err, SpawnError::MalformedTable { rows: 3, entries: 8 });
    }

    #[test]
    fn farthest_point_on_path_graph() {
        // Seed {0}: farthest is 4, then 2 (distance 2 to both 0 and 4).
        let table = path_table();
        let picks = select_spawn_points(&[1, 2, 3, 4], &[0], &table, 2).unwrap();
        assert_eq!(picks, vec![4, 2]);
    }

    #[test]
    fn tie_resolves_to_first_candidate() {
        // Vertices 1 and 3 are both at distance 1 from the seed set
        // {0, 2, 4}; enumeration order decides.
        let table = path_table();
        let picks = select_spawn_points(&[1, 3], &[0, 2, 4], &table, 1).unwrap();
        assert_eq!(picks, vec![1]);
        let picks = select_spawn_points(&[3, 1], &[0, 2, 4], &table, 1).unwrap();
        assert_eq!(picks, vec![3]);
    }

    #[test]
    fn min_distances_never_increase_as_occupied_grows() {
        let table = path_table();
        let score = |occupied: &[usize], v: usize| {
            occupied
                .iter()
                .map(|&o| table.cost(v, o))
                .fold(f32::INFINITY, f32::min)
        };
        let before = score(&[0], 3);
        let after = score(&[0, 4], 3);
        assert!(after <= before);
    }

    #[test]
    fn disconnected_graph_is_fatal() {
        let table = DistanceTable::new(
            2,
            vec![0.0, f32::INFINITY, f32::INFINITY, 0.0],
        )
        .unwrap();
        let err = select_spawn_points(&[1], &[0], &table, 1).unwrap_err();
        assert_eq!(err, SpawnError::Disconnected { iteration: 0 });
    }

    #[test]
    fn out_of_range_candidate_rejected_up_front() {
        let table = path_table();
        let err = select_spawn_points(&[9], &[0], &table, 1).unwrap_err();
        assert_eq!(err, SpawnError::IndexOutOfRange { index: 9, size: 5 });
    }

    #[test]
    fn nearest_vertex_to_origin() {
        let vertices = vec![
            Vec2::new(5.0, 5.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(-3.0, 0.5),
        ];
        assert_eq!(nearest_vertex(&vertices, Vec2::ZERO), Some(1));
        assert_eq!(nearest_vertex(&[], Vec2::ZERO), None);
    }
}
