//! Mixed-item segment packing.
//!
//! Chooses how many of each house prototype to put along a building
//! front so the row fills as much of the edge as possible, then lays
//! the chosen multiset out in shuffled order with the leftover length
//! spread evenly between instances.
//!
//! The solver is a bounded multiple-choice knapsack over a capacity
//! discretized at 0.1 world units. Value equals weight (footprint +
//! gap), so the objective is simply total packed length.

use geom::{direction, segment_rotation};
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Catalog, Placement};

/// Capacity discretization: tenths of a world unit.
const SCALE: f32 = 10.0;
/// Repetition cap per catalog item. The last item in catalog order is
/// exempt; see [`pack`].
const MAX_REPEATS: usize = 20;

/// Result of packing one segment: per-prototype repetition counts plus
/// aggregate length and instance count. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingSolution {
    /// `(prototype name, count)` for every prototype with a non-zero
    /// count, ordered by name.
    counts: Vec<(String, usize)>,
    /// Total packed length in scaled (0.1 unit) ticks.
    packed_scaled: u32,
    /// Total number of instances across all prototypes.
    total_items: usize,
}

impl PackingSolution {
    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    /// Total packed length in world units.
    pub fn packed_length(&self) -> f32 {
        self.packed_scaled as f32 / SCALE
    }

    pub fn packed_scaled(&self) -> u32 {
        self.packed_scaled
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Compute a near-optimal multiset of catalog items whose combined
/// `footprint + gap` fills `segment_length` as fully as possible.
///
/// Dynamic program over integer capacities `0..=trunc(length * 10)`;
/// items are visited in catalog order and each may repeat at most
/// [`MAX_REPEATS`] times, except the last item, which is uncapped. When
/// the cap would be exceeded at some capacity, that candidate is
/// discarded and the capacity sweep for the item stops. The last-item
/// exemption is deliberate; the cap tests below pin its observable
/// consequences.
///
/// An empty catalog, or one whose smallest item outweighs the segment,
/// yields an empty solution. That is a recoverable condition: the
/// caller simply leaves the segment unfilled.
pub fn pack(segment_length: f32, gap: f32, catalog: &Catalog) -> PackingSolution {
    let items = catalog.items();
    let capacity = (segment_length * SCALE) as usize;
    let weights: Vec<usize> = items
        .iter()
        .map(|p| ((p.footprint + gap) * SCALE) as usize)
        .collect();

    // sack[c] = best value achievable at exactly capacity c, with the
    // per-item counts that achieve it.
    let mut sack: Vec<(usize, Vec<usize>)> = vec![(0, vec![0; items.len()]); capacity + 1];

    for (i, &w) in weights.iter().enumerate() {
        if w == 0 || w > capacity {
            continue;
        }
        let capped = i != items.len() - 1;
        for c in w..=capacity {
            let (without_value, without_counts) = &sack[c - w];
            let trial = without_value + w;
            if sack[c].0 >= trial {
                continue;
            }
            if capped && without_counts[i] >= MAX_REPEATS {
                // Cap hit: discard the candidate and stop this item's sweep.
                break;
            }
            let mut counts = without_counts.clone();
            counts[i] += 1;
            sack[c] = (trial, counts);
        }
    }

    let (_, bagged) = &sack[capacity];
    let packed_scaled = bagged
        .iter()
        .zip(&weights)
        .map(|(&count, &w)| (count * w) as u32)
        .sum();
    let total_items = bagged.iter().sum();
    let mut counts: Vec<(String, usize)> = bagged
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(i, &count)| (items[i].name.clone(), count))
        .collect();
    counts.sort_by(|a, b| a.0.cmp(&b.0));

    PackingSolution {
        counts,
        packed_scaled,
        total_items,
    }
}

/// Lay a packing solution out along the segment `p1 -> p2`.
///
/// The per-item counts expand to a flat instance list, shuffled so
/// identical houses do not clump, and the residual slack
/// `(trunc(length·10) − packed·10) / 10` is split evenly between
/// instances as extra gap. Positions are instance origins: the walk
/// starts at `p1` and advances by `footprint + gap + slack share` per
/// instance. All instances share the segment's rotation.
pub fn materialize<R: Rng>(
    solution: &PackingSolution,
    p1: Vec2,
    p2: Vec2,
    gap: f32,
    catalog: &Catalog,
    rng: &mut R,
) -> Vec<Placement> {
    let Ok(dir) = direction(p1, p2) else {
        return Vec::new();
    };
    if solution.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::with_capacity(solution.total_items);
    for (name, count) in &solution.counts {
        order.extend(std::iter::repeat(name.as_str()).take(*count));
    }
    order.shuffle(rng);

    let length = p1.distance(p2);
    let residual = ((length * SCALE) as u32).saturating_sub(solution.packed_scaled);
    let slack = (residual as f32 / SCALE) / order.len() as f32;
    let rotation = segment_rotation(dir);

    let mut placements = Vec::with_capacity(order.len());
    let mut cursor = p1;
    for name in order {
        let Some(footprint) = catalog.footprint(name) else {
            continue;
        };
        placements.push(Placement::new(name, cursor, rotation));
        cursor += dir * (footprint + gap + slack);
    }
    placements
}
