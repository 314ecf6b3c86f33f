//! Uniform object distribution along a segment.
//!
//! Places identically-rotated copies of one prototype along an edge:
//! curb fences around street rings, stone wall sections along the
//! defense perimeter, back walls behind plots.

use geom::{direction, segment_rotation};
use glam::Vec2;

/// Place `footprint`-sized instances uniformly between `p1` and `p2`.
///
/// Returns `(position, rotation)` per instance; positions are instance
/// centers along the segment.
///
/// - Degenerate segment or `footprint > length`: empty.
/// - `gap > 0`: instance count is `round(length / (footprint + gap))`
///   and the step is `length / count`, so the configured gap is a
///   target that gets stretched or compressed until the run sits
///   symmetrically between the endpoints (first center half a step
///   from `p1`, last half a step before `p2`).
/// - `gap == 0` (tight packing): count is `floor(length / footprint)`
///   with the exact footprint as step; leftover length is not
///   redistributed.
/// - `force_endpoints`: one fewer instance on the interior run, plus
///   one instance pinned half a step before `p2`, so an instance
///   reaches the far corner regardless of rounding.
pub fn distribute_uniform(
    p1: Vec2,
    p2: Vec2,
    footprint: f32,
    gap: f32,
    force_endpoints: bool,
) -> Vec<(Vec2, f32)> {
    let Ok(dir) = direction(p1, p2) else {
        return Vec::new();
    };
    let length = p1.distance(p2);
    if footprint > length {
        return Vec::new();
    }

    let (count, step) = if gap != 0.0 {
        let count = (length / (footprint + gap)).round() as usize;
        if count == 0 {
            return Vec::new();
        }
        (count, length / count as f32)
    } else {
        ((length / footprint).floor() as usize, footprint)
    };

    let rotation = segment_rotation(dir);
    let step_vec = dir * step;
    let start = p1 + step_vec * 0.5;

    let interior = if force_endpoints { count.saturating_sub(1) } else { count };
    let mut placed = Vec::with_capacity(count);
    for i in 0..interior {
        placed.push((start + step_vec * i as f32, rotation));
    }
    if force_endpoints {
        placed.push((p2 - step_vec * 0.5, rotation));
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_segment_places_nothing() {
        let p = Vec2::new(3.0, 7.0);
        assert!(distribute_uniform(p, p, 1.0, 0.5, false).is_empty());
        assert!(distribute_uniform(p, p, 1.0, 0.0, true).is_empty());
    }

    #[test]
    fn oversized_footprint_places_nothing() {
        let out = distribute_uniform(Vec2::ZERO, Vec2::new(2.0, 0.0), 5.0, 0.0, false);
        assert!(out.is_empty());
    }

    #[test]
    fn tight_packing_along_x() {
        // 10-unit segment, footprint 2, no gap: 5 instances at x = 1,3,5,7,9.
        let out = distribute_uniform(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, 0.0, false);
        assert_eq!(out.len(), 5);
        for (i, (pos, rot)) in out.iter().enumerate() {
            assert!((pos.x - (1.0 + 2.0 * i as f32)).abs() < 1e-5);
            assert!(pos.y.abs() < 1e-6);
            assert_eq!(*rot, 0.0);
        }
    }

    #[test]
    fn gap_is_adjusted_to_fit_symmetrically() {
        // 10 units, footprint 2, gap 1: round(10/3) = 3 instances, step 10/3.
        let out = distribute_uniform(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, 1.0, false);
        assert_eq!(out.len(), 3);
        let step = 10.0 / 3.0;
        assert!((out[0].0.x - step * 0.5).abs() < 1e-5);
        // Last center is half a step before the far endpoint.
        assert!((out[2].0.x - (10.0 - step * 0.5)).abs() < 1e-5);
    }

    #[test]
    fn count_stays_within_bounds() {
        for &(len, foot, gap) in &[(10.0, 2.0, 1.0), (7.3, 1.1, 0.4), (20.0, 3.0, 0.25)] {
            let out = distribute_uniform(Vec2::ZERO, Vec2::new(len, 0.0), foot, gap, false);
            let lo = (len / (foot + gap)).floor() as usize;
            let hi = (len / (foot + gap)).ceil() as usize;
            assert!(out.len() >= lo && out.len() <= hi, "count {} outside [{lo}, {hi}]", out.len());
            for (pos, _) in &out {
                assert!(pos.x >= 0.0 && pos.x <= len, "center outside segment");
            }
        }
    }

    #[test]
    fn force_endpoints_pins_last_instance() {
        let out = distribute_uniform(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, 0.0, true);
        assert_eq!(out.len(), 5);
        let last = out.last().unwrap().0;
        assert!((last.x - 9.0).abs() < 1e-5);
    }

    #[test]
    fn rotation_matches_segment_direction() {
        let out = distribute_uniform(Vec2::ZERO, Vec2::new(0.0, 10.0), 2.0, 0.0, false);
        assert_eq!(out.len(), 5);
        for (_, rot) in &out {
            assert!((rot - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        }
    }
}
