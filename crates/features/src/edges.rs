//! Range-discontinuity ("edge") features along lidar scan lines.
//!
//! Each interior point of a ring is scored by how much closer it is than
//! its ring neighbours. Scores are collected across all rings, rescaled to
//! `[0, 1]` against the global min/max, and thresholded.

use rayon::prelude::*;
use ringscan_core::{full_range, LidarScan, PointXYZIR, Ring, RingDecomposition, Scored, SensorModel};
use ringscan_filters::discard_weak_points;
use tracing::debug;

use crate::normalize::{normalize_scores, Normalization, ObservedRange, TargetRange};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeParams {
    /// Candidates with a normalized score at or below this are dropped.
    /// A scan whose candidates all score the same has no edges, whatever
    /// the threshold.
    pub threshold: f32,
    /// Multiplier applied to raw range differences.
    pub score_scale: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            score_scale: 10.0,
        }
    }
}

impl EdgeParams {
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn score_scale(mut self, score_scale: f32) -> Self {
        self.score_scale = score_scale;
        self
    }
}

/// Raw edge scores for the interior points of one ring.
///
/// A point scores `max(0, prev - curr, next - curr) * score_scale` over
/// full 3D ranges, so only points nearer than a neighbour score above zero.
/// The first and last point of a ring have no score; rings with fewer than
/// three points yield nothing.
pub fn score_ring(ring: &Ring, score_scale: f32) -> Vec<Scored<PointXYZIR>> {
    if ring.len() < 2 {
        return Vec::new();
    }

    let ranges: Vec<f32> = ring.points.iter().map(full_range).collect();
    ranges
        .windows(3)
        .zip(&ring.points[1..])
        .map(|(w, p)| {
            let (prev, curr, next) = (w[0], w[1], w[2]);
            let diff = (prev - curr).max(next - curr).max(0.0);
            Scored::new(*p, diff * score_scale)
        })
        .collect()
}

/// Raw (unnormalized) candidates from every ring, in ring order.
///
/// Rings are scored in parallel; nothing global is computed here.
pub fn edge_candidates(
    scan: &LidarScan,
    sensor: &SensorModel,
    score_scale: f32,
) -> Vec<Scored<PointXYZIR>> {
    let rings = RingDecomposition::decompose(scan, sensor);
    let per_ring: Vec<Vec<Scored<PointXYZIR>>> = rings
        .rings()
        .par_iter()
        .map(|ring| score_ring(ring, score_scale))
        .collect();

    per_ring.into_iter().flatten().collect()
}

/// All candidates with scores rescaled against the global min/max.
///
/// The min/max reduction runs only after every ring has been scored. When
/// all candidates share one score none of them stands out, and none is
/// returned.
fn normalized_candidates(
    scan: &LidarScan,
    sensor: &SensorModel,
    params: &EdgeParams,
) -> Vec<Scored<PointXYZIR>> {
    let mut candidates = edge_candidates(scan, sensor, params.score_scale);
    let Some(observed) = ObservedRange::of(candidates.iter().map(|c| c.score)) else {
        debug!(points = scan.len(), "no edge candidates");
        return candidates;
    };

    if normalize_scores(&mut candidates, observed, TargetRange::UNIT) == Normalization::Degenerate {
        debug!(candidates = candidates.len(), "edge scores share one value");
        return Vec::new();
    }
    candidates
}

/// Edge points above `params.threshold`, each paired with its normalized
/// score. The points keep their original intensity.
pub fn extract_scored_edges(
    scan: &LidarScan,
    sensor: &SensorModel,
    params: &EdgeParams,
) -> Vec<Scored<PointXYZIR>> {
    let mut candidates = normalized_candidates(scan, sensor, params);
    let total = candidates.len();
    candidates.retain(|c| c.score > params.threshold);
    debug!(
        candidates = total,
        edges = candidates.len(),
        threshold = params.threshold,
        "extracted edges"
    );
    candidates
}

/// Edge cloud of `scan`.
///
/// The returned cloud's `intensity` column holds the normalized edge score
/// in `(threshold, 1]`, not reflectance. Points are ordered by ring, then
/// by acquisition order within the ring.
///
/// # Panics
///
/// Panics if a point's ring id is outside the sensor's ring count.
pub fn extract_edges(scan: &LidarScan, sensor: &SensorModel, params: &EdgeParams) -> LidarScan {
    let scored: LidarScan = normalized_candidates(scan, sensor, params)
        .into_iter()
        .map(|c| c.point.with_intensity(c.score))
        .collect();

    let edges = discard_weak_points(&scored, params.threshold);
    debug!(
        candidates = scored.len(),
        edges = edges.len(),
        threshold = params.threshold,
        "extracted edge cloud"
    );
    edges
}
