#![forbid(unsafe_code)]

pub mod edges;
pub mod normalize;

pub use edges::{edge_candidates, extract_edges, extract_scored_edges, score_ring, EdgeParams};
pub use normalize::{
    normalize_in_place, normalize_intensity, normalize_scores, normalize_values, normalized,
    Normalization, ObservedRange, TargetRange,
};
