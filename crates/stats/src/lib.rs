#![forbid(unsafe_code)]

pub mod intensity_stats;
pub mod range_stats;

pub use intensity_stats::{average_intensity, max_intensity_point, min_intensity_point};
pub use range_stats::{median_range, ring_near_max_ranges, NEAR_MAX_PERCENTILE};
