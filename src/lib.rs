//! Per-ring structuring and edge-feature extraction for spinning lidar scans.
//!
//! This crate re-exports the workspace members:
//!
//! - [`core`]: points, scans, sensor model, ranges, ring decomposition
//! - [`features`]: normalization and edge extraction
//! - [`filters`]: resampling, invalid-point removal, weak-point removal
//! - [`stats`]: range and intensity statistics
//! - [`projection`]: image projection and axis reorientation

#![forbid(unsafe_code)]

pub use ringscan_core as core;
pub use ringscan_features as features;
pub use ringscan_filters as filters;
pub use ringscan_projection as projection;
pub use ringscan_stats as stats;

pub use ringscan_core::{LidarScan, PointXYZIR, SensorModel};
pub use ringscan_features::{extract_edges, EdgeParams};
