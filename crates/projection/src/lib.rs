#![forbid(unsafe_code)]

pub mod axes;
pub mod projector;

pub use axes::{reorient, set_image_like_axis_from_but, set_image_like_axis_from_kitti, AxisConvention};
pub use projector::{project_point, project_scan, ProjectionMatrix, ProjectionResult};
