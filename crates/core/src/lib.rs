#![forbid(unsafe_code)]

pub mod cloud;
pub mod error;
pub mod point;
pub mod range;
pub mod rings;
pub mod sensor;
pub mod traits;
pub mod viewport;

pub use cloud::LidarScan;
pub use error::{Result, RingScanError};
pub use point::{PointXYZ, PointXYZIR, Scored};
pub use range::{full_range, planar_range, planar_range_squared, RangeKind};
pub use rings::{Ring, RingDecomposition};
pub use sensor::SensorModel;
pub use traits::HasPosition;
pub use viewport::Viewport;
