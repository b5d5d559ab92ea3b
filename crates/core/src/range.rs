//! Range functions over point positions.
//!
//! The sensor's rotation axis is `y`, so the planar range measures the
//! distance from that axis in the `x`/`z` plane and is used for per-ring
//! near-max statistics. The full range is the distance from the sensor
//! origin, used for edge scoring and the median. Non-finite coordinates
//! produce non-finite ranges; nothing is clamped.

use crate::traits::HasPosition;
use crate::LidarScan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// `sqrt(x² + z²)`, distance from the rotation axis.
    Planar,
    /// `sqrt(x² + y² + z²)`, distance from the sensor origin.
    Full,
}

impl RangeKind {
    pub fn of<P: HasPosition + ?Sized>(self, p: &P) -> f32 {
        match self {
            RangeKind::Planar => planar_range(p),
            RangeKind::Full => full_range(p),
        }
    }
}

pub fn planar_range_squared<P: HasPosition + ?Sized>(p: &P) -> f32 {
    let [x, _, z] = p.position();
    x * x + z * z
}

pub fn planar_range<P: HasPosition + ?Sized>(p: &P) -> f32 {
    planar_range_squared(p).sqrt()
}

pub fn full_range<P: HasPosition + ?Sized>(p: &P) -> f32 {
    let [x, y, z] = p.position();
    (x * x + y * y + z * z).sqrt()
}

/// Range of every point in the scan, in scan order.
pub fn ranges(scan: &LidarScan, kind: RangeKind) -> Vec<f32> {
    scan.iter_positions().map(|p| kind.of(&p)).collect()
}
