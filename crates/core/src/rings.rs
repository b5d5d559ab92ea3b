//! Decomposition of a scan into per-ring scan lines.

use crate::{LidarScan, PointXYZIR, SensorModel};

/// The points of one ring, copied out of the scan in acquisition order,
/// together with their positions in the source scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring {
    pub points: Vec<PointXYZIR>,
    pub indices: Vec<usize>,
}

impl Ring {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(original index, point)` pairs in ring order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PointXYZIR)> + '_ {
        self.indices.iter().copied().zip(&self.points)
    }
}

/// A scan split into exactly `ring_count` rings, some possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RingDecomposition {
    rings: Vec<Ring>,
}

impl RingDecomposition {
    /// Bucket every point by its ring id, keeping relative order.
    ///
    /// # Panics
    ///
    /// Panics if any point's ring id is not below the sensor's ring count.
    /// Such a point means the scan record is corrupt.
    pub fn decompose(scan: &LidarScan, sensor: &SensorModel) -> Self {
        let mut rings = vec![Ring::default(); sensor.ring_count()];
        for (id, p) in scan.iter_points().enumerate() {
            assert!(
                sensor.contains_ring(p.ring),
                "point {id} has ring {} but the sensor has {} rings",
                p.ring,
                sensor.ring_count()
            );
            let ring = &mut rings[usize::from(p.ring)];
            ring.points.push(p);
            ring.indices.push(id);
        }
        Self { rings }
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    pub fn ring(&self, ring: usize) -> &Ring {
        &self.rings[ring]
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn into_rings(self) -> Vec<Ring> {
        self.rings
    }

    pub fn total_points(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }

    /// Rebuild the source scan by scattering ring points back to their
    /// original indices.
    pub fn reassemble(&self) -> LidarScan {
        let mut points = vec![PointXYZIR::default(); self.total_points()];
        for ring in &self.rings {
            for (idx, p) in ring.iter() {
                points[idx] = *p;
            }
        }
        LidarScan::from_points(&points)
    }
}

impl LidarScan {
    /// Shorthand for [`RingDecomposition::decompose`].
    pub fn rings(&self, sensor: &SensorModel) -> RingDecomposition {
        RingDecomposition::decompose(self, sensor)
    }
}
