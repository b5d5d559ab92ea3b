use crate::error::{Result, RingScanError};

/// Geometry of the spinning lidar that produced a scan.
///
/// Every component that buckets points by ring takes the ring count from
/// here instead of a compiled-in constant, so scans from different sensor
/// models can be processed side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorModel {
    ring_count: usize,
}

impl SensorModel {
    /// Largest ring count addressable by the `u16` ring field.
    pub const MAX_RINGS: usize = u16::MAX as usize + 1;

    pub fn new(ring_count: usize) -> Result<Self> {
        if ring_count == 0 {
            return Err(RingScanError::ZeroRingCount);
        }
        if ring_count > Self::MAX_RINGS {
            return Err(RingScanError::TooManyRings(ring_count));
        }
        Ok(Self { ring_count })
    }

    /// Velodyne VLP-16 (Puck).
    pub const fn vlp16() -> Self {
        Self { ring_count: 16 }
    }

    /// Velodyne HDL-32E.
    pub const fn hdl32() -> Self {
        Self { ring_count: 32 }
    }

    /// Velodyne HDL-64E, the sensor used for the KITTI recordings.
    pub const fn hdl64() -> Self {
        Self { ring_count: 64 }
    }

    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    pub fn contains_ring(&self, ring: u16) -> bool {
        usize::from(ring) < self.ring_count
    }
}

impl Default for SensorModel {
    fn default() -> Self {
        Self::hdl64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_expected_ring_counts() {
        assert_eq!(SensorModel::vlp16().ring_count(), 16);
        assert_eq!(SensorModel::hdl32().ring_count(), 32);
        assert_eq!(SensorModel::hdl64().ring_count(), 64);
        assert_eq!(SensorModel::default(), SensorModel::hdl64());
    }

    #[test]
    fn zero_rings_is_rejected() {
        assert_eq!(SensorModel::new(0), Err(RingScanError::ZeroRingCount));
    }

    #[test]
    fn ring_count_beyond_u16_is_rejected() {
        assert!(SensorModel::new(SensorModel::MAX_RINGS).is_ok());
        assert_eq!(
            SensorModel::new(SensorModel::MAX_RINGS + 1),
            Err(RingScanError::TooManyRings(SensorModel::MAX_RINGS + 1))
        );
    }

    #[test]
    fn contains_ring_is_exclusive_at_count() {
        let sensor = SensorModel::vlp16();
        assert!(sensor.contains_ring(0));
        assert!(sensor.contains_ring(15));
        assert!(!sensor.contains_ring(16));
    }
}
