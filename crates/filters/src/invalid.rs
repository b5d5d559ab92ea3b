use ringscan_core::LidarScan;
use tracing::debug;

/// Remove every point with a non-finite coordinate, in place.
///
/// Surviving points keep their relative order. The returned list holds the
/// original index of each survivor, in its new position, so callers can
/// carry any parallel per-point data across the removal.
pub fn remove_invalid_points(cloud: &mut LidarScan) -> Vec<usize> {
    let kept: Vec<usize> = cloud
        .iter_positions()
        .enumerate()
        .filter(|(_, p)| p.iter().all(|v| v.is_finite()))
        .map(|(i, _)| i)
        .collect();

    let removed = cloud.len() - kept.len();
    if removed > 0 {
        debug!(removed, kept = kept.len(), "removed non-finite points");
        cloud.compact(&kept);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::remove_invalid_points;
    use ringscan_core::{LidarScan, PointXYZIR};
    use proptest::prelude::*;

    #[test]
    fn drops_nan_and_inf_points() {
        let mut cloud = LidarScan::from_points(&[
            PointXYZIR::new(1.0, 0.0, 0.0, 5.0, 0),
            PointXYZIR::new(f32::NAN, 0.0, 0.0, 5.0, 1),
            PointXYZIR::new(2.0, 0.0, 0.0, 6.0, 2),
            PointXYZIR::new(3.0, f32::INFINITY, 0.0, 7.0, 3),
            PointXYZIR::new(4.0, 0.0, 0.0, 8.0, 4),
        ]);
        let indices = remove_invalid_points(&mut cloud);
        assert_eq!(indices, vec![0, 2, 4]);
        assert_eq!(cloud.x, vec![1.0, 2.0, 4.0]);
        assert_eq!(cloud.ring, vec![0, 2, 4]);
        assert_eq!(cloud.intensity, vec![5.0, 6.0, 8.0]);
    }

    #[test]
    fn nan_intensity_is_not_invalid() {
        let mut cloud = LidarScan::from_points(&[PointXYZIR::new(1.0, 2.0, 3.0, f32::NAN, 0)]);
        assert_eq!(remove_invalid_points(&mut cloud), vec![0]);
        assert_eq!(cloud.len(), 1);
    }

    #[test]
    fn empty_cloud() {
        let mut cloud = LidarScan::new();
        assert!(remove_invalid_points(&mut cloud).is_empty());
        assert!(cloud.is_empty());
    }

    #[test]
    fn all_invalid() {
        let mut cloud = LidarScan::from_points(&[
            PointXYZIR::new(f32::NAN, 0.0, 0.0, 0.0, 0),
            PointXYZIR::new(0.0, 0.0, f32::NEG_INFINITY, 0.0, 0),
        ]);
        assert!(remove_invalid_points(&mut cloud).is_empty());
        assert!(cloud.is_empty());
    }

    proptest! {
        #[test]
        fn indices_reproduce_filtered_cloud(
            pts in prop::collection::vec(
                (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0, any::<bool>()),
                0..300
            )
        ) {
            let original: LidarScan = pts
                .iter()
                .enumerate()
                .map(|(i, &(x, y, z, poison))| {
                    let x = if poison { f32::NAN } else { x };
                    PointXYZIR::new(x, y, z, i as f32, (i % 64) as u16)
                })
                .collect();
            let mut filtered = original.clone();
            let indices = remove_invalid_points(&mut filtered);

            prop_assert_eq!(indices.len(), filtered.len());
            prop_assert_eq!(original.select(&indices), filtered);
        }
    }
}
