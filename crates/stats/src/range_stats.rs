use ringscan_core::{full_range, planar_range_squared, LidarScan, SensorModel};

/// Rank used for the per-ring "almost maximum" range.
pub const NEAR_MAX_PERCENTILE: f64 = 0.9;

/// Median of the full 3D ranges: the element at `n / 2` of the sorted
/// ranges, which is the upper middle one for an even count. NaN for an
/// empty scan.
pub fn median_range(scan: &LidarScan) -> f32 {
    if scan.is_empty() {
        return f32::NAN;
    }

    let mut ranges: Vec<f32> = scan.iter_positions().map(|p| full_range(&p)).collect();
    ranges.sort_unstable_by(f32::total_cmp);
    ranges[ranges.len() / 2]
}

/// For each ring, the planar range at the 90th percentile rank.
///
/// Squared planar ranges are sorted per ring and the square root of the
/// element at `floor(0.9 * count)` is reported, which tolerates a few
/// spurious far returns. Rings without points report NaN. The result has
/// one entry per sensor ring.
///
/// # Panics
///
/// Panics if a point's ring id is outside the sensor's ring count.
pub fn ring_near_max_ranges(scan: &LidarScan, sensor: &SensorModel) -> Vec<f32> {
    let mut per_ring: Vec<Vec<f32>> = vec![Vec::new(); sensor.ring_count()];
    for (p, &ring) in scan.iter_positions().zip(&scan.ring) {
        assert!(
            sensor.contains_ring(ring),
            "ring {ring} outside sensor with {} rings",
            sensor.ring_count()
        );
        per_ring[usize::from(ring)].push(planar_range_squared(&p));
    }

    per_ring
        .into_iter()
        .map(|mut ranges| {
            if ranges.is_empty() {
                return f32::NAN;
            }
            ranges.sort_unstable_by(f32::total_cmp);
            let rank = (ranges.len() as f64 * NEAR_MAX_PERCENTILE).floor() as usize;
            ranges[rank.min(ranges.len() - 1)].sqrt()
        })
        .collect()
}
