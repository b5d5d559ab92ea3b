use ringscan_core::{LidarScan, PointXYZIR};

/// Mean of the finite intensities; 0 when there are none.
pub fn average_intensity(scan: &LidarScan) -> f32 {
    let (sum, count) = scan
        .intensity
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0usize), |(sum, count), &v| (sum + f64::from(v), count + 1));

    if count == 0 {
        return 0.0;
    }
    (sum / count as f64) as f32
}

/// Point with the lowest intensity, first one on ties.
///
/// An empty scan yields a zeroed point with intensity `+inf`.
pub fn min_intensity_point(scan: &LidarScan) -> PointXYZIR {
    let sentinel = PointXYZIR::default().with_intensity(f32::INFINITY);
    scan.iter_points()
        .fold(sentinel, |best, p| if p.intensity < best.intensity { p } else { best })
}

/// Point with the highest intensity, first one on ties.
///
/// An empty scan yields a zeroed point with intensity `-inf`.
pub fn max_intensity_point(scan: &LidarScan) -> PointXYZIR {
    let sentinel = PointXYZIR::default().with_intensity(f32::NEG_INFINITY);
    scan.iter_points()
        .fold(sentinel, |best, p| if p.intensity > best.intensity { p } else { best })
}
