use ringscan_core::LidarScan;

/// Keep points whose intensity is strictly greater than `threshold`.
///
/// Points with a NaN intensity never pass.
pub fn discard_weak_points(cloud: &LidarScan, threshold: f32) -> LidarScan {
    let keep: Vec<usize> = cloud
        .intensity
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v > threshold)
        .map(|(i, _)| i)
        .collect();

    cloud.select(&keep)
}
