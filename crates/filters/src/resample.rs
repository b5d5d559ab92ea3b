use ringscan_core::LidarScan;
use tracing::debug;

/// Output of a stride resampling, with the achieved size made explicit.
///
/// Stride decimation does not hit an arbitrary `requested` count exactly:
/// it keeps `ceil(len / stride)` points, which is usually fewer than
/// requested. Callers that need the real size read [`achieved`](Self::achieved).
#[derive(Debug, Clone, PartialEq)]
pub struct Resampled {
    pub cloud: LidarScan,
    pub requested: usize,
    /// Distance between kept positions in the source; 0 when nothing was kept.
    pub stride: usize,
}

impl Resampled {
    pub fn achieved(&self) -> usize {
        self.cloud.len()
    }

    pub fn is_exact(&self) -> bool {
        self.achieved() == self.requested
    }

    pub fn into_cloud(self) -> LidarScan {
        self.cloud
    }
}

/// Decimate to roughly `final_count` points by keeping every
/// `len / final_count + 1`-th point, starting with the first.
///
/// Order is preserved. A `final_count` of zero gives an empty cloud.
pub fn resample_to(cloud: &LidarScan, final_count: usize) -> Resampled {
    if final_count == 0 || cloud.is_empty() {
        return Resampled {
            cloud: LidarScan::new(),
            requested: final_count,
            stride: 0,
        };
    }

    let stride = cloud.len() / final_count + 1;
    let keep: Vec<usize> = (0..cloud.len()).step_by(stride).collect();
    let resampled = Resampled {
        cloud: cloud.select(&keep),
        requested: final_count,
        stride,
    };

    if !resampled.is_exact() {
        debug!(
            requested = final_count,
            achieved = resampled.achieved(),
            stride,
            "stride resampling missed the requested size"
        );
    }
    resampled
}

/// Resample to `floor(len * ratio)` points via [`resample_to`].
///
/// Negative or NaN ratios request zero points.
pub fn resample_by_ratio(cloud: &LidarScan, ratio: f32) -> Resampled {
    let final_count = (cloud.len() as f64 * f64::from(ratio)).floor() as usize;
    resample_to(cloud, final_count)
}
