//! Fixed axis reorientations applied to whole scans.

use nalgebra::{Matrix3, Rotation3, Vector3};
use ringscan_core::LidarScan;
use tracing::debug;

/// Source frame conventions that can be turned into an image-like frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisConvention {
    /// KITTI Velodyne frame (x forward, y left, z up) to camera-aligned
    /// axes: `(x, y, z) -> (-y, -z, x)`.
    Kitti,
    /// BUT recording rig to the down-forward-right frame: +90° about x,
    /// `(x, y, z) -> (x, -z, y)`.
    But,
}

impl AxisConvention {
    pub fn rotation(self) -> Rotation3<f32> {
        match self {
            AxisConvention::Kitti => Rotation3::from_matrix_unchecked(Matrix3::new(
                0.0, -1.0, 0.0, //
                0.0, 0.0, -1.0, //
                1.0, 0.0, 0.0,
            )),
            AxisConvention::But => {
                Rotation3::from_axis_angle(&Vector3::x_axis(), std::f32::consts::FRAC_PI_2)
            }
        }
    }
}

/// Rotate every point of `scan` in place. Intensity and ring are untouched.
pub fn reorient(scan: &mut LidarScan, convention: AxisConvention) {
    let rotation = convention.rotation();
    for i in 0..scan.len() {
        let v = rotation * Vector3::new(scan.x[i], scan.y[i], scan.z[i]);
        scan.x[i] = v.x;
        scan.y[i] = v.y;
        scan.z[i] = v.z;
    }
    debug!(points = scan.len(), ?convention, "reoriented scan axes");
}

pub fn set_image_like_axis_from_kitti(scan: &mut LidarScan) {
    reorient(scan, AxisConvention::Kitti);
}

pub fn set_image_like_axis_from_but(scan: &mut LidarScan) {
    reorient(scan, AxisConvention::But);
}
