use nalgebra::{Matrix3x4, Matrix4, Vector3, Vector4};
use ringscan_core::{HasPosition, LidarScan, Result, RingScanError, Viewport};

/// Camera projection `P` mapping homogeneous `(x, y, z, 1)` to `(u, v, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionMatrix {
    matrix: Matrix3x4<f32>,
}

impl ProjectionMatrix {
    pub fn new(matrix: Matrix3x4<f32>) -> Self {
        Self { matrix }
    }

    /// Keep the first three rows of a homogeneous 4x4 transform.
    pub fn from_homogeneous(m: &Matrix4<f32>) -> Self {
        Self::new(Matrix3x4::from_fn(|r, c| m[(r, c)]))
    }

    /// Build from row-major values of a 3x4 or 4x4 matrix.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[f32]) -> Result<Self> {
        let shape_err = || RingScanError::ProjectionShape {
            rows,
            cols,
            len: data.len(),
        };
        if data.len() != rows * cols {
            return Err(shape_err());
        }
        match (rows, cols) {
            (3, 4) => Ok(Self::new(Matrix3x4::from_row_slice(data))),
            (4, 4) => Ok(Self::from_homogeneous(&Matrix4::from_row_slice(data))),
            _ => Err(shape_err()),
        }
    }

    pub fn matrix(&self) -> &Matrix3x4<f32> {
        &self.matrix
    }

    /// Homogeneous image coordinates `(u, v, w)` before perspective division.
    pub fn apply(&self, p: [f32; 3]) -> Vector3<f32> {
        self.matrix * Vector4::new(p[0], p[1], p[2], 1.0)
    }
}

impl From<Matrix3x4<f32>> for ProjectionMatrix {
    fn from(matrix: Matrix3x4<f32>) -> Self {
        Self::new(matrix)
    }
}

impl From<Matrix4<f32>> for ProjectionMatrix {
    fn from(m: Matrix4<f32>) -> Self {
        Self::from_homogeneous(&m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionResult {
    /// Image coordinates. NaN when the point was behind the camera and no
    /// projection was computed.
    pub point: [f32; 2],
    pub valid: bool,
}

impl ProjectionResult {
    fn behind_camera() -> Self {
        Self {
            point: [f32::NAN; 2],
            valid: false,
        }
    }
}

/// Project `p` into the image through `projection`.
///
/// Points with `z < 0` are behind the camera and are rejected before any
/// projection. Otherwise the result is valid iff the perspective-divided
/// point lies inside `viewport`. Division by a zero `w` yields a
/// non-finite point, which no viewport contains.
pub fn project_point<P: HasPosition + ?Sized>(
    p: &P,
    projection: &ProjectionMatrix,
    viewport: &Viewport,
) -> ProjectionResult {
    let position = p.position();
    if position[2] < 0.0 {
        return ProjectionResult::behind_camera();
    }

    let uvw = projection.apply(position);
    let w = uvw[2];
    let point = [uvw[0] / w, uvw[1] / w];
    ProjectionResult {
        point,
        valid: viewport.contains(point),
    }
}

/// [`project_point`] for every point of the scan, in scan order.
pub fn project_scan(
    scan: &LidarScan,
    projection: &ProjectionMatrix,
    viewport: &Viewport,
) -> Vec<ProjectionResult> {
    scan.iter_positions()
        .map(|p| project_point(&p, projection, viewport))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use ringscan_core::PointXYZIR;

    /// Pinhole camera with focal length 100 and principal point (320, 240).
    fn pinhole() -> ProjectionMatrix {
        ProjectionMatrix::new(Matrix3x4::new(
            100.0, 0.0, 320.0, 0.0, //
            0.0, 100.0, 240.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        ))
    }

    #[test]
    fn point_on_optical_axis_hits_principal_point() {
        let res = project_point(&[0.0f32, 0.0, 5.0], &pinhole(), &Viewport::from_size(640, 480));
        assert!(res.valid);
        assert_relative_eq!(res.point[0], 320.0);
        assert_relative_eq!(res.point[1], 240.0);
    }

    #[test]
    fn perspective_division_by_depth() {
        let res = project_point(&[1.0f32, -0.5, 2.0], &pinhole(), &Viewport::from_size(640, 480));
        assert!(res.valid);
        assert_relative_eq!(res.point[0], 370.0);
        assert_relative_eq!(res.point[1], 215.0);
    }

    #[test]
    fn point_behind_camera_is_invalid() {
        let p = PointXYZIR::new(0.0, 0.0, -1.0, 0.0, 0);
        let res = project_point(&p, &pinhole(), &Viewport::from_size(640, 480));
        assert!(!res.valid);
        assert!(res.point[0].is_nan());
    }

    #[test]
    fn excluded_edge_is_invalid() {
        // u = 100 * 3.2 / 1 + 320 = 640, exactly the right edge
        let vp = Viewport::from_size(640, 480);
        let res = project_point(&[3.2f32, 0.0, 1.0], &pinhole(), &vp);
        assert_relative_eq!(res.point[0], 640.0);
        assert!(!res.valid);

        // u = 0 is the included left edge
        let res = project_point(&[-3.2f32, 0.0, 1.0], &pinhole(), &vp);
        assert_relative_eq!(res.point[0], 0.0);
        assert!(res.valid);
    }

    #[test]
    fn outside_viewport_is_invalid() {
        let res = project_point(&[10.0f32, 0.0, 1.0], &pinhole(), &Viewport::from_size(640, 480));
        assert!(!res.valid);
        assert_relative_eq!(res.point[0], 1320.0);
    }

    #[test]
    fn zero_depth_is_invalid() {
        let res = project_point(&[1.0f32, 1.0, 0.0], &pinhole(), &Viewport::from_size(640, 480));
        assert!(!res.valid);
    }

    #[test]
    fn homogeneous_matrix_drops_last_row() {
        let m4 = Matrix4::new(
            100.0, 0.0, 320.0, 0.0, //
            0.0, 100.0, 240.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        assert_eq!(ProjectionMatrix::from(m4), pinhole());
    }

    #[test]
    fn row_slice_shapes() {
        let data3x4 = [
            100.0, 0.0, 320.0, 0.0, 0.0, 100.0, 240.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        ];
        assert_eq!(ProjectionMatrix::from_row_slice(3, 4, &data3x4).unwrap(), pinhole());

        let mut data4x4 = data3x4.to_vec();
        data4x4.extend([0.0, 0.0, 0.0, 1.0]);
        assert_eq!(ProjectionMatrix::from_row_slice(4, 4, &data4x4).unwrap(), pinhole());

        assert!(ProjectionMatrix::from_row_slice(3, 3, &data3x4[..9]).is_err());
        assert!(ProjectionMatrix::from_row_slice(3, 4, &data3x4[..11]).is_err());
    }

    #[test]
    fn scan_projection_follows_scan_order() {
        let scan = LidarScan::from_points(&[
            PointXYZIR::new(0.0, 0.0, 1.0, 0.0, 0),
            PointXYZIR::new(0.0, 0.0, -1.0, 0.0, 0),
        ]);
        let results = project_scan(&scan, &pinhole(), &Viewport::from_size(640, 480));
        assert_eq!(results.len(), 2);
        assert!(results[0].valid);
        assert!(!results[1].valid);
    }

    proptest! {
        #[test]
        fn negative_depth_is_always_invalid(
            x in -100.0f32..100.0, y in -100.0f32..100.0, z in -100.0f32..-0.001,
            entries in prop::collection::vec(-10.0f32..10.0, 12),
        ) {
            let projection = ProjectionMatrix::from_row_slice(3, 4, &entries).unwrap();
            let res = project_point(&[x, y, z], &projection, &Viewport::from_size(10_000, 10_000));
            prop_assert!(!res.valid);
        }
    }
}
