use crate::{PointXYZ, PointXYZIR};

/// One lidar scan stored column-wise, in acquisition order.
///
/// All five columns always have the same length. No ordering across rings
/// is assumed: points of different rings may be interleaved arbitrarily.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LidarScan {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    pub intensity: Vec<f32>,
    pub ring: Vec<u16>,
}

impl LidarScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            intensity: Vec::with_capacity(n),
            ring: Vec::with_capacity(n),
        }
    }

    /// # Panics
    ///
    /// Panics if the columns differ in length.
    pub fn from_columns(
        x: Vec<f32>,
        y: Vec<f32>,
        z: Vec<f32>,
        intensity: Vec<f32>,
        ring: Vec<u16>,
    ) -> Self {
        assert_eq!(x.len(), y.len(), "x and y must have same length");
        assert_eq!(x.len(), z.len(), "x and z must have same length");
        assert_eq!(
            x.len(),
            intensity.len(),
            "x and intensity must have same length"
        );
        assert_eq!(x.len(), ring.len(), "x and ring must have same length");

        Self {
            x,
            y,
            z,
            intensity,
            ring,
        }
    }

    pub fn from_points(points: &[PointXYZIR]) -> Self {
        points.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.x.len(), self.y.len());
        debug_assert_eq!(self.x.len(), self.z.len());
        debug_assert_eq!(self.x.len(), self.intensity.len());
        debug_assert_eq!(self.x.len(), self.ring.len());
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn push(&mut self, p: PointXYZIR) {
        self.x.push(p.x);
        self.y.push(p.y);
        self.z.push(p.z);
        self.intensity.push(p.intensity);
        self.ring.push(p.ring);
    }

    pub fn point(&self, i: usize) -> PointXYZIR {
        PointXYZIR {
            x: self.x[i],
            y: self.y[i],
            z: self.z[i],
            intensity: self.intensity[i],
            ring: self.ring[i],
        }
    }

    pub fn set_point(&mut self, i: usize, p: PointXYZIR) {
        self.x[i] = p.x;
        self.y[i] = p.y;
        self.z[i] = p.z;
        self.intensity[i] = p.intensity;
        self.ring[i] = p.ring;
    }

    pub fn iter_points(&self) -> impl Iterator<Item = PointXYZIR> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| [*x, *y, *z])
    }

    pub fn to_points(&self) -> Vec<PointXYZIR> {
        self.iter_points().collect()
    }

    /// Positions only, dropping intensity and ring.
    pub fn to_xyz(&self) -> Vec<PointXYZ> {
        self.iter_points().map(PointXYZ::from).collect()
    }

    pub fn select(&self, indices: &[usize]) -> Self {
        let mut out = Self::with_capacity(indices.len());
        for &idx in indices {
            assert!(idx < self.len(), "index out of bounds in select");
            out.push(self.point(idx));
        }
        out
    }

    /// Select all points NOT in the given index set.
    ///
    /// This is the complement of [`select`](Self::select). The returned scan
    /// preserves the relative order of the retained points.
    ///
    /// # Panics
    ///
    /// Panics if any index in `indices` is out of bounds.
    pub fn select_inverse(&self, indices: &[usize]) -> Self {
        let n = self.len();
        let mut exclude = vec![false; n];
        for &idx in indices {
            assert!(idx < n, "index out of bounds in select_inverse");
            exclude[idx] = true;
        }

        let kept: Vec<usize> = (0..n).filter(|&i| !exclude[i]).collect();
        self.select(&kept)
    }

    /// Keep only the points at `indices`, moving them to the front in the
    /// given order and truncating the rest, without reallocating.
    ///
    /// # Panics
    ///
    /// Panics unless `indices` is strictly increasing and in bounds.
    pub fn compact(&mut self, indices: &[usize]) {
        let n = self.len();
        for (dst, &src) in indices.iter().enumerate() {
            assert!(src < n, "index out of bounds in compact");
            assert!(
                dst == 0 || src > indices[dst - 1],
                "compact indices must be strictly increasing"
            );
            if dst != src {
                let p = self.point(src);
                self.set_point(dst, p);
            }
        }
        self.truncate(indices.len());
    }

    pub fn truncate(&mut self, len: usize) {
        self.x.truncate(len);
        self.y.truncate(len);
        self.z.truncate(len);
        self.intensity.truncate(len);
        self.ring.truncate(len);
    }
}

impl FromIterator<PointXYZIR> for LidarScan {
    fn from_iter<T: IntoIterator<Item = PointXYZIR>>(iter: T) -> Self {
        let mut scan = Self::new();
        scan.extend(iter);
        scan
    }
}

impl Extend<PointXYZIR> for LidarScan {
    fn extend<T: IntoIterator<Item = PointXYZIR>>(&mut self, iter: T) {
        for p in iter {
            self.push(p);
        }
    }
}
