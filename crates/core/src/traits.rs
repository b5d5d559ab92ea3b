use crate::{PointXYZ, PointXYZIR};

/// Anything with a 3D position that can be ranged or projected.
pub trait HasPosition {
    fn position(&self) -> [f32; 3];
}

impl HasPosition for PointXYZIR {
    fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl HasPosition for PointXYZ {
    fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl HasPosition for [f32; 3] {
    fn position(&self) -> [f32; 3] {
        *self
    }
}
