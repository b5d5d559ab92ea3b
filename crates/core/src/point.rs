use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointXYZ {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A single lidar return: position, reflectance and the ring (laser channel)
/// that produced it.
///
/// The arithmetic operators act component-wise on `(x, y, z, intensity)`.
/// `ring` is not part of that vector space: the result of any arithmetic
/// carries the ring of the left-hand operand, and callers averaging or
/// interpolating points must not rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointXYZIR {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
    pub ring: u16,
}

impl PointXYZIR {
    pub const fn new(x: f32, y: f32, z: f32, intensity: f32, ring: u16) -> Self {
        Self {
            x,
            y,
            z,
            intensity,
            ring,
        }
    }

    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// True when all three coordinates are finite. Intensity is not checked.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn with_intensity(self, intensity: f32) -> Self {
        Self { intensity, ..self }
    }
}

impl From<PointXYZIR> for PointXYZ {
    fn from(p: PointXYZIR) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl Add for PointXYZIR {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            intensity: self.intensity + rhs.intensity,
            ring: self.ring,
        }
    }
}

impl Sub for PointXYZIR {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for PointXYZIR {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f32> for PointXYZIR {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            intensity: self.intensity * s,
            ring: self.ring,
        }
    }
}

impl Mul<PointXYZIR> for f32 {
    type Output = PointXYZIR;

    fn mul(self, p: PointXYZIR) -> PointXYZIR {
        p * self
    }
}

impl Div<f32> for PointXYZIR {
    type Output = Self;

    fn div(self, s: f32) -> Self {
        self * (1.0 / s)
    }
}

/// A point annotated with a transient scalar for one pipeline stage.
///
/// Used instead of overwriting a semantically different field of `P`
/// while the scalar is still being computed or rescaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<P> {
    pub point: P,
    pub score: f32,
}

impl<P> Scored<P> {
    pub const fn new(point: P, score: f32) -> Self {
        Self { point, score }
    }
}
