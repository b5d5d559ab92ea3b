/// Axis-aligned image rectangle that projected points must land in.
///
/// Containment is half-open like a pixel grid: the left and top edges are
/// inside, the right and bottom edges (`x + width`, `y + height`) are not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> crate::Result<Self> {
        let extent_ok = |v: f32| v.is_finite() && v >= 0.0;
        if !extent_ok(width) || !extent_ok(height) || !x.is_finite() || !y.is_finite() {
            return Err(crate::RingScanError::InvalidViewport { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Viewport of an image with the given size, anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, point: [f32; 2]) -> bool {
        let [u, v] = point;
        if !u.is_finite() || !v.is_finite() {
            return false;
        }

        u >= self.x && u < self.x + self.width && v >= self.y && v < self.y + self.height
    }
}
