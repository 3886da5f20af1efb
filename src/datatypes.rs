/// A point in the 2D plane the linkage moves in.
///
/// Plain value type. The solver never mutates one after construction;
/// arithmetic produces new values.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Point2d {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2d {
    /// Where the first joint of every mechanism is anchored.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Make a point from its coordinates.
    #[inline(always)]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin.
    #[inline(always)]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y)
    }

    /// Euclidean distance between two points.
    #[inline(always)]
    pub fn distance_to(self, rhs: Self) -> f64 {
        (self - rhs).magnitude()
    }
}

impl std::ops::Sub<Self> for Point2d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
