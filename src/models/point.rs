/// 2D point with floating point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Reorder three points into `[bottom_left, top_left, top_right]`.
    ///
    /// The top-left point is the one opposite the longest side; the
    /// remaining two are swapped if needed so the triple turns the same
    /// way as a symbol seen unrotated in image coordinates (y down).
    pub fn order_best_patterns(points: [Point; 3]) -> [Point; 3] {
        let zero_one = points[0].distance(&points[1]);
        let one_two = points[1].distance(&points[2]);
        let zero_two = points[0].distance(&points[2]);

        let (mut a, b, mut c) = if one_two >= zero_one && one_two >= zero_two {
            (points[1], points[0], points[2])
        } else if zero_two >= one_two && zero_two >= zero_one {
            (points[0], points[1], points[2])
        } else {
            (points[0], points[2], points[1])
        };

        if cross_product_z(&a, &b, &c) < 0.0 {
            std::mem::swap(&mut a, &mut c);
        }

        [a, b, c]
    }
}

/// Z component of the cross product of (a - b) and (c - b)
pub fn cross_product_z(a: &Point, b: &Point, c: &Point) -> f32 {
    (c.x - b.x) * (a.y - b.y) - (c.y - b.y) * (a.x - b.x)
}
