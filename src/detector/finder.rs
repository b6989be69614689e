/// Finder pattern observations and their running-average refinement
use crate::models::Point;

/// A candidate finder pattern, refined as it is observed on more scanlines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderPattern {
    center: Point,
    module_size: f32,
    count: u32,
}

impl FinderPattern {
    /// First observation of a pattern
    pub fn new(x: f32, y: f32, module_size: f32) -> Self {
        Self::with_count(x, y, module_size, 1)
    }

    /// Pattern backed by `count` observations; a zero count is raised to one
    pub fn with_count(x: f32, y: f32, module_size: f32, count: u32) -> Self {
        Self {
            center: Point::new(x, y),
            module_size,
            count: count.max(1),
        }
    }

    /// Estimated center in image coordinates
    pub fn center(&self) -> Point {
        self.center
    }

    /// Estimated module size in pixels
    pub fn module_size(&self) -> f32 {
        self.module_size
    }

    /// Number of observations averaged into this pattern
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether an observation at row `i`, column `j` is the same pattern
    pub fn about_equals(&self, module_size: f32, i: f32, j: f32) -> bool {
        if (i - self.center.y).abs() <= module_size && (j - self.center.x).abs() <= module_size {
            let module_size_diff = (module_size - self.module_size).abs();
            return module_size_diff <= 1.0 || module_size_diff <= self.module_size;
        }
        false
    }

    /// Fold one more observation at row `i`, column `j` into a new pattern.
    ///
    /// Position and module size become the mean over all observations; the
    /// receiver is left untouched.
    pub fn combine_estimate(&self, i: f32, j: f32, new_module_size: f32) -> Self {
        let weight = self.count as f32;
        let combined_count = self.count + 1;
        let total = combined_count as f32;
        Self {
            center: Point::new(
                (weight * self.center.x + j) / total,
                (weight * self.center.y + i) / total,
            ),
            module_size: (weight * self.module_size + new_module_size) / total,
            count: combined_count,
        }
    }
}
