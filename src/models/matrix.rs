use super::BitArray;

/// Compact bit matrix for storing a monochrome image or a sampled symbol.
///
/// `true` is a black module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-white bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a matrix from a grayscale image: pixels darker than `threshold` are black
    pub fn from_luma(image: &image::GrayImage, threshold: u8) -> Self {
        let (width, height) = image.dimensions();
        let mut matrix = Self::new(width as usize, height as usize);
        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel.0[0] < threshold {
                matrix.set(x as usize, y as usize, true);
            }
        }
        matrix
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y); out-of-bounds reads are white
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Signed-coordinate read used by scanners that step past the edges
    pub fn get_signed(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.get(x as usize, y as usize)
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Copy row `y` into a fresh bit array
    pub fn row(&self, y: usize) -> BitArray {
        let mut row = BitArray::new(self.width);
        if y < self.height {
            for x in 0..self.width {
                if self.get(x, y) {
                    row.set(x);
                }
            }
        }
        row
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
