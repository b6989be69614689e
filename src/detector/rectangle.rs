/// Quiet-zone bounded rectangle localization by scanning out from the image center
use crate::error::{DecodeError, Result};
use crate::models::{BitMatrix, Point};

/// Largest symbol, in modules, the scan step is tuned for
const MAX_MODULES: i32 = 32;

/// Black run crossing a scanline, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// First black pixel
    pub start: i32,
    /// Last black pixel
    pub end: i32,
}

/// Finds the four extreme corners of a dark region surrounded by white
pub struct RectangleDetector<'a> {
    image: &'a BitMatrix,
}

impl<'a> RectangleDetector<'a> {
    /// Detector over a monochrome image
    pub fn new(image: &'a BitMatrix) -> Self {
        Self { image }
    }

    /// Locate the corners, returned as `[top, left, right, bottom]`.
    ///
    /// Each search narrows the bounds for the following ones. The top
    /// corner is searched a second time once all bounds are known, with half
    /// the white-run tolerance.
    pub fn detect(&self) -> Result<[Point; 4]> {
        let height = self.image.height() as i32;
        let width = self.image.width() as i32;
        let half_height = height >> 1;
        let half_width = width >> 1;
        let delta_y = (height / (MAX_MODULES << 3)).max(1);
        let delta_x = (width / (MAX_MODULES << 3)).max(1);

        let mut top = 0;
        let mut bottom = height;
        let mut left = 0;
        let mut right = width;

        let point_a = self.find_corner_from_center(
            half_width, 0, left, right, half_height, -delta_y, top, bottom, half_width >> 1,
        )?;
        top = point_a.y as i32 - 1;

        let point_b = self.find_corner_from_center(
            half_width, -delta_x, left, right, half_height, 0, top, bottom, half_height >> 1,
        )?;
        left = point_b.x as i32 - 1;

        let point_c = self.find_corner_from_center(
            half_width, delta_x, left, right, half_height, 0, top, bottom, half_height >> 1,
        )?;
        right = point_c.x as i32 + 1;

        let point_d = self.find_corner_from_center(
            half_width, 0, left, right, half_height, delta_y, top, bottom, half_width >> 1,
        )?;
        bottom = point_d.y as i32 + 1;

        let point_a = self.find_corner_from_center(
            half_width, 0, left, right, half_height, -delta_y, top, bottom, half_width >> 2,
        )?;

        log::trace!(
            "rectangle corners: {:?} {:?} {:?} {:?}",
            point_a,
            point_b,
            point_c,
            point_d
        );
        Ok([point_a, point_b, point_c, point_d])
    }

    /// Step from the center along one direction until the black region ends,
    /// then turn the last black range seen into a corner.
    #[allow(clippy::too_many_arguments)]
    pub fn find_corner_from_center(
        &self,
        center_x: i32,
        delta_x: i32,
        left: i32,
        right: i32,
        center_y: i32,
        delta_y: i32,
        top: i32,
        bottom: i32,
        max_white_run: i32,
    ) -> Result<Point> {
        let mut last_range: Option<Range> = None;
        let mut x = center_x;
        let mut y = center_y;

        while y < bottom && y >= top && x < right && x >= left {
            let range = if delta_x == 0 {
                // Horizontal slices, up and down
                self.black_white_range(y, max_white_run, left, right, true)
            } else {
                // Vertical slices, left and right
                self.black_white_range(x, max_white_run, top, bottom, false)
            };

            let Some(range) = range else {
                let Some(last) = last_range else {
                    log::debug!("no black range at the first step from center");
                    return Err(DecodeError::NotFound("no black range at image center"));
                };
                return Ok(if delta_x == 0 {
                    let last_y = (y - delta_y) as f32;
                    Point::new(Self::corner_coordinate(last, center_x, delta_y > 0) as f32, last_y)
                } else {
                    let last_x = (x - delta_x) as f32;
                    Point::new(last_x, Self::corner_coordinate(last, center_y, delta_x < 0) as f32)
                });
            };

            last_range = Some(range);
            x += delta_x;
            y += delta_y;
        }

        log::debug!("corner scan ran off the search bounds");
        Err(DecodeError::NotFound("corner scan left the image"))
    }

    /// Pick the endpoint of `range` that marks the corner.
    ///
    /// A range straddling the perpendicular center is resolved by direction;
    /// otherwise the endpoint nearer the center wins.
    fn corner_coordinate(range: Range, center: i32, take_start_on_straddle: bool) -> i32 {
        if range.start < center {
            if range.end > center {
                if take_start_on_straddle {
                    range.start
                } else {
                    range.end
                }
            } else {
                range.start
            }
        } else {
            range.end
        }
    }

    /// Longest black run through the middle of `min_dim..max_dim` on one
    /// scanline, bridging white gaps up to `max_white_run` long.
    pub fn black_white_range(
        &self,
        fixed_dimension: i32,
        max_white_run: i32,
        min_dim: i32,
        max_dim: i32,
        horizontal: bool,
    ) -> Option<Range> {
        let is_black = |pos: i32| {
            if horizontal {
                self.image.get_signed(pos, fixed_dimension)
            } else {
                self.image.get_signed(fixed_dimension, pos)
            }
        };

        let center = (min_dim + max_dim) >> 1;

        // Scan left/up first
        let mut start = center;
        while start >= min_dim {
            if is_black(start) {
                start -= 1;
            } else {
                let white_run_start = start;
                loop {
                    start -= 1;
                    if !(start >= min_dim && !is_black(start)) {
                        break;
                    }
                }
                let white_run_size = white_run_start - start;
                if start < min_dim || white_run_size > max_white_run {
                    start = white_run_start;
                    break;
                }
            }
        }
        start += 1;

        // Then try right/down
        let mut end = center;
        while end < max_dim {
            if is_black(end) {
                end += 1;
            } else {
                let white_run_start = end;
                loop {
                    end += 1;
                    if !(end < max_dim && !is_black(end)) {
                        break;
                    }
                }
                let white_run_size = end - white_run_start;
                if end >= max_dim || white_run_size > max_white_run {
                    end = white_run_start;
                    break;
                }
            }
        }
        end -= 1;

        (end > start).then_some(Range { start, end })
    }
}
