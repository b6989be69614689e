/// Geometric consistency scoring for triples of finder patterns
use super::finder::FinderPattern;
use crate::decoder::config;
use crate::error::{DecodeError, Result};
use crate::models::Point;

/// Displacement between two finder patterns
#[derive(Debug, Clone, Copy)]
struct FinderPatternVector {
    x: f32,
    y: f32,
    norm: f32,
}

impl FinderPatternVector {
    fn between(from: &FinderPattern, to: &FinderPattern) -> Self {
        let x = to.center().x - from.center().x;
        let y = to.center().y - from.center().y;
        Self {
            x,
            y,
            norm: (x * x + y * y).sqrt(),
        }
    }

    fn cosine_angle(&self, other: &Self) -> f32 {
        (self.x * other.x + self.y * other.y) / (self.norm * other.norm)
    }
}

/// Scores and selects finder pattern triples
pub struct FinderPatternAnalyzer;

impl FinderPatternAnalyzer {
    /// Score how close three patterns are to a right isosceles triangle.
    ///
    /// For each pair of consecutive edges, the error is |cos(angle)| plus
    /// the relative difference of their lengths. The best pair wins; lower
    /// is better. Degenerate triangles score `f32::MAX`.
    pub fn analyze(first: &FinderPattern, second: &FinderPattern, third: &FinderPattern) -> f32 {
        let triangle = [
            FinderPatternVector::between(first, second),
            FinderPatternVector::between(second, third),
            FinderPatternVector::between(third, first),
        ];

        let mut error = f32::MAX;
        for i in 0..triangle.len() {
            let current = &triangle[i];
            let next = &triangle[(i + 1) % 3];
            if current.norm == 0.0 || next.norm == 0.0 {
                continue;
            }

            let angle_error = current.cosine_angle(next).abs();
            let length_error = (current.norm - next.norm).abs() / current.norm.max(next.norm);
            error = error.min(angle_error + length_error);
        }

        error
    }

    /// Pick the best-scoring triple and return its centers as
    /// `[bottom_left, top_left, top_right]`.
    pub fn select_best(patterns: &[FinderPattern]) -> Result<[Point; 3]> {
        if patterns.len() < 3 {
            return Err(DecodeError::NotFound("fewer than three finder patterns"));
        }

        let mut best: Option<(f32, [usize; 3])> = None;
        for i in 0..patterns.len() {
            for j in (i + 1)..patterns.len() {
                for k in (j + 1)..patterns.len() {
                    let score = Self::analyze(&patterns[i], &patterns[j], &patterns[k]);
                    if best.is_none_or(|(s, _)| score < s) {
                        best = Some((score, [i, j, k]));
                    }
                }
            }
        }

        let max_error = config::max_triangle_error();
        match best {
            Some((score, [i, j, k])) if score <= max_error => Ok(Point::order_best_patterns([
                patterns[i].center(),
                patterns[j].center(),
                patterns[k].center(),
            ])),
            Some((score, _)) => {
                log::debug!("best finder triangle scored {score:.3}, limit {max_error:.3}");
                Err(DecodeError::NotFound("no consistent finder pattern triangle"))
            }
            None => Err(DecodeError::NotFound("no consistent finder pattern triangle")),
        }
    }
}
