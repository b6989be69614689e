use std::ops::Range;

use crate::error::{DecodeError, Result};
use crate::models::{BarcodeFormat, BitArray, Point, UpcEanResult};
use crate::oned::{ean8, ean13, upca};

/// Fixed-point scale for variance arithmetic
const INTEGER_MATH_SHIFT: u32 = 8;
const PATTERN_MATCH_RESULT_SCALE_FACTOR: u32 = 1 << INTEGER_MATH_SHIFT;

/// Worst average variance still accepted (0.42 scaled)
pub const MAX_AVG_VARIANCE: u32 = (PATTERN_MATCH_RESULT_SCALE_FACTOR as f32 * 0.42) as u32;
/// Worst single-run variance still accepted (0.7 scaled)
pub const MAX_INDIVIDUAL_VARIANCE: u32 = (PATTERN_MATCH_RESULT_SCALE_FACTOR as f32 * 0.7) as u32;

/// Start and end guard: bar, space, bar
pub const START_END_PATTERN: [u32; 3] = [1, 1, 1];
/// Center guard separating the two halves
pub const MIDDLE_PATTERN: [u32; 5] = [1, 1, 1, 1, 1];

/// Run widths of the odd-parity ("L") digit encodings
pub const L_PATTERNS: [[u32; 4]; 10] = [
    [3, 2, 1, 1],
    [2, 2, 2, 1],
    [2, 1, 2, 2],
    [1, 4, 1, 1],
    [1, 1, 3, 2],
    [1, 2, 3, 1],
    [1, 1, 1, 4],
    [1, 3, 1, 2],
    [1, 2, 1, 3],
    [3, 1, 1, 2],
];

/// L patterns followed by their reversals, the even-parity ("G") set
pub const L_AND_G_PATTERNS: [[u32; 4]; 20] = {
    let mut patterns = [[0u32; 4]; 20];
    let mut i = 0;
    while i < 10 {
        patterns[i] = L_PATTERNS[i];
        let l = L_PATTERNS[i];
        patterns[i + 10] = [l[3], l[2], l[1], l[0]];
        i += 1;
    }
    patterns
};

/// Digit encoding set tried by [`decode_digit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSet {
    /// Ten odd-parity patterns
    L,
    /// Twenty patterns; matches at 10 and above are even parity
    LAndG,
}

impl PatternSet {
    fn patterns(self) -> &'static [[u32; 4]] {
        match self {
            Self::L => &L_PATTERNS,
            Self::LAndG => &L_AND_G_PATTERNS,
        }
    }
}

/// Compare observed run lengths against an ideal pattern.
///
/// Returns the average deviation scaled by 256, or `u32::MAX` if any
/// single run deviates by more than `max_individual_variance`.
pub fn pattern_match_variance(counters: &[u32], pattern: &[u32], max_individual_variance: u32) -> u32 {
    let total: u32 = counters.iter().sum();
    let pattern_length: u32 = pattern.iter().sum();
    if total < pattern_length || pattern_length == 0 {
        // Fewer pixels than modules cannot be measured reliably
        return u32::MAX;
    }

    let unit_bar_width = (total << INTEGER_MATH_SHIFT) / pattern_length;
    let max_individual_variance = (max_individual_variance * unit_bar_width) >> INTEGER_MATH_SHIFT;

    let mut total_variance = 0u32;
    for (&counter, &expected) in counters.iter().zip(pattern) {
        let counter = counter << INTEGER_MATH_SHIFT;
        let scaled = expected * unit_bar_width;
        let variance = counter.abs_diff(scaled);
        if variance > max_individual_variance {
            return u32::MAX;
        }
        total_variance += variance;
    }
    total_variance / total
}

/// Fill `counters` with the lengths of consecutive runs starting at `start`.
///
/// The final run may end at the row edge. Fewer runs than counters is a
/// not-found failure.
pub fn record_pattern(row: &BitArray, start: usize, counters: &mut [u32]) -> Result<()> {
    counters.fill(0);
    let end = row.len();
    if start >= end {
        return Err(DecodeError::NotFound("pattern starts past row end"));
    }

    let num_counters = counters.len();
    let mut is_white = !row.get(start)?;
    let mut position = 0;
    let mut i = start;
    while i < end {
        if row.get(i)? ^ is_white {
            counters[position] += 1;
        } else {
            position += 1;
            if position == num_counters {
                break;
            }
            counters[position] = 1;
            is_white = !is_white;
        }
        i += 1;
    }

    if position == num_counters || (position == num_counters - 1 && i == end) {
        Ok(())
    } else {
        Err(DecodeError::NotFound("row ended inside pattern"))
    }
}

/// Locate the first run sequence at or after `offset` matching `pattern`.
///
/// The first run is white when `white_first` is set. Returns the pixel range
/// covered by the match.
pub fn find_guard_pattern(
    row: &BitArray,
    offset: usize,
    white_first: bool,
    pattern: &[u32],
) -> Result<Range<usize>> {
    let width = row.len();
    let mut counters = vec![0u32; pattern.len()];

    let mut offset = offset;
    let mut is_white = false;
    while offset < width {
        is_white = !row.get(offset)?;
        if white_first == is_white {
            break;
        }
        offset += 1;
    }

    let mut position = 0;
    let mut pattern_start = offset;
    for x in offset..width {
        if row.get(x)? ^ is_white {
            counters[position] += 1;
            continue;
        }
        if position == pattern.len() - 1 {
            if pattern_match_variance(&counters, pattern, MAX_INDIVIDUAL_VARIANCE)
                < MAX_AVG_VARIANCE
            {
                return Ok(pattern_start..x);
            }
            pattern_start += (counters[0] + counters[1]) as usize;
            counters.copy_within(2.., 0);
            let len = counters.len();
            counters[len - 2] = 0;
            counters[len - 1] = 0;
            position -= 1;
        } else {
            position += 1;
        }
        counters[position] = 1;
        is_white = !is_white;
    }

    Err(DecodeError::NotFound("guard pattern"))
}

/// Find a start guard preceded by a white quiet zone at least as wide as
/// the guard itself.
///
/// A guard closer to the left edge than its own width is skipped.
pub fn find_start_guard_pattern(row: &BitArray) -> Result<Range<usize>> {
    let mut next_start = 0;
    loop {
        let range = find_guard_pattern(row, next_start, false, &START_END_PATTERN)?;
        next_start = range.end;
        let width = range.end - range.start;
        let Some(quiet_start) = range.start.checked_sub(width) else {
            continue;
        };
        if row.is_range(quiet_start, range.start, false)? {
            return Ok(range);
        }
    }
}

/// Decode one digit at `offset`, returning the best pattern index.
///
/// `counters` is left holding the measured run lengths so the caller can
/// advance past the digit.
pub fn decode_digit(
    row: &BitArray,
    counters: &mut [u32; 4],
    offset: usize,
    set: PatternSet,
) -> Result<usize> {
    record_pattern(row, offset, counters)?;

    let mut best_variance = MAX_AVG_VARIANCE;
    let mut best_match = None;
    for (i, pattern) in set.patterns().iter().enumerate() {
        let variance = pattern_match_variance(counters, pattern, MAX_INDIVIDUAL_VARIANCE);
        if variance < best_variance {
            best_variance = variance;
            best_match = Some(i);
        }
    }
    best_match.ok_or(DecodeError::NotFound("no digit pattern within variance"))
}

/// ASCII digit for a decoded pattern index
pub(crate) fn digit_char(pattern_index: usize) -> char {
    char::from(b'0' + (pattern_index % 10) as u8)
}

/// Standard UPC/EAN mod-10 check.
///
/// Counting from the right, digits in even positions (the check digit is
/// position 1) are weighted by 3. Empty or non-digit input fails.
pub fn check_standard_upcean_checksum(s: &str) -> bool {
    let digits: Option<Vec<u32>> = s.chars().map(|c| c.to_digit(10)).collect();
    let Some(digits) = digits.filter(|d| !d.is_empty()) else {
        return false;
    };

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 1 { d * 3 } else { d })
        .sum();
    sum % 10 == 0
}

/// UPC/EAN symbologies sharing guard and digit encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpcEanFormat {
    /// Thirteen digits, first implied by left-half parity
    Ean13,
    /// Eight digits
    Ean8,
    /// Twelve digits, read as an EAN-13 with a leading zero
    UpcA,
}

impl UpcEanFormat {
    /// Result format tag
    pub fn barcode_format(self) -> BarcodeFormat {
        match self {
            Self::Ean13 => BarcodeFormat::Ean13,
            Self::Ean8 => BarcodeFormat::Ean8,
            Self::UpcA => BarcodeFormat::UpcA,
        }
    }

    /// Decode the digits between the guards, appending them to `result`.
    ///
    /// Returns the offset where the end guard search starts.
    pub fn decode_middle(
        self,
        row: &BitArray,
        start_range: &Range<usize>,
        result: &mut String,
    ) -> Result<usize> {
        match self {
            Self::Ean13 | Self::UpcA => ean13::decode_middle(row, start_range, result),
            Self::Ean8 => ean8::decode_middle(row, start_range, result),
        }
    }

    /// Locate the end guard after the decoded digits
    pub fn decode_end(self, row: &BitArray, end_start: usize) -> Result<Range<usize>> {
        find_guard_pattern(row, end_start, false, &START_END_PATTERN)
    }

    /// Decode a row, searching for the start guard first
    pub fn decode_row(self, row_number: usize, row: &BitArray) -> Result<UpcEanResult> {
        let start_range = find_start_guard_pattern(row)?;
        self.decode_row_from(row_number, row, start_range)
    }

    /// Decode a row whose start guard is already known
    pub fn decode_row_from(
        self,
        row_number: usize,
        row: &BitArray,
        start_range: Range<usize>,
    ) -> Result<UpcEanResult> {
        let mut text = String::with_capacity(13);
        let end_start = self.decode_middle(row, &start_range, &mut text)?;
        let end_range = self.decode_end(row, end_start)?;

        // Trailing quiet zone at least as wide as the end guard
        let quiet_end = end_range.end + (end_range.end - end_range.start);
        if quiet_end >= row.len() || !row.is_range(end_range.end, quiet_end, false)? {
            return Err(DecodeError::NotFound("no quiet zone after end guard"));
        }

        if !check_standard_upcean_checksum(&text) {
            log::debug!("row {row_number}: checksum failed for {text}");
            return Err(DecodeError::Checksum("UPC/EAN check digit mismatch"));
        }

        if self == Self::UpcA {
            text = upca::strip_leading_zero(&text)?;
        }

        let y = row_number as f32;
        let left = (start_range.start + start_range.end) as f32 / 2.0;
        let right = (end_range.start + end_range.end) as f32 / 2.0;
        Ok(UpcEanResult {
            text,
            format: self.barcode_format(),
            points: [Point::new(left, y), Point::new(right, y)],
        })
    }
}
