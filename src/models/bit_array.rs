use crate::error::{DecodeError, Result};

/// Fixed-capacity ordered sequence of bits.
///
/// Reads outside `0..len()` fail with [`DecodeError::OutOfRange`] instead of
/// panicking, since decoders probe near stream boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitArray {
    size: usize,
    words: Vec<u32>,
}

impl BitArray {
    /// Create an all-zero array of `size` bits
    pub fn new(size: usize) -> Self {
        Self {
            size,
            words: vec![0; size.div_ceil(32)],
        }
    }

    /// Build from a slice of booleans
    pub fn from_bools(bits: &[bool]) -> Self {
        let mut array = Self::new(bits.len());
        for (i, _) in bits.iter().enumerate().filter(|(_, b)| **b) {
            array.set(i);
        }
        array
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.size
    }

    /// True when the array holds no bits
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Read bit `index`
    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.size {
            return Err(DecodeError::OutOfRange {
                index,
                len: self.size,
            });
        }
        Ok((self.words[index >> 5] >> (index & 0x1f)) & 1 == 1)
    }

    /// Set bit `index`; indices past the end are ignored
    pub fn set(&mut self, index: usize) {
        if index < self.size {
            self.words[index >> 5] |= 1 << (index & 0x1f);
        }
    }

    /// Append a bit, growing the array by one
    pub fn push(&mut self, value: bool) {
        let index = self.size;
        self.size += 1;
        if self.words.len() < self.size.div_ceil(32) {
            self.words.push(0);
        }
        if value {
            self.set(index);
        }
    }

    /// Check that every bit in `start..end` equals `value`.
    ///
    /// An empty range is trivially true. `end` past the array or
    /// `end < start` is an error.
    pub fn is_range(&self, start: usize, end: usize, value: bool) -> Result<bool> {
        if end < start {
            return Err(DecodeError::Format("range end precedes start"));
        }
        if end > self.size {
            return Err(DecodeError::OutOfRange {
                index: end - 1,
                len: self.size,
            });
        }
        for i in start..end {
            if self.get(i)? != value {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Read `length` bits starting at `start` as a big-endian integer
    pub fn read_bits(&self, start: usize, length: usize) -> Result<u32> {
        let mut value = 0u32;
        for i in start..start + length {
            value = (value << 1) | self.get(i)? as u32;
        }
        Ok(value)
    }
}
