/// Raw bitstream extraction from a layered Aztec matrix
use crate::decoder::tables::{LayerCapacity, layer_capacity};
use crate::error::{DecodeError, Result};
use crate::models::{BitArray, BitMatrix};

/// Raw bits read from the symbol, not yet error corrected
#[derive(Debug, Clone)]
pub struct ExtractedBits {
    /// Bits in reading order
    pub raw: BitArray,
    /// Total codewords (data + error correction) for this symbol size
    pub num_codewords: usize,
    pub(crate) capacity: LayerCapacity,
}

/// Extract the raw bitstream of a sampled symbol.
///
/// `matrix` must already have its alignment lines removed (full-size
/// symbols). Layers are read outermost first.
pub fn extract_bits(matrix: &BitMatrix, compact: bool, layers: usize) -> Result<ExtractedBits> {
    let capacity = layer_capacity(compact, layers)?;
    let order = module_order(matrix.height(), layers)?;
    if order.len() != capacity.total_bits {
        log::debug!(
            "matrix of {} rows yields {} bits, expected {}",
            matrix.height(),
            order.len(),
            capacity.total_bits
        );
        return Err(DecodeError::Format("matrix size does not match layer count"));
    }

    let mut raw = BitArray::new(capacity.total_bits);
    for (index, &(x, y)) in order.iter().enumerate() {
        if matrix.get(x, y) {
            raw.set(index);
        }
    }

    Ok(ExtractedBits {
        raw,
        num_codewords: capacity.total_codewords,
        capacity,
    })
}

/// Matrix coordinates `(x, y)` visited for each raw bit index.
///
/// Each layer is a square ring two modules thick. The top and right edges
/// are read first, alternating between the two module columns, then the
/// bottom and left edges in reverse. A layer of ring size `s` holds
/// `8 * s - 16` bits.
pub fn module_order(matrix_size: usize, layers: usize) -> Result<Vec<(usize, usize)>> {
    if layers == 0 || matrix_size < 4 * layers + 1 {
        return Err(DecodeError::Format("matrix too small for layer count"));
    }

    let total: usize = (0..layers).map(|l| 8 * (matrix_size - 4 * l) - 16).sum();
    let mut order = vec![(0usize, 0usize); total];

    let mut size = matrix_size;
    let mut offset = 0usize;
    let mut base = 0usize;

    for _ in 0..layers {
        let mut flip = 0;
        for i in 0..2 * size - 4 {
            order[base + i] = (offset + flip, offset + i / 2);
            order[base + 2 * size - 4 + i] = (offset + i / 2, offset + size - 1 - flip);
            flip = (flip + 1) % 2;
        }

        flip = 0;
        for i in (6..=2 * size + 1).rev() {
            order[base + 6 * size - 7 - i] = (offset + size - 1 - flip, offset + i / 2 - 1);
            order[base + 8 * size - 11 - i] = (offset + i / 2 - 1, offset + flip);
            flip = (flip + 1) % 2;
        }

        offset += 2;
        base += 8 * size - 16;
        size -= 4;
    }

    Ok(order)
}

/// Drop the alignment rows and columns of a full-size symbol.
///
/// Every 16th row and column counted from the center is a reference line;
/// the result is a new, smaller matrix holding only the data modules.
pub fn remove_dashed_lines(matrix: &BitMatrix) -> BitMatrix {
    let width = matrix.width();
    let height = matrix.height();
    let half = (width / 2) as isize;
    let nb_dashed = 1 + 2 * (width.saturating_sub(1) / 2 / 16);
    let is_dashed = |pos: usize| (pos as isize - half).rem_euclid(16) == 0;

    let mut out = BitMatrix::new(
        width.saturating_sub(nb_dashed),
        height.saturating_sub(nb_dashed),
    );

    let mut nx = 0;
    for x in (0..width).filter(|&x| !is_dashed(x)) {
        let mut ny = 0;
        for y in (0..height).filter(|&y| !is_dashed(y)) {
            if matrix.get(x, y) {
                out.set(nx, ny, true);
            }
            ny += 1;
        }
        nx += 1;
    }

    out
}
