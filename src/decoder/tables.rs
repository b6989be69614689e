use crate::error::{DecodeError, Result};

// Indexed by layer count; entry 0 is a placeholder.
const NB_BITS_COMPACT: [usize; 5] = [0, 104, 240, 408, 608];

const NB_BITS: [usize; 33] = [
    0, 128, 288, 480, 704, 960, 1248, 1568, 1920, 2304, 2720, 3168, 3648, 4160, 4704, 5280, 5888,
    6528, 7200, 7904, 8640, 9408, 10208, 11040, 11904, 12800, 13728, 14688, 15680, 16704, 17760,
    18848, 19968,
];

const NB_DATABLOCK_COMPACT: [usize; 5] = [0, 17, 40, 51, 76];

const NB_DATABLOCK: [usize; 33] = [
    0, 21, 48, 60, 88, 120, 156, 196, 240, 230, 272, 316, 364, 416, 470, 528, 588, 652, 720, 790,
    864, 940, 1020, 920, 992, 1066, 1144, 1224, 1306, 1392, 1480, 1570, 1664,
];

/// Fixed capacity of one symbol size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerCapacity {
    /// Raw bits carried by all data layers
    pub total_bits: usize,
    /// Codewords (data + error correction) packed into those bits
    pub total_codewords: usize,
}

/// Largest supported layer count for the given symbol class
pub fn max_layers(compact: bool) -> usize {
    if compact {
        NB_BITS_COMPACT.len() - 1
    } else {
        NB_BITS.len() - 1
    }
}

/// Capacity lookup; zero or too many layers is a format error
pub fn layer_capacity(compact: bool, layers: usize) -> Result<LayerCapacity> {
    if layers == 0 || layers > max_layers(compact) {
        log::debug!("unsupported layer count {layers} (compact: {compact})");
        return Err(DecodeError::Format("unsupported layer count"));
    }
    let (bits, codewords) = if compact {
        (&NB_BITS_COMPACT[..], &NB_DATABLOCK_COMPACT[..])
    } else {
        (&NB_BITS[..], &NB_DATABLOCK[..])
    };
    Ok(LayerCapacity {
        total_bits: bits[layers],
        total_codewords: codewords[layers],
    })
}

/// Codeword width in bits for a layer count
pub fn codeword_size(layers: usize) -> usize {
    match layers {
        0..=2 => 6,
        3..=8 => 8,
        9..=22 => 10,
        _ => 12,
    }
}
