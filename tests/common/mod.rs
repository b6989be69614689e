//! Synthetic symbol builders shared by unit tests, integration tests and
//! benches
#![allow(dead_code)]

use image::{GrayImage, Luma};
use rust_barcode::decoder::bitstream::module_order;
use rust_barcode::decoder::reed_solomon::{
    GenericGf, aztec_data_6, aztec_data_8, aztec_data_10, aztec_data_12,
};
use rust_barcode::decoder::tables::{codeword_size, layer_capacity};
use rust_barcode::oned::ean13::FIRST_DIGIT_ENCODINGS;
use rust_barcode::oned::upc_ean::L_PATTERNS;
use rust_barcode::{AztecDetectorResult, BitArray, BitMatrix};

/// Codeword width of one- and two-layer symbols
pub const WIDTH: usize = 6;

/// Flatten `(value, width)` fields to MSB-first bits
pub fn pack(fields: &[(u32, usize)]) -> Vec<bool> {
    fields
        .iter()
        .flat_map(|&(value, width)| (0..width).rev().map(move |i| (value >> i) & 1 == 1))
        .collect()
}

/// Pack `(value, width)` fields MSB-first into a bit array
pub fn pack_bits(fields: &[(u32, usize)]) -> BitArray {
    BitArray::from_bools(&pack(fields))
}

/// Split bits into codewords with Aztec bit stuffing, padding with ones
pub fn stuff_bits(bits: &[bool], width: usize) -> Vec<u16> {
    let mask = (1u16 << width) - 2;
    let mut out = Vec::new();
    let mut i = 0;
    while i < bits.len() {
        let mut word = 0u16;
        for j in 0..width {
            if bits.get(i + j).copied().unwrap_or(true) {
                word |= 1 << (width - 1 - j);
            }
        }
        if word & mask == mask {
            out.push(word & mask);
            i += width - 1;
        } else if word & mask == 0 {
            out.push(word | 1);
            i += width - 1;
        } else {
            out.push(word);
            i += width;
        }
    }
    out
}

/// Append `num_ec` systematic Reed-Solomon check symbols
pub fn rs_encode(field: &GenericGf, data: &[u16], num_ec: usize) -> Vec<u16> {
    let mut generator = vec![0u16; num_ec + 1];
    generator[0] = 1;
    for i in 0..num_ec {
        let root = field.exp(field.generator_base() + i);
        for j in (1..=i + 1).rev() {
            generator[j] = generator[j - 1] ^ field.mul(generator[j], root);
        }
        generator[0] = field.mul(generator[0], root);
    }
    let divisor: Vec<u16> = generator[..num_ec].iter().rev().copied().collect();

    let mut remainder = vec![0u16; num_ec];
    for &d in data {
        let factor = d ^ remainder[0];
        remainder.rotate_left(1);
        remainder[num_ec - 1] = 0;
        for (r, &g) in remainder.iter_mut().zip(&divisor) {
            *r ^= field.mul(g, factor);
        }
    }

    let mut codewords = data.to_vec();
    codewords.extend_from_slice(&remainder);
    codewords
}

/// Data field for a codeword width
pub fn data_field(width: usize) -> &'static GenericGf {
    match width {
        6 => aztec_data_6(),
        8 => aztec_data_8(),
        10 => aztec_data_10(),
        _ => aztec_data_12(),
    }
}

/// Side of the data area once reference lines are removed
pub fn base_size(compact: bool, layers: usize) -> usize {
    (if compact { 11 } else { 14 }) + 4 * layers
}

/// Lay out `data` codewords plus check codewords filling the symbol.
///
/// Full-size symbols get their reference grid inserted.
pub fn aztec_layout(data: &[u16], compact: bool, layers: usize) -> AztecDetectorResult {
    let capacity = layer_capacity(compact, layers).expect("supported layer count");
    let width = codeword_size(layers);
    let codewords = rs_encode(
        data_field(width),
        data,
        capacity.total_codewords - data.len(),
    );

    let size = base_size(compact, layers);
    let order = module_order(size, layers).expect("layers fit the base matrix");
    let offset = order.len() - codewords.len() * width;
    let mut matrix = BitMatrix::new(size, size);
    for (i, &codeword) in codewords.iter().enumerate() {
        for j in 0..width {
            if (codeword >> (width - 1 - j)) & 1 == 1 {
                let (x, y) = order[offset + i * width + j];
                matrix.set(x, y, true);
            }
        }
    }

    let bits = if compact {
        matrix
    } else {
        with_reference_grid(&matrix)
    };
    AztecDetectorResult::new(bits, compact, data.len(), layers)
}

/// Insert a reference line every 16 modules from the center
pub fn with_reference_grid(inner: &BitMatrix) -> BitMatrix {
    let base = inner.width();
    let size = base + 1 + 2 * ((base / 2 - 1) / 15);
    let center = size / 2;
    let on_grid = |pos: usize| pos.abs_diff(center) % 16 == 0;
    let data_lines: Vec<usize> = (0..size).filter(|&p| !on_grid(p)).collect();
    assert_eq!(data_lines.len(), base);

    let mut matrix = BitMatrix::new(size, size);
    for y in 0..size {
        for x in 0..size {
            if on_grid(x) || on_grid(y) {
                matrix.set(x, y, (x + y) % 2 == 0);
            }
        }
    }
    for (iy, &y) in data_lines.iter().enumerate() {
        for (ix, &x) in data_lines.iter().enumerate() {
            if inner.get(ix, iy) {
                matrix.set(x, y, true);
            }
        }
    }
    matrix
}

/// Symbol of any size carrying the given token stream
pub fn aztec_symbol(fields: &[(u32, usize)], compact: bool, layers: usize) -> AztecDetectorResult {
    let data = stuff_bits(&pack(fields), codeword_size(layers));
    aztec_layout(&data, compact, layers)
}

/// One-layer compact symbol (15x15 data area, 17 codewords) carrying
/// the given token stream
pub fn compact_symbol(fields: &[(u32, usize)]) -> AztecDetectorResult {
    aztec_symbol(fields, true, 1)
}

/// Upper-table tokens for capital letters and spaces
pub fn upper_text(text: &str) -> Vec<(u32, usize)> {
    text.chars()
        .map(|c| match c {
            ' ' => (1, 5),
            _ => (c as u32 - 'A' as u32 + 2, 5),
        })
        .collect()
}

/// Build a row from alternating run widths, starting with white
pub fn row_from_runs(runs: &[usize]) -> BitArray {
    let bits: Vec<bool> = runs
        .iter()
        .enumerate()
        .flat_map(|(i, &run)| std::iter::repeat_n(i % 2 == 1, run))
        .collect();
    BitArray::from_bools(&bits)
}

/// Scale module runs to pixels
pub fn scaled_row(runs: &[usize], module: usize) -> BitArray {
    let pixels: Vec<usize> = runs.iter().map(|r| r * module).collect();
    row_from_runs(&pixels)
}

fn digits(text: &str) -> Vec<usize> {
    text.bytes().map(|b| usize::from(b - b'0')).collect()
}

fn push_digit(runs: &mut Vec<usize>, digit: usize, even_parity: bool) {
    let mut pattern = L_PATTERNS[digit];
    if even_parity {
        pattern.reverse();
    }
    runs.extend(pattern.iter().map(|&w| w as usize));
}

/// Module run widths of an EAN-13 symbol with `quiet` modules of white on
/// each side
pub fn ean13_runs(text: &str, quiet: usize) -> Vec<usize> {
    let digits = digits(text);
    let parity = FIRST_DIGIT_ENCODINGS[digits[0]];
    let mut runs = vec![quiet, 1, 1, 1];
    for (x, &digit) in digits[1..7].iter().enumerate() {
        push_digit(&mut runs, digit, (parity >> (5 - x)) & 1 == 1);
    }
    runs.extend([1, 1, 1, 1, 1]);
    for &digit in &digits[7..] {
        push_digit(&mut runs, digit, false);
    }
    runs.extend([1, 1, 1, quiet]);
    runs
}

/// Module run widths of an EAN-8 symbol
pub fn ean8_runs(text: &str, quiet: usize) -> Vec<usize> {
    let digits = digits(text);
    let mut runs = vec![quiet, 1, 1, 1];
    for &digit in &digits[..4] {
        push_digit(&mut runs, digit, false);
    }
    runs.extend([1, 1, 1, 1, 1]);
    for &digit in &digits[4..] {
        push_digit(&mut runs, digit, false);
    }
    runs.extend([1, 1, 1, quiet]);
    runs
}

/// Grayscale image of an EAN-13 symbol, bars spanning the full height
pub fn ean13_image(text: &str, module: u32, height: u32) -> GrayImage {
    let runs = ean13_runs(text, 10);
    let width = runs.iter().sum::<usize>() as u32 * module;
    let mut image = GrayImage::from_pixel(width, height, Luma([235]));

    let mut x = 0u32;
    for (i, &run) in runs.iter().enumerate() {
        let run_px = run as u32 * module;
        if i % 2 == 1 {
            for px in x..x + run_px {
                for y in 0..height {
                    image.put_pixel(px, y, Luma([25]));
                }
            }
        }
        x += run_px;
    }
    image
}
