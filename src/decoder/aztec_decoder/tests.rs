use super::*;
use crate::common::{WIDTH, aztec_layout, aztec_symbol, pack, stuff_bits, upper_text};
use crate::decoder::bitstream::module_order;
use crate::error::DecodeError;
use crate::models::{Point, SegmentKind};

fn compact_symbol(data: &[u16]) -> AztecDetectorResult {
    aztec_layout(data, true, 1)
}

/// One-layer full-size symbol with the central reference row and column
fn full_symbol(data: &[u16]) -> AztecDetectorResult {
    aztec_layout(data, false, 1)
}

fn hello() -> Vec<u16> {
    // H E L L O in the upper table
    stuff_bits(&pack(&[(9, 5), (6, 5), (13, 5), (13, 5), (16, 5)]), WIDTH)
}

#[test]
fn test_stuffing_helper() {
    assert_eq!(hello(), vec![18, 25, 43, 24, 31]);
}

#[test]
fn test_decode_compact_hello() {
    let corners = [
        Point::new(10.0, 10.0),
        Point::new(40.0, 10.0),
        Point::new(40.0, 40.0),
        Point::new(10.0, 40.0),
    ];
    let symbol = compact_symbol(&hello()).with_corners(corners);
    let result = AztecDecoder::decode(&symbol).unwrap();

    assert_eq!(result.text, "HELLO");
    assert_eq!(result.raw_bytes, b"HELLO");
    assert_eq!(result.errors_corrected, 0);
    assert_eq!(result.corners, corners);
    assert_eq!(result.byte_segments.len(), 1);
    assert_eq!(result.byte_segments[0].kind, SegmentKind::Text);
}

#[test]
fn test_decode_repairs_damaged_modules() {
    let mut symbol = compact_symbol(&hello());
    let order = module_order(15, 1).unwrap();
    // Bits 2.. hold codeword 0; damage codewords 0, 3 and 9
    for index in [2, 3, 2 + 3 * WIDTH, 2 + 9 * WIDTH + 4] {
        let (x, y) = order[index];
        let value = symbol.bits.get(x, y);
        symbol.bits.set(x, y, !value);
    }

    let result = AztecDecoder::decode(&symbol).unwrap();
    assert_eq!(result.text, "HELLO");
    assert_eq!(result.errors_corrected, 3);
}

#[test]
fn test_decode_full_size_binary_shift() {
    // B/S, two bytes, then the stream runs out
    let data = stuff_bits(&pack(&[(31, 5), (2, 5), (0xE9, 8), (0x41, 8)]), WIDTH);
    assert_eq!(data, vec![62, 5, 52, 40, 15]);

    let result = AztecDecoder::decode(&full_symbol(&data)).unwrap();
    assert_eq!(result.text, "\u{e9}A");
    assert_eq!(result.raw_bytes, vec![0xE9, 0x41]);
    assert_eq!(result.byte_segments.len(), 1);
    assert_eq!(
        result.byte_segments[0].to_tagged_bytes(),
        vec![SegmentKind::Byte as u8, 0xE9, 0x41]
    );
}

#[test]
fn test_missing_stuffed_bit_is_format_error() {
    // 000000 can never appear as a data codeword
    let symbol = compact_symbol(&[0, 18]);
    assert_eq!(
        AztecDecoder::decode(&symbol).unwrap_err(),
        DecodeError::Format("bit was not inverted")
    );
}

#[test]
fn test_data_block_count_exceeds_capacity() {
    let mut symbol = compact_symbol(&hello());
    symbol.nb_datablocks = 18;
    assert!(matches!(
        AztecDecoder::decode(&symbol),
        Err(DecodeError::Format(_))
    ));
}

#[test]
fn test_unsupported_layer_count() {
    let mut symbol = compact_symbol(&hello());
    symbol.nb_layers = 5;
    assert!(matches!(
        AztecDecoder::decode(&symbol),
        Err(DecodeError::Format(_))
    ));
}

#[test]
fn test_decode_every_codeword_width() {
    let text = "THE QUICK BROWN FOX JUMPS OVER DOGS";
    // Widths 6, 8, 10 and 12; full sizes 5 and up carry several grid lines
    for (compact, layers) in [
        (true, 2),
        (true, 3),
        (true, 4),
        (false, 2),
        (false, 5),
        (false, 9),
        (false, 23),
    ] {
        let symbol = aztec_symbol(&upper_text(text), compact, layers);
        let result = AztecDecoder::decode(&symbol).unwrap();
        assert_eq!(result.text, text, "compact {compact}, {layers} layers");
        assert_eq!(result.errors_corrected, 0);
    }
}

#[test]
fn test_decode_repairs_wide_codewords() {
    let text = "ROUND TRIP";
    let mut symbol = aztec_symbol(&upper_text(text), false, 9);
    assert_eq!(symbol.bits.width(), 53);
    // Outermost ring, left of the first reference column and past the
    // unused leading bits
    for x in [3, 5, 7] {
        let value = symbol.bits.get(x, 0);
        symbol.bits.set(x, 0, !value);
    }
    let result = AztecDecoder::decode(&symbol).unwrap();
    assert_eq!(result.text, text);
    assert!(result.errors_corrected >= 1);
}
