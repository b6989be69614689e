//! End-to-end decoding through the public API
//!
//! Inputs are synthesized so the expected payloads are exact: Aztec
//! symbols are Reed-Solomon encoded and laid out layer by layer, EAN
//! symbols are drawn into grayscale images and binarized with a fixed
//! threshold.

mod common;

use common::{aztec_symbol, compact_symbol, ean13_image, upper_text};
use image::{GrayImage, Luma};
use rust_barcode::{
    BarcodeFormat, BitMatrix, DecodeError, SegmentKind, UpcEanFormat, decode_aztec,
    decode_upc_ean, detect_rectangle, oned,
};

fn upper(c: char) -> (u32, usize) {
    (c as u32 - 'A' as u32 + 2, 5)
}

#[test]
fn test_aztec_mixed_text_and_binary() {
    // "AZ", B/S with one byte, then "b" through L/L
    let fields = [
        upper('A'),
        upper('Z'),
        (31, 5),
        (1, 5),
        (0xFC, 8),
        (28, 5),
        (3, 5),
    ];
    let result = decode_aztec(&compact_symbol(&fields)).unwrap();

    assert_eq!(result.text, "AZ\u{fc}b");
    assert_eq!(result.raw_bytes, vec![b'A', b'Z', 0xFC, b'b']);
    let kinds: Vec<SegmentKind> = result.byte_segments.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SegmentKind::Text, SegmentKind::Byte, SegmentKind::Text]);
    assert_eq!(result.errors_corrected, 0);
}

#[test]
fn test_aztec_damaged_symbol_still_decodes() {
    let mut symbol = compact_symbol(&[upper('O'), upper('K')]);
    // Damage two modules of the outer ring
    for (x, y) in [(0, 3), (14, 9)] {
        let value = symbol.bits.get(x, y);
        symbol.bits.set(x, y, !value);
    }
    let result = decode_aztec(&symbol).unwrap();
    assert_eq!(result.text, "OK");
    assert!(result.errors_corrected >= 1);
}

#[test]
fn test_aztec_large_full_size_symbol() {
    // 12-bit codewords, reference lines every 16 modules
    let text = "LARGE SYMBOL";
    let symbol = aztec_symbol(&upper_text(text), false, 24);
    assert_eq!(symbol.bits.width(), 117);
    let result = decode_aztec(&symbol).unwrap();
    assert_eq!(result.text, text);
}

#[test]
fn test_aztec_wrong_layer_count_rejected() {
    let mut symbol = compact_symbol(&[upper('A')]);
    symbol.nb_layers = 2;
    assert!(matches!(decode_aztec(&symbol), Err(DecodeError::Format(_))));
}

#[test]
fn test_ean13_from_grayscale_image() {
    let image = ean13_image("4006381333931", 2, 30);
    let matrix = BitMatrix::from_luma(&image, 128);
    let result = decode_upc_ean(&matrix).unwrap();
    assert_eq!(result.text, "4006381333931");
    assert_eq!(result.format, BarcodeFormat::Ean13);
}

#[test]
fn test_upca_reported_for_leading_zero() {
    let image = ean13_image("0036000291452", 3, 12);
    let matrix = BitMatrix::from_luma(&image, 128);
    let result = decode_upc_ean(&matrix).unwrap();
    assert_eq!(result.text, "036000291452");
    assert_eq!(result.format, BarcodeFormat::UpcA);

    let explicit = oned::decode_rows(&matrix, UpcEanFormat::UpcA).unwrap();
    assert_eq!(explicit.text, "036000291452");
}

#[test]
fn test_blank_image_has_no_barcode() {
    let image = GrayImage::from_pixel(200, 40, Luma([240]));
    let matrix = BitMatrix::from_luma(&image, 128);
    assert!(decode_upc_ean(&matrix).unwrap_err().is_not_found());
}

#[test]
fn test_rectangle_from_grayscale_image() {
    let mut image = GrayImage::from_pixel(100, 100, Luma([220]));
    for y in 30..70 {
        for x in 30..70 {
            image.put_pixel(x, y, Luma([30]));
        }
    }
    let matrix = BitMatrix::from_luma(&image, 128);
    let corners = detect_rectangle(&matrix).unwrap();

    for (ex, ey) in [(30.0, 30.0), (69.0, 30.0), (30.0, 69.0), (69.0, 69.0)] {
        assert!(
            corners
                .iter()
                .any(|p| (p.x - ex).abs() <= 1.0 && (p.y - ey).abs() <= 1.0),
            "corner ({ex}, {ey}) missing from {corners:?}"
        );
    }
}
