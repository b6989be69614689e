//! rust_barcode - Aztec and UPC/EAN symbol localization and decoding
//!
//! Works on monochrome bit matrices. The localization half finds symbol
//! boundaries and scores finder-pattern triples; the decoding half turns a
//! sampled Aztec symbol into text through Reed-Solomon correction and a
//! table-driven character decoder, and reads UPC/EAN linear barcodes
//! row by row.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Aztec decoding (bit extraction, error correction, character modes)
pub mod decoder;
/// Symbol localization (rectangle corners, finder-pattern scoring)
pub mod detector;
/// Failure taxonomy
pub mod error;
/// Core data structures (BitMatrix, BitArray, Point, results)
pub mod models;
/// UPC/EAN linear barcode decoding
pub mod oned;

#[cfg(test)]
extern crate self as rust_barcode;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod common;

pub use decoder::aztec_decoder::AztecDecoder;
pub use detector::{FinderPattern, FinderPatternAnalyzer, RectangleDetector};
pub use error::{DecodeError, Result};
pub use models::{
    AztecDetectorResult, BarcodeFormat, BitArray, BitMatrix, ByteSegment, DecoderResult, Point,
    SegmentKind, UpcEanResult,
};
pub use oned::UpcEanFormat;

/// Find the four corners of the quiet-zone bounded symbol around the
/// image center, ordered top, left, right, bottom
pub fn detect_rectangle(matrix: &BitMatrix) -> Result<[Point; 4]> {
    RectangleDetector::new(matrix).detect()
}

/// Decode a sampled Aztec symbol
pub fn decode_aztec(detected: &AztecDetectorResult) -> Result<DecoderResult> {
    AztecDecoder::decode(detected)
}

/// Scan a matrix for any UPC/EAN barcode.
///
/// EAN-13 is tried before EAN-8. An EAN-13 whose first digit is `0` is
/// reported as UPC-A.
pub fn decode_upc_ean(matrix: &BitMatrix) -> Result<UpcEanResult> {
    if let Ok(mut result) = oned::decode_rows(matrix, UpcEanFormat::Ean13) {
        if let Ok(upc) = oned::upca::strip_leading_zero(&result.text) {
            result.text = upc;
            result.format = BarcodeFormat::UpcA;
        }
        return Ok(result);
    }
    oned::decode_rows(matrix, UpcEanFormat::Ean8)
}
