//! UPC/EAN linear barcode decoding
//!
//! A row is decoded by locating the start guard, matching the digit run
//! lengths of both halves, locating the end guard and verifying the
//! trailing quiet zone and the check digit.

/// EAN-8 digit layout
pub mod ean8;
/// EAN-13 digit layout and first-digit parity
pub mod ean13;
/// Parallel multi-row scan of a bit matrix
pub mod row_scan;
/// UPC-A as a restricted EAN-13
pub mod upca;
/// Guards, digit matching and checksum shared by every variant
pub mod upc_ean;

pub use row_scan::decode_rows;
pub use upc_ean::UpcEanFormat;

