/// Growable packed bit sequence
pub mod bit_array;
/// Monochrome bit matrix
pub mod matrix;
/// Image-space points
pub mod point;
/// Symbol metadata and decode results
pub mod symbol;

pub use bit_array::BitArray;
pub use matrix::BitMatrix;
pub use point::Point;
pub use symbol::{
    AztecDetectorResult, BarcodeFormat, ByteSegment, DecoderResult, SegmentKind, UpcEanResult,
};
