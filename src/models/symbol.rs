use super::{BitMatrix, Point};

/// Symbol families the core can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarcodeFormat {
    /// Aztec 2-D matrix symbol
    Aztec,
    /// EAN-13 linear barcode
    Ean13,
    /// EAN-8 linear barcode
    Ean8,
    /// UPC-A linear barcode
    UpcA,
}

/// Sampled Aztec symbol handed over by the external locator stage
#[derive(Debug, Clone)]
pub struct AztecDetectorResult {
    /// Sampled modules, data layers only
    pub bits: BitMatrix,
    /// Corner points of the symbol in image space
    pub corners: [Point; 4],
    /// Compact (true) or full-size (false) symbol
    pub compact: bool,
    /// Number of data codewords
    pub nb_datablocks: usize,
    /// Number of data layers
    pub nb_layers: usize,
}

impl AztecDetectorResult {
    /// Create a detector result with unknown corners
    pub fn new(bits: BitMatrix, compact: bool, nb_datablocks: usize, nb_layers: usize) -> Self {
        Self {
            bits,
            corners: [Point::default(); 4],
            compact,
            nb_datablocks,
            nb_layers,
        }
    }

    /// Attach the localization corners
    pub fn with_corners(mut self, corners: [Point; 4]) -> Self {
        self.corners = corners;
        self
    }
}

/// Origin of a decoded byte segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SegmentKind {
    /// Characters produced by the text tables
    Text = 0,
    /// Raw bytes from a binary-shift run
    Byte = 1,
}

/// Contiguous run of payload bytes of a single origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSegment {
    /// Where the bytes came from
    pub kind: SegmentKind,
    /// Bytes as stored in the symbol
    pub bytes: Vec<u8>,
}

impl ByteSegment {
    /// Create an empty segment of the given kind
    pub fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            bytes: Vec::new(),
        }
    }

    /// Segment as a byte vector whose first byte is the kind tag
    pub fn to_tagged_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + 1);
        out.push(self.kind as u8);
        out.extend_from_slice(&self.bytes);
        out
    }
}

/// Decoded 2-D symbol payload
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderResult {
    /// UTF-8 text rendering of the payload
    pub text: String,
    /// Every payload byte in stream order
    pub raw_bytes: Vec<u8>,
    /// Payload split by origin
    pub byte_segments: Vec<ByteSegment>,
    /// Number of codewords repaired by error correction
    pub errors_corrected: usize,
    /// Localization corners copied from the detector result
    pub corners: [Point; 4],
}

/// Decoded 1-D barcode row
#[derive(Debug, Clone, PartialEq)]
pub struct UpcEanResult {
    /// Digits, checksum included
    pub text: String,
    /// Variant that produced the digits
    pub format: BarcodeFormat,
    /// Centers of the start and end guards on the scanned row
    pub points: [Point; 2],
}
