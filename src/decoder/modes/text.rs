use encoding_rs::mem::decode_latin1;

use super::byte::{read_bytes, read_run_length};
use super::{BitCursor, Table, Token, token};
use crate::error::{DecodeError, Result};
use crate::models::{BitArray, ByteSegment, SegmentKind};

/// Character-decoded payload of one symbol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedPayload {
    /// UTF-8 text; binary bytes are read as ISO-8859-1
    pub text: String,
    /// Every emitted byte in stream order, untranscoded
    pub raw_bytes: Vec<u8>,
    /// Emitted bytes grouped by origin
    pub segments: Vec<ByteSegment>,
}

impl DecodedPayload {
    fn push_chars(&mut self, segment: &mut ByteSegment, chars: &str) {
        self.text.push_str(chars);
        segment.bytes.extend_from_slice(chars.as_bytes());
        self.raw_bytes.extend_from_slice(chars.as_bytes());
    }

    fn push_bytes(&mut self, segment: &mut ByteSegment, bytes: &[u8]) {
        self.text.push_str(&decode_latin1(bytes));
        segment.bytes.extend_from_slice(bytes);
        self.raw_bytes.extend_from_slice(bytes);
    }

    fn flush(&mut self, segment: ByteSegment) {
        if !segment.bytes.is_empty() {
            self.segments.push(segment);
        }
    }
}

/// Decode the first `end_index` bits of a corrected stream.
///
/// Decoding starts in the upper table. A shift code applies its table to
/// exactly one following token, a latch code applies it until the next
/// latch. Running out of bits ends decoding without error, including in
/// the middle of a binary run.
pub fn decode_payload(bits: &BitArray, end_index: usize) -> Result<DecodedPayload> {
    let mut cursor = BitCursor::new(bits, end_index);
    let mut payload = DecodedPayload::default();
    let mut segment = ByteSegment::new(SegmentKind::Text);

    let mut table = Table::Upper;
    let mut last_table = Table::Upper;
    let mut shift = false;
    let mut binary_shift = false;

    loop {
        let kind = if table == Table::Binary {
            SegmentKind::Byte
        } else {
            SegmentKind::Text
        };
        if segment.kind != kind {
            payload.flush(std::mem::replace(&mut segment, ByteSegment::new(kind)));
        }

        let switch_shift = shift;
        if !shift {
            last_table = table;
        }

        if binary_shift {
            let Some(length) = read_run_length(&mut cursor)? else {
                break;
            };
            let run = read_bytes(&mut cursor, length)?;
            payload.push_bytes(&mut segment, &run.bytes);
            if run.truncated {
                log::debug!("binary run cut short after {} of {length} bytes", run.bytes.len());
                break;
            }
            binary_shift = false;
        } else if table == Table::Binary {
            let Some(byte) = cursor.read(8)? else {
                break;
            };
            payload.push_bytes(&mut segment, &[byte as u8]);
        } else {
            let Some(code) = cursor.read(table.token_bits())? else {
                break;
            };
            match token(table, code) {
                Some(Token::Chars(chars)) => payload.push_chars(&mut segment, chars),
                Some(Token::Latch(next)) => table = next,
                Some(Token::Shift(next)) => {
                    table = next;
                    shift = true;
                    binary_shift = next == Table::Binary;
                }
                None => return Err(DecodeError::Format("code outside character table")),
            }
        }

        if switch_shift {
            table = last_table;
            shift = false;
        }
    }

    payload.flush(segment);
    Ok(payload)
}
