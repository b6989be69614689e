use super::BitCursor;
use crate::error::Result;

/// Lengths above this use the 11-bit extension
const SHORT_LENGTH_MAX: u32 = 31;

/// Read the byte count that follows a binary shift.
///
/// A 5-bit field holds counts 1 to 31. A zero field is followed by an
/// 11-bit extension that stores `count - 31`. Returns `None` when the
/// stream ends inside the length.
pub fn read_run_length(cursor: &mut BitCursor<'_>) -> Result<Option<usize>> {
    let Some(short) = cursor.read(5)? else {
        return Ok(None);
    };
    if short != 0 {
        return Ok(Some(short as usize));
    }
    Ok(cursor
        .read(11)?
        .map(|extension| (extension + SHORT_LENGTH_MAX) as usize))
}

/// Outcome of reading a binary-shift run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteRun {
    /// Bytes read, possibly fewer than requested
    pub bytes: Vec<u8>,
    /// True when the stream ended before the run was complete
    pub truncated: bool,
}

/// Read up to `count` raw bytes
pub fn read_bytes(cursor: &mut BitCursor<'_>, count: usize) -> Result<ByteRun> {
    let mut bytes = Vec::with_capacity(count.min(cursor.remaining() / 8));
    for _ in 0..count {
        match cursor.read(8)? {
            Some(byte) => bytes.push(byte as u8),
            None => {
                return Ok(ByteRun {
                    bytes,
                    truncated: true,
                });
            }
        }
    }
    Ok(ByteRun {
        bytes,
        truncated: false,
    })
}
