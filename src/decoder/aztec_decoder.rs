/// Aztec decoder - sampled matrix to text
use crate::decoder::bitstream::{extract_bits, remove_dashed_lines};
use crate::decoder::modes::decode_payload;
use crate::error::Result;
use crate::models::{AztecDetectorResult, DecoderResult};

/// Decodes sampled Aztec symbols
pub struct AztecDecoder;

impl AztecDecoder {
    /// Decode the data layers of a located symbol.
    ///
    /// Full-size symbols have their reference grid removed first. The
    /// stages run in order and the first failure aborts the decode.
    pub fn decode(detected: &AztecDetectorResult) -> Result<DecoderResult> {
        let layers = detected.nb_layers;

        let stripped;
        let matrix = if detected.compact {
            &detected.bits
        } else {
            stripped = remove_dashed_lines(&detected.bits);
            &stripped
        };

        let extracted = extract_bits(matrix, detected.compact, layers)?;
        let corrected = extracted.correct(layers, detected.nb_datablocks)?;
        if corrected.errors_corrected > 0 {
            log::debug!(
                "repaired {} of {} codewords",
                corrected.errors_corrected,
                corrected.data_codewords
            );
        }

        let payload = decode_payload(&corrected.bits, corrected.end_index())?;

        Ok(DecoderResult {
            text: payload.text,
            raw_bytes: payload.raw_bytes,
            byte_segments: payload.segments,
            errors_corrected: corrected.errors_corrected,
            corners: detected.corners,
        })
    }
}

#[cfg(test)]
mod tests;
