/// Codeword assembly, Reed-Solomon correction and bit un-stuffing
use crate::decoder::bitstream::ExtractedBits;
use crate::decoder::reed_solomon::{
    GenericGf, ReedSolomonDecoder, aztec_data_6, aztec_data_8, aztec_data_10, aztec_data_12,
};
use crate::decoder::tables::codeword_size;
use crate::error::{DecodeError, Result};
use crate::models::BitArray;

/// Data bits after error correction, ready for character decoding
#[derive(Debug, Clone)]
pub struct CorrectedBits {
    /// Data bits with stuffed bits removed; trailing capacity is zero
    pub bits: BitArray,
    /// Width of one codeword in bits
    pub codeword_size: usize,
    /// Number of data codewords
    pub data_codewords: usize,
    /// Stuffed bits dropped while un-inverting
    pub inverted_bit_count: usize,
    /// Codewords repaired by Reed-Solomon
    pub errors_corrected: usize,
}

impl CorrectedBits {
    /// Index one past the last meaningful data bit
    pub fn end_index(&self) -> usize {
        self.codeword_size * self.data_codewords - self.inverted_bit_count
    }
}

fn field_for(codeword_size: usize) -> &'static GenericGf {
    match codeword_size {
        6 => aztec_data_6(),
        8 => aztec_data_8(),
        10 => aztec_data_10(),
        _ => aztec_data_12(),
    }
}

impl ExtractedBits {
    /// Group the raw stream into codewords, correct them, and strip the
    /// stuffed bits from the `nb_datablocks` data codewords.
    pub fn correct(self, layers: usize, nb_datablocks: usize) -> Result<CorrectedBits> {
        let codeword_size = codeword_size(layers);
        let num_codewords = self.num_codewords;
        if nb_datablocks == 0 || nb_datablocks > num_codewords {
            log::debug!("{nb_datablocks} data codewords out of {num_codewords}");
            return Err(DecodeError::Format("invalid data codeword count"));
        }
        let num_ec_codewords = num_codewords - nb_datablocks;

        // Unused bits sit in front of the first codeword
        let offset = self
            .capacity
            .total_bits
            .checked_sub(num_codewords * codeword_size)
            .ok_or(DecodeError::Format("codewords exceed symbol capacity"))?;

        let mut codewords = (0..num_codewords)
            .map(|i| {
                self.raw
                    .read_bits(offset + i * codeword_size, codeword_size)
                    .map(|v| v as u16)
            })
            .collect::<Result<Vec<u16>>>()?;

        let decoder = ReedSolomonDecoder::new(field_for(codeword_size));
        let errors_corrected = decoder
            .decode(&mut codewords, num_ec_codewords)
            .inspect_err(|e| log::debug!("error correction failed: {e}"))?;

        let (bits, inverted_bit_count) =
            remove_stuffed_bits(&codewords[..nb_datablocks], codeword_size)?;

        Ok(CorrectedBits {
            bits,
            codeword_size,
            data_codewords: nb_datablocks,
            inverted_bit_count,
            errors_corrected,
        })
    }
}

/// Undo bit stuffing on data codewords.
///
/// A codeword whose first `codeword_size - 1` bits share one color carries
/// a final marker bit of the opposite color, which is dropped. A marker of
/// the same color is a format error. Returns the packed bits and the number
/// of dropped markers.
pub fn remove_stuffed_bits(codewords: &[u16], codeword_size: usize) -> Result<(BitArray, usize)> {
    let mut bits = BitArray::new(codewords.len() * codeword_size);
    let mut offset = 0usize;
    let mut inverted = 0usize;

    for (i, &codeword) in codewords.iter().enumerate() {
        let mut series_color = false;
        let mut series_count = 0usize;

        for j in 0..codeword_size {
            let color = (codeword >> (codeword_size - 1 - j)) & 1 == 1;

            if series_count == codeword_size - 1 {
                if color == series_color {
                    log::debug!("codeword {i} ({codeword:#x}) has no inverted marker bit");
                    return Err(DecodeError::Format("bit was not inverted"));
                }
                series_color = false;
                series_count = 0;
                offset += 1;
                inverted += 1;
            } else {
                if series_color == color {
                    series_count += 1;
                } else {
                    series_count = 1;
                    series_color = color;
                }
                if color {
                    bits.set(i * codeword_size + j - offset);
                }
            }
        }
    }

    Ok((bits, inverted))
}
