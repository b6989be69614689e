//! Failure taxonomy shared by every decode stage

use thiserror::Error;

/// Terminal failure of a localization or decode attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No plausible symbol boundary or guard pattern was found
    #[error("not found: {0}")]
    NotFound(&'static str),
    /// Symbol metadata or structure is invalid or unsupported
    #[error("format error: {0}")]
    Format(&'static str),
    /// Error correction or checksum verification failed
    #[error("checksum error: {0}")]
    Checksum(&'static str),
    /// A bit array was read outside of its populated range
    #[error("bit index {index} out of range for array of {len} bits")]
    OutOfRange {
        /// Requested bit index
        index: usize,
        /// Number of bits in the array
        len: usize,
    },
}

impl DecodeError {
    /// True for failures a caller may recover from by trying another region or frame
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;
