use crate::error::{DecodeError, Result};

/// Turn a decoded EAN-13 string into UPC-A digits.
///
/// Only an EAN-13 whose first digit is `0` is a UPC-A symbol.
pub fn strip_leading_zero(ean13: &str) -> Result<String> {
    ean13
        .strip_prefix('0')
        .map(str::to_owned)
        .ok_or(DecodeError::Format("EAN-13 with nonzero first digit is not UPC-A"))
}
