//! Single-byte code page tables.
//!
//! Windows-1250 goes through `encoding_rs`. Code page 437 is not an
//! `encoding_rs` encoding (it only offers IBM866, which differs in the upper
//! half), so its upper half comes from the `oem_cp` tables.

use encoding_rs::WINDOWS_1250;
use oem_cp::code_table::DECODING_TABLE_CP437;

use crate::error::{DecodeError, Result};

/// Decode a single byte using code page 437, returning its Unicode code
/// point.
///
/// Bytes below 0x80 are ASCII. Every byte in the upper half has a mapping,
/// so this never fails.
pub(crate) fn cp437_char(byte: u8) -> char {
    if byte < 0x80 {
        return char::from(byte);
    }
    DECODING_TABLE_CP437[usize::from(byte - 0x80)]
}

/// Decode a Windows-1250 byte slice to a UTF-8 string.
///
/// Uses the WHATWG table without BOM sniffing and without replacement
/// characters, so any byte the table cannot represent surfaces as
/// [`DecodeError::Transcoding`] instead of U+FFFD.
pub(crate) fn windows_1250_to_string(bytes: &[u8]) -> Result<String> {
    WINDOWS_1250
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(std::borrow::Cow::into_owned)
        .ok_or(DecodeError::Transcoding(WINDOWS_1250.name()))
}
