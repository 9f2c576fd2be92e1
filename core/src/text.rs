//! Text detection for byte buffers
//!
//! Decides whether a byte array should be shown as a string or as a list of
//! numbers. The decision depends only on the buffer's contents.

use std::fmt;

/// Printable ASCII range, space through tilde
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// The bytes before the first NUL, or the whole buffer if there is none
pub fn until_nul(data: &[u8]) -> &[u8] {
    match data.iter().position(|&b| b == 0) {
        Some(end) => &data[..end],
        None => data,
    }
}

/// Whether a buffer reads as text
///
/// Without a NUL every byte must be printable. With a NUL, every byte before
/// the first one must be printable and there must be at least one such byte.
/// Empty buffers are never text.
pub fn is_printable_text(data: &[u8]) -> bool {
    let text = until_nul(data);
    !text.is_empty() && text.iter().all(|&b| is_printable(b))
}

/// Renders a buffer up to its first NUL, escaping anything non-printable
pub struct Text<'a>(pub &'a [u8]);

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in until_nul(self.0) {
            if is_printable(byte) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{:02X}", byte)?;
            }
        }
        Ok(())
    }
}
