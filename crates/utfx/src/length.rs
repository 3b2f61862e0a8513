use crate::unit::terminated_len;

/// Number of 16-bit units before the terminator. A surrogate pair counts as two.
pub fn length_utf16(units: &[u16]) -> usize {
    terminated_len(units)
}

/// Number of code points before the terminator.
pub fn length_utf32(units: &[u32]) -> usize {
    terminated_len(units)
}

/// Number of bytes before the terminator.
pub fn length_utf8(bytes: &[u8]) -> usize {
    terminated_len(bytes)
}

/// Number of bytes before the terminator. Modified UTF-8 never contains a zero
/// byte of its own, so the first one always ends the string.
pub fn length_modified_utf8(bytes: &[u8]) -> usize {
    terminated_len(bytes)
}
