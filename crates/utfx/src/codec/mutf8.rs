use super::{
    utf16::{decompose, is_supplementary},
    utf8::{cont_byte, encode_standard},
    Encoding, Group,
};

/// Two-byte form of the NUL code point.
pub(crate) const MODIFIED_NUL: [u8; 2] = [0xC0, 0x80];

/// Modified UTF-8: NUL becomes `C0 80` and a supplementary value is written as its
/// surrogate pair, each half in 3 bytes.
pub(crate) struct ModifiedUtf8;

/// Three-byte form of a 16-bit surrogate half. Always 3 bytes, even when a value
/// past U+10FFFF leaves the high half below 0x800, so the group never holds a zero byte.
fn encode_half(half: u32) -> [u8; 3] {
    [
        0xE0 | ((half >> 12) & 0x0F) as u8,
        cont_byte(half >> 6),
        cont_byte(half),
    ]
}

impl Encoding for ModifiedUtf8 {
    type Unit = u8;

    fn encode(value: u32) -> Group<u8> {
        if value == 0 {
            let mut group = Group::new();
            group.extend(MODIFIED_NUL);
            return group;
        }

        if !is_supplementary(value) {
            return encode_standard(value);
        }

        let [high, low] = decompose(value);
        let mut group = Group::new();
        group.extend(encode_half(high));
        group.extend(encode_half(low));
        group
    }
}
