use super::{Encoding, Group};

/// Mask of the value bits in a leading byte, shifted right by the sequence width.
const FIRST_BYTE_VALUE_MASK: u8 = 0x7F;
/// Value bits of a continuation byte.
const CONT_MASK: u8 = 0x3F;
const CONT_TAG: u8 = 0x80;

/// Standard (RFC 3629) encoding of one value.
///
/// Values above U+FFFF always take 4 bytes. Bits above the 21st are dropped.
#[inline]
pub(crate) fn encode_standard(value: u32) -> Group<u8> {
    let mut group = Group::new();
    match value {
        0..=0x7F => group.push(value as u8),
        0x80..=0x7FF => {
            group.push(0xC0 | (value >> 6) as u8);
            group.push(cont_byte(value));
        }
        0x800..=0xFFFF => {
            group.push(0xE0 | (value >> 12) as u8);
            group.push(cont_byte(value >> 6));
            group.push(cont_byte(value));
        }
        _ => {
            group.push(0xF0 | ((value >> 18) & 0x07) as u8);
            group.push(cont_byte(value >> 12));
            group.push(cont_byte(value >> 6));
            group.push(cont_byte(value));
        }
    }

    group
}

#[inline(always)]
pub(crate) fn cont_byte(bits: u32) -> u8 {
    CONT_TAG | (bits as u8 & CONT_MASK)
}

/// Bytes in the sequence introduced by `lead`.
///
/// Bytes that cannot start a sequence (continuation bytes and `F8..=FF`) count as
/// a sequence of their own.
#[inline(always)]
pub(crate) fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

pub(crate) struct Utf8;

impl Encoding for Utf8 {
    type Unit = u8;

    fn encode(value: u32) -> Group<u8> {
        encode_standard(value)
    }
}

/// Decodes standard and modified UTF-8 alike.
///
/// 4-byte sequences yield supplementary values, 3-byte surrogate halves yield the
/// half itself and `C0 80` yields zero. Nothing is rejected: a sequence cut short
/// by the end of the input reads the missing continuation bits as zero.
pub(crate) struct Decoder<'a> {
    bytes: &'a [u8],
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl Iterator for Decoder<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let (&lead, rest) = self.bytes.split_first()?;
        let width = sequence_width(lead);
        if width == 1 {
            self.bytes = rest;
            return Some(lead as u32);
        }

        let (cont, rest) = rest.split_at((width - 1).min(rest.len()));
        let mut value = (lead & (FIRST_BYTE_VALUE_MASK >> width)) as u32;
        for i in 0..width - 1 {
            let bits = cont.get(i).map_or(0, |byte| byte & CONT_MASK);
            value = (value << 6) | bits as u32;
        }

        self.bytes = rest;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.bytes.len().div_ceil(4), Some(self.bytes.len()))
    }
}
