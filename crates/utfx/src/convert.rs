//! All conversions between the four representations.
//!
//! Each function resolves its input with [`InputLength::resolve`], turns it into a
//! stream of values and hands the stream to the destination encoder. Whether adjacent
//! surrogate halves are merged before encoding depends on the pair:
//!
//! | from \ to | UTF-16   | UTF-32   | UTF-8    | modified UTF-8 |
//! |-----------|----------|----------|----------|----------------|
//! | UTF-16    | composed | composed | composed | unit by unit   |
//! | UTF-32    | as is    | as is    | as is    | as is          |
//! | 8-bit     | as is    | composed | composed | as is          |
//!
//! A composed pair is encoded as one group and is never split by truncation.
//! The two 8-bit sources share a decoder that understands both forms.
use crate::{
    codec::{transcode, widen, ComposePairs, Decoder, ModifiedUtf8, Utf16, Utf32, Utf8},
    contract::{Capacity, Converted, InputLength},
};

/// Copy UTF-16, keeping surrogate pairs together under truncation.
pub fn convert_utf16_to_utf16(
    input: &[u16],
    input_len: InputLength,
    output: Option<&mut [u16]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<Utf16, _>(
        ComposePairs::new(widen(input)),
        output,
        capacity,
        append_terminator,
    )
}

/// Decode UTF-16 into code points. Adjacent high and low surrogates always compose.
pub fn convert_utf16_to_utf32(
    input: &[u16],
    input_len: InputLength,
    output: Option<&mut [u32]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<Utf32, _>(
        ComposePairs::new(widen(input)),
        output,
        capacity,
        append_terminator,
    )
}

pub fn convert_utf16_to_utf8(
    input: &[u16],
    input_len: InputLength,
    output: Option<&mut [u8]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<Utf8, _>(
        ComposePairs::new(widen(input)),
        output,
        capacity,
        append_terminator,
    )
}

/// Every unit is encoded on its own, so each surrogate half becomes an independent
/// 3-byte sequence and truncation may fall between the halves of a pair.
pub fn convert_utf16_to_modified_utf8(
    input: &[u16],
    input_len: InputLength,
    output: Option<&mut [u8]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<ModifiedUtf8, _>(widen(input), output, capacity, append_terminator)
}

/// Encode code points as UTF-16. Values from U+10000 up become a pair, smaller values
/// (surrogates included) are written unchanged.
pub fn convert_utf32_to_utf16(
    input: &[u32],
    input_len: InputLength,
    output: Option<&mut [u16]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<Utf16, _>(widen(input), output, capacity, append_terminator)
}

pub fn convert_utf32_to_utf32(
    input: &[u32],
    input_len: InputLength,
    output: Option<&mut [u32]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<Utf32, _>(widen(input), output, capacity, append_terminator)
}

pub fn convert_utf32_to_utf8(
    input: &[u32],
    input_len: InputLength,
    output: Option<&mut [u8]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<Utf8, _>(widen(input), output, capacity, append_terminator)
}

/// A supplementary code point costs 6 bytes here and is written all or nothing.
pub fn convert_utf32_to_modified_utf8(
    input: &[u32],
    input_len: InputLength,
    output: Option<&mut [u8]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<ModifiedUtf8, _>(widen(input), output, capacity, append_terminator)
}

/// Decode UTF-8 (standard or modified) into UTF-16. 4-byte sequences become pairs,
/// 3-byte surrogate halves become one unit each.
pub fn convert_utf8_to_utf16(
    input: &[u8],
    input_len: InputLength,
    output: Option<&mut [u16]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<Utf16, _>(Decoder::new(input), output, capacity, append_terminator)
}

pub fn convert_utf8_to_utf32(
    input: &[u8],
    input_len: InputLength,
    output: Option<&mut [u32]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<Utf32, _>(
        ComposePairs::new(Decoder::new(input)),
        output,
        capacity,
        append_terminator,
    )
}

/// Re-encode any 8-bit input as standard UTF-8: `C0 80` turns into `00` and
/// surrogate halves are merged into 4-byte sequences.
pub fn convert_utf8_to_utf8(
    input: &[u8],
    input_len: InputLength,
    output: Option<&mut [u8]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<Utf8, _>(
        ComposePairs::new(Decoder::new(input)),
        output,
        capacity,
        append_terminator,
    )
}

/// Standard to modified UTF-8 without an intermediate 16 or 32-bit buffer.
///
/// With [`InputLength::Exactly`] a zero byte inside the input is data and comes out
/// as `C0 80`.
pub fn convert_utf8_to_modified_utf8(
    input: &[u8],
    input_len: InputLength,
    output: Option<&mut [u8]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    let input = input_len.resolve(input);
    transcode::<ModifiedUtf8, _>(Decoder::new(input), output, capacity, append_terminator)
}

pub fn convert_modified_utf8_to_utf16(
    input: &[u8],
    input_len: InputLength,
    output: Option<&mut [u16]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    convert_utf8_to_utf16(input, input_len, output, capacity, append_terminator)
}

/// Surrogate halves are decoded one by one and then composed, as from UTF-16.
pub fn convert_modified_utf8_to_utf32(
    input: &[u8],
    input_len: InputLength,
    output: Option<&mut [u32]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    convert_utf8_to_utf32(input, input_len, output, capacity, append_terminator)
}

/// Modified to standard UTF-8 without an intermediate 16 or 32-bit buffer.
pub fn convert_modified_utf8_to_utf8(
    input: &[u8],
    input_len: InputLength,
    output: Option<&mut [u8]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    convert_utf8_to_utf8(input, input_len, output, capacity, append_terminator)
}

pub fn convert_modified_utf8_to_modified_utf8(
    input: &[u8],
    input_len: InputLength,
    output: Option<&mut [u8]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted {
    convert_utf8_to_modified_utf8(input, input_len, output, capacity, append_terminator)
}
