use arrayvec::ArrayVec;

use crate::{
    contract::{Capacity, Converted, Sink},
    unit::CodeUnit,
};

pub(crate) mod mutf8;
pub(crate) mod utf16;
pub(crate) mod utf32;
pub(crate) mod utf8;

pub(crate) use mutf8::ModifiedUtf8;
pub(crate) use utf16::{ComposePairs, Utf16};
pub(crate) use utf32::Utf32;
pub(crate) use utf8::{Decoder, Utf8};

/// A supplementary code point in modified UTF-8 is the longest encoding: two 3-byte halves.
pub(crate) const MAX_GROUP_LEN: usize = 6;

/// The complete encoding of one decoded value.
pub(crate) type Group<T> = ArrayVec<T, MAX_GROUP_LEN>;

/// Destination side of a conversion.
pub(crate) trait Encoding {
    type Unit: CodeUnit;

    fn encode(value: u32) -> Group<Self::Unit>;
}

/// Encode every value with `E` into a capacity-limited sink.
pub(crate) fn transcode<E, I>(
    values: I,
    output: Option<&mut [E::Unit]>,
    capacity: Capacity,
    append_terminator: bool,
) -> Converted
where
    E: Encoding,
    I: IntoIterator<Item = u32>,
{
    let mut sink = Sink::new(output, capacity, append_terminator);
    for value in values {
        if !sink.push(&E::encode(value)) {
            break;
        }
    }

    sink.finish()
}

/// Widen the units of a 16 or 32-bit sequence to raw values.
pub(crate) fn widen<T: CodeUnit>(units: &[T]) -> impl Iterator<Item = u32> + '_ {
    units.iter().map(|unit| unit.value())
}
