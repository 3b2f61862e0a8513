use super::{Encoding, Group};

/// Values are stored as they are, whether or not they are Unicode scalars.
pub(crate) struct Utf32;

impl Encoding for Utf32 {
    type Unit = u32;

    fn encode(value: u32) -> Group<u32> {
        let mut group = Group::new();
        group.push(value);
        group
    }
}
