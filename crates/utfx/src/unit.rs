use std::fmt::Debug;

/// A fixed-width storage unit of one of the supported representations.
///
/// Implemented for `u8` (both 8-bit forms), `u16` (UTF-16) and `u32` (UTF-32).
pub trait CodeUnit: Copy + Eq + Debug {
    /// Size of one unit in bytes.
    const WIDTH: usize;
    /// The zero unit that ends an implicitly bounded sequence.
    const TERMINATOR: Self;

    fn value(self) -> u32;
}

macro_rules! impl_code_unit {
    ($($ty:ty),*) => {
        $(
            impl CodeUnit for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();
                const TERMINATOR: Self = 0;

                #[inline(always)]
                fn value(self) -> u32 {
                    self as u32
                }
            }
        )*
    };
}

impl_code_unit!(u8, u16, u32);

/// Number of units before the first terminator, or the whole slice if it has none.
#[inline]
pub(crate) fn terminated_len<T: CodeUnit>(units: &[T]) -> usize {
    units
        .iter()
        .position(|unit| *unit == T::TERMINATOR)
        .unwrap_or(units.len())
}
