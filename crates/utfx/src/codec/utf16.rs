use std::iter::Peekable;

use super::{Encoding, Group};

const HIGH_SURROGATE_START: u32 = 0xD800;
const HIGH_SURROGATE_END: u32 = 0xDBFF;
const LOW_SURROGATE_START: u32 = 0xDC00;
const LOW_SURROGATE_END: u32 = 0xDFFF;
const SUPPLEMENTARY_START: u32 = 0x1_0000;

#[inline(always)]
pub(crate) fn is_high_surrogate(value: u32) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&value)
}

#[inline(always)]
pub(crate) fn is_low_surrogate(value: u32) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&value)
}

#[inline(always)]
pub(crate) fn is_supplementary(value: u32) -> bool {
    value >= SUPPLEMENTARY_START
}

/// Both arguments must be in their surrogate ranges.
#[inline(always)]
pub(crate) fn compose(high: u32, low: u32) -> u32 {
    SUPPLEMENTARY_START + ((high - HIGH_SURROGATE_START) << 10) + (low - LOW_SURROGATE_START)
}

/// Split a supplementary value into `[high, low]`.
///
/// Values above U+10FFFF do not fit a pair; the high half keeps only 16 bits.
#[inline(always)]
pub(crate) fn decompose(value: u32) -> [u32; 2] {
    let offset = value - SUPPLEMENTARY_START;
    [
        (HIGH_SURROGATE_START + (offset >> 10)) & 0xFFFF,
        LOW_SURROGATE_START + (offset & 0x3FF),
    ]
}

pub(crate) struct Utf16;

impl Encoding for Utf16 {
    type Unit = u16;

    fn encode(value: u32) -> Group<u16> {
        let mut group = Group::new();
        if is_supplementary(value) {
            let [high, low] = decompose(value);
            group.push(high as u16);
            group.push(low as u16);
        } else {
            group.push(value as u16);
        }

        group
    }
}

/// Merges every high surrogate that is directly followed by a low surrogate into
/// one supplementary value. Everything else passes through untouched.
pub(crate) struct ComposePairs<I: Iterator<Item = u32>> {
    inner: Peekable<I>,
}

impl<I: Iterator<Item = u32>> ComposePairs<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner: inner.peekable(),
        }
    }
}

impl<I: Iterator<Item = u32>> Iterator for ComposePairs<I> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let value = self.inner.next()?;
        if is_high_surrogate(value) {
            if let Some(low) = self.inner.next_if(|next| is_low_surrogate(*next)) {
                return Some(compose(value, low));
            }
        }

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.inner.size_hint();
        (low.div_ceil(2), high)
    }
}
