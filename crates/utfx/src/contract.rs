use crate::{
    error::{Status, UtfxError, UtfxResult},
    logging::{debug, trace},
    unit::{terminated_len, CodeUnit},
};

/// How far the input sequence extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputLength {
    /// Up to, not including, the first zero unit. A slice without one is used whole.
    #[default]
    UntilTerminator,
    /// Exactly this many units; zero units inside are data. Clamped to the slice length.
    Exactly(usize),
}

impl InputLength {
    /// Maps the C convention where a length of `0` means "scan to the terminator".
    pub fn from_raw(len: usize) -> Self {
        match len {
            0 => InputLength::UntilTerminator,
            n => InputLength::Exactly(n),
        }
    }

    /// The logical content of `input`.
    pub fn resolve<T: CodeUnit>(self, input: &[T]) -> &[T] {
        match self {
            InputLength::UntilTerminator => &input[..terminated_len(input)],
            InputLength::Exactly(n) => &input[..n.min(input.len())],
        }
    }
}

/// Room available for the output, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capacity {
    #[default]
    Unbounded,
    Bounded(usize),
}

impl Capacity {
    fn limit_in<T: CodeUnit>(self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bounded(bytes) => Some(bytes / T::WIDTH),
        }
    }
}

/// Result of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converted {
    /// Bytes written to the output, or that would be written when only measuring.
    /// Includes the terminator when one was written.
    pub written: usize,
    pub status: Status,
}

impl Converted {
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// `written` expressed in units of the destination kind.
    pub fn units<T: CodeUnit>(&self) -> usize {
        self.written / T::WIDTH
    }

    pub fn into_result(self) -> UtfxResult<usize> {
        match self.status {
            Status::Ok => Ok(self.written),
            Status::CapacityExceeded => Err(UtfxError::CapacityExceeded {
                written: self.written,
            }),
        }
    }
}

/// Capacity-limited writer shared by every conversion.
///
/// Content is pushed one group at a time, where a group is the complete encoding
/// of one code point. A group either fits entirely or ends the emission. With a
/// bounded limit and a requested terminator, one unit is held back for the
/// terminator before any content is accepted.
pub(crate) struct Sink<'a, T: CodeUnit> {
    output: Option<&'a mut [T]>,
    /// Upper bound on units, terminator included.
    limit: Option<usize>,
    /// Upper bound on content units.
    room: Option<usize>,
    len: usize,
    append_terminator: bool,
    exhausted: bool,
}

impl<'a, T: CodeUnit> Sink<'a, T> {
    pub fn new(output: Option<&'a mut [T]>, capacity: Capacity, append_terminator: bool) -> Self {
        let mut limit = capacity.limit_in::<T>();
        if let Some(buf) = output.as_deref() {
            limit = Some(limit.map_or(buf.len(), |limit| limit.min(buf.len())));
        }

        let room = match (limit, append_terminator) {
            (Some(limit), true) => Some(limit.saturating_sub(1)),
            (limit, _) => limit,
        };

        Self {
            output,
            limit,
            room,
            len: 0,
            append_terminator,
            exhausted: false,
        }
    }

    /// Returns `false` once the output is full; nothing is accepted after that.
    pub fn push(&mut self, group: &[T]) -> bool {
        if self.exhausted {
            return false;
        }

        let end = self.len + group.len();
        if self.room.is_some_and(|room| end > room) {
            trace!(
                written = self.len,
                pending = group.len(),
                "output is full, truncating"
            );
            self.exhausted = true;
            return false;
        }

        if let Some(buf) = self.output.as_deref_mut() {
            buf[self.len..end].copy_from_slice(group);
        }

        self.len = end;
        true
    }

    pub fn finish(mut self) -> Converted {
        if self.append_terminator {
            if self.limit.is_some_and(|limit| self.len >= limit) {
                debug!(written = self.len, "no room for the terminator");
                self.exhausted = true;
            } else {
                if let Some(buf) = self.output.as_deref_mut() {
                    buf[self.len] = T::TERMINATOR;
                }

                self.len += 1;
            }
        }

        Converted {
            written: self.len * T::WIDTH,
            status: if self.exhausted {
                Status::CapacityExceeded
            } else {
                Status::Ok
            },
        }
    }
}
