use thiserror::Error;

pub type UtfxResult<T> = Result<T, UtfxError>;

/// Outcome of a single conversion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    /// The output could not hold everything. Only complete code point encodings
    /// (and the terminator, if it fit) were written.
    CapacityExceeded,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtfxError {
    #[error("Output capacity exceeded. Only {written} bytes were written, provide a larger buffer and convert again")]
    CapacityExceeded { written: usize },
}
