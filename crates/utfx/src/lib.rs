//! # utfx
//!
//! Allocation-free transcoding between four in-memory text representations:
//!
//! | kind            | unit  | notes                                                    |
//! |-----------------|-------|----------------------------------------------------------|
//! | UTF-16          | `u16` | supplementary code points as surrogate pairs             |
//! | UTF-32          | `u32` | one unit per code point, never range checked             |
//! | UTF-8           | `u8`  | RFC 3629, 1 to 4 bytes per code point                    |
//! | modified UTF-8  | `u8`  | NUL as `C0 80`, every surrogate half as its own 3 bytes  |
//!
//! Every conversion has the same shape:
//!
//! ```text
//! convert_<from>_to_<to>(input, input_len, output, capacity, append_terminator) -> Converted
//! ```
//!
//! - `input_len` is either [`InputLength::UntilTerminator`] (scan to the first zero unit)
//!   or [`InputLength::Exactly`] (zero units are ordinary data).
//! - `output` is the caller's buffer, or `None` to only measure.
//! - `capacity` bounds the output in **bytes**, whatever the destination unit is.
//! - `append_terminator` writes a zero unit after the content. Its slot is reserved
//!   before any content is emitted.
//!
//! The returned [`Converted`] holds the number of bytes written (or that would be
//! written) and a [`Status`]. Only whole encodings of a code point are ever written:
//! when the next one does not fit, emission stops and the status becomes
//! [`Status::CapacityExceeded`].
//!
//! ```
//! use utfx::{convert_utf16_to_utf8, Capacity, InputLength, Status};
//!
//! let text = [0x7A, 0x61, 0x0306, 0xD8FF, 0xDCFF, 0x0000];
//! let until_nul = InputLength::UntilTerminator;
//! let measured = convert_utf16_to_utf8(&text, until_nul, None, Capacity::Unbounded, true);
//! assert_eq!(measured.written, 9);
//!
//! let mut buf = [0u8; 16];
//! let done = convert_utf16_to_utf8(&text, until_nul, Some(&mut buf), Capacity::Bounded(16), true);
//! assert_eq!(done.status, Status::Ok);
//! assert_eq!(&buf[..9], &[0x7A, 0x61, 0xCC, 0x86, 0xF1, 0x8F, 0xB3, 0xBF, 0x00]);
//! ```
//!
//! Nothing is validated. Unpaired surrogates, overlong sequences and code points above
//! U+10FFFF are all transcoded mechanically, so the decoders are total over their input.
mod codec;
mod contract;
mod convert;
mod error;
mod length;
mod logging;
mod unit;

pub use contract::{Capacity, Converted, InputLength};
pub use convert::*;
pub use error::{Status, UtfxError, UtfxResult};
pub use length::{length_modified_utf8, length_utf16, length_utf32, length_utf8};
pub use unit::CodeUnit;
