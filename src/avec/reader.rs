//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::BufRead, string::String, vec::Vec};

use thiserror::Error;

use super::{DecodeOptions, Descriptor, lexer::tokenize, slice::decode_tokens};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The text read is not a valid descriptor.
    #[error(transparent)]
    Decode(#[from] super::Error),
}

/// Read descriptor lines to the end of a reader and decode them.
///
/// This method is also re-exported as `hidscope::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: impl BufRead, options: DecodeOptions) -> Result<Descriptor, Error> {
    let lines = r.lines().collect::<Result<Vec<String>, _>>()?;
    Ok(decode_tokens(tokenize(&lines), options)?)
}
