//! Stateful decoding and encoding of DICOS attributes.
//!
//! These abstractions sit between the header codecs of `dicos-encoding`
//! and the data set reader and writer,
//! keeping track of the position in the stream
//! and of the active specific character set.

pub mod decode;
pub mod encode;
