//! DICOS encoding and decoding primitives.
//!
//! This crate provides the low-level pieces of the binary codec:
//! byte order aware readers and writers of primitive values,
//! attribute header decoders and encoders for each supported
//! [transfer syntax](TransferSyntax),
//! text codecs for the specific character sets,
//! and the [byte stream](stream::ByteStream) abstraction
//! consumed by the file layer.
//!
//! Reading and writing whole data sets is the job of `dicos-parser`.
//! All APIs are based on synchronous I/O.

pub mod decode;
pub mod encode;
pub mod stream;
pub mod text;
pub mod transfer_syntax;

pub use byteordered::Endianness;
pub use decode::{Decode, DecodeFrom};
pub use encode::{Encode, EncodeTo};
pub use stream::{ByteStream, FileStream, MemoryStream, SliceStream};
pub use text::{SpecificCharacterSet, TextCodec};
pub use transfer_syntax::TransferSyntax;
