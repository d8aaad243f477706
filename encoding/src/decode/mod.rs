//! This module contains all DICOS attribute header decoding logic.

use byteordered::Endianness;
use dicos_core::header::{AttributeHeader, SequenceItemHeader, SequenceItemHeaderError};
use dicos_core::Tag;
use snafu::{Backtrace, Snafu};
use std::io::{self, Read};

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

/// Module-level error type:
/// for errors which may occur while decoding DICOS headers.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read the beginning (tag) of the header"))]
    ReadHeaderTag {
        backtrace: Option<Backtrace>,
        source: io::Error,
    },
    #[snafu(display("Failed to read the item header"))]
    ReadItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's item length field"))]
    ReadItemLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's tag field"))]
    ReadTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes"))]
    ReadReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's attribute length field"))]
    ReadLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's value representation"))]
    ReadVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Bad sequence item header"))]
    BadSequenceHeader { source: SequenceItemHeaderError },
}

impl Error {
    /// Whether the error was caused by the source ending
    /// right at the start of a header.
    pub fn is_clean_eof(&self) -> bool {
        matches!(self, Error::ReadHeaderTag { source, .. } if source.kind() == io::ErrorKind::UnexpectedEof)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reading of primitive binary values in a fixed byte order.
///
/// There are only two implementations,
/// [`LittleEndianBasicDecoder`](basic::LittleEndianBasicDecoder)
/// and [`BigEndianBasicDecoder`](basic::BigEndianBasicDecoder),
/// plus the run-time choice between them,
/// [`BasicDecoder`](basic::BasicDecoder).
pub trait BasicDecode {
    /// Retrieve the source's endianness, as expected by this decoder.
    fn endianness(&self) -> Endianness;

    /// Decode an unsigned short value from the given source.
    fn decode_us<S>(&self, source: S) -> io::Result<u16>
    where
        S: Read;

    /// Decode an unsigned long value from the given source.
    fn decode_ul<S>(&self, source: S) -> io::Result<u32>
    where
        S: Read;

    /// Decode an unsigned very long value from the given source.
    fn decode_uv<S>(&self, source: S) -> io::Result<u64>
    where
        S: Read;

    /// Decode a signed short value from the given source.
    fn decode_ss<S>(&self, source: S) -> io::Result<i16>
    where
        S: Read;

    /// Decode a signed long value from the given source.
    fn decode_sl<S>(&self, source: S) -> io::Result<i32>
    where
        S: Read;

    /// Decode a signed very long value from the given source.
    fn decode_sv<S>(&self, source: S) -> io::Result<i64>
    where
        S: Read;

    /// Decode a single precision float value from the given source.
    fn decode_fl<S>(&self, source: S) -> io::Result<f32>
    where
        S: Read;

    /// Decode a double precision float value from the given source.
    fn decode_fd<S>(&self, source: S) -> io::Result<f64>
    where
        S: Read;

    /// Decode a DICOS attribute tag from the given source.
    fn decode_tag<S>(&self, mut source: S) -> io::Result<Tag>
    where
        S: Read,
    {
        let g = self.decode_us(&mut source)?;
        let e = self.decode_us(source)?;
        Ok(Tag(g, e))
    }
}

/// Decoding of attribute headers in one transfer syntax.
pub trait Decode {
    /// Decode the next attribute header,
    /// leaving the source at the start of the value.
    ///
    /// Item and delimitation headers are decoded as well,
    /// with the VR `UN`.
    /// Returns the header and the number of bytes read.
    fn decode_header<S>(&self, source: &mut S) -> Result<(AttributeHeader, usize)>
    where
        S: ?Sized + Read;

    /// Decode the next item header or delimiter.
    /// These never carry a VR, whatever the transfer syntax.
    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read;

    /// Decode a DICOS attribute tag from the given source.
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read;
}

/// The object safe form of [`Decode`] for one source type,
/// so that the decoder can be picked at run time
/// from the transfer syntax of the data set.
pub trait DecodeFrom<S: ?Sized + Read> {
    /// Same as [`Decode::decode_header`].
    fn decode_header(&self, source: &mut S) -> Result<(AttributeHeader, usize)>;

    /// Same as [`Decode::decode_item_header`].
    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader>;

    /// Same as [`Decode::decode_tag`].
    fn decode_tag(&self, source: &mut S) -> Result<Tag>;
}

impl<S: ?Sized, T: ?Sized> DecodeFrom<S> for &T
where
    S: Read,
    T: DecodeFrom<S>,
{
    fn decode_header(&self, source: &mut S) -> Result<(AttributeHeader, usize)> {
        (**self).decode_header(source)
    }

    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        (**self).decode_item_header(source)
    }

    fn decode_tag(&self, source: &mut S) -> Result<Tag> {
        (**self).decode_tag(source)
    }
}

impl<S: ?Sized, T: ?Sized> DecodeFrom<S> for Box<T>
where
    S: Read,
    T: DecodeFrom<S>,
{
    fn decode_header(&self, source: &mut S) -> Result<(AttributeHeader, usize)> {
        (**self).decode_header(source)
    }

    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        (**self).decode_item_header(source)
    }

    fn decode_tag(&self, source: &mut S) -> Result<Tag> {
        (**self).decode_tag(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::explicit_le::ExplicitVRLittleEndianDecoder;

    fn is_decode_from<T: DecodeFrom<dyn Read>>(_decoder: &T) {}

    #[test]
    fn boxed_decoder_from_is_decoder_from() {
        let decoder = ExplicitVRLittleEndianDecoder::default();
        is_decode_from(&decoder);
        let boxed = Box::new(decoder);
        is_decode_from(&boxed);
        let erased = boxed as Box<dyn DecodeFrom<dyn Read>>;
        is_decode_from(&erased);
    }

    #[test]
    fn clean_eof_is_detected() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let mut empty: &[u8] = &[];
        let err = Decode::decode_header(&dec, &mut empty).unwrap_err();
        assert!(err.is_clean_eof());
    }
}
