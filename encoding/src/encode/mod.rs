//! This module contains all DICOS attribute header encoding logic.
//!
//! Value payloads are written by the stateful encoder of the parser crate.
//! The encoders here only know about tags, VRs, lengths and item framing.

use byteordered::Endianness;
use dicos_core::header::AttributeHeader;
use dicos_core::Tag;
use snafu::{Backtrace, Snafu};
use std::io::{self, Write};

pub mod basic;
pub mod explicit_be;
pub mod explicit_le;
pub mod implicit_le;

pub use self::basic::BasicEncoder;

/// Module-level error type:
/// for errors which may occur while encoding DICOS headers.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to write attribute tag"))]
    WriteTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write attribute header"))]
    WriteHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item header"))]
    WriteItemHeader {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write item delimiter"))]
    WriteItemDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to write sequence delimiter"))]
    WriteSequenceDelimiter {
        backtrace: Backtrace,
        source: io::Error,
    },
    /// The value length does not fit in the 16-bit length field of its VR.
    #[snafu(display("Length {} of {} does not fit in a 16-bit length field", len, tag))]
    LengthTooLong {
        tag: Tag,
        len: u32,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Writing of primitive binary values in a fixed byte order,
/// the counterpart of [`BasicDecode`](crate::decode::BasicDecode).
/// [`BasicEncoder`] picks the byte order at run time.
pub trait BasicEncode {
    /// Retrieve the encoder's endianness.
    fn endianness(&self) -> Endianness;

    /// Encode an unsigned short value to the given writer.
    fn encode_us<W>(&self, to: W, value: u16) -> io::Result<()>
    where
        W: Write;

    /// Encode an unsigned long value to the given writer.
    fn encode_ul<W>(&self, to: W, value: u32) -> io::Result<()>
    where
        W: Write;

    /// Encode an unsigned very long value to the given writer.
    fn encode_uv<W>(&self, to: W, value: u64) -> io::Result<()>
    where
        W: Write;

    /// Encode a signed short value to the given writer.
    fn encode_ss<W>(&self, to: W, value: i16) -> io::Result<()>
    where
        W: Write;

    /// Encode a signed long value to the given writer.
    fn encode_sl<W>(&self, to: W, value: i32) -> io::Result<()>
    where
        W: Write;

    /// Encode a signed very long value to the given writer.
    fn encode_sv<W>(&self, to: W, value: i64) -> io::Result<()>
    where
        W: Write;

    /// Encode a single precision float value to the given writer.
    fn encode_fl<W>(&self, to: W, value: f32) -> io::Result<()>
    where
        W: Write;

    /// Encode a double precision float value to the given writer.
    fn encode_fd<W>(&self, to: W, value: f64) -> io::Result<()>
    where
        W: Write;

    /// Encode an attribute tag as two unsigned shorts.
    fn encode_tag_value<W>(&self, mut to: W, tag: Tag) -> io::Result<()>
    where
        W: Write,
    {
        self.encode_us(&mut to, tag.group())?;
        self.encode_us(to, tag.element())
    }
}

/// Type trait for an attribute header encoder.
pub trait Encode {
    /// Encode and write an attribute tag.
    fn encode_tag<W>(&self, to: W, tag: Tag) -> Result<()>
    where
        W: Write;

    /// Encode and write an attribute header to the given destination.
    /// Returns the number of bytes effectively written on success.
    fn encode_attribute_header<W>(&self, to: W, header: AttributeHeader) -> Result<usize>
    where
        W: Write;

    /// Encode and write a sequence item header to the given destination.
    /// An item length of `0xFFFF_FFFF` declares an item of undefined length.
    fn encode_item_header<W>(&self, to: W, len: u32) -> Result<()>
    where
        W: Write;

    /// Encode and write a sequence item delimiter to the given destination.
    fn encode_item_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write;

    /// Encode and write a sequence delimiter to the given destination.
    fn encode_sequence_delimiter<W>(&self, to: W) -> Result<()>
    where
        W: Write;
}

/// The object safe form of [`Encode`] for one writer type `W`.
pub trait EncodeTo<W: ?Sized + Write> {
    /// Same as [`Encode::encode_tag`].
    fn encode_tag(&self, to: &mut W, tag: Tag) -> Result<()>;

    /// Same as [`Encode::encode_attribute_header`].
    fn encode_attribute_header(&self, to: &mut W, header: AttributeHeader) -> Result<usize>;

    /// Same as [`Encode::encode_item_header`].
    fn encode_item_header(&self, to: &mut W, len: u32) -> Result<()>;

    /// Same as [`Encode::encode_item_delimiter`].
    fn encode_item_delimiter(&self, to: &mut W) -> Result<()>;

    /// Same as [`Encode::encode_sequence_delimiter`].
    fn encode_sequence_delimiter(&self, to: &mut W) -> Result<()>;
}

impl<W: ?Sized, T: ?Sized> EncodeTo<W> for Box<T>
where
    W: Write,
    T: EncodeTo<W>,
{
    fn encode_tag(&self, to: &mut W, tag: Tag) -> Result<()> {
        (**self).encode_tag(to, tag)
    }

    fn encode_attribute_header(&self, to: &mut W, header: AttributeHeader) -> Result<usize> {
        (**self).encode_attribute_header(to, header)
    }

    fn encode_item_header(&self, to: &mut W, len: u32) -> Result<()> {
        (**self).encode_item_header(to, len)
    }

    fn encode_item_delimiter(&self, to: &mut W) -> Result<()> {
        (**self).encode_item_delimiter(to)
    }

    fn encode_sequence_delimiter(&self, to: &mut W) -> Result<()> {
        (**self).encode_sequence_delimiter(to)
    }
}

/// Implement [`EncodeTo`] for an [`Encode`] implementation.
macro_rules! impl_encode_to {
    ($typ: ty) => {
        impl<W: ?Sized> $crate::encode::EncodeTo<W> for $typ
        where
            W: std::io::Write,
        {
            #[inline]
            fn encode_tag(
                &self,
                to: &mut W,
                tag: dicos_core::Tag,
            ) -> $crate::encode::Result<()> {
                $crate::encode::Encode::encode_tag(self, to, tag)
            }

            #[inline]
            fn encode_attribute_header(
                &self,
                to: &mut W,
                header: dicos_core::header::AttributeHeader,
            ) -> $crate::encode::Result<usize> {
                $crate::encode::Encode::encode_attribute_header(self, to, header)
            }

            #[inline]
            fn encode_item_header(&self, to: &mut W, len: u32) -> $crate::encode::Result<()> {
                $crate::encode::Encode::encode_item_header(self, to, len)
            }

            #[inline]
            fn encode_item_delimiter(&self, to: &mut W) -> $crate::encode::Result<()> {
                $crate::encode::Encode::encode_item_delimiter(self, to)
            }

            #[inline]
            fn encode_sequence_delimiter(&self, to: &mut W) -> $crate::encode::Result<()> {
                $crate::encode::Encode::encode_sequence_delimiter(self, to)
            }
        }
    };
}

pub(crate) use impl_encode_to;

#[cfg(test)]
mod tests {
    use super::explicit_le::ExplicitVRLittleEndianEncoder;
    use super::EncodeTo;

    fn is_encode_to<W: ?Sized + std::io::Write, T: EncodeTo<W>>(_encoder: &T) {}

    #[test]
    fn boxed_encoder_is_encode_to() {
        let encoder = ExplicitVRLittleEndianEncoder::default();
        is_encode_to::<Vec<u8>, _>(&encoder);
        let erased: Box<dyn EncodeTo<Vec<u8>>> = Box::new(encoder);
        let mut out = Vec::new();
        erased.encode_item_delimiter(&mut out).unwrap();
        assert_eq!(out, [0xFE, 0xFF, 0x0D, 0xE0, 0, 0, 0, 0]);
    }
}
