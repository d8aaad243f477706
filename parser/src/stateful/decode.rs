//! This module provides a stateful abstraction for reading DICOS data.
//!
//! The [`StatefulDecoder`] binds a byte source to an attribute header decoder,
//! reads primitive values according to their VR,
//! and keeps track of how many bytes were consumed,
//! which the data set reader relies on to find item boundaries.

use dicos_core::header::{AttributeHeader, HasLength, Header, SequenceItemHeader};
use dicos_core::value::{Value, C};
use dicos_core::{Tag, VR};
use dicos_encoding::decode::basic::{BasicDecoder, LittleEndianBasicDecoder};
use dicos_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use dicos_encoding::decode::implicit_le::StandardImplicitVRLittleEndianDecoder;
use dicos_encoding::decode::{BasicDecode, DecodeFrom};
use dicos_encoding::text::{DecodeTextError, SpecificCharacterSet, TextCodec};
use dicos_encoding::transfer_syntax::DynDecoder;
use dicos_encoding::TransferSyntax;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Read};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not decode attribute header at position {}", position))]
    DecodeAttributeHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dicos_encoding::decode::Error,
    },

    #[snafu(display("Could not decode item header at position {}", position))]
    DecodeItemHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dicos_encoding::decode::Error,
    },

    #[snafu(display("Could not read value data of {} at position {}", tag, position))]
    ReadValueData {
        tag: Tag,
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not skip {} bytes at position {}", bytes, position))]
    SkipBytes {
        bytes: u64,
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Delimiter {} not found after position {}", tag, position))]
    DelimiterNotFound {
        tag: Tag,
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Undefined value length of {} {}", vr, tag))]
    UndefinedValueLength {
        tag: Tag,
        vr: VR,
        backtrace: Backtrace,
    },

    #[snafu(display(
        "Value length {} of {} {} is not a multiple of {}",
        len,
        vr,
        tag,
        width
    ))]
    InvalidValueLength {
        tag: Tag,
        vr: VR,
        len: u32,
        width: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Attempted to read {} as a primitive value", tag))]
    NonPrimitiveType { tag: Tag, backtrace: Backtrace },

    #[snafu(display("Could not decode text of {} at position {}", tag, position))]
    DecodeText {
        tag: Tag,
        position: u64,
        #[snafu(backtrace)]
        source: DecodeTextError,
    },
}

impl Error {
    /// Whether the error was caused by the source ending
    /// right before an attribute header.
    pub fn is_clean_eof(&self) -> bool {
        matches!(self, Error::DecodeAttributeHeader { source, .. } if source.is_clean_eof())
    }

    /// Whether the error means that the source has no more bytes to give,
    /// as opposed to data which was read but could not be interpreted.
    pub fn is_io(&self) -> bool {
        match self {
            Error::DecodeItemHeader { source, .. } => !matches!(
                source,
                dicos_encoding::decode::Error::BadSequenceHeader { .. }
            ),
            Error::DecodeAttributeHeader { .. }
            | Error::ReadValueData { .. }
            | Error::SkipBytes { .. }
            | Error::DelimiterNotFound { .. } => true,
            _ => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Alias for a stateful decoder whose attribute header decoder
/// is resolved at run-time from a transfer syntax.
pub type DynStatefulDecoder<'s, S> = StatefulDecoder<DynDecoder<'s, S>, S>;

/// Type alias for the stateful decoder of a file's meta group,
/// which is always in Explicit VR Little Endian.
pub type FileHeaderParser<S> = StatefulDecoder<ExplicitVRLittleEndianDecoder, S>;

/// A stateful abstraction for reading DICOS content.
///
/// `S` is the byte source and `D` the attribute header decoder.
/// Values are always read in full before being interpreted,
/// so that a value which cannot be interpreted
/// leaves the source at the next attribute boundary.
#[derive(Debug)]
pub struct StatefulDecoder<D, S> {
    from: S,
    decoder: D,
    basic: BasicDecoder,
    text: SpecificCharacterSet,
    /// used for the contents of UN attributes of undefined length,
    /// which are always in Implicit VR Little Endian
    implicit_le: StandardImplicitVRLittleEndianDecoder,
    implicit_depth: u32,
    buffer: Vec<u8>,
    bytes_read: u64,
}

impl<'s, S> DynStatefulDecoder<'s, S>
where
    S: Read,
{
    /// Create a new stateful decoder for the given transfer syntax.
    pub fn new_with_ts(from: S, ts: TransferSyntax) -> Self {
        StatefulDecoder::new(from, ts.decoder_for::<S>(), ts.basic_decoder())
    }
}

impl<S> FileHeaderParser<S>
where
    S: Read,
{
    /// Create a new stateful decoder for reading the file meta group.
    pub fn file_header_parser(from: S) -> Self {
        StatefulDecoder::new(
            from,
            ExplicitVRLittleEndianDecoder::default(),
            BasicDecoder::LE(LittleEndianBasicDecoder),
        )
    }
}

impl<D, S> StatefulDecoder<D, S> {
    /// Create a new stateful decoder from its parts,
    /// decoding text in the default character set.
    pub fn new(from: S, decoder: D, basic: BasicDecoder) -> Self {
        StatefulDecoder {
            from,
            decoder,
            basic,
            text: SpecificCharacterSet::Default,
            implicit_le: StandardImplicitVRLittleEndianDecoder::default(),
            implicit_depth: 0,
            buffer: Vec::with_capacity(256),
            bytes_read: 0,
        }
    }

    /// Start counting bytes from the given position,
    /// for when the source was already partially consumed.
    pub fn with_position(mut self, position: u64) -> Self {
        self.bytes_read = position;
        self
    }

    /// Retrieve the number of bytes read so far.
    #[inline]
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Retrieve the character set currently used for text values.
    pub fn character_set(&self) -> SpecificCharacterSet {
        self.text
    }

    /// Change the character set used for text values.
    pub fn set_character_set(&mut self, charset: SpecificCharacterSet) {
        self.text = charset;
    }

    /// Decode headers and values in Implicit VR Little Endian
    /// until the matching call to [`leave_implicit_le`](Self::leave_implicit_le),
    /// regardless of the transfer syntax.
    pub fn enter_implicit_le(&mut self) {
        self.implicit_depth += 1;
    }

    /// Undo one call to [`enter_implicit_le`](Self::enter_implicit_le).
    pub fn leave_implicit_le(&mut self) {
        self.implicit_depth = self.implicit_depth.saturating_sub(1);
    }

    /// Retrieve the byte source back.
    pub fn into_inner(self) -> S {
        self.from
    }

    fn basic(&self) -> BasicDecoder {
        if self.implicit_depth > 0 {
            BasicDecoder::LE(LittleEndianBasicDecoder)
        } else {
            self.basic
        }
    }
}

impl<D, S> StatefulDecoder<D, S>
where
    D: DecodeFrom<S>,
    S: Read,
{
    /// Decode the next attribute header.
    pub fn decode_header(&mut self) -> Result<AttributeHeader> {
        let position = self.bytes_read;
        let (header, bytes_read) = if self.implicit_depth > 0 {
            DecodeFrom::<S>::decode_header(&self.implicit_le, &mut self.from)
        } else {
            self.decoder.decode_header(&mut self.from)
        }
        .context(DecodeAttributeHeaderSnafu { position })?;
        self.bytes_read += bytes_read as u64;
        tracing::trace!(
            "{} {} {} at position {}",
            header.tag(),
            header.vr(),
            header.length(),
            position
        );
        Ok(header)
    }

    /// Decode the next sequence item header or delimiter.
    pub fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        let position = self.bytes_read;
        let header = if self.implicit_depth > 0 {
            DecodeFrom::<S>::decode_item_header(&self.implicit_le, &mut self.from)
        } else {
            self.decoder.decode_item_header(&mut self.from)
        }
        .context(DecodeItemHeaderSnafu { position })?;
        self.bytes_read += 8;
        Ok(header)
    }

    /// Read the raw bytes of an attribute value or fragment.
    pub fn read_bytes(&mut self, tag: Tag, len: u32) -> Result<Vec<u8>> {
        let position = self.bytes_read;
        let mut out = Vec::new();
        (&mut self.from)
            .take(u64::from(len))
            .read_to_end(&mut out)
            .context(ReadValueDataSnafu { tag, position })?;
        self.bytes_read += out.len() as u64;
        if out.len() < len as usize {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof))
                .context(ReadValueDataSnafu { tag, position });
        }
        Ok(out)
    }

    /// Skip the given number of bytes.
    pub fn skip_bytes(&mut self, bytes: u64) -> Result<()> {
        let position = self.bytes_read;
        let skipped = io::copy(&mut (&mut self.from).take(bytes), &mut io::sink())
            .context(SkipBytesSnafu { bytes, position })?;
        self.bytes_read += skipped;
        if skipped < bytes {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof))
                .context(SkipBytesSnafu { bytes, position });
        }
        Ok(())
    }

    /// Consume bytes until right after the given delimiter
    /// (tag and a 4-byte length) is found.
    pub fn skip_to_delimiter(&mut self, tag: Tag) -> Result<()> {
        let position = self.bytes_read;
        let pattern = match self.basic().endianness() {
            dicos_encoding::Endianness::Little => {
                let [g0, g1] = tag.group().to_le_bytes();
                let [e0, e1] = tag.element().to_le_bytes();
                [g0, g1, e0, e1]
            }
            dicos_encoding::Endianness::Big => {
                let [g0, g1] = tag.group().to_be_bytes();
                let [e0, e1] = tag.element().to_be_bytes();
                [g0, g1, e0, e1]
            }
        };
        let mut window = [0u8; 4];
        let mut filled = 0;
        let mut byte = [0u8; 1];
        loop {
            self.from
                .read_exact(&mut byte)
                .context(DelimiterNotFoundSnafu { tag, position })?;
            self.bytes_read += 1;
            if filled < 4 {
                window[filled] = byte[0];
                filled += 1;
            } else {
                window.rotate_left(1);
                window[3] = byte[0];
            }
            if filled == 4 && window == pattern {
                break;
            }
        }
        // the delimiter's length field
        let mut len = [0u8; 4];
        self.from
            .read_exact(&mut len)
            .context(DelimiterNotFoundSnafu { tag, position })?;
        self.bytes_read += 4;
        Ok(())
    }

    /// Read the value of the attribute with the given header
    /// as a primitive value.
    ///
    /// The header must have a defined length
    /// and must not describe a sequence.
    /// If the attribute is Specific Character Set (0008,0005),
    /// the decoder switches to the declared character set.
    pub fn read_value(&mut self, header: &AttributeHeader) -> Result<Value> {
        let tag = header.tag();
        let vr = header.vr();
        if vr == VR::SQ {
            return NonPrimitiveTypeSnafu { tag }.fail();
        }
        let len = header
            .length()
            .get()
            .ok_or_else(|| UndefinedValueLengthSnafu { tag, vr }.build())?;

        let position = self.bytes_read;
        self.buffer.clear();
        (&mut self.from)
            .take(u64::from(len))
            .read_to_end(&mut self.buffer)
            .context(ReadValueDataSnafu { tag, position })?;
        self.bytes_read += self.buffer.len() as u64;
        if self.buffer.len() < len as usize {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof))
                .context(ReadValueDataSnafu { tag, position });
        }

        let value = self.interpret_value(tag, vr, position)?;

        if tag == Tag(0x0008, 0x0005) {
            match value.string().ok().map(SpecificCharacterSet::from_code) {
                Some(Some(charset)) => self.text = charset,
                Some(None) => tracing::warn!(
                    "Unsupported specific character set {:?}, keeping {}",
                    value.string().unwrap_or_default(),
                    self.text
                ),
                None => {}
            }
        }
        Ok(value)
    }

    /// Interpret the bytes in the buffer according to the VR.
    fn interpret_value(&self, tag: Tag, vr: VR, position: u64) -> Result<Value> {
        let buf = &self.buffer[..];
        let len = buf.len() as u32;
        let basic = self.basic();

        macro_rules! numbers {
            ($variant: ident, $width: expr, $method: ident) => {{
                if buf.len() % $width != 0 {
                    return InvalidValueLengthSnafu {
                        tag,
                        vr,
                        len,
                        width: $width as usize,
                    }
                    .fail();
                }
                let mut source = buf;
                let values: C<_> = (0..buf.len() / $width)
                    .map(|_| basic.$method(&mut source))
                    .collect::<io::Result<_>>()
                    .context(ReadValueDataSnafu { tag, position })?;
                Value::$variant(values)
            }};
        }

        let value = match vr {
            VR::SQ => return NonPrimitiveTypeSnafu { tag }.fail(),
            VR::AT => {
                if buf.len() % 4 != 0 {
                    return InvalidValueLengthSnafu {
                        tag,
                        vr,
                        len,
                        width: 4_usize,
                    }
                    .fail();
                }
                let mut source = buf;
                let tags: C<Tag> = (0..buf.len() / 4)
                    .map(|_| basic.decode_tag(&mut source))
                    .collect::<io::Result<_>>()
                    .context(ReadValueDataSnafu { tag, position })?;
                Value::Tags(tags)
            }
            VR::SS => numbers!(I16, 2, decode_ss),
            VR::US => numbers!(U16, 2, decode_us),
            VR::SL => numbers!(I32, 4, decode_sl),
            VR::UL | VR::OL => numbers!(U32, 4, decode_ul),
            VR::SV => numbers!(I64, 8, decode_sv),
            VR::UV | VR::OV => numbers!(U64, 8, decode_uv),
            VR::FL | VR::OF => numbers!(F32, 4, decode_fl),
            VR::FD | VR::OD => numbers!(F64, 8, decode_fd),
            VR::OB | VR::UN => Value::Bytes(buf.to_vec()),
            VR::OW => {
                // kept in little endian byte order
                let mut bytes = buf.to_vec();
                if basic.endianness() == dicos_encoding::Endianness::Big {
                    swap_words(&mut bytes);
                }
                Value::Bytes(bytes)
            }
            // repertoire-restricted VRs are always in the default character set
            VR::AE | VR::AS | VR::CS | VR::DA | VR::DS | VR::DT | VR::IS | VR::TM | VR::UI => {
                let text = SpecificCharacterSet::Default
                    .decode(buf)
                    .context(DecodeTextSnafu { tag, position })?;
                Value::from_text(&text)
            }
            VR::LT | VR::ST | VR::UT | VR::UR => {
                let text = self
                    .text
                    .decode(buf)
                    .context(DecodeTextSnafu { tag, position })?;
                Value::from_single_text(&text)
            }
            VR::LO | VR::PN | VR::SH | VR::UC => {
                let text = self
                    .text
                    .decode(buf)
                    .context(DecodeTextSnafu { tag, position })?;
                Value::from_text(&text)
            }
        };
        Ok(value)
    }
}

/// Swap the bytes of each 16-bit word, in place.
/// A trailing odd byte is left untouched.
pub(crate) fn swap_words(bytes: &mut [u8]) {
    for word in bytes.chunks_exact_mut(2) {
        word.swap(0, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicos_core::header::Length;
    use dicos_core::{dicos_value, Tag, VR};

    #[rustfmt::skip]
    const EXPLICIT_LE: &[u8] = &[
        0x08, 0x00, 0x05, 0x00,     // (0008,0005) Specific Character Set
            b'C', b'S', 0x0A, 0x00,
                b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
        0x10, 0x40, 0x1A, 0x10,     // (4010,101A) Boarding Pass ID
            b'S', b'H', 0x04, 0x00,
                b'B', 0xC9, b'1', b' ',
        0x10, 0x40, 0x1D, 0x10,     // (4010,101D) Bounding Polygon, odd length
            b'F', b'L', 0x03, 0x00,
                0x00, 0x00, 0x80,
        0x10, 0x40, 0x10, 0x10,     // (4010,1010) Potential Threat Object ID
            b'U', b'S', 0x04, 0x00,
                0x01, 0x00, 0x02, 0x00,
    ];

    #[test]
    fn read_values_and_switch_charset() {
        let mut decoder = StatefulDecoder::new_with_ts(EXPLICIT_LE, TransferSyntax::ExplicitVRLittleEndian);

        let header = decoder.decode_header().unwrap();
        assert_eq!(header.tag(), Tag(0x0008, 0x0005));
        let value = decoder.read_value(&header).unwrap();
        assert_eq!(value.string().unwrap(), "ISO_IR 100");
        assert_eq!(decoder.character_set(), SpecificCharacterSet::IsoIr100);

        let header = decoder.decode_header().unwrap();
        let value = decoder.read_value(&header).unwrap();
        assert_eq!(value.string().unwrap(), "B\u{c9}1");

        // a malformed value is consumed in full
        let header = decoder.decode_header().unwrap();
        assert!(matches!(
            decoder.read_value(&header),
            Err(Error::InvalidValueLength { width: 4, .. })
        ));
        assert_eq!(decoder.bytes_read(), 18 + 12 + 11);

        let header = decoder.decode_header().unwrap();
        assert_eq!(decoder.read_value(&header).unwrap(), dicos_value!(U16, [1, 2]));

        assert!(decoder.decode_header().unwrap_err().is_clean_eof());
    }

    #[test]
    fn big_endian_words_are_normalized() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x40, 0x10, 0x10, 0x10, b'U', b'S', 0x00, 0x02, 0x01, 0x02,
            0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x12, 0x34,
        ];
        let mut decoder = StatefulDecoder::new_with_ts(data, TransferSyntax::ExplicitVRBigEndian);
        let header = decoder.decode_header().unwrap();
        assert_eq!(decoder.read_value(&header).unwrap(), dicos_value!(U16, [0x0102]));
        let header = decoder.decode_header().unwrap();
        assert_eq!(header.vr(), VR::OW);
        assert_eq!(decoder.read_value(&header).unwrap(), Value::Bytes(vec![0x34, 0x12]));
    }

    #[test]
    fn skip_to_delimiter() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x01, 0x02, 0x03,
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0x08, 0x00,
        ];
        let mut decoder = StatefulDecoder::new_with_ts(data, TransferSyntax::ImplicitVRLittleEndian);
        decoder.skip_to_delimiter(Tag::ITEM_DELIMITER).unwrap();
        assert_eq!(decoder.bytes_read(), 11);
        assert!(decoder.skip_to_delimiter(Tag::ITEM_DELIMITER).is_err());
    }

    #[test]
    fn undefined_length_is_not_a_primitive_value() {
        let mut decoder = StatefulDecoder::new_with_ts(&[][..], TransferSyntax::ExplicitVRLittleEndian);
        let header = AttributeHeader::new(Tag(0x0008, 0x0018), VR::UI, Length::UNDEFINED);
        assert!(matches!(
            decoder.read_value(&header),
            Err(Error::UndefinedValueLength { .. })
        ));
    }
}
