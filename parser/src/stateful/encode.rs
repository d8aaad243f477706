//! Module holding a stateful DICOS data encoding abstraction.
//!
//! The [`StatefulEncoder`] writes attribute headers and primitive values
//! in a given transfer syntax, padding every value to an even length
//! and encoding text in the active specific character set.

use crate::stateful::decode::swap_words;
use dicos_core::header::{AttributeHeader, Length};
use dicos_core::value::{Value, ValueType};
use dicos_core::{Tag, VR};
use dicos_encoding::encode::{BasicEncode, BasicEncoder, EncodeTo};
use dicos_encoding::text::{EncodeTextError, SpecificCharacterSet, TextCodec};
use dicos_encoding::transfer_syntax::DynEncoder;
use dicos_encoding::{Endianness, TransferSyntax};
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Write};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not encode attribute header at position {}", position))]
    EncodeHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dicos_encoding::encode::Error,
    },

    #[snafu(display("Could not encode item framing at position {}", position))]
    EncodeItemFraming {
        position: u64,
        #[snafu(backtrace)]
        source: dicos_encoding::encode::Error,
    },

    #[snafu(display("Could not write value data at position {}", position))]
    WriteValueData {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not encode text of {} at position {}", tag, position))]
    EncodeText {
        tag: Tag,
        position: u64,
        #[snafu(backtrace)]
        source: EncodeTextError,
    },

    #[snafu(display("Value of type {} cannot be encoded as a primitive {} {}", value_type, vr, tag))]
    NonPrimitiveValue {
        tag: Tag,
        vr: VR,
        value_type: ValueType,
        backtrace: Backtrace,
    },

    #[snafu(display("Value of {} is {} bytes long, beyond the 32-bit length field", tag, len))]
    ValueTooLong {
        tag: Tag,
        len: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Alias for a stateful encoder whose attribute header encoder
/// is resolved at run-time from a transfer syntax.
pub type DynStatefulEncoder<'w, W> = StatefulEncoder<DynEncoder<'w, W>, W>;

/// A stateful abstraction for writing DICOS content.
///
/// `W` is the writer and `E` the attribute header encoder.
#[derive(Debug)]
pub struct StatefulEncoder<E, W> {
    to: W,
    encoder: E,
    basic: BasicEncoder,
    text: SpecificCharacterSet,
    bytes_written: u64,
    buffer: Vec<u8>,
}

impl<'w, W> DynStatefulEncoder<'w, W>
where
    W: Write,
{
    /// Create a new stateful encoder for the given transfer syntax.
    pub fn new_with_ts(to: W, ts: TransferSyntax) -> Self {
        StatefulEncoder::new(to, ts.encoder_for::<W>(), ts.basic_encoder())
    }
}

impl<E, W> StatefulEncoder<E, W> {
    /// Create a new stateful encoder from its parts,
    /// encoding text in the default character set.
    pub fn new(to: W, encoder: E, basic: BasicEncoder) -> Self {
        StatefulEncoder {
            to,
            encoder,
            basic,
            text: SpecificCharacterSet::Default,
            bytes_written: 0,
            buffer: Vec::with_capacity(128),
        }
    }

    /// Retrieve the number of bytes written so far.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Retrieve the character set currently used for text values.
    pub fn character_set(&self) -> SpecificCharacterSet {
        self.text
    }

    /// Change the character set used for text values.
    pub fn set_character_set(&mut self, charset: SpecificCharacterSet) {
        self.text = charset;
    }

    /// Retrieve the writer back.
    pub fn into_inner(self) -> W {
        self.to
    }
}

impl<E, W> StatefulEncoder<E, W>
where
    E: EncodeTo<W>,
    W: Write,
{
    /// Encode an attribute header as is.
    pub fn encode_attribute_header(&mut self, header: AttributeHeader) -> Result<()> {
        let position = self.bytes_written;
        let bytes = self
            .encoder
            .encode_attribute_header(&mut self.to, header)
            .context(EncodeHeaderSnafu { position })?;
        self.bytes_written += bytes as u64;
        Ok(())
    }

    /// Encode an item header with the given length,
    /// which may be undefined.
    pub fn encode_item_header(&mut self, len: Length) -> Result<()> {
        let position = self.bytes_written;
        self.encoder
            .encode_item_header(&mut self.to, len.0)
            .context(EncodeItemFramingSnafu { position })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode an item delimiter.
    pub fn encode_item_delimiter(&mut self) -> Result<()> {
        let position = self.bytes_written;
        self.encoder
            .encode_item_delimiter(&mut self.to)
            .context(EncodeItemFramingSnafu { position })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode a sequence delimiter.
    pub fn encode_sequence_delimiter(&mut self) -> Result<()> {
        let position = self.bytes_written;
        self.encoder
            .encode_sequence_delimiter(&mut self.to)
            .context(EncodeItemFramingSnafu { position })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Write raw bytes, such as the contents of a fragment.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let position = self.bytes_written;
        self.to
            .write_all(bytes)
            .context(WriteValueDataSnafu { position })?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Encode a whole primitive attribute: header and value,
    /// with the value padded to an even length.
    ///
    /// Encoding Specific Character Set (0008,0005)
    /// switches the encoder to the declared character set.
    pub fn encode_primitive(&mut self, tag: Tag, vr: VR, value: &Value) -> Result<()> {
        self.serialize_value(tag, vr, value)?;
        let len = u32::try_from(self.buffer.len())
            .ok()
            .filter(|len| *len != u32::MAX)
            .ok_or_else(|| {
                ValueTooLongSnafu {
                    tag,
                    len: self.buffer.len(),
                }
                .build()
            })?;
        self.encode_attribute_header(AttributeHeader::new(tag, vr, Length(len)))?;

        let position = self.bytes_written;
        self.to
            .write_all(&self.buffer)
            .context(WriteValueDataSnafu { position })?;
        self.bytes_written += u64::from(len);

        if tag == Tag(0x0008, 0x0005) {
            if let Some(charset) = value.string().ok().and_then(SpecificCharacterSet::from_code) {
                self.text = charset;
            }
        }
        Ok(())
    }

    /// Calculate the encoded length of a primitive value,
    /// padding included, without writing anything.
    pub fn value_length(&mut self, tag: Tag, vr: VR, value: &Value) -> Result<u32> {
        self.serialize_value(tag, vr, value)?;
        u32::try_from(self.buffer.len()).map_err(|_| {
            ValueTooLongSnafu {
                tag,
                len: self.buffer.len(),
            }
            .build()
        })
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        let position = self.bytes_written;
        self.to.flush().context(WriteValueDataSnafu { position })
    }

    /// Serialize the value into the internal buffer.
    fn serialize_value(&mut self, tag: Tag, vr: VR, value: &Value) -> Result<()> {
        let position = self.bytes_written;
        self.buffer.clear();
        let basic = self.basic;
        let buf = &mut self.buffer;

        macro_rules! numbers {
            ($values: expr, $method: ident) => {
                for v in $values.iter() {
                    basic
                        .$method(&mut *buf, *v)
                        .context(WriteValueDataSnafu { position })?;
                }
            };
        }

        match value {
            Value::Strs(components) => {
                let text = if vr.is_single_valued() {
                    components.first().cloned().unwrap_or_default()
                } else {
                    components.join("\\")
                };
                let bytes = if restricted_repertoire(vr) {
                    SpecificCharacterSet::Default.encode(&text)
                } else {
                    self.text.encode(&text)
                }
                .context(EncodeTextSnafu { tag, position })?;
                buf.extend_from_slice(&bytes);
            }
            Value::Tags(tags) => {
                for t in tags.iter() {
                    basic
                        .encode_tag_value(&mut *buf, *t)
                        .context(WriteValueDataSnafu { position })?;
                }
            }
            Value::I16(values) => numbers!(values, encode_ss),
            Value::U16(values) => numbers!(values, encode_us),
            Value::I32(values) => numbers!(values, encode_sl),
            Value::U32(values) => numbers!(values, encode_ul),
            Value::I64(values) => numbers!(values, encode_sv),
            Value::U64(values) => numbers!(values, encode_uv),
            Value::F32(values) => numbers!(values, encode_fl),
            Value::F64(values) => numbers!(values, encode_fd),
            Value::Bytes(bytes) => {
                buf.extend_from_slice(bytes);
                if vr == VR::OW && basic.endianness() == Endianness::Big {
                    swap_words(buf);
                }
            }
            Value::Fragments(_) | Value::Sequence(_) => {
                return NonPrimitiveValueSnafu {
                    tag,
                    vr,
                    value_type: value.value_type(),
                }
                .fail();
            }
        }

        if buf.len() % 2 == 1 {
            buf.push(vr.padding());
        }
        Ok(())
    }
}

/// Whether text of this VR is always in the default character repertoire.
pub(crate) fn restricted_repertoire(vr: VR) -> bool {
    matches!(
        vr,
        VR::AE | VR::AS | VR::CS | VR::DA | VR::DS | VR::DT | VR::IS | VR::TM | VR::UI
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicos_core::dicos_value;

    #[test]
    fn encode_primitives_with_padding() {
        let mut encoder = StatefulEncoder::new_with_ts(Vec::new(), TransferSyntax::ExplicitVRLittleEndian);

        encoder
            .encode_primitive(Tag(0x0008, 0x0018), VR::UI, &dicos_value!(Str, "1.2.3"))
            .unwrap();
        encoder
            .encode_primitive(Tag(0x4010, 0x101A), VR::SH, &dicos_value!(Strs, ["A", "BC"]))
            .unwrap();
        encoder
            .encode_primitive(Tag(0x4010, 0x1010), VR::US, &dicos_value!(U16, [1, 0x0203]))
            .unwrap();
        assert_eq!(encoder.bytes_written(), 14 + 12 + 12);

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x06, 0x00,
                b'1', b'.', b'2', b'.', b'3', 0x00,
            0x10, 0x40, 0x1A, 0x10, b'S', b'H', 0x04, 0x00,
                b'A', b'\\', b'B', b'C',
            0x10, 0x40, 0x10, 0x10, b'U', b'S', 0x04, 0x00,
                0x01, 0x00, 0x03, 0x02,
        ];
        assert_eq!(encoder.into_inner(), expected);
    }

    #[test]
    fn character_set_follows_specific_character_set() {
        let mut encoder = StatefulEncoder::new_with_ts(Vec::new(), TransferSyntax::ImplicitVRLittleEndian);
        assert!(encoder
            .encode_primitive(Tag(0x0010, 0x0010), VR::PN, &dicos_value!(Str, "Ж"))
            .is_err());

        let mut encoder = StatefulEncoder::new_with_ts(Vec::new(), TransferSyntax::ImplicitVRLittleEndian);
        encoder
            .encode_primitive(Tag(0x0008, 0x0005), VR::CS, &dicos_value!(Str, "ISO_IR 192"))
            .unwrap();
        assert_eq!(encoder.character_set(), SpecificCharacterSet::IsoIr192);
        encoder
            .encode_primitive(Tag(0x0010, 0x0010), VR::PN, &dicos_value!(Str, "Ж"))
            .unwrap();
        let out = encoder.into_inner();
        // 8 byte header, "ISO_IR 192" (10), 8 byte header, 2 bytes of UTF-8
        assert_eq!(out.len(), 8 + 10 + 8 + 2);
        assert_eq!(&out[26..], "Ж".as_bytes());
    }

    #[test]
    fn big_endian_words() {
        let mut encoder = StatefulEncoder::new_with_ts(Vec::new(), TransferSyntax::ExplicitVRBigEndian);
        encoder
            .encode_primitive(Tag(0x7FE0, 0x0010), VR::OW, &Value::Bytes(vec![0x34, 0x12]))
            .unwrap();
        assert_eq!(
            encoder.into_inner(),
            vec![0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0, 0, 0, 0, 0, 2, 0x12, 0x34]
        );
    }

    #[test]
    fn sequences_are_not_primitive() {
        let mut encoder = StatefulEncoder::new_with_ts(Vec::new(), TransferSyntax::ExplicitVRLittleEndian);
        let err = encoder
            .encode_primitive(Tag(0x4010, 0x1011), VR::SQ, &Value::Sequence(vec![]))
            .unwrap_err();
        assert!(matches!(err, Error::NonPrimitiveValue { .. }));
        assert_eq!(encoder.bytes_written(), 0);
    }
}
