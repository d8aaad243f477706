//! This module contains the data set writer,
//! which serializes an attribute tree in a given transfer syntax.
//!
//! Attributes are written in tag order.
//! Sequences and their items are written with undefined length
//! and delimiters by default,
//! or with their byte length computed ahead of time
//! (see [`WriteOptions`]).

use crate::stateful::encode::{DynStatefulEncoder, Error as EncoderError, StatefulEncoder};
use dicos_core::header::{AttributeHeader, Length};
use dicos_core::value::{Item, Value};
use dicos_core::{Attribute, AttributeManager, Tag, VR};
use dicos_encoding::text::SpecificCharacterSet;
use dicos_encoding::TransferSyntax;
use snafu::{Backtrace, ResultExt, Snafu};
use std::fmt;
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not write attribute {}", tag))]
    WriteAttribute {
        tag: Tag,
        #[snafu(backtrace)]
        source: EncoderError,
    },

    #[snafu(display("Could not write sequence framing of {}", tag))]
    WriteFraming {
        tag: Tag,
        #[snafu(backtrace)]
        source: EncoderError,
    },

    #[snafu(display("Encoded length {} of {} does not fit in a length field", len, tag))]
    LengthOverflow {
        tag: Tag,
        len: u64,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not flush the writer"))]
    Flush {
        #[snafu(backtrace)]
        source: EncoderError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// How the length of a sequence or of an item is written.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum LengthEncoding {
    /// Undefined length, closed by a delimiter.
    #[default]
    Undefined,
    /// The exact byte length, computed before writing.
    Explicit,
}

/// The set of options for the data set writer.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct WriteOptions {
    /// length encoding of sequence attributes
    pub sequence_length: LengthEncoding,
    /// length encoding of sequence items
    pub item_length: LengthEncoding,
}

impl WriteOptions {
    /// Options writing every sequence and item with an explicit length.
    pub fn explicit_lengths() -> Self {
        WriteOptions {
            sequence_length: LengthEncoding::Explicit,
            item_length: LengthEncoding::Explicit,
        }
    }
}

/// A writer of whole DICOS data sets to an arbitrary byte sink.
pub struct DataSetWriter<W>
where
    W: Write,
{
    encoder: DynStatefulEncoder<'static, W>,
    /// whether headers carry the VR, which decides their size
    explicit_vr: bool,
    options: WriteOptions,
}

impl<W: Write> fmt::Debug for DataSetWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSetWriter")
            .field("bytes_written", &self.encoder.bytes_written())
            .field("explicit_vr", &self.explicit_vr)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<W> DataSetWriter<W>
where
    W: Write,
{
    /// Create a new data set writer for the given transfer syntax.
    pub fn new(to: W, ts: TransferSyntax) -> Self {
        Self::with_options(to, ts, WriteOptions::default())
    }

    /// Create a new data set writer with the given options.
    pub fn with_options(to: W, ts: TransferSyntax, options: WriteOptions) -> Self {
        tracing::debug!("Writing data set in {}", ts);
        DataSetWriter {
            encoder: StatefulEncoder::new_with_ts(to, ts),
            explicit_vr: ts.is_explicit_vr(),
            options,
        }
    }

    /// Retrieve the number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.encoder.bytes_written()
    }

    /// Write all attributes of the data set in tag order.
    ///
    /// Text is encoded in the character set
    /// declared by the data set's Specific Character Set (0008,0005).
    pub fn write_dataset(&mut self, dataset: &AttributeManager<'_>) -> Result<()> {
        self.enter_item(dataset);
        self.write_attributes(dataset)
    }

    /// Write a single attribute, including the items of a sequence.
    pub fn write_attribute(&mut self, attribute: &Attribute) -> Result<()> {
        let tag = attribute.tag();
        match attribute.value() {
            Value::Sequence(items) => self.write_sequence(tag, items),
            Value::Fragments(fragments) => self.write_fragments(tag, attribute.vr(), fragments),
            value => self
                .encoder
                .encode_primitive(tag, attribute.vr(), value)
                .context(WriteAttributeSnafu { tag }),
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.encoder.flush().context(FlushSnafu)
    }

    /// Retrieve the writer back.
    pub fn into_inner(self) -> W {
        self.encoder.into_inner()
    }

    /// Switch to the character set declared by a data set or item,
    /// returning the one in effect before.
    fn enter_item(&mut self, item: &AttributeManager<'_>) -> SpecificCharacterSet {
        let outer = self.encoder.character_set();
        if let Some(code) = item.string(Tag(0x0008, 0x0005)) {
            match SpecificCharacterSet::from_code(code) {
                Some(charset) => self.encoder.set_character_set(charset),
                None => tracing::warn!(
                    "Unsupported specific character set {:?}, writing text in {}",
                    code,
                    outer
                ),
            }
        }
        outer
    }

    fn write_attributes(&mut self, item: &AttributeManager<'_>) -> Result<()> {
        for attribute in item.iter() {
            self.write_attribute(attribute)?;
        }
        Ok(())
    }

    fn write_sequence(&mut self, tag: Tag, items: &[Item]) -> Result<()> {
        let len = match self.options.sequence_length {
            LengthEncoding::Undefined => Length::UNDEFINED,
            LengthEncoding::Explicit => {
                let len = self.sequence_body_length(items)?;
                Length(to_length(tag, len)?)
            }
        };
        self.encoder
            .encode_attribute_header(AttributeHeader::new(tag, VR::SQ, len))
            .context(WriteFramingSnafu { tag })?;

        for item in items {
            let item_len = match self.options.item_length {
                LengthEncoding::Undefined => Length::UNDEFINED,
                LengthEncoding::Explicit => {
                    let len = self.item_body_length(item)?;
                    Length(to_length(tag, len)?)
                }
            };
            self.encoder
                .encode_item_header(item_len)
                .context(WriteFramingSnafu { tag })?;
            // a character set declared in an item ends with the item
            let outer = self.enter_item(item);
            let written = self.write_attributes(item);
            self.encoder.set_character_set(outer);
            written?;
            if item_len.is_undefined() {
                self.encoder
                    .encode_item_delimiter()
                    .context(WriteFramingSnafu { tag })?;
            }
        }

        if len.is_undefined() {
            self.encoder
                .encode_sequence_delimiter()
                .context(WriteFramingSnafu { tag })?;
        }
        Ok(())
    }

    /// Encapsulated data always has undefined length,
    /// with each fragment padded to an even length.
    fn write_fragments(&mut self, tag: Tag, vr: VR, fragments: &[Vec<u8>]) -> Result<()> {
        self.encoder
            .encode_attribute_header(AttributeHeader::new(tag, vr, Length::UNDEFINED))
            .context(WriteFramingSnafu { tag })?;
        for fragment in fragments {
            let padded = fragment.len() + fragment.len() % 2;
            let len = to_length(tag, padded as u64)?;
            self.encoder
                .encode_item_header(Length(len))
                .context(WriteFramingSnafu { tag })?;
            self.encoder
                .write_bytes(fragment)
                .context(WriteAttributeSnafu { tag })?;
            if fragment.len() % 2 == 1 {
                self.encoder
                    .write_bytes(&[0])
                    .context(WriteAttributeSnafu { tag })?;
            }
        }
        self.encoder
            .encode_sequence_delimiter()
            .context(WriteFramingSnafu { tag })
    }

    /// The size of an attribute header in the current transfer syntax.
    fn header_length(&self, vr: VR) -> u64 {
        if self.explicit_vr && vr.has_long_length() {
            12
        } else {
            8
        }
    }

    /// The number of bytes taken by an attribute once encoded,
    /// header included.
    fn attribute_length(&mut self, attribute: &Attribute) -> Result<u64> {
        let tag = attribute.tag();
        let vr = attribute.vr();
        let body = match attribute.value() {
            Value::Sequence(items) => {
                let mut body = self.sequence_body_length(items)?;
                if self.options.sequence_length == LengthEncoding::Undefined {
                    body += 8;
                }
                body
            }
            Value::Fragments(fragments) => {
                fragments
                    .iter()
                    .map(|f| 8 + (f.len() + f.len() % 2) as u64)
                    .sum::<u64>()
                    + 8
            }
            value => u64::from(
                self.encoder
                    .value_length(tag, vr, value)
                    .context(WriteAttributeSnafu { tag })?,
            ),
        };
        Ok(self.header_length(vr) + body)
    }

    /// The number of bytes between the header of a sequence
    /// and its delimiter, if any.
    fn sequence_body_length(&mut self, items: &[Item]) -> Result<u64> {
        let mut len = 0;
        for item in items {
            len += 8 + self.item_body_length(item)?;
            if self.options.item_length == LengthEncoding::Undefined {
                len += 8;
            }
        }
        Ok(len)
    }

    /// The number of bytes between the header of an item
    /// and its delimiter, if any.
    fn item_body_length(&mut self, item: &Item) -> Result<u64> {
        let outer = self.enter_item(item);
        let len = self.attributes_length(item);
        self.encoder.set_character_set(outer);
        len
    }

    fn attributes_length(&mut self, item: &Item) -> Result<u64> {
        let mut len = 0;
        for attribute in item.iter() {
            len += self.attribute_length(attribute)?;
        }
        Ok(len)
    }
}

/// Fit a byte length into a 32-bit length field,
/// which may not hold the undefined length marker.
fn to_length(tag: Tag, len: u64) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|len| *len != u32::MAX)
        .ok_or_else(|| LengthOverflowSnafu { tag, len }.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicos_core::dicos_value;

    fn sample() -> AttributeManager<'static> {
        let mut item = Item::new();
        item.put(Tag(0x4010, 0x1010), VR::US, dicos_value!(U16, [0]))
            .unwrap();
        let mut mgr = AttributeManager::new();
        mgr.put_str(Tag(0x0008, 0x0018), VR::UI, "1.2").unwrap();
        mgr.set_attribute(Attribute::sequence(Tag(0x4010, 0x1011), vec![item]));
        mgr
    }

    #[test]
    fn write_sequence_with_delimiters() {
        let mut writer = DataSetWriter::new(Vec::new(), TransferSyntax::ExplicitVRLittleEndian);
        writer.write_dataset(&sample()).unwrap();
        let out = writer.into_inner();

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x04, 0x00, b'1', b'.', b'2', 0x00,
            0x10, 0x40, 0x11, 0x10, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
                0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
                    0x10, 0x40, 0x10, 0x10, b'U', b'S', 0x02, 0x00, 0x00, 0x00,
                0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn write_sequence_with_explicit_lengths() {
        let mut writer = DataSetWriter::with_options(
            Vec::new(),
            TransferSyntax::ImplicitVRLittleEndian,
            WriteOptions::explicit_lengths(),
        );
        writer.write_dataset(&sample()).unwrap();
        let out = writer.into_inner();

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x08, 0x00, 0x18, 0x00, 0x04, 0x00, 0x00, 0x00, b'1', b'.', b'2', 0x00,
            0x10, 0x40, 0x11, 0x10, 0x12, 0x00, 0x00, 0x00,
                0xFE, 0xFF, 0x00, 0xE0, 0x0A, 0x00, 0x00, 0x00,
                    0x10, 0x40, 0x10, 0x10, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn fragments_are_framed_as_items() {
        let mut writer = DataSetWriter::new(Vec::new(), TransferSyntax::ExplicitVRLittleEndian);
        let pixels = Attribute::new(
            Tag(0x7FE0, 0x0010),
            VR::OB,
            Value::Fragments(vec![vec![], vec![1, 2, 3]]),
        )
        .unwrap();
        writer.write_attribute(&pixels).unwrap();
        assert_eq!(writer.bytes_written(), 12 + 8 + 8 + 4 + 8);
    }
}
