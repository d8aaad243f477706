//! This module contains the data set reader,
//! which builds an attribute tree out of a DICOS byte stream.
//!
//! Decoding problems which only affect one attribute
//! are reported to an [`ErrorLog`] and reading carries on
//! from the next attribute boundary that can be found.
//! Only a reader in strict mode turns them into an error.

use crate::stateful::decode::{DynStatefulDecoder, Error as DecoderError, StatefulDecoder};
use dicos_core::header::{AttributeHeader, HasLength, Header, Length, SequenceItemHeader};
use dicos_core::value::{Item, Value};
use dicos_core::{Attribute, DataDictionary, ErrorLog, Tag, VR};
use dicos_dictionary_std::StandardDataDictionary;
use dicos_encoding::TransferSyntax;
use snafu::{Backtrace, Snafu};
use std::fmt;
use std::io::Read;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Decoding failed while reading in strict mode.
    #[snafu(display("Failed to read data set at position {}: {}", position, message))]
    Strict {
        position: u64,
        message: String,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What to do with a primitive value of odd length.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum OddLengthStrategy {
    /// Keep the value as read and report a warning.
    #[default]
    Accept,
    /// Skip the value and report an error.
    Fail,
}

/// The set of options for the data set reader.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct DataSetReaderOptions {
    /// abort on the first error instead of resynchronizing
    pub strict: bool,
    /// the handling of odd length values
    pub odd_length: OddLengthStrategy,
    /// the position of the reader as received at building time
    pub base_offset: u64,
}

impl DataSetReaderOptions {
    /// Replace the strictness of the options.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Replace the odd length strategy of the options.
    pub fn odd_length(mut self, odd_length: OddLengthStrategy) -> Self {
        self.odd_length = odd_length;
        self
    }

    /// Replace the base reader offset of the options.
    pub fn base_offset(mut self, base_offset: u64) -> Self {
        self.base_offset = base_offset;
        self
    }
}

/// The span of attributes being read.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Frame {
    /// the data set itself, which ends with the stream
    TopLevel,
    /// an item of defined length, ending at the given position
    Defined { end: u64 },
    /// an item of undefined length, ending with an item delimiter
    Undefined,
}

/// How reading a span of attributes came to an end.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Flow {
    /// keep reading the current span
    Continue,
    /// the span ended as expected
    End,
    /// a sequence delimiter was found where an item delimiter was expected
    SequenceEnd,
    /// the source cannot provide any more data
    Stop,
}

impl Flow {
    /// The flow of the enclosing span
    /// once a nested sequence is over.
    fn or_continue(self) -> Flow {
        match self {
            Flow::Stop => Flow::Stop,
            _ => Flow::Continue,
        }
    }
}

/// A reader of whole DICOS data sets from an arbitrary byte source.
pub struct DataSetReader<S>
where
    S: Read,
{
    /// the stateful decoder
    decoder: DynStatefulDecoder<'static, S>,
    /// dictionary used to flag unknown attributes
    dict: StandardDataDictionary,
    /// the options of this reader
    options: DataSetReaderOptions,
}

impl<S: Read> fmt::Debug for DataSetReader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSetReader")
            .field("bytes_read", &self.decoder.bytes_read())
            .field("character_set", &self.decoder.character_set())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<S> DataSetReader<S>
where
    S: Read,
{
    /// Create a new data set reader for the given transfer syntax.
    pub fn new(source: S, ts: TransferSyntax) -> Self {
        Self::with_options(source, ts, Default::default())
    }

    /// Create a new data set reader with the given options.
    pub fn with_options(source: S, ts: TransferSyntax, options: DataSetReaderOptions) -> Self {
        tracing::debug!("Reading data set in {}", ts);
        DataSetReader {
            decoder: StatefulDecoder::new_with_ts(source, ts).with_position(options.base_offset),
            dict: StandardDataDictionary,
            options,
        }
    }

    /// Retrieve the number of bytes read so far,
    /// starting from the base offset.
    pub fn bytes_read(&self) -> u64 {
        self.decoder.bytes_read()
    }

    /// Retrieve the byte source back.
    pub fn into_inner(self) -> S {
        self.decoder.into_inner()
    }

    /// Read attributes until the end of the source.
    ///
    /// Problems found along the way are appended to `log`
    /// and the attributes which could be read are returned.
    /// In strict mode, the first error aborts reading instead.
    pub fn read_dataset(&mut self, log: &mut ErrorLog) -> Result<Item> {
        let (dataset, _) = self.read_attributes(Frame::TopLevel, log)?;
        Ok(dataset)
    }

    /// Report an error, failing if the reader is strict.
    fn error(&self, log: &mut ErrorLog, at: Option<(VR, Tag)>, message: String) -> Result<()> {
        if self.options.strict {
            return StrictSnafu {
                position: self.decoder.bytes_read(),
                message,
            }
            .fail();
        }
        match at {
            Some((vr, tag)) => log.add_error_at(vr, tag, message),
            None => log.add_error(message),
        }
        Ok(())
    }

    fn read_attributes(&mut self, frame: Frame, log: &mut ErrorLog) -> Result<(Item, Flow)> {
        let mut out = Item::new();
        loop {
            if let Frame::Defined { end } = frame {
                let position = self.decoder.bytes_read();
                if position >= end {
                    if position > end {
                        self.error(
                            log,
                            None,
                            format!("Item content overran its length by {} bytes", position - end),
                        )?;
                    }
                    return Ok((out, Flow::End));
                }
            }

            let header = match self.decoder.decode_header() {
                Ok(header) => header,
                Err(e) if frame == Frame::TopLevel && e.is_clean_eof() => {
                    return Ok((out, Flow::End));
                }
                Err(e) => {
                    self.error(log, None, format!("Truncated data: {}", e))?;
                    return Ok((out, Flow::Stop));
                }
            };
            let tag = header.tag();

            if tag == Tag::ITEM_DELIMITER {
                if frame == Frame::Undefined {
                    return Ok((out, Flow::End));
                }
                log.add_warning("Ignoring stray item delimiter");
                continue;
            }
            if tag == Tag::SEQUENCE_DELIMITER {
                if frame == Frame::Undefined {
                    self.error(log, None, "Missing item delimiter before sequence delimiter".into())?;
                    return Ok((out, Flow::SequenceEnd));
                }
                log.add_warning("Ignoring stray sequence delimiter");
                continue;
            }
            if tag == Tag::ITEM {
                self.error(log, None, "Unexpected item outside of a sequence".into())?;
                match header.length().get() {
                    Some(len) => match self.decoder.skip_bytes(u64::from(len)) {
                        Ok(()) => continue,
                        Err(_) => return Ok((out, Flow::Stop)),
                    },
                    None => {
                        tracing::warn!("Cannot skip stray item of undefined length, stopping");
                        return Ok((out, Flow::Stop));
                    }
                }
            }

            if self.dict.by_tag(tag).is_none() {
                log.add_warning_at(header.vr(), tag, "Unknown attribute, kept as read");
            }

            let (attribute, flow) = if header.is_sequence() {
                let (items, flow) = self.read_sequence(&header, log)?;
                (Some(Attribute::sequence(tag, items)), flow.or_continue())
            } else if header.is_encapsulated() {
                let (fragments, flow) = self.read_fragments(&header, log)?;
                (
                    Some(Attribute::new_unchecked(
                        tag,
                        header.vr(),
                        Value::Fragments(fragments),
                    )),
                    flow.or_continue(),
                )
            } else if header.length().is_undefined() {
                self.error(
                    log,
                    Some((header.vr(), tag)),
                    format!("Undefined length is not admitted for VR {}", header.vr()),
                )?;
                let flow = self.resync(frame);
                (None, flow)
            } else {
                self.read_primitive(&header, log)?
            };

            if let Some(attribute) = attribute {
                if out.has_attribute(tag) {
                    log.add_warning_at(attribute.vr(), tag, "Duplicate attribute, keeping the last one");
                }
                out.set_attribute(attribute);
            }
            if flow != Flow::Continue {
                return Ok((out, flow));
            }
        }
    }

    /// Read the value of a primitive attribute.
    fn read_primitive(
        &mut self,
        header: &AttributeHeader,
        log: &mut ErrorLog,
    ) -> Result<(Option<Attribute>, Flow)> {
        let tag = header.tag();
        let vr = header.vr();
        let len = header.length().0;

        if len % 2 == 1 {
            match self.options.odd_length {
                OddLengthStrategy::Accept => {
                    log.add_warning_at(vr, tag, format!("Odd value length {}", len));
                }
                OddLengthStrategy::Fail => {
                    self.error(log, Some((vr, tag)), format!("Odd value length {}", len))?;
                    let flow = match self.decoder.skip_bytes(u64::from(len)) {
                        Ok(()) => Flow::Continue,
                        Err(_) => Flow::Stop,
                    };
                    return Ok((None, flow));
                }
            }
        }

        match self.decoder.read_value(header) {
            Ok(value) => Ok((Some(Attribute::new_unchecked(tag, vr, value)), Flow::Continue)),
            Err(e) if e.is_io() => {
                self.error(log, Some((vr, tag)), format!("Truncated value: {}", e))?;
                Ok((None, Flow::Stop))
            }
            Err(e) => {
                // the value bytes were consumed, the next attribute follows
                self.error(log, Some((vr, tag)), e.to_string())?;
                Ok((None, Flow::Continue))
            }
        }
    }

    fn read_sequence(
        &mut self,
        header: &AttributeHeader,
        log: &mut ErrorLog,
    ) -> Result<(Vec<Item>, Flow)> {
        let tag = header.tag();
        // UN of undefined length holds Implicit VR Little Endian content
        let implicit = header.vr() == VR::UN;
        if implicit {
            self.decoder.enter_implicit_le();
        }
        log.push_sequence(tag);
        let out = self.read_items(header.length(), log);
        log.pop_sequence();
        if implicit {
            self.decoder.leave_implicit_le();
        }
        out
    }

    fn read_items(&mut self, len: Length, log: &mut ErrorLog) -> Result<(Vec<Item>, Flow)> {
        let end = len.get().map(|len| self.decoder.bytes_read() + u64::from(len));
        let mut items = Vec::new();
        loop {
            if let Some(end) = end {
                let position = self.decoder.bytes_read();
                if position >= end {
                    if position > end {
                        self.error(
                            log,
                            None,
                            format!("Sequence content overran its length by {} bytes", position - end),
                        )?;
                    }
                    return Ok((items, Flow::End));
                }
            }

            let item_header = match self.decoder.decode_item_header() {
                Ok(header) => header,
                Err(e) if e.is_io() => {
                    self.error(log, None, format!("Truncated sequence: {}", e))?;
                    return Ok((items, Flow::Stop));
                }
                Err(e) => {
                    self.error(log, None, e.to_string())?;
                    let flow = match end {
                        Some(end) => self.skip_to(end),
                        None => {
                            tracing::warn!("Resynchronizing at the next sequence delimiter");
                            match self.decoder.skip_to_delimiter(Tag::SEQUENCE_DELIMITER) {
                                Ok(()) => Flow::End,
                                Err(_) => Flow::Stop,
                            }
                        }
                    };
                    return Ok((items, flow));
                }
            };

            match item_header {
                SequenceItemHeader::Item { len } => {
                    let frame = match len.get() {
                        Some(len) => Frame::Defined {
                            end: self.decoder.bytes_read() + u64::from(len),
                        },
                        None => Frame::Undefined,
                    };
                    // a character set declared in an item ends with the item
                    let outer = self.decoder.character_set();
                    let read = self.read_attributes(frame, log);
                    self.decoder.set_character_set(outer);
                    let (item, flow) = read?;
                    items.push(item);
                    match flow {
                        Flow::Continue | Flow::End => {}
                        Flow::SequenceEnd => return Ok((items, Flow::End)),
                        Flow::Stop => return Ok((items, Flow::Stop)),
                    }
                }
                SequenceItemHeader::ItemDelimiter => {
                    log.add_warning("Ignoring stray item delimiter");
                }
                SequenceItemHeader::SequenceDelimiter => {
                    if end.is_some() {
                        log.add_warning("Sequence delimiter in a sequence of defined length");
                    }
                    return Ok((items, Flow::End));
                }
            }
        }
    }

    /// Read the fragments of encapsulated binary data.
    fn read_fragments(
        &mut self,
        header: &AttributeHeader,
        log: &mut ErrorLog,
    ) -> Result<(Vec<Vec<u8>>, Flow)> {
        let tag = header.tag();
        let vr = header.vr();
        let mut fragments = Vec::new();
        loop {
            let item_header = match self.decoder.decode_item_header() {
                Ok(header) => header,
                Err(e) if e.is_io() => {
                    self.error(log, Some((vr, tag)), format!("Truncated fragments: {}", e))?;
                    return Ok((fragments, Flow::Stop));
                }
                Err(e) => {
                    self.error(log, Some((vr, tag)), e.to_string())?;
                    tracing::warn!("Resynchronizing at the next sequence delimiter");
                    let flow = match self.decoder.skip_to_delimiter(Tag::SEQUENCE_DELIMITER) {
                        Ok(()) => Flow::End,
                        Err(_) => Flow::Stop,
                    };
                    return Ok((fragments, flow));
                }
            };
            match item_header {
                SequenceItemHeader::Item { len } => {
                    let Some(len) = len.get() else {
                        self.error(log, Some((vr, tag)), "Fragment of undefined length".into())?;
                        return Ok((fragments, Flow::Stop));
                    };
                    match self.decoder.read_bytes(tag, len) {
                        Ok(bytes) => fragments.push(bytes),
                        Err(e) => {
                            self.error(log, Some((vr, tag)), format!("Truncated fragment: {}", e))?;
                            return Ok((fragments, Flow::Stop));
                        }
                    }
                }
                SequenceItemHeader::ItemDelimiter => {
                    log.add_warning_at(vr, tag, "Ignoring item delimiter between fragments");
                }
                SequenceItemHeader::SequenceDelimiter => return Ok((fragments, Flow::End)),
            }
        }
    }

    /// Find the end of the current frame after an attribute
    /// whose extent is unknown.
    fn resync(&mut self, frame: Frame) -> Flow {
        match frame {
            Frame::TopLevel => {
                tracing::warn!("Cannot resynchronize at top level, stopping");
                Flow::Stop
            }
            Frame::Defined { end } => self.skip_to(end),
            Frame::Undefined => {
                tracing::warn!("Resynchronizing at the next item delimiter");
                match self.decoder.skip_to_delimiter(Tag::ITEM_DELIMITER) {
                    // the delimiter was consumed, so the item is over
                    Ok(()) => Flow::End,
                    Err(_) => Flow::Stop,
                }
            }
        }
    }

    /// Skip to the absolute position where the current frame ends.
    fn skip_to(&mut self, end: u64) -> Flow {
        let position = self.decoder.bytes_read();
        tracing::warn!("Skipping {} bytes to resynchronize", end.saturating_sub(position));
        match self.decoder.skip_bytes(end.saturating_sub(position)) {
            Ok(()) => Flow::End,
            Err(_) => Flow::Stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const UNDEFINED_TEXT_IN_ITEM: &[u8] = &[
        0x10, 0x40, 0x11, 0x10, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
                // text of undefined length, the extent of which is unknown
                0x10, 0x40, 0x13, 0x10, b'U', b'T', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
                    0x01, 0x02,
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        0x10, 0x40, 0x31, 0x10, b'C', b'S', 0x02, 0x00, b'N', b'O',
    ];

    #[test]
    fn resync_at_item_delimiter() {
        let mut log = ErrorLog::new();
        log.ignore_redirect(true);
        let mut reader = DataSetReader::new(UNDEFINED_TEXT_IN_ITEM, TransferSyntax::ExplicitVRLittleEndian);
        let dataset = reader.read_dataset(&mut log).unwrap();

        assert_eq!(log.num_errors(), 1);
        assert_eq!(dataset.items(Tag(0x4010, 0x1011)).map(|items| items.len()), Some(1));
        assert!(dataset.items(Tag(0x4010, 0x1011)).unwrap()[0].is_empty());
        assert_eq!(dataset.string(Tag(0x4010, 0x1031)), Some("NO"));
        assert_eq!(reader.bytes_read(), UNDEFINED_TEXT_IN_ITEM.len() as u64);
    }

    #[test]
    fn base_offset_is_counted() {
        let mut log = ErrorLog::new();
        let mut reader = DataSetReader::with_options(
            &UNDEFINED_TEXT_IN_ITEM[50..],
            TransferSyntax::ExplicitVRLittleEndian,
            DataSetReaderOptions::default().base_offset(50),
        );
        let dataset = reader.read_dataset(&mut log).unwrap();
        assert!(log.is_empty());
        assert_eq!(dataset.len(), 1);
        assert_eq!(reader.bytes_read(), 60);
    }
}
