//! Implicit VR Little Endian syntax transfer implementation

use crate::decode::basic::LittleEndianBasicDecoder;
use crate::decode::{
    BadSequenceHeaderSnafu, BasicDecode, Decode, DecodeFrom, ReadHeaderTagSnafu,
    ReadLengthSnafu, ReadTagSnafu, Result,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicos_core::dictionary::{DataDictionary, DictionaryEntry};
use dicos_core::header::{AttributeHeader, Length, SequenceItemHeader};
use dicos_core::{Tag, VR};
use dicos_dictionary_std::StandardDataDictionary;
use snafu::ResultExt;
use std::fmt;
use std::io::Read;

/// An ImplicitVRLittleEndianDecoder which uses the standard data dictionary.
pub type StandardImplicitVRLittleEndianDecoder =
    ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// An attribute header decoder for the Implicit VR Little Endian transfer syntax.
/// This type contains an attribute dictionary for resolving
/// value representations.
///
/// Attributes missing from the dictionary are given the VR OB,
/// or SQ if their length is undefined.
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
    basic: LittleEndianBasicDecoder,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &"«omitted»")
            .field("basic", &self.basic)
            .finish()
    }
}

impl ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    /// Retrieve this decoder using the standard data dictionary.
    pub fn with_std_dict() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
            basic: LittleEndianBasicDecoder,
        }
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder::with_std_dict()
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// Retrieve this decoder using a custom data dictionary.
    pub fn with_dict(dictionary: D) -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: dictionary,
            basic: LittleEndianBasicDecoder,
        }
    }

    fn resolve_vr(&self, tag: Tag, len: Length) -> VR {
        if tag.is_delimitation() {
            return VR::UN;
        }
        match self.dict.by_tag(tag) {
            Some(entry) => entry.vr(),
            None if len.is_undefined() => VR::SQ,
            None => VR::OB,
        }
    }
}

impl<D> Decode for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header<S>(&self, mut source: &mut S) -> Result<(AttributeHeader, usize)>
    where
        S: ?Sized + Read,
    {
        // retrieve tag
        let tag = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;

        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadLengthSnafu)?;
        let len = Length(LittleEndian::read_u32(&buf));

        // VR resolution is done with the help of the data dictionary
        let vr = self.resolve_vr(tag, len);
        Ok((AttributeHeader::new(tag, vr, len), 8))
    }

    fn decode_item_header<S>(&self, mut source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 4];

        // retrieve tag
        let tag = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;

        source.read_exact(&mut buf).context(ReadLengthSnafu)?;
        let len = LittleEndian::read_u32(&buf);
        SequenceItemHeader::new(tag, Length(len)).context(BadSequenceHeaderSnafu)
    }

    #[inline]
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        self.basic.decode_tag(source).context(ReadTagSnafu)
    }
}

impl<S: ?Sized, D> DecodeFrom<S> for ImplicitVRLittleEndianDecoder<D>
where
    S: Read,
    D: DataDictionary,
{
    #[inline]
    fn decode_header(&self, source: &mut S) -> Result<(AttributeHeader, usize)> {
        Decode::decode_header(self, source)
    }

    #[inline]
    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        Decode::decode_item_header(self, source)
    }

    #[inline]
    fn decode_tag(&self, source: &mut S) -> Result<Tag> {
        Decode::decode_tag(self, source)
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use dicos_core::dictionary::StubDataDictionary;
    use dicos_core::header::{HasLength, Header, Length};
    use dicos_core::{Tag, VR};
    use std::io::{Cursor, Seek, SeekFrom};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x08, 0x00, 0x16, 0x00,     // (0008,0016) SOP Class UID
            0x04, 0x00, 0x00, 0x00, // Length: 4
                b'1', b'.', b'2', 0x00,
        0x09, 0x00, 0x10, 0x10,     // (0009,1010) private attribute
            0x02, 0x00, 0x00, 0x00, // Length: 2
                0x01, 0x02,
        0x10, 0x40, 0x11, 0x10,     // (4010,1011) Threat Sequence
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0xDD, 0xE0,     // Sequence end
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn implicit_vr_le_with_std_dict() {
        let reader = ImplicitVRLittleEndianDecoder::with_std_dict();
        let mut cursor = Cursor::new(RAW);

        let (header, bytes_read) = reader.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag(0x0008, 0x0016));
        assert_eq!(header.vr(), VR::UI);
        assert_eq!(header.length(), Length(4));
        assert_eq!(bytes_read, 8);
        cursor.seek(SeekFrom::Current(4)).unwrap();

        // undictionaried attributes become OB
        let (header, _) = reader.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag(0x0009, 0x1010));
        assert_eq!(header.vr(), VR::OB);
        cursor.seek(SeekFrom::Current(2)).unwrap();

        let (header, _) = reader.decode_header(&mut cursor).unwrap();
        assert_eq!(header.vr(), VR::SQ);
        assert!(header.length().is_undefined());

        let item = reader.decode_item_header(&mut cursor).unwrap();
        assert!(item.is_sequence_delimiter());
    }

    #[test]
    fn undefined_length_unknowns_are_sequences() {
        let reader = ImplicitVRLittleEndianDecoder::with_dict(StubDataDictionary);
        let mut cursor = Cursor::new(&RAW[22..]);
        let (header, _) = reader.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag(0x4010, 0x1011));
        assert_eq!(header.vr(), VR::SQ);
    }
}
