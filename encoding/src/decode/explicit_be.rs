//! Explicit VR Big Endian syntax transfer implementation

use crate::decode::basic::BigEndianBasicDecoder;
use crate::decode::{
    BadSequenceHeaderSnafu, BasicDecode, Decode, DecodeFrom, ReadHeaderTagSnafu,
    ReadItemHeaderSnafu, ReadItemLengthSnafu, ReadLengthSnafu, ReadReservedSnafu, ReadTagSnafu,
    ReadVrSnafu, Result,
};
use byteordered::byteorder::{BigEndian, ByteOrder};
use dicos_core::header::{AttributeHeader, Length, SequenceItemHeader};
use dicos_core::{Tag, VR};
use snafu::ResultExt;
use std::io::Read;

/// An attribute header decoder for the Explicit VR Big Endian transfer syntax.
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRBigEndianDecoder {
    basic: BigEndianBasicDecoder,
}

impl Decode for ExplicitVRBigEndianDecoder {
    fn decode_header<S>(&self, mut source: &mut S) -> Result<(AttributeHeader, usize)>
    where
        S: ?Sized + Read,
    {
        // retrieve tag
        let Tag(group, element) = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;

        let mut buf = [0u8; 4];
        if group == 0xFFFE {
            // item delimiters do not have VR or reserved field
            source.read_exact(&mut buf).context(ReadItemLengthSnafu)?;
            let len = BigEndian::read_u32(&buf);
            return Ok((
                AttributeHeader::new((group, element), VR::UN, Length(len)),
                8, // tag + len
            ));
        }

        // retrieve explicit VR
        source.read_exact(&mut buf[0..2]).context(ReadVrSnafu)?;
        let vr = VR::from_binary([buf[0], buf[1]]).unwrap_or(VR::UN);

        // retrieve data length
        let (len, bytes_read) = if vr.has_long_length() {
            // 2 reserved bytes, then 4 bytes for data length
            source
                .read_exact(&mut buf[0..2])
                .context(ReadReservedSnafu)?;
            source.read_exact(&mut buf).context(ReadLengthSnafu)?;
            (BigEndian::read_u32(&buf), 12)
        } else {
            // 2 bytes for the data length
            source.read_exact(&mut buf[0..2]).context(ReadLengthSnafu)?;
            (u32::from(BigEndian::read_u16(&buf[0..2])), 8)
        };

        Ok((
            AttributeHeader::new((group, element), vr, Length(len)),
            bytes_read,
        ))
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 8];
        source.read_exact(&mut buf).context(ReadItemHeaderSnafu)?;
        // retrieve tag
        let group = BigEndian::read_u16(&buf[0..2]);
        let element = BigEndian::read_u16(&buf[2..4]);
        let len = BigEndian::read_u32(&buf[4..8]);

        SequenceItemHeader::new((group, element), Length(len)).context(BadSequenceHeaderSnafu)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadTagSnafu)?;
        Ok(Tag(
            BigEndian::read_u16(&buf[0..2]),
            BigEndian::read_u16(&buf[2..4]),
        ))
    }
}

impl<S: ?Sized> DecodeFrom<S> for ExplicitVRBigEndianDecoder
where
    S: Read,
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
    use super::ExplicitVRBigEndianDecoder;
    use crate::decode::Decode;
    use dicos_core::header::{HasLength, Header, Length};
    use dicos_core::{Tag, VR};
    use std::io::{Cursor, Read, Seek};

    // manually crafting some DICOS attributes
    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x00, 0x08, 0x00, 0x18,     // (0008,0018) (BE) SOP Instance UID
            b'U', b'I',             // VR: UI (UID)
            0x00, 0x04,             // Length: 4 bytes (BE)
                b'1', b'.', b'2', 0x00,
        0x40, 0x10, 0x10, 0x33,     // (4010,1033) (BE) Number of Total Objects
            b'U', b'S',             // VR: US (Unsigned Short)
            0x00, 0x02,             // Length: 2 bytes (BE)
                0x00, 0x07,
        0x40, 0x10, 0x10, 0x11,     // (4010,1011) (BE) Threat Sequence
            b'S', b'Q',             // VR: SQ
            0x00, 0x00,             // Reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFF, 0xFE, 0xE0, 0xDD,     // Sequence end
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_attributes() {
        let dec = ExplicitVRBigEndianDecoder::default();
        let mut cursor = Cursor::new(RAW);

        let (header, bytes_read) = dec
            .decode_header(&mut cursor)
            .expect("should find an attribute");
        assert_eq!(header.tag(), Tag(0x0008, 0x0018));
        assert_eq!(header.vr(), VR::UI);
        assert_eq!(header.length(), Length(4));
        assert_eq!(bytes_read, 8);
        cursor.seek(std::io::SeekFrom::Current(4)).unwrap();

        let (header, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag(0x4010, 0x1033));
        assert_eq!(header.vr(), VR::US);
        let mut value = [0u8; 2];
        cursor.read_exact(&mut value).unwrap();
        assert_eq!(u16::from_be_bytes(value), 7);

        let (header, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag(0x4010, 0x1011));
        assert!(header.length().is_undefined());
        assert_eq!(bytes_read, 12);

        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert!(item.is_sequence_delimiter());
        assert_eq!(cursor.stream_position().unwrap(), 42);
    }
}
