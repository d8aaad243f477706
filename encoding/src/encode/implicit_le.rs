//! Implicit VR Little Endian syntax transfer implementation

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{
    impl_encode_to, BasicEncode, Encode, Result, WriteHeaderSnafu, WriteItemDelimiterSnafu,
    WriteItemHeaderSnafu, WriteSequenceDelimiterSnafu, WriteTagSnafu,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use byteordered::Endianness;
use dicos_core::header::{AttributeHeader, HasLength, Header};
use dicos_core::Tag;
use snafu::ResultExt;
use std::io::{self, Write};

/// A concrete encoder for the transfer syntax ImplicitVRLittleEndian.
///
/// The value representation is not written:
/// readers resolve it from the tag dictionary.
#[derive(Debug, Default, Clone)]
pub struct ImplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl BasicEncode for ImplicitVRLittleEndianEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    fn encode_us<S>(&self, to: S, value: u16) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_us(to, value)
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_ul(to, value)
    }

    fn encode_uv<S>(&self, to: S, value: u64) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_uv(to, value)
    }

    fn encode_ss<S>(&self, to: S, value: i16) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_ss(to, value)
    }

    fn encode_sl<S>(&self, to: S, value: i32) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_sl(to, value)
    }

    fn encode_sv<S>(&self, to: S, value: i64) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_sv(to, value)
    }

    fn encode_fl<S>(&self, to: S, value: f32) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_fl(to, value)
    }

    fn encode_fd<S>(&self, to: S, value: f64) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_fd(to, value)
    }
}

impl Encode for ImplicitVRLittleEndianEncoder {
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 4];
        LittleEndian::write_u16(&mut buf[..], tag.group());
        LittleEndian::write_u16(&mut buf[2..], tag.element());
        to.write_all(&buf).context(WriteTagSnafu)
    }

    fn encode_attribute_header<W>(&self, mut to: W, header: AttributeHeader) -> Result<usize>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf[0..], header.tag().group());
        LittleEndian::write_u16(&mut buf[2..], header.tag().element());
        LittleEndian::write_u32(&mut buf[4..], header.length().0);
        to.write_all(&buf).context(WriteHeaderSnafu)?;
        Ok(8)
    }

    fn encode_item_header<W>(&self, mut to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf, 0xFFFE);
        LittleEndian::write_u16(&mut buf[2..], 0xE000);
        LittleEndian::write_u32(&mut buf[4..], len);
        to.write_all(&buf).context(WriteItemHeaderSnafu)
    }

    fn encode_item_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf, 0xFFFE);
        LittleEndian::write_u16(&mut buf[2..], 0xE00D);
        to.write_all(&buf).context(WriteItemDelimiterSnafu)
    }

    fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf, 0xFFFE);
        LittleEndian::write_u16(&mut buf[2..], 0xE0DD);
        to.write_all(&buf).context(WriteSequenceDelimiterSnafu)
    }
}

impl_encode_to!(ImplicitVRLittleEndianEncoder);

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianEncoder;
    use crate::decode::implicit_le::ImplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use crate::encode::Encode;
    use dicos_core::header::{AttributeHeader, HasLength, Header, Length};
    use dicos_core::{Tag, VR};
    use std::io::Cursor;

    #[test]
    fn encode_headers_without_vr() {
        let enc = ImplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();
        let bytes = enc
            .encode_attribute_header(
                &mut out,
                AttributeHeader::new(Tag(0x4010, 0x1010), VR::US, Length(2)),
            )
            .unwrap();
        assert_eq!(bytes, 8);
        assert_eq!(&out[..], &[0x10, 0x40, 0x10, 0x10, 0x02, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn vr_is_recovered_from_the_dictionary() {
        let enc = ImplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();
        enc.encode_attribute_header(
            &mut out,
            AttributeHeader::new(Tag(0x4010, 0x1011), VR::SQ, Length::UNDEFINED),
        )
        .unwrap();
        enc.encode_sequence_delimiter(&mut out).unwrap();

        let dec = ImplicitVRLittleEndianDecoder::with_std_dict();
        let mut cursor = Cursor::new(&out[..]);
        let (header, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(header.tag(), Tag(0x4010, 0x1011));
        assert_eq!(header.vr(), VR::SQ);
        assert!(header.length().is_undefined());
        assert!(dec.decode_item_header(&mut cursor).unwrap().is_sequence_delimiter());
    }
}
