//! Explicit VR Little Endian syntax transfer implementation

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{
    impl_encode_to, BasicEncode, Encode, LengthTooLongSnafu, Result, WriteHeaderSnafu,
    WriteItemDelimiterSnafu, WriteItemHeaderSnafu, WriteSequenceDelimiterSnafu, WriteTagSnafu,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use byteordered::Endianness;
use dicos_core::header::{AttributeHeader, HasLength, Header};
use dicos_core::Tag;
use snafu::{ensure, ResultExt};
use std::io::{self, Write};

/// A concrete encoder for the transfer syntax ExplicitVRLittleEndian
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl BasicEncode for ExplicitVRLittleEndianEncoder {
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

impl Encode for ExplicitVRLittleEndianEncoder {
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
        let vr = header.vr();
        let len = header.length().0;
        let vr_bytes = vr.to_bytes();
        if vr.has_long_length() {
            // 2 reserved bytes kept zero'd, then a 32-bit length
            let mut buf = [0u8; 12];
            LittleEndian::write_u16(&mut buf[0..], header.tag().group());
            LittleEndian::write_u16(&mut buf[2..], header.tag().element());
            buf[4] = vr_bytes[0];
            buf[5] = vr_bytes[1];
            LittleEndian::write_u32(&mut buf[8..], len);
            to.write_all(&buf).context(WriteHeaderSnafu)?;
            Ok(12)
        } else {
            ensure!(
                len <= u32::from(u16::MAX),
                LengthTooLongSnafu {
                    tag: header.tag(),
                    len
                }
            );
            let mut buf = [0u8; 8];
            LittleEndian::write_u16(&mut buf[0..], header.tag().group());
            LittleEndian::write_u16(&mut buf[2..], header.tag().element());
            buf[4] = vr_bytes[0];
            buf[5] = vr_bytes[1];
            LittleEndian::write_u16(&mut buf[6..], len as u16);
            to.write_all(&buf).context(WriteHeaderSnafu)?;
            Ok(8)
        }
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

impl_encode_to!(ExplicitVRLittleEndianEncoder);

#[cfg(test)]
mod tests {
    use super::ExplicitVRLittleEndianEncoder;
    use crate::encode::{Encode, Error};
    use dicos_core::header::{AttributeHeader, Length};
    use dicos_core::{Tag, VR};

    #[test]
    fn encode_short_and_long_headers() {
        let enc = ExplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();

        let bytes = enc
            .encode_attribute_header(
                &mut out,
                AttributeHeader::new(Tag(0x0008, 0x0018), VR::UI, Length(4)),
            )
            .unwrap();
        assert_eq!(bytes, 8);
        let bytes = enc
            .encode_attribute_header(
                &mut out,
                AttributeHeader::new(Tag(0x4010, 0x1011), VR::SQ, Length::UNDEFINED),
            )
            .unwrap();
        assert_eq!(bytes, 12);

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x04, 0x00,
            0x10, 0x40, 0x11, 0x10, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        assert_eq!(&out[..], expected);
    }

    #[test]
    fn encode_item_framing() {
        let enc = ExplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();
        enc.encode_item_header(&mut out, 0xFFFF_FFFF).unwrap();
        enc.encode_item_delimiter(&mut out).unwrap();
        enc.encode_sequence_delimiter(&mut out).unwrap();

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(&out[..], expected);
    }

    #[test]
    fn short_length_field_overflow_is_an_error() {
        let enc = ExplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();
        let res = enc.encode_attribute_header(
            &mut out,
            AttributeHeader::new(Tag(0x0008, 0x0018), VR::UI, Length(0x1_0000)),
        );
        assert!(matches!(res, Err(Error::LengthTooLong { .. })));
        assert!(out.is_empty());
    }
}
