//! Explicit VR Big Endian syntax transfer implementation

use crate::encode::basic::BigEndianBasicEncoder;
use crate::encode::{
    impl_encode_to, BasicEncode, Encode, LengthTooLongSnafu, Result, WriteHeaderSnafu,
    WriteItemDelimiterSnafu, WriteItemHeaderSnafu, WriteSequenceDelimiterSnafu, WriteTagSnafu,
};
use byteordered::byteorder::{BigEndian, ByteOrder};
use byteordered::Endianness;
use dicos_core::header::{AttributeHeader, HasLength, Header};
use dicos_core::Tag;
use snafu::{ensure, ResultExt};
use std::io::{self, Write};

/// A concrete encoder for the transfer syntax ExplicitVRBigEndian
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRBigEndianEncoder {
    basic: BigEndianBasicEncoder,
}

impl BasicEncode for ExplicitVRBigEndianEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Big
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

impl Encode for ExplicitVRBigEndianEncoder {
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 4];
        BigEndian::write_u16(&mut buf[..], tag.group());
        BigEndian::write_u16(&mut buf[2..], tag.element());
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
            BigEndian::write_u16(&mut buf[0..], header.tag().group());
            BigEndian::write_u16(&mut buf[2..], header.tag().element());
            buf[4] = vr_bytes[0];
            buf[5] = vr_bytes[1];
            BigEndian::write_u32(&mut buf[8..], len);
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
            BigEndian::write_u16(&mut buf[0..], header.tag().group());
            BigEndian::write_u16(&mut buf[2..], header.tag().element());
            buf[4] = vr_bytes[0];
            buf[5] = vr_bytes[1];
            BigEndian::write_u16(&mut buf[6..], len as u16);
            to.write_all(&buf).context(WriteHeaderSnafu)?;
            Ok(8)
        }
    }

    fn encode_item_header<W>(&self, mut to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        BigEndian::write_u16(&mut buf, 0xFFFE);
        BigEndian::write_u16(&mut buf[2..], 0xE000);
        BigEndian::write_u32(&mut buf[4..], len);
        to.write_all(&buf).context(WriteItemHeaderSnafu)
    }

    fn encode_item_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        BigEndian::write_u16(&mut buf, 0xFFFE);
        BigEndian::write_u16(&mut buf[2..], 0xE00D);
        to.write_all(&buf).context(WriteItemDelimiterSnafu)
    }

    fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        BigEndian::write_u16(&mut buf, 0xFFFE);
        BigEndian::write_u16(&mut buf[2..], 0xE0DD);
        to.write_all(&buf).context(WriteSequenceDelimiterSnafu)
    }
}

impl_encode_to!(ExplicitVRBigEndianEncoder);
