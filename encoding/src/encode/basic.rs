//! This module provides implementations for basic encoders: little endian and big endian.

use super::BasicEncode;
use byteordered::{ByteOrdered, Endianness};
use std::io::Write;

type Result<T> = std::io::Result<T>;

/// Implement the basic encoding methods for one fixed byte order.
macro_rules! impl_basic_encode {
    ($typ: ty, $endianness: expr, $ordered: ident) => {
        impl BasicEncode for $typ {
            fn endianness(&self) -> Endianness {
                $endianness
            }

            fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ordered(to).write_u16(value)
            }

            fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ordered(to).write_u32(value)
            }

            fn encode_uv<S>(&self, to: S, value: u64) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ordered(to).write_u64(value)
            }

            fn encode_ss<S>(&self, to: S, value: i16) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ordered(to).write_i16(value)
            }

            fn encode_sl<S>(&self, to: S, value: i32) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ordered(to).write_i32(value)
            }

            fn encode_sv<S>(&self, to: S, value: i64) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ordered(to).write_i64(value)
            }

            fn encode_fl<S>(&self, to: S, value: f32) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ordered(to).write_f32(value)
            }

            fn encode_fd<S>(&self, to: S, value: f64) -> Result<()>
            where
                S: Write,
            {
                ByteOrdered::$ordered(to).write_f64(value)
            }
        }
    };
}

/// A basic encoder of primitive values in little endian.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct LittleEndianBasicEncoder;

impl_basic_encode!(LittleEndianBasicEncoder, Endianness::Little, le);

/// A basic encoder of primitive values in big endian.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct BigEndianBasicEncoder;

impl_basic_encode!(BigEndianBasicEncoder, Endianness::Big, be);

/// A basic encoder with support for both Little Endian an Big Endian
/// encoding, decided at run-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicEncoder {
    /// Encode in Little Endian
    LE(LittleEndianBasicEncoder),
    /// Encode in Big Endian
    BE(BigEndianBasicEncoder),
}

use self::BasicEncoder::{BE, LE};

impl BasicEncoder {
    /// Create a basic encoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Little => LE(LittleEndianBasicEncoder),
            Endianness::Big => BE(BigEndianBasicEncoder),
        }
    }
}

impl From<Endianness> for BasicEncoder {
    fn from(endianness: Endianness) -> Self {
        BasicEncoder::new(endianness)
    }
}

macro_rules! for_both {
    ($s: expr, |$e: ident| $f: expr) => {
        match *$s {
            LE(ref $e) => $f,
            BE(ref $e) => $f,
        }
    };
}

impl BasicEncode for BasicEncoder {
    fn endianness(&self) -> Endianness {
        match *self {
            LE(_) => Endianness::Little,
            BE(_) => Endianness::Big,
        }
    }

    fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_us(to, value))
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_ul(to, value))
    }

    fn encode_uv<S>(&self, to: S, value: u64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_uv(to, value))
    }

    fn encode_ss<S>(&self, to: S, value: i16) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_ss(to, value))
    }

    fn encode_sl<S>(&self, to: S, value: i32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_sl(to, value))
    }

    fn encode_sv<S>(&self, to: S, value: i64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_sv(to, value))
    }

    fn encode_fl<S>(&self, to: S, value: f32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_fl(to, value))
    }

    fn encode_fd<S>(&self, to: S, value: f64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_fd(to, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicos_core::Tag;

    fn test_one_value<E, T, F>(encoder: &E, value: T, expected: &[u8], f: F)
    where
        E: BasicEncode,
        F: Fn(&E, &mut Vec<u8>, T) -> Result<()>,
    {
        let mut out = Vec::with_capacity(expected.len());
        f(encoder, &mut out, value).expect("should write to a vector");
        assert_eq!(&out[..], expected);
    }

    #[test]
    fn test_write_integers() {
        let le = LittleEndianBasicEncoder;
        let be = BigEndianBasicEncoder;

        test_one_value(&le, 0x3CC3u16, &[0xC3, 0x3C], |e, out, v| e.encode_us(out, v));
        test_one_value(&be, 0x3CC3u16, &[0x3C, 0xC3], |e, out, v| e.encode_us(out, v));
        test_one_value(&le, 0xCC333CC3u32, &[0xC3, 0x3C, 0x33, 0xCC], |e, out, v| {
            e.encode_ul(out, v)
        });
        test_one_value(&be, -2i16, &[0xFF, 0xFE], |e, out, v| e.encode_ss(out, v));

        let dynamic = BasicEncoder::new(Endianness::Big);
        test_one_value(&dynamic, 1.0f32, &[0x3F, 0x80, 0x00, 0x00], |e, out, v| {
            e.encode_fl(out, v)
        });
    }

    #[test]
    fn test_write_tag_value() {
        let mut out = Vec::new();
        LittleEndianBasicEncoder
            .encode_tag_value(&mut out, Tag(0x4010, 0x1011))
            .unwrap();
        BigEndianBasicEncoder
            .encode_tag_value(&mut out, Tag(0x4010, 0x1011))
            .unwrap();
        assert_eq!(out, [0x10, 0x40, 0x11, 0x10, 0x40, 0x10, 0x10, 0x11]);
    }
}
