//! Text encoding and decoding of string values,
//! according to the Specific Character Set (0008,0005) of the object.
//!
//! Only single-byte Latin and UTF-8 repertoires are supported,
//! which cover the character sets declared by screening equipment in practice.

use encoding::all::{ISO_8859_1, UTF_8};
use encoding::{DecoderTrap, EncoderTrap, EncodingRef};
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;
use std::fmt;

/// An error type for text encoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum EncodeTextError {
    /// The text contains characters outside of the repertoire.
    #[snafu(display("Could not encode text in {}: {}", charset, message))]
    Unrepresentable {
        /// the name of the character set
        charset: &'static str,
        /// the underlying message
        message: Cow<'static, str>,
        backtrace: Backtrace,
    },
}

/// An error type for text decoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DecodeTextError {
    /// The bytes are not valid in the character set.
    #[snafu(display("Could not decode text in {}: {}", charset, message))]
    Malformed {
        /// the name of the character set
        charset: &'static str,
        /// the underlying message
        message: Cow<'static, str>,
        backtrace: Backtrace,
    },
}

/// A holder of encoding and decoding mechanisms for text values.
pub trait TextCodec {
    /// The defined term of this character set,
    /// as would be written in Specific Character Set (0008,0005).
    fn name(&self) -> &'static str;

    /// Decode the given bytes as a single string.
    /// The result may contain backslashes delimiting value components.
    fn decode(&self, text: &[u8]) -> Result<String, DecodeTextError>;

    /// Encode a string into bytes.
    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodeTextError>;
}

impl<T: ?Sized> TextCodec for &T
where
    T: TextCodec,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decode(&self, text: &[u8]) -> Result<String, DecodeTextError> {
        (**self).decode(text)
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodeTextError> {
        (**self).encode(text)
    }
}

/// The supported character sets.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum SpecificCharacterSet {
    /// **ISO-IR 6**: the default repertoire (ASCII).
    #[default]
    Default,
    /// **ISO-IR 100** (ISO-8859-1): Latin alphabet no. 1.
    IsoIr100,
    /// **ISO-IR 192**: Unicode in UTF-8.
    IsoIr192,
}

impl SpecificCharacterSet {
    /// Obtain the character set identified by a defined term
    /// of Specific Character Set (0008,0005).
    ///
    /// An empty term stands for the default repertoire.
    pub fn from_code(term: &str) -> Option<Self> {
        match term.trim_matches(|c: char| c == ' ' || c == '\0') {
            "" | "ISO_IR 6" | "ISO_IR_6" | "ISO 2022 IR 6" => Some(SpecificCharacterSet::Default),
            "ISO_IR 100" | "ISO_IR_100" | "ISO 2022 IR 100" => {
                Some(SpecificCharacterSet::IsoIr100)
            }
            "ISO_IR 192" | "ISO_IR_192" => Some(SpecificCharacterSet::IsoIr192),
            _ => None,
        }
    }

    fn encoding(self) -> EncodingRef {
        match self {
            // the default repertoire is a subset of Latin-1
            SpecificCharacterSet::Default | SpecificCharacterSet::IsoIr100 => ISO_8859_1,
            SpecificCharacterSet::IsoIr192 => UTF_8,
        }
    }
}

impl fmt::Display for SpecificCharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TextCodec for SpecificCharacterSet {
    fn name(&self) -> &'static str {
        match self {
            SpecificCharacterSet::Default => "ISO_IR 6",
            SpecificCharacterSet::IsoIr100 => "ISO_IR 100",
            SpecificCharacterSet::IsoIr192 => "ISO_IR 192",
        }
    }

    fn decode(&self, text: &[u8]) -> Result<String, DecodeTextError> {
        // undecodable sequences become U+FFFD rather than failing the attribute
        self.encoding()
            .decode(text, DecoderTrap::Replace)
            .map_err(|message| {
                MalformedSnafu {
                    charset: self.name(),
                    message,
                }
                .build()
            })
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodeTextError> {
        self.encoding()
            .encode(text, EncoderTrap::Strict)
            .map_err(|message| {
                UnrepresentableSnafu {
                    charset: self.name(),
                    message,
                }
                .build()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_codec<T>(codec: T, string: &str, bytes: &[u8])
    where
        T: TextCodec,
    {
        assert_eq!(codec.encode(string).expect("encoding"), bytes);
        assert_eq!(codec.decode(bytes).expect("decoding"), string);
    }

    #[test]
    fn default_repertoire() {
        test_codec(SpecificCharacterSet::Default, "BAG^0042", b"BAG^0042");
        assert_eq!(
            SpecificCharacterSet::from_code(""),
            Some(SpecificCharacterSet::Default)
        );
    }

    #[test]
    fn latin1_and_utf8() {
        test_codec(SpecificCharacterSet::IsoIr100, "Mal\u{e9}e", b"Mal\xE9e");
        test_codec(SpecificCharacterSet::IsoIr192, "Mal\u{e9}e", "Mal\u{e9}e".as_bytes());
        assert!(SpecificCharacterSet::IsoIr100.encode("\u{41f}").is_err());
    }

    #[test]
    fn terms_are_recognized() {
        assert_eq!(
            SpecificCharacterSet::from_code("ISO_IR 192 "),
            Some(SpecificCharacterSet::IsoIr192)
        );
        assert_eq!(SpecificCharacterSet::from_code("GB18030"), None);
        assert_eq!(SpecificCharacterSet::IsoIr100.to_string(), "ISO_IR 100");
    }
}
