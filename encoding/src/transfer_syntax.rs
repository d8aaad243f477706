//! Module containing the DICOS transfer syntax enumeration and related methods.
//!
//! A [`TransferSyntax`] holds everything needed to pick the right
//! attribute header decoder and encoder for a data set:
//! its byte order and whether value representations are explicit.

use crate::decode::basic::BasicDecoder;
use crate::decode::explicit_be::ExplicitVRBigEndianDecoder;
use crate::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use crate::decode::implicit_le::ImplicitVRLittleEndianDecoder;
use crate::decode::DecodeFrom;
use crate::encode::basic::BasicEncoder;
use crate::encode::explicit_be::ExplicitVRBigEndianEncoder;
use crate::encode::explicit_le::ExplicitVRLittleEndianEncoder;
use crate::encode::implicit_le::ImplicitVRLittleEndianEncoder;
use crate::encode::EncodeTo;
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

pub use byteordered::Endianness;

/// A decoder with its type erased.
pub type DynDecoder<'s, S> = Box<dyn DecodeFrom<S> + 's>;

/// An encoder with its type erased.
pub type DynEncoder<'w, W> = Box<dyn EncodeTo<W> + 'w>;

/// UID of the Implicit VR Little Endian transfer syntax.
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// UID of the Explicit VR Little Endian transfer syntax.
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// UID of the Explicit VR Big Endian transfer syntax.
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";

/// A DICOS transfer syntax specifier.
///
/// The default transfer syntax is Implicit VR Little Endian.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TransferSyntax {
    /// Implicit VR Little Endian:
    /// no VR in the stream, 4-byte lengths everywhere.
    #[default]
    ImplicitVRLittleEndian,
    /// Explicit VR Little Endian.
    /// Used for the file meta group regardless of the data set's syntax.
    ExplicitVRLittleEndian,
    /// Explicit VR Big Endian.
    ExplicitVRBigEndian,
}

impl TransferSyntax {
    /// All supported transfer syntaxes.
    pub const ALL: [TransferSyntax; 3] = [
        TransferSyntax::ImplicitVRLittleEndian,
        TransferSyntax::ExplicitVRLittleEndian,
        TransferSyntax::ExplicitVRBigEndian,
    ];

    /// Obtain a transfer syntax by its respective UID.
    ///
    /// Trailing null characters and spaces,
    /// which are a product of value padding, are ignored.
    pub fn from_uid(uid: &str) -> Option<TransferSyntax> {
        match uid.trim_end_matches(|c: char| c == '\0' || c == ' ') {
            IMPLICIT_VR_LITTLE_ENDIAN => Some(TransferSyntax::ImplicitVRLittleEndian),
            EXPLICIT_VR_LITTLE_ENDIAN => Some(TransferSyntax::ExplicitVRLittleEndian),
            EXPLICIT_VR_BIG_ENDIAN => Some(TransferSyntax::ExplicitVRBigEndian),
            _ => None,
        }
    }

    /// Obtain this transfer syntax' unique identifier.
    pub fn uid(self) -> &'static str {
        match self {
            TransferSyntax::ImplicitVRLittleEndian => IMPLICIT_VR_LITTLE_ENDIAN,
            TransferSyntax::ExplicitVRLittleEndian => EXPLICIT_VR_LITTLE_ENDIAN,
            TransferSyntax::ExplicitVRBigEndian => EXPLICIT_VR_BIG_ENDIAN,
        }
    }

    /// Obtain the name of this transfer syntax.
    pub fn name(self) -> &'static str {
        match self {
            TransferSyntax::ImplicitVRLittleEndian => "Implicit VR Little Endian",
            TransferSyntax::ExplicitVRLittleEndian => "Explicit VR Little Endian",
            TransferSyntax::ExplicitVRBigEndian => "Explicit VR Big Endian",
        }
    }

    /// Obtain the expected endianness of the data set.
    pub fn endianness(self) -> Endianness {
        match self {
            TransferSyntax::ExplicitVRBigEndian => Endianness::Big,
            _ => Endianness::Little,
        }
    }

    /// Whether value representations are written in the stream.
    pub fn is_explicit_vr(self) -> bool {
        self != TransferSyntax::ImplicitVRLittleEndian
    }

    /// Retrieve the appropriate basic decoder for this transfer syntax.
    pub fn basic_decoder(self) -> BasicDecoder {
        BasicDecoder::from(self.endianness())
    }

    /// Retrieve the appropriate basic encoder for this transfer syntax.
    pub fn basic_encoder(self) -> BasicEncoder {
        BasicEncoder::from(self.endianness())
    }

    /// Retrieve the appropriate attribute header decoder for this transfer syntax.
    /// Implicit VR decoding consults the standard data dictionary.
    pub fn decoder<'s>(self) -> DynDecoder<'s, dyn Read + 's> {
        self.decoder_for()
    }

    /// Retrieve the appropriate attribute header decoder
    /// for this transfer syntax and a given reader type.
    pub fn decoder_for<'s, S>(self) -> DynDecoder<'s, S>
    where
        S: ?Sized + Read,
    {
        match self {
            TransferSyntax::ImplicitVRLittleEndian => {
                Box::new(ImplicitVRLittleEndianDecoder::default())
            }
            TransferSyntax::ExplicitVRLittleEndian => {
                Box::<ExplicitVRLittleEndianDecoder>::default()
            }
            TransferSyntax::ExplicitVRBigEndian => Box::<ExplicitVRBigEndianDecoder>::default(),
        }
    }

    /// Retrieve the appropriate attribute header encoder for this transfer syntax.
    pub fn encoder<'w>(self) -> DynEncoder<'w, dyn Write + 'w> {
        self.encoder_for()
    }

    /// Retrieve the appropriate attribute header encoder
    /// for this transfer syntax and a given writer type.
    pub fn encoder_for<'w, W>(self) -> DynEncoder<'w, W>
    where
        W: ?Sized + Write,
    {
        match self {
            TransferSyntax::ImplicitVRLittleEndian => {
                Box::<ImplicitVRLittleEndianEncoder>::default()
            }
            TransferSyntax::ExplicitVRLittleEndian => {
                Box::<ExplicitVRLittleEndianEncoder>::default()
            }
            TransferSyntax::ExplicitVRBigEndian => Box::<ExplicitVRBigEndianEncoder>::default(),
        }
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unsupported transfer syntax UID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedTransferSyntax(pub String);

impl fmt::Display for UnsupportedTransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported transfer syntax `{}`", self.0)
    }
}

impl std::error::Error for UnsupportedTransferSyntax {}

impl FromStr for TransferSyntax {
    type Err = UnsupportedTransferSyntax;

    fn from_str(uid: &str) -> Result<Self, Self::Err> {
        TransferSyntax::from_uid(uid).ok_or_else(|| UnsupportedTransferSyntax(uid.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicos_core::header::{AttributeHeader, Header, Length};
    use dicos_core::{Tag, VR};
    use std::io::Cursor;

    #[test]
    fn uids_are_resolved() {
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2.1\0"),
            Some(TransferSyntax::ExplicitVRLittleEndian)
        );
        assert_eq!(
            TransferSyntax::from_uid("1.2.840.10008.1.2"),
            Some(TransferSyntax::ImplicitVRLittleEndian)
        );
        assert_eq!(TransferSyntax::from_uid("1.2.840.10008.1.2.4.50"), None);
        assert!("1.2.3".parse::<TransferSyntax>().is_err());
        for ts in TransferSyntax::ALL {
            assert_eq!(TransferSyntax::from_uid(ts.uid()), Some(ts));
        }
    }

    #[test]
    fn properties() {
        assert_eq!(TransferSyntax::default(), TransferSyntax::ImplicitVRLittleEndian);
        assert!(!TransferSyntax::ImplicitVRLittleEndian.is_explicit_vr());
        assert!(TransferSyntax::ExplicitVRBigEndian.is_explicit_vr());
        assert_eq!(TransferSyntax::ExplicitVRBigEndian.endianness(), Endianness::Big);
        assert_eq!(
            TransferSyntax::ExplicitVRLittleEndian.to_string(),
            "Explicit VR Little Endian"
        );
    }

    #[test]
    fn dynamic_codecs_agree() {
        for ts in TransferSyntax::ALL {
            let mut out: Vec<u8> = Vec::new();
            let encoder = ts.encoder_for::<Vec<u8>>();
            encoder
                .encode_attribute_header(
                    &mut out,
                    AttributeHeader::new(Tag(0x4010, 0x1010), VR::US, Length(2)),
                )
                .unwrap();

            let decoder = ts.decoder_for::<Cursor<Vec<u8>>>();
            let mut cursor = Cursor::new(out);
            let (header, _) = decoder.decode_header(&mut cursor).unwrap();
            assert_eq!(header.tag(), Tag(0x4010, 0x1010), "in {}", ts);
            assert_eq!(header.vr(), VR::US, "in {}", ts);
        }
    }
}
