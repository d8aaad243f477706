//! Module containing the data structures and readers of the DICOS file meta group.
use dicos_core::dicos_value;
use dicos_core::header::{HasLength, Header};
use dicos_core::value::{CastValueError, Value};
use dicos_core::{Attribute, AttributeManager, Item, Length, Tag, VR};
use dicos_dictionary_std::tags;
use dicos_encoding::TransferSyntax;
use dicos_parser::dataset::write_dataset;
use dicos_parser::stateful::decode::FileHeaderParser;
use itertools::Itertools;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{Read, Write};

/// The magic code which follows the preamble of every DICOS file.
pub const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// The implementation class UID written by this toolkit by default.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.137038125948464847900039011591283709926";

/// The implementation version name written by this toolkit by default.
pub const IMPLEMENTATION_VERSION_NAME: &str = concat!("DICOS-RS ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The file meta group parser could not read
    /// the magic code `DICM` from its source.
    #[snafu(display("Could not start reading DICOS data"))]
    ReadMagicCode {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// Invalid DICOS data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOS data: magic code not found"))]
    NotDicos { backtrace: Backtrace },

    /// An issue occurred while decoding the next attribute
    /// in the file meta group.
    #[snafu(display("Could not decode attribute of the file meta group"))]
    DecodeAttribute {
        #[snafu(backtrace)]
        source: dicos_parser::stateful::decode::Error,
    },

    /// An attribute with an unexpected tag was retrieved:
    /// the parser was expecting another tag first,
    /// or at least one that is part of the file meta group.
    #[snafu(display("Unexpected attribute tagged {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },

    /// A required file meta group attribute is missing.
    #[snafu(display("Missing attribute `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },

    /// The value length of an attribute in the file meta group
    /// was unexpected.
    #[snafu(display("Unexpected length {} for attribute tagged {}", length, tag))]
    UnexpectedDataValueLength {
        tag: Tag,
        length: Length,
        backtrace: Backtrace,
    },

    /// The value length of an attribute is undefined,
    /// but knowing the length is required in its context.
    #[snafu(display("Undefined value length for attribute tagged {}", tag))]
    UndefinedValueLength { tag: Tag, backtrace: Backtrace },

    /// The value of an attribute is not of the expected type.
    #[snafu(display("Unexpected value type for attribute tagged {}", tag))]
    UnexpectedValueType {
        tag: Tag,
        source: CastValueError,
        backtrace: Backtrace,
    },

    /// The attributes read do not add up to the declared group length.
    #[snafu(display(
        "File meta group length is {} bytes, but {} bytes were read",
        expected,
        actual
    ))]
    GroupLengthMismatch {
        expected: u32,
        actual: u64,
        backtrace: Backtrace,
    },

    /// The file meta group data set could not be written.
    #[snafu(display("Could not write file meta group data set"))]
    WriteSet {
        #[snafu(backtrace)]
        source: dicos_parser::dataset::write::Error,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOS File Meta Information Table.
///
/// This data type contains the relevant parts of the file meta group
/// (group `0002`), which precedes the data set in a DICOS file
/// and is always encoded in Explicit VR Little Endian.
/// Text values are kept without their trailing padding.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Group Length
    pub information_group_length: u32,
    /// File Meta Information Version
    pub information_version: [u8; 2],
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: String,
    /// Transfer Syntax UID
    pub transfer_syntax: String,
    /// Implementation Class UID
    pub implementation_class_uid: String,

    /// Implementation Version Name
    pub implementation_version_name: Option<String>,
    /// Source Application Entity Title
    pub source_application_entity_title: Option<String>,
    /// Private Information Creator UID
    pub private_information_creator_uid: Option<String>,
    /// Private Information
    pub private_information: Option<Vec<u8>>,
}

/// Fetch the whole text of a value, joining components with a backslash.
fn text_value(tag: Tag, value: &Value) -> Result<String> {
    value
        .strings()
        .map(|c| c.iter().join("\\"))
        .context(UnexpectedValueTypeSnafu { tag })
}

impl FileMetaTable {
    /// Construct a file meta group table
    /// by parsing a DICOS data set from a reader.
    ///
    /// This method expects the magic code `DICM` to come first,
    /// followed by the group length attribute and the rest of the group.
    /// The preamble, if any, must have been consumed already.
    pub fn from_reader<R: Read>(mut file: R) -> Result<Self> {
        let mut magic = [0u8; 4];
        file.read_exact(&mut magic).context(ReadMagicCodeSnafu)?;
        ensure!(magic == DICM_MAGIC_CODE, NotDicosSnafu);
        Self::read_group(file)
    }

    /// Read the file meta group right after the magic code.
    pub(crate) fn read_group<R: Read>(file: R) -> Result<Self> {
        let mut decoder = FileHeaderParser::file_header_parser(file);

        let header = decoder.decode_header().context(DecodeAttributeSnafu)?;
        ensure!(
            header.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH,
            UnexpectedTagSnafu { tag: header.tag() }
        );
        ensure!(
            header.vr() == VR::UL && header.length() == Length(4),
            UnexpectedDataValueLengthSnafu {
                tag: header.tag(),
                length: header.length(),
            }
        );
        let group_length = decoder
            .read_value(&header)
            .context(DecodeAttributeSnafu)?
            .uint32()
            .context(UnexpectedValueTypeSnafu { tag: header.tag() })?;

        let end = decoder.bytes_read() + u64::from(group_length);
        let mut builder = FileMetaTableBuilder::new().group_length(group_length);

        while decoder.bytes_read() < end {
            let header = decoder.decode_header().context(DecodeAttributeSnafu)?;
            let tag = header.tag();
            ensure!(tag.group() == 0x0002, UnexpectedTagSnafu { tag });
            ensure!(!header.length().is_undefined(), UndefinedValueLengthSnafu { tag });

            let value = decoder.read_value(&header).context(DecodeAttributeSnafu)?;
            builder = match tag {
                tags::FILE_META_INFORMATION_VERSION => {
                    let bytes = value.bytes().context(UnexpectedValueTypeSnafu { tag })?;
                    let version: [u8; 2] = bytes.try_into().ok().context(
                        UnexpectedDataValueLengthSnafu {
                            tag,
                            length: header.length(),
                        },
                    )?;
                    builder.information_version(version)
                }
                tags::MEDIA_STORAGE_SOP_CLASS_UID => {
                    builder.media_storage_sop_class_uid(text_value(tag, &value)?)
                }
                tags::MEDIA_STORAGE_SOP_INSTANCE_UID => {
                    builder.media_storage_sop_instance_uid(text_value(tag, &value)?)
                }
                tags::TRANSFER_SYNTAX_UID => builder.transfer_syntax(text_value(tag, &value)?),
                tags::IMPLEMENTATION_CLASS_UID => {
                    builder.implementation_class_uid(text_value(tag, &value)?)
                }
                tags::IMPLEMENTATION_VERSION_NAME => {
                    builder.implementation_version_name(text_value(tag, &value)?)
                }
                tags::SOURCE_APPLICATION_ENTITY_TITLE => {
                    builder.source_application_entity_title(text_value(tag, &value)?)
                }
                tags::PRIVATE_INFORMATION_CREATOR_UID => {
                    builder.private_information_creator_uid(text_value(tag, &value)?)
                }
                tags::PRIVATE_INFORMATION => builder.private_information(
                    value
                        .bytes()
                        .context(UnexpectedValueTypeSnafu { tag })?
                        .to_vec(),
                ),
                _ => {
                    tracing::warn!("Ignoring unrecognized file meta attribute {}", tag);
                    builder
                }
            };
        }

        ensure!(
            decoder.bytes_read() == end,
            GroupLengthMismatchSnafu {
                expected: group_length,
                actual: decoder.bytes_read() - 12,
            }
        );

        let table = builder.build()?;
        tracing::debug!(
            "Read file meta group: {} bytes, transfer syntax {}",
            group_length,
            table.transfer_syntax
        );
        Ok(table)
    }

    /// Obtain the transfer syntax declared by the table,
    /// if it is one of the supported ones.
    pub fn transfer_syntax(&self) -> Option<TransferSyntax> {
        TransferSyntax::from_uid(&self.transfer_syntax)
    }

    /// Set the transfer syntax of the data set.
    pub fn set_transfer_syntax(&mut self, ts: TransferSyntax) {
        self.transfer_syntax = ts.uid().to_string();
        self.update_information_group_length();
    }

    /// Calculate the expected file meta group length
    /// according to the file meta attributes currently set,
    /// and assign it to the field `information_group_length`.
    pub fn update_information_group_length(&mut self) {
        self.information_group_length = self.calculate_information_group_length();
    }

    /// Calculate the expected file meta group length,
    /// the number of bytes after the group length attribute itself.
    fn calculate_information_group_length(&self) -> u32 {
        fn even_len(len: usize) -> u32 {
            let len = len as u32;
            len + (len & 1)
        }
        fn opt_text_len(text: &Option<String>) -> u32 {
            text.as_ref().map(|s| 8 + even_len(s.len())).unwrap_or(0)
        }

        // information version is OB: 12 byte header + 2 bytes
        14 + 8
            + even_len(self.media_storage_sop_class_uid.len())
            + 8
            + even_len(self.media_storage_sop_instance_uid.len())
            + 8
            + even_len(self.transfer_syntax.len())
            + 8
            + even_len(self.implementation_class_uid.len())
            + opt_text_len(&self.implementation_version_name)
            + opt_text_len(&self.source_application_entity_title)
            + opt_text_len(&self.private_information_creator_uid)
            + self
                .private_information
                .as_ref()
                .map(|x| 12 + even_len(x.len()))
                .unwrap_or(0)
    }

    /// Create an attribute manager holding the attributes of this table,
    /// including the group length.
    pub fn to_attribute_manager(&self) -> Item {
        fn text(tag: Tag, vr: VR, s: &str) -> Attribute {
            Attribute::new_unchecked(tag, vr, Value::from_strings([s]))
        }

        let mut mgr = AttributeManager::new();
        mgr.set_attribute(Attribute::new_unchecked(
            tags::FILE_META_INFORMATION_GROUP_LENGTH,
            VR::UL,
            dicos_value!(U32, [self.calculate_information_group_length()]),
        ));
        mgr.set_attribute(Attribute::new_unchecked(
            tags::FILE_META_INFORMATION_VERSION,
            VR::OB,
            Value::Bytes(self.information_version.to_vec()),
        ));
        mgr.set_attribute(text(
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            VR::UI,
            &self.media_storage_sop_class_uid,
        ));
        mgr.set_attribute(text(
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            VR::UI,
            &self.media_storage_sop_instance_uid,
        ));
        mgr.set_attribute(text(tags::TRANSFER_SYNTAX_UID, VR::UI, &self.transfer_syntax));
        mgr.set_attribute(text(
            tags::IMPLEMENTATION_CLASS_UID,
            VR::UI,
            &self.implementation_class_uid,
        ));
        if let Some(v) = &self.implementation_version_name {
            mgr.set_attribute(text(tags::IMPLEMENTATION_VERSION_NAME, VR::SH, v));
        }
        if let Some(v) = &self.source_application_entity_title {
            mgr.set_attribute(text(tags::SOURCE_APPLICATION_ENTITY_TITLE, VR::AE, v));
        }
        if let Some(v) = &self.private_information_creator_uid {
            mgr.set_attribute(text(tags::PRIVATE_INFORMATION_CREATOR_UID, VR::UI, v));
        }
        if let Some(v) = &self.private_information {
            mgr.set_attribute(Attribute::new_unchecked(
                tags::PRIVATE_INFORMATION,
                VR::OB,
                Value::Bytes(v.clone()),
            ));
        }
        mgr
    }

    /// Write the file meta group, without the magic code,
    /// in Explicit VR Little Endian.
    ///
    /// The group length is recalculated from the other attributes.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        write_dataset(
            writer,
            TransferSyntax::ExplicitVRLittleEndian,
            &self.to_attribute_manager(),
        )
        .context(WriteSetSnafu)
    }
}

/// A builder for DICOS meta information tables.
#[derive(Debug, Default, Clone)]
pub struct FileMetaTableBuilder {
    /// File Meta Information Group Length (UL)
    information_group_length: Option<u32>,
    /// File Meta Information Version (OB)
    information_version: Option<[u8; 2]>,
    /// Media Storage SOP Class UID (UI)
    pub(crate) media_storage_sop_class_uid: Option<String>,
    /// Media Storage SOP Instance UID (UI)
    pub(crate) media_storage_sop_instance_uid: Option<String>,
    /// Transfer Syntax UID (UI)
    transfer_syntax: Option<String>,
    /// Implementation Class UID (UI)
    implementation_class_uid: Option<String>,

    /// Implementation Version Name (SH)
    implementation_version_name: Option<String>,
    /// Source Application Entity Title (AE)
    source_application_entity_title: Option<String>,
    /// Private Information Creator UID (UI)
    private_information_creator_uid: Option<String>,
    /// Private Information (OB)
    private_information: Option<Vec<u8>>,
}

impl FileMetaTableBuilder {
    /// Create a new, empty builder.
    pub fn new() -> FileMetaTableBuilder {
        FileMetaTableBuilder::default()
    }

    /// Define the meta header group length.
    ///
    /// When not set, it is calculated on [`build`](Self::build).
    pub fn group_length(mut self, value: u32) -> FileMetaTableBuilder {
        self.information_group_length = Some(value);
        self
    }

    /// Define the meta information version.
    pub fn information_version(mut self, value: [u8; 2]) -> FileMetaTableBuilder {
        self.information_version = Some(value);
        self
    }

    /// Define the media storage SOP class UID.
    pub fn media_storage_sop_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_class_uid = Some(value.into());
        self
    }

    /// Define the media storage SOP instance UID.
    pub fn media_storage_sop_instance_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_instance_uid = Some(value.into());
        self
    }

    /// Define the transfer syntax UID.
    pub fn transfer_syntax<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.transfer_syntax = Some(value.into());
        self
    }

    /// Define the implementation class UID.
    pub fn implementation_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_class_uid = Some(value.into());
        self
    }

    /// Define the implementation version name.
    pub fn implementation_version_name<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_version_name = Some(value.into());
        self
    }

    /// Define the source application entity title.
    pub fn source_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.source_application_entity_title = Some(value.into());
        self
    }

    /// Define the private information creator UID.
    pub fn private_information_creator_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.private_information_creator_uid = Some(value.into());
        self
    }

    /// Define the private information as a vector of bytes.
    pub fn private_information<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<Vec<u8>>,
    {
        self.private_information = Some(value.into());
        self
    }

    /// Build the table.
    ///
    /// The SOP class, SOP instance and transfer syntax UIDs are required.
    /// Version `[0, 1]` is assumed when no information version was given,
    /// and this toolkit's implementation class UID and version name
    /// are used when no implementation class UID was given.
    pub fn build(self) -> Result<FileMetaTable> {
        let information_version = self.information_version.unwrap_or([0, 1]);
        let media_storage_sop_class_uid =
            self.media_storage_sop_class_uid
                .context(MissingElementSnafu {
                    alias: "MediaStorageSOPClassUID",
                })?;
        let media_storage_sop_instance_uid =
            self.media_storage_sop_instance_uid
                .context(MissingElementSnafu {
                    alias: "MediaStorageSOPInstanceUID",
                })?;
        let transfer_syntax = self.transfer_syntax.context(MissingElementSnafu {
            alias: "TransferSyntaxUID",
        })?;
        let (implementation_class_uid, implementation_version_name) =
            match self.implementation_class_uid {
                Some(uid) => (uid, self.implementation_version_name),
                None => (
                    IMPLEMENTATION_CLASS_UID.to_string(),
                    self.implementation_version_name
                        .or_else(|| Some(IMPLEMENTATION_VERSION_NAME.to_string())),
                ),
            };

        let mut table = FileMetaTable {
            information_group_length: 0,
            information_version,
            media_storage_sop_class_uid,
            media_storage_sop_instance_uid,
            transfer_syntax,
            implementation_class_uid,
            implementation_version_name,
            source_application_entity_title: self.source_application_entity_title,
            private_information_creator_uid: self.private_information_creator_uid,
            private_information: self.private_information,
        };
        table.information_group_length = match self.information_group_length {
            Some(len) => len,
            None => table.calculate_information_group_length(),
        };
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::{FileMetaTable, FileMetaTableBuilder, IMPLEMENTATION_CLASS_UID};
    use dicos_dictionary_std::{tags, uids};
    use dicos_encoding::TransferSyntax;

    #[rustfmt::skip]
    fn test_meta() -> Vec<u8> {
        [
            // magic code
            &b"DICM"[..],
            // File Meta Information Group Length: (0002,0000) ; UL ; 4 ; 156
            &[0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x9C, 0x00, 0x00, 0x00],
            // File Meta Information Version: (0002,0001) ; OB ; 2 ; [0x00, 0x01]
            &[0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01],
            // Media Storage SOP Class UID (0002,0002) ; UI ; 30 ; TDR storage
            &[0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1E, 0x00],
            b"1.2.840.10008.5.1.4.1.1.501.3\0",
            // Media Storage SOP Instance UID (0002,0003) ; UI ; 14
            &[0x02, 0x00, 0x03, 0x00, b'U', b'I', 0x0E, 0x00],
            b"1.2.3.4.5.6789",
            // Transfer Syntax UID (0002,0010) ; UI ; 20 ; Explicit VR Little Endian
            &[0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00],
            b"1.2.840.10008.1.2.1\0",
            // Implementation Class UID (0002,0012) ; UI ; 20
            &[0x02, 0x00, 0x12, 0x00, b'U', b'I', 0x14, 0x00],
            b"1.2.345.6.7890.1.234",
            // Implementation Version Name (0002,0013) ; SH ; 10
            &[0x02, 0x00, 0x13, 0x00, b'S', b'H', 0x0A, 0x00],
            b"DICOS_TEST",
            // Source Application Entity Title (0002,0016) ; AE ; 0 (no data)
            &[0x02, 0x00, 0x16, 0x00, b'A', b'E', 0x00, 0x00],
        ]
        .concat()
    }

    fn ground_truth() -> FileMetaTable {
        FileMetaTable {
            information_group_length: 156,
            information_version: [0u8, 1u8],
            media_storage_sop_class_uid: uids::DICOS_THREAT_DETECTION_REPORT_STORAGE.to_owned(),
            media_storage_sop_instance_uid: "1.2.3.4.5.6789".to_owned(),
            transfer_syntax: uids::EXPLICIT_VR_LITTLE_ENDIAN.to_owned(),
            implementation_class_uid: "1.2.345.6.7890.1.234".to_owned(),
            implementation_version_name: Some("DICOS_TEST".to_owned()),
            source_application_entity_title: Some("".to_owned()),
            private_information_creator_uid: None,
            private_information: None,
        }
    }

    #[test]
    fn read_meta_table_from_reader() {
        let data = test_meta();
        let mut source = &data[..];

        let table = FileMetaTable::from_reader(&mut source).unwrap();

        assert_eq!(table, ground_truth());
        assert_eq!(
            table.transfer_syntax(),
            Some(TransferSyntax::ExplicitVRLittleEndian)
        );
        // nothing past the group was consumed
        assert!(source.is_empty());
    }

    #[test]
    fn meta_table_stops_at_group_end() {
        let mut data = test_meta();
        // first bytes of a data set
        data.extend_from_slice(&[0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x04, 0x00]);
        let mut source = &data[..];

        let table = FileMetaTable::from_reader(&mut source).unwrap();
        assert_eq!(table.information_group_length, 156);
        assert_eq!(source, &[0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x04, 0x00]);
    }

    #[test]
    fn bad_magic_code_is_rejected() {
        let mut data = test_meta();
        data[..4].copy_from_slice(b"DICN");
        let err = FileMetaTable::from_reader(&data[..]).unwrap_err();
        assert!(matches!(err, super::Error::NotDicos { .. }));
    }

    #[test]
    fn create_meta_table_with_builder() {
        let table = FileMetaTableBuilder::new()
            .information_version([0, 1])
            .media_storage_sop_class_uid(uids::DICOS_THREAT_DETECTION_REPORT_STORAGE)
            .media_storage_sop_instance_uid("1.2.3.4.5.6789")
            .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .implementation_version_name("DICOS_TEST")
            .source_application_entity_title("")
            .build()
            .unwrap();

        assert_eq!(table, ground_truth());
    }

    #[test]
    fn builder_fills_in_implementation_defaults() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid(uids::DICOS_CT_IMAGE_STORAGE)
            .media_storage_sop_instance_uid("1.2.3")
            .transfer_syntax(uids::IMPLICIT_VR_LITTLE_ENDIAN)
            .build()
            .unwrap();
        assert_eq!(table.implementation_class_uid, IMPLEMENTATION_CLASS_UID);
        assert!(table
            .implementation_version_name
            .as_deref()
            .unwrap()
            .starts_with("DICOS-RS"));

        let err = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid(uids::DICOS_CT_IMAGE_STORAGE)
            .transfer_syntax(uids::IMPLICIT_VR_LITTLE_ENDIAN)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            super::Error::MissingElement {
                alias: "MediaStorageSOPInstanceUID",
                ..
            }
        ));
    }

    #[test]
    fn write_meta_table() {
        let mut out = b"DICM".to_vec();
        ground_truth().write(&mut out).unwrap();
        assert_eq!(out, test_meta());
    }

    #[test]
    fn meta_table_as_attributes() {
        let mgr = ground_truth().to_attribute_manager();
        assert_eq!(
            mgr.find_attribute(tags::FILE_META_INFORMATION_GROUP_LENGTH)
                .and_then(|a| a.value().uint32().ok()),
            Some(156)
        );
        assert_eq!(
            mgr.string(tags::TRANSFER_SYNTAX_UID),
            Some(uids::EXPLICIT_VR_LITTLE_ENDIAN)
        );
        assert!(!mgr.has_attribute(tags::PRIVATE_INFORMATION));
        assert_eq!(mgr.len(), 8);
    }
}
