#![allow(clippy::derive_partial_eq_without_eq)]
//! This crate contains a high-level abstraction for reading, writing
//! and validating DICOS objects.
//!
//! A DICOS file is made of a 128-byte preamble,
//! the magic code `DICM`,
//! the file meta group (see [`FileMetaTable`]),
//! and the data set itself,
//! encoded in the transfer syntax declared by the meta group.
//! [`FileDicosObject`] holds the meta table and the data set
//! as an [`AttributeManager`] tree.
//!
//! Loading a DICOS file can be done via the function [`open_file`].
//! For additional file reading options, use [`ReadOptions`].
//! Problems which do not prevent reading the rest of the object,
//! such as a malformed attribute or a private attribute,
//! are reported to the given [`ErrorLog`].
//!
//! # Examples
//!
//! ```no_run
//! use dicos_core::ErrorLog;
//! use dicos_dictionary_std::tags;
//! use dicos_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut log = ErrorLog::new();
//! let obj = open_file("0001.dcs", &mut log)?;
//! if log.has_errors() {
//!     eprintln!("{}", log);
//! }
//!
//! let threats = obj.dataset().items(tags::THREAT_SEQUENCE).unwrap_or_default();
//! # Ok(())
//! # }
//! ```
//!
//! The typed view of an object is provided by [modules](module::Module),
//! which convert attributes to typed fields and back,
//! and check the conformance of a data set.
//! See [`modules`] for the ones available.
//!
//! Finally, DICOS objects can be serialized back into DICOS encoded bytes:
//!
//! ```no_run
//! # use dicos_object::FileDicosObject;
//! # fn something(obj: FileDicosObject) -> Result<(), Box<dyn std::error::Error>> {
//! obj.write_to_file("0001_new.dcs")?;
//! # Ok(())
//! # }
//! ```
pub mod dump;
pub mod file;
pub mod meta;
pub mod module;
pub mod modules;

pub use crate::file::{from_reader, open_file, ReadOptions, ReadPreamble};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::module::{Module, ModuleState, Requirement};
pub use dicos_core::{AttributeManager, ErrorLog, Item, Tag};
pub use dicos_dictionary_std::StandardDataDictionary;
pub use dicos_parser::dataset::{LengthEncoding, OddLengthStrategy, WriteOptions};

use dicos_dictionary_std::tags;
use dicos_encoding::{FileStream, TransferSyntax};
use dicos_parser::dataset::DataSetWriter;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{BufWriter, Write};
use std::path::Path;

/// An error which may occur when loading a DICOS object
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read preamble bytes
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read the magic code
    ReadMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Invalid DICOS data: magic code not found"))]
    NotDicos { backtrace: Backtrace },
    #[snafu(display("Could not parse meta group data set"))]
    ParseMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not read data set"))]
    ReadDataSet {
        #[snafu(backtrace)]
        source: dicos_parser::dataset::read::Error,
    },
}

/// An error which may occur when writing a DICOS object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write magic code"))]
    WriteMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not print meta group data set"))]
    PrintMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not print data set"))]
    PrintDataSet {
        #[snafu(backtrace)]
        source: dicos_parser::dataset::write::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    WriteUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WithMetaError {
    /// Could not build file meta table
    BuildMetaTable {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
}

/// A root DICOS object retrieved from a standard DICOS file,
/// containing additional information from the file meta group
/// in a separate table value.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDicosObject {
    meta: FileMetaTable,
    dataset: Item,
}

impl FileDicosObject {
    /// Create a file object from a meta table and a data set.
    pub fn from_parts(meta: FileMetaTable, dataset: Item) -> Self {
        FileDicosObject { meta, dataset }
    }

    /// Create a file object from a data set and a meta table builder.
    ///
    /// The media storage SOP class and instance UIDs,
    /// when not set in the builder,
    /// are taken from the SOP Class UID and SOP Instance UID
    /// of the data set.
    pub fn with_meta(
        dataset: Item,
        mut meta: FileMetaTableBuilder,
    ) -> Result<Self, WithMetaError> {
        if meta.media_storage_sop_class_uid.is_none() {
            if let Some(uid) = dataset.string(tags::SOP_CLASS_UID) {
                meta = meta.media_storage_sop_class_uid(uid);
            }
        }
        if meta.media_storage_sop_instance_uid.is_none() {
            if let Some(uid) = dataset.string(tags::SOP_INSTANCE_UID) {
                meta = meta.media_storage_sop_instance_uid(uid);
            }
        }
        let meta = meta.build().context(BuildMetaTableSnafu)?;
        Ok(FileDicosObject { meta, dataset })
    }

    /// Retrieve the processed meta header table.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// Retrieve a mutable reference to the processed meta header table.
    ///
    /// Considerable care should be taken when modifying this table,
    /// as it may influence object reading and writing operations.
    pub fn meta_mut(&mut self) -> &mut FileMetaTable {
        &mut self.meta
    }

    /// Retrieve the data set.
    pub fn dataset(&self) -> &Item {
        &self.dataset
    }

    /// Retrieve a mutable reference to the data set.
    pub fn dataset_mut(&mut self) -> &mut Item {
        &mut self.dataset
    }

    /// Retrieve the inner data set, discarding the meta table.
    pub fn into_inner(self) -> Item {
        self.dataset
    }

    /// Split the object into its meta table and data set.
    pub fn into_parts(self) -> (FileMetaTable, Item) {
        (self.meta, self.dataset)
    }

    /// Write the entire object as a DICOS file
    /// into the given file path.
    /// Preamble, magic code, and file meta group will be included
    /// before the data set.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteError> {
        let path = path.as_ref();
        let file = FileStream::create(path).context(WriteFileSnafu { filename: path })?;
        let mut to = BufWriter::new(file);
        self.write_all(&mut to)?;
        to.flush().context(WriteFileSnafu { filename: path })
    }

    /// Write the entire object as a DICOS file
    /// into the given writer.
    /// Preamble, magic code, and file meta group will be included
    /// before the data set.
    ///
    /// Sequences and items are written with undefined length.
    pub fn write_all<W: Write>(&self, to: W) -> Result<(), WriteError> {
        self.write_all_with(to, WriteOptions::default())
    }

    /// Write the entire object as a DICOS file
    /// into the given writer, with the given data set options.
    pub fn write_all_with<W: Write>(
        &self,
        mut to: W,
        options: WriteOptions,
    ) -> Result<(), WriteError> {
        // write preamble
        to.write_all(&[0_u8; 128][..]).context(WritePreambleSnafu)?;

        // write magic sequence
        to.write_all(&meta::DICM_MAGIC_CODE)
            .context(WriteMagicCodeSnafu)?;

        // write meta group
        self.meta.write(&mut to).context(PrintMetaDataSetSnafu)?;

        self.write_dataset_with(to, options)
    }

    /// Write the file meta group set into the given writer.
    ///
    /// This is equivalent to `self.meta().write(to)`.
    pub fn write_meta<W: Write>(&self, to: W) -> Result<(), WriteError> {
        self.meta.write(to).context(PrintMetaDataSetSnafu)
    }

    /// Write the inner data set into the given writer,
    /// without preamble, magic code, nor file meta group.
    ///
    /// The transfer syntax is selected from the file meta table.
    pub fn write_dataset<W: Write>(&self, to: W) -> Result<(), WriteError> {
        self.write_dataset_with(to, WriteOptions::default())
    }

    fn write_dataset_with<W: Write>(&self, to: W, options: WriteOptions) -> Result<(), WriteError> {
        let ts = self.transfer_syntax()?;
        let mut dset_writer = DataSetWriter::with_options(to, ts, options);
        dset_writer
            .write_dataset(&self.dataset)
            .context(PrintDataSetSnafu)?;
        dset_writer.flush().context(PrintDataSetSnafu)
    }

    fn transfer_syntax(&self) -> Result<TransferSyntax, WriteError> {
        self.meta
            .transfer_syntax()
            .with_context(|| WriteUnsupportedTransferSyntaxSnafu {
                uid: self.meta.transfer_syntax.clone(),
            })
    }
}
