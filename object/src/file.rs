use crate::meta::{FileMetaTable, DICM_MAGIC_CODE};
use crate::{
    FileDicosObject, NotDicosSnafu, OpenFileSnafu, ParseMetaDataSetSnafu, ReadDataSetSnafu,
    ReadError, ReadMagicCodeSnafu, ReadPreambleBytesSnafu, ReadUnsupportedTransferSyntaxSnafu,
};
use dicos_core::ErrorLog;
use dicos_parser::dataset::{DataSetReader, DataSetReaderOptions, OddLengthStrategy};
use snafu::{ensure, OptionExt, ResultExt};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

type Result<T, E = ReadError> = std::result::Result<T, E>;

/// Create a DICOS object by reading from a byte source,
/// reporting recoverable problems to `log`.
///
/// The 128-byte preamble is detected automatically.
pub fn from_reader<F>(file: F, log: &mut ErrorLog) -> Result<FileDicosObject>
where
    F: Read,
{
    ReadOptions::new().from_reader(file, log)
}

/// Create a DICOS object by reading from a file,
/// reporting recoverable problems to `log`.
///
/// The 128-byte preamble is detected automatically.
pub fn open_file<P>(path: P, log: &mut ErrorLog) -> Result<FileDicosObject>
where
    P: AsRef<Path>,
{
    ReadOptions::new().open_file(path, log)
}

/// A builder type for reading a DICOS file with additional options.
///
/// # Example
///
/// ```no_run
/// # use dicos_core::ErrorLog;
/// # use dicos_object::{ReadOptions, ReadPreamble};
/// let mut log = ErrorLog::new();
/// let file = ReadOptions::new()
///     .read_preamble(ReadPreamble::Always)
///     .strict(true)
///     .open_file("path/to/file.dcs", &mut log)?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ReadOptions {
    read_preamble: ReadPreamble,
    strict: bool,
    odd_length: OddLengthStrategy,
}

impl ReadOptions {
    pub fn new() -> Self {
        ReadOptions::default()
    }

    /// Set whether to read the 128-byte DICOS file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set whether to abort on the first structural error in the data set,
    /// instead of reporting it and resuming at the next attribute.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set how to handle values of odd length.
    pub fn odd_length(mut self, odd_length: OddLengthStrategy) -> Self {
        self.odd_length = odd_length;
        self
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P, log: &mut ErrorLog) -> Result<FileDicosObject>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        tracing::debug!("Opening DICOS file {}", path.display());
        self.from_reader(BufReader::new(file), log)
    }

    /// Obtain a DICOS object by reading from a byte source.
    pub fn from_reader<R>(self, mut from: R, log: &mut ErrorLog) -> Result<FileDicosObject>
    where
        R: Read,
    {
        let magic_end = read_magic_code(&mut from, self.read_preamble)?;

        let meta = FileMetaTable::read_group(&mut from).context(ParseMetaDataSetSnafu)?;
        let ts = meta
            .transfer_syntax()
            .context(ReadUnsupportedTransferSyntaxSnafu {
                uid: meta.transfer_syntax.clone(),
            })?;

        let options = DataSetReaderOptions::default()
            .strict(self.strict)
            .odd_length(self.odd_length)
            .base_offset(magic_end + 12 + u64::from(meta.information_group_length));
        let dataset = DataSetReader::with_options(from, ts, options)
            .read_dataset(log)
            .context(ReadDataSetSnafu)?;

        Ok(FileDicosObject::from_parts(meta, dataset))
    }
}

/// Consume the preamble, if any, and the magic code.
/// Returns the position right after the magic code.
fn read_magic_code<R: Read>(from: &mut R, read_preamble: ReadPreamble) -> Result<u64> {
    let mut magic = [0u8; 4];
    let position = match read_preamble {
        ReadPreamble::Never => {
            from.read_exact(&mut magic).context(ReadMagicCodeSnafu)?;
            4
        }
        ReadPreamble::Always => {
            let skipped = io::copy(&mut (&mut *from).take(128), &mut io::sink())
                .context(ReadPreambleBytesSnafu)?;
            if skipped < 128 {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof))
                    .context(ReadPreambleBytesSnafu);
            }
            from.read_exact(&mut magic).context(ReadMagicCodeSnafu)?;
            132
        }
        ReadPreamble::Auto => {
            from.read_exact(&mut magic).context(ReadMagicCodeSnafu)?;
            if magic == DICM_MAGIC_CODE {
                4
            } else {
                // the first 4 bytes were part of a preamble
                let mut rest = [0u8; 128];
                from.read_exact(&mut rest).context(ReadPreambleBytesSnafu)?;
                magic.copy_from_slice(&rest[124..]);
                132
            }
        }
    };
    ensure!(magic == DICM_MAGIC_CODE, NotDicosSnafu);
    Ok(position)
}

/// An enumerate of supported options for
/// whether to read the 128-byte DICOS file preamble.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Detect the preamble:
    /// read it only if the source does not start with the magic code.
    #[default]
    Auto,
    /// Never read the preamble,
    /// thus assuming that the original source does not have it.
    Never,
    /// Always read the preamble first,
    /// thus assuming that the original source always has it.
    Always,
}
