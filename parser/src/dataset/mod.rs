//! Reading and writing of whole DICOS data sets.
//!
//! A data set is read into an [`AttributeManager`] tree
//! and written back from one,
//! under any of the supported transfer syntaxes.

use dicos_core::{AttributeManager, ErrorLog, Item};
use dicos_encoding::TransferSyntax;
use std::io::{Read, Write};

pub mod read;
pub mod write;

pub use self::read::{DataSetReader, DataSetReaderOptions, OddLengthStrategy};
pub use self::write::{DataSetWriter, LengthEncoding, WriteOptions};

/// Read a data set from `source` until the end of the stream,
/// reporting recoverable problems to `log`.
pub fn read_dataset<S>(source: S, ts: TransferSyntax, log: &mut ErrorLog) -> read::Result<Item>
where
    S: Read,
{
    DataSetReader::new(source, ts).read_dataset(log)
}

/// Write a data set to `to`,
/// with sequences and items of undefined length.
pub fn write_dataset<W>(to: W, ts: TransferSyntax, dataset: &AttributeManager<'_>) -> write::Result<()>
where
    W: Write,
{
    let mut writer = DataSetWriter::new(to, ts);
    writer.write_dataset(dataset)?;
    writer.flush()
}
