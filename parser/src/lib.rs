//! This crate provides the means to read and write DICOS data sets
//! as attribute trees, on top of the primitives of `dicos-encoding`.
//!
//! - [`stateful`] holds the decoder and encoder of single attributes,
//!   which keep track of the stream position and character set.
//! - [`dataset`] holds the data set reader and writer.
//!
//! All APIs are based on synchronous I/O.

pub mod dataset;
pub mod stateful;

pub use dataset::{read_dataset, write_dataset, DataSetReader, DataSetWriter, WriteOptions};
pub use stateful::decode::StatefulDecoder;
pub use stateful::encode::StatefulEncoder;
