#![crate_type = "lib"]
#![deny(unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOS toolkit containing the data model
//! shared by every other crate: tags, value representations, values,
//! attributes, attribute managers and error logs.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types for attribute headers,
//!   including DICOS tags, value lengths and sequence item headers.
//! - [`vr`] holds the value representations and the rules
//!   (length field width, padding, character repertoire) attached to each.
//! - [`dictionary`] describes common behavior of DICOS data dictionaries,
//!   which translate tags to a dictionary entry
//!   containing the attribute's VR, VM and name.
//! - [`value`] holds definitions for attribute values,
//!   with the awareness of multiplicity, representation,
//!   and the possible presence of sequences.
//! - [`attribute`] and [`manager`] make up the in-memory attribute tree.
//! - [`error_log`] collects the diagnostics of reading, writing
//!   and validating an attribute tree.

pub mod attribute;
pub mod dictionary;
pub mod error_log;
pub mod header;
pub mod manager;
pub mod value;
pub mod vr;

pub use attribute::{Attribute, SetValueError};
pub use dictionary::{DataDictionary, DictionaryEntry, ValueMultiplicity};
pub use error_log::{ErrorLog, LogItem, LogKind};
pub use header::{AttributeHeader, Length, Tag, VR};
pub use manager::AttributeManager;
pub use value::{Item, Value};

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;
