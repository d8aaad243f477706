//! This crate implements the standard DICOS dictionaries and constants.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: Contains information about the DICOS attributes
//!   known to the toolkit (the file meta group, the general attributes
//!   shared with DICOM, and the DICOS group `4010`),
//!   with their value representation and value multiplicity.
//!   It is used by default when reading implicit VR data sets
//!   and when naming attributes in diagnostics.
//!
//! The dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOS tag
//! - [`uids`], for transfer syntax and SOP class unique identifiers
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{registry, StandardDataDictionary, StandardDataDictionaryRegistry};
