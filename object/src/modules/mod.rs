//! Reference implementations of the [`Module`](crate::Module) contract.
//!
//! - [`SopCommonModule`]: the SOP identification shared by every DICOS object
//! - [`ThreatDetectionReportModule`]: the summary of a Threat Detection Report
pub mod sop_common;
pub mod tdr;

pub use sop_common::SopCommonModule;
pub use tdr::{AbortFlag, AlarmDecision, TdrType, ThreatDetectionReportModule, ThreatItem};

use dicos_core::{Attribute, AttributeManager, ErrorLog, Tag, Value, VR};

/// A field restricted to a set of enumerated code strings.
pub trait CodedValue: Sized + Copy + 'static {
    /// All values, in the order of the enumeration.
    const ALL: &'static [Self];

    /// The code string of this value.
    fn code(self) -> &'static str;

    /// The code strings of all values.
    fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.code()).collect()
    }

    /// Resolve a code string, ignoring padding.
    fn from_code(code: &str) -> Option<Self> {
        let code = dicos_core::value::trim_padding(code);
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }
}

/// Retrieve all text components of an attribute.
///
/// Absent attributes yield no components,
/// non-text values are reported to the log.
fn read_texts(mgr: &AttributeManager<'_>, tag: Tag, log: &mut ErrorLog) -> Vec<String> {
    let attr = match mgr.find_attribute(tag) {
        Some(attr) => attr,
        None => return Vec::new(),
    };
    match attr.strings() {
        Ok(values) => values.to_vec(),
        Err(e) => {
            log.add_error_at(attr.vr(), tag, format!("Expected a text value: {}", e));
            Vec::new()
        }
    }
}

/// Retrieve the first text component of an attribute.
fn read_text(mgr: &AttributeManager<'_>, tag: Tag, log: &mut ErrorLog) -> Option<String> {
    read_texts(mgr, tag, log).into_iter().next()
}

/// Retrieve an enumerated value,
/// reporting codes which are not part of the enumeration.
fn read_coded<T: CodedValue>(mgr: &AttributeManager<'_>, tag: Tag, log: &mut ErrorLog) -> Option<T> {
    let code = read_text(mgr, tag, log)?;
    let value = T::from_code(&code);
    if value.is_none() {
        let vr = mgr.find_attribute(tag).map_or(VR::CS, Attribute::vr);
        log.add_error_at(vr, tag, format!("Unknown code string `{}`", code));
    }
    value
}

/// Retrieve a single unsigned short.
fn read_u16(mgr: &AttributeManager<'_>, tag: Tag, log: &mut ErrorLog) -> Option<u16> {
    let attr = mgr.find_attribute(tag)?;
    if attr.is_empty() {
        return None;
    }
    match attr.value().uint16() {
        Ok(v) => Some(v),
        Err(e) => {
            log.add_error_at(attr.vr(), tag, format!("Expected an unsigned short: {}", e));
            None
        }
    }
}

/// Put a text attribute into the manager,
/// or an empty one if there are no components.
fn put_texts<'s, I>(
    mgr: &mut AttributeManager<'_>,
    tag: Tag,
    vr: VR,
    components: I,
    log: &mut ErrorLog,
) -> bool
where
    I: IntoIterator<Item = &'s str>,
{
    match Attribute::new(tag, vr, Value::from_strings(components)) {
        Ok(attr) => {
            mgr.set_attribute(attr);
            true
        }
        Err(e) => {
            log.add_error_at(vr, tag, e.to_string());
            false
        }
    }
}

/// Report a Type 1 field which has no value to emit.
fn report_unset(tag: Tag, log: &mut ErrorLog) -> bool {
    let (vr, name) = crate::module::describe(tag);
    log.add_error_at(vr, tag, format!("Type 1 attribute {} is not set", name));
    false
}
