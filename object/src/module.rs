//! The contract between typed DICOS modules and attribute managers.
//!
//! A module owns the typed fields of one part of an information object
//! (e.g. the SOP Common module or the Threat Detection Report module)
//! and converts them from and to the generic [`AttributeManager`] view.
//! Conformance is checked against the whole attribute manager,
//! since conditional requirements may refer to attributes
//! which do not belong to the module.
//!
//! Module methods report problems to an [`ErrorLog`]
//! and return whether the operation succeeded.

use dicos_core::{AttributeManager, DataDictionary, ErrorLog, Tag, VR};
use dicos_dictionary_std::StandardDataDictionary;
use std::fmt;

/// A typed view over a part of a DICOS data set.
pub trait Module {
    /// Extract the module's fields from the attribute manager,
    /// converting them from their generic form.
    ///
    /// Fails if a Type 1 attribute is absent or malformed.
    fn set_attributes(&mut self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> bool;

    /// Emit the module's fields into the attribute manager.
    ///
    /// Type 2 attributes are always emitted, empty if they have no value,
    /// while Type 3 attributes which were never set are omitted.
    /// Modules may insert references to attributes they own,
    /// hence the borrow of `self` for as long as the manager lives.
    fn get_attributes<'a>(&'a self, mgr: &mut AttributeManager<'a>, log: &mut ErrorLog) -> bool;

    /// Overwrite only the fields whose attributes are present in the manager,
    /// leaving all other fields untouched.
    fn update_attributes(&mut self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> bool;

    /// Check the conformance of the attribute manager to this module,
    /// including conditional requirements on other attributes of the manager.
    fn is_valid(&self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> bool;

    /// Populate the module from the attribute manager and check it.
    fn load(&mut self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> ModuleState {
        if !self.set_attributes(mgr, log) {
            return ModuleState::Invalid;
        }
        ModuleState::of(self.is_valid(mgr, log))
    }

    /// Apply a partial update to a populated module and check it again
    /// against the updated attribute manager.
    fn reload(&mut self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> ModuleState {
        if !self.update_attributes(mgr, log) {
            return ModuleState::Invalid;
        }
        ModuleState::of(self.is_valid(mgr, log))
    }
}

/// The state of a module with respect to the data it was populated with.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ModuleState {
    /// The module was never populated.
    #[default]
    Unpopulated,
    /// The module was populated and found conformant.
    Valid,
    /// The module was populated, but some requirement is not met.
    Invalid,
}

impl ModuleState {
    fn of(valid: bool) -> Self {
        if valid {
            ModuleState::Valid
        } else {
            ModuleState::Invalid
        }
    }

    /// Whether the module was populated.
    pub fn is_populated(self) -> bool {
        self != ModuleState::Unpopulated
    }
}

/// The requirement type of an attribute within a module.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Always required, with a value.
    Type1,
    /// Required with a value when a condition holds.
    Type1C,
    /// Always required, possibly empty.
    Type2,
    /// Required, possibly empty, when a condition holds.
    Type2C,
    /// Optional.
    Type3,
}

impl Requirement {
    /// Whether the requirement depends on a condition.
    pub fn is_conditional(self) -> bool {
        matches!(self, Requirement::Type1C | Requirement::Type2C)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Requirement::Type1 => "Type 1",
            Requirement::Type1C => "Type 1C",
            Requirement::Type2 => "Type 2",
            Requirement::Type2C => "Type 2C",
            Requirement::Type3 => "Type 3",
        })
    }
}

/// Resolve the VR and name of an attribute for diagnostics.
pub(crate) fn describe(tag: Tag) -> (VR, &'static str) {
    StandardDataDictionary
        .by_tag(tag)
        .map(|e| (e.vr, e.alias))
        .unwrap_or((VR::UN, "UnknownAttribute"))
}

/// Check that the attribute `tag` satisfies the given requirement.
///
/// `condition` is the outcome of the condition of a Type 1C or Type 2C
/// attribute, evaluated by the caller against the whole data set,
/// and is ignored for other requirement types.
/// A present attribute must also hold a valid value for its VR.
/// Failures are reported to `log` as errors.
pub fn check_requirement(
    mgr: &AttributeManager<'_>,
    tag: Tag,
    requirement: Requirement,
    condition: bool,
    log: &mut ErrorLog,
) -> bool {
    let (vr, name) = describe(tag);
    let required = match requirement {
        Requirement::Type1 | Requirement::Type2 => true,
        Requirement::Type1C | Requirement::Type2C => condition,
        Requirement::Type3 => false,
    };
    let needs_value = matches!(requirement, Requirement::Type1 | Requirement::Type1C);

    match mgr.find_attribute(tag) {
        None if required => {
            log.add_error_at(vr, tag, format!("{} attribute {} is missing", requirement, name));
            false
        }
        None => true,
        Some(attr) if required && needs_value && attr.is_empty() => {
            log.add_error_at(
                attr.vr(),
                tag,
                format!("{} attribute {} has no value", requirement, name),
            );
            false
        }
        Some(attr) => match attr.validate() {
            Ok(()) => true,
            Err(e) => {
                log.add_error_at(attr.vr(), tag, format!("Invalid value of {}: {}", name, e));
                false
            }
        },
    }
}

/// Check that the value multiplicity of the attribute `tag`, if present,
/// is admitted by the data dictionary.
///
/// Sequences count as a single value regardless of their items.
pub fn check_multiplicity(mgr: &AttributeManager<'_>, tag: Tag, log: &mut ErrorLog) -> bool {
    let attr = match mgr.find_attribute(tag) {
        Some(attr) if !attr.is_empty() && attr.vr() != VR::SQ => attr,
        _ => return true,
    };
    let (alias, expected) = match StandardDataDictionary.by_tag(tag) {
        Some(entry) => (entry.alias, entry.vm),
        None => return true,
    };
    let vm = attr.multiplicity();
    if expected.contains(vm) {
        return true;
    }
    log.add_error_at(
        attr.vr(),
        tag,
        format!(
            "{} has {} values, but multiplicity {} is expected",
            alias, vm, expected
        ),
    );
    false
}

/// Check that the text value of the attribute `tag`, if present,
/// is one of the enumerated values.
pub fn check_enumerated(
    mgr: &AttributeManager<'_>,
    tag: Tag,
    allowed: &[&str],
    log: &mut ErrorLog,
) -> bool {
    let attr = match mgr.find_attribute(tag) {
        Some(attr) => attr,
        None => return true,
    };
    let mut ok = true;
    for value in attr.strings().unwrap_or_default() {
        if !allowed.contains(&value.as_str()) {
            let (_, name) = describe(tag);
            log.add_error_at(
                attr.vr(),
                tag,
                format!("{} is not an enumerated value of {}", value, name),
            );
            ok = false;
        }
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicos_core::{dicos_value, Attribute};
    use dicos_dictionary_std::tags;

    fn dataset() -> AttributeManager<'static> {
        let mut mgr = AttributeManager::new();
        mgr.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3").unwrap();
        mgr.set_attribute(Attribute::empty(tags::ALARM_DECISION, VR::CS));
        mgr.put(tags::BOUNDING_POLYGON, VR::FL, dicos_value!(F32, [1.0, 2.0]))
            .unwrap();
        mgr
    }

    #[test]
    fn requirement_types() {
        let mgr = dataset();
        let mut log = ErrorLog::new();
        log.ignore_redirect(true);

        assert!(check_requirement(&mgr, tags::SOP_INSTANCE_UID, Requirement::Type1, false, &mut log));
        assert!(check_requirement(&mgr, tags::ALARM_DECISION, Requirement::Type2, false, &mut log));
        assert!(check_requirement(&mgr, tags::ABORT_REASON, Requirement::Type1C, false, &mut log));
        assert!(check_requirement(&mgr, tags::ABORT_REASON, Requirement::Type3, true, &mut log));
        assert!(log.is_empty());

        assert!(!check_requirement(&mgr, tags::ALARM_DECISION, Requirement::Type1, false, &mut log));
        assert!(!check_requirement(&mgr, tags::ABORT_REASON, Requirement::Type1C, true, &mut log));
        assert!(!check_requirement(&mgr, tags::ABORT_REASON, Requirement::Type2C, true, &mut log));
        assert_eq!(log.num_errors(), 3);
        let messages: Vec<_> = log.errors().map(|e| e.message().to_string()).collect();
        assert_eq!(messages[0], "Type 1 attribute AlarmDecision has no value");
        assert_eq!(messages[1], "Type 1C attribute AbortReason is missing");
    }

    #[test]
    fn multiplicity_follows_dictionary() {
        let mut mgr = dataset();
        let mut log = ErrorLog::new();
        log.ignore_redirect(true);

        // bounding polygon is 6-n
        assert!(!check_multiplicity(&mgr, tags::BOUNDING_POLYGON, &mut log));
        mgr.put(
            tags::BOUNDING_POLYGON,
            VR::FL,
            dicos_value!(F32, [0., 0., 0., 1., 1., 1.]),
        )
        .unwrap();
        assert!(check_multiplicity(&mgr, tags::BOUNDING_POLYGON, &mut log));
        // absent and empty attributes are not checked
        assert!(check_multiplicity(&mgr, tags::ABORT_REASON, &mut log));
        assert!(check_multiplicity(&mgr, tags::ALARM_DECISION, &mut log));
        assert_eq!(log.num_errors(), 1);
    }

    #[test]
    fn enumerated_values() {
        let mut mgr = dataset();
        let mut log = ErrorLog::new();
        log.ignore_redirect(true);
        mgr.put_str(tags::ALARM_DECISION, VR::CS, "MAYBE").unwrap();
        assert!(!check_enumerated(&mgr, tags::ALARM_DECISION, &["ALARM", "CLEAR"], &mut log));
        mgr.put_str(tags::ALARM_DECISION, VR::CS, "CLEAR").unwrap();
        assert!(check_enumerated(&mgr, tags::ALARM_DECISION, &["ALARM", "CLEAR"], &mut log));
        assert_eq!(log.num_errors(), 1);
    }
}
