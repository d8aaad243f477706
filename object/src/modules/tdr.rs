//! The Threat Detection Report module.
//!
//! A Threat Detection Report (TDR) summarizes the outcome
//! of the inspection of one object of inspection:
//! who produced the report, whether the inspection was completed,
//! the alarm decision and the list of potential threat objects.
use super::{put_texts, read_coded, read_text, read_texts, read_u16, report_unset, CodedValue};
use crate::module::{
    check_enumerated, check_multiplicity, check_requirement, Module, Requirement,
};
use dicos_core::{Attribute, AttributeManager, ErrorLog, Item, Tag, VR};
use dicos_dictionary_std::tags;
use std::fmt;

macro_rules! coded_value {
    ($(#[$meta:meta])* $name: ident { $($(#[$vmeta:meta])* $variant: ident => $code: literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl CodedValue for $name {
            const ALL: &'static [Self] = &[$($name::$variant,)*];

            fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

coded_value! {
    /// TDR Type (4010,1027): the producer of the report.
    TdrType {
        /// An automatic threat detection algorithm.
        Machine => "MACHINE",
        /// A human operator.
        Operator => "OPERATOR",
        /// The known contents of the object, e.g. for testing.
        GroundTruth => "GROUND_TRUTH",
        Other => "OTHER",
    }
}

coded_value! {
    /// Abort Flag (4010,1024): whether the inspection was completed.
    AbortFlag {
        Success => "SUCCESS",
        Abort => "ABORT",
    }
}

coded_value! {
    /// Alarm Decision (4010,1031).
    AlarmDecision {
        Alarm => "ALARM",
        Clear => "CLEAR",
        Unknown => "UNKNOWN",
    }
}

/// One potential threat object of the Threat Sequence (4010,1011).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThreatItem {
    /// Potential Threat Object ID (4010,1010), Type 1.
    pub potential_threat_object_id: u16,
    /// Threat Category Description (4010,1013), Type 3.
    pub threat_category_description: Option<String>,
}

impl ThreatItem {
    pub fn new(potential_threat_object_id: u16) -> Self {
        ThreatItem {
            potential_threat_object_id,
            threat_category_description: None,
        }
    }

    fn from_item(item: &Item, log: &mut ErrorLog) -> Option<Self> {
        let id = read_u16(item, tags::POTENTIAL_THREAT_OBJECT_ID, log)?;
        Some(ThreatItem {
            potential_threat_object_id: id,
            threat_category_description: read_text(item, tags::THREAT_CATEGORY_DESCRIPTION, log),
        })
    }

    fn to_item(&self, log: &mut ErrorLog) -> Item {
        let mut item = Item::new();
        item.set_attribute(Attribute::new_unchecked(
            tags::POTENTIAL_THREAT_OBJECT_ID,
            VR::US,
            self.potential_threat_object_id.into(),
        ));
        if let Some(description) = &self.threat_category_description {
            put_texts(
                &mut item,
                tags::THREAT_CATEGORY_DESCRIPTION,
                VR::LT,
                [description.as_str()],
                log,
            );
        }
        item
    }
}

/// The typed fields of a Threat Detection Report.
///
/// Abort Reason is conditionally required:
/// it must be present whenever the Abort Flag is `ABORT`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThreatDetectionReportModule {
    /// TDR Type (4010,1027), Type 1.
    pub tdr_type: Option<TdrType>,
    /// Abort Flag (4010,1024), Type 1.
    pub abort_flag: Option<AbortFlag>,
    /// Abort Reason (4010,1021), Type 1C.
    pub abort_reason: Vec<String>,
    /// Alarm Decision (4010,1031), Type 2.
    pub alarm_decision: Option<AlarmDecision>,
    /// Alarm Decision Time (4010,102B), Type 2.
    pub alarm_decision_time: Option<String>,
    /// Number of Total Objects (4010,1033), Type 1.
    pub number_of_total_objects: Option<u16>,
    /// Number of Alarm Objects (4010,1034), Type 1.
    pub number_of_alarm_objects: Option<u16>,
    /// Threat Sequence (4010,1011), Type 2.
    pub threats: Vec<ThreatItem>,
}

impl ThreatDetectionReportModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the report declares an aborted inspection.
    pub fn is_aborted(&self) -> bool {
        self.abort_flag == Some(AbortFlag::Abort)
    }

    fn read_field(&mut self, mgr: &AttributeManager<'_>, tag: Tag, log: &mut ErrorLog) {
        match tag {
            tags::TDR_TYPE => self.tdr_type = read_coded(mgr, tag, log),
            tags::ABORT_FLAG => self.abort_flag = read_coded(mgr, tag, log),
            tags::ABORT_REASON => self.abort_reason = read_texts(mgr, tag, log),
            tags::ALARM_DECISION => self.alarm_decision = read_coded(mgr, tag, log),
            tags::ALARM_DECISION_TIME => self.alarm_decision_time = read_text(mgr, tag, log),
            tags::NUMBER_OF_TOTAL_OBJECTS => self.number_of_total_objects = read_u16(mgr, tag, log),
            tags::NUMBER_OF_ALARM_OBJECTS => self.number_of_alarm_objects = read_u16(mgr, tag, log),
            tags::THREAT_SEQUENCE => {
                log.push_sequence(tag);
                self.threats = mgr
                    .items(tag)
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|item| ThreatItem::from_item(item, log))
                    .collect();
                log.pop_sequence();
            }
            _ => {}
        }
    }

    const TAGS: [Tag; 8] = [
        tags::THREAT_SEQUENCE,
        tags::ABORT_REASON,
        tags::ABORT_FLAG,
        tags::TDR_TYPE,
        tags::ALARM_DECISION_TIME,
        tags::ALARM_DECISION,
        tags::NUMBER_OF_TOTAL_OBJECTS,
        tags::NUMBER_OF_ALARM_OBJECTS,
    ];
}

/// Whether the Abort Reason is required by the data set.
fn abort_reason_required(mgr: &AttributeManager<'_>) -> bool {
    mgr.string(tags::ABORT_FLAG)
        .and_then(AbortFlag::from_code)
        .map_or(false, |flag| flag == AbortFlag::Abort)
}

fn put_u16(mgr: &mut AttributeManager<'_>, tag: Tag, value: Option<u16>, log: &mut ErrorLog) -> bool {
    match value {
        Some(v) => {
            mgr.set_attribute(Attribute::new_unchecked(tag, VR::US, v.into()));
            true
        }
        None => report_unset(tag, log),
    }
}

impl Module for ThreatDetectionReportModule {
    fn set_attributes(&mut self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> bool {
        let errors = log.num_errors();
        *self = Self::default();
        for tag in Self::TAGS {
            self.read_field(mgr, tag, log);
        }
        for tag in [
            tags::TDR_TYPE,
            tags::ABORT_FLAG,
            tags::NUMBER_OF_TOTAL_OBJECTS,
            tags::NUMBER_OF_ALARM_OBJECTS,
        ] {
            check_requirement(mgr, tag, Requirement::Type1, true, log);
        }
        log.num_errors() == errors
    }

    fn get_attributes<'a>(&'a self, mgr: &mut AttributeManager<'a>, log: &mut ErrorLog) -> bool {
        let mut ok = true;

        match self.tdr_type {
            Some(t) => ok &= put_texts(mgr, tags::TDR_TYPE, VR::CS, [t.code()], log),
            None => ok &= report_unset(tags::TDR_TYPE, log),
        }
        match self.abort_flag {
            Some(flag) => ok &= put_texts(mgr, tags::ABORT_FLAG, VR::CS, [flag.code()], log),
            None => ok &= report_unset(tags::ABORT_FLAG, log),
        }
        if !self.abort_reason.is_empty() {
            ok &= put_texts(
                mgr,
                tags::ABORT_REASON,
                VR::CS,
                self.abort_reason.iter().map(String::as_str),
                log,
            );
        }
        ok &= put_texts(
            mgr,
            tags::ALARM_DECISION,
            VR::CS,
            self.alarm_decision.map(AlarmDecision::code),
            log,
        );
        ok &= put_texts(
            mgr,
            tags::ALARM_DECISION_TIME,
            VR::DT,
            self.alarm_decision_time.as_deref(),
            log,
        );
        ok &= put_u16(mgr, tags::NUMBER_OF_TOTAL_OBJECTS, self.number_of_total_objects, log);
        ok &= put_u16(mgr, tags::NUMBER_OF_ALARM_OBJECTS, self.number_of_alarm_objects, log);

        log.push_sequence(tags::THREAT_SEQUENCE);
        let items = self.threats.iter().map(|t| t.to_item(log)).collect();
        log.pop_sequence();
        mgr.set_attribute(Attribute::sequence(tags::THREAT_SEQUENCE, items));

        ok
    }

    fn update_attributes(&mut self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> bool {
        let errors = log.num_errors();
        for tag in Self::TAGS {
            if mgr.has_attribute(tag) {
                self.read_field(mgr, tag, log);
            }
        }
        log.num_errors() == errors
    }

    fn is_valid(&self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> bool {
        let mut ok = true;
        for tag in [
            tags::TDR_TYPE,
            tags::ABORT_FLAG,
            tags::NUMBER_OF_TOTAL_OBJECTS,
            tags::NUMBER_OF_ALARM_OBJECTS,
        ] {
            ok &= check_requirement(mgr, tag, Requirement::Type1, true, log);
        }
        ok &= check_requirement(
            mgr,
            tags::ABORT_REASON,
            Requirement::Type1C,
            abort_reason_required(mgr),
            log,
        );
        for tag in [
            tags::ALARM_DECISION,
            tags::ALARM_DECISION_TIME,
            tags::THREAT_SEQUENCE,
        ] {
            ok &= check_requirement(mgr, tag, Requirement::Type2, true, log);
        }
        for tag in Self::TAGS {
            ok &= check_multiplicity(mgr, tag, log);
        }

        ok &= check_enumerated(mgr, tags::TDR_TYPE, &TdrType::codes(), log);
        ok &= check_enumerated(mgr, tags::ABORT_FLAG, &AbortFlag::codes(), log);
        ok &= check_enumerated(mgr, tags::ALARM_DECISION, &AlarmDecision::codes(), log);

        let total = mgr
            .find_attribute(tags::NUMBER_OF_TOTAL_OBJECTS)
            .and_then(|a| a.value().uint16().ok());
        let alarm = mgr
            .find_attribute(tags::NUMBER_OF_ALARM_OBJECTS)
            .and_then(|a| a.value().uint16().ok());
        if let (Some(total), Some(alarm)) = (total, alarm) {
            if alarm > total {
                log.add_error_at(
                    VR::US,
                    tags::NUMBER_OF_ALARM_OBJECTS,
                    format!("{} alarm objects out of {} objects in total", alarm, total),
                );
                ok = false;
            }
        }

        let items = mgr.items(tags::THREAT_SEQUENCE).unwrap_or_default();
        log.push_sequence(tags::THREAT_SEQUENCE);
        for item in items {
            ok &= check_requirement(item, tags::POTENTIAL_THREAT_OBJECT_ID, Requirement::Type1, true, log);
            ok &= check_requirement(
                item,
                tags::THREAT_CATEGORY_DESCRIPTION,
                Requirement::Type3,
                false,
                log,
            );
        }
        log.pop_sequence();

        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::ModuleState;

    fn quiet_log() -> ErrorLog {
        let mut log = ErrorLog::new();
        log.ignore_redirect(true);
        log
    }

    fn report() -> ThreatDetectionReportModule {
        ThreatDetectionReportModule {
            tdr_type: Some(TdrType::Machine),
            abort_flag: Some(AbortFlag::Success),
            number_of_total_objects: Some(2),
            number_of_alarm_objects: Some(1),
            threats: vec![
                ThreatItem::new(0),
                ThreatItem {
                    potential_threat_object_id: 1,
                    threat_category_description: Some("Sharp object".to_string()),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn type_2_attributes_are_emitted_empty() {
        let module = report();
        let mut log = quiet_log();
        let mut mgr = AttributeManager::new();
        assert!(module.get_attributes(&mut mgr, &mut log));
        assert!(log.is_empty());

        let decision = mgr.find_attribute(tags::ALARM_DECISION).unwrap();
        assert!(decision.is_empty());
        assert!(mgr.find_attribute(tags::ALARM_DECISION_TIME).unwrap().is_empty());
        assert!(!mgr.has_attribute(tags::ABORT_REASON));
        assert_eq!(mgr.string(tags::TDR_TYPE), Some("MACHINE"));
        assert_eq!(mgr.items(tags::THREAT_SEQUENCE).map(|i| i.len()), Some(2));

        assert!(module.is_valid(&mgr, &mut log));
        assert!(log.is_empty());
    }

    #[test]
    fn abort_reason_follows_abort_flag() {
        let mut module = report();
        let mut log = quiet_log();
        let mut mgr = AttributeManager::new();
        assert!(module.get_attributes(&mut mgr, &mut log));
        let mut mgr = mgr.to_owned_manager();

        // no trigger, no abort reason needed
        assert!(module.is_valid(&mgr, &mut log));

        mgr.put_str(tags::ABORT_FLAG, VR::CS, "ABORT").unwrap();
        assert!(!module.is_valid(&mgr, &mut log));
        assert_eq!(log.num_errors(), 1);
        assert_eq!(
            log.errors().next().unwrap().message(),
            "Type 1C attribute AbortReason is missing"
        );

        mgr.put_str(tags::ABORT_REASON, VR::CS, "OVERSIZE").unwrap();
        assert!(module.is_valid(&mgr, &mut log));
        assert_eq!(log.num_errors(), 1);

        assert_eq!(module.reload(&mgr, &mut log), ModuleState::Valid);
        assert!(module.is_aborted());
        assert_eq!(module.abort_reason, vec!["OVERSIZE".to_string()]);
        assert_eq!(module.tdr_type, Some(TdrType::Machine));
    }

    #[test]
    fn load_reads_typed_fields() {
        let mut mgr = AttributeManager::new();
        mgr.put_str(tags::TDR_TYPE, VR::CS, "OPERATOR").unwrap();
        mgr.put_str(tags::ABORT_FLAG, VR::CS, "SUCCESS").unwrap();
        mgr.put_str(tags::ALARM_DECISION, VR::CS, "ALARM").unwrap();
        mgr.put_str(tags::ALARM_DECISION_TIME, VR::DT, "20240101120000").unwrap();
        mgr.put(tags::NUMBER_OF_TOTAL_OBJECTS, VR::US, 1_u16).unwrap();
        mgr.put(tags::NUMBER_OF_ALARM_OBJECTS, VR::US, 1_u16).unwrap();
        let mut item = Item::new();
        item.put(tags::POTENTIAL_THREAT_OBJECT_ID, VR::US, 7_u16).unwrap();
        mgr.set_attribute(Attribute::sequence(tags::THREAT_SEQUENCE, vec![item]));

        let mut log = quiet_log();
        let mut module = ThreatDetectionReportModule::new();
        assert_eq!(module.load(&mgr, &mut log), ModuleState::Valid);
        assert_eq!(module.tdr_type, Some(TdrType::Operator));
        assert_eq!(module.alarm_decision, Some(AlarmDecision::Alarm));
        assert_eq!(module.alarm_decision_time.as_deref(), Some("20240101120000"));
        assert_eq!(module.threats, vec![ThreatItem::new(7)]);
        assert!(log.is_empty());
    }

    #[test]
    fn invalid_content_is_reported() {
        let mut mgr = AttributeManager::new();
        mgr.put_str(tags::TDR_TYPE, VR::CS, "ROBOT").unwrap();
        mgr.put_str(tags::ABORT_FLAG, VR::CS, "SUCCESS").unwrap();
        mgr.put(tags::NUMBER_OF_TOTAL_OBJECTS, VR::US, 1_u16).unwrap();
        mgr.put(tags::NUMBER_OF_ALARM_OBJECTS, VR::US, 3_u16).unwrap();
        mgr.set_attribute(Attribute::sequence(
            tags::THREAT_SEQUENCE,
            vec![Item::new()],
        ));

        let mut log = quiet_log();
        let mut module = ThreatDetectionReportModule::new();
        // unknown TDR type
        assert_eq!(module.load(&mgr, &mut log), ModuleState::Invalid);
        assert_eq!(log.num_errors(), 1);

        let mut log = quiet_log();
        assert!(!module.is_valid(&mgr, &mut log));
        let paths: Vec<_> = log.errors().map(|e| e.path().to_string()).collect();
        assert!(paths.contains(&"CS(4010,1027)".to_string()));
        assert!(paths.contains(&"US(4010,1034)".to_string()));
        assert!(paths.contains(&"SQ(4010,1011) -> US(4010,1010)".to_string()));
        // missing Alarm Decision and Alarm Decision Time as well
        assert_eq!(log.num_errors(), 5);
    }

    #[test]
    fn unset_type_1_fields_are_not_emitted() {
        let module = ThreatDetectionReportModule::new();
        let mut log = quiet_log();
        let mut mgr = AttributeManager::new();
        assert!(!module.get_attributes(&mut mgr, &mut log));
        assert_eq!(log.num_errors(), 4);
        assert!(!mgr.has_attribute(tags::TDR_TYPE));
        assert!(mgr.items(tags::THREAT_SEQUENCE).unwrap().is_empty());
    }
}
