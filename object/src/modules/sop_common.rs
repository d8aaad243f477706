//! The SOP Common module.
//!
//! This module keeps its fields as attributes,
//! so that [`get_attributes`](Module::get_attributes)
//! can hand out references instead of copies.
use super::report_unset;
use crate::module::{check_multiplicity, check_requirement, Module, Requirement};
use dicos_core::chrono::{NaiveDate, NaiveTime};
use dicos_core::value::ConvertValueError;
use dicos_core::{Attribute, AttributeManager, ErrorLog, SetValueError, Tag, VR};
use dicos_dictionary_std::tags;
use dicos_encoding::SpecificCharacterSet;

/// The SOP identification attributes of a DICOS object.
#[derive(Debug, Clone, PartialEq)]
pub struct SopCommonModule {
    sop_class_uid: Attribute,
    sop_instance_uid: Attribute,
    specific_character_set: Option<Attribute>,
    instance_creation_date: Option<Attribute>,
    instance_creation_time: Option<Attribute>,
}

impl Default for SopCommonModule {
    fn default() -> Self {
        SopCommonModule {
            sop_class_uid: Attribute::empty(tags::SOP_CLASS_UID, VR::UI),
            sop_instance_uid: Attribute::empty(tags::SOP_INSTANCE_UID, VR::UI),
            specific_character_set: None,
            instance_creation_date: None,
            instance_creation_time: None,
        }
    }
}

impl SopCommonModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a module with the given SOP class and instance.
    pub fn with_uids(sop_class_uid: &str, sop_instance_uid: &str) -> Result<Self, SetValueError> {
        let mut module = Self::default();
        module.set_sop_class_uid(sop_class_uid)?;
        module.set_sop_instance_uid(sop_instance_uid)?;
        Ok(module)
    }

    pub fn sop_class_uid(&self) -> Option<&str> {
        self.sop_class_uid.string().ok()
    }

    pub fn set_sop_class_uid(&mut self, uid: &str) -> Result<(), SetValueError> {
        self.sop_class_uid.set_str(uid)
    }

    pub fn sop_instance_uid(&self) -> Option<&str> {
        self.sop_instance_uid.string().ok()
    }

    pub fn set_sop_instance_uid(&mut self, uid: &str) -> Result<(), SetValueError> {
        self.sop_instance_uid.set_str(uid)
    }

    /// The declared character sets, if any.
    pub fn specific_character_set(&self) -> &[String] {
        self.specific_character_set
            .as_ref()
            .and_then(|a| a.strings().ok())
            .unwrap_or_default()
    }

    /// Declare the character set of the object's text values,
    /// e.g. `ISO_IR 192` for UTF-8.
    pub fn set_specific_character_set(&mut self, charset: SpecificCharacterSet) {
        let text = charset.to_string();
        self.specific_character_set = Attribute::from_text(tags::SPECIFIC_CHARACTER_SET, VR::CS, &text).ok();
    }

    pub fn instance_creation_date(&self) -> Option<Result<NaiveDate, ConvertValueError>> {
        self.instance_creation_date.as_ref().map(|a| a.value().to_date())
    }

    pub fn instance_creation_time(&self) -> Option<Result<NaiveTime, ConvertValueError>> {
        self.instance_creation_time.as_ref().map(|a| a.value().to_time())
    }

    /// Record the instance creation date and time.
    pub fn set_instance_creation(&mut self, date: NaiveDate, time: NaiveTime) {
        let date = date.format("%Y%m%d").to_string();
        let time = time.format("%H%M%S").to_string();
        self.instance_creation_date = Attribute::from_text(tags::INSTANCE_CREATION_DATE, VR::DA, &date).ok();
        self.instance_creation_time = Attribute::from_text(tags::INSTANCE_CREATION_TIME, VR::TM, &time).ok();
    }

    fn copy_from(&mut self, mgr: &AttributeManager<'_>, tag: Tag) {
        let attr = mgr.find_attribute(tag).cloned();
        match tag {
            tags::SOP_CLASS_UID => {
                self.sop_class_uid = attr.unwrap_or_else(|| Attribute::empty(tag, VR::UI))
            }
            tags::SOP_INSTANCE_UID => {
                self.sop_instance_uid = attr.unwrap_or_else(|| Attribute::empty(tag, VR::UI))
            }
            tags::SPECIFIC_CHARACTER_SET => self.specific_character_set = attr,
            tags::INSTANCE_CREATION_DATE => self.instance_creation_date = attr,
            tags::INSTANCE_CREATION_TIME => self.instance_creation_time = attr,
            _ => {}
        }
    }

    const TAGS: [Tag; 5] = [
        tags::SPECIFIC_CHARACTER_SET,
        tags::INSTANCE_CREATION_DATE,
        tags::INSTANCE_CREATION_TIME,
        tags::SOP_CLASS_UID,
        tags::SOP_INSTANCE_UID,
    ];
}

/// Whether any text value in the tree needs more than the default repertoire.
fn has_extended_characters(mgr: &AttributeManager<'_>) -> bool {
    mgr.iter().any(|attr| {
        if let Some(items) = attr.items() {
            return items.iter().any(has_extended_characters);
        }
        attr.strings()
            .map(|values| values.iter().any(|s| !s.is_ascii()))
            .unwrap_or(false)
    })
}

impl Module for SopCommonModule {
    fn set_attributes(&mut self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> bool {
        for tag in Self::TAGS {
            self.copy_from(mgr, tag);
        }
        check_requirement(mgr, tags::SOP_CLASS_UID, Requirement::Type1, true, log)
            & check_requirement(mgr, tags::SOP_INSTANCE_UID, Requirement::Type1, true, log)
    }

    fn get_attributes<'a>(&'a self, mgr: &mut AttributeManager<'a>, log: &mut ErrorLog) -> bool {
        let mut ok = true;
        for attr in [&self.sop_class_uid, &self.sop_instance_uid] {
            if attr.is_empty() {
                ok &= report_unset(attr.tag(), log);
            }
            mgr.set_reference(attr);
        }
        let optional = [
            &self.specific_character_set,
            &self.instance_creation_date,
            &self.instance_creation_time,
        ];
        for attr in optional.into_iter().flatten() {
            mgr.set_reference(attr);
        }
        ok
    }

    fn update_attributes(&mut self, mgr: &AttributeManager<'_>, _log: &mut ErrorLog) -> bool {
        for tag in Self::TAGS {
            if mgr.has_attribute(tag) {
                self.copy_from(mgr, tag);
            }
        }
        true
    }

    fn is_valid(&self, mgr: &AttributeManager<'_>, log: &mut ErrorLog) -> bool {
        let extended = has_extended_characters(mgr);
        let mut ok = check_requirement(mgr, tags::SOP_CLASS_UID, Requirement::Type1, true, log);
        ok &= check_requirement(mgr, tags::SOP_INSTANCE_UID, Requirement::Type1, true, log);
        ok &= check_requirement(
            mgr,
            tags::SPECIFIC_CHARACTER_SET,
            Requirement::Type1C,
            extended,
            log,
        );
        ok &= check_requirement(mgr, tags::INSTANCE_CREATION_DATE, Requirement::Type3, false, log);
        ok &= check_requirement(mgr, tags::INSTANCE_CREATION_TIME, Requirement::Type3, false, log);
        for tag in Self::TAGS {
            ok &= check_multiplicity(mgr, tag, log);
        }

        if let Some(attr) = mgr.find_attribute(tags::SPECIFIC_CHARACTER_SET) {
            for term in attr.strings().unwrap_or_default() {
                if SpecificCharacterSet::from_code(term).is_none() {
                    log.add_error_at(
                        VR::CS,
                        tags::SPECIFIC_CHARACTER_SET,
                        format!("Unsupported character set `{}`", term),
                    );
                    ok = false;
                }
            }
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::ModuleState;
    use dicos_dictionary_std::uids;

    fn quiet_log() -> ErrorLog {
        let mut log = ErrorLog::new();
        log.ignore_redirect(true);
        log
    }

    #[test]
    fn emits_references_to_owned_fields() {
        let mut module =
            SopCommonModule::with_uids(uids::DICOS_CT_IMAGE_STORAGE, "1.2.3.4").unwrap();
        module.set_instance_creation(
            NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            NaiveTime::from_hms_opt(13, 45, 2).unwrap(),
        );
        let mut log = quiet_log();
        let mut mgr = AttributeManager::new();
        assert!(module.get_attributes(&mut mgr, &mut log));

        assert_eq!(mgr.len(), 4);
        assert!(mgr.is_reference(tags::SOP_INSTANCE_UID));
        assert_eq!(mgr.string(tags::SOP_INSTANCE_UID), Some("1.2.3.4"));
        assert_eq!(mgr.string(tags::INSTANCE_CREATION_DATE), Some("20240517"));
        assert_eq!(mgr.string(tags::INSTANCE_CREATION_TIME), Some("134502"));
        assert!(!mgr.has_attribute(tags::SPECIFIC_CHARACTER_SET));
        assert!(module.is_valid(&mgr, &mut log));
        assert!(log.is_empty());
    }

    #[test]
    fn load_from_attributes() {
        let mut mgr = AttributeManager::new();
        mgr.put_str(tags::SOP_CLASS_UID, VR::UI, uids::DICOS_THREAT_DETECTION_REPORT_STORAGE)
            .unwrap();
        mgr.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5").unwrap();
        mgr.put_str(tags::INSTANCE_CREATION_DATE, VR::DA, "20231130").unwrap();

        let mut log = quiet_log();
        let mut module = SopCommonModule::new();
        assert_eq!(module.load(&mgr, &mut log), ModuleState::Valid);
        assert_eq!(module.sop_instance_uid(), Some("1.2.3.4.5"));
        assert_eq!(
            module.instance_creation_date().unwrap().unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 30).unwrap()
        );
        assert!(module.instance_creation_time().is_none());

        // partial update keeps the other fields
        let mut update = AttributeManager::new();
        update.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.6").unwrap();
        assert!(module.update_attributes(&update, &mut log));
        assert_eq!(module.sop_instance_uid(), Some("1.2.3.4.6"));
        assert_eq!(
            module.sop_class_uid(),
            Some(uids::DICOS_THREAT_DETECTION_REPORT_STORAGE)
        );
        assert!(module.instance_creation_date().is_some());
    }

    #[test]
    fn missing_uids_fail_to_load() {
        let mut mgr = AttributeManager::new();
        mgr.put_str(tags::SOP_CLASS_UID, VR::UI, uids::DICOS_CT_IMAGE_STORAGE)
            .unwrap();
        let mut log = quiet_log();
        let mut module = SopCommonModule::new();
        assert_eq!(module.load(&mgr, &mut log), ModuleState::Invalid);
        assert_eq!(log.num_errors(), 1);

        let mut out = AttributeManager::new();
        assert!(!module.get_attributes(&mut out, &mut log));
        assert_eq!(log.num_errors(), 2);
    }

    #[test]
    fn extended_text_requires_character_set() {
        let mut module = SopCommonModule::with_uids(uids::DICOS_CT_IMAGE_STORAGE, "1.2.3").unwrap();
        let mut item = AttributeManager::new();
        item.put_str(tags::THREAT_CATEGORY_DESCRIPTION, VR::LT, "Объект")
            .unwrap();
        let threats = Attribute::sequence(tags::THREAT_SEQUENCE, vec![item]);
        let mut log = quiet_log();

        {
            let mut mgr = AttributeManager::new();
            assert!(module.get_attributes(&mut mgr, &mut log));
            mgr.set_reference(&threats);
            assert!(!module.is_valid(&mgr, &mut log));
            assert_eq!(log.num_errors(), 1);
        }

        module.set_specific_character_set(SpecificCharacterSet::IsoIr192);
        assert_eq!(module.specific_character_set(), &["ISO_IR 192".to_string()]);
        let mut mgr = AttributeManager::new();
        assert!(module.get_attributes(&mut mgr, &mut log));
        mgr.set_reference(&threats);
        assert!(module.is_valid(&mgr, &mut log));
        assert_eq!(log.num_errors(), 1);
    }
}
